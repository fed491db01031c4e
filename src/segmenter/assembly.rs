// WHY: final coarsening; single-word units that slipped through the earlier
// passes are reabsorbed here unless a definite terminator closed the sentence

/// Number of whitespace-delimited words in the trimmed unit.
fn word_count(unit: &str) -> usize {
    unit.split_whitespace().count()
}

/// Assemble clause-like units into sentences.
///
/// A sentence closes before the incoming unit when the previous unit ended
/// on a definite terminator, or when the sentence already has multi-word
/// content and the incoming unit is itself multi-word. Otherwise the unit
/// is appended, so short stragglers like `" 4?!"` after `"no."` rejoin the
/// sentence they belong to.
pub fn sentence_merge(units: Vec<String>, definite_terminals: &[char]) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut sentence = String::new();
    let mut has_words = false;
    let mut previous_ending: Option<char> = None;

    for unit in units {
        let words = word_count(&unit);
        let after_definite_terminal =
            previous_ending.map_or(false, |ch| definite_terminals.contains(&ch));

        if after_definite_terminal || (has_words && words > 1) {
            sentences.push(std::mem::take(&mut sentence));
            has_words = words > 1;
        } else {
            has_words = has_words || words > 1;
        }

        previous_ending = unit.chars().last();
        sentence.push_str(&unit);
    }
    if !sentence.is_empty() {
        sentences.push(sentence);
    }

    sentences
}
