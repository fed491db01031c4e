// WHY: a fragment ending in a short capitalized word plus '.' is treated as
// an abbreviation and glued to the next fragment; status is judged on the
// incoming fragment alone, so "F." + "B." + "I." chains keep extending even
// though the merged string's last word ("F.B.") is past the length cap

/// Maximum length (in code points) of the last word for it to count as an
/// abbreviation.
const MAX_ABBREVIATION_LEN: usize = 3;

/// True when the fragment's last whitespace-delimited word looks like a
/// capitalized abbreviation: starts uppercase, fragment ends with `.`, and
/// the word is at most [`MAX_ABBREVIATION_LEN`] code points long.
fn ends_with_abbreviation(fragment: &str) -> bool {
    let trimmed = fragment.trim();
    let last_word = match trimmed.split_whitespace().last() {
        Some(word) => word,
        None => return false,
    };
    let starts_uppercase = last_word
        .chars()
        .next()
        .map(char::is_uppercase)
        .unwrap_or(false);

    starts_uppercase
        && trimmed.ends_with('.')
        && last_word.chars().count() <= MAX_ABBREVIATION_LEN
}

/// Glue fragments ending in a capitalized abbreviation onto the following
/// fragment instead of letting them close a sentence.
///
/// For example, `["... the F.", "B.", "I.", " James B.", " Comey was fired."]`
/// collapses into a single fragment ending at `"fired."`.
pub fn abbreviation_merge(fragments: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut previous_is_abbreviation = false;

    for fragment in fragments {
        let is_abbreviation = ends_with_abbreviation(&fragment);

        let current = if previous_is_abbreviation {
            match merged.pop() {
                Some(mut previous) => {
                    previous.push_str(&fragment);
                    previous
                }
                None => fragment,
            }
        } else {
            fragment
        };

        previous_is_abbreviation = is_abbreviation;
        merged.push(current);
    }

    merged
}
