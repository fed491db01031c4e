// WHY: the classifier walks grapheme clusters, not bytes; a multi-codepoint
// cluster is never a terminal even when its first scalar is one

use unicode_segmentation::UnicodeSegmentation;

/// True when the grapheme is a single code point contained in `terminals`.
fn grapheme_is_terminal(grapheme: &str, terminals: &[char]) -> bool {
    let mut chars = grapheme.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(ch), None) if terminals.contains(&ch)
    )
}

/// Partition a line into alternating maximal runs of terminal and
/// non-terminal characters.
///
/// For example, `"There ... is. More!"` becomes
/// `["There ", "...", " is", ".", " More", "!"]`.
pub fn punctuation_split(line: &str, terminals: &[char]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut part = String::new();
    let mut in_terminal_run = false;
    let mut first = true;

    for grapheme in line.graphemes(true) {
        let is_terminal = grapheme_is_terminal(grapheme, terminals);
        if first {
            in_terminal_run = is_terminal;
            first = false;
        }
        if is_terminal != in_terminal_run {
            parts.push(std::mem::take(&mut part));
            in_terminal_run = is_terminal;
        }
        part.push_str(grapheme);
    }
    if !part.is_empty() {
        parts.push(part);
    }

    parts
}

/// Reattach any fragment that begins with a closing parenthesis to the
/// fragment before it, so a sentence-final parenthetical keeps its `)`.
pub fn parentheses_merge(parts: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for part in parts {
        match merged.last_mut() {
            Some(previous) if part.starts_with(')') => previous.push_str(&part),
            _ => merged.push(part),
        }
    }

    merged
}

/// Recombine alternating runs into clause-like units, each closed by a
/// decisive terminator.
///
/// A unit closes when the current fragment is a single terminal character,
/// or contains any definite terminator. Empty fragments are skipped without
/// resetting the accumulator.
pub fn punctuation_merge(
    parts: Vec<String>,
    terminals: &[char],
    definite_terminals: &[char],
) -> Vec<String> {
    let mut merges = Vec::new();
    let mut merge = String::new();

    for part in parts {
        if part.is_empty() {
            continue;
        }
        merge.push_str(&part);

        let mut chars = part.chars();
        let single_terminal = matches!(
            (chars.next(), chars.next()),
            (Some(ch), None) if terminals.contains(&ch)
        );
        if single_terminal || definite_terminals.iter().any(|t| part.contains(*t)) {
            merges.push(std::mem::take(&mut merge));
        }
    }
    if !merge.is_empty() {
        merges.push(merge);
    }

    merges
}
