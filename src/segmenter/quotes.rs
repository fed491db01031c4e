// WHY: the trailing-dialogue pattern is exactly [quote, space, lowercase]
// or a lone quote; broadening it changes output on existing inputs

/// True when the statement is a closing-quote continuation of the previous
/// statement: a lone `"` or `'` after trimming, or a fragment beginning
/// quote + space + lowercase letter (`" he said.`).
fn is_closing_quote(statement: &str) -> bool {
    let trimmed = statement.trim();
    if trimmed == "\"" || trimmed == "'" {
        return true;
    }

    let mut chars = statement.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('"' | '\''), Some(' '), Some(ch)) if ch.is_lowercase()
    )
}

/// Reattach closing-quote continuations to the previous statement, keeping
/// `"Quoted sentence." he said.` as one unit.
pub fn close_quotes_merge(statements: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for statement in statements {
        match merged.last_mut() {
            Some(previous) if is_closing_quote(&statement) => previous.push_str(&statement),
            _ => merged.push(statement),
        }
    }

    merged
}
