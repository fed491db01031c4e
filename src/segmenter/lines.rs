// WHY: each line owns its trailing linebreak run, so the produced lines
// concatenate back to the input exactly

/// Split text into lines on runs of linebreak characters, keeping each run
/// attached to the line it terminates.
///
/// The final element may be empty (input ending in a linebreak run); blank
/// lines are the driver's concern, not this function's.
pub fn linebreak_split(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut in_break = false;

    for ch in text.chars() {
        let is_break = ch == '\r' || ch == '\n';
        if in_break && !is_break {
            lines.push(std::mem::take(&mut line));
        }
        line.push(ch);
        in_break = is_break;
    }
    lines.push(line);

    lines
}
