// WHY: quote canonicalization runs once, before line splitting; every later
// pass may then assume quotes are plain ASCII '\'' and '"'

/// Quote-relevant HTML entities and the character each decodes to.
/// Entities are matched as whole sequences, `&` through `;`.
const QUOTE_ENTITIES: &[(&str, char)] = &[
    ("&quot;", '"'),
    ("&#34;", '"'),
    ("&#034;", '"'),
    ("&#x22;", '"'),
    ("&apos;", '\''),
    ("&#39;", '\''),
    ("&#039;", '\''),
    ("&#x27;", '\''),
    ("&lsquo;", '\u{2018}'),
    ("&rsquo;", '\u{2019}'),
    ("&sbquo;", '\u{201A}'),
    ("&ldquo;", '\u{201C}'),
    ("&rdquo;", '\u{201D}'),
    ("&bdquo;", '\u{201E}'),
    ("&laquo;", '\u{00AB}'),
    ("&raquo;", '\u{00BB}'),
    ("&lsaquo;", '\u{2039}'),
    ("&rsaquo;", '\u{203A}'),
    ("&#8216;", '\u{2018}'),
    ("&#8217;", '\u{2019}'),
    ("&#8218;", '\u{201A}'),
    ("&#8219;", '\u{201B}'),
    ("&#8220;", '\u{201C}'),
    ("&#8221;", '\u{201D}'),
    ("&#8222;", '\u{201E}'),
    ("&#8223;", '\u{201F}'),
    ("&#8249;", '\u{2039}'),
    ("&#8250;", '\u{203A}'),
    ("&#171;", '\u{00AB}'),
    ("&#187;", '\u{00BB}'),
    ("&#x2018;", '\u{2018}'),
    ("&#x2019;", '\u{2019}'),
    ("&#x201A;", '\u{201A}'),
    ("&#x201B;", '\u{201B}'),
    ("&#x201C;", '\u{201C}'),
    ("&#x201D;", '\u{201D}'),
    ("&#x201E;", '\u{201E}'),
    ("&#x201F;", '\u{201F}'),
    ("&#x2039;", '\u{2039}'),
    ("&#x203A;", '\u{203A}'),
    ("&#xAB;", '\u{00AB}'),
    ("&#xBB;", '\u{00BB}'),
];

/// Map a typographic quote variant to its canonical ASCII quote.
///
/// Covers the Windows-1252 C1 legacy code points, curly single/double
/// quotes, low-9 and high-reversed-9 forms, and angle quotes. Every other
/// character is left untouched.
fn canonical_quote(ch: char) -> Option<char> {
    match ch {
        // single-quote family
        '\u{0082}' // single low-9 (cp1252 legacy)
        | '\u{008B}' // single left angle (cp1252 legacy)
        | '\u{0091}' // left single (cp1252 legacy)
        | '\u{0092}' // right single (cp1252 legacy)
        | '\u{009B}' // single right angle (cp1252 legacy)
        | '\u{2018}' // left single
        | '\u{2019}' // right single
        | '\u{201A}' // single low-9
        | '\u{201B}' // single high-reversed-9
        | '\u{2039}' // single left angle
        | '\u{203A}' // single right angle
        => Some('\''),
        // double-quote family
        '\u{0084}' // double low-9 (cp1252 legacy)
        | '\u{0093}' // left double (cp1252 legacy)
        | '\u{0094}' // right double (cp1252 legacy)
        | '\u{00AB}' // left double angle
        | '\u{00BB}' // right double angle
        | '\u{201C}' // left double
        | '\u{201D}' // right double
        | '\u{201E}' // double low-9
        | '\u{201F}' // double high-reversed-9
        => Some('"'),
        _ => None,
    }
}

/// Decode quote-relevant HTML entities, then rewrite typographic quote and
/// apostrophe variants to canonical ASCII `'` / `"`.
///
/// Unrecognized entities and all other characters pass through unchanged.
pub fn clean_unicode(text: &str) -> String {
    let decoded = decode_quote_entities(text);
    decoded
        .chars()
        .map(|ch| canonical_quote(ch).unwrap_or(ch))
        .collect()
}

/// Replace every whole-sequence match of a quote-relevant HTML entity with
/// the character it encodes. A lone `&` or an unknown entity is copied
/// verbatim.
fn decode_quote_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match entity_at(candidate) {
            Some((len, ch)) => {
                out.push(ch);
                rest = &candidate[len..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// If `text` starts with a known entity, return its byte length and
/// replacement character.
fn entity_at(text: &str) -> Option<(usize, char)> {
    QUOTE_ENTITIES
        .iter()
        .find(|(entity, _)| text.starts_with(entity))
        .map(|&(entity, ch)| (entity.len(), ch))
}
