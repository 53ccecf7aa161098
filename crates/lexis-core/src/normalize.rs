use unicode_normalization::UnicodeNormalization;

/// Entities decoded before tag stripping. `&amp;` goes last so each pass
/// unwraps exactly one level of escaping.
const ENTITIES: [(&str, &str); 7] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&quot;", "\""),
    ("&amp;", "&"),
];

/// Canonicalize a raw text fragment pulled out of a page.
///
/// Decodes the common entities, strips tags, removes zero-width and
/// bidi format characters, applies NFKC, collapses whitespace runs to a
/// single space and trims. The result is a fixed point: running it again
/// returns the same string.
pub fn normalize_text(raw: &str) -> String {
    let mut current = single_pass(raw);

    // After the first pass every change shortens the text, so this ends
    loop {
        let next = single_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Same as [`normalize_text`] for loosely typed input. Anything that is not
/// a JSON string normalizes to an empty string.
pub fn normalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => normalize_text(text),
        _ => String::new(),
    }
}

fn single_pass(text: &str) -> String {
    let decoded = decode_entities(text);
    let stripped = strip_tags(&decoded);

    let visible: String = stripped.chars().filter(|c| !is_format_char(*c)).collect();
    let composed: String = visible.nfkc().collect();

    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

/// Drops every `<...>` span. A `<` with no closing `>` is kept as text.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);

    out
}

fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
    )
}
