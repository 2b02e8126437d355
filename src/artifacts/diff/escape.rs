/// Characters that must not appear verbatim inside an HTML text node or attribute.
pub const HTML_ENTITIES: phf::Map<char, &'static str> = phf::phf_map! {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

/// Appends the escaped form of `text` to `out`.
pub fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match HTML_ENTITIES.get(&c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
}
