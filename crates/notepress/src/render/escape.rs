//! HTML escaping for note text and attribute values.

/// Appends `text` to `out` with `&`, `<` and `>` escaped.
///
/// With `attr` set, `"` and `'` are escaped too so the value can sit inside a
/// quoted attribute. Without it quotes are left alone, and plain prose renders
/// byte-for-byte as written.
pub(crate) fn push_escaped(out: &mut String, text: &str, attr: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            '\'' if attr => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_text(text: &str) -> String {
        let mut out = String::new();
        push_escaped(&mut out, text, false);
        out
    }

    fn escape_attr(text: &str) -> String {
        let mut out = String::new();
        push_escaped(&mut out, text, true);
        out
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_escape_text_leaves_quotes() {
        assert_eq!(escape_text(r#"say "hi" it's"#), r#"say "hi" it's"#);
    }

    #[test]
    fn test_escape_text_applied_once() {
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(
            escape_attr(r#"x" onerror="alert('1')"#),
            "x&quot; onerror=&quot;alert(&#39;1&#39;)"
        );
    }

    #[test]
    fn test_escape_multibyte_untouched() {
        assert_eq!(escape_text("日記 <b>"), "日記 &lt;b&gt;");
    }
}
