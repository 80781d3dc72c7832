//! Small HTML writing helpers shared by the resume and cover-letter layouts.

use std::fmt::{self, Write};

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes the shared document preamble up to and including `<body>`.
pub fn open_document(out: &mut String, title: &str, css: &str) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(out, "    <title>{}</title>", escape(title))?;
    writeln!(out, "    <style>{css}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")
}

pub fn close_document(out: &mut String) -> fmt::Result {
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// `<div class="{class}">{escaped text}</div>`
pub fn div(out: &mut String, class: &str, text: &str) -> fmt::Result {
    writeln!(out, "<div class=\"{class}\">{}</div>", escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("O'Neil"), "O&#39;Neil");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_document_frame() {
        let mut out = String::new();
        open_document(&mut out, "A & B", "body{}").unwrap();
        close_document(&mut out).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>A &amp; B</title>"));
        assert!(out.trim_end().ends_with("</html>"));
    }
}
