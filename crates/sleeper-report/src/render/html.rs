// HTML report: the text report inside a dark terminal-style page, with the
// ANSI colours turned into spans.

use std::iter::Peekable;
use std::str::Chars;

use super::{GREEN, RED, RESET, YELLOW};

const ANSI_SPANS: [(&str, &str); 4] = [
    (GREEN, "<span style=\"color: #00ff00;\">"),
    (RED, "<span style=\"color: #ff0000;\">"),
    (YELLOW, "<span style=\"color: #ffff00;\">"),
    (RESET, "</span>"),
];

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// Escape the characters HTML treats specially.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

/// Read the rest of an `ESC [` control sequence. Returns `None` when the
/// sequence is cut short by a byte that cannot appear in one; that byte is
/// left in the iterator.
fn read_csi(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut seq = String::from("\x1b[");
    while let Some(&c) = chars.peek() {
        match c {
            // Parameter and intermediate bytes.
            '\x20'..='\x3f' => seq.push(c),
            // Final byte.
            '\x40'..='\x7e' => {
                seq.push(c);
                chars.next();
                return Some(seq);
            }
            _ => return None,
        }
        chars.next();
    }
    None
}

/// Escape `text` for HTML and map the report's ANSI colours to spans.
///
/// Other escape sequences and control characters are dropped. Spans are
/// always balanced: a new colour closes the open one, and a span still open
/// at the end is closed.
pub fn ansi_to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() != Some(&'[') {
                continue;
            }
            chars.next();
            let Some(seq) = read_csi(&mut chars) else {
                continue;
            };
            let Some((_, span)) = ANSI_SPANS.iter().find(|(code, _)| *code == seq) else {
                continue;
            };
            if open {
                out.push_str("</span>");
                open = false;
            }
            if seq != RESET {
                out.push_str(span);
                open = true;
            }
            continue;
        }
        if c.is_control() && c != '\n' && c != '\t' {
            continue;
        }
        push_escaped(&mut out, c);
    }

    if open {
        out.push_str("</span>");
    }
    out
}

/// Full HTML document for a text report.
pub fn render_html(league_name: &str, text: &str) -> String {
    let body = ansi_to_html(text);
    let title = escape_html(league_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - sleeper-report</title>
    <style>
        body {{
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', 'Consolas', 'Courier New', monospace;
            background-color: #0d1117;
            color: #c9d1d9;
            margin: 20px;
            padding: 20px;
            line-height: 1.2;
            font-size: 13px;
        }}
        .terminal {{
            background-color: #161b22;
            border: 1px solid #30363d;
            border-radius: 8px;
            padding: 20px;
        }}
        pre {{
            white-space: pre;
            margin: 0;
            overflow-x: auto;
            letter-spacing: -0.1em;
        }}
    </style>
</head>
<body>
    <div class="terminal">
        <pre>{body}</pre>
    </div>
</body>
</html>
"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>Tom & "Jerry"</b>"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn colours_become_spans() {
        let text = format!("{GREEN}███{RESET}{RED}███{RESET}{YELLOW}███{RESET}░░░");
        assert_eq!(
            ansi_to_html(&text),
            "<span style=\"color: #00ff00;\">███</span>\
             <span style=\"color: #ff0000;\">███</span>\
             <span style=\"color: #ffff00;\">███</span>░░░"
        );
    }

    #[test]
    fn unknown_sequences_are_dropped() {
        assert_eq!(ansi_to_html("a\x1b[2mb\x1b[1;34mc"), "abc");
    }

    #[test]
    fn document_has_no_raw_escapes() {
        let text = format!("Team <A> & B {GREEN}███{RESET}\x1b[35mx");
        let html = render_html("League <One>", &text);
        assert!(!html.contains("\x1b["));
        assert!(html.contains("<title>League &lt;One&gt; - sleeper-report</title>"));
        assert!(html.contains("Team &lt;A&gt; &amp; B <span style=\"color: #00ff00;\">███</span>x"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<pre>"));
    }

    #[test]
    fn broken_sequences_cannot_eat_markup() {
        let text = format!("#1  Evil\x1b[ {GREEN}███{RESET}");
        assert_eq!(
            ansi_to_html(&text),
            "#1  Evil<span style=\"color: #00ff00;\">███</span>"
        );
    }

    #[test]
    fn spans_are_always_closed() {
        let text = format!("Evil{GREEN} name {RED}x");
        assert_eq!(
            ansi_to_html(&text),
            "Evil<span style=\"color: #00ff00;\"> name </span>\
             <span style=\"color: #ff0000;\">x</span>"
        );
        assert_eq!(ansi_to_html(&format!("a{RESET}b\x07\x1bc")), "abc");
    }
}
