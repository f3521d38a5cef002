//! JSONC cleanup
//!
//! Many editor themes are written as JSON with comments and trailing
//! commas. [`strip_jsonc`] turns such text into plain JSON. Comments are
//! replaced with spaces (newlines kept) so parse errors still point at the
//! right line.

/// Remove `//` and `/* */` comments and trailing commas outside of strings
pub fn strip_jsonc(input: &str) -> String {
    remove_trailing_commas(&strip_comments(input))
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (ch, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                chars.next();
                out.push_str("  ");
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    out.push(' ');
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for next in chars.by_ref() {
                    out.push(if next == '\n' { '\n' } else { ' ' });
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if in_string {
            if ch == '\\' && i + 1 < chars.len() {
                out.push(ch);
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if ch == '"' {
                in_string = false;
            }
            out.push(ch);
        } else if ch == '"' {
            in_string = true;
            out.push(ch);
        } else if ch == ',' {
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            out.push(if matches!(next, Some('}') | Some(']')) { ' ' } else { ',' });
        } else {
            out.push(ch);
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comments() {
        let cleaned = strip_jsonc("{\n  // name\n  \"a\": 1\n}");
        assert_eq!(serde_json::from_str::<serde_json::Value>(&cleaned).unwrap()["a"], 1);
        assert_eq!(cleaned.lines().count(), 4);
    }

    #[test]
    fn test_block_comments() {
        let cleaned = strip_jsonc("{ /* a\n b */ \"a\": /* inline */ 2 }");
        assert_eq!(serde_json::from_str::<serde_json::Value>(&cleaned).unwrap()["a"], 2);
    }

    #[test]
    fn test_comment_markers_inside_strings() {
        let cleaned = strip_jsonc(r#"{ "url": "http://x/*y*/", "q": "a\"//b" }"#);
        let value: serde_json::Value = serde_json::from_str(&cleaned).unwrap();
        assert_eq!(value["url"], "http://x/*y*/");
        assert_eq!(value["q"], "a\"//b");
    }

    #[test]
    fn test_trailing_commas() {
        let cleaned = strip_jsonc("{ \"a\": [1, 2, ], \"b\": \",]\", }");
        let value: serde_json::Value = serde_json::from_str(&cleaned).unwrap();
        assert_eq!(value["a"], serde_json::json!([1, 2]));
        assert_eq!(value["b"], ",]");
    }

    #[test]
    fn test_trailing_comma_before_comment() {
        let cleaned = strip_jsonc("[1, // last\n]");
        let value: serde_json::Value = serde_json::from_str(&cleaned).unwrap();
        assert_eq!(value, serde_json::json!([1]));
    }
}
