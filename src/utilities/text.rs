// Text Utilities
// Wrapping and truncation for card and message bodies

/// Wrap text to fit within max width, preserving explicit line breaks
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let max_width = max_width.max(1);

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current.chars().count();
            let word_len = word.chars().count();
            if current.is_empty() {
                current = word.to_string();
            } else if current_len + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Truncate to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("Our Premium membership includes:\n- Unlimited messaging", 20);
        assert_eq!(
            lines,
            vec!["Our Premium", "membership includes:", "- Unlimited", "messaging"]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Sarah & James", 20), "Sarah & James");
        assert_eq!(truncate("Sarah & James", 6), "Sarah…");
    }
}
