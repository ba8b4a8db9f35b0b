use unicode_width::UnicodeWidthStr;

/// Wrap `s` at word boundaries so that no line exceeds `width` columns.
/// Width is measured in display columns, not chars, so double-width
/// characters count double. Words wider than `width` are split mid-word.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in s.split_whitespace() {
        let sep = if line.is_empty() { 0 } else { 1 };
        if line.width() + sep + word.width() <= width {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
        } else if word.width() <= width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line.push_str(word);
        } else {
            // oversized word: hard-split on column boundaries
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            for c in word.chars() {
                if line.width() + c.to_string().width() > width {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(c);
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Number of lines `s` occupies when wrapped to `width` columns.
pub fn wrapped_height(s: &str, width: usize) -> usize {
    wrap_words(s, width).len()
}
