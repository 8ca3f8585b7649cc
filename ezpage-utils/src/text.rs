//! Splitting long text into message-sized pages.

/// Split `text` into pages of at most `max_chars` characters.
///
/// Breaks on line boundaries when possible, then on whitespace, and only
/// splits inside a word when that word alone exceeds the limit. Blank input
/// yields no pages.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0_usize;

    for line in text.lines() {
        let line_len = line.chars().count();
        let separator = usize::from(current_len > 0);

        if current_len + separator + line_len <= max_chars {
            if separator == 1 {
                current.push('\n');
            }
            current.push_str(line);
            current_len += separator + line_len;
            continue;
        }

        flush(&mut pages, &mut current, &mut current_len);

        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let separator = usize::from(current_len > 0);

            if current_len + separator + word_len <= max_chars {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len += separator + word_len;
                continue;
            }

            flush(&mut pages, &mut current, &mut current_len);

            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                if piece.len() == max_chars {
                    pages.push(piece.iter().collect());
                } else {
                    current = piece.iter().collect();
                    current_len = piece.len();
                }
            }
        }
    }

    flush(&mut pages, &mut current, &mut current_len);
    pages
}

fn flush(pages: &mut Vec<String>, current: &mut String, current_len: &mut usize) {
    let page = std::mem::take(current);
    *current_len = 0;

    if !page.trim().is_empty() {
        pages.push(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_page() {
        assert_eq!(chunk_text("hello\nworld", 50), vec!["hello\nworld"]);
    }

    #[test]
    fn lines_are_packed_up_to_the_limit() {
        let pages = chunk_text("aaaa\nbbbb\ncccc", 9);

        assert_eq!(pages, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn long_lines_split_on_whitespace() {
        let pages = chunk_text("one two three four", 9);

        assert_eq!(pages, vec!["one two", "three", "four"]);
    }

    #[test]
    fn oversized_words_are_hard_split() {
        let pages = chunk_text("abcdefghij", 4);

        assert_eq!(pages, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn blank_input_has_no_pages() {
        assert!(chunk_text("  \n \n", 10).is_empty());
    }

    #[test]
    fn pages_never_exceed_the_limit() {
        let text = "lorem ipsum dolor sit amet, consectetur adipiscing elit\n".repeat(40);

        for page in chunk_text(&text, 100) {
            assert!(page.chars().count() <= 100, "page too long: {page:?}");
        }
    }
}
