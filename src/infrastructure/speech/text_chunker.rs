/// Splits text into pieces of at most `max_chars` characters, preferring to
/// break after sentence punctuation, then at whitespace. Words longer than the
/// limit are cut.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_inclusive_sentences(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        for word in sentence.split_whitespace() {
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

            flush(&mut chunks, &mut current, &mut current_len);

            if word_len <= max_chars {
                current.push_str(word);
                current_len = word_len;
            } else {
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(max_chars) {
                    chunks.push(piece.iter().collect());
                }
            }
        }

        flush(&mut chunks, &mut current, &mut current_len);
    }

    chunks
}

fn flush(chunks: &mut Vec<String>, current: &mut String, current_len: &mut usize) {
    if *current_len > 0 {
        chunks.push(std::mem::take(current));
        *current_len = 0;
    }
}

fn split_inclusive_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(['.', '!', '?', ';', ':', '\n'])
}
