/// Split text into utterances no longer than `max_chars` characters.
///
/// The Google Translate TTS endpoint caps input length per request, so longer
/// replies are cut at sentence punctuation first, then packed at whitespace
/// boundaries. Splits never land inside a UTF-8 character.
pub fn split_utterances(text: &str, max_chars: usize) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?' | ';' | ':' | '\n') {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let mut utterances: Vec<String> = Vec::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if segment.chars().count() <= max_chars {
            utterances.push(segment.to_string());
            continue;
        }
        pack_words(segment, max_chars, &mut utterances);
    }
    utterances
}

fn pack_words(segment: &str, max_chars: usize, utterances: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in segment.split_whitespace() {
        let word_chars = word.chars().count();

        if word_chars > max_chars {
            if current_chars > 0 {
                utterances.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            hard_split(word, max_chars, utterances);
            continue;
        }

        let needed = if current_chars == 0 {
            word_chars
        } else {
            current_chars + 1 + word_chars
        };

        if needed > max_chars {
            utterances.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        } else {
            if current_chars > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_chars = needed;
        }
    }

    if current_chars > 0 {
        utterances.push(current);
    }
}

fn hard_split(word: &str, max_chars: usize, utterances: &mut Vec<String>) {
    let mut piece = String::new();
    let mut piece_chars = 0usize;
    for ch in word.chars() {
        if piece_chars == max_chars {
            utterances.push(std::mem::take(&mut piece));
            piece_chars = 0;
        }
        piece.push(ch);
        piece_chars += 1;
    }
    if piece_chars > 0 {
        utterances.push(piece);
    }
}
