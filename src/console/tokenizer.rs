//! Command line tokenizer
//!
//! Splits on space, tab, CR and LF. Tokens borrow from the input line,
//! which is left untouched, so the same line can be tokenized again.

/// Token delimiter test
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split `line` into at most `slots.len()` tokens
///
/// Tokens longer than `max_len` bytes are cut to `max_len` bytes (moved back
/// to a character boundary for non-ASCII input). Returns the number of slots filled.
pub fn tokenize<'t>(line: &'t str, slots: &mut [&'t str], max_len: usize) -> usize {
    let tokens = line.split(is_delimiter).filter(|t| !t.is_empty());

    let mut count = 0;
    for (slot, token) in slots.iter_mut().zip(tokens) {
        *slot = truncate(token, max_len);
        count += 1;
    }
    count
}

/// First token of `line`, if any, without truncation
pub fn first_token(line: &str) -> Option<&str> {
    line.split(is_delimiter).find(|t| !t.is_empty())
}

fn truncate(token: &str, max_len: usize) -> &str {
    if token.len() <= max_len {
        return token;
    }

    let mut end = max_len;
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    &token[..end]
}
