//! Address cleaning demo transform.
//!
//! A cosmetic formatter: comma-separated segments are trimmed and every word
//! gets its first letter uppercased. Nothing else about the address is
//! validated or rewritten, so `"NY"` stays `"NY"` and `"ny"` becomes `"Ny"`.

/// Example input shown in the demo textarea.
pub const ADDRESS_EXAMPLE: &str = "123 main st, new york, ny 10001 usa";

/// Shown in place of the result when the cleaned address is empty.
pub const ADDRESS_PLACEHOLDER: &str = "Enter an address to see the result";

/// Clean a free-text address.
///
/// Returns an empty string for empty or whitespace-only input.
///
/// ```rust
/// use majorem::address::clean_address;
///
/// assert_eq!(
///     clean_address("123 main st, new york, ny 10001 usa"),
///     "123 Main St, New York, Ny 10001 Usa"
/// );
/// assert_eq!(clean_address("   "), "");
/// ```
pub fn clean_address(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed
        .split(',')
        .map(|segment| capitalize_words(segment.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The text the result box should show for a cleaned address.
pub fn display_or_placeholder(cleaned: &str) -> &str {
    if cleaned.is_empty() {
        ADDRESS_PLACEHOLDER
    } else {
        cleaned
    }
}

/// Uppercase the first character of every word, leave the rest untouched.
///
/// A word starts at a word character (alphanumeric or `_`) that follows a
/// non-word character or the start of the segment.
fn capitalize_words(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut at_boundary = true;

    for ch in segment.chars() {
        let is_word = is_word_char(ch);
        if is_word && at_boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !is_word;
    }

    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
