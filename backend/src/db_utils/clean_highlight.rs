//! Cleanup of highlight fragments returned by the engine.
//!
//! The plain highlighter cuts fragments at a fixed size after markup has been stripped from the
//! page, so fragments often start with the tail of a tag (`>`), stray punctuation or a mis-decoded
//! curly quote (`â€œ`), and end with the head of the next tag (`<`), possibly followed by the
//! page's line break.

use std::sync::LazyLock;

use regex::Regex;

/// Leading run of tag/punctuation debris. Mis-decoded curly quotes (`â€œ`, `â€\u{9d}`, `â€˜`, `â€™`)
/// are consumed as one unit before falling back to single characters.
static LEADING_STRIP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:â€[œ\x{9d}˜™]|[>,.\-:;"â€])+"#).expect("leading strip regex is valid")
});

/// Strips boundary artifacts from one highlight fragment.
///
/// Both edges are stripped as whole runs, so applying this twice gives the same result as once.
pub fn clean_highlight(fragment: &str) -> String {
    let mut cleaned = LEADING_STRIP_REGEX.replace(fragment, "").into_owned();
    strip_trailing_tag_start(&mut cleaned);
    cleaned
}

/// Removes trailing `<`, also when it sits right before a final line break, which is kept.
fn strip_trailing_tag_start(text: &mut String) {
    loop {
        if text.ends_with('<') {
            text.pop();
        } else if text.ends_with("<\n") {
            text.remove(text.len() - 2);
        } else {
            break;
        }
    }
}
