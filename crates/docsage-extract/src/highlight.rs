//! Keyword highlighting over extracted content.

use regex::RegexBuilder;

/// Wrap every case-insensitive literal match of `query` in `<mark>` tags,
/// preserving the original casing of the matched text. An empty query
/// returns the text unchanged.
///
/// The output is markup, not escaped plain text: the consumer renders it as
/// trusted HTML.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    // The query is escaped, so metacharacters match literally.
    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return text.to_string(),
    };

    pattern.replace_all(text, "<mark>$0</mark>").into_owned()
}
