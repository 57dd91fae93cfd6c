//! Text normalization applied before classification.
//!
//! Steps run in a fixed order:
//! 1. Emoji glyphs become textual name tokens (`❤️` → `:red_heart:`)
//! 2. URLs (`http...`, `https...`, `www...`) are removed
//! 3. Whitespace runs collapse to a single space
//! 4. Leading and trailing whitespace is stripped
//!
//! Emoji substitution runs before whitespace collapsing.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Variation selector 16 (emoji presentation).
const VS16: char = '\u{FE0F}';

/// Canonicalizes raw text for the classifier.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    url_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"(?:http|www)\S+").expect("URL pattern is valid"),
            whitespace_regex: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        }
    }

    /// Normalize `text`. Never fails; empty, blank and URL-only input yield `""`.
    pub fn normalize(&self, text: &str) -> String {
        let demojized = demojize(text);
        let without_urls = self.url_regex.replace_all(&demojized, "");
        let collapsed = self.whitespace_regex.replace_all(&without_urls, " ");
        collapsed.trim().to_string()
    }
}

/// Replace every emoji grapheme cluster with its `:name:` token.
pub fn demojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        match emoji_token(grapheme) {
            Some(token) => out.push_str(&token),
            None => out.push_str(grapheme),
        }
    }
    out
}

fn emoji_token(grapheme: &str) -> Option<String> {
    // Keycap bases (#, *, digits) only count as emoji inside a keycap sequence
    if grapheme.is_ascii() {
        return None;
    }
    let emoji = lookup_emoji(grapheme)?;
    Some(name_token(emoji.name()))
}

fn lookup_emoji(grapheme: &str) -> Option<&'static emojis::Emoji> {
    if let Some(emoji) = emojis::get(grapheme) {
        return Some(emoji);
    }

    // Unqualified and over-qualified forms differ only in VS16
    if grapheme.contains(VS16) {
        let stripped: String = grapheme.chars().filter(|&c| c != VS16).collect();
        return emojis::get(&stripped);
    }

    let mut qualified = String::with_capacity(grapheme.len() + VS16.len_utf8());
    qualified.push_str(grapheme);
    qualified.push(VS16);
    emojis::get(&qualified)
}

/// `"red heart"` → `":red_heart:"`.
fn name_token(name: &str) -> String {
    let mut token = String::with_capacity(name.len() + 2);
    token.push(':');
    for c in name.chars() {
        match c {
            ':' | ',' => {}
            c if c.is_whitespace() => token.push('_'),
            c => token.push(c),
        }
    }
    token.push(':');
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn normalize(text: &str) -> String {
        TextNormalizer::new().normalize(text)
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(normalize("I love Python!"), "I love Python!");
        assert_eq!(normalize("J'aime Python!"), "J'aime Python!");
    }

    #[test]
    fn test_emoji_becomes_name_token() {
        assert_eq!(normalize("I ❤️ Rust"), "I :red_heart: Rust");
        assert_eq!(normalize("Ship it 👍"), "Ship it :thumbs_up:");
        assert_eq!(normalize("😂"), ":face_with_tears_of_joy:");
    }

    #[test]
    fn test_unqualified_emoji_is_recognized() {
        assert_eq!(normalize("I \u{2764} Rust"), "I :red_heart: Rust");
    }

    #[test]
    fn test_ascii_keycap_bases_are_untouched() {
        assert_eq!(normalize("#1 * 2"), "#1 * 2");
    }

    #[test]
    fn test_urls_are_removed() {
        assert_eq!(
            normalize("Read https://example.com/post?id=1 now"),
            "Read now"
        );
        assert_eq!(normalize("see http://a.b and www.rust-lang.org"), "see and");
        assert_eq!(normalize("linkhttp://x.y"), "link");
    }

    #[test]
    fn test_whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize("  too   many\t\tspaces\n\nhere  "), "too many spaces here");
    }

    #[test]
    fn test_degenerate_inputs_reduce_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
        assert_eq!(normalize("https://a.io www.b.org http://c"), "");
    }

    #[test]
    fn test_emoji_adjacent_to_url() {
        assert_eq!(normalize("👍https://example.com"), ":thumbs_up:");
    }

    #[test]
    fn test_name_token_formatting() {
        assert_eq!(name_token("red heart"), ":red_heart:");
        assert_eq!(name_token("flag: Japan"), ":flag_Japan:");
    }

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9.,!?'#*]{1,8}".prop_map(String::from),
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("\n".to_string()),
            Just("https://example.com/x".to_string()),
            Just("www.rust-lang.org".to_string()),
            Just("❤️".to_string()),
            Just("👍".to_string()),
            Just("😂".to_string()),
            Just("é".to_string()),
        ]
    }

    fn sample_text() -> impl Strategy<Value = String> {
        prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(text in sample_text()) {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_clean_text_is_only_trimmed(text in "[a-zA-Z0-9.,!?']{1,12}( [a-zA-Z0-9.,!?']{1,12}){0,6}") {
            prop_assume!(!text.contains("http") && !text.contains("www"));
            let padded = format!("  {text} ");
            prop_assert_eq!(normalize(&padded), text);
        }

        #[test]
        fn prop_output_has_no_whitespace_runs(text in sample_text()) {
            let out = normalize(&text);
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.contains('\t'));
            prop_assert!(!out.contains('\n'));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
