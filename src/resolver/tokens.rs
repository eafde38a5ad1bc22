//! Placeholder token scanning and substitution.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches one `#{identifier}` token; the identifier is one or more word
/// characters.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\{(\w+)\}").expect("Invalid token regex"));

/// Distinct placeholder identifiers in `body`, in order of first occurrence.
pub fn scan_identifiers(body: &str) -> Vec<String> {
    let mut identifiers: Vec<String> = Vec::new();
    for caps in TOKEN_REGEX.captures_iter(body) {
        let identifier = &caps[1];
        if !identifiers.iter().any(|i| i == identifier) {
            identifiers.push(identifier.to_string());
        }
    }
    identifiers
}

/// Replace every token whose identifier has a resolution, in a single pass
/// over `body`.
///
/// Tokens without a resolution are left as-is. Because this is one combined
/// pass over the original body, substituted values are never re-scanned:
/// a value that itself contains `#{...}` stays literal.
pub fn substitute(body: &str, resolutions: &HashMap<String, String>) -> String {
    TOKEN_REGEX
        .replace_all(body, |caps: &Captures| match resolutions.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_identifiers_in_order() {
        let body = "b: #{beta}, a: #{alpha}, again: #{beta}";
        assert_eq!(scan_identifiers(body), vec!["beta", "alpha"]);
    }

    #[test]
    fn scan_ignores_non_token_braces() {
        // No `#` prefix, empty braces, and non-word characters do not match.
        let body = "{name} #{} #{with space} #{ok}";
        assert_eq!(scan_identifiers(body), vec!["ok"]);
    }

    #[test]
    fn scan_of_plain_text_is_empty() {
        assert!(scan_identifiers("no tokens here").is_empty());
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let resolutions = HashMap::from([("x".to_string(), "X".to_string())]);
        assert_eq!(substitute("#{x}-#{x}-#{x}", &resolutions), "X-X-X");
    }

    #[test]
    fn substitute_leaves_unresolved_tokens() {
        let resolutions = HashMap::from([("a".to_string(), "A".to_string())]);
        assert_eq!(substitute("#{a} #{b}", &resolutions), "A #{b}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let resolutions = HashMap::from([
            ("a".to_string(), "#{b}".to_string()),
            ("b".to_string(), "B".to_string()),
        ]);
        assert_eq!(substitute("#{a} #{b}", &resolutions), "#{b} B");
    }
}
