//! `Cookie` header handling for session-gated pages.

use std::collections::BTreeMap;

/// Parses a `"a=1; b=2"` cookie string into a name/value map.
///
/// Segments without `=` or with an empty name are ignored. Only the first
/// `=` separates name from value, so values may themselves contain `=`.
#[must_use]
pub fn parse_cookies(raw: &str) -> BTreeMap<String, String> {
    raw.split(';')
        .filter_map(|part| {
            let (name, value) = part.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_owned(), value.trim().to_owned()))
        })
        .collect()
}

/// Renders a cookie map back into `Cookie` header form (`a=1; b=2`).
#[must_use]
pub fn render_cookie_header(cookies: &BTreeMap<String, String>) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pairs() {
        let cookies = parse_cookies("a=1; b=2");
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies["a"], "1");
        assert_eq!(cookies["b"], "2");
    }

    #[test]
    fn empty_string_yields_empty_map() {
        assert!(parse_cookies("").is_empty());
        assert!(parse_cookies(" ;  ; ").is_empty());
    }

    #[test]
    fn ignores_segments_without_equals() {
        let cookies = parse_cookies("flag; session=abc;  ;other");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies["session"], "abc");
    }

    #[test]
    fn ignores_segments_with_empty_name() {
        let cookies = parse_cookies("=orphan; k=v");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies["k"], "v");
    }

    #[test]
    fn value_keeps_embedded_equals() {
        let cookies = parse_cookies("token=abc==; x = y ");
        assert_eq!(cookies["token"], "abc==");
        assert_eq!(cookies["x"], "y");
    }

    #[test]
    fn later_duplicate_name_wins() {
        let cookies = parse_cookies("a=1; a=2");
        assert_eq!(cookies["a"], "2");
    }

    #[test]
    fn parse_is_independent_of_segment_order() {
        assert_eq!(
            parse_cookies("a=1; b=2; c=3"),
            parse_cookies("c=3;b=2 ;  a=1")
        );
    }

    #[test]
    fn render_then_parse_is_identity() {
        let cookies = parse_cookies("PHPSESSID=deadbeef; WHMCSy551iLvnhYt7=xyz; lang=zh-CN");
        let rendered = render_cookie_header(&cookies);
        assert_eq!(parse_cookies(&rendered), cookies);
    }

    #[test]
    fn render_empty_map_is_empty_string() {
        assert_eq!(render_cookie_header(&BTreeMap::new()), "");
    }
}
