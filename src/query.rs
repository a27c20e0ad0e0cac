use std::collections::HashMap;

pub type QueryParams = HashMap<String, String>;

/// Parses a raw query string into decoded key/value pairs.
///
/// Never fails: empty pairs and pairs that do not decode to UTF-8 are dropped, a key
/// without `=` maps to the empty string, anything after a second `=` is ignored and the
/// last occurrence of a key wins.
pub fn parse_query(raw: &str) -> QueryParams {
    let raw = raw.strip_prefix('?').unwrap_or(raw);

    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            let key = urlencoding::decode(key).ok()?;
            let value = urlencoding::decode(value).ok()?;
            Some((key.into_owned(), value.into_owned()))
        })
        .collect()
}

/// Reads a parameter, treating absence as the empty string.
pub fn param<'a>(params: &'a QueryParams, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pairs() {
        let params = parse_query("?q=coffee%20corner&area=Old%20Town");
        assert_eq!(param(&params, "q"), "coffee corner");
        assert_eq!(param(&params, "area"), "Old Town");
    }

    #[test]
    fn bare_key_is_empty_value() {
        let params = parse_query("verified&q=x");
        assert_eq!(params.get("verified").map(String::as_str), Some(""));
    }

    #[test]
    fn skips_empty_and_undecodable_pairs() {
        let params = parse_query("&&q=ok&bad=%FF%FE&");
        assert_eq!(params.len(), 1);
        assert_eq!(param(&params, "q"), "ok");
        assert!(!params.contains_key("bad"));
    }

    #[test]
    fn empty_input() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn plus_is_kept_literally() {
        let params = parse_query("q=fish+chips");
        assert_eq!(param(&params, "q"), "fish+chips");
    }

    #[test]
    fn last_duplicate_wins_and_unknown_keys_survive() {
        let params = parse_query("area=Leith&area=Old%20Town&utm_source=mail");
        assert_eq!(param(&params, "area"), "Old Town");
        assert_eq!(param(&params, "utm_source"), "mail");
        assert_eq!(param(&params, "missing"), "");
    }

    #[test]
    fn second_equals_ends_the_value() {
        let params = parse_query("q=a=b&area=Leith");
        assert_eq!(param(&params, "q"), "a");
        assert_eq!(param(&params, "area"), "Leith");
    }

    #[test]
    fn decodes_pound_sign() {
        let params = parse_query("price_range=%C2%A3%C2%A3");
        assert_eq!(param(&params, "price_range"), "££");
    }
}
