use crate::grammar::is_alphanumeric;
use crate::helpers::bytes::{ascii_str, Bytes};
use std::collections::HashMap;

/// Collects every `key=value` pair (both alphanumeric) found in `raw`,
/// scanning left to right without overlap. Whatever sits between pairs is
/// skipped. Keys and values are lower-cased and a repeated key keeps its last
/// value.
pub fn decode_query(raw: &str) -> HashMap<String, String> {
    let mut parameters = HashMap::new();
    let mut bytes = Bytes::new(raw.as_bytes());

    while !bytes.is_empty() {
        let key = bytes.take_while(is_alphanumeric);
        if key.is_empty() {
            bytes.bump();
            continue;
        }

        if !bytes.eat(b'=') {
            continue;
        }

        let value = bytes.take_while(is_alphanumeric);
        if value.is_empty() {
            continue;
        }

        // both runs are ASCII alphanumeric
        if let (Ok(key), Ok(value)) = (ascii_str(key), ascii_str(value)) {
            parameters.insert(key.to_ascii_lowercase(), value.to_ascii_lowercase());
        }
    }

    parameters
}

#[cfg(test)]
mod tests {
    use super::decode_query;
    use std::collections::HashMap;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pairs_separated_by_ampersand() {
        assert_eq!(decode_query("a=1&b=2"), map(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_last_duplicate_wins() {
        assert_eq!(decode_query("a=1&a=2"), map(&[("a", "2")]));
    }

    #[test]
    fn test_lower_cases_keys_and_values() {
        assert_eq!(decode_query("Name=Bob"), map(&[("name", "bob")]));
    }

    #[test]
    fn test_separators_are_not_validated() {
        assert_eq!(decode_query("a=1,b=2.c=3"), map(&[("a", "1"), ("b", "2"), ("c", "3")]));
        assert_eq!(decode_query("x,a=1"), map(&[("a", "1")]));
    }

    #[test]
    fn test_incomplete_pairs_are_skipped() {
        assert_eq!(decode_query("a=&b=2"), map(&[("b", "2")]));
        assert_eq!(decode_query("flag&b=2"), map(&[("b", "2")]));
        assert_eq!(decode_query("a=1=2"), map(&[("a", "1")]));
        assert!(decode_query("==&&").is_empty());
        assert!(decode_query("").is_empty());
    }
}
