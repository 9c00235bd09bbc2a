//! Context data supplied on the command line

use crate::domain::Bag;
use crate::error::{MacrotagError, Result};

/// Build a data bag from `key=value` pairs
///
/// Values are kept as strings; a repeated key keeps its last value.
pub fn data_from_pairs(pairs: &[String]) -> Result<Bag> {
    let mut data = Bag::new();

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| MacrotagError::Config(format!("Invalid --data pair: {}", pair)))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(MacrotagError::Config(format!(
                "Invalid --data pair (empty key): {}",
                pair
            )));
        }

        data.insert(key.to_string(), toml::Value::String(value.to_string()));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_become_strings() {
        let data = data_from_pairs(&["page=home".to_string(), "lang=en".to_string()]).unwrap();
        assert_eq!(data.get("page").and_then(|v| v.as_str()), Some("home"));
        assert_eq!(data.get("lang").and_then(|v| v.as_str()), Some("en"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let data = data_from_pairs(&["query=a=b".to_string()]).unwrap();
        assert_eq!(data.get("query").and_then(|v| v.as_str()), Some("a=b"));
    }

    #[test]
    fn test_last_pair_wins() {
        let data = data_from_pairs(&["k=1".to_string(), "k=2".to_string()]).unwrap();
        assert_eq!(data.get("k").and_then(|v| v.as_str()), Some("2"));
    }

    #[test]
    fn test_missing_equals_rejected() {
        let err = data_from_pairs(&["nokey".to_string()]).unwrap_err();
        assert!(err.to_string().contains("--data"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(data_from_pairs(&["=value".to_string()]).is_err());
    }
}
