//! Port value object
//!
//! Ports arrive as raw strings. Rendering needs one declaration per port, and
//! Kubernetes wants integers where it can get them, so each entry is carried
//! as either a number or the verbatim text.

use serde::{Deserialize, Serialize};

/// A single port as written into rendered documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(u16),
    Named(String),
}

impl PortValue {
    /// Interpret one raw port entry. Never fails: unparsable text is kept as-is.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u16>() {
            Ok(n) => PortValue::Number(n),
            Err(_) => PortValue::Named(trimmed.to_string()),
        }
    }
}

impl std::fmt::Display for PortValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortValue::Number(n) => write!(f, "{}", n),
            PortValue::Named(s) => f.write_str(s),
        }
    }
}

/// Split comma-separated user input into trimmed, non-empty entries
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ports_become_numbers() {
        assert_eq!(PortValue::from_raw("5000"), PortValue::Number(5000));
        assert_eq!(PortValue::from_raw(" 8080 "), PortValue::Number(8080));
    }

    #[test]
    fn other_text_is_kept_verbatim() {
        assert_eq!(
            PortValue::from_raw("http"),
            PortValue::Named("http".to_string())
        );
        assert_eq!(
            PortValue::from_raw("70000"),
            PortValue::Named("70000".to_string())
        );
    }

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(split_list("5000, 8080,,"), vec!["5000", "8080"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn yaml_serializes_numbers_unquoted() {
        let yaml = serde_yaml_ng::to_string(&vec![
            PortValue::Number(5000),
            PortValue::Named("metrics".into()),
        ])
        .unwrap();
        assert_eq!(yaml, "- 5000\n- metrics\n");
    }
}
