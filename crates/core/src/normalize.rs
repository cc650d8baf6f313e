//! Result normalization
//!
//! Every functor output goes through [`normalize`] before it reaches the host, no matter
//! which functor produced it. Bare strings and structured records come out as the same
//! `{label, target, description}` triple, and candidates without a target are dropped.

use serde::{Deserialize, Serialize};

use crate::catalog::{ArgsHint, HitHint, ItemCategory};
use crate::functor::Conversion;

/// Description applied when a functor does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "Press Enter to copy";

/// A computed result, ready to be displayed and selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub label: String,
    pub description: String,
    /// Literal value handed to the host when this entry is executed.
    pub target: String,
}

impl ResultEntry {
    pub fn category(&self) -> ItemCategory {
        ItemCategory::Result
    }

    pub fn args_hint(&self) -> ArgsHint {
        ArgsHint::Forbidden
    }

    pub fn hit_hint(&self) -> HitHint {
        HitHint::Ignore
    }
}

/// Normalize one conversion into a result entry.
///
/// Returns `None` when the conversion has an empty target.
pub fn normalize(conversion: Conversion) -> Option<ResultEntry> {
    let (label, target, description) = match conversion {
        Conversion::Bare(value) => (value.clone(), value, None),
        Conversion::Record {
            label,
            target,
            description,
        } => (label, target, description),
    };

    if target.is_empty() {
        return None;
    }

    Some(ResultEntry {
        label,
        description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        target,
    })
}

/// Normalize a functor's whole output, preserving its order.
pub fn normalize_all(conversions: Vec<Conversion>) -> Vec<ResultEntry> {
    conversions.into_iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_uses_value_for_label_and_target() {
        let entry = normalize(Conversion::Bare("abc".to_string())).unwrap();

        assert_eq!(entry.label, "abc");
        assert_eq!(entry.target, "abc");
        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_record_keeps_distinct_label_and_target() {
        let entry = normalize(Conversion::Record {
            label: "shown".to_string(),
            target: "copied".to_string(),
            description: Some("custom".to_string()),
        })
        .unwrap();

        assert_eq!(entry.label, "shown");
        assert_eq!(entry.target, "copied");
        assert_eq!(entry.description, "custom");
    }

    #[test]
    fn test_record_without_description_gets_default() {
        let entry = normalize(Conversion::Record {
            label: "a".to_string(),
            target: "a".to_string(),
            description: None,
        })
        .unwrap();

        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_empty_targets_are_dropped() {
        assert!(normalize(Conversion::Bare(String::new())).is_none());
        assert!(normalize(Conversion::Record {
            label: "not empty".to_string(),
            target: String::new(),
            description: None,
        })
        .is_none());
    }

    #[test]
    fn test_normalize_all_preserves_order_and_filters() {
        let entries = normalize_all(vec![
            "first".into(),
            "".into(),
            Conversion::described("second", "desc"),
            "third".into(),
        ]);

        let targets: Vec<&str> = entries.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_result_entry_hints() {
        let entry = normalize("x".into()).unwrap();

        assert_eq!(entry.category(), ItemCategory::Result);
        assert_eq!(entry.args_hint(), ArgsHint::Forbidden);
        assert_eq!(entry.hit_hint(), HitHint::Ignore);
    }
}
