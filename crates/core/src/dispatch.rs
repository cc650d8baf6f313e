//! Conversion dispatch
//!
//! Resolves a reference token through the registry, runs the functor and normalizes its
//! output. Any failure is contained here: the caller receives either the full result list
//! or exactly one [`ErrorEntry`], never a partial list and never an `Err`.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemCategory;
use crate::normalize::{normalize_all, ResultEntry};
use crate::registry::Registry;

/// A user-visible failure, rendered like any other entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// The user input that caused the failure.
    pub label: String,
    pub description: String,
}

impl ErrorEntry {
    pub fn category(&self) -> ItemCategory {
        ItemCategory::Error
    }
}

/// Outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    Results(Vec<ResultEntry>),
    Error(ErrorEntry),
}

impl Suggestions {
    pub fn is_error(&self) -> bool {
        matches!(self, Suggestions::Error(_))
    }
}

/// Resolve `token`, convert `input` and normalize the output.
pub fn resolve_and_convert(registry: &Registry, token: &str, input: Option<&str>) -> Suggestions {
    let label = input.unwrap_or_default().to_string();

    let Some(functor) = registry.lookup(token) else {
        return Suggestions::Error(ErrorEntry {
            label,
            description: format!("Error: unknown functor: {token}"),
        });
    };

    match functor.convert(input) {
        Ok(conversions) => Suggestions::Results(normalize_all(conversions)),
        Err(err) => {
            log::debug!("functor {} failed: {err}", functor.name());
            Suggestions::Error(ErrorEntry {
                label,
                description: format!("Error({}): {err}", functor.name()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::functor::{Conversion, Functor, FunctorInfo};
    use crate::registry::HashCasePolicy;

    struct AlwaysFails {
        info: FunctorInfo,
    }

    impl Functor for AlwaysFails {
        fn info(&self) -> &FunctorInfo {
            &self.info
        }

        fn convert(&self, _input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
            Err(ConvertError::InvalidArgument("broken".to_string()))
        }
    }

    fn registry_with_failing() -> Registry {
        let mut registry = Registry::with_defaults(HashCasePolicy::default());
        registry.register(Box::new(AlwaysFails {
            info: FunctorInfo::new("always_fails", "Fails", "Always fails"),
        }));
        registry
    }

    #[test]
    fn test_unknown_token_yields_exactly_one_error() {
        let registry = Registry::with_defaults(HashCasePolicy::default());

        let suggestions = resolve_and_convert(&registry, "nope", Some("abc"));

        assert_eq!(
            suggestions,
            Suggestions::Error(ErrorEntry {
                label: "abc".to_string(),
                description: "Error: unknown functor: nope".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_token_on_empty_registry() {
        let suggestions = resolve_and_convert(&Registry::new(), "rot13", None);

        match suggestions {
            Suggestions::Error(entry) => {
                assert_eq!(entry.label, "");
                assert_eq!(entry.category(), ItemCategory::Error);
            }
            Suggestions::Results(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_failure_is_contained_into_one_error() {
        let registry = registry_with_failing();

        let suggestions = resolve_and_convert(&registry, "always_fails", Some("x"));

        assert_eq!(
            suggestions,
            Suggestions::Error(ErrorEntry {
                label: "x".to_string(),
                description: "Error(always_fails): Invalid argument: broken".to_string(),
            })
        );
    }

    #[test]
    fn test_real_functor_failure_names_functor() {
        let registry = Registry::with_defaults(HashCasePolicy::default());

        let suggestions = resolve_and_convert(&registry, "arg_split_unix", Some("echo 'open"));

        match suggestions {
            Suggestions::Error(entry) => {
                assert!(entry.description.starts_with("Error(arg_split_unix): "));
            }
            Suggestions::Results(results) => panic!("expected an error, got {results:?}"),
        }
    }

    #[test]
    fn test_success_preserves_functor_order() {
        let registry = Registry::with_defaults(HashCasePolicy::default());

        let suggestions = resolve_and_convert(&registry, "change_case", Some(" Hello World "));

        let Suggestions::Results(results) = suggestions else {
            panic!("expected results");
        };
        let targets: Vec<&str> = results.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(
            targets,
            vec!["HELLO WORLD", "hello world", "Hello world", "Hello World"]
        );
    }

    #[test]
    fn test_empty_outputs_are_filtered() {
        let registry = Registry::with_defaults(HashCasePolicy::default());

        let suggestions = resolve_and_convert(&registry, "rand_bytes", Some("0"));

        assert_eq!(suggestions, Suggestions::Results(vec![]));
        assert!(!suggestions.is_error());
    }
}
