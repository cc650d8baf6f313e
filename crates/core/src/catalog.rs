use serde::{Deserialize, Serialize};

use crate::registry::Registry;

/// Label prefix used when none is configured.
pub const DEFAULT_LABEL_PREFIX: &str = "String: ";

/// Kind of a listable entry, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Points at a functor; selecting it lets the user type input.
    Reference,
    /// A computed candidate carrying a copyable target.
    Result,
    Error,
}

/// Whether the host should let the user type arguments after the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgsHint {
    Required,
    Forbidden,
}

/// How the host should treat a hit on the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitHint {
    /// Do not execute the entry until arguments are provided.
    NoArgs,
    /// Do not record hits on the entry.
    Ignore,
}

/// A listable reference to one registered functor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    pub description: String,
    /// Reference token, equal to the functor name.
    pub target: String,
}

impl CatalogEntry {
    pub fn category(&self) -> ItemCategory {
        ItemCategory::Reference
    }

    pub fn args_hint(&self) -> ArgsHint {
        ArgsHint::Required
    }

    pub fn hit_hint(&self) -> HitHint {
        HitHint::NoArgs
    }
}

/// Snapshot the registry into catalog entries, in registration order.
pub fn build_catalog(registry: &Registry, label_prefix: &str) -> Vec<CatalogEntry> {
    registry
        .iter()
        .map(|functor| CatalogEntry {
            label: format!("{label_prefix}{}", functor.label()),
            description: functor.description().to_string(),
            target: functor.name().to_string(),
        })
        .collect()
}
