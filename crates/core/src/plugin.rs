use serde::{Deserialize, Serialize};

use crate::catalog::{build_catalog, CatalogEntry, ItemCategory, DEFAULT_LABEL_PREFIX};
use crate::dispatch::{resolve_and_convert, ErrorEntry, Suggestions};
use crate::normalize::ResultEntry;
use crate::registry::{HashCasePolicy, Registry};

/// Startup options for [`StringPlugin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub hash_case_policy: HashCasePolicy,
    /// Prepended to every catalog label.
    pub label_prefix: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            hash_case_policy: HashCasePolicy::default(),
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

/// Any entry the plugin hands to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Item {
    Reference(CatalogEntry),
    Result(ResultEntry),
    Error(ErrorEntry),
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        match self {
            Item::Reference(entry) => entry.category(),
            Item::Result(entry) => entry.category(),
            Item::Error(entry) => entry.category(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Item::Reference(entry) => &entry.label,
            Item::Result(entry) => &entry.label,
            Item::Error(entry) => &entry.label,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Item::Reference(entry) => &entry.description,
            Item::Result(entry) => &entry.description,
            Item::Error(entry) => &entry.description,
        }
    }
}

impl From<Suggestions> for Vec<Item> {
    fn from(suggestions: Suggestions) -> Self {
        match suggestions {
            Suggestions::Results(results) => results.into_iter().map(Item::Result).collect(),
            Suggestions::Error(error) => vec![Item::Error(error)],
        }
    }
}

/// The surface a launcher host drives.
///
/// Owns the registry for its whole lifetime. The registry is never mutated after
/// [`StringPlugin::on_start`], so a plugin can be shared across threads by reference.
#[derive(Debug)]
pub struct StringPlugin {
    registry: Registry,
    config: PluginConfig,
}

impl StringPlugin {
    /// Populate the registry with every built-in functor.
    pub fn on_start(config: PluginConfig) -> Self {
        let registry = Registry::with_defaults(config.hash_case_policy);
        Self::with_registry(registry, config)
    }

    /// Wrap an already populated registry.
    pub fn with_registry(registry: Registry, config: PluginConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn on_catalog(&self) -> Vec<CatalogEntry> {
        build_catalog(&self.registry, &self.config.label_prefix)
    }

    /// Dispatch when the last selected item is a catalog reference.
    ///
    /// Returns `None` when the chain is empty or ends with anything else, leaving the
    /// query to other logic.
    pub fn on_suggest(&self, user_input: Option<&str>, items_chain: &[Item]) -> Option<Vec<Item>> {
        let Some(Item::Reference(current)) = items_chain.last() else {
            return None;
        };

        Some(self.suggest(&current.target, user_input).into())
    }

    /// Dispatch directly by reference token.
    pub fn suggest(&self, token: &str, user_input: Option<&str>) -> Suggestions {
        resolve_and_convert(&self.registry, token, user_input)
    }

    /// The string to hand to the host's clipboard, when `item` is a computed result.
    pub fn on_execute<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match item {
            Item::Result(entry) => Some(&entry.target),
            Item::Reference(_) | Item::Error(_) => None,
        }
    }
}
