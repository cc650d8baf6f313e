//! Functor registry
//!
//! The registry is built once at startup and only read afterwards. Registration never
//! overwrites: the first functor registered under a name wins and later ones are
//! reported as collisions.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::functor::Functor;
use crate::functors;

/// How hash algorithm identifiers that differ only by case are registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashCasePolicy {
    /// Skip a spelling when its upper-case form is also available.
    #[default]
    PreferUpper,
    /// Register every spelling and let the registry report the collisions.
    KeepAll,
}

impl HashCasePolicy {
    /// Apply the policy to an algorithm list, keeping the list order.
    pub fn filter<'a>(&self, available: &[&'a str]) -> Vec<&'a str> {
        match self {
            HashCasePolicy::KeepAll => available.to_vec(),
            HashCasePolicy::PreferUpper => available
                .iter()
                .copied()
                .filter(|algo| {
                    let upper = algo.to_uppercase();
                    upper == *algo || !available.iter().any(|other| *other == upper)
                })
                .collect(),
        }
    }
}

impl FromStr for HashCasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefer-upper" => Ok(HashCasePolicy::PreferUpper),
            "keep-all" => Ok(HashCasePolicy::KeepAll),
            other => Err(format!(
                "Invalid hash case policy: {other}. Valid policies: prefer-upper, keep-all"
            )),
        }
    }
}

impl std::fmt::Display for HashCasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashCasePolicy::PreferUpper => write!(f, "prefer-upper"),
            HashCasePolicy::KeepAll => write!(f, "keep-all"),
        }
    }
}

/// Outcome of [`Registry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    /// A functor with this name was already registered and was kept.
    Duplicate(String),
}

/// Insertion-ordered mapping from functor name to functor.
#[derive(Default)]
pub struct Registry {
    functors: IndexMap<String, Box<dyn Functor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry with every built-in functor.
    pub fn with_defaults(policy: HashCasePolicy) -> Self {
        let mut registry = Self::new();
        let mut collisions = 0;

        for functor in functors::default_functors(policy) {
            if let Registration::Duplicate(_) = registry.register(functor) {
                collisions += 1;
            }
        }

        log::debug!(
            "registered {} functors ({} collisions, hash case policy: {})",
            registry.len(),
            collisions,
            policy
        );

        registry
    }

    pub fn register(&mut self, functor: Box<dyn Functor>) -> Registration {
        let name = functor.name().to_string();

        if self.functors.contains_key(&name) {
            log::warn!("functor declared twice: {name}");
            return Registration::Duplicate(name);
        }

        self.functors.insert(name, functor);
        Registration::Inserted
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn Functor> {
        self.functors.get(name).map(|functor| functor.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Functor> {
        self.functors.values().map(|functor| functor.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.functors.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.functors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functors.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("functors", &self.names())
            .finish()
    }
}
