//! Core library for strkit
//!
//! This crate implements the **Functional Core** of the strkit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The strkit project uses a two-crate architecture:
//!
//! - **`strkit_core`** (this crate): the functor registry, the conversion-dispatch
//!   protocol and every leaf conversion. No I/O beyond process-local randomness.
//! - **`strkit`**: the host. CLI rendering, MCP transports and output handling.
//!
//! ## Dispatch Protocol
//!
//! A [`Functor`] is a named conversion operation. Functors are registered once into a
//! [`Registry`], listed through the [`catalog`] as [`CatalogEntry`] values, and invoked
//! through the [`dispatch`] module, which resolves a reference token, runs the
//! conversion, normalizes every [`Conversion`] into a [`ResultEntry`], and contains any
//! failure into a single [`ErrorEntry`].
//!
//! [`StringPlugin`] bundles all of the above into the surface a launcher host consumes:
//! `on_start`, `on_catalog`, `on_suggest` and `on_execute`.
//!
//! # Module Organization
//!
//! - [`functor`]: the [`Functor`] trait and the [`Conversion`] sum type
//! - [`functors`]: leaf conversions (hashing, quoting, URL handling, random generation)
//! - [`normalize`]: the single rule turning conversions into result entries
//! - [`registry`]: insertion-ordered, collision-detecting functor storage
//! - [`catalog`]: listable reference entries built from the registry
//! - [`dispatch`]: token resolution, invocation and error containment
//! - [`plugin`]: the host-facing plugin surface
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use strkit_core::{Item, PluginConfig, StringPlugin};
//!
//! let plugin = StringPlugin::on_start(PluginConfig::default());
//! let catalog = plugin.on_catalog();
//! let rot13 = catalog.iter().find(|entry| entry.target == "rot13").unwrap();
//!
//! let items = plugin
//!     .on_suggest(Some("Hello"), &[Item::Reference(rot13.clone())])
//!     .unwrap();
//! assert_eq!(items.len(), 1);
//! ```

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod functor;
pub mod functors;
pub mod normalize;
pub mod plugin;
pub mod registry;

pub use catalog::{build_catalog, ArgsHint, CatalogEntry, HitHint, ItemCategory};
pub use dispatch::{resolve_and_convert, ErrorEntry, Suggestions};
pub use error::ConvertError;
pub use functor::{Conversion, Functor, FunctorInfo};
pub use normalize::{normalize, ResultEntry, DEFAULT_DESCRIPTION};
pub use plugin::{Item, PluginConfig, StringPlugin};
pub use registry::{HashCasePolicy, Registration, Registry};
