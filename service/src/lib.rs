//! Service contains the business logic of the application: the tender and
//! task lifecycle, and the aggregated views derived from it.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

pub use self::{command::Command, query::Query};

/// Domain service.
///
/// Owns a handle to the backing [`Store`] and to the AI [`Assistant`]
/// collaborator. There is no ambient state: the composition root constructs
/// a [`Service`] explicitly and passes it to whoever issues commands and
/// queries.
///
/// [`Assistant`]: infra::Assistant
/// [`Store`]: infra::Store
#[derive(Clone, Copy, Debug)]
pub struct Service<Db, Ai> {
    /// [`Store`] of this [`Service`].
    ///
    /// [`Store`]: infra::Store
    store: Db,

    /// [`Assistant`] collaborator of this [`Service`].
    ///
    /// [`Assistant`]: infra::Assistant
    assistant: Ai,
}

impl<Db, Ai> Service<Db, Ai> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(store: Db, assistant: Ai) -> Self {
        Self { store, assistant }
    }

    /// Returns [`Store`] of this [`Service`].
    ///
    /// [`Store`]: infra::Store
    #[must_use]
    pub fn store(&self) -> &Db {
        &self.store
    }

    /// Returns the [`Assistant`] collaborator of this [`Service`].
    ///
    /// [`Assistant`]: infra::Assistant
    #[must_use]
    pub fn assistant(&self) -> &Ai {
        &self.assistant
    }
}
