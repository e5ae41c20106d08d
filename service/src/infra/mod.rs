//! Infrastructure layer.

pub mod assistant;
pub mod store;

pub use self::{assistant::Assistant, store::Store};
