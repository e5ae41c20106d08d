//! Read models of the [`Service`].
//!
//! [`Service`]: crate::Service

pub mod task;
pub mod timeline;
