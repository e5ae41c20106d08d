//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// A single seam for everything executable in this workspace: commands and
/// queries of a service, operations over its backing store, and calls to
/// external collaborators. The `Args` type names the operation, while the
/// implementor provides the execution.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
