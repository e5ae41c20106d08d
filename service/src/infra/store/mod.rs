//! [`Store`]-related implementations.

pub mod in_memory;

use derive_more::{Display, Error as StdError};

use crate::domain::{employee, tender, vehicle_type};
#[cfg(doc)]
use crate::domain::{Employee, Tender, VehicleType};

pub use self::in_memory::InMemory;

/// Operation over the backing store of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Store;

/// [`Store`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Employee`] with the provided ID is not present in the [`Store`].
    #[display("`Employee(id: {_0})` is not present in the store")]
    UnknownEmployee(#[error(not(source))] employee::Id),

    /// [`Tender`] with the provided ID is not present in the [`Store`].
    #[display("`Tender(id: {_0})` is not present in the store")]
    UnknownTender(#[error(not(source))] tender::Id),

    /// [`VehicleType`] with the provided ID is not present in the [`Store`].
    #[display("`VehicleType(id: {_0})` is not present in the store")]
    UnknownVehicleType(#[error(not(source))] vehicle_type::Id),
}
