//! [`Command`] for creating a [`VehicleType`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{vehicle_type, VehicleType},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`VehicleType`].
#[derive(Clone, Debug, From)]
pub struct CreateVehicleType {
    /// Name of the created [`VehicleType`].
    pub name: vehicle_type::Name,
}

impl<Db, Ai> Command<CreateVehicleType> for Service<Db, Ai>
where
    Db: Store<Insert<VehicleType>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = VehicleType;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateVehicleType,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateVehicleType { name } = cmd;

        let vehicle_type = VehicleType {
            id: vehicle_type::Id::new(),
            name,
        };

        self.store()
            .execute(Insert(vehicle_type.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vehicle_type)
    }
}

/// Error of [`CreateVehicleType`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
