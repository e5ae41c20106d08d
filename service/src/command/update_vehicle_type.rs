//! [`Command`] for renaming a [`VehicleType`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{vehicle_type, VehicleType},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for renaming a [`VehicleType`].
#[derive(Clone, Debug, From)]
pub struct UpdateVehicleType {
    /// ID of the [`VehicleType`] to rename.
    pub vehicle_type_id: vehicle_type::Id,

    /// New name of the [`VehicleType`].
    pub name: vehicle_type::Name,
}

impl<Db, Ai> Command<UpdateVehicleType> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<VehicleType>, vehicle_type::Id>>,
            Ok = Option<VehicleType>,
            Err = Traced<store::Error>,
        > + Store<Update<VehicleType>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = VehicleType;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateVehicleType,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateVehicleType {
            vehicle_type_id,
            name,
        } = cmd;

        let mut vehicle_type = self
            .store()
            .execute(Select(By::<Option<VehicleType>, _>::new(
                vehicle_type_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VehicleTypeNotExists(vehicle_type_id))
            .map_err(tracerr::wrap!())?;

        vehicle_type.name = name;

        self.store()
            .execute(Update(vehicle_type.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vehicle_type)
    }
}

/// Error of [`UpdateVehicleType`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`VehicleType`] doesn't exist.
    #[display("`VehicleType(id: {_0})` does not exist")]
    #[from(ignore)]
    VehicleTypeNotExists(#[error(not(source))] vehicle_type::Id),
}
