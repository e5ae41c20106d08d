//! [`Command`] for deleting a [`VehicleType`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{vehicle_type, VehicleType},
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Vehicle;

use super::Command;

/// [`Command`] for deleting a [`VehicleType`].
///
/// [`Vehicle`]s referencing the deleted [`VehicleType`] are kept as they
/// are: the reference simply stops resolving.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteVehicleType {
    /// ID of the [`VehicleType`] to delete.
    pub vehicle_type_id: vehicle_type::Id,
}

impl<Db, Ai> Command<DeleteVehicleType> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<VehicleType>, vehicle_type::Id>>,
            Ok = Option<VehicleType>,
            Err = Traced<store::Error>,
        > + Store<
            Delete<By<VehicleType, vehicle_type::Id>>,
            Ok = (),
            Err = Traced<store::Error>,
        >,
{
    type Ok = VehicleType;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteVehicleType,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteVehicleType { vehicle_type_id } = cmd;

        let vehicle_type = self
            .store()
            .execute(Select(By::<Option<VehicleType>, _>::new(
                vehicle_type_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VehicleTypeNotExists(vehicle_type_id))
            .map_err(tracerr::wrap!())?;

        self.store()
            .execute(Delete(By::<VehicleType, _>::new(vehicle_type_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vehicle_type)
    }
}

/// Error of [`DeleteVehicleType`] [`Command`] execution.
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
