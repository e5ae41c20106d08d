//! [`Command`] for deleting a [`Vehicle`] from a [`Tender`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        tender::{self, vehicle},
        Tender,
    },
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Vehicle;

use super::Command;

/// [`Command`] for deleting a [`Vehicle`] from its [`Tender`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteVehicle {
    /// ID of the [`Tender`] containing the [`Vehicle`].
    pub tender_id: tender::Id,

    /// ID of the [`Vehicle`] to delete.
    pub vehicle_id: vehicle::Id,
}

impl<Db, Ai> Command<DeleteVehicle> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<Update<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteVehicle,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteVehicle {
            tender_id,
            vehicle_id,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        if !tender.vehicles.iter().any(|v| v.id == vehicle_id) {
            return Err(tracerr::new!(E::VehicleNotExists(vehicle_id)));
        }

        tender.vehicles.retain(|v| v.id != vehicle_id);

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`DeleteVehicle`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),

    /// [`Vehicle`] doesn't exist.
    #[display("`Vehicle(id: {_0})` does not exist")]
    #[from(ignore)]
    VehicleNotExists(#[error(not(source))] vehicle::Id),
}
