//! [`Command`] for adding a [`Vehicle`] to a [`Tender`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        tender::{self, vehicle, Vehicle},
        vehicle_type, Tender, VehicleType,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for adding a [`Vehicle`] to a [`Tender`].
///
/// The referenced [`VehicleType`] must exist at the moment of addition.
#[derive(Clone, Debug, From)]
pub struct AddVehicle {
    /// ID of the [`Tender`] to add the [`Vehicle`] to.
    pub tender_id: tender::Id,

    /// Make of the added [`Vehicle`].
    pub make: vehicle::Make,

    /// Model of the added [`Vehicle`].
    pub model: vehicle::Model,

    /// Model year of the added [`Vehicle`].
    pub model_year: vehicle::ModelYear,

    /// Number of units leased.
    pub qty: vehicle::Qty,

    /// ID of the [`VehicleType`] of the added [`Vehicle`].
    pub vehicle_type_id: vehicle_type::Id,

    /// [`vehicle::DriverOption`] the [`Vehicle`] is leased with.
    pub driver_option: vehicle::DriverOption,

    /// Lease period, if agreed.
    pub lease_period: Option<vehicle::LeasePeriod>,
}

impl<Db, Ai> Command<AddVehicle> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Option<VehicleType>, vehicle_type::Id>>,
            Ok = Option<VehicleType>,
            Err = Traced<store::Error>,
        > + Store<Update<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddVehicle) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddVehicle {
            tender_id,
            make,
            model,
            model_year,
            qty,
            vehicle_type_id,
            driver_option,
            lease_period,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        self.store()
            .execute(Select(By::<Option<VehicleType>, _>::new(
                vehicle_type_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VehicleTypeNotExists(vehicle_type_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        tender.vehicles.push(Vehicle {
            id: vehicle::Id::new(),
            make,
            model,
            model_year,
            qty,
            vehicle_type_id,
            driver_option,
            lease_period,
        });

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`AddVehicle`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),

    /// [`VehicleType`] doesn't exist.
    #[display("`VehicleType(id: {_0})` does not exist")]
    #[from(ignore)]
    VehicleTypeNotExists(#[error(not(source))] vehicle_type::Id),
}
