//! [`Command`] for updating the [`Remarks`] of a [`Tender`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{tender, Tender},
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Remarks;

use super::Command;

/// [`Command`] for updating the free-text [`Remarks`] of a [`Tender`].
#[derive(Clone, Debug, From)]
pub struct UpdateTenderRemarks {
    /// ID of the [`Tender`] which [`Remarks`] should be updated.
    pub tender_id: tender::Id,

    /// New [`Remarks`] of the [`Tender`].
    pub remarks: tender::Remarks,
}

impl<Db, Ai> Command<UpdateTenderRemarks> for Service<Db, Ai>
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
        cmd: UpdateTenderRemarks,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTenderRemarks { tender_id, remarks } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;

        tender.remarks = remarks;

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`UpdateTenderRemarks`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),
}
