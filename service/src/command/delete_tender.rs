//! [`Command`] for deleting a [`Tender`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{tender, Tender},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Tender`] along with everything it owns.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteTender {
    /// ID of the [`Tender`] to delete.
    pub tender_id: tender::Id,
}

impl<Db, Ai> Command<DeleteTender> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<
            Delete<By<Tender, tender::Id>>,
            Ok = (),
            Err = Traced<store::Error>,
        >,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteTender,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteTender { tender_id } = cmd;

        let tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;

        self.store()
            .execute(Delete(By::<Tender, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`DeleteTender`] [`Command`] execution.
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
