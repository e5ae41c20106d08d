//! [`Command`] for editing the details of a [`Tender`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{tender, Tender},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for editing the title, client and planned dates of a
/// [`Tender`].
#[derive(Clone, Debug, From)]
pub struct UpdateTender {
    /// ID of the [`Tender`] to edit.
    pub tender_id: tender::Id,

    /// New title of the [`Tender`].
    pub title: tender::Title,

    /// New client of the [`Tender`].
    pub client: tender::Client,

    /// New planned start of the work.
    pub start_date: tender::StartDateTime,

    /// New planned end of the work.
    pub end_date: tender::EndDateTime,
}

impl<Db, Ai> Command<UpdateTender> for Service<Db, Ai>
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
        cmd: UpdateTender,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTender {
            tender_id,
            title,
            client,
            start_date,
            end_date,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;

        tender.title = title;
        tender.client = client;
        tender.start_date = start_date;
        tender.end_date = end_date;

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`UpdateTender`] [`Command`] execution.
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
