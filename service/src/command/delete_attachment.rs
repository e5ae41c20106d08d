//! [`Command`] for deleting an [`Attachment`] from a [`Tender`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        tender::{self, attachment},
        Tender,
    },
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Attachment;

use super::Command;

/// [`Command`] for deleting an [`Attachment`] from its [`Tender`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteAttachment {
    /// ID of the [`Tender`] containing the [`Attachment`].
    pub tender_id: tender::Id,

    /// ID of the [`Attachment`] to delete.
    pub attachment_id: attachment::Id,
}

impl<Db, Ai> Command<DeleteAttachment> for Service<Db, Ai>
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
        cmd: DeleteAttachment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteAttachment {
            tender_id,
            attachment_id,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        if !tender.attachments.iter().any(|a| a.id == attachment_id) {
            return Err(tracerr::new!(E::AttachmentNotExists(attachment_id)));
        }

        tender.attachments.retain(|a| a.id != attachment_id);

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`DeleteAttachment`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),

    /// [`Attachment`] doesn't exist.
    #[display("`Attachment(id: {_0})` does not exist")]
    #[from(ignore)]
    AttachmentNotExists(#[error(not(source))] attachment::Id),
}
