//! [`Command`] for creating a new [`Tender`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{tender, Tender},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Tender`].
///
/// The created [`Tender`] has no [`Task`]s, [`Vehicle`]s or [`Attachment`]s
/// yet, and so is not completed.
///
/// [`Attachment`]: tender::Attachment
/// [`Task`]: tender::Task
/// [`Vehicle`]: tender::Vehicle
#[derive(Clone, Debug, From)]
pub struct CreateTender {
    /// Title of the created [`Tender`].
    pub title: tender::Title,

    /// Client the created [`Tender`] is prepared for.
    pub client: tender::Client,

    /// Planned start of the work.
    pub start_date: tender::StartDateTime,

    /// Planned end of the work.
    pub end_date: tender::EndDateTime,
}

impl<Db, Ai> Command<CreateTender> for Service<Db, Ai>
where
    Db: Store<Insert<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateTender,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateTender {
            title,
            client,
            start_date,
            end_date,
        } = cmd;

        let tender = Tender {
            id: tender::Id::new(),
            title,
            client,
            start_date,
            end_date,
            tasks: vec![],
            vehicles: vec![],
            attachments: vec![],
            remarks: tender::Remarks::default(),
            completed_at: None,
        };

        self.store()
            .execute(Insert(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`CreateTender`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
