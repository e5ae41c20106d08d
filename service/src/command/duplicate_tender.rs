//! [`Command`] for duplicating a [`Tender`].

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        tender::{self, task, Task},
        Tender,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for duplicating a [`Tender`] as a fresh starting point.
///
/// The duplicate carries the original's client and [`Task`] definitions
/// under a `Copy of` title, with every [`Task`] reset to an unassigned
/// [`task::Status::Todo`] and an empty history. Vehicles, attachments and
/// remarks are not carried over, and both planned dates are set to the
/// moment of duplication.
#[derive(Clone, Copy, Debug, From)]
pub struct DuplicateTender {
    /// ID of the [`Tender`] to duplicate.
    pub tender_id: tender::Id,
}

impl<Db, Ai> Command<DuplicateTender> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<Insert<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DuplicateTender,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DuplicateTender { tender_id } = cmd;

        let original = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;

        let now = DateTime::now();
        let duplicate = Tender {
            id: tender::Id::new(),
            title: original.title.duplicated(),
            client: original.client,
            start_date: now.coerce(),
            end_date: now.coerce(),
            tasks: original
                .tasks
                .into_iter()
                .map(|t| Task {
                    id: task::Id::new(),
                    title: t.title,
                    description: t.description,
                    due_date: t.due_date,
                    status: task::Status::Todo,
                    assigned_to: None,
                    assigned_at: None,
                    completed_at: None,
                    assignment_history: vec![],
                })
                .collect(),
            vehicles: vec![],
            attachments: vec![],
            remarks: tender::Remarks::default(),
            completed_at: None,
        };

        self.store()
            .execute(Insert(duplicate.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(duplicate)
    }
}

/// Error of [`DuplicateTender`] [`Command`] execution.
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
