//! [`Command`] for editing the details of a [`Task`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        tender::{self, task},
        Tender,
    },
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Task;

use super::Command;

/// [`Command`] for editing the title, description and due date of a
/// [`Task`].
///
/// Lifecycle fields are untouched: assignment, status and completion are
/// managed by their own [`Command`]s.
#[derive(Clone, Debug, From)]
pub struct UpdateTaskDetails {
    /// ID of the [`Tender`] containing the [`Task`].
    pub tender_id: tender::Id,

    /// ID of the [`Task`] to edit.
    pub task_id: task::Id,

    /// New title of the [`Task`].
    pub title: task::Title,

    /// New description of the [`Task`].
    pub description: task::Description,

    /// New due date of the [`Task`].
    pub due_date: task::DueDateTime,
}

impl<Db, Ai> Command<UpdateTaskDetails> for Service<Db, Ai>
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
        cmd: UpdateTaskDetails,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTaskDetails {
            tender_id,
            task_id,
            title,
            description,
            due_date,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        let Some(task) = tender.task_mut(task_id) else {
            return Err(tracerr::new!(E::TaskNotExists(task_id)));
        };

        task.title = title;
        task.description = description;
        task.due_date = due_date;

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`UpdateTaskDetails`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),

    /// [`Task`] doesn't exist.
    #[display("`Task(id: {_0})` does not exist")]
    #[from(ignore)]
    TaskNotExists(#[error(not(source))] task::Id),
}
