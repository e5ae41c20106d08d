//! [`Command`] for deleting a [`Task`].

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

/// [`Command`] for deleting a [`Task`] from its [`Tender`].
///
/// Deleting the last pending [`Task`] may complete the [`Tender`], and
/// deleting its last [`Task`] makes it incomplete: a [`Tender`] with no
/// [`Task`]s is never considered completed.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteTask {
    /// ID of the [`Tender`] containing the [`Task`].
    pub tender_id: tender::Id,

    /// ID of the [`Task`] to delete.
    pub task_id: task::Id,
}

impl<Db, Ai> Command<DeleteTask> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<Update<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteTask) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteTask { tender_id, task_id } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        if tender.task(task_id).is_none() {
            return Err(tracerr::new!(E::TaskNotExists(task_id)));
        }

        tender.tasks.retain(|t| t.id != task_id);
        tender.recompute_completion();

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`DeleteTask`] [`Command`] execution.
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

#[cfg(test)]
mod spec {
    use common::operations::{All, By, Select};

    use crate::{
        domain::{tender::task, Tender},
        infra::{assistant, store::InMemory, Store as _},
        Service,
    };

    use super::{Command as _, DeleteTask};

    #[tokio::test]
    async fn deleting_last_pending_task_completes_the_tender() {
        let store = InMemory::seeded();
        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let service = Service::new(
            store,
            assistant::Static(Err(assistant::Error("unused".into()))),
        );
        // The bridge tender has exactly one completed task.
        let source = tenders
            .iter()
            .find(|t| {
                t.tasks.iter().any(|task| task.status == task::Status::Done)
            })
            .unwrap();

        let mut tender = None;
        for task in &source.tasks {
            if task.status != task::Status::Done {
                tender = Some(
                    service
                        .execute(DeleteTask {
                            tender_id: source.id,
                            task_id: task.id,
                        })
                        .await
                        .unwrap(),
                );
            }
        }

        let tender = tender.unwrap();
        assert_eq!(tender.tasks.len(), 1);
        assert_eq!(
            tender.completed_at,
            tender.tasks[0].completed_at,
        );
        assert!(tender.completed_at.is_some());
    }
}
