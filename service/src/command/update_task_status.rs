//! [`Command`] for moving a [`Task`] through its lifecycle.

use common::{
    operations::{By, Select, Update},
    DateTime,
};
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

/// [`Command`] for moving a [`Task`] to another [`task::Status`].
///
/// An unassigned [`Task`] cannot move forward: only an assigned one may
/// become [`task::Status::InProgress`] or [`task::Status::Done`]. Completing
/// an already completed [`Task`] keeps its original completion time. Moving
/// back to [`task::Status::Todo`] releases the assignee, and any move out of
/// [`task::Status::Done`] discards the completion time.
#[derive(Clone, Copy, Debug, From)]
pub struct UpdateTaskStatus {
    /// ID of the [`Tender`] containing the [`Task`].
    pub tender_id: tender::Id,

    /// ID of the [`Task`] to move.
    pub task_id: task::Id,

    /// [`task::Status`] to move the [`Task`] to.
    pub status: task::Status,
}

impl<Db, Ai> Command<UpdateTaskStatus> for Service<Db, Ai>
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
        cmd: UpdateTaskStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTaskStatus {
            tender_id,
            task_id,
            status,
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

        if task.assigned_to.is_none() && status != task::Status::Todo {
            return Err(tracerr::new!(E::TaskUnassigned(task_id)));
        }

        task.status = status;
        match status {
            task::Status::Done => {
                task.completed_at = task
                    .completed_at
                    .or_else(|| Some(DateTime::now().coerce()));
            }
            task::Status::Todo => {
                task.completed_at = None;
                task.assigned_to = None;
                task.assigned_at = None;
            }
            task::Status::InProgress => {
                task.completed_at = None;
            }
        }
        tender.recompute_completion();

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`UpdateTaskStatus`] [`Command`] execution.
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

    /// [`Task`] is not assigned to anyone, so cannot move forward.
    #[display("`Task(id: {_0})` is not assigned to anyone")]
    #[from(ignore)]
    TaskUnassigned(#[error(not(source))] task::Id),
}

#[cfg(test)]
mod spec {
    use common::operations::{All, By, Select};

    use crate::{
        command::AssignTask,
        domain::{tender::task, Tender},
        infra::{assistant, store::InMemory, Store as _},
        Service,
    };

    use super::{Command as _, ExecutionError as E, UpdateTaskStatus};

    async fn service() -> (Service<InMemory, assistant::Static>, Vec<Tender>)
    {
        let store = InMemory::seeded();
        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let assistant = assistant::Static(Err(assistant::Error(
            "not configured".into(),
        )));
        (Service::new(store, assistant), tenders)
    }

    #[tokio::test]
    async fn unassigned_task_cannot_move_forward() {
        let (service, tenders) = service().await;
        let tender = &tenders[0];
        let task_id = tender
            .tasks
            .iter()
            .find(|t| t.assigned_to.is_none())
            .unwrap()
            .id;

        for status in [task::Status::InProgress, task::Status::Done] {
            let err = service
                .execute(UpdateTaskStatus {
                    tender_id: tender.id,
                    task_id,
                    status,
                })
                .await
                .unwrap_err();
            let err: E = *err.as_ref();
            assert!(matches!(err, E::TaskUnassigned(id) if id == task_id));
        }
    }

    #[tokio::test]
    async fn completion_time_is_kept_on_repeated_completion() {
        let (service, tenders) = service().await;
        let (tender_id, task_id) = tenders
            .iter()
            .flat_map(|tender| {
                tender.tasks.iter().map(move |t| (tender, t))
            })
            .find(|(_, t)| t.status == task::Status::InProgress)
            .map(|(tender, t)| (tender.id, t.id))
            .unwrap();

        let cmd = UpdateTaskStatus {
            tender_id,
            task_id,
            status: task::Status::Done,
        };
        let first = service.execute(cmd).await.unwrap();
        let completed_at = first.task(task_id).unwrap().completed_at;
        assert!(completed_at.is_some());

        let second = service.execute(cmd).await.unwrap();
        assert_eq!(second.task(task_id).unwrap().completed_at, completed_at);
    }

    #[tokio::test]
    async fn moving_back_to_todo_releases_the_assignee() {
        let (service, tenders) = service().await;
        let (tender_id, task_id) = tenders
            .iter()
            .flat_map(|tender| {
                tender.tasks.iter().map(move |t| (tender, t))
            })
            .find(|(_, t)| t.assigned_to.is_some())
            .map(|(tender, t)| (tender.id, t.id))
            .unwrap();

        let tender = service
            .execute(UpdateTaskStatus {
                tender_id,
                task_id,
                status: task::Status::Todo,
            })
            .await
            .unwrap();

        let task = tender.task(task_id).unwrap();
        assert_eq!(task.status, task::Status::Todo);
        assert_eq!(task.assigned_to, None);
        assert_eq!(task.assigned_at, None);
        assert_eq!(task.completed_at, None);
    }

    #[tokio::test]
    async fn tender_completes_with_its_last_task() {
        let (service, tenders) = service().await;
        let source = &tenders[0];
        let assignee =
            source.tasks.iter().find_map(|t| t.assigned_to).unwrap();

        for task in &source.tasks {
            if task.assigned_to.is_none() {
                drop(
                    service
                        .execute(AssignTask {
                            tender_id: source.id,
                            task_id: task.id,
                            employee: Some(assignee),
                        })
                        .await
                        .unwrap(),
                );
            }
        }

        let mut last = None;
        for task in &source.tasks {
            last = Some(
                service
                    .execute(UpdateTaskStatus {
                        tender_id: source.id,
                        task_id: task.id,
                        status: task::Status::Done,
                    })
                    .await
                    .unwrap(),
            );
        }

        let last = last.unwrap();
        let expected =
            last.tasks.iter().filter_map(|t| t.completed_at).max();
        assert!(last.completed_at.is_some());
        assert_eq!(last.completed_at, expected);
    }
}
