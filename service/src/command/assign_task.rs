//! [`Command`] for assigning a [`Task`] to an [`Employee`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        employee,
        tender::{self, task},
        Employee, Tender,
    },
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Task;

use super::Command;

/// [`Command`] for assigning a [`Task`] to an [`Employee`], or unassigning
/// it.
///
/// Assigning records the moment of assignment, appends it to the [`Task`]'s
/// assignment history, and moves a [`task::Status::Todo`] [`Task`] to
/// [`task::Status::InProgress`]. Re-assigning to the same [`Employee`] is a
/// no-op leaving the history untouched. Unassigning resets the [`Task`] to
/// [`task::Status::Todo`] and discards its completion.
#[derive(Clone, Copy, Debug, From)]
pub struct AssignTask {
    /// ID of the [`Tender`] containing the [`Task`].
    pub tender_id: tender::Id,

    /// ID of the [`Task`] to (un)assign.
    pub task_id: task::Id,

    /// ID of the [`Employee`] to assign the [`Task`] to, or [`None`] to
    /// unassign it.
    pub employee: Option<employee::Id>,
}

impl<Db, Ai> Command<AssignTask> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<store::Error>,
        > + Store<Update<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AssignTask) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AssignTask {
            tender_id,
            task_id,
            employee,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        let current = tender
            .task(task_id)
            .ok_or(E::TaskNotExists(task_id))
            .map_err(tracerr::wrap!())?
            .assigned_to;

        if let Some(employee_id) = employee {
            let assignee = self
                .store()
                .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::EmployeeNotExists(employee_id))
                .map_err(tracerr::wrap!())?;
            if !assignee.is_active() {
                return Err(tracerr::new!(E::EmployeeInactive(employee_id)));
            }
            if current == Some(employee_id) {
                return Ok(tender);
            }
        }

        let Some(task) = tender.task_mut(task_id) else {
            return Err(tracerr::new!(E::TaskNotExists(task_id)));
        };
        if let Some(employee_id) = employee {
            let at = DateTime::now().coerce();
            task.assigned_to = Some(employee_id);
            task.assigned_at = Some(at);
            task.assignment_history.push(task::HistoryEntry {
                assigned_to: employee_id,
                assigned_at: at,
            });
            if task.status == task::Status::Todo {
                task.status = task::Status::InProgress;
            }
        } else {
            task.assigned_to = None;
            task.assigned_at = None;
            task.status = task::Status::Todo;
            task.completed_at = None;
        }
        tender.recompute_completion();

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`AssignTask`] [`Command`] execution.
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

    /// [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    #[from(ignore)]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] is not [`employee::Status::Active`].
    #[display("`Employee(id: {_0})` is not active")]
    #[from(ignore)]
    EmployeeInactive(#[error(not(source))] employee::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{
            employee,
            tender::{self, task},
            Tender,
        },
        infra::{assistant, store::InMemory, Store as _},
        Service,
    };
    use common::operations::{All, By, Select};

    use super::{AssignTask, Command as _, ExecutionError as E};

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

    async fn active_employee(
        service: &Service<InMemory, assistant::Static>,
    ) -> employee::Id {
        let employees = service
            .store()
            .execute(Select(By::<Vec<_>, _>::new(employee::Status::Active)))
            .await
            .unwrap();
        employees[0].id
    }

    fn unassigned_task(tender: &Tender) -> task::Id {
        tender
            .tasks
            .iter()
            .find(|t| t.assigned_to.is_none())
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn assignment_starts_task_and_records_history() {
        let (service, tenders) = service().await;
        let tender_id = tenders[0].id;
        let task_id = unassigned_task(&tenders[0]);
        let employee = active_employee(&service).await;

        let tender = service
            .execute(AssignTask {
                tender_id,
                task_id,
                employee: Some(employee),
            })
            .await
            .unwrap();

        let task = tender.task(task_id).unwrap();
        assert_eq!(task.assigned_to, Some(employee));
        assert!(task.assigned_at.is_some());
        assert_eq!(task.status, task::Status::InProgress);
        assert_eq!(task.assignment_history.len(), 1);
        assert_eq!(task.assignment_history[0].assigned_to, employee);
    }

    #[tokio::test]
    async fn reassignment_to_same_employee_is_noop() {
        let (service, tenders) = service().await;
        let tender_id = tenders[0].id;
        let task_id = unassigned_task(&tenders[0]);
        let employee = active_employee(&service).await;

        let cmd = AssignTask {
            tender_id,
            task_id,
            employee: Some(employee),
        };
        let before = service.execute(cmd).await.unwrap();
        let after = service.execute(cmd).await.unwrap();

        let task = after.task(task_id).unwrap();
        assert_eq!(task.assignment_history.len(), 1);
        assert_eq!(
            task.assigned_at,
            before.task(task_id).unwrap().assigned_at,
        );
    }

    #[tokio::test]
    async fn unassignment_resets_task_and_tender_completion() {
        let (service, tenders) = service().await;
        let tender = tenders
            .iter()
            .find(|t| {
                t.tasks
                    .iter()
                    .any(|task| task.status == task::Status::Done)
            })
            .unwrap();
        let done = tender
            .tasks
            .iter()
            .find(|t| t.status == task::Status::Done)
            .unwrap();

        let updated = service
            .execute(AssignTask {
                tender_id: tender.id,
                task_id: done.id,
                employee: None,
            })
            .await
            .unwrap();

        let task = updated.task(done.id).unwrap();
        assert_eq!(task.status, task::Status::Todo);
        assert_eq!(task.assigned_to, None);
        assert_eq!(task.assigned_at, None);
        assert_eq!(task.completed_at, None);
        // History survives unassignment.
        assert!(!task.assignment_history.is_empty());
        assert_eq!(updated.completed_at, None);
    }

    #[tokio::test]
    async fn inactive_employee_is_rejected() {
        let (service, tenders) = service().await;
        let tender_id = tenders[0].id;
        let task_id = unassigned_task(&tenders[0]);
        let inactive = service
            .store()
            .execute(Select(By::<Vec<_>, _>::new(
                employee::Status::Inactive,
            )))
            .await
            .unwrap()[0]
            .id;

        let err = service
            .execute(AssignTask {
                tender_id,
                task_id,
                employee: Some(inactive),
            })
            .await
            .unwrap_err();

        let err: E = *err.as_ref();
        assert!(matches!(err, E::EmployeeInactive(id) if id == inactive));
    }

    #[tokio::test]
    async fn unknown_tender_and_task_are_reported() {
        let (service, tenders) = service().await;

        let missing_tender = tender::Id::new();
        let err = service
            .execute(AssignTask {
                tender_id: missing_tender,
                task_id: task::Id::new(),
                employee: None,
            })
            .await
            .unwrap_err();
        let err: E = *err.as_ref();
        assert!(
            matches!(err, E::TenderNotExists(id) if id == missing_tender),
        );

        let missing_task = task::Id::new();
        let err = service
            .execute(AssignTask {
                tender_id: tenders[0].id,
                task_id: missing_task,
                employee: None,
            })
            .await
            .unwrap_err();
        let err: E = *err.as_ref();
        assert!(matches!(err, E::TaskNotExists(id) if id == missing_task));
    }
}
