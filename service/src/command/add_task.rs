//! [`Command`] for adding a [`Task`] to a [`Tender`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        employee,
        tender::{self, task, Task},
        Employee, Tender,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Task`] to a [`Tender`].
///
/// An unassigned [`Task`] starts as [`task::Status::Todo`] with an empty
/// history. Providing an assignee makes it [`task::Status::InProgress`]
/// right away, with the assignment moment (defaulting to the moment of
/// addition) seeding the history. Either way, a completed [`Tender`]
/// becomes incomplete again.
#[derive(Clone, Debug, From)]
pub struct AddTask {
    /// ID of the [`Tender`] to add the [`Task`] to.
    pub tender_id: tender::Id,

    /// Title of the added [`Task`].
    pub title: task::Title,

    /// Description of the added [`Task`].
    pub description: task::Description,

    /// Due date of the added [`Task`].
    pub due_date: task::DueDateTime,

    /// ID of the [`Employee`] to assign the added [`Task`] to right away.
    pub assigned_to: Option<employee::Id>,

    /// Moment of the initial assignment.
    ///
    /// Ignored without [`AddTask::assigned_to`], and defaults to the moment
    /// of addition.
    pub assigned_at: Option<task::AssignmentDateTime>,
}

impl<Db, Ai> Command<AddTask> for Service<Db, Ai>
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

    async fn execute(&self, cmd: AddTask) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddTask {
            tender_id,
            title,
            description,
            due_date,
            assigned_to,
            assigned_at,
        } = cmd;

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;

        let mut task = Task {
            id: task::Id::new(),
            title,
            description,
            due_date,
            status: task::Status::Todo,
            assigned_to: None,
            assigned_at: None,
            completed_at: None,
            assignment_history: vec![],
        };
        if let Some(employee_id) = assigned_to {
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

            let at = assigned_at.unwrap_or_else(|| DateTime::now().coerce());
            task.status = task::Status::InProgress;
            task.assigned_to = Some(employee_id);
            task.assigned_at = Some(at);
            task.assignment_history.push(task::HistoryEntry {
                assigned_to: employee_id,
                assigned_at: at,
            });
        }

        tender.tasks.push(task);
        tender.recompute_completion();

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`AddTask`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),

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
    use common::{
        operations::{All, By, Select},
        DateTime,
    };

    use crate::{
        domain::{employee, tender::task, Tender},
        infra::{assistant, store::InMemory, Store as _},
        Service,
    };

    use super::{AddTask, Command as _};

    async fn service() -> (Service<InMemory, assistant::Static>, Vec<Tender>)
    {
        let store = InMemory::seeded();
        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let assistant =
            assistant::Static(Err(assistant::Error("unused".into())));
        (Service::new(store, assistant), tenders)
    }

    #[tokio::test]
    async fn added_task_starts_pending_and_unassigned() {
        let (service, tenders) = service().await;

        let before = tenders[0].tasks.len();
        let tender = service
            .execute(AddTask {
                tender_id: tenders[0].id,
                title: "Prepare Handover Checklist".parse().unwrap(),
                description: String::new().into(),
                due_date: DateTime::now().coerce(),
                assigned_to: None,
                assigned_at: None,
            })
            .await
            .unwrap();

        assert_eq!(tender.tasks.len(), before + 1);
        let task = tender.tasks.last().unwrap();
        assert_eq!(task.status, task::Status::Todo);
        assert_eq!(task.assigned_to, None);
        assert_eq!(task.completed_at, None);
        assert!(task.assignment_history.is_empty());
        assert_eq!(tender.completed_at, None);
    }

    #[tokio::test]
    async fn assigned_at_birth_starts_in_progress_with_history() {
        let (service, tenders) = service().await;
        let employee = service
            .store()
            .execute(Select(By::<Vec<_>, _>::new(employee::Status::Active)))
            .await
            .unwrap()[0]
            .id;

        let tender = service
            .execute(AddTask {
                tender_id: tenders[0].id,
                title: "Compile Compliance Dossier".parse().unwrap(),
                description: String::new().into(),
                due_date: DateTime::now().coerce(),
                assigned_to: Some(employee),
                assigned_at: None,
            })
            .await
            .unwrap();

        let task = tender.tasks.last().unwrap();
        assert_eq!(task.status, task::Status::InProgress);
        assert_eq!(task.assigned_to, Some(employee));
        assert!(task.assigned_at.is_some());
        assert_eq!(task.assignment_history.len(), 1);
    }
}
