//! [`Command`] for asking the [`Assistant`] to staff a [`Task`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        employee,
        tender::{self, task},
        Employee, Tender,
    },
    infra::{
        assistant::{self, Candidate, Suggest, Suggestion},
        store, Assistant, Store,
    },
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Task;

use super::{assign_task, AssignTask, Command};

/// [`Command`] for asking the [`Assistant`] to pick an assignee for a
/// [`Task`] and applying the pick.
///
/// Only [`employee::Status::Active`] [`Employee`]s are offered as
/// candidates. The [`Assistant`]'s answer is untrusted: a pick outside the
/// offered candidates is rejected without touching the [`Task`]. A valid
/// pick is applied through [`AssignTask`], so all of its rules hold.
#[derive(Clone, Copy, Debug, From)]
pub struct SuggestTaskAssignee {
    /// ID of the [`Tender`] containing the [`Task`].
    pub tender_id: tender::Id,

    /// ID of the [`Task`] to staff.
    pub task_id: task::Id,
}

/// Result of a [`SuggestTaskAssignee`] [`Command`]: the applied
/// [`Suggestion`] and the [`Tender`] it was applied to.
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Tender`] with the [`Suggestion`] applied.
    pub tender: Tender,

    /// Applied [`Suggestion`].
    pub suggestion: Suggestion,
}

impl<Db, Ai> Command<SuggestTaskAssignee> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Vec<Employee>, employee::Status>>,
            Ok = Vec<Employee>,
            Err = Traced<store::Error>,
        >,
    Ai: Assistant<Suggest, Ok = Suggestion, Err = Traced<assistant::Error>>,
    Self: Command<
            AssignTask,
            Ok = Tender,
            Err = Traced<assign_task::ExecutionError>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SuggestTaskAssignee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SuggestTaskAssignee { tender_id, task_id } = cmd;

        let tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;
        let task = tender
            .task(task_id)
            .ok_or(E::TaskNotExists(task_id))
            .map_err(tracerr::wrap!())?;

        let candidates: Vec<Candidate> = self
            .store()
            .execute(Select(By::<Vec<Employee>, _>::new(
                employee::Status::Active,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .iter()
            .map(Candidate::from)
            .collect();
        if candidates.is_empty() {
            return Err(tracerr::new!(E::NoCandidates));
        }

        let suggestion = self
            .assistant()
            .execute(Suggest {
                task: task.into(),
                candidates: candidates.clone(),
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !candidates.iter().any(|c| c.id == suggestion.employee_id) {
            return Err(tracerr::new!(E::InvalidSuggestion(
                suggestion.employee_id,
            )));
        }

        // The assistant is consulted without holding the state, so the
        // suggestion may no longer be applicable by now.
        let tender = self
            .execute(AssignTask {
                tender_id,
                task_id,
                employee: Some(suggestion.employee_id),
            })
            .await
            .map_err(|e| {
                tracing::warn!(
                    %tender_id, %task_id,
                    employee_id = %suggestion.employee_id,
                    "failed to apply suggestion: {e}",
                );
                e
            })
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(Output { tender, suggestion })
    }
}

/// Error of [`SuggestTaskAssignee`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error, From)]
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

    /// No [`employee::Status::Active`] [`Employee`]s to offer.
    #[display("no active employees to suggest from")]
    NoCandidates,

    /// [`Assistant`] request failed.
    #[display("{_0}")]
    Assistant(assistant::Error),

    /// [`Assistant`] picked an [`Employee`] outside the offered candidates.
    #[display("`Employee(id: {_0})` was not among the offered candidates")]
    #[from(ignore)]
    InvalidSuggestion(#[error(not(source))] employee::Id),

    /// Applying the [`Suggestion`] failed.
    #[display("failed to apply the suggestion: {_0}")]
    Application(assign_task::ExecutionError),
}

#[cfg(test)]
mod spec {
    use common::operations::{All, By, Select};

    use crate::{
        domain::{employee, tender::task, Tender},
        infra::{
            assistant::{self, Reason, Suggestion},
            store::InMemory,
            Store as _,
        },
        Service,
    };

    use super::{Command as _, ExecutionError as E, SuggestTaskAssignee};

    async fn seeded() -> (InMemory, Vec<Tender>, employee::Id) {
        let store = InMemory::seeded();
        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let active = store
            .execute(Select(By::<Vec<_>, _>::new(employee::Status::Active)))
            .await
            .unwrap();
        (store, tenders, active[0].id)
    }

    fn suggestion(employee_id: employee::Id) -> Suggestion {
        Suggestion {
            employee_id,
            reason: Reason::from(
                "Their profile matches the task best".to_owned(),
            ),
        }
    }

    #[tokio::test]
    async fn valid_suggestion_is_applied() {
        let (store, tenders, active) = seeded().await;
        let tender = &tenders[0];
        let task_id = tender
            .tasks
            .iter()
            .find(|t| t.assigned_to.is_none())
            .unwrap()
            .id;
        let service = Service::new(
            store,
            assistant::Static(Ok(suggestion(active))),
        );

        let out = service
            .execute(SuggestTaskAssignee {
                tender_id: tender.id,
                task_id,
            })
            .await
            .unwrap();

        assert_eq!(out.suggestion.employee_id, active);
        let task = out.tender.task(task_id).unwrap();
        assert_eq!(task.assigned_to, Some(active));
        assert_eq!(task.status, task::Status::InProgress);
    }

    #[tokio::test]
    async fn unknown_pick_is_rejected_without_changes() {
        let (store, tenders, _) = seeded().await;
        let tender = &tenders[0];
        let task_id = tender
            .tasks
            .iter()
            .find(|t| t.assigned_to.is_none())
            .unwrap()
            .id;
        let outsider = employee::Id::new();
        let service = Service::new(
            store,
            assistant::Static(Ok(suggestion(outsider))),
        );

        let err = service
            .execute(SuggestTaskAssignee {
                tender_id: tender.id,
                task_id,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            E::InvalidSuggestion(id) if *id == outsider,
        ));
        let stored: Vec<Tender> = service
            .store()
            .execute(Select(By::<Vec<Tender>, _>::new(All)))
            .await
            .unwrap();
        let task = stored
            .iter()
            .find(|t| t.id == tender.id)
            .unwrap()
            .task(task_id)
            .unwrap();
        assert_eq!(task.assigned_to, None);
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let (store, tenders, _) = seeded().await;
        let tender = &tenders[0];
        let task_id = tender.tasks[0].id;
        let service = Service::new(
            store,
            assistant::Static(Err(assistant::Error(
                "connection reset".into(),
            ))),
        );

        let err = service
            .execute(SuggestTaskAssignee {
                tender_id: tender.id,
                task_id,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), E::Assistant(_)));
    }

    #[tokio::test]
    async fn inactive_pick_fails_application() {
        let (store, tenders, _) = seeded().await;
        let tender = &tenders[0];
        let task_id = tender
            .tasks
            .iter()
            .find(|t| t.assigned_to.is_none())
            .unwrap()
            .id;
        let inactive = store
            .execute(Select(By::<Vec<_>, _>::new(
                employee::Status::Inactive,
            )))
            .await
            .unwrap()[0]
            .id;
        let service = Service::new(
            store,
            assistant::Static(Ok(suggestion(inactive))),
        );

        let err = service
            .execute(SuggestTaskAssignee {
                tender_id: tender.id,
                task_id,
            })
            .await
            .unwrap_err();

        // An inactive employee is never offered, so the pick is invalid.
        assert!(matches!(
            err.as_ref(),
            E::InvalidSuggestion(id) if *id == inactive,
        ));
    }
}
