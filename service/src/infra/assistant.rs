//! [`Assistant`] collaborator suggesting assignees for tasks.

use derive_more::{AsRef, Display, Error as StdError, From, Into};
use tracerr::Traced;

use crate::domain::{employee, tender::Task, Employee};
#[cfg(doc)]
use crate::Service;

/// External collaborator of the [`Service`] proposing an [`Employee`] for a
/// [`Task`].
///
/// Opaque to the [`Service`]: it receives a [`Suggest`] request and returns
/// either a [`Suggestion`] or a transport [`Error`]. Whatever it returns is
/// validated by the [`Service`] before being applied.
pub use common::Handler as Assistant;

/// Request to an [`Assistant`] to propose an assignee for a [`Task`].
#[derive(Clone, Debug)]
pub struct Suggest {
    /// Brief of the [`Task`] to propose an assignee for.
    pub task: TaskBrief,

    /// [`Candidate`]s to choose from.
    ///
    /// Never empty.
    pub candidates: Vec<Candidate>,
}

/// [`Task`] fields exposed to an [`Assistant`].
#[derive(Clone, Debug)]
pub struct TaskBrief {
    /// Title of the [`Task`].
    pub title: String,

    /// Description of the [`Task`].
    pub description: String,
}

impl From<&Task> for TaskBrief {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.to_string(),
            description: task.description.to_string(),
        }
    }
}

/// [`Employee`] fields exposed to an [`Assistant`].
#[derive(Clone, Debug)]
pub struct Candidate {
    /// ID of the [`Employee`].
    pub id: employee::Id,

    /// Name of the [`Employee`].
    pub name: String,

    /// Job title of the [`Employee`].
    pub job_title: String,
}

impl From<&Employee> for Candidate {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.to_string(),
            job_title: employee.job_title.to_string(),
        }
    }
}

/// Proposal returned by an [`Assistant`].
#[derive(Clone, Debug)]
pub struct Suggestion {
    /// ID of the proposed [`Employee`].
    ///
    /// Untrusted until checked against the [`Suggest::candidates`].
    pub employee_id: employee::Id,

    /// [`Reason`] behind the proposal.
    pub reason: Reason,
}

/// Human-readable reasoning behind a [`Suggestion`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Reason(String);

/// Transport failure of an [`Assistant`].
#[derive(Clone, Debug, Display, StdError)]
#[display("`Assistant` request failed: {_0}")]
pub struct Error(#[error(not(source))] pub String);

/// [`Assistant`] always returning the same canned response.
///
/// Meant for tests and for running without a configured collaborator.
#[derive(Clone, Debug)]
pub struct Static(pub Result<Suggestion, Error>);

impl Assistant<Suggest> for Static {
    type Ok = Suggestion;
    type Err = Traced<Error>;

    async fn execute(&self, _: Suggest) -> Result<Self::Ok, Self::Err> {
        self.0.clone().map_err(tracerr::wrap!())
    }
}
