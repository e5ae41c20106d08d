//! [`Task`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::employee;
#[cfg(doc)]
use crate::domain::{Employee, Tender};

pub use super::CompletionDateTime;

/// Unit of work within a [`Tender`].
///
/// Owned exclusively by its parent [`Tender`].
#[derive(Clone, Debug)]
pub struct Task {
    /// ID of this [`Task`].
    pub id: Id,

    /// [`Title`] of this [`Task`].
    pub title: Title,

    /// [`Description`] of this [`Task`].
    pub description: Description,

    /// [`DateTime`] this [`Task`] is due by.
    pub due_date: DueDateTime,

    /// Lifecycle [`Status`] of this [`Task`].
    pub status: Status,

    /// ID of the [`Employee`] this [`Task`] is assigned to.
    ///
    /// Absent whenever the [`Status`] is [`Status::Todo`].
    pub assigned_to: Option<employee::Id>,

    /// [`DateTime`] when the current assignee received this [`Task`].
    ///
    /// Present if and only if [`Task::assigned_to`] is.
    pub assigned_at: Option<AssignmentDateTime>,

    /// [`DateTime`] when this [`Task`] was completed.
    ///
    /// Present if and only if the [`Status`] is [`Status::Done`].
    pub completed_at: Option<CompletionDateTime>,

    /// Log of every assignment this [`Task`] has seen, oldest first.
    ///
    /// Append-only: entries are recorded on every assignment to a different
    /// [`Employee`] and never mutated or removed afterwards (in particular,
    /// unassigning does not touch the log).
    pub assignment_history: Vec<HistoryEntry>,
}

impl Task {
    /// Indicates whether this [`Task`] was past due at the provided moment.
    ///
    /// A [`Status::Done`] [`Task`] is never overdue.
    #[must_use]
    pub fn is_overdue(&self, at: common::DateTime) -> bool {
        self.status != Status::Done && at.coerce() > self.due_date
    }

    /// Indicates whether this [`Task`] was completed on or before its due
    /// calendar day (time of day is ignored).
    ///
    /// Always `false` for a non-[`Status::Done`] [`Task`].
    #[must_use]
    pub fn completed_on_time(&self) -> bool {
        self.status == Status::Done
            && self
                .completed_at
                .is_some_and(|done| done.date() <= self.due_date.date())
    }
}

/// Single record in a [`Task`]'s assignment history.
#[derive(Clone, Copy, Debug)]
pub struct HistoryEntry {
    /// ID of the [`Employee`] the [`Task`] was assigned to.
    pub assigned_to: employee::Id,

    /// [`DateTime`] when the assignment happened.
    pub assigned_at: AssignmentDateTime,
}

/// ID of a [`Task`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Title of a [`Task`].
#[derive(AsRef, Clone, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        (title.trim() == title && !title.is_empty()).then_some(Self(title))
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Description of a [`Task`].
///
/// May be empty.
#[derive(
    AsRef, Clone, Debug, Default, Display, Eq, From, Into, PartialEq,
)]
#[as_ref(str, String)]
pub struct Description(String);

define_kind! {
    #[doc = "Lifecycle status of a [`Task`]."]
    enum Status {
        #[doc = "[`Task`] is not started and has no assignee."]
        Todo = 1,

        #[doc = "[`Task`] is assigned and being worked on."]
        InProgress = 2,

        #[doc = "[`Task`] is finished."]
        Done = 3,
    }
}

/// [`DateTime`] a [`Task`] is due by.
pub type DueDateTime = DateTimeOf<unit::Due>;

/// [`DateTime`] of a [`Task`] assignment.
pub type AssignmentDateTime = DateTimeOf<unit::Assignment>;
