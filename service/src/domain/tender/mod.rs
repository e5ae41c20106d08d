//! [`Tender`] definitions.

pub mod attachment;
pub mod task;
pub mod vehicle;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::{attachment::Attachment, task::Task, vehicle::Vehicle};

/// Bid/contract project: a container of [`Task`]s with the related
/// [`Vehicle`]s and [`Attachment`]s.
#[derive(Clone, Debug)]
pub struct Tender {
    /// ID of this [`Tender`].
    pub id: Id,

    /// [`Title`] of this [`Tender`].
    pub title: Title,

    /// [`Client`] this [`Tender`] is prepared for.
    pub client: Client,

    /// [`DateTime`] when the work on this [`Tender`] is planned to start.
    pub start_date: StartDateTime,

    /// [`DateTime`] when the work on this [`Tender`] is planned to end.
    pub end_date: EndDateTime,

    /// [`Task`]s of this [`Tender`], in creation order.
    pub tasks: Vec<Task>,

    /// [`Vehicle`]s leased for this [`Tender`].
    pub vehicles: Vec<Vehicle>,

    /// [`Attachment`]s of this [`Tender`].
    pub attachments: Vec<Attachment>,

    /// Free-text [`Remarks`] about this [`Tender`].
    pub remarks: Remarks,

    /// [`DateTime`] when this [`Tender`] was completed.
    ///
    /// Derived: present if and only if the [`Task`] list is non-empty and
    /// every [`Task`] is [`task::Status::Done`], holding the greatest
    /// completion time among them. Recomputed via
    /// [`Tender::recompute_completion()`] after every [`Task`] mutation.
    pub completed_at: Option<CompletionDateTime>,
}

impl Tender {
    /// Looks up a [`Task`] of this [`Tender`] by its ID.
    #[must_use]
    pub fn task(&self, id: task::Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Looks up a [`Task`] of this [`Tender`] by its ID for mutation.
    #[must_use]
    pub fn task_mut(&mut self, id: task::Id) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Recomputes the derived [`Tender::completed_at`] field.
    ///
    /// A [`Tender`] with no [`Task`]s is never considered completed.
    pub fn recompute_completion(&mut self) {
        self.completed_at = (!self.tasks.is_empty()
            && self.tasks.iter().all(|t| t.status == task::Status::Done))
        .then(|| self.tasks.iter().filter_map(|t| t.completed_at).max())
        .flatten();
    }
}

/// ID of a [`Tender`].
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

/// Title of a [`Tender`].
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

    /// Returns the [`Title`] for a duplicate of the titled [`Tender`].
    #[must_use]
    pub fn duplicated(&self) -> Self {
        Self(format!("Copy of {}", self.0))
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Client a [`Tender`] is prepared for.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Client(String);

impl Client {
    /// Creates a new [`Client`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (name.trim() == name && !name.is_empty()).then_some(Self(name))
    }
}

impl FromStr for Client {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Client`")
    }
}

/// Free-text remarks about a [`Tender`].
///
/// May be empty.
#[derive(
    AsRef, Clone, Debug, Default, Display, Eq, From, Into, PartialEq,
)]
#[as_ref(str, String)]
pub struct Remarks(String);

/// [`DateTime`] of a planned [`Tender`] start.
pub type StartDateTime = DateTimeOf<unit::Start>;

/// [`DateTime`] of a planned [`Tender`] end.
pub type EndDateTime = DateTimeOf<unit::End>;

/// [`DateTime`] of a completion.
///
/// Shared by [`Tender`]s and their [`Task`]s: a completed [`Tender`] derives
/// its [`CompletionDateTime`] from its [`Task`]s' ones.
pub type CompletionDateTime = DateTimeOf<unit::Completion>;
