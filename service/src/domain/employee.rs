//! [`Employee`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::tender::Task;

/// Staff member of the company.
#[derive(Clone, Debug)]
pub struct Employee {
    /// ID of this [`Employee`].
    pub id: Id,

    /// Display [`Name`] of this [`Employee`].
    pub name: Name,

    /// Registry [`Code`] of this [`Employee`].
    pub code: Code,

    /// [`JobTitle`] of this [`Employee`].
    pub job_title: JobTitle,

    /// Employment [`Status`] of this [`Employee`].
    pub status: Status,
}

impl Employee {
    /// Indicates whether this [`Employee`] is [`Status::Active`], and so may
    /// be assigned to [`Task`]s.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// ID of an [`Employee`].
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

/// Name of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty()
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Registry code of an [`Employee`] (like `EC001`).
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Code(String);

impl Code {
    /// Creates a new [`Code`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        (code.trim() == code && !code.is_empty()).then_some(Self(code))
    }
}

impl FromStr for Code {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Code`")
    }
}

/// Job title of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct JobTitle(String);

impl JobTitle {
    /// Creates a new [`JobTitle`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        (title.trim() == title && !title.is_empty()).then_some(Self(title))
    }
}

impl FromStr for JobTitle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `JobTitle`")
    }
}

define_kind! {
    #[doc = "Employment status of an [`Employee`]."]
    enum Status {
        #[doc = "[`Employee`] works in the company and may take new tasks."]
        Active = 1,

        #[doc = "[`Employee`] left the company and may not take new tasks."]
        Inactive = 2,
    }
}
