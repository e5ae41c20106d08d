//! [`Attachment`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Tender;

/// Document attached to a [`Tender`]: an uploaded file or an external link.
///
/// Owned by its [`Tender`]; added and removed only.
#[derive(Clone, Debug)]
pub struct Attachment {
    /// ID of this [`Attachment`].
    pub id: Id,

    /// [`Kind`] of this [`Attachment`].
    pub kind: Kind,

    /// [`Name`] of this [`Attachment`]: a file name, or a link title.
    pub name: Name,

    /// [`Url`] of this [`Attachment`].
    ///
    /// Present if and only if the [`Kind`] is [`Kind::Link`].
    pub url: Option<Url>,
}

/// ID of an [`Attachment`].
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

/// Name of an [`Attachment`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (name.trim() == name && !name.is_empty()).then_some(Self(name))
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// URL of a [`Kind::Link`] [`Attachment`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Url(String);

impl Url {
    /// Creates a new [`Url`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        (url.trim() == url && !url.is_empty()).then_some(Self(url))
    }
}

impl FromStr for Url {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Url`")
    }
}

define_kind! {
    #[doc = "Kind of an [`Attachment`]."]
    enum Kind {
        #[doc = "Uploaded file."]
        File = 1,

        #[doc = "External link."]
        Link = 2,
    }
}
