//! [`VehicleType`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::tender::Vehicle;

/// Reference lookup entry describing a kind of [`Vehicle`] (car, truck, …).
///
/// [`Vehicle`]s reference a [`VehicleType`] by ID without ownership: deleting
/// a [`VehicleType`] orphans the references and is not cascaded.
#[derive(Clone, Debug)]
pub struct VehicleType {
    /// ID of this [`VehicleType`].
    pub id: Id,

    /// [`Name`] of this [`VehicleType`].
    pub name: Name,
}

/// ID of a [`VehicleType`].
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

/// Name of a [`VehicleType`].
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
