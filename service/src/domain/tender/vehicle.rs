//! [`Vehicle`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::vehicle_type;
#[cfg(doc)]
use crate::domain::{Tender, VehicleType};

/// Vehicle leased for a [`Tender`].
///
/// Owned by its [`Tender`]; has no lifecycle of its own beyond being added
/// and removed.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// ID of this [`Vehicle`].
    pub id: Id,

    /// [`Make`] of this [`Vehicle`].
    pub make: Make,

    /// [`Model`] of this [`Vehicle`].
    pub model: Model,

    /// [`ModelYear`] of this [`Vehicle`].
    pub model_year: ModelYear,

    /// Number of units leased.
    pub qty: Qty,

    /// ID of the [`VehicleType`] this [`Vehicle`] references.
    pub vehicle_type_id: vehicle_type::Id,

    /// [`DriverOption`] this [`Vehicle`] is leased with.
    pub driver_option: DriverOption,

    /// Lease period, if agreed.
    pub lease_period: Option<LeasePeriod>,
}

/// ID of a [`Vehicle`].
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

/// Make of a [`Vehicle`] (like `Caterpillar`).
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Make(String);

impl Make {
    /// Creates a new [`Make`] if the given `make` is valid.
    #[must_use]
    pub fn new(make: impl Into<String>) -> Option<Self> {
        let make = make.into();
        (make.trim() == make && !make.is_empty()).then_some(Self(make))
    }
}

impl FromStr for Make {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Make`")
    }
}

/// Model of a [`Vehicle`] (like `320D L`).
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Model(String);

impl Model {
    /// Creates a new [`Model`] if the given `model` is valid.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Option<Self> {
        let model = model.into();
        (model.trim() == model && !model.is_empty()).then_some(Self(model))
    }
}

impl FromStr for Model {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Model`")
    }
}

/// Model year of a [`Vehicle`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, PartialEq,
)]
pub struct ModelYear(u16);

/// Number of [`Vehicle`] units leased.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, PartialEq,
)]
pub struct Qty(u16);

/// Lease period of a [`Vehicle`], in months.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, PartialEq,
)]
pub struct LeasePeriod(u16);

define_kind! {
    #[doc = "Way a [`Vehicle`] is operated during the lease."]
    enum DriverOption {
        #[doc = "Operated by the lessee."]
        SelfDrive = 1,

        #[doc = "Leased together with operating manpower."]
        WithManpower = 2,
    }
}
