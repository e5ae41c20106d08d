//! Domain definitions.

pub mod employee;
pub mod tender;
pub mod vehicle_type;

pub use self::{employee::Employee, tender::Tender, vehicle_type::VehicleType};
