//! Reports over the stored data.

pub mod performance;

pub use self::performance::Performance;
