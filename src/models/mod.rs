//! In-memory clinical model: patients, doctors, and observations.
//!
//! Observations are created through [`Patient::add_observation`] and are
//! immutable once recorded. Doctors reference their patients by name
//! rather than owning them, so the same patient can appear under several
//! doctors.

pub mod doctor;
pub mod observation;
pub mod patient;

pub use doctor::{Doctor, ObservationRecord};
pub use observation::Observation;
pub use patient::Patient;

/// Shared identity for the people in the model.
pub trait Person {
    /// The person's display name.
    fn name(&self) -> &str;
}
