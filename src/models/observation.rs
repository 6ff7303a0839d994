use serde::Serialize;

/// A single recorded measurement for a patient.
///
/// Created only through [`Patient::add_observation`] and immutable once
/// recorded.
///
/// [`Patient::add_observation`]: crate::models::Patient::add_observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub(crate) day: u32,
    pub(crate) value: String,
    pub(crate) doctor: Option<String>,
}

impl Observation {
    /// Day the observation was taken, counted from the start of monitoring.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The observed value, free-form.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the doctor who recorded the observation, if any.
    pub fn doctor(&self) -> Option<&str> {
        self.doctor.as_deref()
    }
}
