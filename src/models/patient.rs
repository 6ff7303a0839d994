use serde::Serialize;

use crate::models::Person;
use crate::models::doctor::Doctor;
use crate::models::observation::Observation;

/// A monitored patient and the ordered observations taken on them.
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    name: String,
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Patient {
            name: name.into(),
            observations: Vec::new(),
        }
    }

    /// Records a new observation for this patient and returns it.
    ///
    /// When `day` is `None`, the day after the previous observation is
    /// used, or day 0 for a patient's first observation. When a doctor is
    /// supplied, the observation carries the doctor's name and the doctor
    /// is notified via [`Doctor::made_observation`] before the observation
    /// is appended.
    pub fn add_observation(
        &mut self,
        value: impl Into<String>,
        day: Option<u32>,
        doctor: Option<&mut Doctor>,
    ) -> Observation {
        let day =
            day.unwrap_or_else(|| self.observations.last().map_or(0, |last| last.day() + 1));

        let observation = Observation {
            day,
            value: value.into(),
            doctor: doctor.as_ref().map(|d| d.name().to_string()),
        };

        if let Some(doctor) = doctor {
            doctor.made_observation(&observation, self);
        }

        self.observations.push(observation.clone());
        observation
    }

    /// All observations in recording order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The most recent observation, or `None` for a patient without any.
    pub fn last_observation(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

impl Person for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}
