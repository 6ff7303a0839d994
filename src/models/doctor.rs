use serde::Serialize;

use crate::models::Person;
use crate::models::observation::Observation;
use crate::models::patient::Patient;

/// An observation together with the name of the patient it was taken on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationRecord {
    pub(crate) observation: Observation,
    pub(crate) patient: String,
}

impl ObservationRecord {
    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    pub fn patient(&self) -> &str {
        &self.patient
    }
}

/// A doctor with assigned patients and a log of recorded observations.
///
/// Patients are referenced by name; the doctor does not own them.
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    name: String,
    patients: Vec<String>,
    observations: Vec<ObservationRecord>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Doctor {
            name: name.into(),
            patients: Vec::new(),
            observations: Vec::new(),
        }
    }

    /// Assigns a patient to this doctor.
    ///
    /// Assignment is by name and does not restrict who may record
    /// observations on the patient.
    pub fn assign_patient(&mut self, patient: &Patient) {
        self.patients.push(patient.name().to_string());
    }

    /// Names of the assigned patients, in assignment order.
    pub fn patients(&self) -> &[String] {
        &self.patients
    }

    /// Records that this doctor observed `observation` on `patient`.
    ///
    /// Appends exactly one record per call, in call order. Duplicate pairs
    /// are kept as-is, and the patient need not be assigned to this doctor.
    pub fn made_observation(&mut self, observation: &Observation, patient: &Patient) {
        self.observations.push(ObservationRecord {
            observation: observation.clone(),
            patient: patient.name().to_string(),
        });
    }

    /// Observations recorded by this doctor, in call order.
    pub fn observations(&self) -> &[ObservationRecord] {
        &self.observations
    }
}

impl Person for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}
