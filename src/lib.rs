//! Library for analysing patient inflammation data.
//!
//! Measurements live in a 2D table where each row holds the inflammation
//! data for a single patient over a number of days and each column is a
//! single day across all patients. The [`models`] module provides a small
//! in-memory clinical record relating patients, doctors, and observations.

pub mod loader;
pub mod models;
pub mod output;
pub mod stats;
pub mod table;
