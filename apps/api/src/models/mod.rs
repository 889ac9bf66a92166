//! In-memory record shapes handed to the scoring core by the request layer.

pub mod applicant;
pub mod job;
pub mod lenient;
