// Applicant screening: education, experience and skills scored against a
// job's stated requirements. The engine is pure; handlers adapt it to HTTP
// and hand outcomes to the notification dispatcher.

pub mod education;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod review;
pub mod skills;
