// Preference matching: how well a job fits an applicant's stated
// preferences, with partial credit for same-region locations and related
// categories.

pub mod categories;
pub mod handlers;
pub mod matcher;
pub mod ranking;
pub mod region;
pub mod tables;
