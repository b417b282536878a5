//! Token secrets and the outcome handed back to callers.

pub mod outcome;
pub mod secret;
