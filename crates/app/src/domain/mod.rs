//! Orders Domain Concerns

pub mod orders;
