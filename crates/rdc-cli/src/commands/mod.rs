//! CLI command implementations

pub mod drop;
pub mod inspect;
pub mod run;
pub mod tables;
