//! Runs every puzzle solution in the workspace and tabulates the answers.

pub mod cli;
pub mod logging;
pub mod registry;
pub mod run;
pub mod table;
