//! Worklog core: journal entities, validation, query utilities and
//! persistence, plus the CLI command layer consuming them.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod renderer;
pub mod store;
pub mod validation;
