//! Shared building blocks: configuration, domain types, errors and output.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
