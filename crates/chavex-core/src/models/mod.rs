//! Data models: configuration and report structures.

pub mod config;
pub mod report;
