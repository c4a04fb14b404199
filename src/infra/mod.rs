//! Infrastructure layer (adapters/implementations).
//!
//! Holds the IO-heavy pieces: SQLite access and process configuration.

pub mod app_config;
pub mod db;
