//! Core of the demogen demo-data tool.
//!
//! This crate builds synthetic records and writes them as Markdown files:
//! - `generator` draws tasks, events, meetings and projects from a seeded RNG
//! - `render` turns a record into front matter plus a body template
//! - `store` manages the output directory
//! - `run` ties them together for one batch

pub mod config;
pub mod constants;
pub mod date_window;
pub mod error;
pub mod generator;
pub mod mode;
pub mod record;
pub mod render;
pub mod run;
pub mod stats;
pub mod store;

pub use error::{DemoGenError, DemoGenResult};
