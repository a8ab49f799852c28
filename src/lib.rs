//! confdeck - a terminal companion for conference schedules
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod conference;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod search;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_model;
