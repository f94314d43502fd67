//! Music Catalog Library
//!
//! This library exposes modules for integration testing

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod state;
pub mod templates;
pub mod test_utils;
