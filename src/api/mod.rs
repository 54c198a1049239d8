//! API module
//!
//! Contains HTTP request handlers for the mock endpoints

pub mod applications;
pub mod auth;
pub mod system;
pub mod utils;
