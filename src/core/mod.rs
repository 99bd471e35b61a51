//! Core library components.
//!
//! This module contains the credential flow: configuration lookup, profile
//! inspection, caller authentication, role assumption, and dotfile
//! reconciliation.

pub mod assume;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod dotfile;
pub mod profile;
pub mod report;
pub mod session;
