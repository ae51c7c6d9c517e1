//! The Shoehorn CLI client library.
//!
//! This crate provides the core functionality for the Shoehorn CLI client:
//! profile-based configuration, device-flow and token authentication, the
//! typed API access layer, and command execution.
//!
//! # Modules
//!
//! - `actions`: Command handlers
//! - `auth`: Device-authorization flow and token login
//! - `catalog`: Typed catalog resources and their accessors
//! - `client`: HTTP transport and error taxonomy
//! - `commands`: CLI command parsing
//! - `config`: Profile and credential store
//! - `format`: Output format selection and structured rendering
//! - `manifests`: Server-side manifest validation and conversion
//! - `overview`: Composite entity detail view
//! - `ui`: Terminal presentation

pub mod actions;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod manifests;
pub mod overview;
pub mod ui;
