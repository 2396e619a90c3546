//! Shared plumbing for the OKD services

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod log_if_error;
pub mod logging;
pub mod service;
pub mod status;
