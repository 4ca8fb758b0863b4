//! Middleware module
//!
//! HTTP middleware for the companion service

pub mod logging;
