//! Service layer module
//!
//! Contains the inference endpoint client

pub mod client;

pub use client::*;
