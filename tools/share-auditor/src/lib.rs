//! Command line front end for threshold secret sharing.
//!
//! This crate only loads configuration, calls into [shamir_sharing] and renders the results.

pub mod commands;
pub mod config;
pub mod exact;
pub mod secret;
