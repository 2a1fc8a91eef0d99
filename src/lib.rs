//! snapjot - Local photo-note journal
//!
//! Captures photographs through an external camera command, pairs each one
//! with a short caption and timestamp, and keeps the resulting entries in a
//! local, ordered, deletable list.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SnapjotError;
