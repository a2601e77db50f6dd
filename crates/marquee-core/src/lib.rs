//! Core types and trait definitions for the Marquee movie catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod actor;
pub mod error;
pub mod field;
pub mod movie;
pub mod store;

pub use error::{Error, Result};
pub use field::Field;
