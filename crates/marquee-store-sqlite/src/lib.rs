//! SQLite backend for the Marquee movie catalog.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Every operation opens its own
//! connection to the database file and closes it before returning.

mod rows;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
