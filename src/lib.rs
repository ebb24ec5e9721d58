#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # chanscope
//!
//! chanscope queries an imageboard's read-only JSON API and turns the raw
//! payloads into normalized investigation records.
//!
//! One invocation runs one operation:
//! - `boards`: the site's board list
//! - `catalog`: every active thread on a board
//! - `thread`: every post of one thread
//! - `search`: catalog threads matching a keyword
//! - `archive`: IDs of threads that rolled off the board
//!
//! The outcome of an operation, data or error, lands in an [`Envelope`]
//! that the reporting layer prints or dumps as JSON. Fetch failures are
//! part of the report, never a crash.
//!
//! ## Example: searching a board's catalog
//!
//! ```no_run
//! use chanscope::{investigate, Client, Request, SiteId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new();
//!     let request = Request {
//!         board: String::from("po"),
//!         operation: String::from("search"),
//!         site: SiteId::Fourchan,
//!         thread_no: None,
//!         keyword: Some(String::from("origami")),
//!     };
//!
//!     let results = investigate(&client, request).await;
//!     println!("{results}");
//! }
//! ```

/// Client module contains [`Client`] for issuing API requests.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub mod filter;
pub mod investigate;
pub mod records;
pub mod report;
pub mod site;

pub(crate) mod models;
pub(crate) mod normalize;
pub(crate) mod result;

pub use client::Client;
pub use investigate::{investigate, Envelope, Operation, Outcome, Payload, Request};
pub use site::{Site, SiteId};
