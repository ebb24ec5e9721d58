//! Dispatch layer: routes a requested operation to the right fetch path and
//! wraps the outcome in a result envelope.
//!
//! Fetch and validation failures are data here. Every branch terminates in
//! an [`Envelope`]; nothing past argument parsing aborts the process.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use crate::client::Client;
use crate::error::Error;
use crate::filter::filter_catalog;
use crate::records::{Board, ThreadSummary, ThreadView};
use crate::result::Result;
use crate::site::SiteId;

/// The five supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    /// Full thread catalog for a board.
    Catalog,
    /// Every post of one thread.
    Thread,
    /// Catalog threads matching a keyword.
    Search,
    /// Archived thread IDs for a board.
    Archive,
    /// The site's board list.
    Boards,
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "catalog" => Ok(Operation::Catalog),
            "thread" => Ok(Operation::Thread),
            "search" => Ok(Operation::Search),
            "archive" => Ok(Operation::Archive),
            "boards" => Ok(Operation::Boards),
            other => Err(Error::UnknownOperation(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Catalog => "catalog",
            Operation::Thread => "thread",
            Operation::Search => "search",
            Operation::Archive => "archive",
            Operation::Boards => "boards",
        })
    }
}

/// One investigation request as handed over by the caller.
#[derive(Debug, Clone)]
pub struct Request {
    /// Board directory; empty for the board-list operation.
    pub board: String,
    /// Operation name; parsed here so unknown values land in the envelope.
    pub operation: String,
    /// Which site to query.
    pub site: SiteId,
    /// Thread number, required by the thread operation.
    pub thread_no: Option<u64>,
    /// Search keyword, required by the search operation.
    pub keyword: Option<String>,
}

/// The result envelope: request echo, timestamp, and the tagged outcome.
#[derive(Debug, Serialize)]
pub struct Envelope {
    /// Board the request named, empty for the board-list operation.
    pub board: String,
    /// Operation name as requested.
    pub operation: String,
    /// Site the request named.
    pub site: SiteId,
    /// When the investigation ran.
    pub timestamp: DateTime<Utc>,
    /// What came of it.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Success payload or the error that ended the branch. Serializes under a
/// `data` or `error` key respectively.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The operation produced its payload.
    Data(Payload),
    /// The branch terminated; the error's display string is what gets dumped.
    Error(#[serde(serialize_with = "crate::error::serialize_display")] Error),
}

/// Per-operation result data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Board list summaries.
    Boards {
        /// All boards the site reports.
        boards: Vec<Board>,
    },
    /// Flattened catalog for one board.
    Catalog {
        /// Threads in catalog order.
        threads: Vec<ThreadSummary>,
    },
    /// One full thread.
    Thread(ThreadView),
    /// Catalog threads matching the keyword.
    Search {
        /// The keyword that was matched.
        keyword: String,
        /// Matching threads in catalog order.
        threads: Vec<ThreadSummary>,
    },
    /// Archived thread IDs, capped at the reporting limit.
    Archive {
        /// Oldest-first thread IDs.
        thread_ids: Vec<u64>,
    },
}

/// Runs one investigation and wraps whatever happened in an envelope.
pub async fn investigate(client: &Client, request: Request) -> Envelope {
    log::info!(
        "investigation started: operation {} on /{}/ ({})",
        request.operation,
        request.board,
        request.site
    );

    let outcome = match dispatch(client, &request).await {
        Ok(payload) => Outcome::Data(payload),
        Err(err) => Outcome::Error(err),
    };

    Envelope {
        board: request.board,
        operation: request.operation,
        site: request.site,
        timestamp: Utc::now(),
        outcome,
    }
}

/// Parameter validation happens before the fetch: a missing thread number or
/// keyword fails the branch without any network call.
async fn dispatch(client: &Client, request: &Request) -> Result<Payload> {
    let operation = Operation::from_str(&request.operation)?;
    let site = request.site.site();

    match operation {
        Operation::Boards => Ok(Payload::Boards {
            boards: site.boards(client).await?,
        }),
        Operation::Catalog => Ok(Payload::Catalog {
            threads: site.catalog(client, &request.board).await?,
        }),
        Operation::Thread => {
            let thread_no = request
                .thread_no
                .ok_or(Error::MissingParameter("thread number", "thread"))?;
            Ok(Payload::Thread(
                site.thread(client, &request.board, thread_no).await?,
            ))
        }
        Operation::Search => {
            let keyword = request
                .keyword
                .as_deref()
                .ok_or(Error::MissingParameter("keyword", "search"))?;
            let threads = site.catalog(client, &request.board).await?;
            Ok(Payload::Search {
                keyword: keyword.to_owned(),
                threads: filter_catalog(threads, keyword),
            })
        }
        Operation::Archive => Ok(Payload::Archive {
            thread_ids: site.archive(client, &request.board).await?,
        }),
    }
}
