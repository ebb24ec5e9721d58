//! Site abstraction: endpoint resolution and the fetch paths behind it.
//!
//! Each supported site implements [`Site`]; dispatch never branches on the
//! site name, so adding a real second site means adding one impl here.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use crate::client::{Client, Fetch};
use crate::error::Error;
use crate::models::board::BoardList;
use crate::models::catalog::Page;
use crate::models::thread::ThreadPayload;
use crate::normalize;
use crate::records::{Board, ThreadSummary, ThreadView};
use crate::result::Result;

/// The sites the CLI recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum SiteId {
    /// 4chan, the one implemented site.
    #[serde(rename = "4chan")]
    #[value(name = "4chan")]
    Fourchan,
    /// 8kun, recognized but unimplemented.
    #[serde(rename = "8kun")]
    #[value(name = "8kun")]
    Eightkun,
}

impl SiteId {
    /// Returns the fetch implementation for this site.
    pub fn site(self) -> Box<dyn Site> {
        match self {
            SiteId::Fourchan => Box::new(Fourchan),
            SiteId::Eightkun => Box::new(Eightkun),
        }
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteId::Fourchan => f.write_str("4chan"),
            SiteId::Eightkun => f.write_str("8kun"),
        }
    }
}

/// One imageboard's read-only query surface.
#[async_trait]
pub trait Site: Send + Sync {
    /// Which site this implementation serves.
    fn id(&self) -> SiteId;

    /// Fetches the list of boards.
    ///
    /// # Errors
    ///
    /// Fails on transport failure, a non-200 status, or an unimplemented
    /// site.
    async fn boards(&self, client: &Client) -> Result<Vec<Board>>;

    /// Fetches the full thread catalog for a board.
    ///
    /// # Errors
    ///
    /// Fails on transport failure, a non-200 status, or an unimplemented
    /// site.
    async fn catalog(&self, client: &Client, board: &str) -> Result<Vec<ThreadSummary>>;

    /// Fetches every post of one thread.
    ///
    /// # Errors
    ///
    /// Fails on transport failure or an unimplemented site. A 404 maps to
    /// [`Error::ThreadGone`] since the thread may have been deleted or
    /// archived; other non-200 statuses pass through as
    /// [`Error::HttpStatus`].
    async fn thread(&self, client: &Client, board: &str, thread_no: u64) -> Result<ThreadView>;

    /// Fetches the archived thread IDs for a board, capped at the first 100.
    ///
    /// # Errors
    ///
    /// Fails on transport failure, a non-200 status, or an unimplemented
    /// site.
    async fn archive(&self, client: &Client, board: &str) -> Result<Vec<u64>>;
}

/// The implemented site. No API key required on any endpoint.
pub struct Fourchan;

impl Fourchan {
    const API_BASE: &'static str = "https://a.4cdn.org";
    const IMAGE_BASE: &'static str = "https://i.4cdn.org";
    const BOARD_BASE: &'static str = "https://boards.4chan.org";

    fn boards_url() -> String {
        format!("{}/boards.json", Self::API_BASE)
    }

    fn catalog_url(board: &str) -> String {
        format!("{}/{board}/catalog.json", Self::API_BASE)
    }

    fn thread_url(board: &str, thread_no: u64) -> String {
        format!("{}/{board}/thread/{thread_no}.json", Self::API_BASE)
    }

    fn archive_url(board: &str) -> String {
        format!("{}/{board}/archive.json", Self::API_BASE)
    }
}

#[async_trait]
impl Site for Fourchan {
    fn id(&self) -> SiteId {
        SiteId::Fourchan
    }

    async fn boards(&self, client: &Client) -> Result<Vec<Board>> {
        log::info!("fetching boards from {}", self.id());
        match client.fetch_json::<BoardList>(&Self::boards_url()).await? {
            Fetch::Payload(list) => Ok(normalize::boards(list)),
            Fetch::Status(code) => Err(Error::HttpStatus(code)),
        }
    }

    async fn catalog(&self, client: &Client, board: &str) -> Result<Vec<ThreadSummary>> {
        log::info!("fetching catalog for /{board}/ on {}", self.id());
        match client.fetch_json::<Vec<Page>>(&Self::catalog_url(board)).await? {
            Fetch::Payload(pages) => Ok(normalize::catalog(pages)),
            Fetch::Status(code) => Err(Error::HttpStatus(code)),
        }
    }

    async fn thread(&self, client: &Client, board: &str, thread_no: u64) -> Result<ThreadView> {
        log::info!("fetching thread /{board}/{thread_no} from {}", self.id());
        let url = Self::thread_url(board, thread_no);
        match client.fetch_json::<ThreadPayload>(&url).await? {
            Fetch::Payload(payload) => Ok(normalize::thread(
                payload,
                board,
                thread_no,
                Self::IMAGE_BASE,
                Self::BOARD_BASE,
            )),
            // the thread may have rolled off the board rather than 404ing
            // for any interesting reason
            Fetch::Status(StatusCode::NOT_FOUND) => Err(Error::ThreadGone),
            Fetch::Status(code) => Err(Error::HttpStatus(code)),
        }
    }

    async fn archive(&self, client: &Client, board: &str) -> Result<Vec<u64>> {
        log::info!("fetching archived threads for /{board}/ on {}", self.id());
        match client.fetch_json::<Vec<u64>>(&Self::archive_url(board)).await? {
            Fetch::Payload(ids) => Ok(normalize::archive(ids)),
            Fetch::Status(code) => Err(Error::HttpStatus(code)),
        }
    }
}

/// Recognized-but-unimplemented site: every fetch path reports so.
pub struct Eightkun;

impl Eightkun {
    fn unimplemented(&self) -> Error {
        Error::UnsupportedSite(self.id().to_string())
    }
}

#[async_trait]
impl Site for Eightkun {
    fn id(&self) -> SiteId {
        SiteId::Eightkun
    }

    async fn boards(&self, _: &Client) -> Result<Vec<Board>> {
        Err(self.unimplemented())
    }

    async fn catalog(&self, _: &Client, _: &str) -> Result<Vec<ThreadSummary>> {
        Err(self.unimplemented())
    }

    async fn thread(&self, _: &Client, _: &str, _: u64) -> Result<ThreadView> {
        Err(self.unimplemented())
    }

    async fn archive(&self, _: &Client, _: &str) -> Result<Vec<u64>> {
        Err(self.unimplemented())
    }
}
