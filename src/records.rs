//! Normalized result records, one immutable snapshot per query.
//!
//! These are the shapes the presenter renders and the `--output` dump
//! serializes; the raw wire payloads never leave the fetch layer.

use serde::{Deserialize, Serialize};

/// Summary of one board from the board-list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Board directory, e.g. `po`.
    pub board: String,
    /// Human-readable board title.
    pub title: String,
    /// SEO meta description for the board.
    pub description: String,
    /// Whether the board keeps an archive of expired threads.
    pub is_archived: bool,
}

/// One thread as seen in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    /// OP post ID.
    pub no: u64,
    /// Subject, or `"No subject"` when the OP had none.
    pub subject: String,
    /// Comment excerpt: the first 200 characters of the OP comment.
    pub comment: String,
    /// Poster name, defaulting to `"Anonymous"`.
    pub name: String,
    /// UNIX timestamp of thread creation.
    pub time: u64,
    /// Reply count.
    pub replies: u32,
    /// Image reply count.
    pub images: u32,
    /// Whether the thread is stickied.
    pub sticky: bool,
    /// Whether the thread is closed to replies.
    pub closed: bool,
}

/// One post of a fetched thread, comment untruncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Numeric post ID.
    pub no: u64,
    /// UNIX timestamp of post creation.
    pub time: u64,
    /// Poster name, defaulting to `"Anonymous"`.
    pub name: String,
    /// Subject, empty for replies.
    pub subject: String,
    /// Full comment, HTML-escaped as the API delivers it.
    pub comment: String,
    /// Tripcode, empty if the post carried none.
    pub trip: String,
    /// Poster ID, empty if the board does not assign them.
    pub id: String,
    /// Capcode, empty for regular posts.
    pub capcode: String,
    /// Attachment details. Present iff the post declared a filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// Attachment metadata plus the resolved download URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Filename as uploaded, without the extension.
    pub filename: String,
    /// Extension including the leading dot.
    pub ext: String,
    /// Upload timestamp ID that names the file on the image host.
    pub tim: u64,
    /// Packed base64 MD5 of the file.
    pub md5: String,
    /// File size in bytes.
    pub size: u64,
    /// Direct URL on the image host.
    pub image_url: String,
}

/// A fetched thread: all posts in original order plus the human-facing
/// board URL for the thread (distinct from the API URL it was fetched from).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadView {
    /// OP post ID the thread is rooted at.
    pub thread_no: u64,
    /// Human-facing canonical link to the thread.
    pub thread_url: String,
    /// All posts in original order, OP first.
    pub posts: Vec<Post>,
}
