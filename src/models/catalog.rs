use serde::Deserialize;

use crate::models::maybe_de_bool;

/// One page of the catalog payload. The endpoint returns an ordered array
/// of these; flattening preserves page order.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Current page number.
    #[allow(dead_code)]
    pub(crate) page: u32,

    /// OP entries on this page, in catalog order.
    pub(crate) threads: Vec<CatalogEntry>,
}

/// A thread's OP as it appears in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// The numeric post ID of the OP.
    pub(crate) no: u64,

    /// OP subject text, if one was provided.
    #[serde(default)]
    pub(crate) sub: Option<String>,

    /// Comment (HTML escaped), if present.
    #[serde(default)]
    pub(crate) com: Option<String>,

    /// Name the user posted with, if present.
    #[serde(default)]
    pub(crate) name: Option<String>,

    /// UNIX timestamp of post creation.
    #[serde(default)]
    pub(crate) time: u64,

    /// Total number of replies to the thread.
    #[serde(default)]
    pub(crate) replies: u32,

    /// Total number of image replies to the thread.
    #[serde(default)]
    pub(crate) images: u32,

    /// 1 if the thread is stickied, absent otherwise.
    #[serde(default, deserialize_with = "maybe_de_bool")]
    pub(crate) sticky: Option<bool>,

    /// 1 if the thread is closed, absent otherwise.
    #[serde(default, deserialize_with = "maybe_de_bool")]
    pub(crate) closed: Option<bool>,
}
