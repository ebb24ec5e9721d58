use serde::Deserialize;

use crate::models::maybe_de_bool;

/// Payload of the board-list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardList {
    pub(crate) boards: Vec<BoardEntry>,
}

/// One board as the API describes it. Only the fields the investigation
/// summary consumes are kept; the rest of the payload is dropped on parse.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardEntry {
    /// The directory the board is located in.
    pub(crate) board: String,

    /// The readable title at the top of the board.
    pub(crate) title: String,

    /// SEO meta description content for the board.
    #[serde(default)]
    pub(crate) meta_description: String,

    /// 1 if archives are enabled for the board, absent otherwise.
    #[serde(default, deserialize_with = "maybe_de_bool")]
    pub(crate) is_archived: Option<bool>,
}
