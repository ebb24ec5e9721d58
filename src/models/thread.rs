use serde::Deserialize;

/// Payload of the thread endpoint: every post in the thread, OP first.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadPayload {
    pub(crate) posts: Vec<PostEntry>,
}

/// A single post, including attachment fields when the post carries one.
#[derive(Debug, Clone, Deserialize)]
pub struct PostEntry {
    /// The numeric post ID.
    pub(crate) no: u64,

    /// UNIX timestamp of post creation.
    #[serde(default)]
    pub(crate) time: u64,

    /// Name the user posted with, if present.
    #[serde(default)]
    pub(crate) name: Option<String>,

    /// The subject of the OP post, if one was provided.
    #[serde(default)]
    pub(crate) sub: Option<String>,

    /// The content of the post comment, in HTML-escaped format.
    #[serde(default)]
    pub(crate) com: Option<String>,

    /// The user's tripcode, if included in the post.
    #[serde(default)]
    pub(crate) trip: Option<String>,

    /// The poster's ID, if one was included with the post.
    #[serde(default)]
    pub(crate) id: Option<String>,

    /// The capcode identifier used for this post (e.g. `mod`, `admin`).
    #[serde(default)]
    pub(crate) capcode: Option<String>,

    /// UNIX timestamp (with microseconds) of the image upload.
    #[serde(default)]
    pub(crate) tim: Option<u64>,

    /// Filename as it appeared on the poster's device.
    #[serde(default)]
    pub(crate) filename: Option<String>,

    /// File extension of the attachment (e.g. `.jpg`, `.png`).
    #[serde(default)]
    pub(crate) ext: Option<String>,

    /// Size of the uploaded file in bytes.
    #[serde(default)]
    pub(crate) fsize: Option<u64>,

    /// Base64-encoded MD5 hash of the file.
    #[serde(default)]
    pub(crate) md5: Option<String>,
}
