//! Mapping from raw endpoint payloads to normalized records.
//!
//! One function per operation. Defaults follow the API's conventions:
//! missing subjects become `"No subject"`, missing names `"Anonymous"`,
//! missing counts and flags zero/false. IDs and timestamps pass through
//! unmodified.

use crate::models::board::BoardList;
use crate::models::catalog::Page;
use crate::models::thread::ThreadPayload;
use crate::records::{Board, ImageRef, Post, ThreadSummary, ThreadView};

/// Catalog comments are cut down to this many characters for the summary.
pub const EXCERPT_CHARS: usize = 200;

/// Archive listings are reported up to this many thread IDs.
pub const ARCHIVE_LIMIT: usize = 100;

fn excerpt(comment: &str) -> String {
    match comment.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => comment[..idx].to_owned(),
        None => comment.to_owned(),
    }
}

/// Flattens the board-list payload into board summaries.
pub(crate) fn boards(payload: BoardList) -> Vec<Board> {
    payload
        .boards
        .into_iter()
        .map(|b| Board {
            board: b.board,
            title: b.title,
            description: b.meta_description,
            is_archived: b.is_archived.unwrap_or(false),
        })
        .collect()
}

/// Flattens all catalog pages into one ordered thread list.
pub(crate) fn catalog(pages: Vec<Page>) -> Vec<ThreadSummary> {
    pages
        .into_iter()
        .flat_map(|page| page.threads)
        .map(|t| ThreadSummary {
            no: t.no,
            subject: t.sub.unwrap_or_else(|| String::from("No subject")),
            comment: excerpt(t.com.as_deref().unwrap_or_default()),
            name: t.name.unwrap_or_else(|| String::from("Anonymous")),
            time: t.time,
            replies: t.replies,
            images: t.images,
            sticky: t.sticky.unwrap_or(false),
            closed: t.closed.unwrap_or(false),
        })
        .collect()
}

/// Maps a thread payload into posts, resolving attachment URLs against the
/// image host. `image` is attached iff the source post declares a filename.
pub(crate) fn thread(
    payload: ThreadPayload,
    board: &str,
    thread_no: u64,
    image_base: &str,
    board_base: &str,
) -> ThreadView {
    let posts = payload
        .posts
        .into_iter()
        .map(|p| {
            let image = p.filename.map(|filename| {
                let ext = p.ext.unwrap_or_default();
                let tim = p.tim.unwrap_or_default();
                ImageRef {
                    image_url: format!("{image_base}/{board}/{tim}{ext}"),
                    filename,
                    ext,
                    tim,
                    md5: p.md5.unwrap_or_default(),
                    size: p.fsize.unwrap_or_default(),
                }
            });
            Post {
                no: p.no,
                time: p.time,
                name: p.name.unwrap_or_else(|| String::from("Anonymous")),
                subject: p.sub.unwrap_or_default(),
                comment: p.com.unwrap_or_default(),
                trip: p.trip.unwrap_or_default(),
                id: p.id.unwrap_or_default(),
                capcode: p.capcode.unwrap_or_default(),
                image,
            }
        })
        .collect();

    ThreadView {
        thread_no,
        thread_url: format!("{board_base}/{board}/thread/{thread_no}"),
        posts,
    }
}

/// Caps the archived-ID array at the first [`ARCHIVE_LIMIT`] entries,
/// preserving order. Documented truncation, not an error.
pub(crate) fn archive(mut ids: Vec<u64>) -> Vec<u64> {
    ids.truncate(ARCHIVE_LIMIT);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog_pages(value: serde_json::Value) -> Vec<Page> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn catalog_flattens_pages_in_order() {
        let pages = catalog_pages(json!([
            {"page": 1, "threads": [
                {"no": 100, "sub": "first", "time": 1},
                {"no": 101, "time": 2},
            ]},
            {"page": 2, "threads": [
                {"no": 200, "sub": "third", "time": 3},
            ]},
        ]));

        let threads = catalog(pages);
        let ids: Vec<u64> = threads.iter().map(|t| t.no).collect();
        assert_eq!(ids, vec![100, 101, 200]);
    }

    #[test]
    fn catalog_applies_defaults() {
        let pages = catalog_pages(json!([
            {"page": 1, "threads": [{"no": 1, "time": 5}]},
        ]));

        let t = &catalog(pages)[0];
        assert_eq!(t.subject, "No subject");
        assert_eq!(t.name, "Anonymous");
        assert_eq!(t.comment, "");
        assert_eq!(t.replies, 0);
        assert_eq!(t.images, 0);
        assert!(!t.sticky);
        assert!(!t.closed);
    }

    #[test]
    fn catalog_decodes_numeric_flags() {
        let pages = catalog_pages(json!([
            {"page": 1, "threads": [
                {"no": 1, "time": 5, "sticky": 1, "closed": 1, "replies": 12, "images": 3},
            ]},
        ]));

        let t = &catalog(pages)[0];
        assert!(t.sticky);
        assert!(t.closed);
        assert_eq!(t.replies, 12);
        assert_eq!(t.images, 3);
    }

    #[test]
    fn excerpt_is_a_bounded_prefix() {
        let long = "a".repeat(450);
        let pages = catalog_pages(json!([
            {"page": 1, "threads": [{"no": 1, "time": 0, "com": long}]},
        ]));

        let t = &catalog(pages)[0];
        assert_eq!(t.comment.chars().count(), EXCERPT_CHARS);
        assert!("a".repeat(450).starts_with(&t.comment));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        // multibyte characters straddling the cutoff must not split
        let long: String = "é".repeat(250);
        let pages = catalog_pages(json!([
            {"page": 1, "threads": [{"no": 1, "time": 0, "com": long}]},
        ]));

        let t = &catalog(pages)[0];
        assert_eq!(t.comment.chars().count(), EXCERPT_CHARS);
        assert!(t.comment.chars().all(|c| c == 'é'));
    }

    #[test]
    fn short_comment_passes_through_untruncated() {
        let pages = catalog_pages(json!([
            {"page": 1, "threads": [{"no": 1, "time": 0, "com": "short comment"}]},
        ]));

        assert_eq!(catalog(pages)[0].comment, "short comment");
    }

    #[test]
    fn boards_default_missing_archive_flag() {
        let payload: BoardList = serde_json::from_value(json!({
            "boards": [
                {"board": "po", "title": "Papercraft & Origami", "meta_description": "Origami"},
                {"board": "g", "title": "Technology", "is_archived": 1},
            ]
        }))
        .unwrap();

        let boards = boards(payload);
        assert!(!boards[0].is_archived);
        assert!(boards[1].is_archived);
        assert_eq!(boards[0].description, "Origami");
    }

    #[test]
    fn thread_resolves_image_url_by_concatenation() {
        let payload: ThreadPayload = serde_json::from_value(json!({
            "posts": [{
                "no": 570_368,
                "time": 1_600_000_000u64,
                "filename": "origami",
                "ext": ".png",
                "tim": 1_600_000_123_456u64,
                "md5": "abcd==",
                "fsize": 12_345,
            }]
        }))
        .unwrap();

        let view = thread(
            payload,
            "po",
            570_368,
            "https://i.4cdn.org",
            "https://boards.4chan.org",
        );
        let image = view.posts[0].image.as_ref().unwrap();
        assert_eq!(image.image_url, "https://i.4cdn.org/po/1600000123456.png");
        assert_eq!(image.size, 12_345);
        assert_eq!(view.thread_url, "https://boards.4chan.org/po/thread/570368");
    }

    #[test]
    fn thread_omits_image_without_filename() {
        let payload: ThreadPayload = serde_json::from_value(json!({
            "posts": [
                {"no": 1, "time": 10, "com": "text only"},
                {"no": 2, "time": 20, "filename": "pic", "ext": ".jpg", "tim": 99},
            ]
        }))
        .unwrap();

        let view = thread(payload, "po", 1, "https://i.4cdn.org", "https://boards.4chan.org");
        assert!(view.posts[0].image.is_none());
        assert!(view.posts[1].image.is_some());
        assert_eq!(view.posts[0].name, "Anonymous");
        assert_eq!(view.posts[0].comment, "text only");
    }

    #[test]
    fn archive_caps_at_first_hundred() {
        let ids: Vec<u64> = (0..150).collect();
        let capped = archive(ids);
        assert_eq!(capped.len(), ARCHIVE_LIMIT);
        assert_eq!(capped, (0..100).collect::<Vec<u64>>());
    }

    #[test]
    fn archive_passes_short_lists_through() {
        assert_eq!(archive(vec![3, 1, 2]), vec![3, 1, 2]);
    }
}
