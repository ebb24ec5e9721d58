//! Rendering of the result envelope: the console report and the JSON dump.
//!
//! Both are pure projections; neither touches the envelope contents.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::investigate::{Envelope, Outcome, Payload};
use crate::result::Result;

/// Boards shown in the board-list report.
const BOARD_LINES: usize = 20;
/// Threads shown in the catalog and search reports.
const THREAD_LINES: usize = 10;
/// Comment preview length in the thread report.
const COMMENT_PREVIEW: usize = 200;
/// Comment preview length per search hit.
const SEARCH_PREVIEW: usize = 150;

const RULE: &str = "============================================================";

/// First `chars` characters of `text`, whole string if shorter.
fn preview(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "CHANSCOPE INVESTIGATION RESULTS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Board: /{}/", self.board)?;
        writeln!(f, "Operation: {}", self.operation)?;
        writeln!(f, "Site: {}", self.site)?;
        writeln!(f, "Timestamp: {}", self.timestamp.to_rfc3339())?;
        writeln!(f, "{RULE}")?;

        match &self.outcome {
            Outcome::Error(err) => {
                writeln!(f)?;
                writeln!(f, "Error: {err}")?;
            }
            Outcome::Data(payload) => write_payload(f, payload)?,
        }

        write!(f, "\n{RULE}")
    }
}

fn write_payload(f: &mut fmt::Formatter<'_>, payload: &Payload) -> fmt::Result {
    match payload {
        Payload::Boards { boards } => {
            writeln!(f, "\nBoards found: {}", boards.len())?;
            writeln!(f, "\nAvailable boards:")?;
            for board in boards.iter().take(BOARD_LINES) {
                writeln!(f, "  /{}/ - {}", board.board, board.title)?;
            }
        }
        Payload::Catalog { threads } => {
            writeln!(f, "\nThreads found: {}", threads.len())?;
            writeln!(f, "\nRecent threads:")?;
            for thread in threads.iter().take(THREAD_LINES) {
                writeln!(f, "\n  Thread #{}", thread.no)?;
                writeln!(f, "  Subject: {}", thread.subject)?;
                writeln!(f, "  Replies: {} | Images: {}", thread.replies, thread.images)?;
                if thread.sticky {
                    writeln!(f, "  [STICKY]")?;
                }
            }
        }
        Payload::Thread(view) => {
            writeln!(f, "\nPosts found: {}", view.posts.len())?;
            writeln!(f, "Thread URL: {}", view.thread_url)?;
            writeln!(f, "\nFirst post:")?;
            if let Some(op) = view.posts.first() {
                writeln!(f, "  #{} - {} - {}", op.no, op.name, op.time)?;
                writeln!(f, "  Subject: {}", op.subject)?;
                writeln!(f, "  Comment: {}", preview(&op.comment, COMMENT_PREVIEW))?;
            }
        }
        Payload::Search { keyword: _, threads } => {
            writeln!(f, "\nMatches found: {}", threads.len())?;
            for thread in threads.iter().take(THREAD_LINES) {
                writeln!(f, "\n  Thread #{}", thread.no)?;
                writeln!(f, "  Subject: {}", thread.subject)?;
                writeln!(f, "  Comment: {}", preview(&thread.comment, SEARCH_PREVIEW))?;
            }
        }
        Payload::Archive { thread_ids } => {
            writeln!(f, "\nArchived threads: {}", thread_ids.len())?;
        }
    }
    Ok(())
}

/// Serializes the full envelope as indented JSON to `path`.
///
/// # Errors
///
/// Fails if the file cannot be created or the envelope cannot be written.
pub fn save_json(envelope: &Envelope, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), envelope)?;
    log::info!("results saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::records::{Post, ThreadView};
    use crate::site::SiteId;
    use chrono::Utc;

    fn envelope(outcome: Outcome) -> Envelope {
        Envelope {
            board: String::from("po"),
            operation: String::from("thread"),
            site: SiteId::Fourchan,
            timestamp: Utc::now(),
            outcome,
        }
    }

    #[test]
    fn deleted_thread_report_carries_the_archival_hint() {
        let report = envelope(Outcome::Error(Error::ThreadGone)).to_string();
        assert!(report.contains("may have been deleted or archived"));
        assert!(report.contains("Board: /po/"));
    }

    #[test]
    fn thread_report_previews_the_first_post() {
        let view = ThreadView {
            thread_no: 570_368,
            thread_url: String::from("https://boards.4chan.org/po/thread/570368"),
            posts: vec![Post {
                no: 570_368,
                time: 1_600_000_000,
                name: String::from("Anonymous"),
                subject: String::from("paper planes"),
                comment: "z".repeat(500),
                trip: String::new(),
                id: String::new(),
                capcode: String::new(),
                image: None,
            }],
        };

        let report = envelope(Outcome::Data(Payload::Thread(view))).to_string();
        assert!(report.contains("Posts found: 1"));
        assert!(report.contains("https://boards.4chan.org/po/thread/570368"));
        // the preview stops at 200 characters even though the record holds all 500
        assert!(report.contains(&"z".repeat(200)));
        assert!(!report.contains(&"z".repeat(201)));
    }

    #[test]
    fn json_dump_round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let env = envelope(Outcome::Data(Payload::Archive {
            thread_ids: vec![10, 20],
        }));
        save_json(&env, &path).unwrap();

        let dumped: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(dumped["board"], "po");
        assert_eq!(dumped["data"]["thread_ids"], serde_json::json!([10, 20]));
    }
}
