//! Shell — the simulated command-line session.
//!
//! Holds the transcript, the input buffer, command history, and the
//! autocomplete index. Submission is split in two: [`Session::submit`]
//! echoes the input and records history immediately, returning a [`Pending`]
//! token; the host calls [`Session::dispatch`] with it after the short
//! artificial processing delay. The interpreter itself never queues — a
//! second submission while one is pending is the host's problem to ignore.

pub mod commands;

use crate::content::Content;
use crate::types::{Block, Line, LineKind};

/// Timed visual side effects a command can trigger. Fire-and-forget: the
/// host owns the timers, and re-triggering restarts the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Full-screen matrix rain, 5 seconds.
    MatrixOverlay,
    /// Falling confetti burst, 3 seconds.
    Confetti,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// A submitted command awaiting dispatch, raw casing preserved for the
/// not-found echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    raw: String,
}

pub struct Session {
    content: Content,
    lines: Vec<Line>,
    next_id: u64,
    input: String,
    history: Vec<String>,
    /// History recall cursor: `None` = not browsing, `Some(0)` = most recent.
    cursor: Option<usize>,
}

impl Session {
    pub fn new(content: Content) -> Self {
        let mut session = Session {
            content,
            lines: Vec::new(),
            next_id: 0,
            input: String::new(),
            history: Vec::new(),
            cursor: None,
        };
        session.push(
            LineKind::System,
            Block::text(
                &format!(
                    "GHOST SHELL v{} - Terminal Portfolio System",
                    env!("CARGO_PKG_VERSION"),
                ),
                LineKind::System.style(),
            ),
        );
        session.push(
            LineKind::System,
            Block::text(
                "Type 'help' for available commands.",
                LineKind::System.style(),
            ),
        );
        session.push(
            LineKind::System,
            Block::text(&"─".repeat(50), LineKind::System.style()),
        );
        session
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    #[cfg(test)]
    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Submit the current input buffer. Empty (after trimming) input is a
    /// complete no-op: no echo, no history entry, no transcript line.
    pub fn submit(&mut self) -> Option<Pending> {
        let raw = std::mem::take(&mut self.input);
        self.submit_raw(&raw)
    }

    /// Echo + record a raw command and hand back the pending token. The
    /// output itself is produced later by [`Session::dispatch`].
    pub fn submit_raw(&mut self, raw: &str) -> Option<Pending> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.push(
            LineKind::Input,
            Block::text(&format!("> {trimmed}"), LineKind::Input.style()),
        );
        self.history.push(trimmed.to_string());
        self.cursor = None;

        Some(Pending {
            raw: trimmed.to_string(),
        })
    }

    /// Resolve a pending command into transcript output, returning any timed
    /// side effect the host should trigger.
    pub fn dispatch(&mut self, pending: &Pending) -> Option<SideEffect> {
        let cmd = normalize(&pending.raw);

        // `clear` replaces the transcript instead of appending to it. Line
        // ids keep counting.
        if cmd == "clear" {
            self.lines.clear();
            self.push(
                LineKind::System,
                Block::text(
                    "Terminal cleared. Type 'help' for commands.",
                    LineKind::System.style(),
                ),
            );
            return None;
        }

        match commands::reply(&self.content, &cmd) {
            Some(reply) => {
                self.push(reply.kind, reply.block);
                reply.effect
            }
            None => {
                self.push(LineKind::Error, commands::not_found(&pending.raw));
                None
            }
        }
    }

    /// Step through past submissions. `Older` walks toward the oldest entry
    /// (clamped, no wraparound); `Newer` walks back to the present, leaving
    /// an empty buffer once it gets there. Empty history is a no-op.
    pub fn recall(&mut self, direction: HistoryDirection) {
        if self.history.is_empty() {
            return;
        }
        match direction {
            HistoryDirection::Older => {
                let idx = match self.cursor {
                    None => 0,
                    Some(i) => (i + 1).min(self.history.len() - 1),
                };
                self.cursor = Some(idx);
                self.input = self.history[self.history.len() - 1 - idx].clone();
            }
            HistoryDirection::Newer => match self.cursor {
                Some(i) if i > 0 => {
                    let idx = i - 1;
                    self.cursor = Some(idx);
                    self.input = self.history[self.history.len() - 1 - idx].clone();
                }
                _ => {
                    self.cursor = None;
                    self.input.clear();
                }
            },
        }
    }

    /// Prefix-complete the input buffer against the command vocabulary.
    /// One match fills the buffer; several append a suggestion line and
    /// leave the buffer alone; none is a no-op.
    pub fn complete(&mut self) {
        let needle = normalize(&self.input);
        let matches: Vec<&str> = commands::VOCABULARY
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(needle.as_str()))
            .collect();

        match matches[..] {
            [] => {}
            [only] => self.input = only.to_string(),
            _ => {
                let list = matches.join(", ");
                self.push(
                    LineKind::System,
                    Block::text(&format!("Suggestions: {list}"), LineKind::System.style()),
                );
            }
        }
    }

    fn push(&mut self, kind: LineKind, block: Block) {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(Line { id, kind, block });
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Content::builtin())
    }

    /// Submit and dispatch in one step, as the host does after the delay.
    fn run(session: &mut Session, raw: &str) -> Option<SideEffect> {
        let pending = session.submit_raw(raw)?;
        session.dispatch(&pending)
    }

    #[test]
    fn session_opens_with_banner() {
        let s = session();
        assert_eq!(s.lines().len(), 3);
        assert!(s.lines().iter().all(|l| l.kind == LineKind::System));
    }

    #[test]
    fn empty_input_is_a_complete_noop() {
        let mut s = session();
        let before = s.lines().len();
        assert!(s.submit_raw("").is_none());
        assert!(s.submit_raw("   ").is_none());
        assert_eq!(s.lines().len(), before);
        // And no history was recorded.
        s.recall(HistoryDirection::Older);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn normalization_is_case_and_whitespace_insensitive() {
        let mut a = session();
        let mut b = session();
        let mut c = session();
        run(&mut a, "WHOAMI");
        run(&mut b, " whoami ");
        run(&mut c, "whoami");
        let last = |s: &Session| s.lines().last().map(|l| l.block.plain_text()).unwrap_or_default();
        assert_eq!(last(&a), last(&b));
        assert_eq!(last(&b), last(&c));
        assert_eq!(a.lines().last().map(|l| l.kind), Some(LineKind::Output));
    }

    #[test]
    fn unknown_command_appends_one_error_line() {
        let mut s = session();
        let before = s.lines().len();
        run(&mut s, "foo");
        // Echo + exactly one error line.
        assert_eq!(s.lines().len(), before + 2);
        let last = s.lines().last().expect("line");
        assert_eq!(last.kind, LineKind::Error);
        assert!(last.block.plain_text().contains("foo"));
    }

    #[test]
    fn unknown_command_echoes_raw_casing() {
        let mut s = session();
        run(&mut s, "FooBar");
        let last = s.lines().last().expect("line");
        assert!(last.block.plain_text().contains("FooBar"));
    }

    #[test]
    fn clear_replaces_transcript_with_one_system_line() {
        let mut s = session();
        run(&mut s, "whoami");
        run(&mut s, "help");
        assert!(s.lines().len() > 1);
        run(&mut s, "clear");
        assert_eq!(s.lines().len(), 1);
        assert_eq!(s.lines()[0].kind, LineKind::System);
    }

    #[test]
    fn line_ids_survive_clear_and_never_repeat() {
        let mut s = session();
        run(&mut s, "help");
        let max_before = s.lines().iter().map(|l| l.id).max().expect("lines");
        run(&mut s, "clear");
        assert!(s.lines()[0].id > max_before);
    }

    #[test]
    fn history_recall_walks_oldest_first_from_most_recent() {
        let mut s = session();
        run(&mut s, "a");
        run(&mut s, "b");
        s.recall(HistoryDirection::Older);
        assert_eq!(s.input(), "b");
        s.recall(HistoryDirection::Older);
        assert_eq!(s.input(), "a");
        // Clamped at the oldest entry.
        s.recall(HistoryDirection::Older);
        assert_eq!(s.input(), "a");
    }

    #[test]
    fn history_recall_newer_returns_to_empty_buffer() {
        let mut s = session();
        run(&mut s, "a");
        run(&mut s, "b");
        s.recall(HistoryDirection::Older);
        s.recall(HistoryDirection::Older);
        s.recall(HistoryDirection::Newer);
        assert_eq!(s.input(), "b");
        s.recall(HistoryDirection::Newer);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn recall_on_empty_history_is_a_noop() {
        let mut s = session();
        s.set_input("typed");
        s.recall(HistoryDirection::Older);
        s.recall(HistoryDirection::Newer);
        assert_eq!(s.input(), "typed");
    }

    #[test]
    fn submission_resets_history_browsing() {
        let mut s = session();
        run(&mut s, "a");
        run(&mut s, "b");
        s.recall(HistoryDirection::Older);
        s.recall(HistoryDirection::Older);
        run(&mut s, "c");
        // Cursor is back at the present: first recall is the newest entry.
        s.recall(HistoryDirection::Older);
        assert_eq!(s.input(), "c");
    }

    #[test]
    fn unique_prefix_completes_the_buffer() {
        let mut s = session();
        s.set_input("he");
        s.complete();
        assert_eq!(s.input(), "help");
    }

    #[test]
    fn ambiguous_prefix_lists_suggestions() {
        let mut s = session();
        s.set_input("c");
        let before = s.lines().len();
        s.complete();
        assert_eq!(s.input(), "c");
        assert_eq!(s.lines().len(), before + 1);
        let last = s.lines().last().expect("line");
        assert_eq!(last.kind, LineKind::System);
        assert_eq!(
            last.block.plain_text(),
            "Suggestions: cat projects.md, clear, coffee",
        );
    }

    #[test]
    fn unmatched_prefix_is_a_noop() {
        let mut s = session();
        s.set_input("zzz");
        let before = s.lines().len();
        s.complete();
        assert_eq!(s.input(), "zzz");
        assert_eq!(s.lines().len(), before);
    }

    #[test]
    fn aliases_dispatch_to_the_same_handler() {
        for pair in [
            ["ls experience/", "ls experience"],
            ["cat projects.md", "cat projects"],
            ["./skills --verbose", "skills"],
            ["ping alfonso", "contact"],
        ] {
            let mut a = session();
            let mut b = session();
            run(&mut a, pair[0]);
            run(&mut b, pair[1]);
            assert_eq!(
                a.lines().last().map(|l| l.block.plain_text()),
                b.lines().last().map(|l| l.block.plain_text()),
                "alias {pair:?} diverged",
            );
        }
    }

    #[test]
    fn side_effects_fire_for_matrix_and_sudo_hire() {
        let mut s = session();
        assert_eq!(run(&mut s, "matrix"), Some(SideEffect::MatrixOverlay));
        assert_eq!(run(&mut s, "sudo hire alfonso"), Some(SideEffect::Confetti));
        assert_eq!(run(&mut s, "help"), None);
    }

    #[test]
    fn every_vocabulary_command_is_recognized() {
        // `rm -rf /` replies with an Error-styled gag, so check for the
        // fallback template rather than the line kind.
        for cmd in commands::VOCABULARY {
            let mut s = session();
            run(&mut s, cmd);
            let last = s.lines().last().expect("line");
            assert!(
                !last.block.plain_text().contains("Command not found"),
                "{cmd} fell through",
            );
        }
    }

    #[test]
    fn submit_consumes_the_input_buffer() {
        let mut s = session();
        s.set_input("help");
        let pending = s.submit().expect("pending");
        assert_eq!(s.input(), "");
        s.dispatch(&pending);
        assert_eq!(s.lines().last().map(|l| l.kind), Some(LineKind::Output));
    }
}
