use derive_more::IntoIterator;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::{
    rules::outcome::Outcome,
    simulation::{render::render_dice, state::GameState},
};

pub type Timestamp = chrono::DateTime<chrono::Utc>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogEntry {
    Rolled { outcome: Outcome, odd_count: usize },
    Reverted { restored_rolls: u64 },
    RevertRejected,
    Reset { discarded_snapshots: usize },
}

impl LogEntry {
    pub fn emoji(&self) -> &'static str {
        match self {
            LogEntry::Rolled { outcome, .. } => outcome.emoji(),
            LogEntry::Reverted { .. } => "↩️",
            LogEntry::RevertRejected => "🚫",
            LogEntry::Reset { .. } => "🔄",
        }
    }

    /// Quiet entries are only echoed at debug level.
    pub fn is_quiet(&self) -> bool {
        matches!(self, LogEntry::Rolled { .. } | LogEntry::RevertRejected)
    }

    fn pretty_print(&self, f: &mut impl std::fmt::Write, state: &GameState) -> std::fmt::Result {
        match self {
            LogEntry::Rolled { outcome, odd_count } => {
                write!(f, "#{} Rolled [", state.total_rolls)?;
                render_dice(f, state)?;
                write!(f, "] = {} odd: {}", odd_count, outcome)
            }
            LogEntry::Reverted { restored_rolls } => {
                write!(f, "Went back to roll #{}", restored_rolls)
            }
            LogEntry::RevertRejected => write!(f, "Nothing to go back to"),
            LogEntry::Reset {
                discarded_snapshots,
            } => write!(f, "Reset, discarding {} snapshots", discarded_snapshots),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub at: Timestamp,
    pub entry: LogEntry,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, IntoIterator)]
#[serde(transparent)]
pub struct SessionLog {
    records: Vec<LogRecord>,
}

impl SessionLog {
    /// Records `entry`, which has just been applied and produced `state`.
    pub fn log(&mut self, entry: LogEntry, state: &GameState) {
        let mut buf = String::new();

        let emoji = format_emoji(entry.emoji(), 2);
        buf.push_str(&emoji);
        buf.push(' ');

        entry.pretty_print(&mut buf, state).ok();
        if entry.is_quiet() {
            log::debug!("{}", buf);
        } else {
            log::info!("{}", buf);
        }

        self.records.push(LogRecord {
            at: chrono::Utc::now(),
            entry,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.records.last().map(|record| &record.entry)
    }

    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &self)?;
        Ok(())
    }
}

fn emoji_emoji_presentation(s: &str) -> String {
    if s.chars().any(|c| c == '\u{FE0F}' || c == '\u{200D}') {
        s.to_string()
    } else {
        format!("{s}\u{FE0F}")
    }
}

fn pad_cells(s: &str, field_cells: usize) -> String {
    let w = s.width();
    let pad = field_cells.saturating_sub(w);
    format!("{s}{}", " ".repeat(pad))
}

fn format_emoji(emoji: &str, field_cells: usize) -> String {
    let e = emoji_emoji_presentation(emoji);
    pad_cells(&e, field_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_order() {
        let mut log = SessionLog::default();
        let state = GameState::new();
        log.log(
            LogEntry::Rolled {
                outcome: Outcome::Tie,
                odd_count: 15,
            },
            &state,
        );
        log.log(LogEntry::Reverted { restored_rolls: 0 }, &state);
        log.log(LogEntry::RevertRejected, &state);
        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some(&LogEntry::RevertRejected));

        let entries: Vec<LogEntry> = log.into_iter().map(|record| record.entry).collect();
        assert!(matches!(entries[0], LogEntry::Rolled { .. }));
        assert!(matches!(entries[1], LogEntry::Reverted { restored_rolls: 0 }));
    }

    #[test]
    fn test_pretty_print_roll() {
        let mut state = GameState::new();
        state.total_rolls = 4;
        state.dice = vec![1, 3, 2];
        let mut buf = String::new();
        LogEntry::Rolled {
            outcome: Outcome::Banker,
            odd_count: 16,
        }
        .pretty_print(&mut buf, &state)
        .unwrap();
        assert_eq!(buf, "#4 Rolled [1, 3, 2] = 16 odd: BANKER");
    }

    #[test]
    fn test_only_rolls_and_rejections_are_quiet() {
        let rolled = LogEntry::Rolled {
            outcome: Outcome::Player,
            odd_count: 12,
        };
        assert!(rolled.is_quiet());
        assert!(LogEntry::RevertRejected.is_quiet());
        assert!(!LogEntry::Reverted { restored_rolls: 1 }.is_quiet());
        assert!(
            !LogEntry::Reset {
                discarded_snapshots: 3
            }
            .is_quiet()
        );
    }

    #[test]
    fn test_format_emoji_pads_to_width() {
        let padded = format_emoji("🎲", 4);
        assert!(padded.starts_with("🎲\u{FE0F}"));
        assert!(padded.width() >= 4);
    }

    #[test]
    fn test_save_writes_json() -> anyhow::Result<()> {
        let mut log = SessionLog::default();
        log.log(
            LogEntry::Reset {
                discarded_snapshots: 2,
            },
            &GameState::new(),
        );
        let path = std::env::temp_dir().join(format!(
            "dice-oracle-log-{}.json",
            std::process::id()
        ));
        log.save(&path)?;
        let text = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;
        let back: SessionLog = serde_json::from_str(&text)?;
        assert_eq!(back, log);
        Ok(())
    }
}
