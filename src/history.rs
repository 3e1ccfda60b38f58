use chrono::{DateTime, Local};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::{GallowsError, Result};
use crate::round::{Round, RoundStatus};
use crate::util::{mean, percentage};

/// One finished round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub word: String,
    pub won: bool,
    pub strikes: usize,
    pub guesses: usize,
    pub played_at: DateTime<Local>,
}

impl RoundRecord {
    /// `None` while the round is still being played
    pub fn from_round(round: &Round) -> Option<Self> {
        let won = match round.status() {
            RoundStatus::InProgress => return None,
            RoundStatus::Won => true,
            RoundStatus::Lost => false,
        };
        Some(Self {
            word: round.secret().to_string(),
            won,
            strikes: round.strikes(),
            guesses: round.guesses().len(),
            played_at: Local::now(),
        })
    }
}

/// Aggregate over every recorded round
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySummary {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    pub avg_strikes_on_win: Option<f64>,
}

impl HistorySummary {
    pub fn win_rate(&self) -> Option<f64> {
        percentage(self.won, self.played)
    }
}

/// Round history stored in SQLite
#[derive(Debug)]
pub struct HistoryDb {
    conn: Connection,
}

impl HistoryDb {
    /// Open the database under `$HOME/.local/state/gallows`
    pub fn open_default() -> Result<Self> {
        let path = AppDirs::db_path().unwrap_or_else(|| PathBuf::from("gallows_history.db"));
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GallowsError::StateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS rounds (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                won BOOLEAN NOT NULL,
                strikes INTEGER NOT NULL,
                guesses INTEGER NOT NULL,
                played_at TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_rounds_played_at ON rounds(played_at)",
            [],
        )?;

        Ok(Self { conn })
    }

    pub fn record_round(&self, record: &RoundRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO rounds (word, won, strikes, guesses, played_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.word,
                record.won,
                record.strikes as i64,
                record.guesses as i64,
                record.played_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Most recent rounds first
    pub fn recent(&self, limit: usize) -> Result<Vec<RoundRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT word, won, strikes, guesses, played_at
            FROM rounds
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map([limit as i64], |row| {
            let played_at: String = row.get(4)?;
            let played_at = DateTime::parse_from_rfc3339(&played_at)
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?
                .with_timezone(&Local);

            Ok(RoundRecord {
                word: row.get(0)?,
                won: row.get(1)?,
                strikes: row.get::<_, i64>(2)? as usize,
                guesses: row.get::<_, i64>(3)? as usize,
                played_at,
            })
        })?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    pub fn summary(&self) -> Result<HistorySummary> {
        let mut stmt = self
            .conn
            .prepare("SELECT won, strikes FROM rounds ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, bool>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut summary = HistorySummary::default();
        let mut win_strikes = Vec::new();
        for row in rows {
            let (won, strikes) = row?;
            summary.played += 1;
            if won {
                summary.won += 1;
                summary.current_streak += 1;
                summary.best_streak = summary.best_streak.max(summary.current_streak);
                win_strikes.push(strikes as f64);
            } else {
                summary.lost += 1;
                summary.current_streak = 0;
            }
        }
        summary.avg_strikes_on_win = mean(&win_strikes);

        Ok(summary)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::DEFAULT_MAX_STRIKES;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    fn record(word: &str, won: bool, strikes: usize) -> RoundRecord {
        RoundRecord {
            word: word.to_string(),
            won,
            strikes,
            guesses: strikes + 3,
            played_at: Local::now(),
        }
    }

    #[test]
    fn test_empty_summary() {
        let db = HistoryDb::open_in_memory().unwrap();
        let summary = db.summary().unwrap();
        assert_eq!(summary, HistorySummary::default());
        assert_eq!(summary.win_rate(), None);
    }

    #[test]
    fn test_summary_counts_and_streaks() {
        let db = HistoryDb::open_in_memory().unwrap();
        for (word, won, strikes) in [
            ("CAT", true, 0),
            ("DOG", true, 2),
            ("EMU", false, 6),
            ("OWL", true, 1),
            ("YAK", true, 3),
            ("GNU", true, 2),
        ] {
            db.record_round(&record(word, won, strikes)).unwrap();
        }

        let summary = db.summary().unwrap();
        assert_eq!(summary.played, 6);
        assert_eq!(summary.won, 5);
        assert_eq!(summary.lost, 1);
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.best_streak, 3);
        assert_eq!(summary.avg_strikes_on_win, Some(1.6));
    }

    #[test]
    fn test_streak_reset_by_loss() {
        let db = HistoryDb::open_in_memory().unwrap();
        db.record_round(&record("CAT", true, 0)).unwrap();
        db.record_round(&record("CAT", true, 0)).unwrap();
        db.record_round(&record("CAT", false, 6)).unwrap();

        let summary = db.summary().unwrap();
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.best_streak, 2);
        assert_eq!(summary.avg_strikes_on_win, Some(0.0));
    }

    #[test]
    fn test_recent_newest_first() {
        let db = HistoryDb::open_in_memory().unwrap();
        db.record_round(&record("FIRST", true, 1)).unwrap();
        db.record_round(&record("SECOND", false, 6)).unwrap();
        db.record_round(&record("THIRD", true, 0)).unwrap();

        let recent = db.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].word, "THIRD");
        assert_eq!(recent[1].word, "SECOND");
        assert!(!recent[1].won);
        assert_eq!(recent[1].strikes, 6);
        assert_eq!(recent[1].guesses, 9);
    }

    #[test]
    fn test_open_on_disk_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("history.db");
        {
            let db = HistoryDb::open(&path).unwrap();
            db.record_round(&record("LANTERN", true, 2)).unwrap();
        }
        let db = HistoryDb::open(&path).unwrap();
        assert_eq!(db.summary().unwrap().won, 1);
    }

    #[test]
    fn test_open_reports_unusable_state_dir() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("state");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = HistoryDb::open(&blocker.join("history.db")).unwrap_err();
        assert_matches!(err, GallowsError::StateDir { ref path, .. } if path == &blocker);
    }

    #[test]
    fn test_record_from_round() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        assert!(RoundRecord::from_round(&round).is_none());

        for c in "XCAT".chars() {
            round.guess(c);
        }
        let rec = RoundRecord::from_round(&round).unwrap();
        assert_eq!(rec.word, "CAT");
        assert!(rec.won);
        assert_eq!(rec.strikes, 1);
        assert_eq!(rec.guesses, 4);
    }
}
