//! Append-only move history and its CSV export.
//!
//! Record 0 is always the sentinel: player `-1`, type `"init"`, no move, no
//! reward, the initial snapshot. Every accepted move appends exactly one
//! record, in acceptance order.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::domain::player_view::FullObservation;
use crate::domain::Move;
use crate::error::AppError;

pub const SENTINEL_PLAYER: i32 = -1;
pub const SENTINEL_PLAYER_TYPE: &str = "init";

pub const RECORD_COLUMNS: [&str; 7] = [
    "player",
    "player_type",
    "move",
    "observation_after",
    "reward",
    "time_delta_seconds",
    "vectorized_game_state",
];

#[derive(Debug, Clone)]
pub struct Record {
    pub player: i32,
    pub player_type: String,
    pub mv: Option<Move>,
    pub observation_after: FullObservation,
    pub reward: Option<f64>,
    pub timestamp: OffsetDateTime,
}

impl Record {
    pub fn is_sentinel(&self) -> bool {
        self.player == SENTINEL_PLAYER
    }
}

#[derive(Debug, Default)]
pub struct Recorder {
    records: Vec<Record>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the sentinel for the initial state.
    pub fn add_initial_record(&mut self, observation: FullObservation) {
        self.add_record(SENTINEL_PLAYER, SENTINEL_PLAYER_TYPE, None, None, observation);
    }

    pub fn add_record(
        &mut self,
        player: i32,
        player_type: impl Into<String>,
        mv: Option<Move>,
        reward: Option<f64>,
        observation_after: FullObservation,
    ) {
        let timestamp = self.next_timestamp();
        self.records.push(Record {
            player,
            player_type: player_type.into(),
            mv,
            observation_after,
            reward,
            timestamp,
        });
    }

    /// Wall clock, nudged forward so timestamps strictly increase.
    fn next_timestamp(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        match self.records.last() {
            Some(prev) if now <= prev.timestamp => prev.timestamp + Duration::microseconds(1),
            _ => now,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record as CSV. Refuses to touch an existing file.
    pub fn write_log(&self, destination: &Path) -> Result<usize, AppError> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = create_new(destination)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        writer.write_record(RECORD_COLUMNS)?;

        let mut previous: Option<OffsetDateTime> = None;
        for record in &self.records {
            let delta = previous
                .map(|p| (record.timestamp - p).as_seconds_f64())
                .unwrap_or(0.0);
            previous = Some(record.timestamp);

            let mv = match &record.mv {
                Some(mv) => serde_json::to_string(mv)?,
                None => String::new(),
            };
            let reward = record.reward.map(|r| r.to_string()).unwrap_or_default();
            writer.write_record([
                record.player.to_string(),
                record.player_type.clone(),
                mv,
                serde_json::to_string(&record.observation_after.lighten())?,
                reward,
                delta.to_string(),
                serde_json::to_string(&record.observation_after.vectorized())?,
            ])?;
        }
        writer.flush()?;

        info!(
            path = %destination.display(),
            records = self.records.len(),
            "wrote record log"
        );
        Ok(self.records.len())
    }
}

/// Open `path` for writing only if nothing is there yet.
pub fn create_new(path: &Path) -> Result<File, AppError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => AppError::duplicate_output(path),
            _ => AppError::from(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn snapshot() -> FullObservation {
        FullObservation {
            current_player: 0,
            player_observations: Vec::new(),
        }
    }

    #[test]
    fn timestamps_strictly_increase() {
        let mut recorder = Recorder::new();
        recorder.add_initial_record(snapshot());
        for i in 0..50 {
            recorder.add_record(i % 2, "random", Some(Move::play(0)), Some(0.0), snapshot());
        }
        let records = recorder.records();
        assert!(records[0].is_sentinel());
        for pair in records.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.csv");
        let mut recorder = Recorder::new();
        recorder.add_initial_record(snapshot());
        recorder.add_record(0, "human", Some(Move::discard(1)), Some(0.0), snapshot());

        assert_eq!(recorder.write_log(&path).unwrap(), 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, RECORD_COLUMNS);
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "-1");
        assert_eq!(&rows[0][1], "init");
        assert_eq!(&rows[0][2], "");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[0][5], "0");
        assert!(rows[1][2].contains("DISCARD"));
        assert_eq!(&rows[1][6], "[]");
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        std::fs::write(&path, "keep me").unwrap();

        let err = Recorder::new().write_log(&path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateOutput);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }
}
