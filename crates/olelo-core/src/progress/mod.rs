//! Local lesson-progress persistence.
//!
//! Tracks per-lesson completion, attempts, and best score, saved to a small
//! binary file so progress survives restarts without any account backend.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::curriculum::Curriculum;

const MAGIC: &[u8; 4] = b"OLPR";
const VERSION: u8 = 1;

/// Seconds since the Unix epoch.
pub fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Format an epoch timestamp for display. Falls back to the raw number for
/// out-of-range values.
pub fn format_epoch(epoch: u64) -> String {
    time::OffsetDateTime::from_unix_timestamp(epoch as i64)
        .ok()
        .and_then(|t| {
            t.format(&time::format_description::well_known::Rfc3339)
                .ok()
        })
        .unwrap_or_else(|| epoch.to_string())
}

/// Progress on a single lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub attempts: u32,
    /// Best quiz score as a percentage, 0..=100.
    pub best_score: u8,
    pub completed: bool,
    /// Epoch seconds of first completion.
    pub completed_at: Option<u64>,
    pub points_earned: u32,
}

/// Flat serialization record.
#[derive(Serialize, Deserialize)]
struct ProgressRecord {
    lesson_id: u32,
    attempts: u32,
    best_score: u8,
    completed: bool,
    completed_at: Option<u64>,
    points_earned: u32,
}

#[derive(Default, Debug)]
pub struct ProgressStore {
    records: HashMap<u32, LessonProgress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished lesson run.
    ///
    /// Attempts accumulate; the best score and the first completion
    /// timestamp stick. Points are granted once, on first completion.
    pub fn record_completion(&mut self, lesson_id: u32, score: u8, points: u32, now: u64) {
        let entry = self.records.entry(lesson_id).or_insert(LessonProgress {
            attempts: 0,
            best_score: 0,
            completed: false,
            completed_at: None,
            points_earned: 0,
        });
        entry.attempts += 1;
        entry.best_score = entry.best_score.max(score.min(100));
        if !entry.completed {
            entry.completed = true;
            entry.completed_at = Some(now);
            entry.points_earned = points;
        }
        tracing::debug!(lesson_id, score, "lesson completion recorded");
    }

    pub fn get(&self, lesson_id: u32) -> Option<&LessonProgress> {
        self.records.get(&lesson_id)
    }

    /// Ids of completed lessons, sorted.
    pub fn completed_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .records
            .iter()
            .filter(|(_, p)| p.completed)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Total points earned across completed lessons.
    pub fn total_points(&self) -> u32 {
        self.records.values().map(|p| p.points_earned).sum()
    }

    /// Fraction of the curriculum completed, 0.0..=1.0.
    pub fn completion_fraction(&self, curriculum: &Curriculum) -> f64 {
        let total = curriculum.lessons().len();
        if total == 0 {
            return 0.0;
        }
        self.completed_ids().len() as f64 / total as f64
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to bytes (OLPR format: magic, version, crc32 of body, body).
    pub fn to_bytes(&self) -> Result<Vec<u8>, io::Error> {
        let mut records: Vec<ProgressRecord> = self
            .records
            .iter()
            .map(|(&lesson_id, p)| ProgressRecord {
                lesson_id,
                attempts: p.attempts,
                best_score: p.best_score,
                completed: p.completed,
                completed_at: p.completed_at,
                points_earned: p.points_earned,
            })
            .collect();
        records.sort_by_key(|r| r.lesson_id);

        let body = bincode::serialize(&records).map_err(io::Error::other)?;
        let crc = crc32fast::hash(&body);

        let mut buf = Vec::with_capacity(9 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (OLPR format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < 9 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "too short"));
        }
        if &bytes[0..4] != MAGIC {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bad magic"));
        }
        if bytes[4] != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unsupported version",
            ));
        }
        let expected_crc = u32::from_le_bytes(bytes[5..9].try_into().expect("4 bytes"));
        let body = &bytes[9..];
        if crc32fast::hash(body) != expected_crc {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "checksum mismatch"));
        }

        let records: Vec<ProgressRecord> = bincode::deserialize(body)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut map = HashMap::with_capacity(records.len());
        for r in records {
            map.insert(
                r.lesson_id,
                LessonProgress {
                    attempts: r.attempts,
                    best_score: r.best_score,
                    completed: r.completed,
                    completed_at: r.completed_at,
                    points_earned: r.points_earned,
                },
            );
        }
        Ok(Self { records: map })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open from file, returning an empty store if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_completion_accumulates() {
        let mut store = ProgressStore::new();
        store.record_completion(1, 50, 100, 1000);
        store.record_completion(1, 100, 100, 2000);

        let p = store.get(1).unwrap();
        assert_eq!(p.attempts, 2);
        assert_eq!(p.best_score, 100);
        assert!(p.completed);
        // First completion timestamp sticks
        assert_eq!(p.completed_at, Some(1000));
        // Points granted once
        assert_eq!(p.points_earned, 100);
        assert_eq!(store.total_points(), 100);
    }

    #[test]
    fn test_score_clamped_to_100() {
        let mut store = ProgressStore::new();
        store.record_completion(1, 255, 100, 0);
        assert_eq!(store.get(1).unwrap().best_score, 100);
    }

    #[test]
    fn test_completed_ids_sorted() {
        let mut store = ProgressStore::new();
        store.record_completion(3, 80, 100, 0);
        store.record_completion(1, 90, 100, 0);
        store.record_completion(2, 70, 100, 0);
        assert_eq!(store.completed_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut store = ProgressStore::new();
        store.record_completion(1, 100, 100, 1234);
        store.record_completion(7, 50, 150, 5678);

        let bytes = store.to_bytes().unwrap();
        let restored = ProgressStore::from_bytes(&bytes).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get(1), store.get(1));
        assert_eq!(restored.get(7), store.get(7));
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut store = ProgressStore::new();
        store.record_completion(1, 100, 100, 0);
        let mut bytes = store.to_bytes().unwrap();
        bytes[0] = b'X';
        assert!(ProgressStore::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_corrupt_body_rejected() {
        let mut store = ProgressStore::new();
        store.record_completion(1, 100, 100, 0);
        let mut bytes = store.to_bytes().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        let err = ProgressStore::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_save_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.olpr");

        let mut store = ProgressStore::new();
        store.record_completion(2, 100, 100, 999);
        store.save(&path).unwrap();

        let restored = ProgressStore::open(&path).unwrap();
        assert_eq!(restored.get(2), store.get(2));
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::open(&dir.path().join("missing.olpr")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_completion_fraction() {
        let mut store = ProgressStore::new();
        assert_eq!(store.completion_fraction(Curriculum::global()), 0.0);
        store.record_completion(1, 100, 100, 0);
        store.record_completion(2, 100, 100, 0);
        store.record_completion(3, 100, 100, 0);
        let fraction = store.completion_fraction(Curriculum::global());
        assert!((fraction - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_format_epoch() {
        assert_eq!(format_epoch(0), "1970-01-01T00:00:00Z");
    }
}
