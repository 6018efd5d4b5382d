// 🗄️ Result Store - Scores keyed by receipt identity
//
// "The identifier is IDENTITY (never changes), the points are a VALUE computed once"
//
// In-memory, insert-only, process lifetime. Shared across request handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

// ============================================================================
// RECEIPT ID
// ============================================================================

/// Opaque identifier handed back on submission (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn new() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Only the canonical form handed out by [`ReceiptId`]'s `Display` is accepted
/// (lowercase, hyphenated). Other UUID spellings were never issued.
impl FromStr for ReceiptId {
    type Err = InvalidReceiptId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::try_parse(s).map_err(|_| InvalidReceiptId(s.to_string()))?;
        if uuid.hyphenated().to_string() != s {
            return Err(InvalidReceiptId(s.to_string()));
        }
        Ok(ReceiptId(uuid))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a receipt id: {0:?}")]
pub struct InvalidReceiptId(pub String);

// ============================================================================
// SCORE RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
    pub recorded_at: DateTime<Utc>,
}

// ============================================================================
// SCORE STORE
// ============================================================================

/// Registry of every score handed out since startup.
///
/// Cloning is cheap and shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    records: Arc<RwLock<HashMap<ReceiptId, ScoreRecord>>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        ScoreStore {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store `points` under a fresh identifier
    pub fn insert(&self, points: u64) -> ReceiptId {
        // Records are written whole under the lock, so a poisoned map is still consistent
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        let mut id = ReceiptId::new();
        while records.contains_key(&id) {
            id = ReceiptId::new();
        }

        records.insert(
            id,
            ScoreRecord {
                id,
                points,
                recorded_at: Utc::now(),
            },
        );
        id
    }

    pub fn lookup(&self, id: &ReceiptId) -> Option<u64> {
        self.get(id).map(|record| record.points)
    }

    pub fn get(&self, id: &ReceiptId) -> Option<ScoreRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_insert_then_lookup() {
        let store = ScoreStore::new();
        let id = store.insert(28);

        assert_eq!(store.lookup(&id), Some(28));
        assert_eq!(store.lookup(&id), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let store = ScoreStore::new();
        store.insert(10);

        assert_eq!(store.lookup(&ReceiptId::new()), None);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let store = ScoreStore::new();
        let a = store.insert(5);
        let b = store.insert(5);

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_returns_full_record() {
        let store = ScoreStore::new();
        let before = Utc::now();
        let id = store.insert(109);

        let record = store.get(&id).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.points, 109);
        assert!(record.recorded_at >= before);
    }

    #[test]
    fn test_receipt_id_round_trips_through_string() {
        let id = ReceiptId::new();
        let parsed: ReceiptId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!("not-a-uuid".parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_receipt_id_rejects_non_canonical_spellings() {
        let id = ReceiptId::new();
        let canonical = id.to_string();

        let spellings = [
            canonical.to_uppercase(),
            id.as_uuid().simple().to_string(),
            id.as_uuid().braced().to_string(),
            id.as_uuid().urn().to_string(),
        ];
        for spelling in spellings {
            assert!(spelling.parse::<ReceiptId>().is_err(), "accepted {}", spelling);
        }
    }

    #[test]
    fn test_clones_share_records() {
        let store = ScoreStore::new();
        let handle = store.clone();
        let id = handle.insert(7);

        assert_eq!(store.lookup(&id), Some(7));
    }

    #[test]
    fn test_concurrent_inserts_are_not_lost() {
        let store = ScoreStore::new();

        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..100)
                        .map(|i| (store.insert(worker * 100 + i), worker * 100 + i))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let issued: Vec<(ReceiptId, u64)> = workers
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(store.len(), 800);
        for (id, points) in issued {
            assert_eq!(store.lookup(&id), Some(points));
        }
    }
}
