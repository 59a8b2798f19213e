//! Time-based record id issuance.

use crate::model::record::RecordId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Issues `<PREFIX>-<epoch_ms>` ids with a strictly increasing suffix.
///
/// Two creates inside the same millisecond get consecutive suffixes instead of
/// a duplicate id.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last_suffix: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id for `prefix` using the wall clock.
    pub fn next_id(&mut self, prefix: &str) -> RecordId {
        self.next_id_at(prefix, now_epoch_ms())
    }

    /// Issues the next id for `prefix` as if the clock read `now_ms`.
    pub fn next_id_at(&mut self, prefix: &str, now_ms: i64) -> RecordId {
        let suffix = now_ms.max(self.last_suffix + 1);
        self.last_suffix = suffix;
        RecordId::new(format!("{prefix}-{suffix}"))
    }
}

pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::IdGenerator;

    #[test]
    fn same_millisecond_ids_stay_unique() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id_at("PAT", 1_700_000_000_000);
        let second = ids.next_id_at("PAT", 1_700_000_000_000);
        assert_eq!(first.as_str(), "PAT-1700000000000");
        assert_eq!(second.as_str(), "PAT-1700000000001");
    }

    #[test]
    fn clock_going_backwards_does_not_reuse_suffix() {
        let mut ids = IdGenerator::new();
        ids.next_id_at("DOC", 500);
        let next = ids.next_id_at("DOC", 100);
        assert_eq!(next.as_str(), "DOC-501");
    }
}
