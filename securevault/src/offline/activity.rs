use serde::{Deserialize, Serialize};

use crate::common::id::EntryId;
use crate::offline::store::OfflineState;
use crate::utils::time::now_as_rfc3339_string;

/// One line of the append-only activity log kept in the offline store.
//
// // 离线存储中只追加的活动日志的一行。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: EntryId,
    /// Short verb, e.g. "upload", "delete", "rename", "protect".
    pub action: String,
    pub details: String,
    /// RFC 3339 timestamp string, matching what the backend logs use.
    pub timestamp: String,
    pub user: String,
}

impl OfflineState {
    /// Appends an activity record, minting a timestamp-based id the way
    /// every offline-created entry gets its id. Returns the new record.
    pub fn log_activity(
        &mut self,
        action: impl Into<String>,
        details: impl Into<String>,
        user: impl Into<String>,
    ) -> &ActivityRecord {
        let record = ActivityRecord {
            id: EntryId::mint_local(),
            action: action.into(),
            details: details.into(),
            timestamp: now_as_rfc3339_string(),
            user: user.into(),
        };
        self.activity_logs.push(record);
        self.activity_logs.last().expect("just pushed")
    }

    /// The most recent activity first, at most `limit` records.
    pub fn recent_activity(&self, limit: usize) -> Vec<&ActivityRecord> {
        self.activity_logs.iter().rev().take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_and_recent_reverses() {
        let mut state = OfflineState::default();
        state.log_activity("upload", "a.txt", "offline");
        state.log_activity("delete", "b.txt", "offline");
        state.log_activity("rename", "c.txt", "offline");

        let recent = state.recent_activity(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action, "rename");
        assert_eq!(recent[1].action, "delete");
        // 追加式：原有顺序保持不变
        assert_eq!(state.activity_logs[0].action, "upload");
    }
}
