//! The per-session password gate.
//!
//! Each protected entry moves through `Locked → Verifying → Unlocked`
//! within one session; nothing here is ever persisted, so every new
//! session starts fully locked. The list pipeline always surfaces a
//! protected entry's *metadata*; its content may only be revealed once the
//! gate reports it unlocked.
//
// // 会话级口令闸门。
// //
// // 每个受保护的条目在一次会话内经历 `Locked → Verifying → Unlocked`；
// // 这里的任何状态都不会被持久化，因此每个新会话都从全锁定开始。
// // 列表管道始终只展示受保护条目的*元数据*；
// // 只有闸门报告已解锁后，才允许展示其内容。

use std::collections::HashMap;

use crate::common::id::EntryId;

/// The gate position of one entry within the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Locked,
    /// A verification request is in flight.
    Verifying,
    /// Unlocked for the remainder of this session.
    Unlocked,
}

/// Tracks gate positions for all entries of one session.
#[derive(Debug, Clone, Default)]
pub struct PasswordGate {
    states: HashMap<EntryId, GateState>,
}

impl PasswordGate {
    pub fn new() -> Self {
        PasswordGate::default()
    }

    /// The current position of an entry; entries never touched are locked.
    pub fn state(&self, id: &EntryId) -> GateState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Marks a verification as started.
    pub fn begin_verify(&mut self, id: &EntryId) {
        self.states.insert(id.clone(), GateState::Verifying);
    }

    /// Records the verification outcome: success unlocks for the session,
    /// failure drops the entry back to locked. Returns the new position.
    pub fn complete_verify(&mut self, id: &EntryId, ok: bool) -> GateState {
        let next = if ok {
            GateState::Unlocked
        } else {
            GateState::Locked
        };
        self.states.insert(id.clone(), next);
        next
    }

    pub fn is_unlocked(&self, id: &EntryId) -> bool {
        self.state(id) == GateState::Unlocked
    }

    /// Whether an entry's content may be shown: unprotected entries always,
    /// protected ones only after a successful verification this session.
    pub fn can_reveal(&self, is_protected: bool, id: &EntryId) -> bool {
        !is_protected || self.is_unlocked(id)
    }

    /// Re-locks everything, e.g. on logout.
    pub fn lock_all(&mut self) {
        self.states.clear();
    }
}
