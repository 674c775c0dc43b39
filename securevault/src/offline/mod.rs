//! Offline fallback mode: a local JSON document standing in for the
//! backend when it is unreachable, plus the session-scoped password gate.

pub mod activity;
pub mod gate;
pub mod protect;
pub mod store;

pub use activity::ActivityRecord;
pub use gate::{GateState, PasswordGate};
pub use protect::ProtectionRecord;
pub use store::{OfflineState, OfflineStore, StoreError};
