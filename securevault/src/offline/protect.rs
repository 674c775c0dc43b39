//! Offline password-protection records.
//!
//! KNOWN LIMITATION: the original client stored offline passwords as a
//! reversible base64 encoding and compared encodings on verify. That is
//! access-control theater, not secret storage: anyone who can read the
//! store can decode every password. New records written by this module use
//! a salted one-way SHA-256 instead; the legacy reversible form is still
//! *accepted* during verification so existing stores keep working, but it
//! is never written again.
//
// // 离线口令保护记录。
// //
// // 已知局限：原客户端把离线口令存成可逆的 base64 编码，
// // 校验时比较两个编码。这只是访问控制的表演，不是真正的秘密存储——
// // 能读到存储的人就能解码出每一个口令。
// // 本模块写入的新记录改用带盐的单向 SHA-256；
// // 旧的可逆形式在校验时仍被*接受*以兼容既有存储，但不会再被写入。

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::common::constants::SALTED_HASH_PREFIX;
use crate::common::id::EntryId;
use crate::offline::store::OfflineState;

/// One protection record, keyed by entry id in the offline store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionRecord {
    pub is_password_protected: bool,
    /// Either `sha256:<salt-hex>:<digest-hex>` (current scheme) or a bare
    /// base64 encoding of the password (legacy, verify-only).
    pub password_hash: String,
}

impl ProtectionRecord {
    /// Creates a record with a fresh random salt.
    pub fn new(password: &str) -> Self {
        let mut salt = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        let salt_hex = hex::encode(salt);
        let digest = salted_digest(password, &salt_hex);
        ProtectionRecord {
            is_password_protected: true,
            password_hash: format!("{}{}:{}", SALTED_HASH_PREFIX, salt_hex, digest),
        }
    }

    /// Checks a submitted password against this record. Accepts both the
    /// salted scheme and the legacy reversible encoding.
    pub fn verify(&self, password: &str) -> bool {
        if let Some(rest) = self.password_hash.strip_prefix(SALTED_HASH_PREFIX) {
            return match rest.split_once(':') {
                Some((salt_hex, digest)) => salted_digest(password, salt_hex) == digest,
                None => false,
            };
        }
        // 旧记录：与口令的 base64 编码逐字比较
        STANDARD.encode(password.as_bytes()) == self.password_hash
    }
}

fn salted_digest(password: &str, salt_hex: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

// --- OfflineState 上的保护操作 ---

pub(crate) fn set_protection(
    records: &mut std::collections::HashMap<EntryId, ProtectionRecord>,
    id: EntryId,
    password: &str,
) {
    records.insert(id, ProtectionRecord::new(password));
}

impl OfflineState {
    pub fn protect_file(&mut self, id: EntryId, password: &str) {
        set_protection(&mut self.protected_files, id, password);
    }

    pub fn protect_folder(&mut self, id: EntryId, password: &str) {
        set_protection(&mut self.protected_folders, id, password);
    }

    /// Removes a file's protection; returns whether a record existed.
    pub fn unprotect_file(&mut self, id: &EntryId) -> bool {
        self.protected_files.remove(id).is_some()
    }

    pub fn unprotect_folder(&mut self, id: &EntryId) -> bool {
        self.protected_folders.remove(id).is_some()
    }

    pub fn is_file_protected(&self, id: &EntryId) -> bool {
        self.protected_files
            .get(id)
            .is_some_and(|r| r.is_password_protected)
    }

    pub fn is_folder_protected(&self, id: &EntryId) -> bool {
        self.protected_folders
            .get(id)
            .is_some_and(|r| r.is_password_protected)
    }

    /// Verifies a password against a file's record. A missing record fails
    /// verification, mirroring the original client's check.
    pub fn verify_file(&self, id: &EntryId, password: &str) -> bool {
        self.protected_files
            .get(id)
            .is_some_and(|r| r.verify(password))
    }

    pub fn verify_folder(&self, id: &EntryId, password: &str) -> bool {
        self.protected_folders
            .get(id)
            .is_some_and(|r| r.verify(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salted_record_verifies_and_is_one_way() {
        let record = ProtectionRecord::new("correct horse");
        assert!(record.verify("correct horse"));
        assert!(!record.verify("wrong"));
        // 记录中不应出现口令的任何可逆形式
        assert!(record.password_hash.starts_with(SALTED_HASH_PREFIX));
        assert!(!record.password_hash.contains("correct"));
        let reversible = STANDARD.encode("correct horse");
        assert!(!record.password_hash.contains(&reversible));
    }

    #[test]
    fn test_two_records_for_same_password_differ() {
        // 随机盐：相同口令的两条记录哈希不同
        let a = ProtectionRecord::new("pw");
        let b = ProtectionRecord::new("pw");
        assert_ne!(a.password_hash, b.password_hash);
        assert!(a.verify("pw") && b.verify("pw"));
    }

    #[test]
    fn test_legacy_base64_record_still_verifies() {
        let legacy = ProtectionRecord {
            is_password_protected: true,
            password_hash: STANDARD.encode("open sesame"),
        };
        assert!(legacy.verify("open sesame"));
        assert!(!legacy.verify("close sesame"));
    }

    #[test]
    fn test_missing_record_fails_verification() {
        let state = OfflineState::default();
        assert!(!state.verify_file(&EntryId::from("nope"), "pw"));
        assert!(!state.is_file_protected(&EntryId::from("nope")));
    }
}
