use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::utils::time::now_timestamp_millis;

/// A type-safe wrapper for the opaque identifier the backend assigns to
/// files, folders, users and activity records.
///
/// The backend is inconsistent about whether ids arrive as JSON strings or
/// integers, so deserialization accepts both and normalizes to a string.
//
// // 后端为文件、文件夹、用户和活动记录分配的不透明标识符的类型安全包装器。
// //
// // 后端返回的 id 有时是 JSON 字符串，有时是整数，
// // 因此反序列化同时接受两者并统一规范化为字符串。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    /// Creates an `EntryId` from any string-like value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mints a timestamp-based id for entries created in offline fallback
    /// mode, where no backend is available to assign one.
    //
    // // 为离线回退模式下创建的条目生成一个基于时间戳的 id，
    // // 因为此时没有后端来分配 id。
    pub fn mint_local() -> Self {
        Self(now_timestamp_millis().to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for EntryId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<i64> for EntryId {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct EntryIdVisitor;

impl<'de> Visitor<'de> for EntryIdVisitor {
    type Value = EntryId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EntryId::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(EntryId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(EntryId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EntryId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryIdVisitor)
    }
}
