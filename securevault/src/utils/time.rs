use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Returns the current UTC time as a string formatted according to RFC 3339.
///
/// This format is chosen for its unambiguity and widespread support.
/// Example: "2025-09-13T03:49:58.123456789Z"
pub fn now_as_rfc3339_string() -> String {
    Utc::now().to_rfc3339()
}

/// Returns the current UTC time in milliseconds since the epoch. This is
/// the basis for ids minted in offline fallback mode.
pub fn now_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parses a backend timestamp string leniently.
///
/// The backend is not consistent: documents carry full RFC 3339 stamps,
/// some user records carry zone-less `LocalDateTime` renderings, and seed
/// data carries bare dates. A string none of the formats accept yields
/// `None`, never an error; callers treat that as "unknown, sorts oldest".
//
// // 宽松地解析后端的时间戳字符串。
// //
// // 后端并不一致：文档带完整的 RFC 3339 时间戳，
// // 某些用户记录是不带时区的 `LocalDateTime` 字符串，种子数据只有日期。
// // 所有格式都无法接受的字符串返回 `None` 而不是错误；
// // 调用方将其视为"未知，按最旧排序"。
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
