/// The binary units the dashboard displays. Nothing stored today exceeds
/// the gigabyte range, so the ladder stops at GB like the original UI.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Converts a byte count to a human-readable string using binary (1024)
/// units, picking the largest unit where the value is at least 1 and
/// rounding to at most two decimal places. Trailing zeros are trimmed, so
/// 1024 renders as "1 KB" and 1536 as "1.5 KB". Zero renders as "0 B".
//
// // 将字节数转换为人类可读的字符串：使用二进制（1024）单位，
// // 选择数值不小于 1 的最大单位，最多保留两位小数并去掉末尾的零。
// // 1024 显示为 "1 KB"，1536 显示为 "1.5 KB"，零显示为 "0 B"。
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut rendered = format!("{:.2}", value);
    if rendered.contains('.') {
        rendered = rendered.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{} {}", rendered, UNITS[unit])
}
