/// Extensions classified as images.
const IMAGE_TYPES: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];
/// Extensions classified as plain documents (PDF is its own category).
const DOCUMENT_TYPES: [&str; 5] = ["doc", "docx", "txt", "rtf", "odt"];
/// Extensions classified as archives.
const ARCHIVE_TYPES: [&str; 5] = ["zip", "rar", "7z", "tar", "gz"];

/// Derives a coarse category label from a file name's extension.
///
/// Used for entries created in offline fallback mode, which lack a
/// backend-supplied type. An empty name yields "Unknown"; an
/// unrecognized extension yields "Other".
//
// // 从文件名的扩展名推导一个粗粒度的类别标签。
// //
// // 用于离线回退模式下创建的条目，它们没有后端提供的类型。
// // 空文件名返回 "Unknown"，无法识别的扩展名返回 "Other"。
pub fn classify_file_type(file_name: &str) -> &'static str {
    if file_name.is_empty() {
        return "Unknown";
    }

    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if extension == "pdf" {
        return "PDF";
    }
    if IMAGE_TYPES.contains(&extension.as_str()) {
        return "Image";
    }
    if DOCUMENT_TYPES.contains(&extension.as_str()) {
        return "Document";
    }
    if ARCHIVE_TYPES.contains(&extension.as_str()) {
        return "Archive";
    }
    "Other"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(classify_file_type("report.pdf"), "PDF");
        assert_eq!(classify_file_type("photo.JPG"), "Image");
        assert_eq!(classify_file_type("notes.txt"), "Document");
        assert_eq!(classify_file_type("backup.tar"), "Archive");
        assert_eq!(classify_file_type("program.exe"), "Other");
    }

    #[test]
    fn test_edge_names() {
        assert_eq!(classify_file_type(""), "Unknown");
        // 没有扩展名时，整个名字被当作"扩展名"，落入 Other
        assert_eq!(classify_file_type("Makefile"), "Other");
        assert_eq!(classify_file_type("archive.v2.zip"), "Archive");
    }
}
