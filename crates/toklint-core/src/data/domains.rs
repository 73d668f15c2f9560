//! Domain suffix and file extension tables.
//!
//! These drive URL/email recognition and the broken-filename pre-scan. The
//! sets are fixed data, not configuration.

/// Top-level domain suffixes recognized in URLs and email addresses.
/// Two-letter country codes are matched by pattern, not listed here.
pub const DOMAIN_SUFFIXES: &[&str] = &[
    "biz", "cat", "com", "edu", "gov", "info", "int", "mil", "museum", "name", "net", "org",
    "pro", "aero", "coop", "jobs", "mobi", "travel",
];

/// Common file extensions recognized by the broken-filename pre-scan.
pub const FILE_EXTENSIONS: &[&str] = &[
    "asp", "aspx", "avi", "bmp", "cgi", "css", "csv", "doc", "docx", "exe", "gif", "gz", "htm",
    "html", "jpeg", "jpg", "js", "json", "mov", "mp3", "mp4", "mpg", "pdf", "php", "png", "ppt",
    "pptx", "ps", "rar", "rtf", "tar", "tif", "tiff", "txt", "wav", "xls", "xlsx", "xml", "zip",
];

/// Alternation fragment for use inside a regex, e.g. `(?:com|org|...)`.
pub fn suffix_alternation() -> String {
    DOMAIN_SUFFIXES.join("|")
}

/// Alternation fragment of file extensions for use inside a regex.
pub fn extension_alternation() -> String {
    FILE_EXTENSIONS.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternations_are_nonempty() {
        assert!(suffix_alternation().contains("com|"));
        assert!(extension_alternation().contains("html|"));
    }
}
