use crate::config::SUPPORTED_FILE_EXTENSIONS;
use std::path::Path;

/// Returns true when the path's extension is one of the supported document types.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_FILE_EXTENSIONS.contains(&ext_str))
        .unwrap_or(false)
}

/// Returns true for existing regular files with a supported extension.
pub fn is_supported_file(path: &Path) -> bool {
    path.is_file() && has_supported_extension(path)
}

/// Number of `\n`-separated segments; an empty text still counts as one line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_must_match_exactly() {
        assert!(has_supported_extension(Path::new("a/b/data.json")));
        assert!(has_supported_extension(Path::new("notes.txt")));
        assert!(!has_supported_extension(Path::new("NOTES.JSON")));
        assert!(!has_supported_extension(Path::new("notes.TXT")));
        assert!(!has_supported_extension(Path::new("main.kt")));
        assert!(!has_supported_extension(Path::new("json")));
    }

    #[test]
    fn line_count_matches_split_semantics() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("{}"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("a\nb\n"), 3);
    }
}
