//! Text normalization for caller-supplied filters and stored labels.

/// Normalize an optional platform filter: trim, lowercase, blank → `None`.
///
/// Platforms are stored lowercase; normalizing at the boundary keeps
/// comparisons consistent everywhere else.
pub fn normalize_platform(platform: Option<&str>) -> Option<String> {
    let platform = platform?.trim().to_lowercase();
    if platform.is_empty() {
        None
    } else {
        Some(platform)
    }
}

/// Normalize a category or keyword label: trim and lowercase.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_is_trimmed_and_lowercased() {
        assert_eq!(
            normalize_platform(Some("  YouTube ")),
            Some("youtube".to_string())
        );
    }

    #[test]
    fn blank_platform_becomes_none() {
        assert_eq!(normalize_platform(Some("   ")), None);
        assert_eq!(normalize_platform(None), None);
    }

    #[test]
    fn labels_keep_non_ascii_text() {
        assert_eq!(normalize_label(" 게임 "), "게임");
        assert_eq!(normalize_label("Music"), "music");
    }
}
