//! Shared utility functions.

/// Convert a page title as it appears in URLs to a display title.
///
/// Underscores become spaces, with runs of them collapsed and leading or
/// trailing ones dropped.
/// "Main_Page" -> "Main Page"
/// "Golang" -> "Golang"
pub fn display_title(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
