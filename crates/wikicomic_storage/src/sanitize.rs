//! Filename and directory-name sanitizers.

/// Maximum length of a sanitized path component, in characters.
const MAX_COMPONENT_CHARS: usize = 200;

/// Replace filesystem-reserved characters with underscores and cap the
/// length at 200 characters.
///
/// # Examples
///
/// ```
/// use wikicomic_storage::sanitize_filename;
///
/// assert_eq!(sanitize_filename("AC/DC: Back in Black?"), "AC_DC_ Back in Black_");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .take(MAX_COMPONENT_CHARS)
        .collect()
}

/// Reduce an article title to a safe directory name.
///
/// Keeps alphanumeric characters, spaces, hyphens, and underscores; drops
/// everything else and trims surrounding whitespace. Can produce an empty
/// string for titles made entirely of dropped characters.
pub fn sanitize_dir_component(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}
