/// Lowercase the title and collapse whitespace runs into single dashes.
///
/// "In Progress" becomes "in-progress".
pub fn status_slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
