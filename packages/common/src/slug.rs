/// Turn a page title into a URL-safe slug.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single `-`,
/// and trims leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Whether a slug is already URL-safe: non-empty, lowercase alphanumeric
/// and single dashes, no leading/trailing dash.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}
