//! Active navigation link matching.

use url::Url;

/// Returns true if `href`, resolved against the page URL, points at the
/// page's own path. Query and fragment are ignored.
///
/// # Example
///
/// ```
/// use fitflow_domain::navigation::is_current_page;
/// use url::Url;
///
/// let page = Url::parse("http://localhost:5000/socios?page=2").unwrap();
/// assert!(is_current_page(&page, "/socios"));
/// assert!(!is_current_page(&page, "/clases"));
/// ```
#[must_use]
pub fn is_current_page(page: &Url, href: &str) -> bool {
    page.join(href)
        .is_ok_and(|target| target.path() == page.path())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_absolute_and_relative_hrefs() {
        let current = page("http://localhost:5000/pagos");
        assert!(is_current_page(&current, "/pagos"));
        assert!(is_current_page(&current, "pagos"));
        assert!(is_current_page(&current, "http://localhost:5000/pagos"));
        assert!(!is_current_page(&current, "/pagos/nuevo"));
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let current = page("http://localhost:5000/clases?dia=lunes#agenda");
        assert!(is_current_page(&current, "/clases"));
        assert!(is_current_page(&current, "/clases?dia=martes"));
        assert!(is_current_page(&current, "#otro"));
    }

    #[test]
    fn test_path_comparison_is_exact() {
        let current = page("http://localhost:5000/socios/");
        assert!(!is_current_page(&current, "/socios"));
        assert!(is_current_page(&current, "/socios/"));
    }

    #[test]
    fn test_root_page() {
        let current = page("http://localhost:5000/");
        assert!(is_current_page(&current, "/"));
        assert!(!is_current_page(&current, "/reservas"));
    }

    #[test]
    fn test_unresolvable_href_never_matches() {
        let current = page("http://localhost:5000/");
        assert!(!is_current_page(&current, "http://[::1"));
    }
}
