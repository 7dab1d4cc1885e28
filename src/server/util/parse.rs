/// Returns `path` when it is safe to redirect to after login.
///
/// Only same-origin absolute paths are accepted; `//host` and full URLs are
/// rejected so the login flow cannot be used as an open redirect.
pub fn sanitize_redirect_path(path: &str) -> Option<String> {
    let path = path.trim();
    if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') {
        Some(path.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_local_paths_are_redirect_targets() {
        assert_eq!(
            sanitize_redirect_path("/dashboard/1/members").as_deref(),
            Some("/dashboard/1/members")
        );
        assert_eq!(sanitize_redirect_path("//evil.example"), None);
        assert_eq!(sanitize_redirect_path("https://evil.example"), None);
        assert_eq!(sanitize_redirect_path("/\\evil.example"), None);
    }
}
