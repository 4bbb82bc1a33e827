//! The single authorization rule: a resource may only be touched by its owner.

/// Whether the logged-in user (if any) owns the resource.
pub fn is_authorized(session_user: Option<&str>, owner: &str) -> bool {
    session_user == Some(owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_authorized() {
        assert!(is_authorized(Some("alice"), "alice"));
    }

    #[test]
    fn test_other_user_is_not_authorized() {
        assert!(!is_authorized(Some("bob"), "alice"));
    }

    #[test]
    fn test_anonymous_is_not_authorized() {
        assert!(!is_authorized(None, "alice"));
        assert!(!is_authorized(None, ""));
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(!is_authorized(Some("Alice"), "alice"));
        assert!(!is_authorized(Some("alice "), "alice"));
    }
}
