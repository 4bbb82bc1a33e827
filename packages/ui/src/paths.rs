//! Links into the user namespace. Usernames are free text, so they are
//! percent-encoded as a single path segment.

use std::borrow::Cow;

fn segment(username: &str) -> Cow<'_, str> {
    urlencoding::encode(username)
}

/// `/users/{username}`
pub fn user_path(username: &str) -> String {
    format!("/users/{}", segment(username))
}

/// `/users/{username}/notes/add`
pub fn add_note_path(username: &str) -> String {
    format!("{}/notes/add", user_path(username))
}

/// `/users/{username}/delete`
pub fn delete_user_path(username: &str) -> String {
    format!("{}/delete", user_path(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_username_is_unchanged() {
        assert_eq!(user_path("alice"), "/users/alice");
        assert_eq!(add_note_path("alice"), "/users/alice/notes/add");
        assert_eq!(delete_user_path("alice"), "/users/alice/delete");
    }

    #[test]
    fn test_reserved_characters_stay_in_one_segment() {
        assert_eq!(user_path("a/b"), "/users/a%2Fb");
        assert_eq!(add_note_path("who?#me"), "/users/who%3F%23me/notes/add");
        assert_eq!(user_path("j doe"), "/users/j%20doe");
    }
}
