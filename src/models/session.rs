use serde::{Deserialize, Serialize};

/// Identity captured by the mocked GitHub login. Nothing is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Process-wide login state. Initialized empty, cleared on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn active(user: UserProfile) -> Self {
        Self {
            logged_in: true,
            user: Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_logged_out() {
        let session = Session::default();
        assert!(!session.logged_in);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_active_session_carries_user() {
        let session = Session::active(UserProfile {
            name: "octocat".into(),
            email: "octo@example.com".into(),
        });
        assert!(session.logged_in);
        assert_eq!(session.user.unwrap().name, "octocat");
    }
}
