//! Two login flows share this module: the credential flow that talks to the
//! remote auth endpoints and stores a bearer token, and the mocked GitHub
//! login that accepts any name/email and activates the session directly.
//! The GitHub flow is a placeholder for real OAuth, not a trust model.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Session, UserProfile};
use crate::store::{Store, SESSION_KEY, TOKEN_KEY};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

/// Client for the remote credential endpoints.
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// POST `/api/auth/login`. Returns the bearer token on success; a non-2xx
    /// response surfaces its message as `Error::RemoteAuth`.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        validate_login(email, password)?;

        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteAuth(error_message(&body, "Login failed")));
        }

        let body = response.text().await?;
        parse_token(&body)
    }

    /// POST `/api/auth/signup`. Success carries no token; the caller logs in
    /// afterwards.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<()> {
        validate_signup(username, email, password)?;

        let response = self
            .http
            .post(format!("{}/api/auth/signup", self.base_url))
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteAuth(error_message(&body, "Signup failed")));
        }

        Ok(())
    }
}

fn parse_token(body: &str) -> Result<String> {
    serde_json::from_str::<TokenResponse>(body)
        .map(|r| r.token)
        .map_err(|_| Error::RemoteAuth("malformed login response".to_string()))
}

/// Pull the server's message out of an error body, falling back when the
/// body is not the expected shape.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .map(|r| r.message)
        .unwrap_or_else(|_| fallback.to_string())
}

/// Minimal shape check: non-empty local part, non-empty domain with a dot,
/// no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.split_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::validation("Email is required"));
    }
    if !is_valid_email(email) {
        return Err(Error::validation("Invalid email address"));
    }
    if password.is_empty() {
        return Err(Error::validation("Password is required"));
    }
    Ok(())
}

pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::validation("Username is required"));
    }
    if email.trim().is_empty() {
        return Err(Error::validation("Email is required"));
    }
    if !is_valid_email(email) {
        return Err(Error::validation("Invalid email address"));
    }
    if password.is_empty() {
        return Err(Error::validation("Password is required"));
    }
    if password.len() < 6 {
        return Err(Error::validation("Password must be at least 6 characters"));
    }
    Ok(())
}

/// Mocked GitHub login: any non-blank name and email activate the session.
pub fn github_login(store: &Store, name: &str, email: &str) -> Result<Session> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(Error::validation("GitHub name and email are required"));
    }

    let session = Session::active(UserProfile {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    });
    store.put(SESSION_KEY, &session)?;
    tracing::info!(user = %name.trim(), "github login (mock)");
    Ok(session)
}

/// Persist the bearer token from the credential flow.
pub fn store_token(store: &Store, token: &str) -> Result<()> {
    store.put(TOKEN_KEY, &token.to_string())?;
    Ok(())
}

pub fn stored_token(store: &Store) -> Result<Option<String>> {
    Ok(store.get(TOKEN_KEY)?)
}

/// The current session: the GitHub session slot if present, otherwise a
/// token-only login with no profile.
pub fn current_session(store: &Store) -> Result<Session> {
    if let Some(session) = store.get::<Session>(SESSION_KEY)? {
        return Ok(session);
    }
    if stored_token(store)?.is_some() {
        return Ok(Session {
            logged_in: true,
            user: None,
        });
    }
    Ok(Session::default())
}

/// Clear the bearer token and the session. Returns to logged-out state.
pub fn logout(store: &Store) -> Result<()> {
    store.remove(TOKEN_KEY)?;
    store.remove(SESSION_KEY)?;
    Ok(())
}

/// Gate for the upload entry point: uploads require an active session.
pub fn ensure_logged_in(store: &Store) -> Result<Session> {
    let session = current_session(store)?;
    if !session.logged_in {
        return Err(Error::validation(
            "You must login with your GitHub account to upload a project",
        ));
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp_store() -> (Store, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&dir.path().join("test.db")).unwrap();
        (store, dir)
    }

    #[test]
    fn test_email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_validate_login_rules() {
        assert!(validate_login("a@b.co", "pw").is_ok());
        assert!(matches!(
            validate_login("", "pw"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_login("bad", "pw"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_login("a@b.co", ""),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_validate_signup_password_length() {
        assert!(validate_signup("u", "a@b.co", "123456").is_ok());
        assert!(matches!(
            validate_signup("u", "a@b.co", "12345"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_signup("", "a@b.co", "123456"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_parse_token_and_error_message() {
        assert_eq!(parse_token(r#"{"token":"abc"}"#).unwrap(), "abc");
        assert!(matches!(
            parse_token("not json"),
            Err(Error::RemoteAuth(_))
        ));
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#, "Login failed"),
            "Invalid credentials"
        );
        assert_eq!(error_message("<html>502</html>", "Login failed"), "Login failed");
    }

    #[test]
    fn test_github_login_requires_name_and_email() {
        let (store, _dir) = open_temp_store();
        assert!(matches!(
            github_login(&store, "", "a@b.co"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            github_login(&store, "octocat", "  "),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_github_login_activates_session() {
        let (store, _dir) = open_temp_store();
        let session = github_login(&store, "octocat", "octo@example.com").unwrap();
        assert!(session.logged_in);

        let current = current_session(&store).unwrap();
        assert_eq!(current.user.unwrap().name, "octocat");
    }

    #[test]
    fn test_token_only_session_is_logged_in() {
        let (store, _dir) = open_temp_store();
        store_token(&store, "bearer-xyz").unwrap();

        let session = current_session(&store).unwrap();
        assert!(session.logged_in);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_logout_clears_token_and_session() {
        let (store, _dir) = open_temp_store();
        store_token(&store, "bearer-xyz").unwrap();
        github_login(&store, "octocat", "octo@example.com").unwrap();

        logout(&store).unwrap();
        assert!(stored_token(&store).unwrap().is_none());
        assert!(!current_session(&store).unwrap().logged_in);
    }

    #[test]
    fn test_upload_gate_blocks_logged_out() {
        let (store, _dir) = open_temp_store();
        assert!(matches!(
            ensure_logged_in(&store),
            Err(Error::Validation(_))
        ));

        github_login(&store, "octocat", "octo@example.com").unwrap();
        assert!(ensure_logged_in(&store).is_ok());
    }
}
