//! # Authentication
//!
//! HTTP basic auth is the only supported scheme. Credentials are used only
//! when both halves are present; a lone username or password is ignored.

/// A username/password pair for HTTP basic auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    /// Both fields must be non-blank after trimming. The stored values are
    /// the caller's originals.
    pub fn resolve(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        let username = non_blank(username)?;
        let password = non_blank(password)?;
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
