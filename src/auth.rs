/// Identity provider seam
///
/// Login, signup and password reset are owned by an external identity
/// service. Callers talk to it through `AuthProvider`; whatever message the
/// provider returns on failure is shown to the user unchanged.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::generate_id;

/// Minimum password length accepted by `InMemoryAuthProvider`
pub const MIN_PASSWORD_LEN: usize = 6;

/// A failure reported by the identity provider
///
/// `Display` is the provider's message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    /// Provider-specific code, e.g. "auth/wrong-password"
    pub code: String,
    pub message: String,
}

impl AuthError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

/// Operations the authentication screens need from the identity service
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthUser, AuthError>;

    /// Send a password reset email
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
}

struct Account {
    user: AuthUser,
    password: String,
}

/// Identity provider kept entirely in memory
///
/// New accounts start unverified. Reset requests are recorded instead of
/// being mailed.
#[derive(Default)]
pub struct InMemoryAuthProvider {
    accounts: Mutex<HashMap<String, Account>>,
    reset_requests: Mutex<Vec<String>>,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the account for `email` as verified
    pub async fn verify_email(&self, email: &str) -> Result<(), AuthError> {
        let mut accounts = self.accounts.lock().await;
        let account = accounts
            .get_mut(&normalize(email))
            .ok_or_else(user_not_found)?;
        account.user.email_verified = true;
        Ok(())
    }

    /// Emails a reset was requested for, oldest first
    pub async fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.lock().await.clone()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        validate_email(email)?;

        let accounts = self.accounts.lock().await;
        match accounts.get(&normalize(email)) {
            Some(account) if account.password == password => {
                tracing::debug!("Signed in {}", account.user.uid);
                Ok(account.user.clone())
            }
            Some(_) => Err(AuthError::new(
                "auth/wrong-password",
                "Incorrect password. Please try again.",
            )),
            None => Err(user_not_found()),
        }
    }

    async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthUser, AuthError> {
        validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::new(
                "auth/weak-password",
                format!("Password should be at least {} characters.", MIN_PASSWORD_LEN),
            ));
        }

        let key = normalize(email);
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&key) {
            return Err(AuthError::new(
                "auth/email-already-in-use",
                "An account with this email already exists.",
            ));
        }

        let display_name = display_name.trim();
        let user = AuthUser {
            uid: generate_id(),
            email: key.clone(),
            display_name: (!display_name.is_empty()).then(|| display_name.to_string()),
            email_verified: false,
        };
        accounts.insert(
            key,
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );

        tracing::info!("Created account {}", user.uid);
        Ok(user)
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        validate_email(email)?;

        let key = normalize(email);
        if !self.accounts.lock().await.contains_key(&key) {
            return Err(user_not_found());
        }

        self.reset_requests.lock().await.push(key);
        Ok(())
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AuthError::new("auth/invalid-email", "Please enter a valid email address."))
    }
}

fn user_not_found() -> AuthError {
    AuthError::new("auth/user-not-found", "No account found with this email.")
}
