//! Administrator allow-list gate.
//!
//! Administrators are identified by membership of their lowercased username or email in a
//! configured allow-list. The check never touches the database.

use std::collections::HashSet;

use crate::server::{
    config::Config,
    error::{auth::AuthError, Error},
    model::identity::CurrentUser,
};

/// Allow-list of administrator usernames and emails, stored lowercased
#[derive(Clone, Debug, Default)]
pub struct AdminGate {
    usernames: HashSet<String>,
    emails: HashSet<String>,
}

impl AdminGate {
    /// Creates a gate from raw usernames and emails, entries are trimmed and lowercased
    pub fn new<U, E>(usernames: U, emails: E) -> Self
    where
        U: IntoIterator,
        U::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            usernames: normalize(usernames),
            emails: normalize(emails),
        }
    }

    /// Creates the gate from the configured admin identity and the optional allow-lists
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            std::iter::once(&config.admin_username).chain(config.admin_usernames.iter()),
            std::iter::once(&config.admin_email).chain(config.admin_emails.iter()),
        )
    }

    pub fn is_admin(&self, user: &CurrentUser) -> bool {
        self.usernames.contains(&user.username_lower) || self.emails.contains(&user.email_lower)
    }

    /// # Returns
    /// - `Ok(())` - User is on the allow-list
    /// - `Err(Error::AuthError(AuthError::AdminRequired))` - User is not an administrator
    pub fn require_admin(&self, user: &CurrentUser) -> Result<(), Error> {
        if self.is_admin(user) {
            Ok(())
        } else {
            Err(AuthError::AdminRequired(user.id).into())
        }
    }
}

fn normalize<I>(entries: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}
