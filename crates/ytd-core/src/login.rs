//! Stored account credentials.
//!
//! Username and password live in the system keyring as two entries,
//! `<account>_username` and `<account>_password`, under one service name.
//! They are a fallback: credentials given per run always take precedence.

use crate::auth::Credentials;
use crate::error::YtdError;

/// Keyring service name.
pub const SERVICE: &str = "ytd";

/// Account used when none is configured.
pub const DEFAULT_ACCOUNT: &str = "main_user";

/// Persistent credential storage keyed by account name.
pub trait CredentialStore {
    fn load(&self, account: &str) -> Result<Option<Credentials>, YtdError>;
    fn save(&self, account: &str, credentials: &Credentials) -> Result<(), YtdError>;
    /// Removes both entries. Returns whether anything was stored.
    fn delete(&self, account: &str) -> Result<bool, YtdError>;
}

/// [`CredentialStore`] backed by the platform keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(SERVICE)
    }
}

impl KeyringStore {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, account: &str, field: &str) -> Result<keyring::Entry, YtdError> {
        Ok(keyring::Entry::new(
            &self.service,
            &format!("{account}_{field}"),
        )?)
    }

    fn get(&self, account: &str, field: &str) -> Result<Option<String>, YtdError> {
        match self.entry(account, field)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&self, account: &str, field: &str) -> Result<bool, YtdError> {
        match self.entry(account, field)?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl CredentialStore for KeyringStore {
    fn load(&self, account: &str) -> Result<Option<Credentials>, YtdError> {
        let username = self.get(account, "username")?;
        if username.is_none() {
            return Ok(None);
        }
        let password = self.get(account, "password")?;
        Ok(Credentials::from_parts(username, password))
    }

    fn save(&self, account: &str, credentials: &Credentials) -> Result<(), YtdError> {
        self.entry(account, "username")?
            .set_password(&credentials.username)?;
        self.entry(account, "password")?
            .set_password(&credentials.password)?;
        tracing::info!("stored credentials for account {}", account);
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<bool, YtdError> {
        let user = self.remove(account, "username")?;
        let pass = self.remove(account, "password")?;
        Ok(user || pass)
    }
}

/// Credentials for one run: `explicit` (flags/env) when complete, otherwise
/// whatever `store` holds for `account`. Store failures are logged and
/// treated as "nothing stored", so they never block a download.
pub fn resolve_credentials(
    explicit: Option<Credentials>,
    store: &dyn CredentialStore,
    account: &str,
) -> Option<Credentials> {
    if explicit.is_some() {
        return explicit;
    }
    match store.load(account) {
        Ok(found) => {
            if found.is_some() {
                tracing::debug!("using stored credentials for account {}", account);
            }
            found
        }
        Err(e) => {
            tracing::warn!("credential store unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store; `fail` makes every call error.
    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, Credentials>>,
        fail: bool,
    }

    impl CredentialStore for MemoryStore {
        fn load(&self, account: &str) -> Result<Option<Credentials>, YtdError> {
            if self.fail {
                return Err(keyring::Error::NoStorageAccess("locked".into()).into());
            }
            Ok(self.entries.borrow().get(account).cloned())
        }

        fn save(&self, account: &str, credentials: &Credentials) -> Result<(), YtdError> {
            self.entries
                .borrow_mut()
                .insert(account.to_string(), credentials.clone());
            Ok(())
        }

        fn delete(&self, account: &str) -> Result<bool, YtdError> {
            Ok(self.entries.borrow_mut().remove(account).is_some())
        }
    }

    fn creds(user: &str) -> Credentials {
        Credentials {
            username: user.into(),
            password: "pw".into(),
        }
    }

    #[test]
    fn explicit_credentials_win_over_stored() {
        let store = MemoryStore::default();
        store.save(DEFAULT_ACCOUNT, &creds("stored")).unwrap();
        let got = resolve_credentials(Some(creds("flag")), &store, DEFAULT_ACCOUNT);
        assert_eq!(got, Some(creds("flag")));
    }

    #[test]
    fn stored_credentials_fill_in() {
        let store = MemoryStore::default();
        store.save("temp_user", &creds("stored")).unwrap();
        assert_eq!(
            resolve_credentials(None, &store, "temp_user"),
            Some(creds("stored"))
        );
        assert_eq!(resolve_credentials(None, &store, DEFAULT_ACCOUNT), None);
    }

    #[test]
    fn delete_reports_presence() {
        let store = MemoryStore::default();
        store.save(DEFAULT_ACCOUNT, &creds("a")).unwrap();
        assert!(store.delete(DEFAULT_ACCOUNT).unwrap());
        assert!(!store.delete(DEFAULT_ACCOUNT).unwrap());
        assert_eq!(resolve_credentials(None, &store, DEFAULT_ACCOUNT), None);
    }

    #[test]
    fn store_failure_is_not_fatal() {
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        assert_eq!(resolve_credentials(None, &store, DEFAULT_ACCOUNT), None);
    }
}
