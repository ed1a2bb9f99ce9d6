//! Persisted account registry.
//!
//! Accounts are user-curated `(provider type, label)` pairs; the registry is
//! their single source of truth. State is a JSON document in the app data
//! directory, rewritten atomically (write `.tmp`, then rename) after every
//! mutation. The registry never touches views — the view pool reacts to
//! registry changes, not the other way around.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use courier_common::{AccountId, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// References a `catalog::ProviderType` by id. May dangle if the catalog
    /// shrinks between releases; consumers must tolerate that.
    pub provider_type_id: String,
    /// User-given display label.
    pub label: String,
    pub created_at: DateTime<Utc>,
}

/// The set of registered accounts, persisted as JSON.
pub struct AccountRegistry {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Load the registry from `path`. A missing file yields an empty
    /// registry; a corrupt file is an error (never silently dropped).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();

        let accounts = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                RegistryError::Store(format!("failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no account store yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                return Err(RegistryError::Store(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        info!(count = accounts.len(), "account registry loaded");
        Ok(Self { path, accounts })
    }

    /// All registered accounts, in creation order.
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by id.
    pub fn get(&self, account_id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == account_id)
    }

    /// Register a new account. `(provider_type_id, label)` pairs must be
    /// distinct; duplicates are rejected.
    pub fn create(
        &mut self,
        provider_type_id: &str,
        label: &str,
    ) -> Result<Account, RegistryError> {
        let duplicate = self
            .accounts
            .iter()
            .any(|a| a.provider_type_id == provider_type_id && a.label == label);
        if duplicate {
            return Err(RegistryError::Duplicate {
                provider_type_id: provider_type_id.to_string(),
                label: label.to_string(),
            });
        }

        let account = Account {
            id: AccountId::new(),
            provider_type_id: provider_type_id.to_string(),
            label: label.to_string(),
            created_at: Utc::now(),
        };
        self.accounts.push(account.clone());
        self.persist()?;

        info!(
            account_id = %account.id,
            provider = provider_type_id,
            "account registered"
        );
        Ok(account)
    }

    /// Delete an account record. Deleting an unknown id is a no-op — the
    /// record is already gone.
    pub fn delete(&mut self, account_id: &AccountId) -> Result<(), RegistryError> {
        let before = self.accounts.len();
        self.accounts.retain(|a| &a.id != account_id);

        if self.accounts.len() == before {
            debug!(account_id = %account_id, "delete: account not in registry");
            return Ok(());
        }

        self.persist()?;
        info!(account_id = %account_id, "account deleted");
        Ok(())
    }

    /// Rewrite the store atomically.
    fn persist(&self) -> Result<(), RegistryError> {
        let json = serde_json::to_string_pretty(&self.accounts)
            .map_err(|e| RegistryError::Store(format!("failed to serialize accounts: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RegistryError::Store(format!(
                    "failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| {
            RegistryError::Store(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Rename failed — try direct write as fallback (Windows compat)
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &json).map_err(|e2| {
                RegistryError::Store(format!("failed to write {}: {e2}", self.path.display()))
            })?;
        }

        debug!(path = %self.path.display(), count = self.accounts.len(), "account store saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_in(dir: &tempfile::TempDir) -> AccountRegistry {
        AccountRegistry::load(dir.path().join("accounts.json")).unwrap()
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_in(&dir);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn create_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);

        let account = registry.create("WhatsApp", "Personal").unwrap();
        assert_eq!(account.provider_type_id, "WhatsApp");
        assert_eq!(account.label, "Personal");

        let fetched = registry.get(&account.id).unwrap();
        assert_eq!(fetched.label, "Personal");
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn create_rejects_duplicate_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);

        registry.create("WhatsApp", "Work").unwrap();
        let result = registry.create("WhatsApp", "Work");
        assert!(matches!(result, Err(RegistryError::Duplicate { .. })));
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn same_label_different_provider_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);

        registry.create("WhatsApp", "Work").unwrap();
        registry.create("FacebookMessenger", "Work").unwrap();
        assert_eq!(registry.list().len(), 2);
    }

    #[test]
    fn delete_removes_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);

        let account = registry.create("GoogleMessages", "SMS").unwrap();
        registry.delete(&account.id).unwrap();
        assert!(registry.get(&account.id).is_none());
        assert!(registry.list().is_empty());

        // Reload sees the deletion.
        let reloaded = registry_in(&dir);
        assert!(reloaded.list().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);

        registry.create("WhatsApp", "Personal").unwrap();
        registry.delete(&AccountId::from("no-such-account")).unwrap();
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn persistence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut registry = registry_in(&dir);
            registry.create("WhatsApp", "Personal").unwrap();
            registry.create("FacebookMessenger", "Friends").unwrap().id
        };

        let reloaded = registry_in(&dir);
        assert_eq!(reloaded.list().len(), 2);
        let account = reloaded.get(&id).unwrap();
        assert_eq!(account.provider_type_id, "FacebookMessenger");
        assert_eq!(account.label, "Friends");
    }

    #[test]
    fn corrupt_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = AccountRegistry::load(path);
        assert!(matches!(result, Err(RegistryError::Store(_))));
    }

    #[test]
    fn persist_cleans_up_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);
        registry.create("WhatsApp", "Personal").unwrap();

        let tmp_path = dir.path().join("accounts.json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn accounts_serialize_with_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_in(&dir);
        registry.create("WhatsApp", "Personal").unwrap();

        let content = std::fs::read_to_string(registry.path()).unwrap();
        assert!(content.contains("\"provider_type_id\": \"WhatsApp\""));
        assert!(content.contains("\"created_at\""));
    }
}
