//! Account service - credential checks and account administration
//!
//! Front for the authentication collaborator's store. Accounts are cached
//! in memory from open; appointments are not (see the infra layer).

use std::path::PathBuf;

use washplan_domain::repository::UserAccountRepository;
use washplan_infra::persistence::FileUserRepository;
use washplan_types::{Result, UserAccount};

/// Staff account boundary.
pub struct AccountService {
    users: FileUserRepository,
}

impl AccountService {
    /// Open the service over the given data directory.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            users: FileUserRepository::open(data_dir)?,
        })
    }

    /// Wrap an already-opened repository.
    pub fn new(users: FileUserRepository) -> Self {
        Self { users }
    }

    /// Check a credential pair. `None` means the pair does not match any
    /// account; which part was wrong is not disclosed.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<UserAccount>> {
        self.users.verify(username, password)
    }

    /// All accounts.
    pub fn list_accounts(&self) -> Result<Vec<UserAccount>> {
        self.users.find_all()
    }

    /// Register a new account.
    pub fn register_account(&mut self, username: &str, password: &str) -> Result<UserAccount> {
        self.users.register(username, password)
    }

    /// Overwrite an account's username and credential.
    pub fn update_account(&mut self, id: u64, username: &str, password: &str) -> Result<UserAccount> {
        self.users.update(id, username, password)
    }

    /// Delete an account. Returns false when no such account exists.
    pub fn delete_account(&mut self, id: u64) -> Result<bool> {
        self.users.delete(id)
    }
}
