//! File-based user account repository
//!
//! Accounts load once when the repository is opened and live in memory
//! from then on; mutations update the cache and write the whole collection
//! back. This is deliberately the opposite caching policy from the
//! appointment repository, which re-reads the file on every call —
//! matching the deployed system, where accounts are read at process start.

use std::path::PathBuf;

use washplan_domain::repository::UserAccountRepository;
use washplan_store::JsonCollection;
use washplan_types::{Error, UserAccount};

/// File-based user account repository (JSON)
pub struct FileUserRepository {
    collection: JsonCollection<UserAccount>,
    users: Vec<UserAccount>,
}

impl FileUserRepository {
    /// Load the account collection from `users.json` under the store
    /// directory. A missing file means no accounts yet.
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        let collection = JsonCollection::new(store_dir.join("users.json"));
        let users = collection.load_all()?;
        Ok(Self { collection, users })
    }

    fn next_id(&self) -> u64 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    fn persist(&self) -> Result<(), Error> {
        self.collection.save_all(&self.users)
    }
}

impl UserAccountRepository for FileUserRepository {
    fn verify(&self, username: &str, password: &str) -> Result<Option<UserAccount>, Error> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<UserAccount>, Error> {
        Ok(self.users.clone())
    }

    fn register(&mut self, username: &str, password: &str) -> Result<UserAccount, Error> {
        if username.trim().is_empty() {
            return Err(Error::InvalidInput("username must not be empty".into()));
        }
        if self.users.iter().any(|u| u.username == username) {
            return Err(Error::InvalidInput(format!(
                "username already taken: {username}"
            )));
        }

        let user = UserAccount {
            id: self.next_id(),
            username: username.to_string(),
            password: password.to_string(),
            extra: Default::default(),
        };
        self.users.push(user.clone());
        self.persist()?;
        Ok(user)
    }

    fn update(&mut self, id: u64, username: &str, password: &str) -> Result<UserAccount, Error> {
        if username.trim().is_empty() {
            return Err(Error::InvalidInput("username must not be empty".into()));
        }
        if self.users.iter().any(|u| u.username == username && u.id != id) {
            return Err(Error::InvalidInput(format!(
                "username already taken: {username}"
            )));
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(Error::NotFound(id))?;
        user.username = username.to_string();
        user.password = password.to_string();
        let updated = user.clone();

        self.persist()?;
        Ok(updated)
    }

    fn delete(&mut self, id: u64) -> Result<bool, Error> {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }
}
