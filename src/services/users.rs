use crate::models::UserAccount;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with user store operations
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed users file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("user not registered: {0}")]
    NotFound(String),
}

/// Flat-file user store backing users.json
///
/// Holds favorites (campground names) and query history per registered user.
/// Registration itself happens outside the service; unknown usernames are
/// rejected, never auto-created.
pub struct UserStore {
    path: PathBuf,
    users: RwLock<Vec<UserAccount>>,
}

impl UserStore {
    /// Open the users file, creating an empty one if missing
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, UserError> {
        let path = path.as_ref().to_path_buf();
        let users: Vec<UserAccount> = if tokio::fs::try_exists(&path).await? {
            let raw = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&raw)?
        } else {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, "[]").await?;
            Vec::new()
        };

        tracing::info!("User store loaded: {} users from {}", users.len(), path.display());

        Ok(Self {
            path,
            users: RwLock::new(users),
        })
    }

    pub async fn find(&self, username: &str) -> Option<UserAccount> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Record a favorite campground name; adding twice is a no-op
    pub async fn add_favorite(&self, username: &str, camp_name: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        if !user.favorites.iter().any(|name| name == camp_name) {
            user.favorites.push(camp_name.to_string());
            self.persist(&users).await?;
        }
        Ok(())
    }

    pub async fn remove_favorite(&self, username: &str, camp_name: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        user.favorites.retain(|name| name != camp_name);
        self.persist(&users).await?;
        Ok(())
    }

    /// Append a raw query string to the user's history
    pub async fn append_history(&self, username: &str, query: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        user.history.push(query.to_string());
        self.persist(&users).await?;
        Ok(())
    }

    async fn persist(&self, users: &[UserAccount]) -> Result<(), UserError> {
        let json = serde_json::to_string_pretty(users)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    async fn store_with_user(dir: &Path, username: &str) -> UserStore {
        let path = dir.join("users.json");
        let users = vec![UserAccount {
            username: username.to_string(),
            user_type: UserType::Guest,
            favorites: vec![],
            history: vec![],
        }];
        std::fs::write(&path, serde_json::to_string_pretty(&users).unwrap()).unwrap();
        UserStore::open(&path).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("users.json")).await.unwrap();

        assert!(store.find("meera").await.is_none());
    }

    #[tokio::test]
    async fn test_favorites_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_user(dir.path(), "meera").await;

        store.add_favorite("meera", "Misty Pines").await.unwrap();
        store.add_favorite("meera", "Misty Pines").await.unwrap();
        assert_eq!(store.find("meera").await.unwrap().favorites, vec!["Misty Pines"]);

        store.remove_favorite("meera", "Misty Pines").await.unwrap();
        assert!(store.find("meera").await.unwrap().favorites.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_user(dir.path(), "meera").await;

        assert!(matches!(
            store.add_favorite("nobody", "Misty Pines").await.unwrap_err(),
            UserError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_history_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_user(dir.path(), "meera").await;

        store.append_history("meera", "tent in kerala").await.unwrap();
        store.append_history("meera", "cabin with wi-fi").await.unwrap();

        let history = store.find("meera").await.unwrap().history;
        assert_eq!(history, vec!["tent in kerala", "cabin with wi-fi"]);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_user(dir.path(), "meera").await;
        store.add_favorite("meera", "River Bend").await.unwrap();
        drop(store);

        let reopened = UserStore::open(dir.path().join("users.json")).await.unwrap();
        assert_eq!(reopened.find("meera").await.unwrap().favorites, vec!["River Bend"]);
    }
}
