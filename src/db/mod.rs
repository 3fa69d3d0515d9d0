//! Database layer.
//!
//! [`UserStore`] is the single handle services persist through. It is built
//! once at startup from [`Config`] and passed explicitly to each service.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::models::{User, UserId, UserSummary};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
}

/// Persistence handle for user documents.
///
/// Saves rewrite the whole document. Concurrent read-modify-write cycles on
/// the same user are not serialized, so the last writer wins.
#[derive(Clone)]
pub enum UserStore {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl UserStore {
    /// Connect to the backend selected by `config`.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.storage_backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory user store");
                Ok(Self::in_memory())
            }
            StorageBackend::Firestore => {
                let project_id = config.gcp_project_id.as_deref().ok_or_else(|| {
                    AppError::Database("GCP_PROJECT_ID is required for Firestore".to_string())
                })?;
                Ok(Self::Firestore(FirestoreDb::new(project_id).await?))
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::Memory(MemoryDb::new())
    }

    /// Whether `raw` is a syntactically valid user id.
    pub fn is_valid_id(raw: &str) -> bool {
        UserId::is_valid(raw)
    }

    /// Check a caller-supplied id, failing with [`AppError::InvalidId`].
    pub fn check_id(raw: &str) -> Result<UserId, AppError> {
        if !Self::is_valid_id(raw) {
            return Err(AppError::InvalidId);
        }
        UserId::parse(raw).ok_or(AppError::InvalidId)
    }

    /// Persist a new user. Fails if the id is already taken.
    pub async fn insert(&self, user: &User) -> Result<(), AppError> {
        match self {
            Self::Firestore(db) => db.insert_user(user).await,
            Self::Memory(db) => db.insert_user(user),
        }
    }

    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        match self {
            Self::Firestore(db) => db.get_user(id).await,
            Self::Memory(db) => Ok(db.get_user(id)),
        }
    }

    /// All users projected to `{username, _id}`, ordered by id.
    pub async fn find_all(&self) -> Result<Vec<UserSummary>, AppError> {
        let mut users = match self {
            Self::Firestore(db) => db.list_users().await?,
            Self::Memory(db) => db.list_users(),
        };
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    /// Create or fully overwrite a user document.
    pub async fn save(&self, user: &User) -> Result<(), AppError> {
        match self {
            Self::Firestore(db) => db.upsert_user(user).await,
            Self::Memory(db) => {
                db.upsert_user(user);
                Ok(())
            }
        }
    }
}
