//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use passage_core::RepoError;
use passage_core::domain::User;
use passage_core::ports::UserRepository;

/// User store keyed by email, guarded by an async `RwLock`.
///
/// Uniqueness of email is enforced under the write lock, so two concurrent
/// `save` calls for the same address cannot both succeed.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mask an email for logging: `jane@example.com` -> `j***@example.com`.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(RepoError::Constraint("User already exists".to_string()));
        }

        tracing::debug!(user_email = %mask_email(&user.email), user_id = %user.id, "Saving user");
        users.insert(user.email.clone(), user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use passage_core::domain::NewUser;

    use super::*;

    fn user(email: &str) -> User {
        User::new(
            NewUser {
                email: email.to_string(),
                username: "jane".to_string(),
                phone: "+123456789".to_string(),
                password: String::new(),
            },
            "hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(user("jane@example.com")).await.unwrap();

        let found = repo.find_by_email("jane@example.com").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(saved.id));
        assert!(repo.find_by_email("john@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("jane@example.com")).await.unwrap();

        let result = repo.save(user("jane@example.com")).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
        assert_eq!(mask_email("j@example.com"), "***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
