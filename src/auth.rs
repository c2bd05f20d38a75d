use crate::config::Config;
use crate::database;
use crate::model::account::Account;
use sqlx::SqlitePool;

// Matches the work factor accounts were originally created with.
pub const BCRYPT_COST: u32 = 10;

pub async fn verify_login(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let account = database::get_account_by_username(pool, username).await?;
    // A malformed stored hash reads as "no match" rather than an error.
    Ok(account.filter(|account| bcrypt::verify(password, &account.password_hash).unwrap_or(false)))
}

pub fn verify_admin_passphrase(config: &Config, candidate: &str) -> bool {
    bcrypt::verify(candidate, &config.hashed_admin_password).unwrap_or(false)
}

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_account, test_pool};

    #[tokio::test]
    async fn verify_login_accepts_correct_password() {
        let pool = test_pool().await;
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        let created = create_account(&pool, "alice", &hash).await.unwrap();

        let account = verify_login(&pool, "alice", "hunter2").await.unwrap();
        assert_eq!(account.map(|a| a.id), Some(created.id));
    }

    #[tokio::test]
    async fn verify_login_rejects_wrong_password_and_unknown_user() {
        let pool = test_pool().await;
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        create_account(&pool, "alice", &hash).await.unwrap();

        assert!(verify_login(&pool, "alice", "wrong").await.unwrap().is_none());
        assert!(verify_login(&pool, "bob", "hunter2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn verify_login_treats_malformed_hash_as_no_match() {
        let pool = test_pool().await;
        create_account(&pool, "broken", "not-a-bcrypt-hash")
            .await
            .unwrap();
        assert!(verify_login(&pool, "broken", "anything")
            .await
            .unwrap()
            .is_none());
    }

    #[test]
    fn admin_passphrase_check() {
        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_path: String::new(),
            hashed_admin_password: bcrypt::hash("letmein", 4).unwrap(),
            session_ttl_minutes: 60,
        };
        assert!(verify_admin_passphrase(&config, "letmein"));
        assert!(!verify_admin_passphrase(&config, "guess"));
    }

    #[test]
    fn hash_password_round_trips() {
        let hash = hash_password("pw").unwrap();
        assert!(bcrypt::verify("pw", &hash).unwrap());
    }
}
