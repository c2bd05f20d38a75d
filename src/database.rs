use crate::config::Config;
use crate::model::account::Account;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::fs;
use std::path::Path;

const ACCOUNT_COLUMNS: &str = "id, username, password_hash, balance, is_company";

pub async fn init_db(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let path = Path::new(&config.database_path);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    if !path.exists() {
        fs::File::create(path)?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&format!("sqlite:{}", config.database_path))
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

pub async fn get_account_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(&format!(
        "SELECT {} FROM users WHERE id = ?",
        ACCOUNT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_account_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(&format!(
        "SELECT {} FROM users WHERE username = ?",
        ACCOUNT_COLUMNS
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn create_account(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(&format!(
        "INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING {}",
        ACCOUNT_COLUMNS
    ))
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed,
    InsufficientFunds,
    NoSuchRecipient,
    SelfTransfer,
    NoSuchSender,
}

/// Moves `amount` from the sender to the recipient inside a single
/// transaction: either both balance changes apply or neither does.
/// Returning early drops the transaction, which rolls it back.
pub async fn transfer(
    pool: &SqlitePool,
    sender_id: i64,
    recipient_username: &str,
    amount: i64,
) -> Result<TransferOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let sender = sqlx::query_as::<_, Account>(&format!(
        "SELECT {} FROM users WHERE id = ?",
        ACCOUNT_COLUMNS
    ))
    .bind(sender_id)
    .fetch_optional(&mut *tx)
    .await?;
    let sender = match sender {
        Some(sender) => sender,
        None => return Ok(TransferOutcome::NoSuchSender),
    };

    let recipient = sqlx::query_as::<_, Account>(&format!(
        "SELECT {} FROM users WHERE username = ?",
        ACCOUNT_COLUMNS
    ))
    .bind(recipient_username)
    .fetch_optional(&mut *tx)
    .await?;
    let recipient = match recipient {
        Some(recipient) => recipient,
        None => return Ok(TransferOutcome::NoSuchRecipient),
    };

    if recipient.id == sender.id {
        return Ok(TransferOutcome::SelfTransfer);
    }
    if sender.balance < amount {
        return Ok(TransferOutcome::InsufficientFunds);
    }

    sqlx::query("UPDATE users SET balance = balance - ? WHERE id = ?")
        .bind(amount)
        .bind(sender.id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE users SET balance = balance + ? WHERE id = ?")
        .bind(amount)
        .bind(recipient.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(TransferOutcome::Completed)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

#[cfg(test)]
pub(crate) async fn seed_account(pool: &SqlitePool, username: &str, balance: i64) -> Account {
    let account = create_account(pool, username, "$2b$10$test-hash").await.unwrap();
    sqlx::query("UPDATE users SET balance = ? WHERE id = ?")
        .bind(balance)
        .bind(account.id)
        .execute(pool)
        .await
        .unwrap();
    get_account_by_id(pool, account.id).await.unwrap().unwrap()
}
