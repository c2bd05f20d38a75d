use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub balance: i64,
    pub is_company: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Option<Self> {
        Some(LoginForm {
            username: pairs.get("username")?.clone(),
            password: pairs.get("password")?.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

impl TransferForm {
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Option<Self> {
        Some(TransferForm {
            recipient: pairs.get("recipient")?.clone(),
            amount: pairs.get("amount")?.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub admin_password: String,
}

impl SignupForm {
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Option<Self> {
        Some(SignupForm {
            username: pairs.get("signupUsername")?.clone(),
            password: pairs.get("signupPassword")?.clone(),
            admin_password: pairs.get("adminPassword")?.clone(),
        })
    }
}
