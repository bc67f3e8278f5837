use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_user, list_users};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;

use super::clock::Clock;

const MAX_USERNAME_LEN: usize = 150;

fn validate_username(name: &str) -> AppResult<()> {
    let ok = !name.is_empty()
        && name.chars().count() <= MAX_USERNAME_LEN
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '@' | '+' | '-' | '_'));

    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidUsername(format!(
            "'{}' (use up to {} letters, digits and . @ + - _)",
            name, MAX_USERNAME_LEN
        )))
    }
}

pub struct UserLogic;

impl UserLogic {
    pub fn register(
        pool: &mut DbPool,
        clock: &dyn Clock,
        username: &str,
        email: Option<&str>,
    ) -> AppResult<User> {
        let username = username.trim();
        validate_username(username)?;

        let email = email.map(str::trim).unwrap_or("");
        if !email.is_empty() && !email.contains('@') {
            return Err(AppError::InvalidEmail(email.to_string()));
        }

        let created_at = clock.now().to_rfc3339();
        let id = insert_user(&pool.conn, username, email, &created_at)?;

        audit_quiet(&pool.conn, "register", username, &format!("Registered user #{id}"));

        Ok(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            created_at,
        })
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<User>> {
        list_users(&pool.conn)
    }
}
