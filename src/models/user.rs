use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,   // ⇔ users.username (UNIQUE)
    pub email: String,      // ⇔ users.email (TEXT, default '')
    pub created_at: String, // ⇔ users.created_at (TEXT, ISO8601)
}
