use sea_orm::DbErr;

/// True when the database rejected a write because of a unique index.
///
/// Postgres reports SQLSTATE 23505; the mock backend only carries the message,
/// so both forms are matched.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}
