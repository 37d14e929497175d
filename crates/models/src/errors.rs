use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A unique index rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Conflict(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}

/// Reject blank values and values longer than `max` characters.
pub fn require_text(field: &str, value: &str, max: Option<usize>) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_rejected() {
        assert!(matches!(require_text("name", "   ", None), Err(ModelError::Validation(_))));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 4 chars, 12 bytes
        assert!(require_text("name", "问答系统", Some(4)).is_ok());
        assert!(require_text("name", "问答系统!", Some(4)).is_err());
    }
}
