//! Database query helper functions to reduce boilerplate error handling.
//!
//! These helpers simplify common patterns like:
//! - Fetching a required record (NotFound if missing)
//! - Checking that a batch of ids all exist
//!
//! # Usage
//!
//! ```ignore
//! let player = require_record(
//!     player_queries::fetch_player(pool, player_id).await,
//!     "Player not found",
//! )?;
//! ```

use std::collections::HashSet;

use crate::error::AppError;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> Result<T, AppError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(AppError::not_found(not_found_message)),
        Err(e) => Err(e.into()),
    }
}

/// Treat an UPDATE/DELETE that touched no row as NotFound.
pub fn require_affected(rows_affected: u64, not_found_message: &str) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::not_found(not_found_message));
    }
    Ok(())
}

/// First requested id that is absent from `found`, if any
pub fn first_missing(requested: &[i32], found: &[i32]) -> Option<i32> {
    let found: HashSet<i32> = found.iter().copied().collect();
    requested.iter().copied().find(|id| !found.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_reports_the_first_absent_id() {
        assert_eq!(first_missing(&[1, 2, 3], &[3, 1]), Some(2));
        assert_eq!(first_missing(&[1, 2], &[1, 2]), None);
        assert_eq!(first_missing(&[], &[1]), None);
    }

    #[test]
    fn require_record_maps_none_to_not_found() {
        let result: Result<i32, AppError> = require_record(Ok(None), "Match not found");
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Match not found"));
    }
}
