//! Error types for seat and lifecycle operations
//!
//! Policy and authorization messages are user-facing and surfaced verbatim.
//! Datastore failures are wrapped and reported as a generic internal error at
//! the boundary.

use tapkit_directory::DirectoryError;
use thiserror::Error;

/// Seat and lifecycle error types.
#[derive(Debug, Error)]
pub enum SeatError {
    /// Actor lacks the required role
    #[error("You do not have permission to manage staff")]
    Unauthorized,

    /// Target user does not exist
    #[error("User not found")]
    UserNotFound,

    /// Organization does not exist
    #[error("Organization not found")]
    OrganizationNotFound,

    /// Hard delete requested after the 30-day grace window
    #[error("Grace period expired: this staff member can no longer be deleted")]
    GracePeriodExpired,

    /// Target is the only admin of their organization
    #[error("Assign another admin before deleting this one")]
    SoleAdmin,

    /// Actor tried to delete their own account via the admin surface
    #[error("Use account settings to delete your own account")]
    SelfDeletion,

    /// Actor tried to change their own role via the admin surface
    #[error("You cannot change your own role")]
    SelfRoleChange,

    /// Finalize requested for a user who was never separated
    #[error("User is not a separated staff member")]
    NothingToFinalize,

    /// Underlying directory store failed
    #[error("Internal error")]
    Directory(#[from] DirectoryError),
}

/// Result type for seat and lifecycle operations.
pub type SeatResult<T> = Result<T, SeatError>;

impl SeatError {
    /// Check if this error should be logged at error level.
    ///
    /// Policy rejections are expected outcomes and should not be logged
    /// as errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, SeatError::Directory(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            SeatError::Unauthorized => 403,
            SeatError::UserNotFound | SeatError::OrganizationNotFound => 404,

            SeatError::GracePeriodExpired
            | SeatError::SoleAdmin
            | SeatError::SelfDeletion
            | SeatError::SelfRoleChange
            | SeatError::NothingToFinalize => 409,

            SeatError::Directory(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            SeatError::Unauthorized => "UNAUTHORIZED",
            SeatError::UserNotFound => "USER_NOT_FOUND",
            SeatError::OrganizationNotFound => "ORGANIZATION_NOT_FOUND",
            SeatError::GracePeriodExpired => "GRACE_PERIOD_EXPIRED",
            SeatError::SoleAdmin => "SOLE_ADMIN",
            SeatError::SelfDeletion => "SELF_DELETION",
            SeatError::SelfRoleChange => "SELF_ROLE_CHANGE",
            SeatError::NothingToFinalize => "NOTHING_TO_FINALIZE",
            SeatError::Directory(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_errors_are_not_server_errors() {
        assert!(!SeatError::GracePeriodExpired.is_server_error());
        assert!(!SeatError::SoleAdmin.is_server_error());
        assert!(SeatError::Directory(DirectoryError::Store("down".into())).is_server_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SeatError::Unauthorized.status_code(), 403);
        assert_eq!(SeatError::UserNotFound.status_code(), 404);
        assert_eq!(SeatError::GracePeriodExpired.status_code(), 409);
        assert_eq!(
            SeatError::Directory(DirectoryError::Store("down".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = SeatError::Directory(DirectoryError::Store("password in dsn".into()));
        assert_eq!(err.to_string(), "Internal error");
    }
}
