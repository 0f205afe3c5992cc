//! Shared Diesel and pool error mapping for the repository adapters.
//!
//! Every driven-port error in this crate distinguishes "could not reach the
//! database" from "the statement failed". [`StorageFailure`] captures that
//! split so one pair of mapping functions serves all adapters.

use tracing::debug;

use crate::domain::ports::{
    AuditLogError, CustomerFeatureRepositoryError, LayoutPreferencesRepositoryError,
    TicketRepositoryError,
};

use super::pool::PoolError;

/// Port error that can express connection and query failures.
pub(crate) trait StorageFailure {
    /// The database could not be reached.
    fn connection_failure(message: String) -> Self;
    /// A statement failed.
    fn query_failure(message: String) -> Self;
}

macro_rules! storage_failure {
    ($error:ty, $connection:ident, $query:ident) => {
        impl StorageFailure for $error {
            fn connection_failure(message: String) -> Self {
                Self::$connection(message)
            }

            fn query_failure(message: String) -> Self {
                Self::$query(message)
            }
        }
    };
}

storage_failure!(LayoutPreferencesRepositoryError, connection, query);
storage_failure!(TicketRepositoryError, connection, query);
storage_failure!(CustomerFeatureRepositoryError, connection, query);
storage_failure!(AuditLogError, connection, write);

/// Map a pool failure to the connection variant of `E`.
pub(crate) fn map_pool_error<E: StorageFailure>(error: PoolError) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    E::connection_failure(message)
}

/// Map a Diesel failure to `E`, keeping database details out of the message.
pub(crate) fn map_diesel_error<E: StorageFailure>(error: diesel::result::Error) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => E::query_failure("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query_failure("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection_failure("database connection error".to_owned())
        }
        _ => E::query_failure("database error".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_failures() {
        let err: TicketRepositoryError = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, TicketRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn audit_query_failures_map_to_write_errors() {
        let err: AuditLogError = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(err, AuditLogError::write("record not found"));
    }

    #[rstest]
    fn unknown_diesel_errors_are_generic_query_failures() {
        let err: LayoutPreferencesRepositoryError =
            map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert_eq!(err, LayoutPreferencesRepositoryError::query("database error"));
    }
}
