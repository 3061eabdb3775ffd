use sea_orm::DatabaseTransaction;

use crate::server::error::AppError;

/// Commits the transaction if `result` is `Ok`, rolls it back otherwise.
///
/// The rollback completes before the error is returned, so no partial writes are
/// visible by the time the error response is sent. A failed rollback is logged and the
/// original error is returned.
///
/// # Arguments
/// - `txn` - Transaction the work in `result` was performed on
/// - `result` - Outcome of the work
///
/// # Returns
/// - `Ok(T)` - Work succeeded and the transaction committed
/// - `Err(AppError::DbErr)` - Work succeeded but the commit failed
/// - `Err(AppError)` - The original error of the failed work
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
