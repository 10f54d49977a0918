use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future borrowed from the transaction for the duration of one `with_txn` call.
pub type TxnFuture<'c, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'c>>;

/// A transaction shared through request extensions; `with_txn` reuses it
/// instead of opening its own and leaves commit/rollback to the owner.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }
}

/// Run `f` inside one database transaction.
///
/// 1) A `SharedTxn` in request extensions is used as-is.
/// 2) Otherwise a new transaction is opened on the state's connection; `Ok`
///    applies the process `TxnPolicy`, `Err` rolls back and returns the error.
pub async fn with_txn<R, F>(req: Option<&HttpRequest>, state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R>,
{
    // Clone out of extensions before awaiting so no RefCell borrow is held
    let shared_txn: Option<SharedTxn> = req.and_then(|r| r.extensions().get::<SharedTxn>().cloned());

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let txn = require_db(state)?.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            match txn_policy::current() {
                txn_policy::TxnPolicy::CommitOnOk => txn.commit().await?,
                txn_policy::TxnPolicy::RollbackOnOk => txn.rollback().await?,
            }
            Ok(val)
        }
        Err(err) => {
            // Keep the original error even if rollback fails
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback after failed transaction also failed");
            }
            Err(err)
        }
    }
}
