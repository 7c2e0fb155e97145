//! Per-request unit of work over a database transaction.

use sqlx::postgres::PgConnection;
use sqlx::{PgPool, Postgres, Transaction};

use accounthub_core::error::{AppError, ErrorKind};

/// A scoped transactional handle over persistence.
///
/// One unit of work is acquired per request and released unconditionally
/// at request end: callers `commit()` on the success path, and a unit of
/// work dropped without commit rolls its transaction back. Repository
/// calls receive the inner connection via [`UnitOfWork::conn`], so every
/// operation in a request shares the same transaction.
#[derive(Debug)]
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Begin a new unit of work on the given pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        Ok(Self { tx })
    }

    /// The connection backing this unit of work.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit the transaction.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Roll the transaction back explicitly.
    ///
    /// Dropping the unit of work has the same effect; this exists for call
    /// sites that want the rollback error surfaced.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
        })
    }
}
