//! Statements shared by the driver and vehicle lifecycles.
//!
//! Generic over the connection so the same code runs directly on the pool
//! or inside a transaction.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::models::driver_vehicle;

/// Write the soft-delete marker of one row. Returns the number of rows touched.
pub(crate) async fn set_deleted_at<E, C>(
    conn: &C,
    id_column: E::Column,
    deleted_at_column: E::Column,
    id: Uuid,
    value: Option<String>,
) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(deleted_at_column, Expr::value(value))
        .filter(id_column.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Delete every link row whose `column` equals `id`.
pub(crate) async fn delete_links<C>(
    conn: &C,
    column: driver_vehicle::Column,
    id: Uuid,
) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = driver_vehicle::Entity::delete_many()
        .filter(column.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Delete one entity row by primary key.
pub(crate) async fn delete_row<E, C>(conn: &C, id_column: E::Column, id: Uuid) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::delete_many()
        .filter(id_column.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Map a rows-affected count of zero to `NotFound`.
pub(crate) fn found(rows_affected: u64) -> Result<(), DomainError> {
    if rows_affected == 0 {
        return Err(DomainError::NotFound);
    }
    Ok(())
}

/// Unrelate then delete inside one transaction, rolling back on any failure.
pub(crate) async fn purge<E, C>(
    db: &C,
    link_column: driver_vehicle::Column,
    id_column: E::Column,
    id: Uuid,
) -> Result<(), DomainError>
where
    E: EntityTrait,
    C: sea_orm::TransactionTrait,
{
    let txn = db.begin().await?;

    delete_links(&txn, link_column, id)
        .await
        .map_err(|e| DomainError::RelationCleanup(Box::new(e.into())))?;

    let removed = delete_row::<E, _>(&txn, id_column, id)
        .await
        .map_err(|e| DomainError::Delete(Box::new(e.into())))?;
    // Dropping the transaction here rolls the unrelate back
    found(removed)?;

    txn.commit()
        .await
        .map_err(|e| DomainError::Delete(Box::new(e.into())))
}
