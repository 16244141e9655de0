//! Relationship cleanup around hard deletes
//!
//! A driver or vehicle row may only be removed once no link row references
//! it. The sequential path runs two storage calls and is not atomic: if the
//! second call fails the entity survives without links and can be retried.

use uuid::Uuid;

use crate::domain::{DomainError, EntityLifecycle};

/// How a hard delete reaches the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HardDeleteMode {
    /// Unrelate, then delete, as two separate storage calls
    #[default]
    Sequential,
    /// Both steps inside one storage transaction
    Transactional,
}

impl HardDeleteMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sequential" => Some(HardDeleteMode::Sequential),
            "transactional" => Some(HardDeleteMode::Transactional),
            _ => None,
        }
    }
}

/// Strip every link of `id`, then remove its row.
///
/// The row is never touched when the first step fails.
pub async fn hard_delete<R>(repo: &R, id: Uuid) -> Result<(), DomainError>
where
    R: EntityLifecycle + ?Sized,
{
    let removed = repo
        .unrelate(id)
        .await
        .map_err(|e| DomainError::RelationCleanup(Box::new(e)))?;
    tracing::debug!("Removed {} link(s) of {}", removed, id);

    match repo.hard_delete(id).await {
        Ok(()) => Ok(()),
        Err(DomainError::NotFound) => Err(DomainError::NotFound),
        Err(e) => {
            tracing::warn!(
                "{} has no links left but its row could not be deleted: {}",
                id,
                e
            );
            Err(DomainError::Delete(Box::new(e)))
        }
    }
}

/// Hard delete using the configured strategy.
pub async fn remove<R>(repo: &R, id: Uuid, mode: HardDeleteMode) -> Result<(), DomainError>
where
    R: EntityLifecycle + ?Sized,
{
    match mode {
        HardDeleteMode::Sequential => hard_delete(repo, id).await,
        HardDeleteMode::Transactional => repo.purge(id).await,
    }
}
