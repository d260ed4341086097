//! Repository layer over the collection store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage encoding details out of services and queries.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`,
//!   `InvalidTransition`) in addition to storage errors.
//! - Foreign keys are never checked on write.

use crate::model::task::TaskStatus;
use crate::model::RecordId;
use crate::storage::StorageError;
use crate::store::Collection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entity_repo;
pub mod reference_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    NotFound {
        collection: Collection,
        id: RecordId,
    },
    /// Requested task status change is not a forward step.
    InvalidTransition {
        id: RecordId,
        from: TaskStatus,
        to: TaskStatus,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound { collection, id } => {
                write!(f, "{} record not found: {id}", collection.name())
            }
            Self::InvalidTransition { id, from, to } => write!(
                f,
                "task {id} cannot move from `{}` to `{}`",
                from.as_str(),
                to.as_str()
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidTransition { .. } => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
