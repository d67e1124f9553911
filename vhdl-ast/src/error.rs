use thiserror::Error;

use crate::statement::ArchRef;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Duplicate variable {name} in {process}")]
    DuplicateVariable { name: String, process: String },
    #[error("Duplicate component {name} in architecture {arch}")]
    DuplicateComponent { name: String, arch: ArchRef },
    /// A node which already has a parent was attached to another one.
    #[error("{what} is already attached to {parent}")]
    AlreadyAttached { what: String, parent: String },
    #[error("Architecture {arch} implements {expected} and can not be attached to entity {found}")]
    ArchitectureMismatch {
        arch: String,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
