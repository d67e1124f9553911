//! Syntax tree for the VHDL backend along with the code that turns it into text.
//!
//! Nodes are built bottom-up by the elaborator: expressions and types first, then
//! declarations and statements, then processes, the architecture and finally the
//! entity which owns everything else. Emission starts from the entity and walks
//! down the tree.
pub mod arch;
pub mod decl;
pub mod element;
pub mod entity;
pub mod error;
pub mod expression;
#[cfg(test)]
mod macros;
pub mod options;
pub mod output;
pub mod process;
pub mod statement;
pub mod types;

pub use arch::Architecture;
pub use decl::{ComponentDecl, Decl, VarDecl};
pub use element::Element;
pub use entity::Entity;
pub use error::{Error, Result};
pub use expression::{ConstString, Expr, ExprList, VarRef};
pub use options::EmitOptions;
pub use output::Output;
pub use process::Process;
pub use statement::{ArchRef, CompInst, ConcStmt, ProcCallStmt, SeqStmt, WaitStmt};
pub use types::{ScalarType, Type};

/// A list of entities, typically one per elaborated module scope. The driver decides
/// how these map to output files.
pub type EntityList = Vec<Entity>;
