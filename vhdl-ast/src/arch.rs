use std::fmt;

use tracing::{debug, trace};

use crate::decl::Decl;
use crate::element::{comment_accessors, emit_comment, Element};
use crate::error::{Error, Result};
use crate::output::{display_via_emit, Output};
use crate::statement::{ArchRef, ConcStmt};

pub const DEFAULT_ARCH_NAME: &str = "Behavioural";

/// An architecture which implements an entity
#[derive(Clone, Debug, PartialEq)]
pub struct Architecture {
    name: String,
    entity: String,
    decls: Vec<Decl>,
    stmts: Vec<ConcStmt>,
    /// Name of the entity which owns this architecture, set when the entity
    /// is constructed
    parent: Option<String>,
    comment: Option<String>,
}

impl Architecture {
    pub fn new(entity: impl Into<String>) -> Self {
        Self::with_name(entity, DEFAULT_ARCH_NAME)
    }

    pub fn with_name(entity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity: entity.into(),
            decls: vec![],
            stmts: vec![],
            parent: None,
            comment: None,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The entity this architecture was declared to implement
    pub fn get_entity(&self) -> &str {
        &self.entity
    }

    /// The entity which owns this architecture, once it has been handed to one
    pub fn get_parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn arch_ref(&self) -> ArchRef {
        ArchRef {
            name: self.name.clone(),
            entity: self.entity.clone(),
        }
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    pub fn stmts(&self) -> &[ConcStmt] {
        &self.stmts
    }

    /// Adds a declaration to the architecture body. Components may only be
    /// declared once, a second declaration of the same component is rejected.
    pub fn add_decl(&mut self, decl: impl Into<Decl>) -> Result<()> {
        let decl = decl.into();
        if let Decl::Component(component) = &decl {
            if self.have_declared_component(component.get_name()) {
                debug!(
                    "Rejecting duplicate component {} in {}",
                    component.get_name(),
                    self.arch_ref()
                );
                return Err(Error::DuplicateComponent {
                    name: component.get_name().to_string(),
                    arch: self.arch_ref(),
                });
            }
        }
        trace!("Declaring {} in {}", decl.get_name(), self.arch_ref());
        self.decls.push(decl);
        Ok(())
    }

    /// Adds a concurrent statement and makes this architecture its parent.
    /// Statements which already belong to an architecture are rejected.
    #[tracing::instrument(level = "trace", skip_all, fields(arch = %self.name, entity = %self.entity))]
    pub fn add_stmt(&mut self, stmt: impl Into<ConcStmt>) -> Result<()> {
        let mut stmt = stmt.into();
        stmt.attach(&self.arch_ref())?;
        self.stmts.push(stmt);
        Ok(())
    }

    pub fn have_declared_component(&self, name: &str) -> bool {
        self.decls.iter().any(|d| d.is_component(name))
    }

    pub(crate) fn attach(&mut self, entity: &str) -> Result<()> {
        if let Some(existing) = &self.parent {
            debug!("Refusing to re-attach {} owned by {existing}", self.arch_ref());
            return Err(Error::AlreadyAttached {
                what: format!("architecture {}", self.arch_ref()),
                parent: format!("entity {existing}"),
            });
        }
        if self.entity != entity {
            return Err(Error::ArchitectureMismatch {
                arch: self.name.clone(),
                expected: self.entity.clone(),
                found: entity.to_string(),
            });
        }
        self.parent = Some(entity.to_string());
        Ok(())
    }
}

impl Element for Architecture {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        emit_comment(out, level, self.comment(), false)?;
        out.line(
            level,
            format_args!("architecture {} of {} is", self.name, self.entity),
        )?;
        for decl in &self.decls {
            match decl {
                Decl::Var(var) => var.emit_shared(out, level + 1)?,
                _ => decl.emit(out, level + 1)?,
            }
        }
        out.line(level, "begin")?;
        for stmt in &self.stmts {
            stmt.emit(out, level + 1)?;
        }
        out.line(level, "end architecture;")
    }
}

display_via_emit!(Architecture);
