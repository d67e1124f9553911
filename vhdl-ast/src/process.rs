use std::fmt::{self, Write};

use tracing::{debug, trace};

use crate::decl::Decl;
use crate::element::{comment_accessors, emit_comment, Element};
use crate::error::{Error, Result};
use crate::output::{display_via_emit, Output};
use crate::statement::{ArchRef, SeqStmt};

/// Container for sequential statements. Each process is one concurrent thread of
/// execution in the architecture it is added to.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Process {
    name: Option<String>,
    decls: Vec<Decl>,
    stmts: Vec<SeqStmt>,
    parent: Option<ArchRef>,
    comment: Option<String>,
}

impl Process {
    /// An anonymous process
    pub fn new() -> Self {
        Self::default()
    }

    /// A process with a label. A blank name gives an anonymous process.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: (!name.trim().is_empty()).then_some(name),
            ..Self::default()
        }
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_parent(&self) -> Option<&ArchRef> {
        self.parent.as_ref()
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    pub fn stmts(&self) -> &[SeqStmt] {
        &self.stmts
    }

    pub fn add_stmt(&mut self, stmt: impl Into<SeqStmt>) {
        self.stmts.push(stmt.into());
    }

    /// Adds a local declaration. Variables must have unique names, a second
    /// variable with the same name is rejected and the process is left as is.
    /// Other kinds of declarations are not checked.
    pub fn add_decl(&mut self, decl: impl Into<Decl>) -> Result<()> {
        let decl = decl.into();
        if let Decl::Var(var) = &decl {
            if self.have_declared_var(var.get_name()) {
                debug!("Rejecting duplicate variable {} in {}", var.get_name(), self.describe());
                return Err(Error::DuplicateVariable {
                    name: var.get_name().to_string(),
                    process: self.describe(),
                });
            }
        }
        trace!("Declaring {} in {}", decl.get_name(), self.describe());
        self.decls.push(decl);
        Ok(())
    }

    pub fn have_declared_var(&self, name: &str) -> bool {
        self.decls.iter().any(|d| d.is_var(name))
    }

    pub(crate) fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("process {name}"),
            None => "anonymous process".to_string(),
        }
    }

    pub(crate) fn parent_slot(&mut self) -> &mut Option<ArchRef> {
        &mut self.parent
    }
}

impl Element for Process {
    comment_accessors!();

    // TODO: Sensitivity list
    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        emit_comment(out, level, self.comment(), false)?;

        out.indent(level)?;
        if let Some(name) = &self.name {
            write!(out, "{name}: ")?;
        }
        out.write_str("process is")?;
        out.newline()?;

        for decl in &self.decls {
            decl.emit(out, level + 1)?;
        }
        out.line(level, "begin")?;
        for stmt in &self.stmts {
            stmt.emit(out, level + 1)?;
        }
        out.line(level, "end process;")
    }
}

display_via_emit!(Process);
