use std::fmt::{self, Write};

use tracing::{debug, trace};

use crate::element::{comment_accessors, emit_comment, emit_hoisted_comments, Element};
use crate::error::{Error, Result};
use crate::expression::{Expr, ExprList};
use crate::output::{display_via_emit, Output};
use crate::process::Process;

/// Identifies an architecture body by its name and the entity it implements,
/// i.e. `Behavioural of adder`. Statements use this to refer back to the
/// architecture they were added to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArchRef {
    pub name: String,
    pub entity: String,
}

impl std::fmt::Display for ArchRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.name, self.entity)
    }
}

/// Any sequential statement in a process
#[derive(Clone, Debug, PartialEq)]
pub enum SeqStmt {
    Wait(WaitStmt),
    ProcCall(ProcCallStmt),
}

impl Element for SeqStmt {
    fn comment(&self) -> Option<&str> {
        match self {
            SeqStmt::Wait(s) => s.comment(),
            SeqStmt::ProcCall(s) => s.comment(),
        }
    }

    fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            SeqStmt::Wait(s) => s.set_comment(comment),
            SeqStmt::ProcCall(s) => s.set_comment(comment),
        }
    }

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        match self {
            SeqStmt::Wait(s) => s.emit(out, level),
            SeqStmt::ProcCall(s) => s.emit(out, level),
        }
    }
}

impl From<WaitStmt> for SeqStmt {
    fn from(value: WaitStmt) -> Self {
        SeqStmt::Wait(value)
    }
}

impl From<ProcCallStmt> for SeqStmt {
    fn from(value: ProcCallStmt) -> Self {
        SeqStmt::ProcCall(value)
    }
}

/// Suspends the process indefinitely. Waiting on an event or for a time is not
/// supported yet.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WaitStmt {
    comment: Option<String>,
}

impl WaitStmt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for WaitStmt {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        out.indent(level)?;
        out.write_str("wait;")?;
        emit_comment(out, level, self.comment(), true)?;
        out.newline()
    }
}

/// A procedure call. Unlike a function call this is a statement rather than an
/// expression.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcCallStmt {
    name: String,
    exprs: ExprList,
    comment: Option<String>,
}

impl ProcCallStmt {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exprs: ExprList::new(),
            comment: None,
        }
    }

    pub fn add_expr(&mut self, expr: impl Into<Expr>) {
        self.exprs.add_expr(expr)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &ExprList {
        &self.exprs
    }
}

impl Element for ProcCallStmt {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        let mut hoisted = vec![];
        self.exprs.collect_comments(&mut hoisted);
        emit_hoisted_comments(out, level, &hoisted)?;

        out.indent(level)?;
        out.write_str(&self.name)?;
        self.exprs.emit(out, level)?;
        out.write_char(';')?;
        emit_comment(out, level, self.comment(), true)?;
        out.newline()
    }
}

/// A concurrent statement, valid in architecture bodies but not in processes
#[derive(Clone, Debug, PartialEq)]
pub enum ConcStmt {
    CompInst(CompInst),
    Process(Process),
}

impl ConcStmt {
    /// The architecture this statement was added to
    pub fn get_parent(&self) -> Option<&ArchRef> {
        match self {
            ConcStmt::CompInst(s) => s.get_parent(),
            ConcStmt::Process(s) => s.get_parent(),
        }
    }

    fn describe(&self) -> String {
        match self {
            ConcStmt::CompInst(s) => format!("instance {}", s.inst_name),
            ConcStmt::Process(s) => s.describe(),
        }
    }

    /// Sets the parent. A statement can only be attached once, the parent
    /// is never reassigned.
    pub(crate) fn attach(&mut self, parent: &ArchRef) -> Result<()> {
        if let Some(existing) = self.get_parent() {
            debug!("Refusing to re-attach statement attached to {existing}");
            return Err(Error::AlreadyAttached {
                what: self.describe(),
                parent: existing.to_string(),
            });
        }
        trace!("Attaching {} to {parent}", self.describe());
        let slot = match self {
            ConcStmt::CompInst(s) => &mut s.parent,
            ConcStmt::Process(s) => s.parent_slot(),
        };
        *slot = Some(parent.clone());
        Ok(())
    }
}

impl Element for ConcStmt {
    fn comment(&self) -> Option<&str> {
        match self {
            ConcStmt::CompInst(s) => s.comment(),
            ConcStmt::Process(s) => s.comment(),
        }
    }

    fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            ConcStmt::CompInst(s) => s.set_comment(comment),
            ConcStmt::Process(s) => s.set_comment(comment),
        }
    }

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        match self {
            ConcStmt::CompInst(s) => s.emit(out, level),
            ConcStmt::Process(s) => s.emit(out, level),
        }
    }
}

impl From<CompInst> for ConcStmt {
    fn from(value: CompInst) -> Self {
        ConcStmt::CompInst(value)
    }
}

impl From<Process> for ConcStmt {
    fn from(value: Process) -> Self {
        ConcStmt::Process(value)
    }
}

/// Instantiation of a component. Port maps are not emitted, so this only names
/// the instance and the component it instantiates.
#[derive(Clone, Debug, PartialEq)]
pub struct CompInst {
    inst_name: String,
    comp_name: String,
    parent: Option<ArchRef>,
    comment: Option<String>,
}

impl CompInst {
    pub fn new(inst_name: impl Into<String>, comp_name: impl Into<String>) -> Self {
        Self {
            inst_name: inst_name.into(),
            comp_name: comp_name.into(),
            parent: None,
            comment: None,
        }
    }

    pub fn inst_name(&self) -> &str {
        &self.inst_name
    }

    pub fn comp_name(&self) -> &str {
        &self.comp_name
    }

    pub fn get_parent(&self) -> Option<&ArchRef> {
        self.parent.as_ref()
    }
}

impl Element for CompInst {
    comment_accessors!();

    // TODO: Port mappings
    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        emit_comment(out, level, self.comment(), false)?;
        out.line(level, format_args!("{}: {};", self.inst_name, self.comp_name))
    }
}

display_via_emit!(SeqStmt, WaitStmt, ProcCallStmt, ConcStmt, CompInst);
