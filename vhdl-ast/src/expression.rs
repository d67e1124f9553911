use std::fmt::{self, Write};

use crate::element::{comment_accessors, Element};
use crate::output::{display_via_emit, Output};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    VarRef(VarRef),
    ConstString(ConstString),
    List(ExprList),
}

impl Expr {
    pub fn var_ref(name: impl Into<String>) -> Self {
        Expr::VarRef(VarRef::new(name))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::ConstString(ConstString::new(value))
    }

    /// Expressions are emitted in the middle of a line where a comment can not be
    /// placed, so their comments are gathered by the enclosing statement instead.
    pub(crate) fn collect_comments<'a>(&'a self, into: &mut Vec<&'a str>) {
        match self {
            Expr::VarRef(e) => into.extend(e.comment()),
            Expr::ConstString(e) => into.extend(e.comment()),
            Expr::List(e) => e.collect_comments(into),
        }
    }
}

impl Element for Expr {
    fn comment(&self) -> Option<&str> {
        match self {
            Expr::VarRef(e) => e.comment(),
            Expr::ConstString(e) => e.comment(),
            Expr::List(e) => e.comment(),
        }
    }

    fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            Expr::VarRef(e) => e.set_comment(comment),
            Expr::ConstString(e) => e.set_comment(comment),
            Expr::List(e) => e.set_comment(comment),
        }
    }

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        match self {
            Expr::VarRef(e) => e.emit(out, level),
            Expr::ConstString(e) => e.emit(out, level),
            Expr::List(e) => e.emit(out, level),
        }
    }
}

impl From<VarRef> for Expr {
    fn from(value: VarRef) -> Self {
        Expr::VarRef(value)
    }
}

impl From<ConstString> for Expr {
    fn from(value: ConstString) -> Self {
        Expr::ConstString(value)
    }
}

impl From<ExprList> for Expr {
    fn from(value: ExprList) -> Self {
        Expr::List(value)
    }
}

/// A normal scalar variable reference
#[derive(Clone, Debug, PartialEq)]
pub struct VarRef {
    name: String,
    comment: Option<String>,
}

impl VarRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Element for VarRef {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, _level: usize) -> fmt::Result {
        out.write_str(&self.name)
    }
}

/// A string literal. The value is written as is, escaping any `"` is up to whoever
/// builds the literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstString {
    value: String,
    comment: Option<String>,
}

impl ConstString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Element for ConstString {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, _level: usize) -> fmt::Result {
        write!(out, "\"{}\"", self.value)
    }
}

/// A parenthesised, comma separated list of expressions, used for the arguments
/// of procedure calls
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExprList {
    exprs: Vec<Expr>,
    comment: Option<String>,
}

impl ExprList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_expr(&mut self, expr: impl Into<Expr>) {
        self.exprs.push(expr.into());
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.exprs.iter()
    }

    pub(crate) fn collect_comments<'a>(&'a self, into: &mut Vec<&'a str>) {
        into.extend(self.comment());
        for expr in &self.exprs {
            expr.collect_comments(into);
        }
    }
}

impl FromIterator<Expr> for ExprList {
    fn from_iter<T: IntoIterator<Item = Expr>>(iter: T) -> Self {
        Self {
            exprs: iter.into_iter().collect(),
            comment: None,
        }
    }
}

impl<'a> IntoIterator for &'a ExprList {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Element for ExprList {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        out.write_char('(')?;
        for (i, expr) in self.exprs.iter().enumerate() {
            if i != 0 {
                out.write_str(", ")?;
            }
            expr.emit(out, level)?;
        }
        out.write_char(')')
    }
}

display_via_emit!(Expr, VarRef, ConstString, ExprList);
