use std::fmt::{self, Write};

use crate::element::{comment_accessors, emit_comment, emit_hoisted_comments, Element};
use crate::entity::Entity;
use crate::output::{display_via_emit, Output};
use crate::types::Type;

/// A declaration of some sort. The name is the identifier being declared, not
/// the name of its type.
#[derive(Clone, Debug, PartialEq)]
pub enum Decl {
    Component(ComponentDecl),
    Var(VarDecl),
}

impl Decl {
    pub fn get_name(&self) -> &str {
        match self {
            Decl::Component(d) => d.get_name(),
            Decl::Var(d) => d.get_name(),
        }
    }

    pub fn is_var(&self, name: &str) -> bool {
        matches!(self, Decl::Var(d) if d.name == name)
    }

    pub fn is_component(&self, name: &str) -> bool {
        matches!(self, Decl::Component(d) if d.name == name)
    }
}

impl Element for Decl {
    fn comment(&self) -> Option<&str> {
        match self {
            Decl::Component(d) => d.comment(),
            Decl::Var(d) => d.comment(),
        }
    }

    fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            Decl::Component(d) => d.set_comment(comment),
            Decl::Var(d) => d.set_comment(comment),
        }
    }

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        match self {
            Decl::Component(d) => d.emit(out, level),
            Decl::Var(d) => d.emit(out, level),
        }
    }
}

impl From<ComponentDecl> for Decl {
    fn from(value: ComponentDecl) -> Self {
        Decl::Component(value)
    }
}

impl From<VarDecl> for Decl {
    fn from(value: VarDecl) -> Self {
        Decl::Var(value)
    }
}

/// A forward declaration of a component.
///
/// Components are only ever declared for entities that this backend has generated
/// itself, which keeps the declared interface identical to the entity. For that
/// reason there is no public constructor, use [`ComponentDecl::component_decl_for`].
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentDecl {
    name: String,
    comment: Option<String>,
}

impl ComponentDecl {
    pub fn component_decl_for(entity: &Entity) -> Self {
        Self {
            name: entity.get_name().to_string(),
            comment: None,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Element for ComponentDecl {
    comment_accessors!();

    // TODO: Emit the port list once entities carry ports
    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        emit_comment(out, level, self.comment(), false)?;
        out.line(level, format_args!("component {} is", self.name))?;
        out.line(level, "end component;")
    }
}

/// A variable declaration. These belong inside processes, but nothing here
/// enforces that.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    name: String,
    ty: Type,
    comment: Option<String>,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            comment: None,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_type(&self) -> &Type {
        &self.ty
    }

    /// Architectures can only hold shared variables
    pub(crate) fn emit_shared(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        self.emit_as(out, level, "shared variable")
    }

    fn emit_as(&self, out: &mut Output<'_>, level: usize, keyword: &str) -> fmt::Result {
        let mut hoisted = vec![];
        self.ty.collect_comments(&mut hoisted);
        emit_hoisted_comments(out, level, &hoisted)?;

        out.indent(level)?;
        write!(out, "{keyword} {} : ", self.name)?;
        self.ty.emit(out, level)?;
        out.write_char(';')?;
        emit_comment(out, level, self.comment(), true)?;
        out.newline()
    }
}

impl Element for VarDecl {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        self.emit_as(out, level, "variable")
    }
}

display_via_emit!(Decl, ComponentDecl, VarDecl);
