use std::fmt::{self, Write};

use crate::element::{comment_accessors, Element};
use crate::output::{display_via_emit, Output};

/// A type is just a name at the moment. The source language has a much simpler
/// type system than VHDL, so this should not need to grow much.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Scalar(ScalarType),
}

impl Type {
    pub fn scalar(name: impl Into<String>) -> Self {
        Type::Scalar(ScalarType::new(name))
    }

    pub(crate) fn collect_comments<'a>(&'a self, into: &mut Vec<&'a str>) {
        match self {
            Type::Scalar(t) => into.extend(t.comment()),
        }
    }
}

impl Element for Type {
    fn comment(&self) -> Option<&str> {
        match self {
            Type::Scalar(t) => t.comment(),
        }
    }

    fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            Type::Scalar(t) => t.set_comment(comment),
        }
    }

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        match self {
            Type::Scalar(t) => t.emit(out, level),
        }
    }
}

impl From<ScalarType> for Type {
    fn from(value: ScalarType) -> Self {
        Type::Scalar(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    name: String,
    comment: Option<String>,
}

impl ScalarType {
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

impl Element for ScalarType {
    comment_accessors!();

    fn emit(&self, out: &mut Output<'_>, _level: usize) -> fmt::Result {
        out.write_str(&self.name)
    }
}

display_via_emit!(Type, ScalarType);
