use std::fmt;

use itertools::Itertools;
use tracing::trace;

use crate::arch::Architecture;
use crate::element::{comment_accessors, emit_comment, Element};
use crate::error::Result;
use crate::options::EmitOptions;
use crate::output::{display_via_emit, IoSink, Output};

/// Libraries which are visible without a library clause
const IMPLICIT_LIBRARIES: [&str; 2] = ["std", "work"];

/// An entity defines the interface of a module. Each entity is associated with a
/// single architecture, although VHDL technically allows more. Entities are
/// derived from instantiations of module scopes in the source hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    name: String,
    derived_from: String,
    arch: Architecture,
    uses: Vec<String>,
    comment: Option<String>,
}

impl Entity {
    /// Creates an entity which takes ownership of `arch`. The architecture must
    /// have been declared for an entity called `name`, and must not belong to
    /// another entity already.
    pub fn new(
        name: impl Into<String>,
        derived_from: impl Into<String>,
        mut arch: Architecture,
    ) -> Result<Self> {
        let name = name.into();
        arch.attach(&name)?;
        Ok(Self {
            name,
            derived_from: derived_from.into(),
            arch,
            uses: vec![],
            comment: None,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Name of the source module this entity was generated from
    pub fn get_derived_from(&self) -> &str {
        &self.derived_from
    }

    pub fn get_arch(&self) -> &Architecture {
        &self.arch
    }

    /// Records that the entity needs `spec`, e.g. `ieee.std_logic_1164`, to be
    /// visible. Each package is only recorded once; VHDL names are case
    /// insensitive so `IEEE.Numeric_Std` is the same as `ieee.numeric_std`.
    pub fn requires_package(&mut self, spec: impl Into<String>) {
        let spec = spec.into();
        if !self.uses.iter().any(|u| u.eq_ignore_ascii_case(&spec)) {
            trace!("{} requires {spec}", self.name);
            self.uses.push(spec);
        }
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(String::as_str)
    }

    /// Emits the whole design unit with the default options
    pub fn emit_to(&self, sink: &mut dyn fmt::Write, level: usize) -> fmt::Result {
        self.emit_with(sink, level, &EmitOptions::default())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(entity = %self.name))]
    pub fn emit_with(
        &self,
        sink: &mut dyn fmt::Write,
        level: usize,
        options: &EmitOptions,
    ) -> fmt::Result {
        self.emit(&mut Output::new(sink, options), level)
    }

    /// Writes the unit to a byte sink such as a file. Errors from the sink are
    /// passed on unchanged. Text already written is not rolled back.
    pub fn write_vhdl<W: std::io::Write + ?Sized>(
        &self,
        sink: &mut W,
        options: &EmitOptions,
    ) -> std::io::Result<()> {
        let mut adapter = IoSink::new(sink);
        match self.emit_with(&mut adapter, 0, options) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(adapter.into_io_error()),
        }
    }

    fn emit_context(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        let libraries = self
            .uses
            .iter()
            .filter_map(|spec| spec.split_once('.').map(|(library, _)| library))
            .filter(|library| {
                !IMPLICIT_LIBRARIES
                    .iter()
                    .any(|implicit| implicit.eq_ignore_ascii_case(library))
            })
            .unique_by(|library| library.to_ascii_lowercase());

        for library in libraries {
            out.line(level, format_args!("library {library};"))?;
        }
        for spec in &self.uses {
            out.line(level, format_args!("use {spec}.all;"))?;
        }
        if !self.uses.is_empty() {
            out.newline()?;
        }
        Ok(())
    }
}

impl Element for Entity {
    comment_accessors!();

    // TODO: Ports and generics
    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result {
        self.emit_context(out, level)?;

        if out.options().emit_provenance {
            out.line(
                level,
                format_args!("-- Generated from module {}", self.derived_from),
            )?;
        }
        emit_comment(out, level, self.comment(), false)?;
        out.line(level, format_args!("entity {} is", self.name))?;
        out.line(level, "end entity;")?;
        out.newline()?;

        self.arch.emit(out, level)
    }
}

display_via_emit!(Entity);
