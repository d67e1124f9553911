use std::fmt::{self, Write};

use itertools::Itertools;

use crate::output::Output;

/// Capabilities shared by every node in the tree
pub trait Element {
    fn comment(&self) -> Option<&str>;

    /// Attaches a comment to the node, replacing any previous one
    fn set_comment(&mut self, comment: impl Into<String>);

    fn emit(&self, out: &mut Output<'_>, level: usize) -> fmt::Result;
}

/// Expands to the comment accessors of `Element` for a struct with a
/// `comment: Option<String>` field
macro_rules! comment_accessors {
    () => {
        fn comment(&self) -> Option<&str> {
            self.comment.as_deref()
        }

        fn set_comment(&mut self, comment: impl Into<String>) {
            self.comment = Some(comment.into());
        }
    };
}
pub(crate) use comment_accessors;

/// Writes `comment` either on its own lines at `level`, or, if `end_of_line` is set,
/// appended to the line currently being written. The trailing newline of an inline
/// comment is the caller's responsibility.
pub fn emit_comment(
    out: &mut Output<'_>,
    level: usize,
    comment: Option<&str>,
    end_of_line: bool,
) -> fmt::Result {
    let Some(comment) = comment.filter(|c| !c.trim().is_empty()) else {
        return Ok(());
    };

    if end_of_line {
        // A line break in an inline comment would end the comment
        write!(out, "  -- {}", comment.lines().map(str::trim).join(" "))
    } else {
        for line in comment.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                out.line(level, "--")?;
            } else {
                out.line(level, format_args!("-- {line}"))?;
            }
        }
        Ok(())
    }
}

/// Emits comments collected from inline nodes as lines in front of the node
/// that contains them
pub(crate) fn emit_hoisted_comments(
    out: &mut Output<'_>,
    level: usize,
    comments: &[&str],
) -> fmt::Result {
    for comment in comments {
        emit_comment(out, level, Some(comment), false)?;
    }
    Ok(())
}
