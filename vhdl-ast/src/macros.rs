/// Compares generated code against the expected text, printing both along with a
/// character diff when they differ.
/// Requires `colored::Colorize` to be in scope.
macro_rules! assert_same_code {
    ($got:expr, $expected:expr) => {
        if $got != $expected {
            println!("{}:\n{}", "got".red(), $got);
            println!("{}", "==============================================".red());
            println!("{}:\n{}", "expected".green(), $expected);
            println!(
                "{}",
                "==============================================".green()
            );
            println!("{}", prettydiff::diff_chars($got, $expected));
            println!(
                "{}",
                "==============================================".yellow()
            );
            panic!("Code mismatch")
        }
    };
}
pub(crate) use assert_same_code;

/// Builds a process from declarations and sequential statements, panicking if a
/// variable is declared twice.
///
/// `process!("main"; { VarDecl::new("tmp", Type::scalar("integer")) } => { WaitStmt::new() })`
macro_rules! process {
    (@new $name:expr) => {
        $crate::Process::named($name)
    };
    (@new) => {
        $crate::Process::new()
    };
    ($($name:expr)?; { $($decl:expr),* $(,)? } => { $($stmt:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut process = $crate::macros::process!(@new $($name)?);
        $(
            process
                .add_decl($decl)
                .expect("Duplicate declaration in process! macro");
        )*
        $( process.add_stmt($stmt); )*
        process
    }};
}
pub(crate) use process;

#[cfg(test)]
mod tests {
    use crate::{Element, Expr, ProcCallStmt, Type, VarDecl, WaitStmt};

    #[test]
    fn process_macro_builds_named_process() {
        let p = process!("main"; {
            VarDecl::new("a", Type::scalar("integer")),
            VarDecl::new("b", Type::scalar("integer")),
        } => {
            WaitStmt::new()
        });

        assert_eq!(p.get_name(), Some("main"));
        assert_eq!(p.decls().len(), 2);
        assert_eq!(p.stmts().len(), 1);
    }

    #[test]
    fn process_macro_builds_anonymous_process() {
        let mut call = ProcCallStmt::new("report");
        call.add_expr(Expr::string("x"));
        let p = process!(; {} => { call, WaitStmt::new() });

        assert_eq!(p.get_name(), None);
        assert_eq!(p.comment(), None);
        assert_eq!(p.stmts().len(), 2);
    }

    #[test]
    #[should_panic(expected = "Duplicate declaration")]
    fn process_macro_panics_on_duplicate_variable() {
        process!("main"; {
            VarDecl::new("a", Type::scalar("integer")),
            VarDecl::new("a", Type::scalar("bit")),
        } => {});
    }
}
