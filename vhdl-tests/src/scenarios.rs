use vhdl_ast::{
    Architecture, CompInst, ComponentDecl, ConstString, Element, Entity, Expr, ExprList,
    ProcCallStmt, Process, Type, VarDecl, VarRef, WaitStmt,
};

fn adder() -> Entity {
    let mut process = Process::new();
    process
        .add_decl(VarDecl::new("tmp", Type::scalar("integer")))
        .unwrap();
    process.add_stmt(WaitStmt::new());

    let mut arch = Architecture::new("adder");
    arch.add_stmt(process).unwrap();

    Entity::new("adder", "adder_mod", arch).unwrap()
}

fn position(lines: &[&str], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line.trim() == needle)
        .unwrap_or_else(|| panic!("{needle} was not emitted"))
}

#[test]
fn adder_with_a_single_process() {
    snapshot_entity!(adder(), @r###"
    -- Generated from module adder_mod
    entity adder is
    end entity;

    architecture Behavioural of adder is
    begin
        process is
            variable tmp : integer;
        begin
            wait;
        end process;
    end architecture;
    "###);
}

#[test]
fn adder_lines_come_in_nesting_order() {
    let text = adder().to_string();
    let lines = text.lines().collect::<Vec<_>>();

    // Searching from the previous match keeps the two `begin`s apart
    let order = [
        "entity adder is",
        "end entity;",
        "architecture Behavioural of adder is",
        "process is",
        "variable tmp : integer;",
        "begin",
        "wait;",
        "end process;",
        "end architecture;",
    ];
    let mut start = 0;
    for needle in order {
        start += position(&lines[start..], needle) + 1;
    }
    assert_eq!(start, lines.len(), "Trailing lines in\n{text}");
}

#[test]
fn required_package_precedes_entity() {
    let mut entity = adder();
    entity.requires_package("ieee.std_logic_1164");

    let text = entity.to_string();
    let lines = text.lines().collect::<Vec<_>>();
    let package_lines = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains("ieee.std_logic_1164"))
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    assert_eq!(package_lines.len(), 1);
    assert!(package_lines[0] < position(&lines, "entity adder is"));
}

#[test]
fn recording_a_package_twice_emits_it_once() {
    let mut entity = adder();
    entity.requires_package("ieee.std_logic_1164");
    entity.requires_package("ieee.std_logic_1164");

    let text = entity.to_string();
    assert_eq!(text.matches("use ieee.std_logic_1164.all;").count(), 1);
    assert_eq!(text.matches("library ieee;").count(), 1);
}

#[test]
fn hierarchy_with_component_instances() {
    let counter = Entity::new("counter", "counter_mod", Architecture::new("counter")).unwrap();

    let mut greeting = ProcCallStmt::new("report_line");
    greeting.add_expr(ConstString::new("Starting"));
    greeting.set_comment("Generated from $display");

    let mut arch = Architecture::new("top");
    let mut decl = ComponentDecl::component_decl_for(&counter);
    decl.set_comment("Generated from counter_mod");
    arch.add_decl(decl).unwrap();

    let mut inst = CompInst::new("counter_0", "counter");
    inst.set_comment("Instance of counter_mod");
    arch.add_stmt(inst).unwrap();
    arch.add_stmt(CompInst::new("counter_1", "counter")).unwrap();

    let mut process = Process::named("initial_0");
    process.set_comment("Initial block");
    process.add_stmt(greeting);
    process.add_stmt(WaitStmt::new());
    arch.add_stmt(process).unwrap();

    let mut top = Entity::new("top", "top_mod", arch).unwrap();
    top.requires_package("ieee.std_logic_1164");
    top.requires_package("ieee.numeric_std");
    top.requires_package("std.textio");

    snapshot_entity!(top, @r###"
    library ieee;
    use ieee.std_logic_1164.all;
    use ieee.numeric_std.all;
    use std.textio.all;

    -- Generated from module top_mod
    entity top is
    end entity;

    architecture Behavioural of top is
        -- Generated from counter_mod
        component counter is
        end component;
    begin
        -- Instance of counter_mod
        counter_0: counter;
        counter_1: counter;
        -- Initial block
        initial_0: process is
        begin
            report_line("Starting");  -- Generated from $display
            wait;
        end process;
    end architecture;
    "###);
}

#[test]
fn nested_argument_lists_and_hoisted_comments() {
    let mut file = VarRef::new("output");
    file.set_comment("Standard output");
    let mut call = ProcCallStmt::new("write_all");
    call.add_expr(file);
    call.add_expr(ExprList::from_iter([Expr::var_ref("a"), Expr::string("b")]));
    call.add_expr(ExprList::new());

    let mut ty = Type::scalar("line");
    ty.set_comment("From std.textio");
    let mut process = Process::new();
    process.add_decl(VarDecl::new("l", ty)).unwrap();
    process.add_stmt(call);
    let mut arch = Architecture::new("printer");
    arch.add_stmt(process).unwrap();
    let entity = Entity::new("printer", "printer_mod", arch).unwrap();

    snapshot_entity!(entity, @r###"
    -- Generated from module printer_mod
    entity printer is
    end entity;

    architecture Behavioural of printer is
    begin
        process is
            -- From std.textio
            variable l : line;
        begin
            -- Standard output
            write_all(output, (a, "b"), ());
        end process;
    end architecture;
    "###);
}
