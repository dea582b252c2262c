//! Tests for the mission interpreter: structural validation, token
//! extraction with source offsets, and the deferred-validation layering
//! (headings, numbers, and command characters are not checked here).

use mars_rover::errors::{ErrorKind, SourceContext, ValidationContext};
use mars_rover::interpreter::interpret;

fn ctx(input: &str) -> ValidationContext {
    ValidationContext::new(SourceContext::from_input("test", input), "interpret")
}

#[test]
fn parses_a_single_rover_program() {
    let input = "5 5\n1 2 N\nLMR";
    let instructions = interpret(input, &ctx(input)).unwrap();

    assert_eq!(instructions.len(), 1);
    let inst = &instructions[0];
    assert_eq!(inst.plateau.width.text, "5");
    assert_eq!(inst.plateau.height.text, "5");
    assert_eq!(inst.x.text, "1");
    assert_eq!(inst.y.text, "2");
    assert_eq!(inst.heading.text, "N");
    assert_eq!(inst.commands.text, "LMR");
}

#[test]
fn all_instructions_share_the_first_line_plateau() {
    let input = "5 5\n1 2 N\nLM\n3 3 E\nMM";
    let instructions = interpret(input, &ctx(input)).unwrap();

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].plateau, instructions[1].plateau);
}

#[test]
fn tokens_carry_byte_offsets_into_the_original_input() {
    let input = "5 5\n1 2 N\nLMR";
    let instructions = interpret(input, &ctx(input)).unwrap();

    let inst = &instructions[0];
    assert_eq!(inst.plateau.width.offset, 0);
    assert_eq!(inst.plateau.height.offset, 2);
    assert_eq!(inst.x.offset, 4);
    assert_eq!(inst.y.offset, 6);
    assert_eq!(inst.heading.offset, 8);
    assert_eq!(inst.commands.offset, 10);
}

#[test]
fn surrounding_whitespace_is_trimmed_per_line() {
    let input = "  5 5  \n  1 2 N\nLMLM  \n";
    let instructions = interpret(input, &ctx(input)).unwrap();

    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].x.text, "1");
    assert_eq!(instructions[0].commands.text, "LMLM");
}

#[test]
fn empty_input_is_a_structural_failure() {
    for input in ["", "   ", "\n\n"] {
        let err = interpret(input, &ctx(input)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InputNotValid { .. }));
    }
}

#[test]
fn even_line_counts_are_a_structural_failure() {
    let input = "5 5\n1 2 N";
    let err = interpret(input, &ctx(input)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InputNotValid { .. }));

    let input = "5 5\n1 2 N\nLM\n3 3 E";
    let err = interpret(input, &ctx(input)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InputNotValid { .. }));
}

#[test]
fn interior_blank_lines_break_the_pairing_structure() {
    let input = "5 5\n\n1 2 N\nLM";
    let err = interpret(input, &ctx(input)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InputNotValid { .. }));
}

#[test]
fn headings_and_commands_are_not_pre_validated() {
    // Deferred validation: the interpreter carries raw tokens and lets the
    // rover reject them during construction and execution.
    let input = "5 5\n1 2 X\nQQQ";
    let instructions = interpret(input, &ctx(input)).unwrap();

    assert_eq!(instructions[0].heading.text, "X");
    assert_eq!(instructions[0].commands.text, "QQQ");
}

#[test]
fn non_numeric_tokens_are_carried_through() {
    let input = "X Y\n1 2 N\nLM";
    let instructions = interpret(input, &ctx(input)).unwrap();

    assert_eq!(instructions[0].plateau.width.text, "X");
    assert_eq!(instructions[0].plateau.height.text, "Y");
}

#[test]
fn missing_tokens_become_empty_tokens_at_the_line_end() {
    let input = "5\n1 2\nLM";
    let instructions = interpret(input, &ctx(input)).unwrap();

    let inst = &instructions[0];
    assert_eq!(inst.plateau.height.text, "");
    assert_eq!(inst.plateau.height.offset, 1);
    assert_eq!(inst.heading.text, "");
}

#[test]
fn structural_error_carries_the_interpret_phase_code() {
    let input = "5 5\n1 2 N";
    let err = interpret(input, &ctx(input)).unwrap_err();
    assert_eq!(
        err.diagnostic_info.error_code,
        "rover::interpret::input_not_valid"
    );
}
