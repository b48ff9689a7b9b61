//! Error Helper Tests

use angular_compiler::error::{self, get_parse_errors, is_syntax_error, syntax_error};
use angular_compiler::parse_util::{ParseError, ParseLocation, ParseSourceFile, ParseSourceSpan};
use angular_compiler::CompilerError;

fn parse_error(msg: &str) -> ParseError {
    let file = ParseSourceFile::new("{{ a + }}", "tpl.html");
    let span = ParseSourceSpan::new(
        ParseLocation::at_offset(file.clone(), 3),
        ParseLocation::at_offset(file, 6),
    );
    ParseError::new(span, msg)
}

#[test]
fn error_always_fails_with_internal_error() {
    let result: error::Result<u32> = error::error("unreachable branch");
    let err = result.unwrap_err();

    assert_eq!(err, CompilerError::Internal("unreachable branch".to_string()));
    assert_eq!(err.to_string(), "Internal Error: unreachable branch");
    assert!(!is_syntax_error(&err));
}

#[test]
fn error_propagates_through_question_mark() {
    fn lookup(found: bool) -> error::Result<&'static str> {
        if !found {
            return error::error("missing entry");
        }
        Ok("entry")
    }

    fn caller() -> error::Result<usize> {
        let entry = lookup(false)?;
        Ok(entry.len())
    }

    assert_eq!(caller(), Err(CompilerError::internal("missing entry")));
}

#[test]
fn syntax_errors_carry_parse_errors() {
    let errors = vec![parse_error("Unexpected end"), parse_error("Missing operand")];
    let err = syntax_error("Template parse errors", Some(errors.clone()));

    assert!(is_syntax_error(&err));
    assert_eq!(err.to_string(), "Template parse errors");
    assert_eq!(get_parse_errors(&err), errors.as_slice());
}

#[test]
fn syntax_errors_without_parse_errors_report_an_empty_list() {
    let err = syntax_error("Bad selector", None);

    assert!(is_syntax_error(&err));
    assert!(get_parse_errors(&err).is_empty());
}

#[test]
fn other_errors_have_no_parse_errors() {
    let err = CompilerError::IllegalState("oops".to_string());
    assert!(!is_syntax_error(&err));
    assert!(get_parse_errors(&err).is_empty());
}

#[test]
fn parse_errors_point_at_their_source() {
    let err = parse_error("Unexpected end");
    assert_eq!(err.span.text(), "a +");
    assert_eq!(err.to_string(), "tpl.html@0:3: Unexpected end");
}
