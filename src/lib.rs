#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::{
    ast::ast::Program,
    errors::{diagnostics::Diagnostics, errors::{Error, ErrorTip, InternalError}},
    name_resolver::{name_resolver::resolve_names, resolution::Resolution},
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod name_resolver;
pub mod parser;
pub mod symbols;
pub mod type_checker;

extern crate regex;

/// A 1-based line and column in the source text.
///
/// `Position::default()` (0:0) is used for diagnostics that have no source location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Result of running both semantic passes over one program.
#[derive(Debug)]
pub struct Analysis {
    pub resolution: Resolution,
    pub diagnostics: Diagnostics,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Runs name resolution and then type checking over `program`.
///
/// Diagnostics from both passes are returned in emission order. An internal error in name
/// resolution stops the run before type checking.
pub fn analyze(program: &Program) -> Result<Analysis, InternalError> {
    let (resolution, mut diagnostics) = resolve_names(program)?;
    diagnostics.extend(type_check(program, &resolution));

    Ok(Analysis {
        resolution,
        diagnostics,
    })
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a message with the offending source line and a caret under `position`.
pub fn render_snippet(title: &str, position: Position, source: &str, file: &Path) -> String {
    /*
        Error: message
        -> final.base
           |
        20 | integer x.
           | --------^
    */

    let mut out = String::new();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("Error: {}\n", title));
    out.push_str(&format!("-> {}:{}\n", file.to_string_lossy(), position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    let title = if let ErrorTip::None = error.get_tip() {
        error.get_error_name().to_string()
    } else {
        format!("{} ({})", error.get_error_name(), error.get_tip())
    };

    eprint!("{}", render_snippet(&title, *error.get_position(), source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{get_line_at_position, remove_starting_whitespace, render_snippet, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        assert_eq!(get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 3), Some(""));
        assert_eq!(get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(get_line_at_position(source, 0), None);
        assert_eq!(get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(12, 4).to_string(), "12:4");
        assert_eq!(Position::default().to_string(), "0:0");
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(remove_starting_whitespace("  \tx = 1."), ("x = 1.", 3));
        assert_eq!(remove_starting_whitespace("x"), ("x", 0));
    }

    #[test]
    fn test_render_snippet_without_location() {
        let rendered =
            render_snippet("Return value missing", Position::default(), "", Path::new("a.base"));
        assert_eq!(rendered, "Error: Return value missing\n-> a.base:0:0\n");
    }
}
