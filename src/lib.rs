#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// The location of a token within the source text. `offset` is the
/// zero-based byte offset from the start of the text; `line` and `column`
/// are both zero-based, and `column` counts characters from the start of
/// the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 0,
            column: 0,
        }
    }
}

/// Returns the text of the zero-based `line_index` line of `source`,
/// without its line terminator.
pub fn get_line(source: &str, line_index: usize) -> Option<&str> {
    let mut start = 0;
    let mut line_number = 0;
    let bytes = source.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        let is_break = bytes[i] == b'\n' || bytes[i] == b'\r';
        if is_break {
            if line_number == line_index {
                return Some(&source[start..i]);
            }
            // \r\n and \n\r count as one line break
            if i + 1 < bytes.len()
                && (bytes[i + 1] == b'\n' || bytes[i + 1] == b'\r')
                && bytes[i + 1] != bytes[i]
            {
                i += 1;
            }
            line_number += 1;
            start = i + 1;
        }
        i += 1;
    }

    if line_number == line_index {
        Some(&source[start..])
    } else {
        None
    }
}

pub fn display_error(error: &crate::errors::errors::Error, source: &str, file_name: &str) {
    /*
        Error: message
        -> channel.brs
           |
        20 | k = #
           | ----^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    if let crate::errors::errors::ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column + 1).saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let source = "sub Main()\n    print 1\nend sub";
        assert_eq!(super::get_line(source, 0), Some("sub Main()"));
        assert_eq!(super::get_line(source, 1), Some("    print 1"));
        assert_eq!(super::get_line(source, 2), Some("end sub"));
        assert_eq!(super::get_line(source, 3), None);
    }

    #[test]
    fn test_get_line_crlf() {
        let source = "one\r\ntwo\r\nthree";
        assert_eq!(super::get_line(source, 1), Some("two"));
        assert_eq!(super::get_line(source, 2), Some("three"));
    }

    #[test]
    fn test_get_line_empty_source() {
        assert_eq!(super::get_line("", 0), Some(""));
        assert_eq!(super::get_line("", 1), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    k = #");
        assert_eq!(text, "k = #");
        assert_eq!(removed, 4);
    }
}
