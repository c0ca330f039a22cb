use std::io::{BufRead, Write};

use crate::error::{Error, Result};

pub const PROMPT: &str = "Enter file name without extension: ";

/// Asks for the output base name and reads one line of the answer.
///
/// Only the line terminator is removed. Whitespace, separators and anything
/// else the user typed are returned untouched.
pub fn prompt_base_name(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::NoInput);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn prompt(input: &str) -> (Result<String>, String) {
        let mut output = Vec::new();
        let name = prompt_base_name(&mut input.as_bytes(), &mut output);
        (name, String::from_utf8(output).unwrap())
    }

    #[rstest]
    #[case::unix("cornell\n", "cornell")]
    #[case::windows("cornell\r\n", "cornell")]
    #[case::no_newline("cornell", "cornell")]
    #[case::empty("\n", "")]
    #[case::spaces_kept("  box  \n", "  box  ")]
    #[case::separator("a/b\n", "a/b")]
    #[case::first_line_only("one\ntwo\n", "one")]
    fn test_prompt_base_name(#[case] input: &str, #[case] expected: &str) {
        let (name, shown) = prompt(input);
        assert_eq!(name.unwrap(), expected);
        assert_eq!(shown, PROMPT);
    }

    #[test]
    fn test_closed_stdin() {
        let (name, shown) = prompt("");
        assert!(matches!(name, Err(Error::NoInput)));
        assert_eq!(shown, PROMPT);
    }
}
