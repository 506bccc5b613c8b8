//! Program Loader - Text to Intcode program
//!
//! Programs are stored as comma-separated signed decimals:
//!
//! ```text
//! 1002,4,3,4,33
//! ```
//!
//! Whitespace around values and a trailing comma or newline are ignored.
//!
//! # Usage
//!
//! ```
//! use intcode::loader::parse_program;
//!
//! let program = parse_program("1,0,0,0,99\n").unwrap();
//! assert_eq!(program, vec![1, 0, 0, 0, 99]);
//! ```

use std::path::Path;

use crate::error::{IntcodeError, Result};
use crate::vm::Word;

/// Parse program source text or any comma-separated value list
pub fn parse_program(source: &str) -> Result<Vec<Word>> {
    let trimmed = source.trim().trim_end_matches(',');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token.parse::<Word>().map_err(|_| IntcodeError::Parse {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Read and parse a program file
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let program = parse_program(&source)?;
    log::debug!("loaded {} cells from {}", program.len(), path.display());
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_program("1,9,10,3").unwrap(), vec![1, 9, 10, 3]);
    }

    #[test]
    fn test_parse_whitespace_and_negatives() {
        let program = parse_program("  109, -1 ,\n204,1125899906842624,\n").unwrap();
        assert_eq!(program, vec![109, -1, 204, 1125899906842624]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_program("").unwrap().is_empty());
        assert!(parse_program(" \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_token() {
        let err = parse_program("1,2,x3,4").unwrap_err();
        match err {
            IntcodeError::Parse { index, token } => {
                assert_eq!(index, 2);
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            parse_program("1,,2"),
            Err(IntcodeError::Parse { index: 1, .. })
        ));
    }

    #[test]
    fn test_phase_list_error_names_value() {
        let err = parse_program("5,6,seven").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value \"seven\" at position 2");
    }

    #[test]
    fn test_load_path_roundtrip() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("program.txt");
        std::fs::write(&path, "104,1125899906842624,99\n").unwrap();

        let program = load_path(&path).unwrap();
        assert_eq!(program, vec![104, 1125899906842624, 99]);
    }

    #[test]
    fn test_load_path_missing_fails() {
        let result = load_path("definitely/does/not/exist.txt");
        assert!(matches!(result, Err(IntcodeError::Io(_))));
    }
}
