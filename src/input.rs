// src/input.rs
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use numeric_range_shared_kernel::{InputError, InputResult};

use crate::sample::Sample;

/// Where a batch of numbers comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" { Self::Stdin } else { Self::File(path.to_path_buf()) }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole source into memory.
    ///
    /// # Errors
    /// Returns [`InputError::Read`] if the file cannot be opened or is not valid UTF-8.
    pub fn read_to_string(&self) -> InputResult<String> {
        let read = match self {
            Self::Stdin => io::read_to_string(io::stdin()),
            Self::File(path) => fs::read_to_string(path),
        };
        read.map_err(|source| InputError::Read { source_name: self.name(), source })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Splits `text` into number tokens.
///
/// Tokens are separated by whitespace or commas. A line whose first non-blank character is `#`
/// is a comment. Yields `(line_number, token)` with 1-based line numbers.
pub fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .flat_map(|(idx, line)| {
            line.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(move |token| (idx + 1, token))
        })
}

/// Parses every token of `text` as `N`.
///
/// # Errors
/// Returns [`InputError::Parse`] for the first bad token unless `lenient` is set, in which case
/// bad tokens are logged and skipped.
pub fn parse_samples<N: Sample>(text: &str, source_name: &str, lenient: bool) -> InputResult<Vec<N>> {
    let mut values = Vec::new();
    let mut skipped = 0usize;

    for (line, token) in tokens(text) {
        match N::parse_token(token) {
            Ok(value) => values.push(value),
            Err(reason) if lenient => {
                warn!("{source_name}:{line}: skipping '{token}': {reason}");
                skipped += 1;
            }
            Err(reason) => {
                return Err(InputError::Parse {
                    source_name: source_name.to_string(),
                    line,
                    token: token.to_string(),
                    reason,
                });
            }
        }
    }

    debug!("{source_name}: read {} values, skipped {skipped}", values.len());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdin() {
        assert_eq!(InputSource::from_path(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_path(Path::new("data.txt")),
            InputSource::File(PathBuf::from("data.txt"))
        );
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn tokens_split_on_whitespace_and_commas() {
        let text = "1, 2 ,3\n# comment 99\n\n  4\t5,,6\n   # indented comment\n";
        let collected: Vec<_> = tokens(text).collect();
        assert_eq!(collected, vec![(1, "1"), (1, "2"), (1, "3"), (4, "4"), (4, "5"), (4, "6")]);
    }

    #[test]
    fn strict_parse_reports_line_and_token() {
        let err = parse_samples::<i64>("1 2\n3 oops\n", "in.txt", false).unwrap_err();
        match err {
            InputError::Parse { source_name, line, token, .. } => {
                assert_eq!(source_name, "in.txt");
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_parse_skips_bad_tokens() {
        let values = parse_samples::<f64>("1.5 nan x -2\n", "in.txt", true).unwrap();
        assert_eq!(values, vec![1.5, -2.0]);
    }

    #[test]
    fn empty_text_parses_to_no_values() {
        assert!(parse_samples::<i64>("# nothing here\n", "in.txt", false).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = InputSource::File(PathBuf::from("/definitely/not/here.txt"));
        let err = source.read_to_string().unwrap_err();
        assert!(matches!(err, InputError::Read { ref source_name, .. } if source_name == "/definitely/not/here.txt"));
    }
}
