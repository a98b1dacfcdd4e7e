//! Input discovery and interactive selection.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// List regular files in `dir` with extension `ext`, sorted by name.
///
/// The extension comparison ignores ASCII case and a leading dot.
pub fn find_candidates(dir: &Path, ext: &str) -> io::Result<Vec<PathBuf>> {
    let ext = ext.trim_start_matches('.');
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));

        if matches && path.is_file() {
            candidates.push(path);
        }
    }

    candidates.sort();
    log::debug!("Found {} candidate(s) in {}", candidates.len(), dir.display());
    Ok(candidates)
}

/// Parse a 1-based selection into an index below `count`.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Ask the user to pick one of `candidates` until a valid number is given.
///
/// Returns the chosen index. End of input is an `UnexpectedEof` error.
pub fn prompt_selection<R: BufRead, W: Write>(
    candidates: &[PathBuf],
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    writeln!(output, "Multiple files found:")?;
    for (i, path) in candidates.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        writeln!(output, "  {}) {}", i + 1, name)?;
    }

    loop {
        write!(output, "Select a file [1-{}]: ", candidates.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no selection made",
            ));
        }

        match parse_selection(&line, candidates.len()) {
            Some(index) => return Ok(index),
            None => writeln!(output, "Invalid selection: {}", line.trim())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_find_candidates_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.tex"), "").unwrap();
        fs::write(dir.path().join("a.TEX"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("dir.tex")).unwrap();

        let found = find_candidates(dir.path(), "tex").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.TEX", "b.tex"]);
    }

    #[test]
    fn test_find_candidates_leading_dot() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("letter.tex"), "").unwrap();
        assert_eq!(find_candidates(dir.path(), ".tex").unwrap().len(), 1);
    }

    #[test]
    fn test_find_candidates_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_candidates(dir.path(), "tex").unwrap().is_empty());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n", 3), Some(0));
        assert_eq!(parse_selection(" 3 ", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("two", 3), None);
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let candidates = vec![PathBuf::from("a.tex"), PathBuf::from("b.tex")];
        let mut input = Cursor::new("9\nx\n2\n");
        let mut output = Vec::new();

        let index = prompt_selection(&candidates, &mut input, &mut output).unwrap();
        assert_eq!(index, 1);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("  1) a.tex"));
        assert!(shown.contains("  2) b.tex"));
        assert!(shown.contains("Invalid selection: 9"));
        assert!(shown.contains("Invalid selection: x"));
    }

    #[test]
    fn test_prompt_end_of_input() {
        let candidates = vec![PathBuf::from("a.tex"), PathBuf::from("b.tex")];
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_selection(&candidates, &mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
