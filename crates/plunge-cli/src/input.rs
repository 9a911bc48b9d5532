//! Reading the file list from standard input

use std::io::BufRead;

/// Read relative pathnames, one per line.
///
/// Lines are trimmed of surrounding whitespace and blank lines are dropped.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_paths<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut paths = Vec::new();
    let mut line = Vec::new();

    while reader.read_until(b'\n', &mut line)? > 0 {
        let text = String::from_utf8_lossy(&line);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
        line.clear();
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_skips_blank_lines() {
        let input = b"  a.txt \n\n\t\nsub/b.txt\r\n";
        let paths = read_paths(&input[..]).unwrap();
        assert_eq!(paths, vec!["a.txt", "sub/b.txt"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let paths = read_paths(&b"a\nb"[..]).unwrap();
        assert_eq!(paths, vec!["a", "b"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let paths = read_paths(&b"a\na\n"[..]).unwrap();
        assert_eq!(paths, vec!["a", "a"]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(read_paths(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let paths = read_paths(&b"caf\xe9.txt\n"[..]).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].starts_with("caf"));
        assert!(paths[0].ends_with(".txt"));
    }
}
