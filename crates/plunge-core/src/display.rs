//! Fixed-width report layout
//!
//! Every report line is at most [`MAX_LINE_LENGTH`] columns. A pathname is
//! rendered into a field; when the field is narrower than a full line, a
//! dot leader pads it out so the status column lines up. Pathnames too long
//! for their field lose their middle, keeping the head and, where possible,
//! the tail from the last separator on.

use std::iter;

use plunge_fs::constants::SEPARATOR;

/// Total width of a report line.
pub const MAX_LINE_LENGTH: usize = 78;

/// Width of the path field in terse mode (status column is 18 wide).
pub const TERSE_FIELD_WIDTH: usize = MAX_LINE_LENGTH - 18;

/// Width of the path field in verbose mode (status + action are 26 wide).
pub const VERBOSE_FIELD_WIDTH: usize = MAX_LINE_LENGTH - 26;

pub const TERSE_HEADING: &str = concat!(
    "                         Pathname                                 Status\n",
    "----------------------------------------------------------  ------------------"
);

pub const VERBOSE_HEADING: &str = concat!(
    "                     Pathname                             Status        Action\n",
    "--------------------------------------------------  ------------------  ------"
);

pub const PURGE_BANNER: &str = "\nThe following files in DEST may need to be purged:";

// Length of the ellipsis, and of the gap left before a padded field's status
const ELLIPSIS: usize = 3;
// Minimum head (including ellipsis) kept when eliding
const MIN_HEAD: usize = 6;

pub fn field_width(verbose: bool) -> usize {
    if verbose {
        VERBOSE_FIELD_WIDTH
    } else {
        TERSE_FIELD_WIDTH
    }
}

pub fn heading(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_HEADING
    } else {
        TERSE_HEADING
    }
}

/// Render `path` into a field `width` columns wide.
///
/// At the full line width the result is the (possibly elided) path followed
/// by a newline. Narrower fields leave three columns for the status gap and
/// are padded with the dot leader instead, without a newline.
pub fn format_path(path: &str, width: usize) -> String {
    let padded = width < MAX_LINE_LENGTH;
    let field = if padded {
        width.saturating_sub(ELLIPSIS)
    } else {
        width
    };

    let chars: Vec<char> = path.chars().collect();
    let mut line = if chars.len() > field {
        elide(&chars, field)
    } else {
        path.to_string()
    };

    if padded {
        let len = line.chars().count();
        line.extend((len..width).map(|column| if (width - column) % 2 == 1 { ' ' } else { '.' }));
    } else {
        line.push('\n');
    }
    line
}

/// Shorten `chars` to exactly `field` characters by replacing its middle
/// with an ellipsis.
fn elide(chars: &[char], field: usize) -> String {
    let n = chars.len();
    if field < MIN_HEAD + ELLIPSIS {
        return chars[n - field..].iter().collect();
    }

    let mut start = n - 1;
    while start > MIN_HEAD && chars[start] != SEPARATOR {
        start -= 1;
    }
    while n - start + MIN_HEAD > field {
        start += 1;
    }

    let head = field - (n - start) - ELLIPSIS;
    chars[..head]
        .iter()
        .copied()
        .chain(iter::repeat_n('.', ELLIPSIS))
        .chain(chars[start..].iter().copied())
        .collect()
}
