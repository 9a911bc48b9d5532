//! Per-file status labels and copy decisions

use crate::compare::ComparisonOutcome;

// Terse labels, shown only for files that get copied
const NEW: &str = "New";
const LARGER: &str = "Newer and larger";
const NEWER: &str = "Newer (not larger)";

// Verbose labels, one per outcome
const ERROR: &str = "Error";
const SRC_MISSING: &str = "Src not found. . . . Skip";
const SRC_NOT_FILE: &str = "Src not a file . . . Skip";
const DST_MISSING: &str = "Dst not found. . . . Copy";
const DST_NOT_FILE: &str = "Dst not a file . . . Skip";
const SAME_AGE: &str = "Same age . . . . . . Skip";
const DST_NEWER: &str = "Dst newer! . . . . . Skip";
const SRC_LARGER: &str = "Src newer & larger . Copy";
const SRC_NEWER: &str = "Src newer. . . . . . Copy";

/// What to print for a file and whether to copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub label: Option<&'static str>,
    pub should_copy: bool,
}

impl ComparisonOutcome {
    /// Whether the source replaces the destination for this outcome.
    pub fn should_copy(self) -> bool {
        matches!(
            self,
            Self::DstMissing | Self::SrcLargerNewer | Self::SrcNewer
        )
    }

    /// Status label for this outcome, if one is shown at this verbosity.
    pub fn label(self, verbose: bool) -> Option<&'static str> {
        if verbose {
            return Some(match self {
                Self::Error => ERROR,
                Self::SrcMissing => SRC_MISSING,
                Self::SrcNotFile => SRC_NOT_FILE,
                Self::DstMissing => DST_MISSING,
                Self::DstNotFile => DST_NOT_FILE,
                Self::SameAge => SAME_AGE,
                Self::DstNewer => DST_NEWER,
                Self::SrcLargerNewer => SRC_LARGER,
                Self::SrcNewer => SRC_NEWER,
            });
        }

        match self {
            Self::DstMissing => Some(NEW),
            Self::SrcLargerNewer => Some(LARGER),
            Self::SrcNewer => Some(NEWER),
            _ => None,
        }
    }
}

/// Map an outcome to its label and copy decision.
pub fn decide(outcome: ComparisonOutcome, verbose: bool) -> Decision {
    Decision {
        label: outcome.label(verbose),
        should_copy: outcome.should_copy(),
    }
}
