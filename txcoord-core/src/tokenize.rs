use std::collections::HashSet;

use crate::errors::{CigarError, Result};
use crate::models::{CigarOp, Run};

///
/// Split a CIGAR string into its ordered runs.
///
/// `"4M1D3I45M"` becomes `[4M, 1D, 3I, 45M]`. The whole string is split
/// first and the set of observed operation letters is checked afterwards,
/// so a bad letter anywhere in the string rejects the entire call, even
/// when the string is also structurally broken.
///
/// An empty string yields an empty vector.
///
/// # Arguments
/// - cigar: the CIGAR string to split
///
/// # Errors
/// - [CigarError::MalformedAlignment] if a letter has no length, a length has
///   no letter, or a character is neither a digit nor an uppercase letter
/// - [CigarError::InvalidAlignmentAlphabet] if any letter is not one of `M`, `I`, `D`
/// - [CigarError::ZeroLengthRun] if any run has length zero
pub fn tokenize(cigar: &str) -> Result<Vec<Run>> {
    let malformed = |reason: String| CigarError::MalformedAlignment {
        cigar: cigar.to_string(),
        reason,
    };

    // split into (length digits, op letter) pairs, keeping the first
    // structural problem so the alphabet check still sees every letter
    let mut blocks: Vec<(&str, char)> = Vec::new();
    let mut observed: HashSet<char> = HashSet::new();
    let mut structural: Option<String> = None;
    let mut group_start = 0;

    for (idx, ch) in cigar.char_indices() {
        if ch.is_ascii_digit() {
            continue;
        }

        if !ch.is_ascii_uppercase() {
            structural.get_or_insert_with(|| {
                format!("unexpected character {:?} at offset {}", ch, idx)
            });
            group_start = idx + ch.len_utf8();
            continue;
        }

        observed.insert(ch);

        if idx == group_start {
            structural.get_or_insert_with(|| {
                format!("operation '{}' at offset {} has no length", ch, idx)
            });
        } else {
            blocks.push((&cigar[group_start..idx], ch));
        }
        group_start = idx + 1;
    }

    if group_start < cigar.len() {
        structural.get_or_insert_with(|| {
            format!("trailing length '{}' has no operation", &cigar[group_start..])
        });
    }

    if observed.iter().any(|letter| CigarOp::try_from(*letter).is_err()) {
        return Err(CigarError::InvalidAlignmentAlphabet {
            cigar: cigar.to_string(),
        });
    }

    if let Some(reason) = structural {
        return Err(malformed(reason));
    }

    let mut runs = Vec::with_capacity(blocks.len());
    for (digits, letter) in blocks {
        let len = digits.parse::<u32>().map_err(|e| {
            malformed(format!("run length '{}' is not a valid length: {}", digits, e))
        })?;

        let op = CigarOp::try_from(letter).map_err(|_| CigarError::InvalidAlignmentAlphabet {
            cigar: cigar.to_string(),
        })?;

        runs.push(Run::new(len, op));
    }

    if runs.iter().any(|run| run.len == 0) {
        return Err(CigarError::ZeroLengthRun {
            cigar: cigar.to_string(),
        });
    }

    Ok(runs)
}
