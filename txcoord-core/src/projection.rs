use log::debug;

use crate::errors::{CigarError, Result};
use crate::models::{Alignment, CigarOp};

///
/// Sum of the lengths of all `M` and `I` runs. `D` runs contribute nothing.
///
pub fn transcript_length(alignment: &Alignment) -> u64 {
    alignment.transcript_length()
}

///
/// Find the genome coordinate of a transcript coordinate.
///
/// Runs are walked in order starting from `anchor`. `M` runs advance both
/// axes, `D` runs advance only the genome, `I` runs advance only the
/// transcript. The walk stops at the first `M` or `I` run whose end reaches
/// `target`; on an `M` run the overshoot past `target` is taken back off the
/// genome position. If no run stops the walk, the accumulated genome
/// position is returned.
///
/// # Arguments
/// - anchor: genome coordinate of the first base of the alignment
/// - target: transcript coordinate to project
/// - alignment: the transcript-to-genome alignment
///
/// # Errors
/// [CigarError::CoordinateOutOfRange] if `target` is greater than the
/// transcript length. A target equal to the transcript length is valid.
/// [CigarError::GenomeCoordinateOverflow] if the projected coordinate does
/// not fit in an `i64`.
pub fn project(anchor: i64, target: u64, alignment: &Alignment) -> Result<i64> {
    let total_tx_length = transcript_length(alignment);
    if target > total_tx_length {
        return Err(CigarError::CoordinateOutOfRange {
            coordinate: target,
            transcript_length: total_tx_length,
        });
    }

    let mut tx_pos: u64 = 0;
    let mut genome_pos = anchor;

    let advance = |genome_pos: i64, step: u64| {
        i64::try_from(step)
            .ok()
            .and_then(|step| genome_pos.checked_add(step))
            .ok_or(CigarError::GenomeCoordinateOverflow { anchor })
    };

    for run in alignment {
        let len = u64::from(run.len);
        match run.op {
            CigarOp::Match => {
                tx_pos += len;
                if tx_pos >= target {
                    // only the part of the run up to the target moves the genome position
                    genome_pos = advance(genome_pos, len - (tx_pos - target))?;
                    break;
                }
                genome_pos = advance(genome_pos, len)?;
            }
            CigarOp::Deletion => {
                genome_pos = advance(genome_pos, len)?;
            }
            CigarOp::Insertion => {
                tx_pos += len;
                if tx_pos >= target {
                    break;
                }
            }
        }
    }

    debug!(
        "Projected transcript coordinate {} onto genome coordinate {} (anchor {}, alignment {})",
        target, genome_pos, anchor, alignment
    );

    Ok(genome_pos)
}

///
/// Tokenize `cigar` and project `target` in one step.
///
pub fn project_str(anchor: i64, target: u64, cigar: &str) -> Result<i64> {
    let alignment: Alignment = cigar.parse()?;
    project(anchor, target, &alignment)
}
