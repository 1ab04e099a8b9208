//! Clone-based infinite looping.
//!
//! With a pad count `g`, the strip is laid out as
//! `[clone(n-g) .. clone(n-1), slide(0) .. slide(n-1), clone(0) .. clone(g-1)]`.
//! The controller works in this padded index space; logical indexes are `padded - g`, wrapped
//! into the real slide range so clone slots report the slide they show.
//! Navigation that lands on a clone is re-pointed to the equivalent real slide once the
//! animation finishes (see [`seam_target`]).

use alloc::vec::Vec;

use crate::Direction;

/// Where a cloned slide is inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClonePosition {
    /// Appended after the last slide.
    End,
    /// Inserted before the first slide.
    Start,
}

/// One clone step. `source` is the index of the slide to clone *at the time the step runs*,
/// so applying the steps in order against a live slide list is always correct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloneOp {
    pub source: usize,
    pub at: ClonePosition,
}

/// Clone steps that pad `count` real slides with `pad` clones on each side.
///
/// Leading slides are appended first, then trailing slides are prepended last-first so the
/// prepended block keeps the original order.
pub fn clone_ops(count: usize, pad: usize) -> Vec<CloneOp> {
    let pad = pad.min(count);
    let mut ops = Vec::with_capacity(pad * 2);
    for original in 0..pad {
        ops.push(CloneOp {
            source: original,
            at: ClonePosition::End,
        });
    }
    for k in 0..pad {
        let original = count - 1 - k;
        // Every earlier prepend shifted the originals right by one.
        ops.push(CloneOp {
            source: original + k,
            at: ClonePosition::Start,
        });
    }
    ops
}

pub fn padded_len(count: usize, pad: usize) -> usize {
    count.saturating_add(pad.saturating_mul(2))
}

pub fn to_padded(logical: usize, pad: usize) -> usize {
    logical.saturating_add(pad)
}

/// Maps a padded index to the real slide it shows. `count` is the number of real slides; `0`
/// (nothing measured yet) falls back to plain subtraction.
pub fn to_logical(padded: usize, pad: usize, count: usize) -> usize {
    if count == 0 {
        return padded.saturating_sub(pad);
    }
    (padded % count + count - pad % count) % count
}

/// Step target moving forward in group mode.
///
/// Skips to the next multiple of `pad`, unless the current group is the last full one, in
/// which case it advances by `slides_to_scroll`.
pub fn forward_target(index: usize, len: usize, pad: usize, slides_to_scroll: usize) -> isize {
    if pad == 0 || index + pad * 2 == len {
        return (index as isize).saturating_add(step_len(slides_to_scroll));
    }
    (index + (pad - index % pad)) as isize
}

/// Step target moving backward in group mode (symmetric to [`forward_target`]).
pub fn backward_target(index: usize, pad: usize, slides_to_scroll: usize) -> isize {
    if pad > 0 && index % pad != 0 {
        return (index - index % pad) as isize;
    }
    (index as isize).saturating_sub(step_len(slides_to_scroll))
}

/// `slides_to_scroll` as a signed step, saturating instead of wrapping.
pub(crate) fn step_len(slides_to_scroll: usize) -> isize {
    isize::try_from(slides_to_scroll).unwrap_or(isize::MAX)
}

/// If `next_index` lies on a clone boundary, returns the real slide it stands in for.
///
/// Forward steps re-point to the first real slide; everything else (backward steps and
/// jumps) re-points to the first slide of the trailing group.
pub fn seam_target(
    next_index: usize,
    len: usize,
    pad: usize,
    direction: Option<Direction>,
) -> Option<usize> {
    if pad == 0 || len < pad * 2 {
        return None;
    }
    let on_seam = next_index == len - pad || next_index == len - len % pad || next_index == 0;
    if !on_seam {
        return None;
    }
    Some(match direction {
        Some(Direction::Forward) => pad,
        _ => len - pad * 2,
    })
}
