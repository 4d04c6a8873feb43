// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging point sequences into visual lines and ordering those lines top to bottom.
//!
//! A *line* here is a slice of points whose horizontal coordinate never decreases. The engine
//! is generic over the point type: a [`LineMetric`] supplies the horizontal and vertical
//! comparisons, the projection used to compare a point against a line it does not touch, and
//! the distance used to pick which lines to join first.
//!
//! [`merge_and_sort_lines`] works in three stages:
//!
//! 1. Build an "is above" relation between every pair of input lines.
//! 2. Greedily join horizontally adjacent lines that have no above/below relationship, nearest
//!    pair first, transferring their relations to the joined line.
//! 3. Order the surviving lines by how many others each one reaches in the relation.

use alloc::vec;
use alloc::vec::Vec;
use core::slice;

use crate::relation::EndoRelation;

/// Geometry of the points a line is made of.
pub trait LineMetric<P> {
    /// Returns `true` if `a` lies strictly left of `b`.
    fn is_point_left(&self, a: &P, b: &P) -> bool;

    /// Returns `true` if `a` lies strictly below `b`.
    fn is_point_below(&self, a: &P, b: &P) -> bool;

    /// Projects `point` onto the segment `from → to` at the point's horizontal position.
    fn x_proj(&self, from: &P, to: &P, point: &P) -> P;

    /// Distance between the end of one line and the start of another.
    fn dist(&self, a: &P, b: &P) -> f64;
}

/// Vertical position of a point relative to a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalOrder {
    /// The point is above the line.
    Above,
    /// The point is below the line.
    Below,
}

/// Returns `true` if `l1` ends strictly left of where `l2` starts.
///
/// An empty line is right of (and left of) everything.
pub fn is_right<P, M: LineMetric<P> + ?Sized>(metric: &M, l1: &[P], l2: &[P]) -> bool {
    match (l1.last(), l2.first()) {
        (Some(last), Some(first)) => metric.is_point_left(last, first),
        _ => true,
    }
}

/// Returns `true` if the lines do not overlap horizontally.
pub fn is_aside<P, M: LineMetric<P> + ?Sized>(metric: &M, l1: &[P], l2: &[P]) -> bool {
    is_right(metric, l1, l2) || is_right(metric, l2, l1)
}

/// Returns `true` if `l2` can be appended to `l1` without breaking monotonicity.
///
/// Unlike [`is_right`], lines that meet at the same horizontal position qualify.
fn meets<P, M: LineMetric<P> + ?Sized>(metric: &M, l1: &[P], l2: &[P]) -> bool {
    match (l1.last(), l2.first()) {
        (Some(last), Some(first)) => !metric.is_point_left(first, last),
        _ => true,
    }
}

/// Compares `point` against the first segment of `line` it horizontally overlaps.
///
/// A segment whose projection is level with the point does not decide; the scan moves on.
/// Returns `None` when no segment decides. Single-point lines act as one degenerate segment.
pub fn point_compare_line<P, M: LineMetric<P> + ?Sized>(
    metric: &M,
    point: &P,
    line: &[P],
) -> Option<VerticalOrder> {
    let segments: &[P] = if line.len() == 1 { line } else { &[] };
    let singles = segments.iter().map(slice::from_ref);
    for segment in line.windows(2).chain(singles) {
        if is_aside(metric, slice::from_ref(point), segment) {
            continue;
        }
        let (from, to) = (&segment[0], &segment[segment.len() - 1]);
        let projected = metric.x_proj(from, to, point);
        if metric.is_point_below(point, &projected) {
            return Some(VerticalOrder::Below);
        }
        if metric.is_point_below(&projected, point) {
            return Some(VerticalOrder::Above);
        }
    }
    None
}

/// Returns `true` if `l1` is above `l2`.
///
/// The first point of either line that can be compared against the other line decides. Lines
/// that are strictly apart horizontally are never above one another; neither are lines with no
/// decisive point. Lines sharing an edge coordinate still compare at that coordinate, so boxes
/// touching at a corner are ordered while level boxes touching side by side are not.
pub fn is_above<P, M: LineMetric<P> + ?Sized>(metric: &M, l1: &[P], l2: &[P]) -> bool {
    if is_aside(metric, l1, l2) {
        return false;
    }
    for point in l1 {
        if let Some(order) = point_compare_line(metric, point, l2) {
            return order == VerticalOrder::Above;
        }
    }
    for point in l2 {
        if let Some(order) = point_compare_line(metric, point, l1) {
            return order == VerticalOrder::Below;
        }
    }
    false
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    left: usize,
    right: usize,
    distance: f64,
}

/// Joins horizontally adjacent lines and sorts the result top to bottom.
///
/// Every output line keeps the horizontal order of its points. Lines with an established
/// above/below relationship, direct or transitive, are never joined. Lines that no relation
/// orders keep their relative input order.
pub fn merge_and_sort_lines<P, M>(lines: Vec<Vec<P>>, metric: &M) -> Vec<Vec<P>>
where
    P: Clone,
    M: LineMetric<P> + ?Sized,
{
    let input_len = lines.len();
    if input_len == 0 {
        return Vec::new();
    }

    let mut above = EndoRelation::from_binary_relation(0..input_len, |a, b| {
        is_above(metric, &lines[a], &lines[b])
    });

    let mut candidates = Vec::new();
    for a in 0..input_len {
        for b in a + 1..input_len {
            let (la, lb) = (&lines[a], &lines[b]);
            if la.is_empty() || lb.is_empty() || above.has_path_or_reverse_path_between(a, b) {
                continue;
            }
            let (left, right) = if meets(metric, la, lb) {
                (a, b)
            } else if meets(metric, lb, la) {
                (b, a)
            } else {
                continue;
            };
            let (Some(tail), Some(head)) = (lines[left].last(), lines[right].first()) else {
                continue;
            };
            candidates.push(Candidate {
                left,
                right,
                distance: metric.dist(tail, head),
            });
        }
    }
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut slab: Vec<Option<Vec<P>>> = lines.into_iter().map(Some).collect();
    let mut merged_into: Vec<Option<usize>> = vec![None; input_len];
    let mut done_left = vec![false; input_len];
    let mut done_right = vec![false; input_len];
    let mut live: Vec<usize> = (0..input_len).collect();

    let resolve = |merged_into: &[Option<usize>], mut id: usize| {
        while let Some(next) = merged_into[id] {
            id = next;
        }
        id
    };

    for candidate in candidates {
        if done_left[candidate.left] || done_right[candidate.right] {
            continue;
        }
        let left = resolve(&merged_into, candidate.left);
        let right = resolve(&merged_into, candidate.right);
        if above.has_path_or_reverse_path_between(left, right) {
            continue;
        }
        let (Some(mut joined), Some(tail)) = (slab[left].take(), slab[right].take()) else {
            continue;
        };
        let boundary = match (joined.last(), tail.first()) {
            (Some(a), Some(b)) => vec![a.clone(), b.clone()],
            _ => Vec::new(),
        };
        joined.extend(tail);

        let id = slab.len();
        slab.push(Some(joined));
        merged_into.push(None);
        merged_into[left] = Some(id);
        merged_into[right] = Some(id);
        above.merge(id, &[left, right]);

        // Relations that only show through the new join point.
        for &other in &live {
            if other == left || other == right {
                continue;
            }
            let Some(other_line) = slab[other].as_deref() else {
                continue;
            };
            if is_above(metric, other_line, &boundary) {
                above.add(other, id);
            }
            if is_above(metric, &boundary, other_line) {
                above.add(id, other);
            }
        }

        live.retain(|&k| k != left && k != right);
        live.push(id);
        done_left[candidate.left] = true;
        done_right[candidate.right] = true;
    }

    let mut graded: Vec<(usize, usize)> = live
        .iter()
        .map(|&id| {
            let grade = live
                .iter()
                .filter(|&&other| other != id && above.has_path_between(id, other))
                .count();
            (grade, id)
        })
        .collect();
    graded.sort_by(|a, b| b.0.cmp(&a.0));

    let out: Vec<Vec<P>> = graded
        .into_iter()
        .filter_map(|(_, id)| slab[id].take())
        .collect();
    log::debug!("merged {} lines into {}", input_len, out.len());
    out
}

/// Finds the first point matching `pred`, as `(line, index)`.
pub fn find_index_2d<P>(
    lines: &[Vec<P>],
    mut pred: impl FnMut(&P) -> bool,
) -> Option<(usize, usize)> {
    lines
        .iter()
        .enumerate()
        .find_map(|(row, line)| line.iter().position(&mut pred).map(|col| (row, col)))
}

/// Result of stepping through lines with [`wrap_lines_add_x_index_2d`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStep {
    /// The step landed on `lines[row][col]`.
    Inside {
        /// Line index.
        row: usize,
        /// Point index within the line.
        col: usize,
    },
    /// The step ran past the start of the first line.
    BeforeFirst,
    /// The step ran past the end of the last line.
    AfterLast,
}

impl LineStep {
    /// The landing position, if the step stayed within the lines.
    pub fn inside(self) -> Option<(usize, usize)> {
        match self {
            Self::Inside { row, col } => Some((row, col)),
            _ => None,
        }
    }
}

/// Moves `delta` points from `(row, col)`, continuing onto the next or previous line when the
/// current one runs out.
pub fn wrap_lines_add_x_index_2d<P>(
    lines: &[Vec<P>],
    (row, col): (usize, usize),
    delta: isize,
) -> LineStep {
    if row >= lines.len() {
        return LineStep::AfterLast;
    }
    let mut row = row;
    let mut col = col as isize + delta;
    loop {
        if col < 0 {
            if row == 0 {
                return LineStep::BeforeFirst;
            }
            row -= 1;
            col += lines[row].len() as isize;
        } else if let Ok(ix) = usize::try_from(col) {
            let len = lines[row].len();
            if ix < len {
                return LineStep::Inside { row, col: ix };
            }
            if row + 1 >= lines.len() {
                return LineStep::AfterLast;
            }
            col -= len as isize;
            row += 1;
        } else {
            return LineStep::AfterLast;
        }
    }
}
