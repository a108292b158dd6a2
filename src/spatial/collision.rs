//! Axis-aligned overlap queries between entity groups
//!
//! Groups are plain slices and every query walks them in insertion order, so
//! results are reproducible frame to frame. With at most a few dozen live
//! entities a brute-force pass beats maintaining a broadphase.

use crate::entity::Bounded;

/// Every `(a, b)` index pair whose boxes intersect, ordered by `a` then `b`
pub fn overlapping<A: Bounded, B: Bounded>(group_a: &[A], group_b: &[B]) -> Vec<(usize, usize)> {
    let bounds_b: Vec<_> = group_b.iter().map(Bounded::bounds).collect();
    let mut pairs = Vec::new();
    for (ia, a) in group_a.iter().enumerate() {
        let box_a = a.bounds();
        for (ib, box_b) in bounds_b.iter().enumerate() {
            if box_a.intersects(box_b) {
                pairs.push((ia, ib));
            }
        }
    }
    pairs
}

/// Index of the first member of `group` touching `item`
pub fn first_overlap<A: Bounded, B: Bounded>(item: &A, group: &[B]) -> Option<usize> {
    let bounds = item.bounds();
    group.iter().position(|other| bounds.intersects(&other.bounds()))
}

/// Whether `item` touches any member of `group`
pub fn any_overlap<A: Bounded, B: Bounded>(item: &A, group: &[B]) -> bool {
    first_overlap(item, group).is_some()
}

/// Remove every member of `group_a` that touches any member of `group_b`
///
/// Survivors keep their relative order. The removed members are returned in
/// their original order, each exactly once no matter how many members of
/// `group_b` it touched.
pub fn remove_overlapping<A: Bounded, B: Bounded>(group_a: &mut Vec<A>, group_b: &[B]) -> Vec<A> {
    let hit: Vec<bool> = group_a.iter().map(|a| any_overlap(a, group_b)).collect();
    if !hit.contains(&true) {
        return Vec::new();
    }

    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(group_a.len());
    for (item, was_hit) in group_a.drain(..).zip(hit) {
        if was_hit {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *group_a = kept;
    removed
}
