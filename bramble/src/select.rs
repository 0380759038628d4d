// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial-sort selection: Floyd–Rivest rank selection and the grouped
//! partitioner built on it.

use alloc::vec;
use core::cmp::Ordering;

use crate::math;

/// Range length above which selection first narrows to a sampled sub-range.
const SAMPLE_CUTOFF: usize = 600;

/// Rearrange `arr[left..=right]` so the element of rank `k` lands at index
/// `k`, with everything before it ordered `<=` and everything after `>=`.
///
/// Floyd–Rivest selection: for ranges longer than a fixed cutoff the range
/// is first narrowed around rank `k` using a Gaussian bound on sampling
/// error, which keeps expected comparisons linear even for large inputs.
/// The narrowing recursion is bounded by the expected O(log n) shrink depth;
/// the partition itself is iterative.
pub fn select<T, F>(arr: &mut [T], mut left: usize, mut right: usize, k: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(
        left <= k && k <= right && right < arr.len(),
        "rank must lie inside the range"
    );
    while right > left {
        if right - left > SAMPLE_CUTOFF {
            let n = (right - left + 1) as f64;
            let m = (k - left + 1) as f64;
            let z = math::ln(n);
            let s = 0.5 * math::exp(2.0 * z / 3.0);
            let sign = if m - n / 2.0 < 0.0 { -1.0 } else { 1.0 };
            let sd = 0.5 * math::sqrt(z * s * (n - s) / n) * sign;
            let kf = k as f64;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "clamped into the current index range before the cast"
            )]
            let new_left = (kf - m * s / n + sd).max(left as f64) as usize;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "clamped into the current index range before the cast"
            )]
            let new_right = (kf + (n - m) * s / n + sd).min(right as f64) as usize;
            select(arr, new_left, new_right, k, cmp);
        }

        // Park the rank-k candidate at `left` and partition around it.
        arr.swap(left, k);
        let mut i = left;
        let mut j = right + 1;
        loop {
            loop {
                i += 1;
                if i > right || cmp(&arr[i], &arr[left]) != Ordering::Less {
                    break;
                }
            }
            loop {
                j -= 1;
                if cmp(&arr[j], &arr[left]) != Ordering::Greater {
                    break;
                }
            }
            if i >= j {
                break;
            }
            arr.swap(i, j);
        }
        arr.swap(left, j);

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j.saturating_sub(1);
        }
    }
}

/// Partition `arr` into contiguous groups of roughly `group` elements that
/// are fully ordered *between* groups but unordered *within* a group.
///
/// Repeatedly bisects the range at group-aligned midpoints and ranks the
/// midpoint with [`select`], for an average-linear total cost. This is the
/// primitive the bulk loader tiles with, avoiding a full sort.
pub fn multi_select<T, F>(arr: &mut [T], group: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.is_empty() || group == 0 {
        return;
    }
    let mut stack = vec![(0_usize, arr.len() - 1)];
    while let Some((left, right)) = stack.pop() {
        if right - left <= group {
            continue;
        }
        let mid = left + (right - left).div_ceil(2 * group) * group;
        select(arr, left, right, mid, cmp);
        stack.push((left, mid));
        stack.push((mid, right));
    }
}
