//! Comparator-driven sort over a contiguous range of handles.
//!
//! The list does not sort values in place. It gathers its node indices
//! into a slice, sorts the slice here with a comparator that looks through
//! each index at the element, and relinks the chain in the resulting
//! order. Handles are small and `Copy`, so this module shuffles handles
//! and never touches elements.

/// Runs shorter than this are sorted by insertion before merging.
const RUN: usize = 16;

/// Sorts `v` so that no element is `is_less` than the one before it.
///
/// `is_less` must be a strict weak ordering. The sort is stable: elements
/// that compare equal keep their relative order. Short runs
/// are insertion-sorted, then merged bottom-up through one scratch buffer
/// of `v.len()` handles.
///
/// # Example
///
/// ```
/// let mut v = [5u32, 1, 4, 1, 3];
/// nexus_list::sort::sort_by(&mut v, |a, b| a < b);
/// assert_eq!(v, [1, 1, 3, 4, 5]);
/// ```
pub fn sort_by<H, F>(v: &mut [H], mut is_less: F)
where
    H: Copy,
    F: FnMut(&H, &H) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for run in v.chunks_mut(RUN) {
        insertion_sort(run, &mut is_less);
    }
    if len <= RUN {
        return;
    }

    let mut scratch = v.to_vec();
    let mut sorted_in_scratch = false;
    let mut width = RUN;

    while width < len {
        if sorted_in_scratch {
            merge_pass(&scratch, v, width, &mut is_less);
        } else {
            merge_pass(v, &mut scratch, width, &mut is_less);
        }
        sorted_in_scratch = !sorted_in_scratch;
        width = width.saturating_mul(2);
    }

    if sorted_in_scratch {
        v.copy_from_slice(&scratch);
    }
}

fn insertion_sort<H, F>(v: &mut [H], is_less: &mut F)
where
    H: Copy,
    F: FnMut(&H, &H) -> bool,
{
    for i in 1..v.len() {
        let tmp = v[i];
        if !is_less(&tmp, &v[i - 1]) {
            continue;
        }

        let mut j = i;
        while j > 0 && is_less(&tmp, &v[j - 1]) {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = tmp;
    }
}

/// Merges adjacent sorted runs of `width` from `src` into `dst`.
fn merge_pass<H, F>(src: &[H], dst: &mut [H], width: usize, is_less: &mut F)
where
    H: Copy,
    F: FnMut(&H, &H) -> bool,
{
    let len = src.len();
    let mut start = 0;

    while start < len {
        let mid = (start + width).min(len);
        let end = (start + 2 * width).min(len);

        let (mut l, mut r, mut out) = (start, mid, start);
        while l < mid && r < end {
            // Take from the right run only when strictly less: ties keep
            // left-run order.
            if is_less(&src[r], &src[l]) {
                dst[out] = src[r];
                r += 1;
            } else {
                dst[out] = src[l];
                l += 1;
            }
            out += 1;
        }
        dst[out..out + (mid - l)].copy_from_slice(&src[l..mid]);
        out += mid - l;
        dst[out..out + (end - r)].copy_from_slice(&src[r..end]);

        start = end;
    }
}
