//! Most frequent elements of a sequence, counted with a [`ChainingMap`].

use std::cmp::Ordering;

use crate::{ChainingMap, DynamicArray};

/// Returns the most frequent strings of `sequence` and how often each occurs.
///
/// Ties are all returned, in the order the counting table's buckets are
/// scanned. That order depends on the hash function and capacity, so only the
/// set of modes is stable. An empty sequence yields no modes and frequency 0.
pub fn find_mode<I, S>(sequence: I) -> (DynamicArray<String>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: ChainingMap<usize> = ChainingMap::new();
    let mut length: usize = 0;
    for item in sequence {
        counts.key_val_mode_helper(item.as_ref());
        length = length.saturating_add(1);
    }

    // Shorter chains for the scan below
    counts.resize_table(length.saturating_mul(2));

    let mut modes = DynamicArray::new();
    let mut frequency = None;
    for (key, &count) in counts.iter() {
        match frequency.map(|best: usize| count.cmp(&best)) {
            None | Some(Ordering::Greater) => {
                modes = DynamicArray::new();
                modes.append(key.to_string());
                frequency = Some(count);
            }
            Some(Ordering::Equal) => modes.append(key.to_string()),
            Some(Ordering::Less) => {}
        }
    }

    (modes, frequency.unwrap_or(0))
}
