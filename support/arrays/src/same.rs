use alloc::string::{String, ToString};
use core::fmt::Display;

use hashbrown::HashSet;

/// Returns `true` if both slices have the same length and every element of
/// `array_a` renders (via `Display`) the same as some element of `array_b`.
///
/// Order is ignored. Matches are not consumed, so repeated elements in
/// `array_a` may all match a single element of `array_b`:
///
/// ```
/// use orion_arrays::is_same;
///
/// assert!(is_same(&[1, 2], &[2, 1]));
/// assert!(!is_same(&[1, 2], &[1]));
/// assert!(is_same(&[1, 1], &[1, 2]));
/// assert!(is_same(&[1, 2], &["2", "1"]));
/// ```
pub fn is_same<A: Display, B: Display>(array_a: &[A], array_b: &[B]) -> bool {
    if array_a.len() != array_b.len() {
        tracing::trace!(
            len_a = array_a.len(),
            len_b = array_b.len(),
            "length mismatch"
        );
        return false;
    }

    let rendered: HashSet<String> = array_b.iter().map(ToString::to_string).collect();
    array_a.iter().all(|item| rendered.contains(&item.to_string()))
}
