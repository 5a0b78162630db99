//! Lexicographic permutation successor.

/// Rearranges `perm` into its lexicographic successor.
///
/// Finds the rightmost ascent `perm[i] < perm[i + 1]`, swaps `perm[i]` with
/// the smallest larger element to its right, then reverses the suffix after
/// `i`. Returns `false` and leaves `perm` unchanged when it is already the
/// last (descending) permutation. Slices shorter than two elements have no
/// successor.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::next_permutation;
///
/// let mut p = [0, 2, 1];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [1, 0, 2]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// ```
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let Some(i) = (0..perm.len() - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };

    // The suffix after i is descending, so the rightmost larger element is
    // the smallest one that is still larger.
    let j = (i + 1..perm.len())
        .rev()
        .find(|&j| perm[j] > perm[i])
        .unwrap_or(i + 1);

    perm.swap(i, j);
    perm[i + 1..].reverse();
    true
}
