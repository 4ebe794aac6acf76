//! Permutation operators for stop orders.
//!
//! - [`order_crossover`] (OX): keeps a segment of one parent in place and
//!   fills the rest in the other parent's order
//! - [`swap_mutation`]: exchanges two random positions
//! - [`random_permutation`]: uniform shuffle of `0..n`
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::seq::SliceRandom;
use rand::Rng;

/// Order crossover producing a single child.
///
/// 1. Select a random segment `[start, end]` of `parent_a`
/// 2. Copy the segment to the child at the same positions
/// 3. Fill the remaining positions, starting just after `end` and wrapping
///    around, with the stops of `parent_b` in `parent_b`'s order, skipping
///    any already placed
///
/// Both parents must be permutations of `0..n`.
///
/// # Panics
/// Panics if the parents have different lengths.
///
/// # Examples
///
/// ```
/// use u_tourplan::ga::operators::order_crossover;
/// use u_tourplan::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let mut child = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng);
/// child.sort();
/// assert_eq!(child, vec![0, 1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    if n < 2 {
        return parent_a.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    ox_child(parent_a, parent_b, start, end)
}

/// Builds the OX child for a fixed segment `[start, end]`.
fn ox_child(parent_a: &[usize], parent_b: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent_a.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = parent_a[i];
        placed[parent_a[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for &stop in parent_b {
        if placed[stop] {
            continue;
        }
        child[pos] = stop;
        placed[stop] = true;
        pos = (pos + 1) % n;
    }

    child
}

/// Swap mutation: exchange two uniformly random positions.
///
/// The two positions may coincide, leaving the order unchanged.
pub fn swap_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    order.swap(i, j);
}

/// Uniform random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
