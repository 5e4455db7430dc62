//! Single-step update rules with periodic wrap.
//!
//! Both stencils take the level they read from and the level they write,
//! each holding `N + 1` values where index `N` duplicates index `0`. The left
//! neighbor of index `0` is index `N − 1`, and the written level always ends
//! with `next[N] = next[0]`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// FTCS step used once to produce time level 1 from time level 0.
///
/// ```text
/// next[j] = previous[j] − ½·c·(previous[j+1] − previous[j−1])
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or hold fewer than two values.
pub fn bootstrap(previous: &[f64], next: &mut [f64], courant: f64) {
    let n = periodic_intervals(previous, next);
    fill(next, |j| {
        let left = previous[west(j, n)];
        previous[j] - 0.5 * courant * (previous[j + 1] - left)
    });
}

/// FTBS upwind step for positive advection speed.
///
/// ```text
/// next[j] = current[j] − c·(current[j] − current[j−1])
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or hold fewer than two values.
pub fn advance(current: &[f64], next: &mut [f64], courant: f64) {
    let n = periodic_intervals(current, next);
    fill(next, |j| {
        let left = current[west(j, n)];
        current[j] - courant * (current[j] - left)
    });
}

fn periodic_intervals(source: &[f64], next: &[f64]) -> usize {
    assert_eq!(
        source.len(),
        next.len(),
        "time levels must have the same length"
    );
    assert!(source.len() >= 2, "a periodic level needs at least two points");
    source.len() - 1
}

/// Index of the left neighbor of `j` on a periodic grid with `n` intervals.
fn west(j: usize, n: usize) -> usize {
    if j == 0 { n - 1 } else { j - 1 }
}

/// Writes `next[0..N]` from `update` and copies `next[0]` into `next[N]`.
///
/// `update` reads only the source level, so every index is independent.
fn fill<F>(next: &mut [f64], update: F)
where
    F: Fn(usize) -> f64 + Sync,
{
    let n = next.len() - 1;

    #[cfg(feature = "parallel")]
    next[..n]
        .par_iter_mut()
        .enumerate()
        .for_each(|(j, value)| *value = update(j));

    #[cfg(not(feature = "parallel"))]
    next[..n]
        .iter_mut()
        .enumerate()
        .for_each(|(j, value)| *value = update(j));

    next[n] = next[0];
}
