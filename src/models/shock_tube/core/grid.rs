//! Evenly spaced sample grids and the minimum-`|τ|` reduction shared by the
//! parameter searches.

/// Yields `n` evenly spaced points from `lo` to `hi` inclusive.
///
/// A single point yields `lo`; zero points yield nothing.
pub(super) fn linspace(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let last = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| lo + (hi - lo) * (i as f64) / last)
}

/// Returns the item with the smallest `|τ|`, ignoring NaN.
///
/// Ties keep the earliest item.
pub(super) fn min_abs_tau<T>(items: &[T], tau: impl Fn(&T) -> f64) -> Option<&T> {
    items
        .iter()
        .filter(|item| !tau(*item).is_nan())
        .fold(None, |best: Option<&T>, item| match best {
            Some(b) if tau(b).abs() <= tau(item).abs() => Some(b),
            _ => Some(item),
        })
}
