use rand::Rng;

/// Generate a random `f64` in `[low, high)`, or `low` when the range is empty.
///
/// `Rng::gen_range` panics on an empty range, but a configuration such as
/// `weight_min == weight_max` or `r1_min == r1_max` is legitimate.
#[inline]
pub(crate) fn f64_range<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.gen::<f64>() * (high - low)
}
