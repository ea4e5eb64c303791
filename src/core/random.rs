//! Uniform random digit strings for account numbers and ID bodies.

use rand::Rng;

/// Widest body that still fits `10^width - 1` in a `u64`.
pub const MAX_RANDOM_WIDTH: usize = 19;

/// Draw a uniform integer in `[0, 10^width - 1]`, zero-padded to `width` digits.
///
/// `width` is capped at [`MAX_RANDOM_WIDTH`] (19): a larger request returns
/// a 19-digit string, not a `width`-digit one. Debug builds assert on it.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, width: usize) -> String {
    debug_assert!(
        width <= MAX_RANDOM_WIDTH,
        "random_digits width {width} exceeds {MAX_RANDOM_WIDTH}"
    );
    let width = width.min(MAX_RANDOM_WIDTH);
    if width == 0 {
        return String::new();
    }
    let upper = 10u64.pow(width as u32);
    let value = rng.gen_range(0..upper);
    format!("{value:0>width$}")
}
