//! Floating-point rounding that works with and without `std`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("wrap-virtualizer needs either the `std` or the `libm` feature for float rounding");

#[cfg(feature = "std")]
#[inline]
pub(crate) fn floor(v: f64) -> f64 {
    v.floor()
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn ceil(v: f64) -> f64 {
    v.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn floor(v: f64) -> f64 {
    libm::floor(v)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn ceil(v: f64) -> f64 {
    libm::ceil(v)
}

/// `true` for finite values strictly greater than zero.
#[inline]
pub(crate) fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Replaces negative and NaN values with zero. Infinities are preserved.
#[inline]
pub(crate) fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}

/// Converts a non-negative line/item count to `usize`. `as` saturates, NaN maps to zero.
#[inline]
pub(crate) fn to_count(v: f64) -> usize {
    if v > 0.0 { v as usize } else { 0 }
}
