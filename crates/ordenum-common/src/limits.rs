//! Centralized limits for ordenum.
//!
//! Enum domains themselves are unbounded: ordinals are `usize` and `EnumSet`
//! stores membership in a growable bit set. Only the integer bitmask codec is
//! bounded by the width of its backing integer.

/// Number of bits available to `EnumSet::to_bitmask` / `EnumSet::from_bitmask`.
///
/// A bitmask is a `u64`; bit `i` stands for the constant with ordinal `i`.
/// Domains with more constants than this fail with `EnumError::DomainTooLarge`
/// instead of being silently truncated.
pub const MAX_BITMASK_WIDTH: u32 = u64::BITS;

/// Returns `true` when a domain of `size` constants fits in a bitmask.
#[inline]
pub const fn fits_bitmask(size: usize) -> bool {
    size <= MAX_BITMASK_WIDTH as usize
}
