//! Duty-cycle resolution and storage width.
//!
//! A [`Resolution`] fixes `duty_max` for a deployment and picks the
//! narrowest unsigned integer ([`DutyWord`]) that can hold it:
//!
//! | Resolution | duty_max | Storage | Datagram size |
//! |------------|----------|---------|---------------|
//! | [`Bits8`]  | 255      | `u8`    | 4 bytes       |
//! | [`Bits10`] | 1023     | `u16`   | 8 bytes       |
//!
//! The same storage type is used in memory and on the UDP wire, so the two
//! cannot drift apart.

use core::fmt;

/// Unsigned integer used to store a duty cycle.
pub trait DutyWord: Copy + Eq + Ord + Default + fmt::Debug + fmt::Display + Send + 'static {
    /// Size of one value on the wire.
    const BYTES: usize;

    /// Keep the low-order bits of `value` that fit in this word.
    fn truncate(value: u32) -> Self;

    fn to_u32(self) -> u32;

    /// Decode from native byte order.  `None` unless `bytes.len()` equals
    /// [`Self::BYTES`].
    fn from_ne_slice(bytes: &[u8]) -> Option<Self>;
}

impl DutyWord for u8 {
    const BYTES: usize = 1;

    fn truncate(value: u32) -> Self {
        value as u8
    }

    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    fn from_ne_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(u8::from_ne_bytes)
    }
}

impl DutyWord for u16 {
    const BYTES: usize = 2;

    fn truncate(value: u32) -> Self {
        value as u16
    }

    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    fn from_ne_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(u16::from_ne_bytes)
    }
}

/// Compile-time PWM resolution shared by every channel of a deployment.
pub trait Resolution: Copy + fmt::Debug + Send + 'static {
    /// Narrowest storage able to represent `[0, duty_max]`.
    type Duty: DutyWord;

    /// Timer resolution in bits; `duty_max = 2^BITS - 1`.
    const BITS: u32;

    /// Largest legal duty value.
    fn duty_max() -> Self::Duty;

    /// Mid-scale duty, used when no initial duty is configured.
    fn default_duty() -> Self::Duty {
        Self::Duty::truncate(Self::duty_max().to_u32() / 2)
    }

    /// Reduce an arbitrary request value to a legal duty by keeping its
    /// low-order bits.  Values above `duty_max` wrap, they never clamp.
    /// Negative values wrap the same way as their two's-complement bit
    /// pattern.
    fn wrap(value: i32) -> Self::Duty {
        Self::Duty::truncate(value as u32 & Self::duty_max().to_u32())
    }

    /// Convert a checked `u32`, rejecting anything above `duty_max`.
    fn checked(value: u32) -> Option<Self::Duty> {
        (value <= Self::duty_max().to_u32()).then(|| Self::Duty::truncate(value))
    }
}

/// 8-bit resolution: duty in `[0, 255]`, stored as `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits8;

impl Resolution for Bits8 {
    type Duty = u8;
    const BITS: u32 = 8;

    fn duty_max() -> u8 {
        u8::MAX
    }
}

/// 10-bit resolution: duty in `[0, 1023]`, stored as `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits10;

impl Resolution for Bits10 {
    type Duty = u16;
    const BITS: u32 = 10;

    fn duty_max() -> u16 {
        (1 << Self::BITS) - 1
    }
}
