//! LED model: duty-cycle resolution, single channels, and the fixed
//! four-channel registry.

pub mod channel;
pub mod registry;
pub mod resolution;

pub use channel::{Channel, PWM_FREQUENCY_RANGE, set_pwm_frequency};
pub use registry::{CHANNEL_COUNT, ChannelId, ChannelRegistry, Identity};
pub use resolution::{Bits8, Bits10, DutyWord, Resolution};

/// Resolution the firmware image is built with.
#[cfg(not(feature = "duty-10bit"))]
pub type BoardResolution = Bits8;

/// Resolution the firmware image is built with.
#[cfg(feature = "duty-10bit")]
pub type BoardResolution = Bits10;
