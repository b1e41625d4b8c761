//! GPIO / peripheral pin assignments for the LED controller board.
//!
//! Single source of truth for the default wiring.  A deployment can
//! override the pins through [`DeviceConfig`](crate::config::DeviceConfig).

// ---------------------------------------------------------------------------
// LED outputs (one LEDC channel each, shared timer)
// ---------------------------------------------------------------------------

pub const LED_RED_GPIO: i32 = 5;
pub const LED_GREEN_GPIO: i32 = 4;
pub const LED_BLUE_GPIO: i32 = 14;
pub const LED_WHITE_GPIO: i32 = 12;

/// Default wiring in channel order (red, green, blue, white).
pub const LED_GPIOS: [i32; 4] = [LED_RED_GPIO, LED_GREEN_GPIO, LED_BLUE_GPIO, LED_WHITE_GPIO];

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// Boot-time PWM frequency for all four outputs.
pub const LED_PWM_FREQ_HZ: u32 = 1_000;

/// LEDC timer shared by every LED channel.  Frequency is a property of
/// the timer, which is why it cannot be set per channel.
pub const LEDC_TIMER: u32 = 0;

/// First LEDC channel; LED `n` uses `LEDC_FIRST_CHANNEL + n`.
pub const LEDC_FIRST_CHANNEL: u32 = 0;
