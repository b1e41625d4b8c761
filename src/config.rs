//! Board configuration.
//!
//! Everything a deployment may change without touching code: wiring,
//! ports, the boot-time PWM frequency and the boot-time duty.  The
//! resolution itself is a build option (`duty-10bit` feature), not a
//! runtime setting.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::led::{CHANNEL_COUNT, PWM_FREQUENCY_RANGE};
use crate::pins;

/// Core device configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// GPIOs driving red, green, blue, white.
    pub pins: [i32; CHANNEL_COUNT],
    /// TCP port of the HTTP control API.
    pub http_port: u16,
    /// UDP port of the binary duty-cycle fast path.
    pub udp_port: u16,
    /// PWM frequency applied at boot (Hz).
    pub pwm_frequency_hz: u32,
    /// Duty every channel starts at; `None` means mid-scale.
    pub initial_duty: Option<u32>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            pins: pins::LED_GPIOS,
            http_port: 80,
            udp_port: 4210,
            pwm_frequency_hz: pins::LED_PWM_FREQ_HZ,
            initial_duty: None,
        }
    }
}

impl DeviceConfig {
    /// Parse a JSON override.  Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|_| Error::InvalidConfiguration("config JSON does not parse"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the board cannot run with.
    ///
    /// The initial duty is checked against the build's resolution when the
    /// registry is constructed.
    pub fn validate(&self) -> Result<()> {
        if !PWM_FREQUENCY_RANGE.contains(&self.pwm_frequency_hz) {
            return Err(Error::InvalidConfiguration("pwm_frequency_hz out of range"));
        }
        for (i, pin) in self.pins.iter().enumerate() {
            if self.pins[..i].contains(pin) {
                return Err(Error::InvalidConfiguration("pins must be distinct"));
            }
        }
        if self.http_port == self.udp_port {
            return Err(Error::InvalidConfiguration("http_port and udp_port collide"));
        }
        Ok(())
    }
}
