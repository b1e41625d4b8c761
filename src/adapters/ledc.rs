//! LEDC PWM adapter.
//!
//! Implements [`PwmPort`] on top of the ESP32 LEDC peripheral: one timer
//! shared by all LED outputs (hence one frequency) and one channel per
//! output.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: raw `ledc_*` sys calls, configured once in [`LedcPwm::new`].
//! On host/test: duty and frequency are tracked in-memory only.

use core::fmt;

use log::{info, warn};

use crate::app::ports::PwmPort;
use crate::led::CHANNEL_COUNT;
use crate::pins;

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot LEDC initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedcError {
    TimerConfigFailed(i32),
    ChannelConfigFailed { gpio: i32, rc: i32 },
}

impl fmt::Display for LedcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerConfigFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::ChannelConfigFailed { gpio, rc } => {
                write!(f, "LEDC channel config for gpio{} failed (rc={})", gpio, rc)
            }
        }
    }
}

impl core::error::Error for LedcError {}

// ── Adapter ───────────────────────────────────────────────────

pub struct LedcPwm {
    pins: [i32; CHANNEL_COUNT],
    /// Last duty written per LEDC channel.
    duties: [u32; CHANNEL_COUNT],
    frequency_hz: u32,
}

impl LedcPwm {
    /// Configure the shared timer at `resolution_bits` / `frequency_hz` and
    /// attach one channel per GPIO, all at duty 0.
    pub fn new(
        gpios: [i32; CHANNEL_COUNT],
        resolution_bits: u32,
        frequency_hz: u32,
    ) -> Result<Self, LedcError> {
        let pwm = Self {
            pins: gpios,
            duties: [0; CHANNEL_COUNT],
            frequency_hz,
        };
        pwm.platform_init(resolution_bits)?;
        info!(
            "ledc: timer{} {}-bit @ {} Hz, gpios={:?}",
            pins::LEDC_TIMER,
            resolution_bits,
            frequency_hz,
            gpios
        );
        Ok(pwm)
    }

    /// Last duty written to `pin`, if it is one of ours.
    pub fn duty_of(&self, pin: i32) -> Option<u32> {
        self.slot(pin).map(|i| self.duties[i])
    }

    pub fn frequency(&self) -> u32 {
        self.frequency_hz
    }

    fn slot(&self, pin: i32) -> Option<usize> {
        self.pins.iter().position(|&p| p == pin)
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_init(&self, resolution_bits: u32) -> Result<(), LedcError> {
        let timer = ledc_timer_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            timer_num: pins::LEDC_TIMER,
            duty_resolution: resolution_bits,
            freq_hz: self.frequency_hz,
            clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
            ..Default::default()
        };
        // SAFETY: called once from main() before any handler can run.
        let rc = unsafe { ledc_timer_config(&timer) };
        if rc != ESP_OK as i32 {
            return Err(LedcError::TimerConfigFailed(rc));
        }

        for (i, &gpio) in self.pins.iter().enumerate() {
            let channel = ledc_channel_config_t {
                speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                channel: pins::LEDC_FIRST_CHANNEL + i as u32,
                timer_sel: pins::LEDC_TIMER,
                gpio_num: gpio,
                duty: 0,
                hpoint: 0,
                ..Default::default()
            };
            // SAFETY: see above; each channel is configured exactly once.
            let rc = unsafe { ledc_channel_config(&channel) };
            if rc != ESP_OK as i32 {
                return Err(LedcError::ChannelConfigFailed { gpio, rc });
            }
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_init(&self, _resolution_bits: u32) -> Result<(), LedcError> {
        info!("ledc(sim): peripheral init skipped");
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    fn platform_write(&self, slot: usize, duty: u32) {
        let channel = pins::LEDC_FIRST_CHANNEL + slot as u32;
        // SAFETY: channel was configured in platform_init(); all callers
        // hold the controller lock, so register writes never interleave.
        let rc = unsafe {
            let rc = ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty);
            if rc == ESP_OK as i32 {
                ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel)
            } else {
                rc
            }
        };
        if rc != ESP_OK as i32 {
            warn!("ledc: duty write on channel {} failed (rc={})", channel, rc);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_write(&self, _slot: usize, _duty: u32) {}

    #[cfg(target_os = "espidf")]
    fn platform_set_frequency(&self, hz: u32) {
        // SAFETY: timer was configured in platform_init(); caller holds the
        // controller lock.
        let rc = unsafe { ledc_set_freq(ledc_mode_t_LEDC_LOW_SPEED_MODE, pins::LEDC_TIMER, hz) };
        if rc != ESP_OK as i32 {
            warn!("ledc: set_freq({}) failed (rc={})", hz, rc);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_set_frequency(&self, hz: u32) {
        info!("ledc(sim): frequency -> {} Hz", hz);
    }
}

impl PwmPort for LedcPwm {
    fn write_duty(&mut self, pin: i32, duty: u32) {
        let Some(slot) = self.slot(pin) else {
            warn!("ledc: gpio{} has no LEDC channel", pin);
            return;
        };
        self.platform_write(slot, duty);
        self.duties[slot] = duty;
    }

    fn set_frequency(&mut self, hz: u32) {
        self.platform_set_frequency(hz);
        self.frequency_hz = hz;
    }
}
