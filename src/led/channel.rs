//! A single PWM-driven LED output.
//!
//! [`Channel`] keeps the logical duty cycle and the enabled flag; the
//! hardware effect is delegated to a [`PwmPort`] supplied per call.
//!
//! ## State rules
//!
//! - `set_duty` and `turn_on` drive the stored duty and mark the channel on.
//! - `turn_off` drives 0 but keeps the stored duty, so the next `turn_on`
//!   restores the previous brightness.
//! - A freshly constructed channel is off until it is turned on.

use core::marker::PhantomData;
use core::ops::RangeInclusive;

use log::debug;

use crate::app::ports::PwmPort;
use crate::error::{Error, MSG_INVALID_VALUE, Result};

use super::resolution::{DutyWord, Resolution};

/// Accepted PWM frequencies (Hz), inclusive on both ends.
pub const PWM_FREQUENCY_RANGE: RangeInclusive<u32> = 100..=40_000;

#[derive(Debug, Clone)]
pub struct Channel<R: Resolution> {
    pin: i32,
    duty: R::Duty,
    enabled: bool,
    _resolution: PhantomData<R>,
}

impl<R: Resolution> Channel<R> {
    /// Channel on `pin` starting at mid-scale.
    pub fn new(pin: i32) -> Self {
        Self {
            pin,
            duty: R::default_duty(),
            enabled: false,
            _resolution: PhantomData,
        }
    }

    /// Channel on `pin` starting at `initial_duty`.
    ///
    /// A value above `duty_max` is a configuration error, not something to
    /// clamp.
    pub fn with_duty(pin: i32, initial_duty: u32) -> Result<Self> {
        let duty = R::checked(initial_duty)
            .ok_or(Error::InvalidConfiguration("initial duty exceeds duty_max"))?;
        Ok(Self {
            duty,
            ..Self::new(pin)
        })
    }

    /// Store `value`, drive it to the pin and mark the channel on.
    pub fn set_duty(&mut self, value: R::Duty, pwm: &mut impl PwmPort) {
        self.duty = value;
        self.turn_on(pwm);
    }

    /// Last stored duty.  Reflects what this layer wrote, not the pin.
    pub fn duty(&self) -> R::Duty {
        self.duty
    }

    pub fn duty_max(&self) -> R::Duty {
        R::duty_max()
    }

    /// Re-apply the stored duty.
    pub fn turn_on(&mut self, pwm: &mut impl PwmPort) {
        pwm.write_duty(self.pin, self.duty.to_u32());
        self.enabled = true;
        debug!("LED gpio{}: on, duty={}", self.pin, self.duty);
    }

    /// Drive 0 to the pin, keep the stored duty.
    pub fn turn_off(&mut self, pwm: &mut impl PwmPort) {
        pwm.write_duty(self.pin, 0);
        self.enabled = false;
        debug!("LED gpio{}: off (stored duty={})", self.pin, self.duty);
    }

    pub fn is_on(&self) -> bool {
        self.enabled
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }
}

/// Set the PWM frequency shared by all channels.
///
/// The range check happens before the port is touched; a rejected
/// frequency leaves the hardware alone.
pub fn set_pwm_frequency(pwm: &mut impl PwmPort, hz: i32) -> Result<()> {
    let hz = u32::try_from(hz)
        .ok()
        .filter(|hz| PWM_FREQUENCY_RANGE.contains(hz))
        .ok_or(Error::InvalidArgument(MSG_INVALID_VALUE))?;
    pwm.set_frequency(hz);
    debug!("PWM frequency set to {} Hz", hz);
    Ok(())
}
