//! Controller — the single owner of LED state.
//!
//! [`Controller`] holds the channel registry and the PWM port, routes
//! requests from the HTTP surface and applies datagrams from the UDP fast
//! path.  Transports hold it behind a [`SharedController`] so every call
//! runs to completion against exclusive state.
//!
//! ```text
//!  HTTP ──▶ handle() ──▶ dispatch ──▶ ┌──────────────────┐
//!                                     │ ChannelRegistry  │ ──▶ PwmPort
//!  UDP  ──▶ apply_datagram() ───────▶ └──────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::app::ports::PwmPort;
use crate::config::DeviceConfig;
use crate::error::Result;
use crate::led::{self, ChannelRegistry, Resolution};
use crate::protocol;

use super::dispatch::{Action, wrap};
use super::handlers;
use super::request::{Method, Request, Response};

pub const PATH_PWM_FREQUENCY: &str = "/api/v1/pwm/frequency";
pub const PATH_PWM_RANGE: &str = "/api/v1/pwm/range";
pub const PATH_LED_DUTY: &str = "/api/v1/led/duty";
pub const PATH_LED_ON: &str = "/api/v1/led/on";
pub const PATH_LED_OFF: &str = "/api/v1/led/off";

/// Every path served by [`Controller::handle`].
pub const ROUTES: [&str; 5] = [
    PATH_PWM_FREQUENCY,
    PATH_PWM_RANGE,
    PATH_LED_DUTY,
    PATH_LED_ON,
    PATH_LED_OFF,
];

/// Controller shared between the HTTP task and the UDP loop.
pub type SharedController<R, P> = Arc<Mutex<Controller<R, P>>>;

/// Lock a shared controller.  A panic in another handler does not leave
/// LED state half-written, so a poisoned lock is still usable.
pub fn lock<R, P>(shared: &Mutex<Controller<R, P>>) -> MutexGuard<'_, Controller<R, P>>
where
    R: Resolution,
    P: PwmPort,
{
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Controller<R: Resolution, P: PwmPort> {
    registry: ChannelRegistry<R>,
    pwm: P,
}

impl<R: Resolution, P: PwmPort> Controller<R, P> {
    /// Build the registry from `config`, apply the boot frequency and
    /// switch every channel on at its initial duty.
    pub fn new(config: &DeviceConfig, mut pwm: P) -> Result<Self> {
        config.validate()?;
        let mut registry = ChannelRegistry::with_initial_duty(config.pins, config.initial_duty)?;

        led::set_pwm_frequency(&mut pwm, config.pwm_frequency_hz as i32)?;
        registry.turn_all_on(&mut pwm);

        info!(
            "Controller ready: {} channels, duty_max={}, {} Hz",
            led::CHANNEL_COUNT,
            R::duty_max(),
            config.pwm_frequency_hz
        );
        Ok(Self { registry, pwm })
    }

    /// Wrap into the form the transports share.
    pub fn into_shared(self) -> SharedController<R, P> {
        Arc::new(Mutex::new(self))
    }

    /// Route one request.
    pub fn handle(&mut self, req: &Request<'_>) -> Response {
        debug!("{:?} {}", req.method(), req.path());
        let method = req.method();
        match req.path() {
            PATH_PWM_FREQUENCY if method.is_mutation() => {
                handlers::pwm_frequency(req, &mut self.pwm).into()
            }
            PATH_PWM_RANGE if !method.is_mutation() => Response::ok(handlers::pwm_range::<R>()),
            PATH_PWM_FREQUENCY | PATH_PWM_RANGE => Response::method_not_allowed(),
            PATH_LED_DUTY => self.led(req, handlers::led_duty),
            PATH_LED_ON => self.led(req, handlers::led_on),
            PATH_LED_OFF => self.led(req, handlers::led_off),
            _ => Response::not_found(),
        }
    }

    fn led(&mut self, req: &Request<'_>, action: Action<R, P>) -> Response {
        if !matches!(req.method(), Method::Get | Method::Put) {
            return Response::method_not_allowed();
        }
        wrap(action)(req, &mut self.registry, &mut self.pwm)
    }

    /// Apply a binary duty datagram.  Returns `false` if it was dropped.
    pub fn apply_datagram(&mut self, datagram: &[u8]) -> bool {
        protocol::apply_datagram(&mut self.registry, &mut self.pwm, datagram)
    }

    pub fn registry(&self) -> &ChannelRegistry<R> {
        &self.registry
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}
