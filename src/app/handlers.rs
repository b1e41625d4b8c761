//! Route actions for the control API.
//!
//! | Path                    | GET                  | PUT                      |
//! |-------------------------|----------------------|--------------------------|
//! | `/api/v1/pwm/frequency` | 405                  | `value` in 100..=40000   |
//! | `/api/v1/pwm/range`     | `duty_max`           | 405                      |
//! | `/api/v1/led/duty`      | stored duty          | `value`, wrapped to range|
//! | `/api/v1/led/on`        | `1` if on, else `0`  | turn on                  |
//! | `/api/v1/led/off`       | `0` if on, else `1`  | turn off                 |
//!
//! The LED actions run per channel and are lifted to `name` addressing by
//! [`dispatch`](super::dispatch).

use log::debug;

use crate::app::ports::PwmPort;
use crate::error::Result;
use crate::led::{self, Channel, DutyWord, Resolution};

use super::request::{Body, Request, display_body, extract_integer, ok_body, text};

/// `PUT /api/v1/pwm/frequency?value=N`.  Caller has already checked the method.
pub fn pwm_frequency(req: &Request<'_>, pwm: &mut impl PwmPort) -> Result<Body> {
    let hz = extract_integer(req, "value")?;
    led::set_pwm_frequency(pwm, hz)?;
    Ok(ok_body())
}

/// `GET /api/v1/pwm/range`.
pub fn pwm_range<R: Resolution>() -> Body {
    display_body(R::duty_max())
}

/// Read or set the stored duty of one channel.
pub fn led_duty<R: Resolution, P: PwmPort>(
    req: &Request<'_>,
    channel: &mut Channel<R>,
    pwm: &mut P,
) -> Result<Body> {
    if !req.method().is_mutation() {
        return Ok(display_body(channel.duty()));
    }

    let raw = extract_integer(req, "value")?;
    let duty = R::wrap(raw);
    if u32::try_from(raw).ok() != Some(duty.to_u32()) {
        debug!("duty {} wrapped to {}", raw, duty);
    }
    channel.set_duty(duty, pwm);
    Ok(ok_body())
}

/// Read the enabled flag or turn one channel on.
pub fn led_on<R: Resolution, P: PwmPort>(
    req: &Request<'_>,
    channel: &mut Channel<R>,
    pwm: &mut P,
) -> Result<Body> {
    if !req.method().is_mutation() {
        return Ok(flag(channel.is_on()));
    }
    channel.turn_on(pwm);
    Ok(ok_body())
}

/// Read or turn one channel off.
///
/// The read path reports the *negation* of the enabled flag: `"1"` means
/// the channel is off.  Clients depend on this, keep it.
pub fn led_off<R: Resolution, P: PwmPort>(
    req: &Request<'_>,
    channel: &mut Channel<R>,
    pwm: &mut P,
) -> Result<Body> {
    if !req.method().is_mutation() {
        return Ok(flag(!channel.is_on()));
    }
    channel.turn_off(pwm);
    Ok(ok_body())
}

fn flag(set: bool) -> Body {
    text(if set { "1" } else { "0" })
}
