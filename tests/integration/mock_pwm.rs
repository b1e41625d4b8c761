//! Mock PWM port for integration tests.
//!
//! Records every hardware call so tests can assert on the full write
//! history without touching LEDC registers.

use ledctl::app::controller::Controller;
use ledctl::app::ports::PwmPort;
use ledctl::app::request::{Method, Request, Response};
use ledctl::config::DeviceConfig;
use ledctl::led::Resolution;

// ── PWM call record ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmCall {
    WriteDuty { pin: i32, duty: u32 },
    SetFrequency(u32),
}

// ── MockPwm ───────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockPwm {
    pub calls: Vec<PwmCall>,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Duty writes only, in order.
    pub fn writes(&self) -> Vec<(i32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                PwmCall::WriteDuty { pin, duty } => Some((pin, duty)),
                PwmCall::SetFrequency(_) => None,
            })
            .collect()
    }

    /// Last duty written to `pin`.
    pub fn level(&self, pin: i32) -> Option<u32> {
        self.writes()
            .into_iter()
            .rev()
            .find_map(|(p, duty)| (p == pin).then_some(duty))
    }

    pub fn frequency(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|c| match *c {
            PwmCall::SetFrequency(hz) => Some(hz),
            PwmCall::WriteDuty { .. } => None,
        })
    }
}

impl PwmPort for MockPwm {
    fn write_duty(&mut self, pin: i32, duty: u32) {
        self.calls.push(PwmCall::WriteDuty { pin, duty });
    }

    fn set_frequency(&mut self, hz: u32) {
        self.calls.push(PwmCall::SetFrequency(hz));
    }
}

// ── Helpers ───────────────────────────────────────────────────

/// Booted controller with the boot-time hardware calls cleared.
pub fn booted<R: Resolution>() -> Controller<R, MockPwm> {
    let mut ctl = Controller::new(&DeviceConfig::default(), MockPwm::new()).unwrap();
    ctl.pwm_mut().clear();
    ctl
}

pub fn get<R: Resolution>(ctl: &mut Controller<R, MockPwm>, uri: &str) -> Response {
    ctl.handle(&Request::parse(Method::Get, uri))
}

pub fn put<R: Resolution>(ctl: &mut Controller<R, MockPwm>, uri: &str) -> Response {
    ctl.handle(&Request::parse(Method::Put, uri))
}
