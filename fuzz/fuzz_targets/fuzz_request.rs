//! Fuzz target: `Request::parse` → `Controller::handle`
//!
//! Treats the input as a request URI and routes it through a booted
//! controller with both methods.  The controller must never panic and
//! must always answer with one of the statuses the API defines.
//!
//! cargo fuzz run fuzz_request

#![no_main]

use ledctl::app::controller::Controller;
use ledctl::app::ports::PwmPort;
use ledctl::app::request::{Method, Request};
use ledctl::config::DeviceConfig;
use ledctl::led::Bits8;
use libfuzzer_sys::fuzz_target;

struct NullPwm;

impl PwmPort for NullPwm {
    fn write_duty(&mut self, _pin: i32, _duty: u32) {}
    fn set_frequency(&mut self, _hz: u32) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(uri) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(mut ctl) = Controller::<Bits8, _>::new(&DeviceConfig::default(), NullPwm) else {
        return;
    };

    for method in [Method::Get, Method::Put] {
        let response = ctl.handle(&Request::parse(method, uri));
        assert!(
            matches!(response.status, 200 | 400 | 404 | 405),
            "unexpected status {}",
            response.status
        );
    }
});
