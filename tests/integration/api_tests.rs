//! End-to-end tests for the HTTP control API, driven through
//! `Controller::handle` with a recording PWM mock.

use ledctl::app::request::Response;
use ledctl::config::DeviceConfig;
use ledctl::app::controller::Controller;
use ledctl::led::{Bits8, Bits10, ChannelId};
use ledctl::pins;

use crate::mock_pwm::{MockPwm, PwmCall, booted, get, put};

const BAD_NAME: &str = "Invalid or missing 'name'";
const BAD_VALUE: &str = "Invalid or missing 'value'";

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn boot_sets_frequency_then_lights_every_channel_at_mid_scale() {
    let ctl = Controller::<Bits8, _>::new(&DeviceConfig::default(), MockPwm::new()).unwrap();
    assert_eq!(
        ctl.pwm().calls,
        vec![
            PwmCall::SetFrequency(pins::LED_PWM_FREQ_HZ),
            PwmCall::WriteDuty { pin: pins::LED_RED_GPIO, duty: 127 },
            PwmCall::WriteDuty { pin: pins::LED_GREEN_GPIO, duty: 127 },
            PwmCall::WriteDuty { pin: pins::LED_BLUE_GPIO, duty: 127 },
            PwmCall::WriteDuty { pin: pins::LED_WHITE_GPIO, duty: 127 },
        ]
    );
}

#[test]
fn boot_honours_initial_duty_override() {
    let config = DeviceConfig {
        initial_duty: Some(900),
        ..Default::default()
    };
    let mut ctl = Controller::<Bits10, _>::new(&config, MockPwm::new()).unwrap();
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=all"), Response::new(200, "900"));
}

// ── Duty ──────────────────────────────────────────────────────

#[test]
fn put_then_get_duty_round_trips() {
    let mut ctl = booted::<Bits8>();
    assert_eq!(put(&mut ctl, "/api/v1/led/duty?name=red&value=128"), Response::new(200, "OK"));
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=red"), Response::new(200, "128"));
    assert_eq!(ctl.pwm().level(pins::LED_RED_GPIO), Some(128));
    assert!(ctl.registry().channel(ChannelId::Red).is_on());
}

#[test]
fn duty_above_range_wraps_to_low_bits() {
    let mut ctl = booted::<Bits8>();
    assert!(put(&mut ctl, "/api/v1/led/duty?name=green&value=300").is_success());
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=green"), Response::new(200, "44"));

    let mut ctl = booted::<Bits10>();
    assert!(put(&mut ctl, "/api/v1/led/duty?name=green&value=1024").is_success());
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=green"), Response::new(200, "0"));
}

#[test]
fn bad_duty_value_is_rejected_without_writes() {
    let mut ctl = booted::<Bits8>();
    for uri in [
        "/api/v1/led/duty?name=red",
        "/api/v1/led/duty?name=red&value=",
        "/api/v1/led/duty?name=red&value=12a",
        "/api/v1/led/duty?name=all&value=99999999999",
    ] {
        assert_eq!(put(&mut ctl, uri), Response::new(400, BAD_VALUE), "{uri}");
    }
    assert!(ctl.pwm().calls.is_empty());
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=red"), Response::new(200, "127"));
}

#[test]
fn broadcast_duty_writes_in_channel_order() {
    let mut ctl = booted::<Bits8>();
    assert_eq!(put(&mut ctl, "/api/v1/led/duty?name=all&value=200"), Response::new(200, "OK"));
    assert_eq!(
        ctl.pwm().writes(),
        vec![
            (pins::LED_RED_GPIO, 200),
            (pins::LED_GREEN_GPIO, 200),
            (pins::LED_BLUE_GPIO, 200),
            (pins::LED_WHITE_GPIO, 200),
        ]
    );
}

#[test]
fn broadcast_read_joins_differing_values() {
    let mut ctl = booted::<Bits8>();
    put(&mut ctl, "/api/v1/led/duty?name=red&value=128");
    put(&mut ctl, "/api/v1/led/duty?name=blue&value=0");
    put(&mut ctl, "/api/v1/led/duty?name=white&value=255");
    assert_eq!(
        get(&mut ctl, "/api/v1/led/duty?name=all"),
        Response::new(200, "128,127,0,255")
    );
}

// ── Names ─────────────────────────────────────────────────────

#[test]
fn unknown_name_is_rejected_and_changes_nothing() {
    let mut ctl = booted::<Bits8>();
    for uri in [
        "/api/v1/led/on?name=bogus",
        "/api/v1/led/on",
        "/api/v1/led/off?name=Red",
        "/api/v1/led/duty?name=&value=1",
    ] {
        assert_eq!(put(&mut ctl, uri), Response::new(400, BAD_NAME), "{uri}");
    }
    assert!(ctl.pwm().calls.is_empty());
    assert!(ctl.registry().iter().all(|(_, ch)| ch.is_on()));
}

#[test]
fn encoded_name_resolves() {
    let mut ctl = booted::<Bits8>();
    assert_eq!(put(&mut ctl, "/api/v1/led/off?name=%77hite"), Response::new(200, "OK"));
    assert!(!ctl.registry().channel(ChannelId::White).is_on());
}

// ── On / off ──────────────────────────────────────────────────

#[test]
fn off_then_on_restores_duty() {
    let mut ctl = booted::<Bits8>();
    put(&mut ctl, "/api/v1/led/duty?name=blue&value=42");
    put(&mut ctl, "/api/v1/led/off?name=blue");
    assert_eq!(ctl.pwm().level(pins::LED_BLUE_GPIO), Some(0));
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=blue"), Response::new(200, "42"));

    put(&mut ctl, "/api/v1/led/on?name=blue");
    assert_eq!(ctl.pwm().level(pins::LED_BLUE_GPIO), Some(42));
}

#[test]
fn off_read_reports_inverted_flag() {
    let mut ctl = booted::<Bits8>();
    assert_eq!(get(&mut ctl, "/api/v1/led/on?name=red"), Response::new(200, "1"));
    assert_eq!(get(&mut ctl, "/api/v1/led/off?name=red"), Response::new(200, "0"));

    put(&mut ctl, "/api/v1/led/off?name=red");
    assert_eq!(get(&mut ctl, "/api/v1/led/on?name=red"), Response::new(200, "0"));
    assert_eq!(get(&mut ctl, "/api/v1/led/off?name=red"), Response::new(200, "1"));
}

#[test]
fn setting_duty_turns_channel_back_on() {
    let mut ctl = booted::<Bits8>();
    put(&mut ctl, "/api/v1/led/off?name=all");
    assert_eq!(get(&mut ctl, "/api/v1/led/on?name=all"), Response::new(200, "0"));

    put(&mut ctl, "/api/v1/led/duty?name=green&value=10");
    assert_eq!(get(&mut ctl, "/api/v1/led/on?name=all"), Response::new(200, "0,1,0,0"));
}

// ── PWM ───────────────────────────────────────────────────────

#[test]
fn frequency_bounds_are_inclusive() {
    let mut ctl = booted::<Bits8>();
    for hz in [99, 40_001, -1] {
        let uri = format!("/api/v1/pwm/frequency?value={hz}");
        assert_eq!(put(&mut ctl, &uri), Response::new(400, BAD_VALUE));
    }
    assert!(ctl.pwm().calls.is_empty());

    for hz in [100, 40_000] {
        let uri = format!("/api/v1/pwm/frequency?value={hz}");
        assert_eq!(put(&mut ctl, &uri), Response::new(200, "OK"));
        assert_eq!(ctl.pwm().frequency(), Some(hz));
    }
}

#[test]
fn frequency_is_not_readable() {
    let mut ctl = booted::<Bits8>();
    assert_eq!(
        get(&mut ctl, "/api/v1/pwm/frequency?value=500"),
        Response::new(405, "Method Not Allowed")
    );
    assert!(ctl.pwm().calls.is_empty());
}

#[test]
fn range_reports_build_resolution() {
    assert_eq!(get(&mut booted::<Bits8>(), "/api/v1/pwm/range"), Response::new(200, "255"));
    assert_eq!(get(&mut booted::<Bits10>(), "/api/v1/pwm/range"), Response::new(200, "1023"));
}

#[test]
fn unknown_path_is_not_found() {
    let mut ctl = booted::<Bits8>();
    assert_eq!(get(&mut ctl, "/api/v1/led/brightness?name=red"), Response::new(404, "Not Found"));
}
