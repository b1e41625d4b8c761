//! UDP fast-path tests: datagrams applied through `Controller::apply_datagram`.

use ledctl::app::request::Response;
use ledctl::led::{Bits8, Bits10};
use ledctl::pins;

use crate::mock_pwm::{booted, get, put};

#[test]
fn full_datagram_updates_all_channels_in_order() {
    let mut ctl = booted::<Bits8>();
    assert!(ctl.apply_datagram(&[10, 20, 30, 40]));
    assert_eq!(
        ctl.pwm().writes(),
        vec![
            (pins::LED_RED_GPIO, 10),
            (pins::LED_GREEN_GPIO, 20),
            (pins::LED_BLUE_GPIO, 30),
            (pins::LED_WHITE_GPIO, 40),
        ]
    );
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=all"), Response::new(200, "10,20,30,40"));
}

#[test]
fn wrong_length_leaves_everything_unchanged() {
    let mut ctl = booted::<Bits8>();
    assert!(!ctl.apply_datagram(&[1, 2, 3]));
    assert!(!ctl.apply_datagram(&[1, 2, 3, 4, 5]));
    assert!(!ctl.apply_datagram(&[]));
    assert!(ctl.pwm().calls.is_empty());
    assert_eq!(get(&mut ctl, "/api/v1/led/duty?name=all"), Response::new(200, "127"));
}

#[test]
fn datagram_turns_off_channels_back_on() {
    let mut ctl = booted::<Bits8>();
    put(&mut ctl, "/api/v1/led/off?name=all");
    assert!(ctl.apply_datagram(&[0, 0, 0, 0]));
    assert_eq!(get(&mut ctl, "/api/v1/led/on?name=all"), Response::new(200, "1"));
}

#[test]
fn ten_bit_datagram_uses_native_u16_words() {
    let mut ctl = booted::<Bits10>();
    let mut datagram = Vec::new();
    for v in [1023u16, 512, 1, 0] {
        datagram.extend_from_slice(&v.to_ne_bytes());
    }
    assert!(!ctl.apply_datagram(&datagram[..4]));
    assert!(ctl.apply_datagram(&datagram));
    assert_eq!(
        get(&mut ctl, "/api/v1/led/duty?name=all"),
        Response::new(200, "1023,512,1,0")
    );
}
