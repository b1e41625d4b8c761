//! Fuzz target: `protocol::decode` / `protocol::apply_datagram`
//!
//! Feeds arbitrary byte sequences to the datagram decoder for both
//! resolutions and asserts that only exact-length input is applied and
//! that every decoded duty stays within `duty_max`.
//!
//! cargo fuzz run fuzz_datagram

#![no_main]

use ledctl::app::ports::PwmPort;
use ledctl::led::{Bits8, Bits10, ChannelRegistry, Resolution};
use ledctl::pins;
use ledctl::protocol::{apply_datagram, datagram_len, decode};
use libfuzzer_sys::fuzz_target;

struct NullPwm;

impl PwmPort for NullPwm {
    fn write_duty(&mut self, _pin: i32, duty: u32) {
        assert!(duty <= Bits10::duty_max() as u32, "duty {duty} beyond any resolution");
    }

    fn set_frequency(&mut self, _hz: u32) {}
}

fuzz_target!(|data: &[u8]| {
    if let Some(duties) = decode::<Bits10>(data) {
        assert_eq!(data.len(), datagram_len::<Bits10>());
        assert!(duties.iter().all(|&d| d <= Bits10::duty_max()));
    }

    let mut registry = ChannelRegistry::<Bits8>::new(pins::LED_GPIOS);
    let before: Vec<u8> = registry.iter().map(|(_, ch)| ch.duty()).collect();
    let applied = apply_datagram(&mut registry, &mut NullPwm, data);
    assert_eq!(applied, data.len() == datagram_len::<Bits8>());
    if !applied {
        let after: Vec<u8> = registry.iter().map(|(_, ch)| ch.duty()).collect();
        assert_eq!(before, after, "rejected datagram mutated state");
    }
});
