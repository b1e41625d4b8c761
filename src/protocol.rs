//! Binary duty-cycle datagram.
//!
//! Wire format (no header, no checksum):
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │ red      │ green    │ blue     │ white    │
//! │ W bytes  │ W bytes  │ W bytes  │ W bytes  │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! `W` is the size of the build's duty storage (1 for 8-bit, 2 for 10-bit),
//! in native byte order.  A datagram of any other length is dropped whole:
//! no partial update and no reply.

use log::debug;

use crate::app::ports::PwmPort;
use crate::led::{CHANNEL_COUNT, ChannelRegistry, DutyWord, Resolution};

/// Exact datagram size for resolution `R`.
pub fn datagram_len<R: Resolution>() -> usize {
    CHANNEL_COUNT * <R::Duty as DutyWord>::BYTES
}

/// Decode the four duties, red first.  `None` if the length is wrong.
///
/// Words are reduced to `duty_max` with the same low-bit wrap as the HTTP
/// duty path; for 8-bit storage every word is already legal.
pub fn decode<R: Resolution>(datagram: &[u8]) -> Option<[R::Duty; CHANNEL_COUNT]> {
    if datagram.len() != datagram_len::<R>() {
        return None;
    }
    let mut words = datagram
        .chunks_exact(<R::Duty as DutyWord>::BYTES)
        .map(|chunk| {
            <R::Duty as DutyWord>::from_ne_slice(chunk).map(|word| R::wrap(word.to_u32() as i32))
        });
    let mut duties = [R::Duty::default(); CHANNEL_COUNT];
    for duty in &mut duties {
        *duty = words.next()??;
    }
    Some(duties)
}

/// Apply a datagram to all four channels in order.  Returns `false` when
/// it was dropped.
pub fn apply_datagram<R, P>(registry: &mut ChannelRegistry<R>, pwm: &mut P, datagram: &[u8]) -> bool
where
    R: Resolution,
    P: PwmPort,
{
    let Some(duties) = decode::<R>(datagram) else {
        debug!(
            "UDP: dropped {}-byte datagram (expected {})",
            datagram.len(),
            datagram_len::<R>()
        );
        return false;
    };
    for ((_, channel), duty) in registry.iter_mut().zip(duties) {
        channel.set_duty(duty, pwm);
    }
    true
}
