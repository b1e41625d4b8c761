//! The fixed set of four LED channels and name resolution.
//!
//! Names are matched exactly (case-sensitive, no prefixes):
//!
//! | Name      | Identity              |
//! |-----------|-----------------------|
//! | `red`     | `Channel(Red)`   (0)  |
//! | `green`   | `Channel(Green)` (1)  |
//! | `blue`    | `Channel(Blue)`  (2)  |
//! | `white`   | `Channel(White)` (3)  |
//! | `all`     | `All`            (-1) |
//! | otherwise | `None`           (-2) |

use crate::app::ports::PwmPort;
use crate::error::Result;

use super::channel::Channel;
use super::resolution::Resolution;

/// Number of LED outputs on the board.
pub const CHANNEL_COUNT: usize = 4;

/// One concrete LED output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelId {
    Red = 0,
    Green = 1,
    Blue = 2,
    White = 3,
}

impl ChannelId {
    /// Declaration order; broadcasts always visit channels in this order.
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [Self::Red, Self::Green, Self::Blue, Self::White];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::White => "white",
        }
    }
}

/// Result of resolving a channel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Channel(ChannelId),
    All,
    None,
}

impl Identity {
    /// Numeric identity: channel index, -1 for all, -2 for none.
    pub const fn raw(self) -> i8 {
        match self {
            Self::Channel(id) => id as i8,
            Self::All => -1,
            Self::None => -2,
        }
    }
}

const NAME_TABLE: [(&str, Identity); 5] = [
    ("red", Identity::Channel(ChannelId::Red)),
    ("green", Identity::Channel(ChannelId::Green)),
    ("blue", Identity::Channel(ChannelId::Blue)),
    ("white", Identity::Channel(ChannelId::White)),
    ("all", Identity::All),
];

/// Resolve a (possibly absent) name against the fixed table.
pub fn resolve(name: Option<&str>) -> Identity {
    name.and_then(|name| {
        NAME_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, identity)| identity)
    })
    .unwrap_or(Identity::None)
}

/// The four channels, in declaration order.  Fixed after construction.
#[derive(Debug, Clone)]
pub struct ChannelRegistry<R: Resolution> {
    channels: [Channel<R>; CHANNEL_COUNT],
}

impl<R: Resolution> ChannelRegistry<R> {
    /// Channels on `pins` (red, green, blue, white), all at mid-scale.
    pub fn new(pins: [i32; CHANNEL_COUNT]) -> Self {
        Self {
            channels: pins.map(Channel::new),
        }
    }

    /// Channels on `pins`, all starting at `initial_duty` when given.
    pub fn with_initial_duty(pins: [i32; CHANNEL_COUNT], initial_duty: Option<u32>) -> Result<Self> {
        let Some(duty) = initial_duty else {
            return Ok(Self::new(pins));
        };
        let [r, g, b, w] = pins;
        Ok(Self {
            channels: [
                Channel::with_duty(r, duty)?,
                Channel::with_duty(g, duty)?,
                Channel::with_duty(b, duty)?,
                Channel::with_duty(w, duty)?,
            ],
        })
    }

    pub fn resolve(&self, name: Option<&str>) -> Identity {
        resolve(name)
    }

    pub fn channel(&self, id: ChannelId) -> &Channel<R> {
        &self.channels[id.index()]
    }

    pub fn channel_mut(&mut self, id: ChannelId) -> &mut Channel<R> {
        &mut self.channels[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChannelId, &Channel<R>)> {
        ChannelId::ALL.into_iter().zip(self.channels.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ChannelId, &mut Channel<R>)> {
        ChannelId::ALL.into_iter().zip(self.channels.iter_mut())
    }

    /// Drive every channel with its stored duty (boot-time power-on).
    pub fn turn_all_on(&mut self, pwm: &mut impl PwmPort) {
        for (_, channel) in self.iter_mut() {
            channel.turn_on(pwm);
        }
    }
}
