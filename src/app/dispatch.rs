//! Per-channel action dispatch with `all` broadcast.
//!
//! An [`Action`] does one unit of work on one resolved channel.  [`wrap`]
//! turns it into a request handler that reads `name`, resolves it and then
//! runs the action on one channel, on every channel, or not at all.
//!
//! A broadcast visits red, green, blue, white in that order and never
//! short-circuits.  The per-channel results are folded into a single
//! response:
//!
//! 1. any failure → the first failure, in channel order;
//! 2. all bodies equal → that body (`"OK"` for writes);
//! 3. otherwise → bodies joined with `,` in channel order.

use log::warn;

use crate::app::ports::PwmPort;
use crate::error::{Error, MSG_INVALID_NAME, Result};
use crate::led::{CHANNEL_COUNT, Channel, ChannelRegistry, Identity, Resolution};

use super::request::{Body, Request, Response, append};

/// One unit of work against a single channel.
pub type Action<R, P> = fn(&Request<'_>, &mut Channel<R>, &mut P) -> Result<Body>;

/// Resolve `name` and run `action` against the matching channel(s).
pub fn dispatch<R, P>(
    req: &Request<'_>,
    registry: &mut ChannelRegistry<R>,
    pwm: &mut P,
    action: Action<R, P>,
) -> Response
where
    R: Resolution,
    P: PwmPort,
{
    let name = req.param("name");
    match registry.resolve(name.as_deref()) {
        Identity::Channel(id) => action(req, registry.channel_mut(id), pwm).into(),
        Identity::All => {
            // Collect first so every channel runs before any result is inspected.
            let results: heapless::Vec<Result<Body>, CHANNEL_COUNT> = registry
                .iter_mut()
                .map(|(_, channel)| action(req, channel, pwm))
                .collect();
            aggregate(results)
        }
        Identity::None => {
            warn!("{} rejected: name={:?}", req.path(), name.as_deref());
            Error::InvalidArgument(MSG_INVALID_NAME).into()
        }
    }
}

/// Lift `action` into a handler over the whole registry.
pub fn wrap<R, P>(
    action: Action<R, P>,
) -> impl Fn(&Request<'_>, &mut ChannelRegistry<R>, &mut P) -> Response
where
    R: Resolution,
    P: PwmPort,
{
    move |req, registry, pwm| dispatch(req, registry, pwm, action)
}

fn aggregate(results: heapless::Vec<Result<Body>, CHANNEL_COUNT>) -> Response {
    if let Some(&e) = results.iter().find_map(|result| result.as_ref().err()) {
        return e.into();
    }

    let bodies = results.iter().flatten();
    let Some(first) = bodies.clone().next() else {
        return Response::ok(Body::new());
    };
    if bodies.clone().all(|body| body == first) {
        return Response::ok(first.clone());
    }

    let mut joined = Body::new();
    for (i, body) in bodies.enumerate() {
        if i > 0 {
            append(&mut joined, ",");
        }
        append(&mut joined, body);
    }
    Response::ok(joined)
}
