//! Application core — LED control logic, zero I/O.
//!
//! Requests arrive as parsed [`request::Request`]s, are routed by the
//! [`controller`] and run per channel through [`dispatch`].  All hardware
//! access goes through the [`ports::PwmPort`] trait, keeping this layer
//! fully testable without real peripherals.

pub mod controller;
pub mod dispatch;
pub mod handlers;
pub mod ports;
pub mod request;
