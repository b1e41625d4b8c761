//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the controller end to
//! end against a recording PWM mock.  All tests run on the host (x86_64)
//! with no real hardware required.

mod api_tests;
mod datagram_tests;
mod mock_pwm;
