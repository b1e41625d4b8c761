//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Controller ──▶ PwmPort ──▶ LEDC adapter / test double
//! ```
//!
//! The LED model never touches registers.  Every hardware effect goes
//! through [`PwmPort`], which is passed in at call sites so the whole
//! control path runs on the host against a recording mock.

// ───────────────────────────────────────────────────────────────
// PWM port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the PWM peripheral.
///
/// Both operations are infallible from the domain's point of view;
/// adapters log hardware errors instead of returning them.
pub trait PwmPort {
    /// Drive `pin` with `duty` (already within the configured resolution).
    fn write_duty(&mut self, pin: i32, duty: u32);

    /// Change the shared PWM frequency.  Called only with a validated
    /// frequency, see [`set_pwm_frequency`](crate::led::set_pwm_frequency).
    fn set_frequency(&mut self, hz: u32);
}

impl<P: PwmPort + ?Sized> PwmPort for &mut P {
    fn write_duty(&mut self, pin: i32, duty: u32) {
        (**self).write_duty(pin, duty);
    }

    fn set_frequency(&mut self, hz: u32) {
        (**self).set_frequency(hz);
    }
}
