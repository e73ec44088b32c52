/// Pulse width emitted at full reverse (speed -100), in microseconds.
pub const PULSE_FULL_REVERSE_US: u16 = 670;
/// Pulse width emitted at full forward (speed 100), in microseconds.
pub const PULSE_FULL_FORWARD_US: u16 = 2330;
/// Pulse width at speed 0. Conventional center pulse for this ESC class.
pub const PULSE_NEUTRAL_US: u16 = 1500;

pub const SPEED_MIN: i32 = -100;
pub const SPEED_MAX: i32 = 100;
