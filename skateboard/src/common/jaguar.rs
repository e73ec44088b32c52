use generic::esc_error::EscError;

use crate::common::consts::{
    PULSE_FULL_FORWARD_US, PULSE_FULL_REVERSE_US, SPEED_MAX, SPEED_MIN,
};
use crate::common::servo_out::ServoOutput;

/// Maps a speed command in percent to a Jaguar pulse width in microseconds.
///
/// Out-of-range commands saturate at the bounds rather than erroring, so an
/// over-eager caller can never push the ESC past its calibrated pulse range.
pub fn speed_to_pulse_us(speed: i32) -> u16 {
    let speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    let span = (PULSE_FULL_FORWARD_US - PULSE_FULL_REVERSE_US) as i32;
    (PULSE_FULL_REVERSE_US as i32 + (speed - SPEED_MIN) * span / (SPEED_MAX - SPEED_MIN)) as u16
}

/// Driver for a Jaguar motor speed controller on a single servo channel.
///
/// Construction never touches the hardware; the output is bound on the first
/// explicit [`attach`](Jaguar::attach) or lazily by the first speed command.
pub struct Jaguar<O: ServoOutput> {
    out: O,
    channel: Option<u8>,
    attached: bool,
}

impl<O: ServoOutput> Jaguar<O> {
    pub fn new(out: O) -> Self {
        Self { out, channel: None, attached: false }
    }

    pub fn with_channel(out: O, channel: u8) -> Self {
        Self { out, channel: Some(channel), attached: false }
    }

    /// Stores `channel` and binds the output to it. Re-attaching with a
    /// different channel re-routes all subsequent pulses.
    pub fn attach(&mut self, channel: u8) -> Result<(), EscError> {
        self.channel = Some(channel);
        self.reattach()
    }

    /// Binds the output using the stored channel id.
    pub fn reattach(&mut self) -> Result<(), EscError> {
        let channel = self.channel.ok_or(EscError::JagNotConfigured)?;
        self.out.bind_to_channel(channel)?;
        self.attached = true;
        #[cfg(feature = "defmt")]
        defmt::info!("jaguar attached on channel {}", channel);
        Ok(())
    }

    pub fn ensure_attached(&mut self) -> Result<(), EscError> {
        if self.attached {
            Ok(())
        } else {
            self.reattach()
        }
    }

    /// Applies a speed command in percent, [-100, 100], saturating outside.
    ///
    /// Attaches with the stored channel first if not yet attached, then emits
    /// the mapped pulse. Returns the emitted pulse width in microseconds.
    pub fn apply_speed(&mut self, speed: i32) -> Result<u16, EscError> {
        self.ensure_attached()?;
        let width_us = speed_to_pulse_us(speed);
        #[cfg(feature = "defmt")]
        defmt::debug!("speed = {}, pulse = {}us", speed, width_us);
        self.out.emit_pulse(width_us)?;
        Ok(width_us)
    }

    /// Emits the neutral pulse.
    pub fn stop(&mut self) -> Result<u16, EscError> {
        self.apply_speed(0)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn release(self) -> O {
        self.out
    }
}
