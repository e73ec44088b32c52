use generic::esc_error::EscError;
use heapless::Vec;

use crate::common::servo_out::ServoOutput;

/// Recording [`ServoOutput`] double for host-side tests: remembers the last
/// bound channel and the emitted pulse widths.
pub struct MockServo {
    bound_channel: Option<u8>,
    bind_count: u32,
    pulses: Vec<u16, 32>,
    fail_bind: bool,
}

impl MockServo {
    pub fn new() -> Self {
        Self { bound_channel: None, bind_count: 0, pulses: Vec::new(), fail_bind: false }
    }

    /// A mock whose bind always fails, for exercising attach error paths.
    pub fn failing_bind() -> Self {
        Self { fail_bind: true, ..Self::new() }
    }

    pub fn bound_channel(&self) -> Option<u8> {
        self.bound_channel
    }

    pub fn bind_count(&self) -> u32 {
        self.bind_count
    }

    pub fn last_pulse_us(&self) -> Option<u16> {
        self.pulses.last().copied()
    }

    pub fn pulses(&self) -> &[u16] {
        &self.pulses
    }
}

impl Default for MockServo {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoOutput for MockServo {
    fn bind_to_channel(&mut self, channel: u8) -> Result<(), EscError> {
        if self.fail_bind {
            return Err(EscError::ServoBindError);
        }
        self.bound_channel = Some(channel);
        self.bind_count += 1;
        Ok(())
    }

    fn emit_pulse(&mut self, width_us: u16) -> Result<(), EscError> {
        if self.bound_channel.is_none() {
            return Err(EscError::ServoPulseError);
        }
        if self.pulses.is_full() {
            self.pulses.remove(0);
        }
        self.pulses.push(width_us).ok();
        Ok(())
    }
}
