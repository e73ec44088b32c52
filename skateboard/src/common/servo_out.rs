use embedded_hal::pwm::SetDutyCycle;
use fugit::MicrosDurationU32;
use generic::esc_error::EscError;

/// Standard 50Hz servo frame.
pub const SERVO_FRAME: MicrosDurationU32 = MicrosDurationU32::millis(20);

/// Platform-supplied pulse output: a single PWM-capable channel that can be
/// bound to a pin id and then driven with microsecond pulse widths.
pub trait ServoOutput {
    fn bind_to_channel(&mut self, channel: u8) -> Result<(), EscError>;
    fn emit_pulse(&mut self, width_us: u16) -> Result<(), EscError>;
}

/// Adapts any `embedded-hal` PWM channel into a [`ServoOutput`] by converting
/// pulse widths to duty counts within a fixed frame period.
pub struct DutyCycleServo<P: SetDutyCycle> {
    pwm: P,
    period: MicrosDurationU32,
    channel: Option<u8>,
}

impl<P: SetDutyCycle> DutyCycleServo<P> {
    pub fn new(pwm: P) -> Self {
        Self::with_period(pwm, SERVO_FRAME)
    }

    pub fn with_period(pwm: P, period: MicrosDurationU32) -> Self {
        Self { pwm, period, channel: None }
    }

    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    pub fn release(self) -> P {
        self.pwm
    }

    fn width_to_duty(&self, width_us: u16) -> u16 {
        let max_duty = self.pwm.max_duty_cycle();
        let counts =
            u64::from(width_us) * (u64::from(max_duty) + 1) / u64::from(self.period.to_micros());
        counts.min(u64::from(max_duty)) as u16
    }
}

impl<P: SetDutyCycle> ServoOutput for DutyCycleServo<P> {
    fn bind_to_channel(&mut self, channel: u8) -> Result<(), EscError> {
        // Pin muxing already happened when the HAL handed out the channel;
        // only the id is recorded here.
        self.channel = Some(channel);
        Ok(())
    }

    fn emit_pulse(&mut self, width_us: u16) -> Result<(), EscError> {
        let duty = self.width_to_duty(width_us);
        #[cfg(feature = "defmt")]
        defmt::debug!("emit pulse: {}us -> duty {}", width_us, duty);
        self.pwm.set_duty_cycle(duty).map_err(|_| EscError::ServoPulseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePwm {
        max_duty: u16,
        last_duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for FakePwm {
        type Error = core::convert::Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max_duty
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.last_duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_pulse_to_duty_in_20ms_frame() {
        // 20000 counts per 20ms frame: one count per microsecond.
        let pwm = FakePwm { max_duty: 19999, last_duty: 0 };
        let mut servo = DutyCycleServo::new(pwm);
        servo.bind_to_channel(9).unwrap();
        servo.emit_pulse(1500).unwrap();
        assert_eq!(servo.release().last_duty, 1500);
    }

    #[test]
    fn test_duty_scales_with_resolution() {
        // 40000 counts per frame: two counts per microsecond.
        let pwm = FakePwm { max_duty: 39999, last_duty: 0 };
        let mut servo = DutyCycleServo::new(pwm);
        servo.emit_pulse(670).unwrap();
        assert_eq!(servo.release().last_duty, 1340);
    }

    #[test]
    fn test_duty_saturates_at_max() {
        // Pathologically short frame: every pulse saturates.
        let pwm = FakePwm { max_duty: 999, last_duty: 0 };
        let mut servo = DutyCycleServo::with_period(pwm, MicrosDurationU32::millis(1));
        servo.emit_pulse(2330).unwrap();
        assert_eq!(servo.release().last_duty, 999);
    }
}
