use std::thread;
use std::time::Duration;

use rppal::pwm::{ Channel, Polarity, Pwm };

/// Anything that can hold a tone for a while.
pub trait Speaker {
	type Error: std::error::Error;

	/// Sounds `frequency` Hz, or stays silent for 0 Hz, and returns once
	/// `duration` has passed.
	fn play(&mut self, frequency: u16, duration: Duration) -> Result<(), Self::Error>;

	fn rest(&mut self, duration: Duration) -> Result<(), Self::Error> {
		self.play(0, duration)
	}
}

const DUTY_CYCLE: f64 = 0.5;

/// Square wave on a hardware PWM channel.
pub struct Buzzer {
	pwm: Pwm,
}

impl Buzzer {
	pub fn new(channel: Channel) -> rppal::pwm::Result<Self> {
		let pwm = Pwm::with_frequency(channel, 440.0, DUTY_CYCLE, Polarity::Normal, false)?;

		Ok(Buzzer { pwm })
	}
}

impl Speaker for Buzzer {
	type Error = rppal::pwm::Error;

	fn play(&mut self, frequency: u16, duration: Duration) -> rppal::pwm::Result<()> {
		if frequency == 0 {
			self.pwm.disable()?;
		} else {
			self.pwm.set_frequency(f64::from(frequency), DUTY_CYCLE)?;
			self.pwm.enable()?;
		}

		thread::sleep(duration);

		Ok(())
	}
}
