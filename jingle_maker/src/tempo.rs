use std::convert::TryFrom;
use std::time::Duration;

/// Beats per minute, always within `Tempo::MIN..=Tempo::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tempo(u32);

impl Tempo {
	pub const MIN: u32 = 60;
	pub const MAX: u32 = 180;

	pub fn bpm(&self) -> u32 {
		self.0
	}

	/// Length of one sixteenth-note unit.
	pub fn sixteenth(&self) -> Duration {
		Duration::from_micros(u64::from(15_000_000 / self.0))
	}

	/// Length of one quarter note, the metronome beat.
	pub fn quarter(&self) -> Duration {
		Duration::from_micros(u64::from(60_000_000 / self.0))
	}

	/// `units` sixteenths, truncated per unit before multiplying.
	pub fn units(&self, units: u8) -> Duration {
		Duration::from_micros(u64::from(15_000_000 / self.0) * u64::from(units))
	}
}

impl TryFrom<i32> for Tempo {
	type Error = i32;

	fn try_from(bpm: i32) -> Result<Self, Self::Error> {
		match u32::try_from(bpm) {
			Ok(bpm) if (Self::MIN..=Self::MAX).contains(&bpm) => Ok(Self(bpm)),
			_ => Err(bpm),
		}
	}
}
