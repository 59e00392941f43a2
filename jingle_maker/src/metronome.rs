use std::sync::atomic::{ AtomicBool, Ordering };
use std::time::Duration;

use crate::circuit::Speaker;
use crate::note::{ Note, TableNote };
use crate::player::TERMINATOR;
use crate::tempo::Tempo;

/// Cleared by the serial input thread whenever a byte arrives.
pub static METRONOME: StopSignal = StopSignal::new();

/// Running flag shared between one loop and one asynchronous writer.
pub struct StopSignal(AtomicBool);

impl StopSignal {
	pub const fn new() -> Self {
		Self(AtomicBool::new(false))
	}

	pub fn arm(&self) {
		self.0.store(true, Ordering::SeqCst);
	}

	pub fn stop(&self) {
		self.0.store(false, Ordering::SeqCst);
	}

	pub fn is_running(&self) -> bool {
		self.0.load(Ordering::SeqCst)
	}
}

pub struct Metronome {
	tempo: Tempo,
	note: TableNote,
}

impl Metronome {
	pub fn new(tempo: Tempo, note: TableNote) -> Self {
		Self { tempo, note }
	}

	/// Time from a stop signal to the loop noticing it, at worst.
	pub fn cycle(&self) -> Duration {
		self.tempo.quarter() * 2
	}

	/// Plays quarter-note clicks until `signal` is cleared. The flag is only
	/// checked between cycles.
	pub fn run<S: Speaker>(&self, speaker: &mut S, signal: &StopSignal) -> Result<(), S::Error> {
		let beat = self.tempo.quarter();

		signal.arm();
		while signal.is_running() {
			speaker.play(self.note.frequency(), beat)?;
			speaker.rest(beat)?;
		}

		speaker.rest(TERMINATOR)
	}
}
