use std::time::Duration;

use crate::circuit::Speaker;
use crate::decoder::Sequence;
use crate::note::{ Note, NoteTable };
use crate::tempo::Tempo;

/// Silence closing every sequence and metronome run.
pub const TERMINATOR: Duration = Duration::from_millis(50);

/// Plays every event back to back, then a short silence.
pub fn play_sequence<S: Speaker>(speaker: &mut S, sequence: &Sequence, tempo: Tempo) -> Result<(), S::Error> {
	for event in sequence.iter() {
		speaker.play(event.note.frequency(), tempo.units(event.units))?;
	}

	speaker.rest(TERMINATOR)
}

/// Walks the whole table, one sixteenth each.
pub fn play_chromatic<S: Speaker>(speaker: &mut S, table: &NoteTable, tempo: Tempo) -> Result<(), S::Error> {
	let unit = tempo.sixteenth();

	for note in table.notes() {
		speaker.play(note.frequency(), unit)?;
	}

	Ok(())
}

pub fn sequence_length(sequence: &Sequence, tempo: Tempo) -> Duration {
	sequence.iter()
		.map(|e| tempo.units(e.units))
		.sum::<Duration>() + TERMINATOR
}
