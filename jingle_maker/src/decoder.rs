//! Note-sequence decoder.
//!
//! A sequence is written `(Symbol[b]? Digit)*`, e.g. `E1Eb1E1Eb1E1B1D1C1A2`.
//! Decoding is two passes: a single scan that collects note symbols and
//! durations and catches syntax errors, then a check over the collected
//! tokens that the counts align and every symbol is in the note table.

use heapless::Vec;

use crate::error::DecodeError;
use crate::note::{ NoteTable, TableNote, FLAT };

pub const MAX_NOTES: usize = 32;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NoteEvent {
	pub note: TableNote,
	/// Length in sixteenth notes, 1 to 8.
	pub units: u8,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Sequence {
	events: Vec<NoteEvent, MAX_NOTES>,
}

impl Sequence {
	pub fn len(&self) -> usize {
		self.events.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &NoteEvent> {
		self.events.iter()
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct NoteToken {
	root: u8,
	flat: bool,
}

fn is_symbol(c: u8) -> bool {
	(b'A'..=b'g').contains(&c)
}

fn is_duration(c: u8) -> bool {
	(b'1'..=b'8').contains(&c)
}

#[derive(Default)]
struct Scan {
	notes: Vec<NoteToken, MAX_NOTES>,
	durations: Vec<u8, MAX_NOTES>,
	// every token seen, including those past a full buffer
	note_count: usize,
	duration_count: usize,
}

impl Scan {
	fn run(sequence: &[u8]) -> Result<Self, DecodeError> {
		let mut scan = Self::default();
		let mut cursor = 0;
		let at = |i: usize| sequence.get(i).copied();

		while let Some(c) = at(cursor) {
			if is_symbol(c) {
				cursor += 1;

				let flat = at(cursor) == Some(FLAT);
				if flat {
					cursor += 1;
				}

				// full buffers stop taking notes, they never grow past MAX_NOTES
				let _ = scan.notes.push(NoteToken { root: c, flat });
				scan.note_count += 1;

				// the digit itself is consumed on the next pass through the loop
				if !at(cursor).map_or(false, is_duration) {
					return Err(DecodeError::NoteNotFollowedByDuration);
				}
			} else if is_duration(c) {
				let _ = scan.durations.push(c - b'0');
				scan.duration_count += 1;
				cursor += 1;

				if at(cursor).map_or(false, is_duration) {
					return Err(DecodeError::DurationMustBeSingleDigit);
				}
			} else {
				cursor += 1;
			}
		}

		Ok(scan)
	}

	fn resolve(self, table: &NoteTable) -> Result<Sequence, DecodeError> {
		if self.note_count != self.duration_count {
			return Err(DecodeError::SequenceMisaligned);
		}

		let mut events = Vec::new();

		for (token, &units) in self.notes.iter().zip(self.durations.iter()) {
			let note = table.resolve(token.root, token.flat)
				.ok_or(DecodeError::UnknownNote)?;

			// same capacity as the token buffers
			let _ = events.push(NoteEvent { note, units });
		}

		Ok(Sequence { events })
	}
}

pub fn decode(sequence: &str, table: &NoteTable) -> Result<Sequence, DecodeError> {
	Scan::run(sequence.as_bytes())?.resolve(table)
}
