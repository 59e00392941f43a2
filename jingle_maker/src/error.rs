use std::fmt;

use crate::sequencer::Verb;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecodeError {
	NoteNotFollowedByDuration,
	DurationMustBeSingleDigit,
	SequenceMisaligned,
	UnknownNote,
}

impl fmt::Display for DecodeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use DecodeError::*;

		f.write_str(match self {
			NoteNotFollowedByDuration => "Invalid entry-> Note not followed by duration",
			DurationMustBeSingleDigit => "Invalid entry-> Note duration can only be (1-8)",
			SequenceMisaligned => "Invalid entry. Notes don't align.",
			UnknownNote => "Note/s name invalid.",
		})
	}
}

impl std::error::Error for DecodeError {}

/// A command the user has to resubmit. Never fatal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandError {
	InvalidTempoRange(Verb),
	InvalidSyntax,
	InvalidNote,
	Decode(DecodeError),
}

impl fmt::Display for CommandError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use CommandError::*;

		match self {
			InvalidTempoRange(Verb::Demo) => f.write_str("Invalid syntax. Syntax-> demo tempo(60-180) note_sequence(string)"),
			InvalidTempoRange(_) => f.write_str("Invalid Tempo Input (range: 60 to 180)"),
			InvalidSyntax => f.write_str("Invalid code/syntax."),
			InvalidNote => f.write_str("Invalid Note entry."),
			Decode(e) => write!(f, "{}", e),
		}
	}
}

impl std::error::Error for CommandError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			CommandError::Decode(ref e) => Some(e),
			_ => None,
		}
	}
}

impl From<DecodeError> for CommandError {
	fn from(err: DecodeError) -> Self {
		CommandError::Decode(err)
	}
}
