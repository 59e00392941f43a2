use std::convert::TryFrom;
use std::fmt;

use crate::circuit::Speaker;
use crate::command::CommandLine;
use crate::console::Console;
use crate::decoder::decode;
use crate::error::CommandError;
use crate::help::help_menu;
use crate::metronome::{ Metronome, StopSignal };
use crate::note::{ NoteTable, TableNote, FLAT, NOTE_TABLE };
use crate::player::{ play_chromatic, play_sequence, sequence_length };
use crate::tempo::Tempo;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verb {
	Demo,
	Chromatic,
	Metronome,
	Help,
}

impl Verb {
	/// Spelling, verb and the number of arguments it needs.
	const TABLE: [(&'static str, Verb, usize); 7] = [
		("demo", Verb::Demo, 2),
		("Chromatic", Verb::Chromatic, 1),
		("chromatic", Verb::Chromatic, 1),
		("Metronome", Verb::Metronome, 2),
		("metronome", Verb::Metronome, 2),
		("help", Verb::Help, 0),
		("Help", Verb::Help, 0),
	];

	pub fn matching(line: &CommandLine) -> Option<Verb> {
		Self::TABLE.iter()
			.find(|(name, _, args)| line.is_command(name, *args))
			.map(|&(_, verb, _)| verb)
	}

	fn as_str(&self) -> &'static str {
		use Verb::*;

		match self {
			Demo => "demo",
			Chromatic => "Chromatic",
			Metronome => "Metronome",
			Help => "help",
		}
	}
}

impl fmt::Display for Verb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Reads commands from a console and plays them on a speaker.
pub struct Sequencer<'a, S, C> {
	speaker: S,
	console: C,
	metronome: &'a StopSignal,
	table: &'a NoteTable,
}

impl<'a, S, C> Sequencer<'a, S, C> where
	S: Speaker,
	C: Console,
{
	pub fn new(speaker: S, console: C, metronome: &'a StopSignal) -> Self {
		Self { speaker, console, metronome, table: &*NOTE_TABLE }
	}

	#[cfg(test)]
	pub fn speaker(&self) -> &S {
		&self.speaker
	}

	#[cfg(test)]
	pub fn console(&self) -> &C {
		&self.console
	}

	/// Serves lines until the console closes.
	pub fn run(&mut self) -> Result<(), S::Error> {
		while let Some(line) = self.console.gets() {
			self.handle(&line)?;
		}

		Ok(())
	}

	/// Runs one line. Bad input is reported on the console; only speaker
	/// failures come back as errors.
	pub fn handle(&mut self, buffer: &str) -> Result<(), S::Error> {
		self.console.putln(buffer);

		let line = CommandLine::parse(buffer);

		let result = match Verb::matching(&line) {
			Some(verb) => {
				log!("Running {}", verb);
				self.dispatch(verb, &line)?
			}
			None if !line.is_empty() => Err(CommandError::InvalidSyntax),
			None => Ok(()),
		};

		if let Err(e) = result {
			log!("Rejected {:?}: {}", line.buffer(), e);
			self.console.putln(&e.to_string());
		}

		Ok(())
	}

	fn dispatch(&mut self, verb: Verb, line: &CommandLine) -> Result<Result<(), CommandError>, S::Error> {
		match verb {
			Verb::Demo => self.demo(line),
			Verb::Chromatic => self.chromatic(line),
			Verb::Metronome => self.metronome(line),
			Verb::Help => {
				help_menu(&mut self.console);
				Ok(Ok(()))
			}
		}
	}

	fn demo(&mut self, line: &CommandLine) -> Result<Result<(), CommandError>, S::Error> {
		let tempo = match tempo(line, Verb::Demo) {
			Ok(tempo) => tempo,
			Err(e) => return Ok(Err(e)),
		};

		let sequence = match line.text(2).filter(|s| !s.is_empty()) {
			Some(text) => decode(text, self.table),
			None => return Ok(Err(CommandError::InvalidTempoRange(Verb::Demo))),
		};

		match sequence {
			Ok(sequence) => {
				log!("Playing {} notes over {:?}", sequence.len(), sequence_length(&sequence, tempo));
				play_sequence(&mut self.speaker, &sequence, tempo)?;
				Ok(Ok(()))
			}
			Err(e) => Ok(Err(e.into())),
		}
	}

	fn chromatic(&mut self, line: &CommandLine) -> Result<Result<(), CommandError>, S::Error> {
		match tempo(line, Verb::Chromatic) {
			Ok(tempo) => {
				play_chromatic(&mut self.speaker, self.table, tempo)?;
				Ok(Ok(()))
			}
			Err(e) => Ok(Err(e)),
		}
	}

	fn metronome(&mut self, line: &CommandLine) -> Result<Result<(), CommandError>, S::Error> {
		let tempo = match tempo(line, Verb::Metronome) {
			Ok(tempo) => tempo,
			Err(e) => return Ok(Err(e)),
		};

		let note = match line.text(2).and_then(|s| single_note(s, self.table)) {
			Some(note) => note,
			None => return Ok(Err(CommandError::InvalidNote)),
		};

		let metronome = Metronome::new(tempo, note);

		log!("Metronome at {} bpm on {}, {:?} per cycle", tempo.bpm(), note.symbol(), metronome.cycle());
		metronome.run(&mut self.speaker, self.metronome)?;
		log!("Metronome stopped");

		Ok(Ok(()))
	}
}

fn tempo(line: &CommandLine, verb: Verb) -> Result<Tempo, CommandError> {
	line.integer(1)
		.and_then(|bpm| Tempo::try_from(bpm).ok())
		.ok_or(CommandError::InvalidTempoRange(verb))
}

/// A lone note: its first character, lowered when the second is a flat.
/// Anything after that is ignored.
pub fn single_note(s: &str, table: &NoteTable) -> Option<TableNote> {
	let mut bytes = s.bytes();
	let root = bytes.next()?;
	let flat = bytes.next() == Some(FLAT);

	table.resolve(root, flat)
}
