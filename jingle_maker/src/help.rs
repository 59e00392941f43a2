use crate::console::Console;

const MENU: &str = "Help Topics: \r\n\
	1. Function: demo\r\n\
	2. Function: Chromatic\r\n\
	3. Function: Metronome\r\n\
	0. Exit help.\r\n";

const DEMO: &str = "\r\n\r\ndemo Function-> Syntax: demo tempo note_sequence\r\n\
	tempo = tempo for the notes to be played in. (int)\r\n\
	note_sequence = sequence of notes to be played(string).\r\n\
	eg Note sequence: E1Eb1E1Eb1E1B1D1C1A2 plays Fur-elise\r\n\
	As shown in example each note is followed by the duration to hold that note.\r\n\
	The duration is in number of sixteenth notes.\r\n\
	A maximum of 32 notes can be played per demo function.\r\n\
	Notes are represented by their names (eg: A or Ab (no sharps)). Rest is O\r\n\r\n\r\n";

const CHROMATIC: &str = "\r\n\r\nChromatic Function-> Syntax: Chromatic tempo\r\n\
	Plays all the notes in specified tempo.\r\n\
	Can be used as a debug function\r\n\r\n\r\n";

const METRONOME: &str = "\r\n\r\nMetronome Function-> Syntax: Metronome tempo note\r\n\
	Plays user specified notes at quarter notes in given tempo.\r\n\r\n";

const EXIT: &str = "\r\nExit Help menu.\r\n\r\n";
const INVALID: &str = "\r\nInvalid Option.\r\n\r\n";

pub fn help_menu<C: Console>(console: &mut C) {
	loop {
		console.puts(MENU);

		let choice = match console.getc() {
			Some(c) => c,
			None => return,
		};

		match choice {
			b'1' => console.puts(DEMO),
			b'2' => console.puts(CHROMATIC),
			b'3' => console.puts(METRONOME),
			b'0' => {
				console.puts(EXIT);
				return;
			}
			_ => console.puts(INVALID),
		}
	}
}
