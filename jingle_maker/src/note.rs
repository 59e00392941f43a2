use once_cell::sync::Lazy;

/// Symbols in table order. Flats are the lowercase letters, `O` is a rest.
const SYMBOLS: [u8; 13] = *b"AbBCdDeEFgGaO";

/// Frequencies in Hz, one octave from A4.
const FREQUENCIES: [u16; 13] = [440, 466, 494, 523, 554, 587, 622, 659, 698, 740, 784, 830, 0];

pub const FLAT: u8 = b'b';

pub static NOTE_TABLE: Lazy<NoteTable> = Lazy::new(|| NoteTable::new(&SYMBOLS, &FREQUENCIES));

pub trait Note {
	fn frequency(&self) -> u16;
}

pub struct NoteTable {
	entries: Vec<(u8, u16)>,
}

impl NoteTable {
	fn new(symbols: &[u8], frequencies: &[u16]) -> Self {
		Self {
			entries: symbols.iter().copied().zip(frequencies.iter().copied()).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn index_of(&self, symbol: u8) -> Option<TableNote> {
		self.entries.iter()
			.position(|&(s, _)| s == symbol)
			.map(|i| self.note(i))
	}

	fn note(&self, index: usize) -> TableNote {
		let (symbol, frequency) = self.entries[index];

		TableNote { symbol, frequency }
	}

	/// Looks up a root letter, optionally lowered a semitone by a flat marker.
	pub fn resolve(&self, root: u8, flat: bool) -> Option<TableNote> {
		if !flat {
			return self.index_of(root);
		}

		// only an uppercase natural has a lowercase flat counterpart
		if root.is_ascii_uppercase() {
			self.index_of(root.to_ascii_lowercase())
		} else {
			None
		}
	}

	pub fn notes(&self) -> impl Iterator<Item = TableNote> + '_ {
		(0..self.len()).map(move |i| self.note(i))
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TableNote {
	symbol: u8,
	frequency: u16,
}

impl TableNote {
	pub fn symbol(&self) -> char {
		self.symbol as char
	}
}

impl Note for TableNote {
	fn frequency(&self) -> u16 {
		self.frequency
	}
}
