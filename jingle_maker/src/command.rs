use std::ops::Range;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldType {
	Text,
	Integer,
}

#[derive(Clone, PartialEq, Eq, Debug)]
struct Field {
	field_type: FieldType,
	span: Range<usize>,
}

/// One line of user input split into fields.
///
/// A field is a run of letters, digits and `-`. Its type comes from its
/// first character, so `E1Eb1` is a single text field and `-12` an integer
/// field. Anything else separates fields and is dropped.
#[derive(Debug)]
pub struct CommandLine {
	buffer: String,
	fields: Vec<Field>,
}

impl CommandLine {
	pub fn parse(buffer: impl Into<String>) -> Self {
		let buffer = buffer.into();
		let fields = parse_fields(&buffer);

		Self { buffer, fields }
	}

	pub fn buffer(&self) -> &str {
		&self.buffer
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Field text of any type.
	pub fn text(&self, index: usize) -> Option<&str> {
		self.fields.get(index).map(|f| &self.buffer[f.span.clone()])
	}

	/// `None` unless the field exists, is numeric and fits an `i32`.
	pub fn integer(&self, index: usize) -> Option<i32> {
		match self.fields.get(index) {
			Some(Field { field_type: FieldType::Integer, span }) => self.buffer[span.clone()].parse().ok(),
			_ => None,
		}
	}

	/// True when the first field is `verb` and at least `args` fields follow it.
	pub fn is_command(&self, verb: &str, args: usize) -> bool {
		self.text(0) == Some(verb) && self.field_count() > args
	}
}

fn is_field_char(c: u8) -> bool {
	c.is_ascii_alphanumeric() || c == b'-'
}

fn parse_fields(buffer: &str) -> Vec<Field> {
	let bytes = buffer.as_bytes();
	let mut fields = Vec::new();
	let mut i = 0;

	while i < bytes.len() {
		if !is_field_char(bytes[i]) {
			i += 1;
			continue;
		}

		let start = i;
		while i < bytes.len() && is_field_char(bytes[i]) {
			i += 1;
		}

		let field_type = if bytes[start].is_ascii_alphabetic() {
			FieldType::Text
		} else {
			FieldType::Integer
		};

		fields.push(Field { field_type, span: start..i });
	}

	fields
}
