use std::sync::mpsc::Receiver;
use std::sync::Arc;

use parking_lot::Mutex;
use rppal::uart::Uart;

pub const MAX_CHARS: usize = 80;

const BACKSPACE: u8 = 8;
const DELETE: u8 = 127;
const CARRIAGE_RETURN: u8 = b'\r';
const LINE_FEED: u8 = b'\n';

/// Character-level serial terminal.
pub trait Console {
	/// Blocks for the next received byte. `None` once the link is gone.
	fn getc(&mut self) -> Option<u8>;

	fn puts(&mut self, s: &str);

	/// Reads one line, ending at carriage return, line feed or after
	/// `MAX_CHARS` characters. A line feed on an empty line is the tail of
	/// a CR LF pair and is skipped. Backspace edits, other control
	/// characters are dropped.
	fn gets(&mut self) -> Option<String> {
		let mut line = String::with_capacity(MAX_CHARS);

		loop {
			let c = self.getc()?;

			match c {
				BACKSPACE | DELETE => {
					line.pop();
				}
				CARRIAGE_RETURN => break,
				LINE_FEED if line.is_empty() => (),
				LINE_FEED => break,
				c if c.is_ascii_graphic() || c == b' ' => {
					line.push(c as char);

					if line.len() == MAX_CHARS {
						break;
					}
				}
				_ => (),
			}
		}

		Some(line)
	}

	fn putln(&mut self, s: &str) {
		self.puts(s);
		self.puts("\r\n");
	}
}

/// Reads bytes forwarded by the serial input thread, writes straight to the UART.
pub struct UartConsole {
	uart: Arc<Mutex<Uart>>,
	receiver: Receiver<u8>,
}

impl UartConsole {
	pub fn new(uart: Arc<Mutex<Uart>>, receiver: Receiver<u8>) -> Self {
		Self { uart, receiver }
	}
}

impl Console for UartConsole {
	fn getc(&mut self) -> Option<u8> {
		self.receiver.recv().ok()
	}

	fn puts(&mut self, s: &str) {
		let mut uart = self.uart.lock();
		let mut bytes = s.as_bytes();

		while !bytes.is_empty() {
			match uart.write(bytes) {
				Ok(written) => bytes = &bytes[written..],
				Err(e) => {
					log!("Unable to write to serial: {}", e);
					break;
				}
			}
		}
	}
}
