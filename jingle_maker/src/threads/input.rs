use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use rppal::uart::Uart;

use crate::metronome::StopSignal;

/// How long a read may hold the UART before letting writers in.
pub const READ_TIMEOUT: Duration = Duration::from_millis(10);

/// Stands in for the UART receive interrupt: every byte stops a running
/// metronome, then goes on to the console.
pub fn poll_serial(
	uart: Arc<Mutex<Uart>>,
	byte_sender: mpsc::Sender<u8>,
	metronome: &StopSignal,
) -> rppal::uart::Result<()> {
	let mut buffer = [0_u8; 16];

	loop {
		let count = uart.lock().read(&mut buffer)?;

		if count == 0 {
			thread::sleep(Duration::from_millis(1));
			continue;
		}

		metronome.stop();

		for &byte in &buffer[..count] {
			if byte_sender.send(byte).is_err() {
				return Ok(());
			}
		}
	}
}
