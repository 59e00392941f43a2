use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use rppal::uart::{ Parity, Uart };

macro_rules! log {
	($($arg:tt)*) => {
		println!("[{}] {}", chrono::Local::now().format("%H:%M:%S%.3f"), format_args!($($arg)*))
	}
}

mod circuit;
use circuit::Buzzer;

mod command;

mod config;
use config::{ Config, ConfigError };

mod console;
use console::{ Console, UartConsole };

mod decoder;

mod error;

mod help;

mod metronome;
use metronome::METRONOME;

mod note;

mod player;

mod sequencer;
use sequencer::Sequencer;

mod tempo;

mod threads;
use threads::input::{ poll_serial, READ_TIMEOUT };


#[derive(Debug)]
enum Error {
	Config(ConfigError),
	Pwm(rppal::pwm::Error),
	Uart(rppal::uart::Error),
}

impl From<ConfigError> for Error {
	fn from(from: ConfigError) -> Self {
		Self::Config(from)
	}
}

impl From<rppal::pwm::Error> for Error {
	fn from(from: rppal::pwm::Error) -> Self {
		Self::Pwm(from)
	}
}

impl From<rppal::uart::Error> for Error {
	fn from(from: rppal::uart::Error) -> Self {
		Self::Uart(from)
	}
}

fn main() -> Result<(), Error> {
	let mut args = std::env::args();

	// parse arguments
	if 2 != args.len() {
		eprintln!("Usage: {} CONFIG", args.next().unwrap_or_else(|| "jingle_maker".to_owned()));
		return Ok(());
	}

	let args = args.collect::<Vec<_>>();

	let config = Config::load(&args[1])?;
	log!("Loaded config {:?}", config);

	// create speaker on the PWM output
	let buzzer = Buzzer::new(config.pwm_channel()?)?;

	// open serial link shared by the reader thread and the console
	let mut uart = Uart::with_path(config.serial_path(), config.baud_rate, Parity::None, 8, 1)?;
	uart.set_read_mode(0, READ_TIMEOUT)?;
	uart.set_write_mode(true)?;
	let uart = Arc::new(Mutex::new(uart));
	log!("Opened {} at {} baud", config.serial_path(), config.baud_rate);

	let (byte_sender, byte_receiver) = mpsc::channel();

	// start thread to read serial input
	let _thread_input = {
		let uart = Arc::clone(&uart);
		thread::spawn(move || {
			if let Err(e) = poll_serial(uart, byte_sender, &METRONOME) {
				log!("Serial input stopped: {}", e);
			}
		})
	};

	let mut console = UartConsole::new(uart, byte_receiver);
	startup(&mut console, config.startup_banner);

	let mut sequencer = Sequencer::new(buzzer, console, &METRONOME);
	sequencer.run()?;

	log!("Serial link closed");

	Ok(())
}

fn startup<C: Console>(console: &mut C, banner: bool) {
	if banner {
		for i in 0..128_u64 {
			console.puts("*");
			thread::sleep(Duration::from_micros(20_000 - 5_000 * (i / 32)));

			if i % 32 == 31 {
				console.puts("\r\n");
			}
		}
	}

	console.putln("StartUP----------> JingleMaker");
	console.putln("NOTE-> Current version supports notes from A4 - G#5 (1 octave)");
	console.putln("NOTE-> No use of sharp symbol(#) instead used flat(b)");
}
