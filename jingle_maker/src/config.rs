use std::fmt;
use std::fs;
use std::path::Path;

use rppal::pwm::Channel;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
	pwm_channel: u8,
	serial_path: String,
	pub baud_rate: u32,
	pub startup_banner: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			pwm_channel: 0,
			serial_path: "/dev/serial0".to_owned(),
			baud_rate: 115_200,
			startup_banner: true,
		}
	}
}

#[derive(Debug)]
pub enum ConfigError {
	Io(std::io::Error),
	Toml(toml::de::Error),
	PwmChannel(u8),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::Io(e) => write!(f, "unable to read config: {}", e),
			ConfigError::Toml(e) => write!(f, "unable to parse config: {}", e),
			ConfigError::PwmChannel(c) => write!(f, "no PWM channel {}, expected 0 or 1", c),
		}
	}
}

impl std::error::Error for ConfigError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ConfigError::Io(ref e) => Some(e),
			ConfigError::Toml(ref e) => Some(e),
			ConfigError::PwmChannel(_) => None,
		}
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		ConfigError::Io(err)
	}
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		ConfigError::Toml(err)
	}
}

impl Config {
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		Self::parse(&fs::read_to_string(path)?)
	}

	pub fn parse(text: &str) -> Result<Self, ConfigError> {
		let config: Config = toml::from_str(text)?;

		// fail at load, not when the speaker is opened
		config.pwm_channel()?;

		Ok(config)
	}

	pub fn pwm_channel(&self) -> Result<Channel, ConfigError> {
		match self.pwm_channel {
			0 => Ok(Channel::Pwm0),
			1 => Ok(Channel::Pwm1),
			c => Err(ConfigError::PwmChannel(c)),
		}
	}

	pub fn serial_path(&self) -> &str {
		&self.serial_path
	}
}
