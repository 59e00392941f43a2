mod buzzer;

pub use buzzer::{ Buzzer, Speaker };
