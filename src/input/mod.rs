//! Input handling: keys, bindings and commands.

mod command;
mod key;

pub use command::Command;
pub use key::{Key, parse_keys};
