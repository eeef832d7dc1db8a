//! A keyboard-driven four-function calculator.
//!
//! The [`calculator`] module holds the state machine and formatting, [`input`]
//! maps key presses to commands, and [`ui`] runs a terminal session around
//! them.

pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;
pub mod ui;
