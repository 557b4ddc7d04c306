//! Skull Island: a top-down arcade shooter.
//!
//! The library holds the whole game model and frame logic; the binary is a
//! thin crossterm front end that feeds it input and draws the result.

pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod highscore;
pub mod input;
pub mod screen;
pub mod session;
pub mod spawn;
pub mod sprite;
