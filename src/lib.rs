#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
mod level;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod replay;
pub mod rules;
mod solver;
mod store;
mod vehicle;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
pub use level::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use replay::*;
pub use solver::*;
pub use store::*;
pub use vehicle::*;
