//! Terminal snake with three rule variants.
//!
//! The simulation lives in [`game`], [`snake`], [`food`], [`tetromino`] and
//! [`mode`]; everything else is the terminal front-end that drives ticks,
//! polls keys and draws state.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod mode;
pub mod platform;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod tetromino;
pub mod ui;
