//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Color`], [`Piece`] and [`Cell`] for board contents
//! - [`Square`], [`File`], and [`Rank`] for the 32 playable squares
//! - [`Direction`] for the four diagonals
//! - [`Move`] for simple steps and capture chains
//! - [`Layout`] parsing and serialization

mod color;
mod direction;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use direction::Direction;
pub use layout::{Layout, LayoutError};
pub use mov::{Move, MoveParseError};
pub use piece::{Cell, Piece};
pub use square::{File, Rank, Square, SquareError};
