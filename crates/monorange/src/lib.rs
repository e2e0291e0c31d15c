#![doc = include_str!("../README.md")]

mod calendar;
mod direction;
mod error;
mod gaps;
mod index_range;
mod search;

pub use calendar::*;
pub use direction::*;
pub use error::*;
pub use gaps::*;
pub use index_range::*;
pub use search::*;
