//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for every row type.

mod ban;
mod character;
mod log;
mod player;
mod warning;
