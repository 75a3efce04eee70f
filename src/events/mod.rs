//! Event types and observers.
//!
//! Submodules:
//! - [`input`] – input action events and the gameplay observers reacting to them
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod input;
pub mod switchdebug;
