//! PomoSFX CLI library.
//!
//! Command implementations for the `pomosfx` binary: batch notification
//! sound generation and WAV-to-C-array conversion.

pub mod commands;
