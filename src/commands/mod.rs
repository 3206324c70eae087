//! Command implementations for the MLB Stats CLI.
//!
//! Each handler validates user-supplied codes against the reference tables,
//! calls the API client, and prints fixed-width text. No failure here is
//! fatal: unknown codes, empty results, and transport errors all degrade to
//! a printed message and a normal return.

pub mod leaders;
pub mod roster;
pub mod stats;
