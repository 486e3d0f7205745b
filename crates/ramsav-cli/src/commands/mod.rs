//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod convert;
pub mod hex_utils;
pub mod inspect;
pub mod locate;
