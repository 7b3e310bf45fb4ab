//! Byte-order, frequency and time helpers
//!
//! This module provides:
//! - Whole-buffer and per-word byte reversal
//! - Display-order hex for hashes
//! - Most-frequent value selection across peer-reported values
//! - Timestamp formatting

pub mod bytes;
pub mod freq;
pub mod time;

pub use bytes::{from_display_hex, reverse_bytes, reverse_dword_bytes, to_display_hex};
pub use freq::{is_power_of_two, max_of_most_freq};
pub use time::{date_time_format, format_date_time};
