//! Internal utilities shared by the ecprime crates
//!
//! Not part of the public API; items here may change between releases.

#![forbid(unsafe_code)]

pub mod constant_time;
