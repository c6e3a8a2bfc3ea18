//! Random bit vector files for exercising Hamming weight counters.
//!
//! Each line of a vector file is a fixed number of '0'/'1' characters with a
//! random handful of bits set. See [`generator::Generator`] for the
//! generation rules and [`verify`] for reading a file back.

pub mod bitvec;
pub mod config;
pub mod error;
pub mod generator;
pub mod util;
pub mod verify;

pub use bitvec::BitVector;
pub use config::Config;
pub use error::{Error, Result};
pub use generator::{Generator, Summary, generate, generate_with};
