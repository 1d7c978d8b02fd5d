//! Chaotic pseudo-random subsystem.
//!
//! Derives map parameters from the user's secrets, iterates the delayed
//! tanh map, and extracts candidate bytes from its trajectories.

pub mod derivation;
pub mod prbg;
pub mod tanh_map;
