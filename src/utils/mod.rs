//! Low-level helpers shared by the random subsystem.

pub(crate) mod bits;
