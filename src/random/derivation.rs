//! Secret-to-parameter derivation for the chaotic map.
//!
//! Converts each memorable secret into real-valued system parameters using
//! position-weighted inverse code point sums. The process:
//! 1. Control parameters `a`, `b`, `Z` come from [`weighted_inverse_sum`],
//!    folded into `[0, 1)` and lifted onto a fixed base.
//! 2. Initial conditions come from [`initial_condition`], a sum of powered
//!    fractional parts.
//!
//! All arithmetic is IEEE-754 `f64`. The evaluation order of every
//! expression is part of the output format: reordering a product changes
//! the last bits of a parameter, which changes every password.

use super::tanh_map::{MapParameters, TrajectoryState};
use crate::secrets::UserSecrets;

/// Small positive offset keeping every parameter away from its base value.
const OFFSET: f64 = 1e-6;

/// Base of the `a1` and `b1` coupling gains.
const LOW_GAIN_BASE: f64 = 5.0;

/// Base of the `a2` and `b2` coupling gains.
const HIGH_GAIN_BASE: f64 = 10.0;

/// Exponents cycle through `1..=9, 0` with character position.
const EXPONENT_CYCLE: usize = 10;

/// Sums `factor / ((i + 1) * c)` over the characters of `word`.
///
/// When `use_exponent` is set, each term is raised to the power
/// `(i + 1) mod 10` before accumulation. An empty word sums to `0.0`.
///
/// # Parameters
/// - `word`: The secret to fold.
/// - `factor`: Numerator applied to every term.
/// - `use_exponent`: Whether to raise terms to their cyclic exponent.
pub fn weighted_inverse_sum(word: &str, factor: f64, use_exponent: bool) -> f64 {
    let mut sum = 0.0;
    for (i, c) in word.chars().enumerate() {
        let position = (i + 1) as u64;
        let denominator = (position * c as u64) as f64;
        let term = factor / denominator;
        if use_exponent {
            sum += term.powf(((i + 1) % EXPONENT_CYCLE) as f64);
        } else {
            sum += term;
        }
    }
    sum
}

/// Derives a trajectory initial condition from `word`.
///
/// For each character at position `i` with code point `c`, takes the
/// fractional part of `2 / (i + 1) * c`, raises it to `(i + 1) mod 10`,
/// and accumulates. The result is offset by `1e-6`, so an empty word
/// yields exactly `1e-6`.
pub fn initial_condition(word: &str) -> f64 {
    let mut sum = 0.0;
    for (i, c) in word.chars().enumerate() {
        let term = 2.0 / (i + 1) as f64 * c as u32 as f64;
        let remainder = term.rem_euclid(1.0);
        let exponent = ((i + 1) % EXPONENT_CYCLE) as f64;
        sum += remainder.powf(exponent);
    }
    OFFSET + sum
}

/// Folds a weighted inverse sum into `[0, 1)` and lifts it onto `base`.
fn gain(base: f64, word: &str, factor: f64, use_exponent: bool) -> f64 {
    base + OFFSET + weighted_inverse_sum(word, factor, use_exponent).rem_euclid(1.0)
}

/// The ten real parameters driving both trajectories.
///
/// `a*`, `b*` lie in `[5, 6)` or `[10, 11)`; `z*` lie in `(0, 1)` for
/// ordinary printable input. Initial conditions are finite but otherwise
/// unconstrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub b2: f64,
    pub z1: f64,
    pub z2: f64,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SystemParameters {
    /// Derives all ten parameters from the user's secrets.
    ///
    /// | Parameter | Source | Factor | Exponent |
    /// |---|---|---|---|
    /// | `a1` | username | 1 | no |
    /// | `a2` | first teacher name | 5 | no |
    /// | `b1` | platform | 2 | no |
    /// | `b2` | platform | 2 | yes |
    /// | `z1` | favorite animal | 3 | no |
    /// | `z2` | mother family name | 4 | no |
    /// | `x0` | username | initial condition | |
    /// | `x1` | first teacher name | initial condition | |
    /// | `y0` | mother family name | initial condition | |
    /// | `y1` | favorite animal | initial condition | |
    pub fn derive(secrets: &UserSecrets) -> Self {
        SystemParameters {
            a1: gain(LOW_GAIN_BASE, secrets.username(), 1.0, false),
            a2: gain(HIGH_GAIN_BASE, secrets.first_teacher_name(), 5.0, false),
            b1: gain(LOW_GAIN_BASE, secrets.platform(), 2.0, false),
            b2: gain(HIGH_GAIN_BASE, secrets.platform(), 2.0, true),
            z1: gain(0.0, secrets.favorite_animal(), 3.0, false),
            z2: gain(0.0, secrets.mother_family_name(), 4.0, false),
            x0: initial_condition(secrets.username()),
            x1: initial_condition(secrets.first_teacher_name()),
            y0: initial_condition(secrets.mother_family_name()),
            y1: initial_condition(secrets.favorite_animal()),
        }
    }

    /// Map parameters `(Z1, a1, b1)` of the first trajectory.
    pub fn first_map(&self) -> MapParameters {
        MapParameters::new(self.z1, self.a1, self.b1)
    }

    /// Map parameters `(Z2, a2, b2)` of the second trajectory.
    pub fn second_map(&self) -> MapParameters {
        MapParameters::new(self.z2, self.a2, self.b2)
    }

    /// Initial state `(x0, y0)` of the first trajectory.
    pub fn first_origin(&self) -> TrajectoryState {
        TrajectoryState::new(self.x0, self.y0)
    }

    /// Initial state `(x1, y1)` of the second trajectory.
    pub fn second_origin(&self) -> TrajectoryState {
        TrajectoryState::new(self.x1, self.y1)
    }

    /// Returns all ten values in the order `a1, a2, b1, b2, z1, z2, x0, x1, y0, y1`.
    pub fn to_array(&self) -> [f64; 10] {
        [
            self.a1, self.a2, self.b1, self.b2, self.z1, self.z2, self.x0, self.x1, self.y0,
            self.y1,
        ]
    }
}
