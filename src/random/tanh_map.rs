//! Delayed coupled hyperbolic tangent map.
//!
//! A one-dimensional map with delay, written as a two-dimensional system:
//!
//! ```text
//! x1' = x2
//! x2' = (Z * a * tanh(x1) + (1 - Z) * b * tanh(x2)) mod 1
//! ```
//!
//! `mod 1` is a floored remainder landing in `[0, 1)`. For the gains this
//! crate derives (`a`, `b` in `[5, 6)` or `[10, 11)`), the orbit is chaotic.

/// Trait for discrete chaotic maps iterated one step at a time.
pub trait ChaoticMap {
    /// Advances the map by one step.
    fn next_point(&mut self);

    /// Returns the current trajectory point.
    fn state(&self) -> TrajectoryState;

    /// Advances the map `steps` times, discarding intermediate points.
    fn skip(&mut self, steps: usize) {
        for _ in 0..steps {
            self.next_point();
        }
    }
}

/// One point `(x1, x2)` of a trajectory. `x1` is the delayed coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrajectoryState {
    pub x1: f64,
    pub x2: f64,
}

impl TrajectoryState {
    pub fn new(x1: f64, x2: f64) -> Self {
        TrajectoryState { x1, x2 }
    }
}

/// Control parameters `(Z, a, b)` of one map instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapParameters {
    /// Coupling weight between the delayed and current terms.
    pub z: f64,
    /// Gain on the delayed coordinate.
    pub a: f64,
    /// Gain on the current coordinate.
    pub b: f64,
}

impl MapParameters {
    pub fn new(z: f64, a: f64, b: f64) -> Self {
        MapParameters { z, a, b }
    }

    /// Applies one iteration of the map to `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaotic_passgen::random::tanh_map::{MapParameters, TrajectoryState};
    ///
    /// let params = MapParameters::new(0.5, 5.5, 10.5);
    /// let next = params.step(TrajectoryState::new(0.1, 0.2));
    /// assert_eq!(next.x1, 0.2);
    /// assert!((0.0..1.0).contains(&next.x2));
    /// ```
    pub fn step(&self, point: TrajectoryState) -> TrajectoryState {
        let delayed = self.z * self.a * point.x1.tanh();
        let current = (1.0 - self.z) * self.b * point.x2.tanh();
        TrajectoryState {
            x1: point.x2,
            x2: unit_fraction(delayed + current),
        }
    }
}

/// Floored `value mod 1`, kept strictly below 1.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly `1.0`; those fold
/// to `0.0`. Non-negative inputs are unaffected.
fn unit_fraction(value: f64) -> f64 {
    let r = value.rem_euclid(1.0);
    if r < 1.0 {
        r
    } else {
        0.0
    }
}

/// A single trajectory of the delayed tanh map.
pub struct TanhDelayMap {
    params: MapParameters,
    point: TrajectoryState,
}

impl TanhDelayMap {
    /// Creates a trajectory starting at `origin`.
    ///
    /// # Parameters
    /// - `params`: The `(Z, a, b)` control parameters.
    /// - `origin`: The initial point `(x1, x2)`.
    pub fn new(params: MapParameters, origin: TrajectoryState) -> Self {
        TanhDelayMap {
            params,
            point: origin,
        }
    }

    /// Returns the current (non-delayed) coordinate `x2`.
    pub fn current(&self) -> f64 {
        self.point.x2
    }
}

impl ChaoticMap for TanhDelayMap {
    fn next_point(&mut self) {
        self.point = self.params.step(self.point);
    }

    fn state(&self) -> TrajectoryState {
        self.point
    }
}

impl Drop for TanhDelayMap {
    /// Clears the trajectory and its parameters on drop.
    fn drop(&mut self) {
        self.point = TrajectoryState::new(0.0, 0.0);
        self.params = MapParameters::new(0.0, 0.0, 0.0);
    }
}
