//! Temperature profiles driving the simulated annealing of LHS designs.
//!
//! A profile is a pure function of the iteration number `i` which gives the
//! temperature `T(i)` of the annealing chain, from `T(0) = T0` down to the end of
//! the iteration budget `i_max`.
use crate::errors::{OptLhsError, Result};
use linfa::Float;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

const DEFAULT_T0: f64 = 10.;
const DEFAULT_C: f64 = 0.95;
const DEFAULT_I_MAX: usize = 2000;

/// A cooling schedule `i -> T(i)`
pub trait TemperatureProfile<F: Float> {
    /// Temperature at iteration `i`
    fn temperature(&self, i: usize) -> F;
    /// Initial temperature
    fn t0(&self) -> F;
    /// Maximum number of iterations
    fn i_max(&self) -> usize;
}

fn check_t0<F: Float>(t0: F) -> Result<()> {
    if !(t0.is_finite() && t0 >= F::zero()) {
        return Err(OptLhsError::InvalidConfigError(format!(
            "Initial temperature should be finite and non negative, got {t0}"
        )));
    }
    Ok(())
}

/// Geometric profile: `T(i) = T0 * c^i` with `0 < c < 1`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct GeometricProfile<F: Float> {
    t0: F,
    c: F,
    i_max: usize,
}

impl<F: Float> GeometricProfile<F> {
    /// Constructor
    ///
    /// Returns an error if `c` is not in (0, 1) or if `t0` is negative.
    pub fn new(t0: F, c: F, i_max: usize) -> Result<Self> {
        check_t0(t0)?;
        if !(c > F::zero() && c < F::one()) {
            return Err(OptLhsError::InvalidConfigError(format!(
                "Geometric profile factor should be in (0, 1), got {c}"
            )));
        }
        Ok(GeometricProfile { t0, c, i_max })
    }

    /// Cooling factor
    pub fn c(&self) -> F {
        self.c
    }
}

impl<F: Float> Default for GeometricProfile<F> {
    fn default() -> Self {
        GeometricProfile {
            t0: F::cast(DEFAULT_T0),
            c: F::cast(DEFAULT_C),
            i_max: DEFAULT_I_MAX,
        }
    }
}

impl<F: Float> TemperatureProfile<F> for GeometricProfile<F> {
    fn temperature(&self, i: usize) -> F {
        self.t0 * self.c.powi(i.min(i32::MAX as usize) as i32)
    }

    fn t0(&self) -> F {
        self.t0
    }

    fn i_max(&self) -> usize {
        self.i_max
    }
}

/// Linear profile: `T(i) = T0 * (1 - i / i_max)` for `i < i_max`, 0 otherwise
///
/// With `i_max = 0` the temperature is always 0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct LinearProfile<F: Float> {
    t0: F,
    i_max: usize,
}

impl<F: Float> LinearProfile<F> {
    /// Constructor
    ///
    /// Returns an error if `t0` is negative.
    pub fn new(t0: F, i_max: usize) -> Result<Self> {
        check_t0(t0)?;
        Ok(LinearProfile { t0, i_max })
    }
}

impl<F: Float> Default for LinearProfile<F> {
    fn default() -> Self {
        LinearProfile {
            t0: F::cast(DEFAULT_T0),
            i_max: DEFAULT_I_MAX,
        }
    }
}

impl<F: Float> TemperatureProfile<F> for LinearProfile<F> {
    fn temperature(&self, i: usize) -> F {
        if i >= self.i_max {
            return F::zero();
        }
        self.t0 * (F::one() - F::cast(i) / F::cast(self.i_max))
    }

    fn t0(&self) -> F {
        self.t0
    }

    fn i_max(&self) -> usize {
        self.i_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    fn temperatures<P: TemperatureProfile<f64>>(profile: &P, n: usize) -> Array1<f64> {
        (0..n).map(|i| profile.temperature(i)).collect()
    }

    #[test]
    fn test_geometric_profile() {
        let profile = GeometricProfile::new(10., 0.9, 5).unwrap();
        let expected = array![10., 9., 8.1, 7.29, 6.561, 5.9049];
        assert_abs_diff_eq!(temperatures(&profile, 6), expected, epsilon = 1e-12);
        assert_eq!(profile.i_max(), 5);
    }

    #[test]
    fn test_linear_profile() {
        let profile = LinearProfile::new(10., 5).unwrap();
        let expected = array![10., 8., 6., 4., 2., 0., 0., 0.];
        assert_abs_diff_eq!(temperatures(&profile, 8), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_profiles_cooling() {
        let geom = GeometricProfile::<f64>::default();
        let lin = LinearProfile::<f64>::default();
        assert_eq!(geom.temperature(0), geom.t0());
        assert_eq!(lin.temperature(0), lin.t0());
        assert_eq!(lin.temperature(lin.i_max()), 0.);
        for i in 1..geom.i_max() {
            assert!(geom.temperature(i) <= geom.temperature(i - 1));
            assert!(lin.temperature(i) <= lin.temperature(i - 1));
        }
    }

    #[test]
    fn test_linear_no_cooling() {
        let profile = LinearProfile::new(10., 0).unwrap();
        assert_eq!(profile.temperature(0), 0.);
        assert_eq!(profile.temperature(3), 0.);
    }

    #[test]
    fn test_invalid_profiles() {
        assert!(GeometricProfile::new(10., 1., 5).is_err());
        assert!(GeometricProfile::new(10., 0., 5).is_err());
        assert!(GeometricProfile::new(10., 1.5, 5).is_err());
        assert!(GeometricProfile::new(-1., 0.5, 5).is_err());
        assert!(LinearProfile::new(f64::NAN, 5).is_err());
        assert!(GeometricProfile::new(10., 0.5, 0).is_ok());
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_serialize_profile() {
        let profile = GeometricProfile::new(10., 0.9, 5).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let loaded: GeometricProfile<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, loaded);
    }
}
