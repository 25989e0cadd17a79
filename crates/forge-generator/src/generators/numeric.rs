//! Numeric value generators.
//!
//! Integer ranges are half-open (`[min, max)`), float ranges are closed
//! (`[min, max]`). Gaussian draws reject means whose magnitude exceeds the
//! square root of the type's maximum, where the distribution loses precision.

use crate::error::ForgeError;
use forge_core::RandomStream;
use std::fmt::Display;

/// Standard deviation used by integer Gaussians when none is given.
pub const DEFAULT_INT_STANDARD_DEVIATION: i32 = 100;

/// Constraint on a forged number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberSpec<T> {
    /// Uniform in a range; half-open for integers, closed for floats
    Range { min: T, max: T },

    /// Normal distribution
    Gaussian { mean: T, standard_deviation: T },
}

/// Numeric types the Forge can constrain.
pub trait Bounded: Copy + PartialOrd + Display {
    /// Lowest value of the default range
    const LOWEST: Self;
    /// Upper bound of the default range
    const HIGHEST: Self;
    /// Mean of the default Gaussian
    const ZERO: Self;
    /// Standard deviation of the default Gaussian
    const DEFAULT_DEVIATION: Self;
}

impl Bounded for i32 {
    const LOWEST: Self = i32::MIN;
    const HIGHEST: Self = i32::MAX;
    const ZERO: Self = 0;
    const DEFAULT_DEVIATION: Self = DEFAULT_INT_STANDARD_DEVIATION;
}

impl Bounded for i64 {
    const LOWEST: Self = i64::MIN;
    const HIGHEST: Self = i64::MAX;
    const ZERO: Self = 0;
    const DEFAULT_DEVIATION: Self = DEFAULT_INT_STANDARD_DEVIATION as i64;
}

impl Bounded for f32 {
    const LOWEST: Self = -f32::MAX;
    const HIGHEST: Self = f32::MAX;
    const ZERO: Self = 0.0;
    const DEFAULT_DEVIATION: Self = 1.0;
}

impl Bounded for f64 {
    const LOWEST: Self = -f64::MAX;
    const HIGHEST: Self = f64::MAX;
    const ZERO: Self = 0.0;
    const DEFAULT_DEVIATION: Self = 1.0;
}

impl<T: Bounded> Default for NumberSpec<T> {
    fn default() -> Self {
        Self::Range {
            min: T::LOWEST,
            max: T::HIGHEST,
        }
    }
}

impl<T: Bounded> NumberSpec<T> {
    /// Uniform range.
    pub fn range(min: T, max: T) -> Self {
        Self::Range { min, max }
    }

    /// Normal distribution.
    pub fn gaussian(mean: T, standard_deviation: T) -> Self {
        Self::Gaussian {
            mean,
            standard_deviation,
        }
    }

    /// Build a spec from optional parameters.
    ///
    /// Range bounds and distribution parameters exclude each other. Missing
    /// bounds default to the type's full range, a missing mean to zero and a
    /// missing deviation to the type's default deviation.
    pub fn from_parts(
        min: Option<T>,
        max: Option<T>,
        mean: Option<T>,
        standard_deviation: Option<T>,
    ) -> Result<Self, ForgeError> {
        let ranged = min.is_some() || max.is_some();
        let distributed = mean.is_some() || standard_deviation.is_some();
        if ranged && distributed {
            return Err(ForgeError::ConstraintConflict(
                "min/max and mean/standard_deviation cannot be combined".to_string(),
            ));
        }
        if distributed {
            return Ok(Self::gaussian(
                mean.unwrap_or(T::ZERO),
                standard_deviation.unwrap_or(T::DEFAULT_DEVIATION),
            ));
        }
        Ok(Self::range(min.unwrap_or(T::LOWEST), max.unwrap_or(T::HIGHEST)))
    }
}

fn mean_limit(max: f64) -> f64 {
    max.sqrt().round()
}

fn check_gaussian(mean: f64, standard_deviation: f64, limit: f64) -> Result<(), ForgeError> {
    if mean.abs() > limit {
        return Err(ForgeError::InvalidConstraint(format!(
            "Gaussian mean {mean} is outside of [-{limit}, {limit}]"
        )));
    }
    if standard_deviation.is_nan() || standard_deviation < 0.0 {
        return Err(ForgeError::InvalidConstraint(format!(
            "Standard deviation ({standard_deviation}) must not be negative"
        )));
    }
    Ok(())
}

fn check_finite_bounds(min: f64, max: f64) -> Result<(), ForgeError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ForgeError::ConstraintConflict(format!(
            "Range bounds must be finite, got [{min}, {max}]"
        )));
    }
    Ok(())
}

fn empty_range<T: Display>(min: T, max: T, closed: bool) -> ForgeError {
    let relation = if closed { "less than or equal to" } else { "less than" };
    ForgeError::InvalidConstraint(format!(
        "The min boundary ({min}) of the range should be {relation} the max boundary ({max})"
    ))
}

/// Generate an i32 satisfying `spec`.
pub fn generate_int(stream: &mut RandomStream, spec: NumberSpec<i32>) -> Result<i32, ForgeError> {
    match spec {
        NumberSpec::Range { min, max } => {
            if min >= max {
                return Err(empty_range(min, max, false));
            }
            // both bounds fit in i32 so the draw does too
            Ok(stream.range_i64(i64::from(min), i64::from(max)) as i32)
        }
        NumberSpec::Gaussian {
            mean,
            standard_deviation,
        } => {
            check_gaussian(
                f64::from(mean),
                f64::from(standard_deviation),
                mean_limit(f64::from(i32::MAX)),
            )?;
            if standard_deviation == 0 {
                return Ok(mean);
            }
            let offset = (stream.gaussian() * f64::from(standard_deviation)).round();
            Ok((offset + f64::from(mean)) as i32)
        }
    }
}

/// Generate an i64 satisfying `spec`.
pub fn generate_long(stream: &mut RandomStream, spec: NumberSpec<i64>) -> Result<i64, ForgeError> {
    match spec {
        NumberSpec::Range { min, max } => {
            if min >= max {
                return Err(empty_range(min, max, false));
            }
            Ok(stream.range_i64(min, max))
        }
        NumberSpec::Gaussian {
            mean,
            standard_deviation,
        } => {
            check_gaussian(
                mean as f64,
                standard_deviation as f64,
                mean_limit(i64::MAX as f64),
            )?;
            if standard_deviation == 0 {
                return Ok(mean);
            }
            let offset = (stream.gaussian() * standard_deviation as f64).round() as i64;
            Ok(offset.saturating_add(mean))
        }
    }
}

/// Generate an f32 satisfying `spec`.
pub fn generate_float(stream: &mut RandomStream, spec: NumberSpec<f32>) -> Result<f32, ForgeError> {
    match spec {
        NumberSpec::Range { min, max } => {
            check_finite_bounds(f64::from(min), f64::from(max))?;
            if min > max {
                return Err(empty_range(min, max, true));
            }
            // halved so the span of the full type range stays finite
            let half_span = max / 2.0 - min / 2.0;
            let offset = stream.uniform_float() * half_span;
            Ok((min + offset + offset).clamp(min, max))
        }
        NumberSpec::Gaussian {
            mean,
            standard_deviation,
        } => {
            check_gaussian(
                f64::from(mean),
                f64::from(standard_deviation),
                f64::from(f32::MAX).sqrt(),
            )?;
            if standard_deviation == 0.0 {
                return Ok(mean);
            }
            Ok(stream.gaussian() as f32 * standard_deviation + mean)
        }
    }
}

/// Generate an f64 satisfying `spec`.
pub fn generate_double(
    stream: &mut RandomStream,
    spec: NumberSpec<f64>,
) -> Result<f64, ForgeError> {
    match spec {
        NumberSpec::Range { min, max } => {
            check_finite_bounds(min, max)?;
            if min > max {
                return Err(empty_range(min, max, true));
            }
            // halved so the span of the full type range stays finite
            let half_span = max / 2.0 - min / 2.0;
            let offset = stream.uniform_double() * half_span;
            Ok((min + offset + offset).clamp(min, max))
        }
        NumberSpec::Gaussian {
            mean,
            standard_deviation,
        } => {
            check_gaussian(mean, standard_deviation, f64::MAX.sqrt())?;
            if standard_deviation == 0.0 {
                return Ok(mean);
            }
            Ok(stream.gaussian() * standard_deviation + mean)
        }
    }
}
