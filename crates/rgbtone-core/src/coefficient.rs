//! Validated per-channel scaling coefficients.
//!
//! A [`Coefficient`] is any finite `f64`. Negative values are allowed: the
//! products they produce are clamped to zero downstream. NaN and infinities
//! are rejected at construction so the transform never has to reason about
//! them.

use crate::{Channel, Error, Result};
use std::fmt;

/// A finite scalar multiplier for one channel's intensities.
///
/// # Example
///
/// ```rust
/// use rgbtone_core::{Channel, Coefficient};
///
/// let half = Coefficient::new(Channel::Red, 0.5).unwrap();
/// assert_eq!(half.get(), 0.5);
/// assert!(Coefficient::new(Channel::Red, f64::NAN).is_err());
/// assert!(Coefficient::default().is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Coefficient(f64);

impl Coefficient {
    /// The identity coefficient (1.0).
    pub const IDENTITY: Coefficient = Coefficient(1.0);

    /// Validates `value` as the coefficient for `channel`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoefficient`] if `value` is NaN or infinite.
    pub fn new(channel: Channel, value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(Error::invalid_coefficient(channel, value))
        }
    }

    /// Raw value.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// `true` when scaling by this coefficient leaves every value unchanged.
    #[inline]
    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `(red, green, blue)` coefficient triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coefficients {
    /// Red multiplier
    pub red: Coefficient,
    /// Green multiplier
    pub green: Coefficient,
    /// Blue multiplier
    pub blue: Coefficient,
}

impl Coefficients {
    /// Validates all three values, red first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoefficient`] naming the first non-finite channel.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self> {
        Ok(Self {
            red: Coefficient::new(Channel::Red, red)?,
            green: Coefficient::new(Channel::Green, green)?,
            blue: Coefficient::new(Channel::Blue, blue)?,
        })
    }

    /// Coefficient for `channel`.
    #[inline]
    pub fn get(&self, channel: Channel) -> Coefficient {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// `true` when all three coefficients are 1.0.
    pub fn is_identity(&self) -> bool {
        self.red.is_identity() && self.green.is_identity() && self.blue.is_identity()
    }
}
