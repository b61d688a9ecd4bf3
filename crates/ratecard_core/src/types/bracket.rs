//! Shared bracket limits.
//!
//! A rate card has one list of bracket limits shared by every model and
//! table. Each limit is the inclusive upper bound of its bracket; bracket 0
//! starts just above zero. Limits are kept positive; ascending order is a
//! convention of the editor and is not enforced.

use std::fmt;

use super::error::LimitError;

/// Limits of a freshly created rate card.
pub const DEFAULT_BRACKET_LIMITS: [f64; 4] = [50.0, 100.0, 150.0, 500.0];

/// Distance between the last limit and a newly appended one.
pub const NEW_BRACKET_STEP: f64 = 50.0;

/// Ordered inclusive upper bounds of the weight brackets.
///
/// # Examples
///
/// ```
/// use ratecard_core::types::BracketLimits;
///
/// let mut limits = BracketLimits::default();
/// assert_eq!(limits.as_slice(), &[50.0, 100.0, 150.0, 500.0]);
///
/// assert_eq!(limits.push_next(), 550.0);
/// assert_eq!(limits.label(1).as_deref(), Some("51-100kg"));
///
/// assert!(limits.set(0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct BracketLimits(Vec<f64>);

impl BracketLimits {
    /// Build limits, rejecting any value that is not a positive finite number.
    pub fn new(limits: Vec<f64>) -> Result<Self, LimitError> {
        for (index, &value) in limits.iter().enumerate() {
            check_limit(index, value)?;
        }
        Ok(Self(limits))
    }

    /// Limits as a slice, in bracket order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of brackets.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no brackets are configured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Upper bound of bracket `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// The largest configured limit. Limits are not required to ascend, so
    /// this is not necessarily the last one.
    pub fn max_limit(&self) -> Option<f64> {
        self.0.iter().copied().reduce(f64::max)
    }

    /// Append a bracket [`NEW_BRACKET_STEP`] above the current last limit.
    ///
    /// Returns the new limit. Rate vectors must be padded by the owner.
    pub fn push_next(&mut self) -> f64 {
        let next = self.0.last().copied().unwrap_or(0.0) + NEW_BRACKET_STEP;
        self.0.push(next);
        next
    }

    /// Replace the limit at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), LimitError> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(LimitError::IndexOutOfRange { index, len })?;
        check_limit(index, value)?;
        *slot = value;
        Ok(())
    }

    /// First whole weight billed in bracket `index` (1 for the first bracket).
    pub fn bracket_start(&self, index: usize) -> Option<f64> {
        match index {
            0 if !self.0.is_empty() => Some(1.0),
            0 => None,
            i => {
                self.get(i)?;
                Some(self.0[i - 1] + 1.0)
            }
        }
    }

    /// Human-readable range of bracket `index`, e.g. `"51-100kg"`.
    pub fn label(&self, index: usize) -> Option<String> {
        let start = self.bracket_start(index)?;
        let end = self.get(index)?;
        Some(format!("{}-{}kg", start, end))
    }
}

fn check_limit(index: usize, value: f64) -> Result<(), LimitError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LimitError::NotPositive { index, value })
    }
}

impl Default for BracketLimits {
    fn default() -> Self {
        Self(DEFAULT_BRACKET_LIMITS.to_vec())
    }
}

impl TryFrom<Vec<f64>> for BracketLimits {
    type Error = LimitError;

    fn try_from(limits: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(limits)
    }
}

impl From<BracketLimits> for Vec<f64> {
    fn from(limits: BracketLimits) -> Self {
        limits.0
    }
}

impl AsRef<[f64]> for BracketLimits {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl fmt::Display for BracketLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = (0..self.len()).filter_map(|i| self.label(i)).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}
