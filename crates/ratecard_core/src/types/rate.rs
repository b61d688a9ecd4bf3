//! Per-bracket rate cells.

use super::error::RateInputError;

/// Rates of one route, one cell per bracket.
///
/// A cell is either a number or unset (`None`). The vector is expected to be
/// exactly as long as the bracket limits; the owning store calls
/// [`RateVector::resize`] whenever the bracket count changes.
///
/// # Examples
///
/// ```
/// use ratecard_core::types::RateVector;
///
/// let mut rates = RateVector::unset(3);
/// rates.set(0, Some(12.0));
/// assert_eq!(rates.as_slice(), &[Some(12.0), None, None]);
///
/// rates.resize(4);
/// assert_eq!(rates.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RateVector(Vec<Option<f64>>);

impl RateVector {
    /// A vector of `len` unset cells.
    pub fn unset(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Cells in bracket order.
    #[inline]
    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.0
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cell at `index`; `None` both for unset cells and out-of-range indices.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Overwrite the cell at `index`. Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, rate: Option<f64>) -> bool {
        match self.0.get_mut(index) {
            Some(cell) => {
                *cell = rate;
                true
            }
            None => false,
        }
    }

    /// Pad with unset cells or truncate to exactly `len` cells.
    pub fn resize(&mut self, len: usize) {
        self.0.resize(len, None);
    }
}

impl From<Vec<Option<f64>>> for RateVector {
    fn from(cells: Vec<Option<f64>>) -> Self {
        Self(cells)
    }
}

impl AsRef<[Option<f64>]> for RateVector {
    fn as_ref(&self) -> &[Option<f64>] {
        &self.0
    }
}

/// Turn user-entered text into a rate cell.
///
/// Blank text clears the cell. Anything else must parse as a finite number.
///
/// # Examples
///
/// ```
/// use ratecard_core::types::parse_rate_input;
///
/// assert_eq!(parse_rate_input("12.5"), Ok(Some(12.5)));
/// assert_eq!(parse_rate_input("  "), Ok(None));
/// assert!(parse_rate_input("abc").is_err());
/// assert!(parse_rate_input("inf").is_err());
/// ```
pub fn parse_rate_input(text: &str) -> Result<Option<f64>, RateInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(RateInputError::NotANumber(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_vector() {
        let rates = RateVector::unset(2);
        assert_eq!(rates.as_slice(), &[None, None]);
        assert_eq!(rates.get(0), None);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut rates = RateVector::unset(1);
        assert!(rates.set(0, Some(3.0)));
        assert!(!rates.set(1, Some(3.0)));
        assert_eq!(rates.get(0), Some(3.0));
    }

    #[test]
    fn test_resize_pads_and_truncates() {
        let mut rates = RateVector::from(vec![Some(1.0), Some(2.0)]);
        rates.resize(3);
        assert_eq!(rates.as_slice(), &[Some(1.0), Some(2.0), None]);
        rates.resize(1);
        assert_eq!(rates.as_slice(), &[Some(1.0)]);
    }

    #[test]
    fn test_parse_rate_input() {
        assert_eq!(parse_rate_input("0"), Ok(Some(0.0)));
        assert_eq!(parse_rate_input(" 7 "), Ok(Some(7.0)));
        assert_eq!(parse_rate_input(""), Ok(None));
        assert_eq!(
            parse_rate_input("NaN"),
            Err(RateInputError::NotANumber("NaN".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_null_for_unset() {
        let rates = RateVector::from(vec![Some(1.5), None]);
        assert_eq!(serde_json::to_string(&rates).unwrap(), "[1.5,null]");
        let parsed: RateVector = serde_json::from_str("[null, 4]").unwrap();
        assert_eq!(parsed.as_slice(), &[None, Some(4.0)]);
    }
}
