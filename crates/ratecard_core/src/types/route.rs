//! Routes and route lookup.

use super::rate::RateVector;

/// An origin/destination pair with its per-bracket rates.
///
/// Route names are free text compared exactly. Uniqueness of the pair within
/// a table is not enforced; lookups resolve to the first match.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Origin name
    pub origin: String,
    /// Destination name
    #[cfg_attr(feature = "serde", serde(rename = "dest"))]
    pub destination: String,
    /// Rate cells aligned with the bracket limits
    pub rates: RateVector,
}

impl Route {
    /// Create a route with the given rates.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        rates: RateVector,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            rates,
        }
    }

    /// A blank row with `brackets` unset rate cells.
    pub fn empty(brackets: usize) -> Self {
        Self::new("", "", RateVector::unset(brackets))
    }

    /// Returns true if this route serves `origin` to `destination`.
    #[inline]
    pub fn matches(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

/// Find the first route serving `origin` to `destination`.
///
/// # Example
///
/// ```
/// use ratecard_core::types::{find_route, RateVector, Route};
///
/// let routes = vec![
///     Route::new("MNL", "CEB", RateVector::unset(2)),
///     Route::new("MNL", "DVO", RateVector::unset(2)),
/// ];
///
/// let (index, route) = find_route(&routes, "MNL", "DVO").unwrap();
/// assert_eq!(index, 1);
/// assert_eq!(route.destination, "DVO");
/// assert!(find_route(&routes, "CEB", "MNL").is_none());
/// ```
pub fn find_route<'a>(
    routes: &'a [Route],
    origin: &str,
    destination: &str,
) -> Option<(usize, &'a Route)> {
    routes
        .iter()
        .enumerate()
        .find(|(_, route)| route.matches(origin, destination))
}
