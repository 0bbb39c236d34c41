//! City candidates considered for the regional map and the subset that ends up
//! placed on it.

use crate::types::geo::{LatLon, PixelPosition};
use serde::{Deserialize, Serialize};

/// A city that may be drawn on the map.
///
/// Candidates come from two lists (curated cities and observation stations) merged
/// into one ordered sequence. Position in that sequence is selection priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCity {
    /// Display name before formatting, e.g. `"Winston-Salem"`.
    pub name: String,
    pub location: LatLon,
    /// Minimum planar degree-distance this city must keep from every city
    /// accepted before it.
    pub min_separation: f64,
}

impl CandidateCity {
    pub fn new(name: impl Into<String>, location: LatLon, min_separation: f64) -> Self {
        Self {
            name: name.into(),
            location,
            min_separation,
        }
    }
}

/// A candidate that survived selection, with its label anchor on the map canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedCity {
    pub city: CandidateCity,
    pub position: PixelPosition,
}

impl SelectedCity {
    pub fn name(&self) -> &str {
        &self.city.name
    }

    pub fn location(&self) -> LatLon {
        self.city.location
    }
}

// LatLon is a tuple struct, so it serializes as `[lat, lon]`.
impl Serialize for LatLon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.0, self.1).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LatLon {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (lat, lon) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(LatLon(lat, lon))
    }
}
