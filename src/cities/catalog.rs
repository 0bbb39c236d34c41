//! The two city lists that feed the regional map and the rule for merging them
//! into one prioritized candidate sequence.

use crate::cities::error::CatalogError;
use crate::types::city::CandidateCity;
use crate::types::geo::LatLon;
use crate::types::region::Region;
use serde::{Deserialize, Serialize};

const BUILTIN_CITIES: &str = include_str!("../../data/regional_cities.json");
const BUILTIN_STATIONS: &str = include_str!("../../data/station_info.json");

/// Threshold for curated cities that do not carry their own.
const CURATED_DEFAULT_SEPARATION: f64 = 1.0;

/// A hand-picked city. These always rank ahead of stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedCity {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    /// Overrides the default separation of 1 degree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_distance: Option<f64>,
}

/// An observation station that can stand in for a city where the curated list is
/// sparse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    /// ICAO identifier, e.g. "KAVL".
    pub id: String,
    pub city: String,
    pub state: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    curated: Vec<CuratedCity>,
    stations: Vec<StationInfo>,
}

impl CityCatalog {
    pub fn new(curated: Vec<CuratedCity>, stations: Vec<StationInfo>) -> Self {
        Self { curated, stations }
    }

    /// The catalog shipped with the crate, covering the continental US, Alaska and
    /// Hawaii.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CITIES, BUILTIN_STATIONS)
    }

    pub fn from_json(curated: &str, stations: &str) -> Result<Self, CatalogError> {
        let curated = serde_json::from_str(curated).map_err(CatalogError::CuratedParse)?;
        let stations = serde_json::from_str(stations).map_err(CatalogError::StationParse)?;
        Ok(Self { curated, stations })
    }

    pub fn curated(&self) -> &[CuratedCity] {
        &self.curated
    }

    pub fn stations(&self) -> &[StationInfo] {
        &self.stations
    }

    /// Merges both lists into selection order: curated cities first, then stations.
    ///
    /// Stations get the region's target distance so they only fill gaps between
    /// curated cities.
    pub fn candidates(&self, region: Region) -> Vec<CandidateCity> {
        let curated = self.curated.iter().map(|c| {
            CandidateCity::new(
                c.city.clone(),
                LatLon(c.lat, c.lon),
                c.target_distance.unwrap_or(CURATED_DEFAULT_SEPARATION),
            )
        });
        let stations = self.stations.iter().map(|s| {
            CandidateCity::new(
                s.city.clone(),
                LatLon(s.lat, s.lon),
                region.target_distance(),
            )
        });
        curated.chain(stations).collect()
    }
}
