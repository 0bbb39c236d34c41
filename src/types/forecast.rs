//! Render-ready weather records and the loaded state of a regional map.

use crate::error::RegionalForecastError;
use crate::types::geo::{SourcePoint, ViewportOffset};
use crate::types::region::Region;
use chrono::{DateTime, FixedOffset};

/// One of the three frames the regional display cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Latest observations.
    Observations = 0,
    /// The forecast period after the current one.
    NextPeriod = 1,
    /// The period after that.
    FollowingPeriod = 2,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Observations, Screen::NextPeriod, Screen::FollowingPeriod];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for Screen {
    type Error = RegionalForecastError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Screen::ALL
            .get(index)
            .copied()
            .ok_or(RegionalForecastError::InvalidScreen(index))
    }
}

/// What one city shows on one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    /// Map label, already shortened.
    pub name: String,
    pub daytime: bool,
    pub temperature_f: f64,
    /// api.weather.gov icon link.
    pub icon: String,
    pub x: i32,
    pub y: i32,
    /// Start of the forecast period. Observations have none.
    pub start_time: Option<DateTime<FixedOffset>>,
}

/// The three records of a city, indexed by [`Screen`].
#[derive(Debug, Clone, PartialEq)]
pub struct CityForecast {
    pub records: [ForecastRecord; 3],
}

impl CityForecast {
    pub fn record(&self, screen: Screen) -> &ForecastRecord {
        &self.records[screen.index()]
    }
}

/// Everything needed to draw the regional map after a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalData {
    pub region: Region,
    pub cities: Vec<CityForecast>,
    pub offset: ViewportOffset,
    pub source: SourcePoint,
}
