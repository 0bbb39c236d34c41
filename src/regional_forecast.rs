//! This module provides the main entry point: [`RegionalForecast`] loads the cities
//! around a viewer and draws them onto the regional map.

use crate::cities::catalog::CityCatalog;
use crate::cities::selector::place;
use crate::error::RegionalForecastError;
use crate::project::{to_bounding_box, to_pixel};
use crate::render::{MapCanvas, MapRenderer};
use crate::types::forecast::{RegionalData, Screen};
use crate::types::geo::LatLon;
use crate::types::region::Region;
use crate::units::DisplayUnits;
use crate::weather_data::assembler::ForecastAssembler;
use crate::weather_data::source::{NwsClient, WeatherSource};
use bon::bon;
use log::{info, warn};

/// Where the regional display is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStatus {
    #[default]
    Loading,
    Loaded,
    NoData,
}

/// The regional forecast display.
///
/// Create an instance with [`RegionalForecast::new()`] to talk to api.weather.gov
/// with the built-in city catalog, or [`RegionalForecast::with_source()`] to plug
/// in another [`WeatherSource`] or catalog.
///
/// # Examples
///
/// ```no_run
/// # use regional_forecast::{LatLon, RegionalForecast, RegionalForecastError, DisplayStatus};
/// # #[tokio::main]
/// # async fn main() -> Result<(), RegionalForecastError> {
/// let mut display = RegionalForecast::new()?;
/// let status = display
///     .get_data()
///     .location(LatLon(35.7796, -78.6382))
///     .state("NC")
///     .call()
///     .await;
/// assert_eq!(status, display.status());
/// # Ok(())
/// # }
/// ```
pub struct RegionalForecast<S = NwsClient> {
    source: S,
    catalog: CityCatalog,
    status: DisplayStatus,
    data: Option<RegionalData>,
}

impl RegionalForecast<NwsClient> {
    /// Uses a default [`NwsClient`] and [`CityCatalog::builtin()`].
    ///
    /// # Errors
    ///
    /// Returns [`RegionalForecastError::WeatherData`] if the HTTP client cannot be
    /// built and [`RegionalForecastError::Catalog`] if the built-in catalog does not
    /// parse.
    pub fn new() -> Result<Self, RegionalForecastError> {
        let source = NwsClient::builder().build()?;
        Ok(Self::with_source(source, CityCatalog::builtin()?))
    }
}

#[bon]
impl<S: WeatherSource> RegionalForecast<S> {
    pub fn with_source(source: S, catalog: CityCatalog) -> Self {
        Self {
            source,
            catalog,
            status: DisplayStatus::Loading,
            data: None,
        }
    }

    /// Loads the map around `location`.
    ///
    /// The region comes from `.region(..)` if given, otherwise from `.state(..)`,
    /// otherwise the continental map is used. Earlier data is discarded.
    ///
    /// Returns the resulting status: [`DisplayStatus::Loaded`] when at least one
    /// city has all three records, [`DisplayStatus::NoData`] otherwise.
    #[builder]
    pub async fn get_data(
        &mut self,
        location: LatLon,
        region: Option<Region>,
        state: Option<&str>,
    ) -> DisplayStatus {
        let region = region
            .or_else(|| state.map(Region::from_state_code))
            .unwrap_or_default();

        self.status = DisplayStatus::Loading;
        self.data = None;

        let offset = region.viewport_offset();
        let source = to_pixel(location, offset, region);
        let bbox = to_bounding_box(source, offset, region);

        let candidates = self.catalog.candidates(region);
        let selected = place(&candidates, &bbox, region);
        info!(
            "Selected {} of {} candidate cities for the {} map",
            selected.len(),
            candidates.len(),
            region
        );

        match ForecastAssembler::new(&self.source).assemble(&selected).await {
            Ok(assembled) => {
                self.data = Some(RegionalData {
                    region,
                    cities: assembled.cities,
                    offset,
                    source,
                });
                self.status = DisplayStatus::Loaded;
            }
            Err(e) => {
                warn!("{}", e);
                self.status = DisplayStatus::NoData;
            }
        }
        self.status
    }

    pub fn status(&self) -> DisplayStatus {
        self.status
    }

    pub fn data(&self) -> Option<&RegionalData> {
        self.data.as_ref()
    }

    /// Draws one of the three screens.
    ///
    /// # Errors
    ///
    /// Returns [`RegionalForecastError::NotLoaded`] if the last load did not
    /// produce data.
    pub fn render(
        &self,
        screen: Screen,
        units: DisplayUnits,
        canvas: &mut impl MapCanvas,
    ) -> Result<(), RegionalForecastError> {
        let data = self.data.as_ref().ok_or(RegionalForecastError::NotLoaded)?;
        MapRenderer::new(data).render(screen, units, canvas);
        Ok(())
    }
}
