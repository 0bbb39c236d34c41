//! Turns selected cities into render-ready records by fetching each city's latest
//! observation and next two forecast periods.

use crate::cities::name::format_city_name;
use crate::error::RegionalForecastError;
use crate::types::city::SelectedCity;
use crate::types::forecast::{CityForecast, ForecastRecord};
use crate::units::TemperatureUnit;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::payload::{
    ForecastPeriod, ForecastPoint, ForecastResponse, Observation, ObservationResponse,
    StationCollection,
};
use crate::weather_data::source::{latest_observation_url, WeatherSource};
use futures_util::future::join_all;
use log::{info, warn};

/// Forecast periods shown on screens 1 and 2. Period 0 is the ongoing one and is
/// replaced by the live observation.
const FORECAST_PERIODS: [usize; 2] = [1, 2];

/// A city that was dropped from the map and why.
#[derive(Debug)]
pub struct CityFailure {
    pub city: String,
    pub error: WeatherDataError,
}

/// Cities that produced all three records, in selection order, plus the ones that
/// did not.
#[derive(Debug)]
pub struct AssembledForecast {
    pub cities: Vec<CityForecast>,
    pub failures: Vec<CityFailure>,
}

pub struct ForecastAssembler<'a, S> {
    source: &'a S,
}

impl<'a, S: WeatherSource> ForecastAssembler<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetches every city concurrently and waits for all of them.
    ///
    /// A city that fails at any step is dropped and logged; the others are not
    /// affected. Only when no city succeeds does this return
    /// [`RegionalForecastError::NoDataAvailable`].
    pub async fn assemble(
        &self,
        cities: &[SelectedCity],
    ) -> Result<AssembledForecast, RegionalForecastError> {
        let results = join_all(cities.iter().map(|city| self.city_forecast(city))).await;

        let mut forecasts = Vec::with_capacity(cities.len());
        let mut failures = Vec::new();
        for (city, result) in cities.iter().zip(results) {
            match result {
                Ok(forecast) => forecasts.push(forecast),
                Err(error) => {
                    warn!("No regional forecast data for '{}': {}", city.name(), error);
                    failures.push(CityFailure {
                        city: city.name().to_string(),
                        error,
                    });
                }
            }
        }

        if forecasts.is_empty() {
            return Err(RegionalForecastError::NoDataAvailable {
                cities_tried: cities.len(),
            });
        }

        info!(
            "Assembled regional data for {} of {} cities",
            forecasts.len(),
            cities.len()
        );
        Ok(AssembledForecast {
            cities: forecasts,
            failures,
        })
    }

    async fn city_forecast(&self, city: &SelectedCity) -> Result<CityForecast, WeatherDataError> {
        let point = self.source.point(city.location()).await?;

        // The observation chain and the forecast only share the point lookup.
        let (observation, forecast) = tokio::try_join!(
            self.latest_observation(&point),
            self.source.fetch_json::<ForecastResponse>(&point.forecast),
        )?;

        let name = format_city_name(city.name());
        let x = city.position.x.round() as i32;
        let y = city.position.y.round() as i32;

        let [next, following] = FORECAST_PERIODS.map(|index| {
            forecast
                .properties
                .periods
                .get(index)
                .ok_or_else(|| WeatherDataError::MissingPeriod {
                    url: point.forecast.clone(),
                    index,
                })
        });

        Ok(CityForecast {
            records: [
                observation_record(observation, &name, x, y)?,
                period_record(next?, &name, x, y)?,
                period_record(following?, &name, x, y)?,
            ],
        })
    }

    /// First listed station's latest observation, paired with that station's URL.
    async fn latest_observation(
        &self,
        point: &ForecastPoint,
    ) -> Result<(String, Observation), WeatherDataError> {
        let stations: StationCollection =
            self.source.fetch_json(&point.observation_stations).await?;
        let station = stations
            .features
            .into_iter()
            .next()
            .ok_or_else(|| WeatherDataError::NoObservationStations {
                url: point.observation_stations.clone(),
            })?
            .id;

        let observation: ObservationResponse = self
            .source
            .fetch_json(&latest_observation_url(&station))
            .await?;
        Ok((station, observation.properties))
    }
}

fn observation_record(
    (station, observation): (String, Observation),
    name: &str,
    x: i32,
    y: i32,
) -> Result<ForecastRecord, WeatherDataError> {
    let icon = observation
        .icon
        .ok_or_else(|| WeatherDataError::MissingObservationValue {
            station: station.clone(),
            field: "icon",
        })?;
    let value = observation
        .temperature
        .value
        .ok_or(WeatherDataError::MissingObservationValue {
            station,
            field: "temperature",
        })?;
    let unit = TemperatureUnit::parse(&observation.temperature.unit_code)?;

    Ok(ForecastRecord {
        name: name.to_string(),
        daytime: icon.contains("/day/"),
        temperature_f: unit.to_fahrenheit(value),
        icon,
        x,
        y,
        start_time: None,
    })
}

fn period_record(
    period: &ForecastPeriod,
    name: &str,
    x: i32,
    y: i32,
) -> Result<ForecastRecord, WeatherDataError> {
    let unit = TemperatureUnit::parse(&period.temperature_unit)?;
    Ok(ForecastRecord {
        name: name.to_string(),
        daytime: period.is_daytime,
        temperature_f: unit.to_fahrenheit(period.temperature.unwrap_or(0.0)),
        icon: period.icon.clone(),
        x,
        y,
        start_time: Some(period.start_time),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::city::CandidateCity;
    use crate::types::geo::{LatLon, PixelPosition};
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// In-memory weather service. Locations without a point, and URLs without a
    /// document, answer `NotFound`.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        points: HashMap<String, ForecastPoint>,
        documents: HashMap<String, Value>,
    }

    fn point_key(location: LatLon) -> String {
        format!("{:.4},{:.4}", location.0, location.1)
    }

    impl FakeSource {
        /// Registers a healthy city under `slug`. `observed_c` is the observation
        /// temperature in Celsius.
        pub(crate) fn with_city(mut self, slug: &str, location: LatLon, observed_c: f64) -> Self {
            let forecast = format!("https://fake.test/gridpoints/{slug}/forecast");
            let stations = format!("https://fake.test/gridpoints/{slug}/stations");
            let station = format!("https://fake.test/stations/{slug}");
            self.points.insert(
                point_key(location),
                ForecastPoint {
                    forecast: forecast.clone(),
                    observation_stations: stations.clone(),
                },
            );
            self.documents.insert(stations, json!({"features": [{"id": station.as_str()}]}));
            self.documents.insert(
                latest_observation_url(&station),
                json!({"properties": {
                    "icon": "https://api.weather.gov/icons/land/day/sct?size=medium",
                    "temperature": {"unitCode": "wmoUnit:degC", "value": observed_c}
                }}),
            );
            self.documents.insert(
                forecast,
                json!({"properties": {"periods": [
                    {"startTime": "2024-10-18T06:00:00-04:00", "isDaytime": true,
                     "temperature": 70, "temperatureUnit": "F",
                     "icon": "https://api.weather.gov/icons/land/day/skc?size=medium"},
                    {"startTime": "2024-10-18T18:00:00-04:00", "isDaytime": false,
                     "temperature": 48, "temperatureUnit": "F",
                     "icon": "https://api.weather.gov/icons/land/night/few?size=medium"},
                    {"startTime": "2024-10-19T06:00:00-04:00", "isDaytime": true,
                     "temperature": null, "temperatureUnit": "F",
                     "icon": "https://api.weather.gov/icons/land/day/rain,40?size=medium"}
                ]}}),
            );
            self
        }

        pub(crate) fn without(mut self, url: &str) -> Self {
            self.documents.remove(url);
            self
        }

        pub(crate) fn with_document(mut self, url: &str, document: Value) -> Self {
            self.documents.insert(url.to_string(), document);
            self
        }
    }

    impl WeatherSource for FakeSource {
        async fn point(&self, location: LatLon) -> Result<ForecastPoint, WeatherDataError> {
            let key = point_key(location);
            self.points
                .get(&key)
                .cloned()
                .ok_or(WeatherDataError::NotFound { url: key })
        }

        async fn fetch_json<T: DeserializeOwned + Send>(
            &self,
            url: &str,
        ) -> Result<T, WeatherDataError> {
            let document = self
                .documents
                .get(url)
                .cloned()
                .ok_or_else(|| WeatherDataError::NotFound {
                    url: url.to_string(),
                })?;
            serde_json::from_value(document).map_err(|e| WeatherDataError::JsonParse {
                url: url.to_string(),
                source: e,
            })
        }
    }

    pub(crate) fn selected(name: &str, location: LatLon, x: f64, y: f64) -> SelectedCity {
        SelectedCity {
            city: CandidateCity::new(name, location, 1.0),
            position: PixelPosition { x, y },
        }
    }

    const RALEIGH: LatLon = LatLon(35.7796, -78.6382);
    const ASHEVILLE: LatLon = LatLon(35.4362, -82.5418);
    const WILMINGTON: LatLon = LatLon(34.2706, -77.9026);

    fn three_cities() -> Vec<SelectedCity> {
        vec![
            selected("Raleigh", RALEIGH, 410.2, 120.0),
            selected("Asheville", ASHEVILLE, 188.0, 144.0),
            selected("Wilmington-Cape Fear", WILMINGTON, 450.0, 225.7),
        ]
    }

    #[tokio::test]
    async fn test_assembles_three_records_per_city() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_city("avl", ASHEVILLE, 10.0)
            .with_city("ilm", WILMINGTON, 25.0);

        let assembled = ForecastAssembler::new(&source).assemble(&three_cities()).await?;
        assert!(assembled.failures.is_empty());
        assert_eq!(assembled.cities.len(), 3);

        let [observation, next, following] = &assembled.cities[0].records;
        assert_eq!(observation.name, "Raleigh");
        assert!(observation.daytime);
        assert_eq!(observation.temperature_f, 68.0);
        assert_eq!(observation.start_time, None);
        assert_eq!((observation.x, observation.y), (410, 120));

        // Period 0 is skipped.
        assert_eq!(next.temperature_f, 48.0);
        assert!(!next.daytime);
        assert!(next.icon.contains("/night/few"));
        assert_eq!(
            next.start_time.map(|t| t.to_rfc3339()),
            Some("2024-10-18T18:00:00-04:00".to_string())
        );
        // A missing forecast temperature reads as zero.
        assert_eq!(following.temperature_f, 0.0);
        assert!(following.daytime);

        let wilmington = &assembled.cities[2].records[0];
        assert_eq!(wilmington.name, "Wilmington");
        assert_eq!((wilmington.x, wilmington.y), (450, 226));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_point_drops_only_that_city() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_city("ilm", WILMINGTON, 25.0);

        let assembled = ForecastAssembler::new(&source).assemble(&three_cities()).await?;
        let names: Vec<_> = assembled
            .cities
            .iter()
            .map(|c| c.records[0].name.as_str())
            .collect();
        assert_eq!(names, ["Raleigh", "Wilmington"]);
        assert_eq!(assembled.failures.len(), 1);
        assert_eq!(assembled.failures[0].city, "Asheville");
        assert!(matches!(
            assembled.failures[0].error,
            WeatherDataError::NotFound { .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_all_cities_failing_is_no_data() {
        let source = FakeSource::default();
        let result = ForecastAssembler::new(&source).assemble(&three_cities()).await;
        assert!(matches!(
            result,
            Err(RegionalForecastError::NoDataAvailable { cities_tried: 3 })
        ));
    }

    #[tokio::test]
    async fn test_no_cities_is_no_data() {
        let source = FakeSource::default();
        let result = ForecastAssembler::new(&source).assemble(&[]).await;
        assert!(matches!(
            result,
            Err(RegionalForecastError::NoDataAvailable { cities_tried: 0 })
        ));
    }

    #[tokio::test]
    async fn test_observation_failure_drops_whole_city() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_city("avl", ASHEVILLE, 10.0)
            .without("https://fake.test/stations/avl/observations/latest");

        let cities = &three_cities()[..2];
        let assembled = ForecastAssembler::new(&source).assemble(cities).await?;
        assert_eq!(assembled.cities.len(), 1);
        assert_eq!(assembled.failures[0].city, "Asheville");
        Ok(())
    }

    #[tokio::test]
    async fn test_forecast_failure_drops_whole_city() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_city("avl", ASHEVILLE, 10.0)
            .with_document(
                "https://fake.test/gridpoints/avl/forecast",
                json!({"properties": {"periods": []}}),
            );

        let cities = &three_cities()[..2];
        let assembled = ForecastAssembler::new(&source).assemble(cities).await?;
        assert_eq!(assembled.cities.len(), 1);
        assert!(matches!(
            assembled.failures[0].error,
            WeatherDataError::MissingPeriod { index: 1, .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_null_observation_temperature_drops_city() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_city("avl", ASHEVILLE, 10.0)
            .with_document(
                "https://fake.test/stations/avl/observations/latest",
                json!({"properties": {
                    "icon": "https://api.weather.gov/icons/land/night/ovc?size=medium",
                    "temperature": {"unitCode": "wmoUnit:degC", "value": null}
                }}),
            );

        let cities = &three_cities()[..2];
        let assembled = ForecastAssembler::new(&source).assemble(cities).await?;
        assert_eq!(assembled.cities.len(), 1);
        assert!(matches!(
            assembled.failures[0].error,
            WeatherDataError::MissingObservationValue { field: "temperature", .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_station_list_drops_city() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_city("avl", ASHEVILLE, 10.0)
            .with_document(
                "https://fake.test/gridpoints/avl/stations",
                json!({"features": []}),
            );

        let cities = &three_cities()[..2];
        let assembled = ForecastAssembler::new(&source).assemble(cities).await?;
        assert_eq!(assembled.cities.len(), 1);
        assert!(matches!(
            assembled.failures[0].error,
            WeatherDataError::NoObservationStations { .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_fahrenheit_observation_is_kept() -> Result<(), RegionalForecastError> {
        let source = FakeSource::default()
            .with_city("rdu", RALEIGH, 20.0)
            .with_document(
                "https://fake.test/stations/rdu/observations/latest",
                json!({"properties": {
                    "icon": "https://api.weather.gov/icons/land/night/skc?size=medium",
                    "temperature": {"unitCode": "wmoUnit:degF", "value": 55.4}
                }}),
            );

        let cities = &three_cities()[..1];
        let assembled = ForecastAssembler::new(&source).assemble(cities).await?;
        let observation = &assembled.cities[0].records[0];
        assert_eq!(observation.temperature_f, 55.4);
        assert!(!observation.daytime);
        Ok(())
    }
}
