use crate::weather_data::error::WeatherDataError;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Unit a temperature was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Accepts WMO unit codes (`wmoUnit:degC`) as well as the bare `C`/`F` letters
    /// used by forecast periods.
    pub fn parse(code: &str) -> Result<Self, WeatherDataError> {
        let unit = code.rsplit(':').next().unwrap_or(code);
        match unit {
            "degC" | "C" => Ok(TemperatureUnit::Celsius),
            "degF" | "F" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(WeatherDataError::UnknownTemperatureUnit(code.to_string())),
        }
    }

    pub fn to_fahrenheit(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius_to_fahrenheit(value),
            TemperatureUnit::Fahrenheit => value,
        }
    }
}

/// Unit the map shows temperatures in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayUnits {
    #[default]
    Imperial,
    Metric,
}

impl DisplayUnits {
    /// Whole-degree temperature as drawn on the map, from a Fahrenheit value.
    pub fn display_temperature(&self, fahrenheit: f64) -> i64 {
        let value = match self {
            DisplayUnits::Imperial => fahrenheit,
            DisplayUnits::Metric => fahrenheit_to_celsius(fahrenheit),
        };
        value.round() as i64
    }
}
