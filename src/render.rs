//! Placement of the regional map onto a drawing surface.
//!
//! Drawing itself belongs to the host through [`MapCanvas`]; this module decides
//! what goes where.

use crate::icons::regional_icon;
use crate::types::forecast::{ForecastRecord, RegionalData, Screen};
use crate::units::DisplayUnits;

/// Vertical offset of the map below the title bar.
pub const MAP_Y_OFFSET: i32 = 90;
/// Size the cropped base map is scaled to.
pub const MAP_WIDTH: i32 = 640;
pub const MAP_HEIGHT: i32 = 312;

const NAME_X_SHIFT: i32 = 40;
const LABEL_Y_SHIFT: i32 = -15;
const TEMPERATURE_Y_SHIFT: i32 = 20;
const TEMPERATURE_CHAR_WIDTH: i32 = 15;

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    CityName,
    Temperature,
}

impl TextStyle {
    pub fn font(&self) -> &'static str {
        match self {
            TextStyle::CityName => "Star4000",
            TextStyle::Temperature => "Star4000 Large Compressed",
        }
    }

    pub fn size_px(&self) -> u32 {
        match self {
            TextStyle::CityName => 20,
            TextStyle::Temperature => 28,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TextStyle::CityName => "#ffffff",
            TextStyle::Temperature => "#ffff00",
        }
    }
}

/// Drawing primitives supplied by the host display.
pub trait MapCanvas {
    fn draw_title(&mut self, top: &str, bottom: &str);
    fn draw_image(&mut self, asset: &str, source: Rect, dest: Rect);
    fn draw_icon(&mut self, icon: &str, x: i32, y: i32);
    fn draw_text(&mut self, style: TextStyle, x: i32, y: i32, text: &str);
}

/// Where one city's icon, name and temperature land on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub icon: Option<(String, i32, i32)>,
    pub name: (String, i32, i32),
    pub temperature: (String, i32, i32),
}

/// Places one record. The temperature is right-aligned by its character count.
pub fn place_label(record: &ForecastRecord, units: DisplayUnits) -> LabelPlacement {
    let label_y = record.y + LABEL_Y_SHIFT + MAP_Y_OFFSET;
    let temperature = units.display_temperature(record.temperature_f).to_string();
    let width = TEMPERATURE_CHAR_WIDTH * temperature.chars().count() as i32;

    LabelPlacement {
        icon: regional_icon(&record.icon, !record.daytime).map(|icon| (icon, record.x, label_y)),
        name: (record.name.clone(), record.x - NAME_X_SHIFT, label_y),
        temperature: (
            temperature,
            record.x - width,
            record.y + TEMPERATURE_Y_SHIFT + MAP_Y_OFFSET,
        ),
    }
}

/// Title lines for a screen. Forecast screens are named after the first city's
/// period, e.g. "Forecast for" / "Saturday Night".
pub fn screen_title(data: &RegionalData, screen: Screen) -> (String, String) {
    if screen == Screen::Observations {
        return ("Regional".to_string(), "Observations".to_string());
    }

    let Some(record) = data.cities.first().map(|city| city.record(screen)) else {
        return ("Forecast for".to_string(), String::new());
    };
    let day = record
        .start_time
        .map(|start| start.format("%A").to_string())
        .unwrap_or_default();
    let bottom = if record.daytime {
        day
    } else {
        format!("{} Night", day)
    };
    ("Forecast for".to_string(), bottom)
}

pub struct MapRenderer<'a> {
    data: &'a RegionalData,
}

impl<'a> MapRenderer<'a> {
    pub fn new(data: &'a RegionalData) -> Self {
        Self { data }
    }

    /// Draws the title, the cropped base map and every city's labels for `screen`.
    pub fn render(&self, screen: Screen, units: DisplayUnits, canvas: &mut impl MapCanvas) {
        let (top, bottom) = screen_title(self.data, screen);
        canvas.draw_title(&top, &bottom);

        let source = Rect {
            x: self.data.source.x,
            y: self.data.source.y,
            width: f64::from(self.data.offset.width()),
            height: f64::from(self.data.offset.height()),
        };
        let dest = Rect {
            x: 0.0,
            y: f64::from(MAP_Y_OFFSET),
            width: f64::from(MAP_WIDTH),
            height: f64::from(MAP_HEIGHT),
        };
        canvas.draw_image(self.data.region.base_map(), source, dest);

        for city in &self.data.cities {
            let placement = place_label(city.record(screen), units);
            if let Some((icon, x, y)) = &placement.icon {
                canvas.draw_icon(icon, *x, *y);
            }
            let (name, x, y) = &placement.name;
            canvas.draw_text(TextStyle::CityName, *x, *y, name);
            let (temperature, x, y) = &placement.temperature;
            canvas.draw_text(TextStyle::Temperature, *x, *y, temperature);
        }
    }
}
