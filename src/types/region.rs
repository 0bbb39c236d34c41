//! Defines the [`Region`] enum and the per-region constant bundles that drive map
//! projection, label placement and city spacing.

use crate::types::geo::ViewportOffset;
use std::fmt;

/// Scale and origin constants for one base-map image.
///
/// A source pixel is computed as `(lat_origin - lat) * lat_scale` on the y axis and
/// `(lon - lon_origin) * lon_scale` on the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConstants {
    /// Height of the full base-map image in pixels.
    pub image_height: f64,
    /// Width of the full base-map image in pixels.
    pub image_width: f64,
    /// Pixels per degree of latitude.
    pub lat_scale: f64,
    /// Latitude at the top edge of the image.
    pub lat_origin: f64,
    /// Pixels per degree of longitude.
    pub lon_scale: f64,
    /// Longitude at the left edge of the image.
    pub lon_origin: f64,
}

const CONTINENTAL: ProjectionConstants = ProjectionConstants {
    image_height: 1600.0,
    image_width: 2550.0,
    lat_scale: 55.2,
    lat_origin: 50.5,
    lon_scale: 41.775,
    lon_origin: -127.5,
};

const ALASKA: ProjectionConstants = ProjectionConstants {
    image_height: 1142.0,
    image_width: 1200.0,
    lat_scale: 56.0,
    lat_origin: 73.0,
    lon_scale: 25.0,
    lon_origin: -175.0,
};

const HAWAII: ProjectionConstants = ProjectionConstants {
    image_height: 571.0,
    image_width: 600.0,
    lat_scale: 55.2,
    lat_origin: 25.0,
    lon_scale: 41.775,
    lon_origin: -164.5,
};

/// Pixels per degree of latitude when placing labels on the cropped canvas.
pub(crate) const CITY_LAT_SCALE: f64 = 70.0;

/// One of the three map configurations the regional display can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// The continental United States.
    #[default]
    Default,
    Alaska,
    Hawaii,
}

impl Region {
    /// Picks the region for a two letter state/admin code. Anything other than
    /// `AK` or `HI` (including lowercase variants) maps to the continental map.
    ///
    /// # Examples
    ///
    /// ```
    /// use regional_forecast::Region;
    ///
    /// assert_eq!(Region::from_state_code("AK"), Region::Alaska);
    /// assert_eq!(Region::from_state_code("hi"), Region::Hawaii);
    /// assert_eq!(Region::from_state_code("NC"), Region::Default);
    /// ```
    pub fn from_state_code(state: &str) -> Self {
        match state.trim().to_ascii_uppercase().as_str() {
            "AK" => Region::Alaska,
            "HI" => Region::Hawaii,
            _ => Region::Default,
        }
    }

    pub fn projection(&self) -> &'static ProjectionConstants {
        match self {
            Region::Default => &CONTINENTAL,
            Region::Alaska => &ALASKA,
            Region::Hawaii => &HAWAII,
        }
    }

    /// Pixels per degree of longitude when placing labels on the cropped canvas.
    pub fn city_lon_scale(&self) -> f64 {
        match self {
            Region::Alaska => 37.0,
            Region::Default | Region::Hawaii => 57.0,
        }
    }

    /// Minimum planar distance between a station-list candidate and every city
    /// already placed on the map.
    pub fn target_distance(&self) -> f64 {
        match self {
            Region::Hawaii => 1.0,
            Region::Default | Region::Alaska => 2.5,
        }
    }

    pub fn viewport_offset(&self) -> ViewportOffset {
        ViewportOffset::new(240, 117)
    }

    pub fn base_map(&self) -> &'static str {
        match self {
            Region::Default => "images/Basemap2.png",
            Region::Alaska => "images/AlaskaRadarMap6.png",
            Region::Hawaii => "images/HawaiiRadarMap4.png",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Default => "continental",
            Region::Alaska => "alaska",
            Region::Hawaii => "hawaii",
        };
        write!(f, "{}", name)
    }
}
