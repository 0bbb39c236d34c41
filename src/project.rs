//! Coordinate math between latitude/longitude and the two pixel spaces of the
//! regional map: the full base-map image (used to pick the crop window) and the
//! cropped 640x312 canvas (used to place city labels).
//!
//! Every function saturates instead of failing. A location outside a region's
//! envelope is pinned to the nearest edge.

use crate::types::geo::{BoundingBox, LatLon, PixelPosition, SourcePoint, ViewportOffset};
use crate::types::region::{Region, CITY_LAT_SCALE};

/// Label placement window on the cropped canvas.
const CITY_X_MIN: f64 = 40.0;
const CITY_X_MAX: f64 = 580.0;
const CITY_Y_MIN: f64 = 30.0;
const CITY_Y_MAX: f64 = 282.0;

/// Pins `value` to `[0, max]`. The upper bound is checked first so a crop window
/// larger than the image lands on `max` rather than panicking like `f64::clamp`.
fn saturate(value: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Projects `location` to the top-left corner of a crop window centered on it.
///
/// The result is clamped so the window of `2 * offset` pixels never leaves the
/// region's base-map image.
///
/// # Examples
///
/// ```
/// use regional_forecast::{project, LatLon, Region};
///
/// let region = Region::Default;
/// let source = project::to_pixel(LatLon(35.78, -78.64), region.viewport_offset(), region);
/// assert!(source.x > 0.0 && source.y > 0.0);
/// ```
pub fn to_pixel(location: LatLon, offset: ViewportOffset, region: Region) -> SourcePoint {
    let constants = region.projection();

    let y = (constants.lat_origin - location.0) * constants.lat_scale - f64::from(offset.y);
    let y = saturate(y, constants.image_height - f64::from(offset.height()));

    let x = (location.1 - constants.lon_origin) * constants.lon_scale - f64::from(offset.x);
    let x = saturate(x, constants.image_width - f64::from(offset.width()));

    SourcePoint { x, y }
}

/// Latitude/longitude extent of the crop window whose top-left corner is `source`.
///
/// This inverts the unclamped form of [`to_pixel`]. A source point that was clamped
/// yields the box of the clamped window, not the box centered on the unclamped
/// location.
pub fn to_bounding_box(source: SourcePoint, offset: ViewportOffset, region: Region) -> BoundingBox {
    let constants = region.projection();

    let max_lat = constants.lat_origin - source.y / constants.lat_scale;
    let min_lat = constants.lat_origin - (source.y + f64::from(offset.height())) / constants.lat_scale;
    let min_lon = constants.lon_origin + source.x / constants.lon_scale;
    let max_lon = constants.lon_origin + (source.x + f64::from(offset.width())) / constants.lon_scale;

    BoundingBox {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    }
}

/// Places a city on the cropped canvas relative to the window's north-west corner.
///
/// Uses the label scale (70 px per degree of latitude, 57 or 37 px per degree of
/// longitude), which is unrelated to the base-map scale used by [`to_pixel`].
pub fn city_to_pixel(location: LatLon, max_lat: f64, min_lon: f64, region: Region) -> PixelPosition {
    let x = (location.1 - min_lon) * region.city_lon_scale();
    let y = (max_lat - location.0) * CITY_LAT_SCALE;

    PixelPosition {
        x: x.clamp(CITY_X_MIN, CITY_X_MAX),
        y: y.clamp(CITY_Y_MIN, CITY_Y_MAX),
    }
}
