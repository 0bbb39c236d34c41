//! Geographic and pixel-space value types shared by the projection, the city
//! selector and the renderer.

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use regional_forecast::LatLon;
///
/// let raleigh = LatLon(35.7796, -78.6382);
/// assert_eq!(raleigh.0, 35.7796); // Latitude
/// assert_eq!(raleigh.1, -78.6382); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }

    /// Euclidean distance in degree space (longitude on x, latitude on y).
    ///
    /// This is deliberately not a great-circle distance: city spacing on the map
    /// is judged in the same flat lon/lat space the map is drawn in.
    pub fn planar_distance(&self, other: &LatLon) -> f64 {
        let dx = other.1 - self.1;
        let dy = other.0 - self.0;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Half-extent, in source-image pixels, of the window cropped out of the base map
/// around the viewer's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportOffset {
    pub x: i32,
    pub y: i32,
}

impl ViewportOffset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Full crop width in source pixels.
    pub fn width(&self) -> i32 {
        self.x * 2
    }

    /// Full crop height in source pixels.
    pub fn height(&self) -> i32 {
        self.y * 2
    }
}

/// Top-left corner of the crop window inside the full base-map image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePoint {
    pub x: f64,
    pub y: f64,
}

/// Label anchor on the 640x312 map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

/// Latitude/longitude extent visible through the crop window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Strict containment with a one degree margin on the eastern edge, which keeps
    /// labels from running off the right side of the map.
    pub fn admits(&self, location: LatLon) -> bool {
        location.0 > self.min_lat
            && location.0 < self.max_lat
            && location.1 > self.min_lon
            && location.1 < self.max_lon - 1.0
    }

    pub fn center(&self) -> LatLon {
        LatLon(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}
