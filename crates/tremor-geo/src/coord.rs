//! Geographic coordinates in degrees with boundary validation.

/// Errors produced when strictly validating geographic input.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// Latitude outside \[-90, 90\] degrees.
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside \[-180, 180\] degrees.
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// A coordinate component was NaN or infinite.
    #[error("non-finite coordinate component")]
    NonFinite,
}

/// A geographic coordinate in degrees.
///
/// Latitude is in \[-90, 90\] (positive = north), longitude in \[-180, 180\]
/// (positive = east). Construction sanitizes input so out-of-range values or
/// NaNs never reach downstream geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoord {
    /// Latitude in degrees, \[-90, 90\].
    pub latitude: f64,
    /// Longitude in degrees, \[-180, 180\].
    pub longitude: f64,
}

impl GeoCoord {
    /// Construct a `GeoCoord`, clamping both components into range.
    ///
    /// Non-finite input maps to 0.0 so no NaN can propagate into morph
    /// targets. Use [`GeoCoord::try_new`] to reject bad input instead.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let latitude = if latitude.is_finite() { latitude } else { 0.0 };
        let longitude = if longitude.is_finite() { longitude } else { 0.0 };
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    /// Construct a `GeoCoord`, rejecting out-of-range or non-finite input.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in radians.
    #[must_use]
    pub fn lat_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians.
    #[must_use]
    pub fn lon_radians(&self) -> f64 {
        self.longitude.to_radians()
    }
}
