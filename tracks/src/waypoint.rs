use geodesy::{Length, Point};
use time::OffsetDateTime;

/// Reason why a set of field values does not describe a valid way point.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("way point requires both latitude and longitude")]
    MissingCoordinates,
    #[error("latitude must lie in [-90, 90] degrees, got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must lie in [-180, 180] degrees, got {0}")]
    LongitudeOutOfRange(f64),
}

/// A recorded position: coordinates plus optional elevation, timestamp and
/// descriptive metadata.
///
/// Immutable once built; create one through [`WayPoint::builder`] or the
/// [`WayPoint::new`] shortcut.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WayPoint {
    latitude: f64,
    longitude: f64,
    elevation: Option<Length>,
    time: Option<OffsetDateTime>,
    name: Option<String>,
    comment: Option<String>,
    description: Option<String>,
    symbol: Option<String>,
}

impl WayPoint {
    pub fn builder() -> WayPointBuilder {
        WayPointBuilder::default()
    }

    /// Way point with coordinates only.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ModelError> {
        Self::builder().latitude(latitude).longitude(longitude).build()
    }

    /// Latitude in decimal degrees.
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation above the reference ellipsoid, if recorded.
    pub const fn elevation(&self) -> Option<Length> {
        self.elevation
    }

    /// Recording timestamp, if any.
    pub const fn time(&self) -> Option<OffsetDateTime> {
        self.time
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Copy of this way point with a staged builder holding all current
    /// field values, for deriving a changed way point.
    pub fn to_builder(&self) -> WayPointBuilder {
        WayPointBuilder {
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            elevation: self.elevation,
            time: self.time,
            name: self.name.clone(),
            comment: self.comment.clone(),
            description: self.description.clone(),
            symbol: self.symbol.clone(),
        }
    }
}

impl Point for WayPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn elevation(&self) -> Option<Length> {
        self.elevation
    }
}

/// Mutable staging area for a [`WayPoint`]; discarded by [`build`].
///
/// [`build`]: WayPointBuilder::build
#[derive(Debug, Default, Clone)]
pub struct WayPointBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<Length>,
    time: Option<OffsetDateTime>,
    name: Option<String>,
    comment: Option<String>,
    description: Option<String>,
    symbol: Option<String>,
}

impl WayPointBuilder {
    pub fn latitude(mut self, degrees: f64) -> Self {
        self.latitude = Some(degrees);
        self
    }

    pub fn longitude(mut self, degrees: f64) -> Self {
        self.longitude = Some(degrees);
        self
    }

    pub fn elevation(mut self, elevation: Length) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn time(mut self, time: OffsetDateTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Freeze the staged values into a [`WayPoint`].
    pub fn build(self) -> Result<WayPoint, ModelError> {
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ModelError::MissingCoordinates);
        };

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ModelError::LatitudeOutOfRange(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ModelError::LongitudeOutOfRange(longitude));
        }

        Ok(WayPoint {
            latitude,
            longitude,
            elevation: self.elevation,
            time: self.time,
            name: self.name,
            comment: self.comment,
            description: self.description,
            symbol: self.symbol,
        })
    }
}
