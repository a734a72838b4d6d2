use crate::Length;

/// Read-only access to a geographic position.
///
/// Anything that can report a latitude, a longitude and an optional
/// elevation can be handed to the geodetic engine.
pub trait Point {
    /// Latitude in decimal degrees, `[-90.0, 90.0]`.
    fn latitude(&self) -> f64;

    /// Longitude in decimal degrees, `[-180.0, 180.0]`.
    fn longitude(&self) -> f64;

    /// Elevation above the reference ellipsoid, if recorded.
    fn elevation(&self) -> Option<Length>;
}

impl<P: Point + ?Sized> Point for &P {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }

    fn elevation(&self) -> Option<Length> {
        (**self).elevation()
    }
}

/// Bare `(latitude, longitude)` coordinates, elevation absent.
impl Point for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }

    fn elevation(&self) -> Option<Length> {
        None
    }
}

/// Bare `(latitude, longitude, elevation in meters)` coordinates.
impl Point for (f64, f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }

    fn elevation(&self) -> Option<Length> {
        Some(Length::from_meters(self.2))
    }
}
