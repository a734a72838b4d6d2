/// Reason why a pair of axes does not describe a valid ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EllipsoidError {
    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemiMajorAxis(f64),
    #[error("semi-minor axis must lie in (0, {semi_major}], got {semi_minor}")]
    SemiMinorAxisOutOfRange { semi_major: f64, semi_minor: f64 },
}

/// Earth model parameters: semi-major axis `A`, semi-minor axis `B`, both
/// in meters. The flattening `(A - B)/A` is derived.
///
/// Values are immutable once constructed and freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    a: f64,
    b: f64,
}

impl Ellipsoid {
    /// World Geodetic System 1984, the reference ellipsoid of GPS.
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        b: 6_356_752.314245,
    };

    /// Geodetic Reference System 1980.
    pub const GRS80: Self = Self {
        a: 6_378_137.0,
        b: 6_356_752.314140,
    };

    /// International Earth Rotation Service (2003).
    pub const IERS_2003: Self = Self {
        a: 6_378_136.6,
        b: 6_356_751.9,
    };

    /// Create an ellipsoid from its axes in meters.
    ///
    /// # Params
    /// - `semi_major_axis` - equatorial radius `A`, must be positive
    /// - `semi_minor_axis` - polar radius `B`, must satisfy `0 < B <= A`
    pub fn new(semi_major_axis: f64, semi_minor_axis: f64) -> Result<Self, EllipsoidError> {
        if !(semi_major_axis > 0.0) {
            return Err(EllipsoidError::NonPositiveSemiMajorAxis(semi_major_axis));
        }

        if !(semi_minor_axis > 0.0) || semi_minor_axis > semi_major_axis {
            return Err(EllipsoidError::SemiMinorAxisOutOfRange {
                semi_major: semi_major_axis,
                semi_minor: semi_minor_axis,
            });
        }

        Ok(Self {
            a: semi_major_axis,
            b: semi_minor_axis,
        })
    }

    /// Semi-major axis `A` in meters.
    pub const fn semi_major_axis(self) -> f64 {
        self.a
    }

    /// Semi-minor axis `B` in meters.
    pub const fn semi_minor_axis(self) -> f64 {
        self.b
    }

    /// Flattening `(A - B)/A`.
    pub const fn flattening(self) -> f64 {
        (self.a - self.b) / self.a
    }
}
