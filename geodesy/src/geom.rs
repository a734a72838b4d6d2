//! Geodetic engine: inverse geodesic distance and path length.
//!
//! The distance between two coordinates is computed with Vincenty's
//! iterative inverse solution on the bound ellipsoid:
//!
//! 1. reduce both latitudes via `tan U = (1 - F) tan phi`;
//! 2. iterate the longitude difference on the auxiliary sphere until the
//!    relative change drops below `1e-12` (hard cap of 20 rounds);
//! 3. scale the angular distance with the series terms `A` and `B` to get
//!    the surface distance `s = B * A * (sigma - delta_sigma)`.
//!
//! See [Direct and inverse solutions of geodesics on the ellipsoid with
//! application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
//! and [Vincenty solutions of geodesics on the
//! ellipsoid](https://www.movable-type.co.uk/scripts/latlong-vincenty.html).
//!
//! Near-antipodal point pairs are a known weakness of the algorithm: the
//! iteration may exhaust its cap without converging. The engine then
//! returns the last computed estimate instead of failing.

use crate::{Ellipsoid, Length, Point};

// The maximal iteration count of `distance`.
const DISTANCE_ITERATION_MAX: usize = 20;

// Relative change in lambda at which the iteration stops.
const DISTANCE_ITERATION_EPSILON: f64 = 1e-12;

/// Geodetic engine bound to one [`Ellipsoid`].
///
/// Pure function of its inputs; safe to share and call from any number of
/// threads without locking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geom {
    ellipsoid: Ellipsoid,
    // Precomputed A^2, B^2, (A^2 - B^2)/B^2 and flattening.
    aa: f64,
    bb: f64,
    aabbbb: f64,
    f: f64,
}

impl Geom {
    /// Engine on the [`Ellipsoid::WGS84`] earth model.
    pub const WGS84: Self = Self::of(Ellipsoid::WGS84);

    pub const DEFAULT: Self = Self::WGS84;

    /// Bind an engine to the given ellipsoid.
    pub const fn of(ellipsoid: Ellipsoid) -> Self {
        let a = ellipsoid.semi_major_axis();
        let b = ellipsoid.semi_minor_axis();

        Self {
            ellipsoid,
            aa: a * a,
            bb: b * b,
            aabbbb: (a * a - b * b) / (b * b),
            f: ellipsoid.flattening(),
        }
    }

    pub const fn ellipsoid(self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Distance between two points on the ellipsoid.
    ///
    /// If either point carries an elevation the surface distance `s` is
    /// combined with the elevation difference `e` into `sqrt(s^2 + e^2)`;
    /// an absent elevation counts as `0`.
    pub fn distance(&self, start: &impl Point, end: &impl Point) -> Length {
        let lat1 = start.latitude().to_radians();
        let lon1 = start.longitude().to_radians();
        let lat2 = end.latitude().to_radians();
        let lon2 = end.longitude().to_radians();

        let omega = lon2 - lon1;

        let tan_u1 = (1.0 - self.f) * lat1.tan();
        let u1 = tan_u1.atan();
        let sin_u1 = u1.sin();
        let cos_u1 = u1.cos();

        let tan_u2 = (1.0 - self.f) * lat2.tan();
        let u2 = tan_u2.atan();
        let sin_u2 = u2.sin();
        let cos_u2 = u2.cos();

        let sin_u1_sin_u2 = sin_u1 * sin_u2;
        let cos_u1_sin_u2 = cos_u1 * sin_u2;
        let sin_u1_cos_u2 = sin_u1 * cos_u2;
        let cos_u1_cos_u2 = cos_u1 * cos_u2;

        // Eq. 13
        let mut lambda = omega;

        // Intermediates we'll need to compute distance 's'
        let mut a;
        let mut sigma;
        let mut delta_sigma;

        let mut iteration = 0;
        loop {
            let lambda0 = lambda;

            let sin_lambda = lambda.sin();
            let cos_lambda = lambda.cos();

            // Eq. 14
            let sin2_sigma = (cos_u2 * sin_lambda) * (cos_u2 * sin_lambda)
                + (cos_u1_sin_u2 - sin_u1_cos_u2 * cos_lambda)
                    * (cos_u1_sin_u2 - sin_u1_cos_u2 * cos_lambda);
            let sin_sigma = sin2_sigma.sqrt();

            // Eq. 15
            let cos_sigma = sin_u1_sin_u2 + cos_u1_cos_u2 * cos_lambda;

            // Eq. 16
            sigma = sin_sigma.atan2(cos_sigma);

            // Eq. 17 Careful! sin2_sigma might be almost 0!
            let sin_alpha = if sin2_sigma == 0.0 {
                0.0
            } else {
                cos_u1_cos_u2 * sin_lambda / sin_sigma
            };
            let alpha = sin_alpha.asin();
            let cos_alpha = alpha.cos();
            let cos2_alpha = cos_alpha * cos_alpha;

            // Eq. 18 Careful! cos2_alpha might be almost 0!
            let cos2_sigma_m = if cos2_alpha == 0.0 {
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1_sin_u2 / cos2_alpha
            };
            // The normalized curvature parameter u^2.
            let u_sq = cos2_alpha * self.aabbbb;

            let cos2_sigma_m2 = cos2_sigma_m * cos2_sigma_m;

            // Eq. 3
            a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));

            // Eq. 4
            let b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

            // Eq. 6
            delta_sigma = b
                * sin_sigma
                * (cos2_sigma_m
                    + b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos2_sigma_m2)
                            - b / 6.0
                                * cos2_sigma_m
                                * (-3.0 + 4.0 * sin2_sigma)
                                * (-3.0 + 4.0 * cos2_sigma_m2)));

            // Eq. 10
            let c = self.f / 16.0 * cos2_alpha * (4.0 + self.f * (4.0 - 3.0 * cos2_alpha));

            // Eq. 11
            lambda = omega
                + (1.0 - c)
                    * self.f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos2_sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos2_sigma_m2)));

            // Coincident points leave lambda at 0; the relative change is
            // then NaN and counts as converged.
            let converging = ((lambda - lambda0) / lambda).abs() > DISTANCE_ITERATION_EPSILON;
            if iteration == DISTANCE_ITERATION_MAX || !converging {
                break;
            }
            iteration += 1;
        }

        // Eq. 19
        let s = self.ellipsoid.semi_minor_axis() * a * (sigma - delta_sigma);

        // The difference in elevation.
        let e = start.elevation().map(Length::as_meters).unwrap_or(0.0)
            - end.elevation().map(Length::as_meters).unwrap_or(0.0);

        Length::from_meters((s * s + e * e).sqrt())
    }

    /// Total distance along an ordered sequence of points.
    ///
    /// One pass over the sequence, summing the pairwise distances of
    /// consecutive points. An empty or single-point sequence has length
    /// zero. Every call starts from a fresh accumulator.
    pub fn path_length<P, I>(&self, path: I) -> Length
    where
        P: Point,
        I: IntoIterator<Item = P>,
    {
        let mut total = Length::ZERO;
        let mut previous: Option<P> = None;

        for point in path {
            if let Some(prev) = &previous {
                total += self.distance(prev, &point);
            }

            previous = Some(point);
        }

        total
    }
}
