//! Distances between geographic points on an ellipsoidal earth model.
//!
//! The earth is modelled as an [`Ellipsoid`] (semi-major/semi-minor axis
//! and derived flattening). A [`Geom`] engine bound to one ellipsoid solves
//! the *inverse geodesic problem* — the surface distance between two
//! coordinates — and accumulates path lengths over ordered point sequences.
//!
//! Anything exposing latitude, longitude and an optional elevation
//! satisfies the [`Point`] capability and can be fed to the engine:
//!
//! ```
//! use geodesy::Geom;
//!
//! let innsbruck = (47.2692124, 11.4041024);
//! let wattens = (47.3502, 11.70584);
//!
//! let distance = Geom::DEFAULT.distance(&innsbruck, &wattens);
//! assert!((distance.as_kilometers() - 24.528).abs() < 0.001);
//! ```

mod ellipsoid;
mod geom;
mod length;
mod point;

pub use self::ellipsoid::*;
pub use self::geom::*;
pub use self::length::*;
pub use self::point::*;
