//! Immutable GPS track document model.
//!
//! A [`Gpx`] document holds tracks, a [`Track`] holds segments, a
//! [`TrackSegment`] holds way points — each an ordered snapshot that never
//! changes after `build()`. Deriving a modified document goes through the
//! [`Transform`] builder of the level being changed, which filters and
//! maps the child sequence into a brand-new value:
//!
//! ```
//! use tracks::{TrackSegment, WayPoint};
//!
//! let segment = TrackSegment::builder()
//!     .point(WayPoint::new(47.2692124, 11.4041024)?)
//!     .point(WayPoint::new(47.3502, 11.70584)?)
//!     .build();
//!
//! let northern = segment
//!     .transform()
//!     .filter(|point| point.latitude() > 47.3)
//!     .build();
//!
//! assert_eq!(northern.len(), 1);
//! assert_eq!(segment.len(), 2); // the source is untouched
//! # Ok::<(), tracks::ModelError>(())
//! ```

mod gpx;
mod track;
mod transform;
mod waypoint;

pub use self::gpx::*;
pub use self::track::*;
pub use self::transform::*;
pub use self::waypoint::*;
