use crate::{Track, Transform, WayPoint};

/// Document root: top-level way points and tracks plus the creator of the
/// document.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gpx {
    creator: Option<String>,
    way_points: Vec<WayPoint>,
    tracks: Vec<Track>,
}

impl Gpx {
    pub fn builder() -> GpxBuilder {
        GpxBuilder::default()
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn way_points(&self) -> &[WayPoint] {
        &self.way_points
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Transformation builder over this document's tracks; the creator and
    /// the top-level way points are carried into the result.
    pub fn transform(&self) -> Transform<'_, Self, Track> {
        Transform::new(self, &self.tracks, |gpx, tracks| Self {
            creator: gpx.creator.clone(),
            way_points: gpx.way_points.clone(),
            tracks,
        })
    }
}

/// Mutable staging area for a [`Gpx`] document.
#[derive(Debug, Default, Clone)]
pub struct GpxBuilder {
    creator: Option<String>,
    way_points: Vec<WayPoint>,
    tracks: Vec<Track>,
}

impl GpxBuilder {
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn way_point(mut self, point: WayPoint) -> Self {
        self.way_points.push(point);
        self
    }

    pub fn way_points(mut self, points: impl IntoIterator<Item = WayPoint>) -> Self {
        self.way_points.extend(points);
        self
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    pub fn build(self) -> Gpx {
        Gpx {
            creator: self.creator,
            way_points: self.way_points,
            tracks: self.tracks,
        }
    }
}
