use crate::{Transform, WayPoint};

/// Ordered sequence of way points in recording order.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSegment {
    points: Vec<WayPoint>,
}

impl TrackSegment {
    pub fn builder() -> TrackSegmentBuilder {
        TrackSegmentBuilder::default()
    }

    pub fn points(&self) -> &[WayPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WayPoint> {
        self.points.iter()
    }

    /// Transformation builder over this segment's way points.
    pub fn transform(&self) -> Transform<'_, Self, WayPoint> {
        Transform::new(self, &self.points, |_, points| Self { points })
    }
}

impl<'a> IntoIterator for &'a TrackSegment {
    type Item = &'a WayPoint;
    type IntoIter = std::slice::Iter<'a, WayPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<WayPoint> for TrackSegment {
    fn from_iter<I: IntoIterator<Item = WayPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Mutable staging area for a [`TrackSegment`].
#[derive(Debug, Default, Clone)]
pub struct TrackSegmentBuilder {
    points: Vec<WayPoint>,
}

impl TrackSegmentBuilder {
    pub fn point(mut self, point: WayPoint) -> Self {
        self.points.push(point);
        self
    }

    pub fn points(mut self, points: impl IntoIterator<Item = WayPoint>) -> Self {
        self.points.extend(points);
        self
    }

    pub fn build(self) -> TrackSegment {
        TrackSegment {
            points: self.points,
        }
    }
}

/// Ordered sequence of track segments plus descriptive metadata.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    name: Option<String>,
    comment: Option<String>,
    description: Option<String>,
    segments: Vec<TrackSegment>,
}

impl Track {
    pub fn builder() -> TrackBuilder {
        TrackBuilder::default()
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

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackSegment> {
        self.segments.iter()
    }

    /// Transformation builder over this track's segments; name, comment
    /// and description are carried into the result.
    pub fn transform(&self) -> Transform<'_, Self, TrackSegment> {
        Transform::new(self, &self.segments, |track, segments| Self {
            name: track.name.clone(),
            comment: track.comment.clone(),
            description: track.description.clone(),
            segments,
        })
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackSegment;
    type IntoIter = std::slice::Iter<'a, TrackSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Mutable staging area for a [`Track`].
#[derive(Debug, Default, Clone)]
pub struct TrackBuilder {
    name: Option<String>,
    comment: Option<String>,
    description: Option<String>,
    segments: Vec<TrackSegment>,
}

impl TrackBuilder {
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

    pub fn segment(mut self, segment: TrackSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn segments(mut self, segments: impl IntoIterator<Item = TrackSegment>) -> Self {
        self.segments.extend(segments);
        self
    }

    pub fn build(self) -> Track {
        Track {
            name: self.name,
            comment: self.comment,
            description: self.description,
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodesy::Length;

    fn segment() -> TrackSegment {
        TrackSegment::builder()
            .point(WayPoint::new(47.2692124, 11.4041024).unwrap())
            .point(WayPoint::new(47.3502, 11.70584).unwrap())
            .point(WayPoint::new(46.9, 11.0).unwrap())
            .build()
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let segment = segment();

        let latitudes: Vec<f64> = segment.iter().map(WayPoint::latitude).collect();

        assert_eq!(latitudes, [47.2692124, 47.3502, 46.9]);
    }

    #[test]
    fn transform_without_operations_is_a_copy() {
        let segment = segment();

        let copy = segment.transform().build();

        assert_eq!(copy, segment);
    }

    #[test]
    fn filter_to_nothing_yields_empty_segment() {
        let segment = segment();

        let empty = segment.transform().filter(|_| false).build();

        assert!(empty.is_empty());
        assert_eq!(segment.len(), 3);
    }

    #[test]
    fn filters_combine_by_conjunction() {
        let segment = segment();

        let filtered = segment
            .transform()
            .filter(|point| point.latitude() > 47.0)
            .filter(|point| point.longitude() > 11.5)
            .build();

        let latitudes: Vec<f64> = filtered.iter().map(WayPoint::latitude).collect();

        assert_eq!(latitudes, [47.3502]);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let segment = segment();

        let filtered = segment.transform().filter(|point| point.latitude() < 47.3).build();

        let latitudes: Vec<f64> = filtered.iter().map(WayPoint::latitude).collect();

        assert_eq!(latitudes, [47.2692124, 46.9]);
    }

    #[test]
    fn maps_compose_in_registration_order() {
        let segment = segment();

        let mapped = segment
            .transform()
            .map(|point| {
                point
                    .to_builder()
                    .elevation(Length::from_meters(100.0))
                    .build()
                    .unwrap()
            })
            .map(|point| {
                let doubled = point.elevation().unwrap().as_meters() * 2.0;

                point
                    .to_builder()
                    .elevation(Length::from_meters(doubled))
                    .build()
                    .unwrap()
            })
            .build();

        assert!(
            mapped
                .iter()
                .all(|point| point.elevation() == Some(Length::from_meters(200.0)))
        );
    }

    #[test]
    fn filter_observes_mapped_children() {
        let segment = segment();

        // Without the preceding map no point carries an elevation, so the
        // predicate would drop them all.
        let transformed = segment
            .transform()
            .map(|point| {
                point
                    .to_builder()
                    .elevation(Length::from_meters(point.latitude()))
                    .build()
                    .unwrap()
            })
            .filter(|point| point.elevation().is_some())
            .build();

        assert_eq!(transformed.len(), 3);
    }

    #[test]
    fn source_is_unchanged_after_build() {
        let segment = segment();
        let snapshot = segment.clone();

        let _ = segment
            .transform()
            .map(|point| point.to_builder().name("changed").build().unwrap())
            .filter(|_| false)
            .build();

        assert_eq!(segment, snapshot);
    }

    #[test]
    fn track_transform_carries_metadata_forward() {
        let track = Track::builder()
            .name("morning run")
            .description("loop around the lake")
            .segment(segment())
            .segment(TrackSegment::default())
            .build();

        let trimmed = track.transform().filter(|segment| !segment.is_empty()).build();

        assert_eq!(trimmed.name(), Some("morning run"));
        assert_eq!(trimmed.description(), Some("loop around the lake"));
        assert_eq!(trimmed.len(), 1);
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn segment_from_iterator() {
        let points = vec![
            WayPoint::new(47.0, 11.0).unwrap(),
            WayPoint::new(47.1, 11.1).unwrap(),
        ];

        let segment: TrackSegment = points.clone().into_iter().collect();

        assert_eq!(segment.points(), points);
    }
}
