use geodesy::{Geom, Length};
use tracks::{TrackSegment, WayPoint};

#[test]
fn segment_path_length_matches_pairwise_distances() {
    let segment = TrackSegment::builder()
        .point(WayPoint::new(47.2692124, 11.4041024).unwrap())
        .point(WayPoint::new(47.3502, 11.70584).unwrap())
        .point(WayPoint::new(47.2, 11.3).unwrap())
        .build();

    let geom = Geom::WGS84;

    let expected: Length = segment
        .points()
        .windows(2)
        .map(|pair| geom.distance(&pair[0], &pair[1]))
        .sum();

    assert_eq!(geom.path_length(&segment), expected);
}

#[test]
fn filtered_segment_has_shorter_path() {
    let segment = TrackSegment::builder()
        .point(WayPoint::new(47.2692124, 11.4041024).unwrap())
        .point(WayPoint::new(47.3502, 11.70584).unwrap())
        .point(WayPoint::new(46.9, 11.0).unwrap())
        .build();

    let trimmed = segment
        .transform()
        .filter(|point| point.latitude() > 47.0)
        .build();

    let geom = Geom::WGS84;

    assert!(geom.path_length(&trimmed) < geom.path_length(&segment));
}
