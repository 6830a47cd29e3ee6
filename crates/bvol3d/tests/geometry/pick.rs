use approx::assert_relative_eq;
use bvol3d::bounding_volume::{BoundingSphere, BoundingVolume, OrientedBoundingBox};
use bvol3d::math::{Point, Real, Rotation, Vector};
use bvol3d::query::{pick, Ray};

#[test]
fn hits_are_sorted_by_time_of_impact() {
    let far = BoundingSphere::new(Point::new(10.0, 0.0, 0.0), 1.0);
    let near = OrientedBoundingBox::new(
        Point::new(4.0, 0.0, 0.0),
        &Rotation::identity(),
        Vector::repeat(0.5),
    );
    let missed = BoundingSphere::new(Point::new(5.0, 5.0, 0.0), 1.0);
    let candidates: [(&str, &dyn BoundingVolume); 3] =
        [("far", &far), ("near", &near), ("missed", &missed)];

    let ray = Ray::new(Point::origin(), Vector::x());
    let results = pick(&ray, Real::MAX, candidates);

    assert_eq!(results.len(), 2);
    let hits = results.hits();
    assert_eq!(hits[0].target, "near");
    assert_relative_eq!(hits[0].time_of_impact, 3.5, epsilon = 1.0e-5);
    assert_relative_eq!(hits[0].point, Point::new(3.5, 0.0, 0.0), epsilon = 1.0e-5);
    assert_eq!(hits[1].target, "far");
    assert_relative_eq!(hits[1].time_of_impact, 9.0, epsilon = 1.0e-5);
}

#[test]
fn max_time_of_impact_limits_hits() {
    let sphere = BoundingSphere::new(Point::new(10.0, 0.0, 0.0), 1.0);
    let ray = Ray::new(Point::origin(), Vector::x());

    let results = pick(&ray, 5.0, [(0, &sphere as &dyn BoundingVolume)]);
    assert!(results.is_empty());

    let results = pick(&ray, 9.5, [(0, &sphere as &dyn BoundingVolume)]);
    assert_eq!(results.closest().map(|hit| hit.target), Some(0));
}

#[test]
fn ray_starting_inside_hits_immediately() {
    let sphere = BoundingSphere::new(Point::origin(), 2.0);
    let ray = Ray::new(Point::new(0.5, 0.0, 0.0), Vector::y());

    assert_eq!(sphere.cast_ray(&ray, Real::MAX), Some(0.0));
}
