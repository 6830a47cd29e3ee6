use approx::assert_relative_eq;
use bvol3d::bounding_volume::{BoundingVolume, ContainmentType, OrientedBoundingBox};
use bvol3d::math::{Point, Real, Rotation, Vector, PI};
use bvol3d::shape::{Plane, PlaneIntersectionType, Segment};

fn unit_box() -> OrientedBoundingBox {
    OrientedBoundingBox::new(Point::origin(), &Rotation::identity(), Vector::repeat(1.0))
}

fn random_box(rng: &mut oorandom::Rand32) -> OrientedBoundingBox {
    let center = Point::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 10.0;
    let rotation = Rotation::from_euler_angles(
        rng.rand_float() * PI,
        rng.rand_float() * PI,
        rng.rand_float() * PI,
    );
    let half_extents = Vector::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 3.0
        + Vector::repeat(0.1);
    OrientedBoundingBox::new(center, &rotation, half_extents)
}

#[test]
fn unit_box_point_containment() {
    let obb = unit_box();
    assert_eq!(
        obb.contains_point(&Point::new(0.5, 0.5, 0.5)),
        ContainmentType::Inside
    );
    assert_eq!(
        obb.contains_point(&Point::new(1.5, 0.0, 0.0)),
        ContainmentType::Outside
    );
    // Boundary points are inside.
    assert_eq!(
        obb.contains_point(&Point::new(1.0, 0.0, 0.0)),
        ContainmentType::Inside
    );
}

#[test]
fn containment_agrees_with_distance() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..20 {
        let obb = random_box(&mut rng);

        for _ in 0..100 {
            let pt = Point::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 14.0
                - Vector::repeat(2.0);
            match obb.contains_point(&pt) {
                ContainmentType::Inside => assert_eq!(obb.distance_to_point(&pt), 0.0),
                ContainmentType::Outside => assert!(obb.distance_to_point(&pt) > 0.0),
                ContainmentType::Intersects => unreachable!(),
            }
        }
    }
}

#[test]
fn rotated_boxes_separating_axis() {
    let obb = unit_box();
    let rotation = Rotation::from_euler_angles(0.0, 0.0, PI / 4.0);
    let close = OrientedBoundingBox::new(Point::new(2.3, 0.0, 0.0), &rotation, Vector::repeat(1.0));
    let far = OrientedBoundingBox::new(Point::new(2.5, 0.0, 0.0), &rotation, Vector::repeat(1.0));

    assert!(obb.intersects_volume(&close));
    assert!(close.intersects_volume(&obb));
    assert_eq!(obb.contains_volume(&close), ContainmentType::Intersects);
    assert!(!obb.intersects_volume(&far));
    assert_eq!(obb.contains_volume(&far), ContainmentType::Outside);
}

#[test]
fn gauss_fit_encloses_a_rotated_cloud() {
    let mut rng = oorandom::Rand32::new(17);
    let rotation = Rotation::from_euler_angles(0.3, -1.1, 0.7);
    let pts: Vec<_> = (0..200)
        .map(|_| {
            let local = Vector::new(
                (rng.rand_float() - 0.5) * 8.0,
                (rng.rand_float() - 0.5) * 2.0,
                (rng.rand_float() - 0.5) * 0.5,
            );
            Point::new(1.0, 2.0, 3.0) + rotation * local
        })
        .collect();
    let obb = OrientedBoundingBox::from_points(&pts);

    assert_eq!(obb.contains_points(&pts), ContainmentType::Inside);
    // The principal axis follows the longest direction of the cloud.
    let main_axis = rotation * Vector::x();
    assert!(obb.axis(0).dot(&main_axis).abs() > 0.95);
}

#[test]
fn merged_boxes_enclose_every_corner() {
    let mut rng = oorandom::Rand32::new(23);

    for _ in 0..50 {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        let merged = a.merged(&b);

        assert_eq!(merged.contains_points(a.corners()), ContainmentType::Inside);
        assert_eq!(merged.contains_points(b.corners()), ContainmentType::Inside);
    }
}

#[test]
fn translation_round_trip() {
    let mut obb = OrientedBoundingBox::new(
        Point::new(1.0, -2.0, 0.5),
        &Rotation::from_euler_angles(0.1, 0.2, 0.3),
        Vector::new(1.0, 2.0, 3.0),
    );
    let initial = obb.clone();
    let t = Vector::new(5.0, 6.0, -7.0);
    let one = Vector::repeat(1.0);

    obb.transform(&one, &Rotation::identity(), &t);
    assert_relative_eq!(obb.center(), initial.center() + t, epsilon = 1.0e-5);
    obb.transform(&one, &Rotation::identity(), &-t);
    assert_relative_eq!(obb, initial, epsilon = 1.0e-5);
}

#[test]
fn segment_and_plane_classification() {
    let obb = unit_box();
    let crossing = Segment::new(Point::new(-3.0, 0.2, 0.2), Point::new(3.0, 0.2, 0.2));
    let inside = Segment::new(Point::new(-0.5, 0.2, 0.2), Point::new(0.5, 0.2, 0.2));
    let outside = Segment::new(Point::new(-3.0, 2.0, 0.2), Point::new(3.0, 2.0, 0.2));

    assert_eq!(obb.contains_segment(&crossing), ContainmentType::Intersects);
    assert_eq!(obb.contains_segment(&inside), ContainmentType::Inside);
    assert_eq!(obb.contains_segment(&outside), ContainmentType::Outside);

    let plane = Plane::from_point_normal(&Point::new(0.0, 0.0, 1.5), Vector::z_axis());
    assert_eq!(obb.intersects_plane(&plane), PlaneIntersectionType::Back);
    let plane = Plane::from_point_normal(&Point::new(0.0, 0.0, 0.5), Vector::z_axis());
    assert_eq!(obb.intersects_plane(&plane), PlaneIntersectionType::Intersects);
}

#[test]
fn volume_and_extents() {
    let obb = OrientedBoundingBox::new(
        Point::origin(),
        &Rotation::from_euler_angles(0.4, 0.0, 0.0),
        Vector::new(0.5, 1.0, 2.0),
    );
    assert_relative_eq!(obb.volume(), 8.0 as Real, epsilon = 1.0e-5);
    assert_relative_eq!(obb.extents(), Vector::new(1.0, 2.0, 4.0));
}
