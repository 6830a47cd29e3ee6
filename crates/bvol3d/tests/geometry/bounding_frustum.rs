use approx::assert_relative_eq;
use bvol3d::bounding_volume::{
    perspective_rh_zo, BoundingCapsule, BoundingFrustum, BoundingSphere, BoundingVolume,
    ContainmentType, FrustumPlane, OrientedBoundingBox,
};
use bvol3d::math::{Matrix4, Point, Real, Rotation, Vector, PI};
use bvol3d::query::Ray;
use bvol3d::shape::{PlaneIntersectionType, Triangle};

// Looks toward -Z from the origin, with a 90 degrees field of view.
fn camera() -> BoundingFrustum {
    BoundingFrustum::new(perspective_rh_zo(1.0, PI / 2.0, 1.0, 10.0))
}

#[test]
fn planes_face_inward() {
    let frustum = camera();
    let center = frustum.center();
    assert_eq!(frustum.contains_point(&center), ContainmentType::Inside);

    let far_away = [
        (FrustumPlane::Left, Point::new(-1000.0, 0.0, -5.0)),
        (FrustumPlane::Right, Point::new(1000.0, 0.0, -5.0)),
        (FrustumPlane::Top, Point::new(0.0, 1000.0, -5.0)),
        (FrustumPlane::Bottom, Point::new(0.0, -1000.0, -5.0)),
        (FrustumPlane::Near, Point::new(0.0, 0.0, 1000.0)),
        (FrustumPlane::Far, Point::new(0.0, 0.0, -1000.0)),
    ];

    for (plane, point) in far_away {
        assert_eq!(
            frustum.plane(plane).classify_point(&point),
            PlaneIntersectionType::Back,
            "{plane:?}"
        );
        assert_eq!(
            frustum.plane(plane).classify_point(&center),
            PlaneIntersectionType::Front
        );
        assert_eq!(frustum.contains_point(&point), ContainmentType::Outside);
    }
}

#[test]
fn points_on_a_plane_intersect() {
    let frustum = camera();
    assert_eq!(
        frustum.contains_point(&Point::new(0.0, 0.0, -1.0)),
        ContainmentType::Intersects
    );
    assert_eq!(frustum.distance_to_point(&Point::new(0.0, 0.0, -1.0)), 0.0);
}

#[test]
fn distance_to_outside_points() {
    let frustum = camera();
    // Straight behind the near plane.
    assert_relative_eq!(
        frustum.distance_to_point(&Point::new(0.0, 0.0, 1.0)),
        2.0,
        epsilon = 1.0e-4
    );
    // Beyond a corner of the far plane.
    let corner = Point::new(10.0, 10.0, -10.0);
    assert_relative_eq!(
        frustum.distance_to_point(&(corner + Vector::new(0.0, 0.0, -3.0))),
        3.0,
        epsilon = 1.0e-3
    );
}

#[test]
fn containment_agrees_with_distance() {
    let frustum = camera();
    let mut rng = oorandom::Rand32::new(29);

    for _ in 0..500 {
        let pt = Point::new(
            (rng.rand_float() - 0.5) * 30.0,
            (rng.rand_float() - 0.5) * 30.0,
            (rng.rand_float() - 0.8) * 15.0,
        );
        match frustum.contains_point(&pt) {
            ContainmentType::Outside => assert!(frustum.distance_to_point(&pt) > 0.0),
            _ => assert_eq!(frustum.distance_to_point(&pt), 0.0),
        }
    }
}

#[test]
fn sphere_classification() {
    let frustum = camera();
    let inside = BoundingSphere::new(Point::new(0.0, 0.0, -5.0), 0.5);
    let crossing = BoundingSphere::new(Point::new(0.0, 0.0, -0.5), 1.0);
    let behind = BoundingSphere::new(Point::new(0.0, 0.0, 5.0), 1.0);

    assert_eq!(frustum.contains_volume(&inside), ContainmentType::Inside);
    assert_eq!(frustum.contains_volume(&crossing), ContainmentType::Intersects);
    assert_eq!(frustum.contains_volume(&behind), ContainmentType::Outside);
    assert!(!frustum.intersects_volume(&behind));
}

#[test]
fn box_and_capsule_classification() {
    let frustum = camera();
    let inside = OrientedBoundingBox::new(
        Point::new(0.0, 0.0, -5.0),
        &Rotation::from_euler_angles(0.3, 0.2, 0.1),
        Vector::repeat(0.5),
    );
    let crossing = OrientedBoundingBox::new(
        Point::new(0.0, 0.0, -10.0),
        &Rotation::identity(),
        Vector::repeat(1.0),
    );
    let aside = OrientedBoundingBox::new(
        Point::new(100.0, 0.0, -5.0),
        &Rotation::identity(),
        Vector::repeat(1.0),
    );

    assert_eq!(frustum.contains_volume(&inside), ContainmentType::Inside);
    assert_eq!(frustum.contains_volume(&crossing), ContainmentType::Intersects);
    assert_eq!(frustum.contains_volume(&aside), ContainmentType::Outside);
    assert!(inside.intersects_volume(&frustum));
    assert!(!aside.intersects_volume(&frustum));

    let capsule = BoundingCapsule::new(Point::new(0.0, 0.0, -5.0), Point::new(0.0, 0.0, -20.0), 0.5);
    assert_eq!(frustum.contains_volume(&capsule), ContainmentType::Intersects);
    let capsule = BoundingCapsule::new(Point::new(50.0, 0.0, -5.0), Point::new(60.0, 0.0, -5.0), 1.0);
    assert_eq!(frustum.contains_volume(&capsule), ContainmentType::Outside);
}

#[test]
fn triangle_crossing_the_frustum() {
    let frustum = camera();
    // No vertex is inside, but the triangle cuts through the view.
    let triangle = Triangle::new(
        Point::new(-50.0, -1.0, -5.0),
        Point::new(50.0, -1.0, -5.0),
        Point::new(0.0, 50.0, -5.0),
    );
    assert_eq!(frustum.contains_triangle(&triangle), ContainmentType::Intersects);

    let triangle = Triangle::new(
        Point::new(-5.0, -1.0, 5.0),
        Point::new(5.0, -1.0, 5.0),
        Point::new(0.0, 5.0, 5.0),
    );
    assert_eq!(frustum.contains_triangle(&triangle), ContainmentType::Outside);
}

#[test]
fn transform_is_folded_into_the_view_projection() {
    let mut frustum = camera();
    let center = frustum.center();
    let t = Vector::new(3.0, -2.0, 1.0);
    let expected = frustum.view_projection() * Matrix4::new_translation(&t);

    frustum.transform(&Vector::repeat(1.0), &Rotation::identity(), &t);
    assert_relative_eq!(*frustum.view_projection(), expected, epsilon = 1.0e-5);
    assert_relative_eq!(frustum.center(), center - t, epsilon = 1.0e-3);
    assert_eq!(
        frustum.contains_point(&(Point::new(0.0, 0.0, -5.0) - t)),
        ContainmentType::Inside
    );

    frustum.set_center(Point::new(0.0, 0.0, -50.0));
    assert_relative_eq!(frustum.center(), Point::new(0.0, 0.0, -50.0), epsilon = 1.0e-3);
}

#[test]
fn zero_scale_gives_a_degenerate_frustum() {
    let mut frustum = camera();
    frustum.transform(&Vector::new(1.0, 0.0, 1.0), &Rotation::identity(), &Vector::zeros());

    assert!(frustum.corners().iter().all(|c| c.coords.iter().all(|x| x.is_finite())));
    assert!(frustum.volume().is_finite());
    // Heights are collapsed before projecting, so any height is in view.
    assert_eq!(
        frustum.contains_point(&Point::new(0.0, 100.0, -5.0)),
        ContainmentType::Inside
    );
}

#[test]
fn rotation_turns_the_view() {
    let mut frustum = camera();
    // Points are rotated a quarter turn around +Y before projecting, so the camera
    // ends up looking toward +X.
    frustum.transform(
        &Vector::repeat(1.0),
        &Rotation::from_euler_angles(0.0, PI / 2.0, 0.0),
        &Vector::zeros(),
    );
    assert_eq!(
        frustum.contains_point(&Point::new(5.0, 0.0, 0.0)),
        ContainmentType::Inside
    );
    assert_eq!(
        frustum.contains_point(&Point::new(0.0, 0.0, -5.0)),
        ContainmentType::Outside
    );
}

#[test]
fn ray_enters_through_the_near_plane() {
    let frustum = camera();
    let ray = Ray::new(Point::origin(), -Vector::z());
    assert_relative_eq!(
        frustum.cast_ray(&ray, Real::MAX).unwrap_or(-1.0),
        1.0,
        epsilon = 1.0e-4
    );

    let ray = Ray::new(Point::origin(), Vector::z());
    assert!(frustum.cast_ray(&ray, Real::MAX).is_none());
}

#[test]
#[should_panic]
fn frustums_cannot_be_merged() {
    let mut frustum = camera();
    frustum.merge(&BoundingSphere::new(Point::origin(), 1.0));
}
