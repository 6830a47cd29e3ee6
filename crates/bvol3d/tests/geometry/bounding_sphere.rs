use approx::assert_relative_eq;
use bvol3d::bounding_volume::details::{exact_sphere3, exact_sphere4};
use bvol3d::bounding_volume::{BoundingSphere, BoundingVolume, ContainmentType, PointBuffer};
use bvol3d::math::{Point, Real, Rotation, Vector};

fn random_point(rng: &mut oorandom::Rand32, scale: Real) -> Point<Real> {
    Point::new(
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
    ) * scale
}

#[test]
fn disjoint_spheres_merge() {
    let s1 = BoundingSphere::new(Point::origin(), 1.0);
    let s2 = BoundingSphere::new(Point::new(3.0, 0.0, 0.0), 1.0);

    assert!(!s1.intersects_volume(&s2));
    assert_eq!(s1.contains_volume(&s2), ContainmentType::Outside);

    let merged = s1.merged(&s2);
    assert_relative_eq!(merged.center(), Point::new(1.5, 0.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(merged.radius(), 2.5, epsilon = 1.0e-5);
    assert_eq!(merged.contains_volume(&s1), ContainmentType::Inside);
    assert_eq!(merged.contains_volume(&s2), ContainmentType::Inside);
}

#[test]
fn minimal_sphere_of_regular_tetrahedron() {
    let pts = [
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
    ];
    let (center, radius) = exact_sphere4(&pts[0], &pts[1], &pts[2], &pts[3]);
    let sphere = BoundingSphere::minimal_from_points(&PointBuffer::new(&pts));

    assert_relative_eq!(sphere.center(), center, epsilon = 1.0e-4);
    assert_relative_eq!(sphere.radius(), radius, epsilon = 1.0e-4);
    assert_relative_eq!(radius, (3.0 as Real).sqrt(), epsilon = 1.0e-5);
}

#[test]
fn minimal_sphere_of_small_tetrahedron() {
    for scale in [5.0e-3, 2.0e-3, 1.0e-3] {
        let pts: Vec<_> = [
            Point::new(1.0, 1.0, 1.0),
            Point::new(1.0, -1.0, -1.0),
            Point::new(-1.0, 1.0, -1.0),
            Point::new(-1.0, -1.0, 1.0),
            Point::new(0.1, -0.2, 0.3),
        ]
        .iter()
        .map(|pt| *pt * scale)
        .collect();
        let sphere = BoundingSphere::minimal_from_points(&PointBuffer::new(&pts));

        assert_relative_eq!(sphere.center(), Point::origin(), epsilon = 1.0e-6);
        assert_relative_eq!(
            sphere.radius(),
            (3.0 as Real).sqrt() * scale,
            max_relative = 1.0e-4
        );
        assert_eq!(sphere.contains_points(&pts), ContainmentType::Inside);
    }
}

#[test]
fn minimal_sphere_of_acute_triangle() {
    let pts = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(1.0, 1.5, 0.0),
    ];
    let (center, radius) = exact_sphere3(&pts[0], &pts[1], &pts[2]);
    let sphere = BoundingSphere::minimal_from_points(&PointBuffer::new(&pts));

    assert_relative_eq!(sphere.center(), center, epsilon = 1.0e-4);
    assert_relative_eq!(sphere.radius(), radius, epsilon = 1.0e-4);
}

#[test]
fn minimal_sphere_is_tighter_than_the_fast_fit() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..50 {
        let pts: Vec<_> = (0..40).map(|_| random_point(&mut rng, 10.0)).collect();
        let minimal = BoundingSphere::minimal_from_points(&PointBuffer::new(&pts));
        let fast = BoundingSphere::from_points(&pts);

        assert!(minimal.radius() <= fast.radius() + 1.0e-4);
        assert_eq!(minimal.contains_points(&pts), ContainmentType::Inside);
        assert_eq!(fast.contains_points(&pts), ContainmentType::Inside);
    }
}

#[test]
fn containment_agrees_with_distance() {
    let mut rng = oorandom::Rand32::new(11);
    let sphere = BoundingSphere::new(Point::new(0.5, -1.0, 2.0), 1.5);

    for _ in 0..500 {
        let pt = random_point(&mut rng, 8.0);
        match sphere.contains_point(&pt) {
            ContainmentType::Inside => assert_eq!(sphere.distance_to_point(&pt), 0.0),
            ContainmentType::Outside => assert!(sphere.distance_to_point(&pt) > 0.0),
            ContainmentType::Intersects => unreachable!(),
        }
    }
}

#[test]
fn translation_round_trip() {
    let mut sphere = BoundingSphere::new(Point::new(1.0, 2.0, 3.0), 0.75);
    let t = Vector::new(-4.0, 10.0, 0.5);
    let one = Vector::repeat(1.0);

    sphere.transform(&one, &Rotation::identity(), &t);
    assert_relative_eq!(sphere.center(), Point::new(-3.0, 12.0, 3.5), epsilon = 1.0e-5);
    sphere.transform(&one, &Rotation::identity(), &-t);
    assert_relative_eq!(sphere.center(), Point::new(1.0, 2.0, 3.0), epsilon = 1.0e-5);
    assert_relative_eq!(sphere.radius(), 0.75);
}

#[test]
fn non_uniform_scale_uses_largest_factor() {
    let sphere = BoundingSphere::new(Point::new(1.0, 0.0, 0.0), 2.0);
    let scaled = sphere.transformed(
        &Vector::new(1.0, -3.0, 2.0),
        &Rotation::identity(),
        &Vector::zeros(),
    );
    assert_relative_eq!(scaled.radius(), 6.0);
}

#[test]
fn merged_spheres_enclose_both() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..200 {
        let a = BoundingSphere::new(random_point(&mut rng, 10.0), rng.rand_float() * 3.0);
        let b = BoundingSphere::new(random_point(&mut rng, 10.0), rng.rand_float() * 3.0);
        let merged = a.merged(&b);

        assert_eq!(merged.contains_volume(&a), ContainmentType::Inside);
        assert_eq!(merged.contains_volume(&b), ContainmentType::Inside);
    }
}
