use approx::assert_relative_eq;
use bvol3d::bounding_volume::{
    Aabb, BoundingCapsule, BoundingFrustum, BoundingSphere, BoundingType, BoundingVolume,
    ContainmentType, OrientedBoundingBox, PointBuffer, TypedBoundingVolume,
};
use bvol3d::math::{Point, Real, Rotation, Vector};
use bvol3d::shape::{Plane, PlaneIntersectionType, Segment, Triangle};
use num_traits::FromPrimitive;

/// A volume bounding a mesh, unknown to the built-in volumes.
#[derive(Debug, Clone)]
struct MeshVolume {
    aabb: Aabb,
}

impl MeshVolume {
    fn new(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self {
            aabb: Aabb::new(mins, maxs),
        }
    }
}

impl BoundingVolume for MeshVolume {
    fn bounding_type(&self) -> BoundingType {
        BoundingType::Mesh
    }

    fn center(&self) -> Point<Real> {
        self.aabb.center()
    }

    fn set_center(&mut self, center: Point<Real>) {
        self.aabb.set_center(center)
    }

    fn volume(&self) -> Real {
        self.aabb.volume()
    }

    fn corners(&self) -> &[Point<Real>] {
        self.aabb.corners()
    }

    fn distance_to_point(&self, point: &Point<Real>) -> Real {
        self.aabb.distance_to_point(point)
    }

    fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        self.aabb.contains_point(point)
    }

    fn contains_segment(&self, segment: &Segment) -> ContainmentType {
        self.aabb.contains_segment(segment)
    }

    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType {
        self.aabb.contains_triangle(triangle)
    }

    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType {
        self.contains_general(other)
    }

    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool {
        self.intersects_general(other)
    }

    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        self.aabb.intersects_plane(plane)
    }

    fn merge(&mut self, other: &dyn BoundingVolume) {
        self.aabb.merge(other)
    }

    fn transform(&mut self, scale: &Vector<Real>, rotation: &Rotation<Real>, translation: &Vector<Real>) {
        self.aabb.transform(scale, rotation, translation)
    }

    fn compute_from_points(&mut self, points: &PointBuffer) {
        self.aabb.compute_from_points(points)
    }

    fn clone_dyn(&self) -> Box<dyn BoundingVolume> {
        Box::new(self.clone())
    }
}

fn all_volumes() -> Vec<Box<dyn BoundingVolume>> {
    vec![
        Box::new(BoundingSphere::new(Point::origin(), 1.0)),
        Box::new(Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0))),
        Box::new(OrientedBoundingBox::new(
            Point::origin(),
            &Rotation::from_euler_angles(0.2, 0.4, 0.6),
            Vector::repeat(1.0),
        )),
        Box::new(BoundingCapsule::new(
            Point::new(0.0, -1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            0.5,
        )),
        Box::new(BoundingFrustum::new(
            bvol3d::bounding_volume::orthographic_rh_zo(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0),
        )),
        Box::new(MeshVolume::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0))),
    ]
}

#[test]
fn typed_volumes_match_bounding_types() {
    for volume in all_volumes() {
        let expected = match volume.as_typed_volume() {
            TypedBoundingVolume::Sphere(_) => BoundingType::Sphere,
            TypedBoundingVolume::Aabb(_) => BoundingType::AxisAlignedBoundingBox,
            TypedBoundingVolume::Obb(_) => BoundingType::OrientedBoundingBox,
            TypedBoundingVolume::Capsule(_) => BoundingType::Capsule,
            TypedBoundingVolume::Frustum(_) => BoundingType::Frustum,
            TypedBoundingVolume::Custom(_) => BoundingType::Mesh,
        };
        assert_eq!(volume.bounding_type(), expected);
        assert_eq!(
            BoundingType::from_u8(volume.bounding_type() as u8),
            Some(expected)
        );
    }
}

#[test]
fn pairwise_queries_are_symmetric() {
    let volumes = all_volumes();
    let shifts = [
        Vector::zeros(),
        Vector::new(1.5, 0.0, 0.0),
        Vector::new(2.1, 1.0, 0.0),
        Vector::new(10.0, 0.0, 0.0),
    ];

    for shift in shifts {
        for v1 in &volumes {
            for v2 in &volumes {
                // The corner-based fallback is not symmetric.
                if v1.bounding_type() == BoundingType::Mesh
                    || v2.bounding_type() == BoundingType::Mesh
                {
                    continue;
                }

                let moved = v2.transformed_dyn(&Vector::repeat(1.0), &Rotation::identity(), &shift);
                assert_eq!(
                    v1.intersects_volume(&*moved),
                    moved.intersects_volume(&**v1),
                    "{:?} vs. {:?} shifted by {shift:?}",
                    v1.bounding_type(),
                    v2.bounding_type(),
                );
            }
        }
    }
}

#[test]
fn containment_implies_intersection() {
    let volumes = all_volumes();

    for v1 in &volumes {
        for v2 in &volumes {
            let containment = v1.contains_volume(&**v2);
            assert_eq!(
                containment != ContainmentType::Outside,
                v1.intersects_volume(&**v2),
                "{:?} contains {:?}: {containment:?}",
                v1.bounding_type(),
                v2.bounding_type(),
            );
        }
    }
}

#[test]
fn custom_volumes_fall_back_to_corners() {
    let mesh = MeshVolume::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5));
    let big = BoundingSphere::new(Point::origin(), 2.0);
    let small = BoundingSphere::new(Point::new(0.5, 0.5, 0.5), 0.1);
    let far = BoundingSphere::new(Point::new(10.0, 0.0, 0.0), 1.0);

    assert!(matches!(
        (&mesh as &dyn BoundingVolume).as_typed_volume(),
        TypedBoundingVolume::Custom(_)
    ));
    assert_eq!(big.contains_volume(&mesh), ContainmentType::Inside);
    assert_eq!(small.contains_volume(&mesh), ContainmentType::Intersects);
    assert_eq!(far.contains_volume(&mesh), ContainmentType::Outside);
    assert!(!far.intersects_volume(&mesh));
}

#[test]
fn heterogeneous_merges_enclose_both_operands() {
    let obb = OrientedBoundingBox::new(
        Point::new(3.0, 0.0, 0.0),
        &Rotation::from_euler_angles(0.5, 0.0, 0.5),
        Vector::new(1.0, 0.5, 0.25),
    );
    let sphere = BoundingSphere::new(Point::new(-2.0, 1.0, 0.0), 1.0);

    let merged_sphere = sphere.merged(&obb);
    assert_eq!(merged_sphere.contains_volume(&sphere), ContainmentType::Inside);
    assert_eq!(merged_sphere.contains_volume(&obb), ContainmentType::Inside);

    let merged_obb = obb.merged(&sphere);
    assert_eq!(merged_obb.contains_points(obb.corners()), ContainmentType::Inside);
    assert_eq!(merged_obb.contains_points(sphere.corners()), ContainmentType::Inside);

    let boxed: Box<dyn BoundingVolume> = Box::new(sphere.clone());
    let merged_dyn = boxed.merged_dyn(&obb);
    let merged_dyn = merged_dyn.as_sphere().map(|s| (s.center(), s.radius()));
    assert_eq!(
        merged_dyn.map(|(c, _)| c),
        Some(merged_sphere.center())
    );
    assert_relative_eq!(
        merged_dyn.map_or(0.0, |(_, r)| r),
        merged_sphere.radius()
    );
}

#[test]
fn sphere_fitted_to_box_encloses_it() {
    let obb = OrientedBoundingBox::new(
        Point::new(1.0, 2.0, 3.0),
        &Rotation::from_euler_angles(0.1, 0.7, -0.3),
        Vector::new(2.0, 1.0, 0.5),
    );
    let sphere = BoundingSphere::from_volume(&obb);

    assert_relative_eq!(sphere.center(), obb.center(), epsilon = 1.0e-5);
    assert_relative_eq!(
        sphere.radius(),
        obb.half_extents().norm(),
        epsilon = 1.0e-5
    );
    assert_eq!(sphere.contains_volume(&obb), ContainmentType::Inside);
}
