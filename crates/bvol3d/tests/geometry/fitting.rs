use approx::assert_relative_eq;
use bvol3d::bounding_volume::{
    Aabb, BoundingCapsule, BoundingSphere, BoundingVolume, ContainmentType, OrientedBoundingBox,
    PointBuffer, PointBufferError,
};
use bvol3d::math::{Point, Real};

// A cube mesh: 8 vertices, 12 triangles, preceded by unrelated vertices.
fn cube_mesh() -> (Vec<Point<Real>>, Vec<u32>) {
    let mut vertices = vec![Point::new(100.0, 100.0, 100.0); 3];
    for i in 0..8 {
        vertices.push(Point::new(
            (i & 1) as Real * 2.0,
            ((i >> 1) & 1) as Real * 2.0,
            ((i >> 2) & 1) as Real * 2.0,
        ));
    }
    let indices = vec![
        0, 1, 3, 0, 3, 2, 4, 6, 7, 4, 7, 5, 0, 4, 5, 0, 5, 1, 2, 3, 7, 2, 7, 6, 0, 2, 6, 0, 6, 4,
        1, 5, 7, 1, 7, 3,
    ];
    (vertices, indices)
}

#[test]
fn indexed_fitting_skips_unreferenced_vertices() {
    let (vertices, indices) = cube_mesh();
    let mut volumes: Vec<Box<dyn BoundingVolume>> = vec![
        Box::new(BoundingSphere::default()),
        Box::new(Aabb::default()),
        Box::new(OrientedBoundingBox::default()),
        Box::new(BoundingCapsule::default()),
    ];

    for volume in &mut volumes {
        volume
            .compute_from_indexed_points(&vertices, &indices, 3)
            .unwrap();

        assert_relative_eq!(volume.center(), Point::new(1.0, 1.0, 1.0), epsilon = 1.0e-4);
        assert_eq!(
            volume.contains_points(&vertices[3..]),
            ContainmentType::Inside,
            "{:?}",
            volume.bounding_type()
        );
        assert_eq!(
            volume.contains_point(&vertices[0]),
            ContainmentType::Outside
        );
    }
}

#[test]
fn invalid_indices_are_rejected() {
    let (vertices, indices) = cube_mesh();
    let mut sphere = BoundingSphere::new(Point::origin(), 1.0);
    let err = sphere
        .compute_from_indexed_points(&vertices, &indices, 4)
        .unwrap_err();

    assert!(matches!(err, PointBufferError::IndexOutOfBounds { index: 7, .. }));
    // The volume is left untouched.
    assert_eq!(sphere, BoundingSphere::new(Point::origin(), 1.0));
}

#[test]
fn ranged_buffers_fit_a_sub_mesh() {
    let (vertices, indices) = cube_mesh();
    // The first two triangles only reference the z = 0 face.
    let buffer = PointBuffer::indexed_range(&vertices, &indices, 0, 6, 3).unwrap();
    let mut aabb = Aabb::default();
    aabb.compute_from_points(&buffer);

    assert_eq!(*aabb.mins(), Point::new(0.0, 0.0, 0.0));
    assert_eq!(*aabb.maxs(), Point::new(2.0, 2.0, 0.0));
}

#[test]
fn degenerate_point_sets() {
    let single = [Point::new(1.0, 2.0, 3.0)];
    let sphere = BoundingSphere::minimal_from_points(&PointBuffer::new(&single));
    assert_eq!(sphere.center(), single[0]);
    assert_eq!(sphere.radius(), 0.0);

    let coincident = [Point::new(1.0, 1.0, 1.0); 10];
    let obb = OrientedBoundingBox::from_points(&coincident);
    assert_relative_eq!(obb.center(), coincident[0], epsilon = 1.0e-5);
    assert_relative_eq!(obb.volume(), 0.0, epsilon = 1.0e-5);

    let empty: [Point<Real>; 0] = [];
    assert_eq!(
        BoundingSphere::from_points(&empty).contains_points(&empty),
        ContainmentType::Outside
    );
}
