use std::cmp::Ordering;

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use super::ray::{ray_aabb_hit_t, ray_triangle_hit_t};

/// Local-space triangles of a pickable leaf, with their bounds for early rejection.
#[derive(Component, Debug, Clone)]
pub struct PickShape {
    min: Vec3,
    max: Vec3,
    triangles: Vec<[Vec3; 3]>,
}

impl PickShape {
    pub fn from_triangles(triangles: Vec<[Vec3; 3]>) -> Option<Self> {
        let mut points = triangles.iter().flatten();
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max, triangles })
    }

    /// Triangle-list meshes only; anything without positions is not pickable.
    pub fn from_mesh(mesh: &Mesh) -> Option<Self> {
        if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
            return None;
        }
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION)?.as_float3()?;
        let vertex = |i: usize| positions.get(i).map(|p| Vec3::from_array(*p));

        let triangles = match mesh.indices() {
            Some(indices) => {
                let indices: Vec<usize> = indices.iter().collect();
                indices
                    .chunks_exact(3)
                    .filter_map(|c| Some([vertex(c[0])?, vertex(c[1])?, vertex(c[2])?]))
                    .collect()
            }
            None => positions
                .chunks_exact(3)
                .map(|c| [Vec3::from_array(c[0]), Vec3::from_array(c[1]), Vec3::from_array(c[2])])
                .collect(),
        };
        Self::from_triangles(triangles)
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// World-space distance along `ray` to the closest triangle, if any.
    pub fn intersect(&self, ray: Ray3d, transform: &GlobalTransform) -> Option<f32> {
        // Collapsed during the entrance animation.
        if transform.compute_transform().scale.abs().min_element() <= f32::EPSILON {
            return None;
        }
        let inv = transform.compute_matrix().inverse();
        if !inv.is_finite() {
            return None;
        }
        let origin = inv.transform_point3(ray.origin);
        // Left unnormalized so local t equals world distance.
        let direction = inv.transform_vector3(ray.direction.as_vec3());

        ray_aabb_hit_t(origin, direction, self.min, self.max)?;

        self.triangles
            .iter()
            .filter_map(|triangle| ray_triangle_hit_t(origin, direction, triangle))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Every intersected target ordered nearest first. Equal distances keep input order.
pub fn cast_ray<'a>(
    ray: Ray3d,
    targets: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a PickShape)>,
) -> Vec<RayHit> {
    let mut hits: Vec<RayHit> = targets
        .into_iter()
        .filter_map(|(entity, transform, shape)| {
            shape
                .intersect(ray, transform)
                .map(|distance| RayHit { entity, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_ray(origin: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::NEG_Z)
    }

    fn unit_cube() -> PickShape {
        PickShape::from_mesh(&Mesh::from(Cuboid::new(1.0, 1.0, 1.0))).unwrap()
    }

    #[test]
    fn cuboid_mesh_becomes_twelve_triangles() {
        assert_eq!(unit_cube().triangle_count(), 12);
    }

    #[test]
    fn hit_distance_accounts_for_translation_and_scale() {
        let shape = unit_cube();
        let transform = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -2.0).with_scale(Vec3::splat(2.0)),
        );
        let t = shape.intersect(forward_ray(Vec3::new(0.0, 0.0, 5.0)), &transform).unwrap();
        // Front face of the scaled cube sits at z = -1.
        assert!((t - 6.0).abs() < 1e-4);
    }

    #[test]
    fn miss_beside_the_shape() {
        let shape = unit_cube();
        let transform = GlobalTransform::IDENTITY;
        assert!(shape.intersect(forward_ray(Vec3::new(3.0, 0.0, 5.0)), &transform).is_none());
    }

    #[test]
    fn cast_ray_orders_nearest_first() {
        let shape = unit_cube();
        let near = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 1.0));
        let far = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -3.0));
        let off_axis = GlobalTransform::from(Transform::from_xyz(4.0, 0.0, 0.0));
        let (a, b, c) = (Entity::from_raw(1), Entity::from_raw(2), Entity::from_raw(3));

        let hits = cast_ray(
            forward_ray(Vec3::new(0.0, 0.0, 5.0)),
            [(b, &far, &shape), (c, &off_axis, &shape), (a, &near, &shape)],
        );
        let order: Vec<Entity> = hits.iter().map(|h| h.entity).collect();
        assert_eq!(order, vec![a, b]);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn zero_scale_is_never_hit() {
        let shape = unit_cube();
        let transform = GlobalTransform::from(Transform::from_scale(Vec3::ZERO));
        assert!(shape.intersect(forward_ray(Vec3::new(0.0, 0.0, 5.0)), &transform).is_none());
    }

    #[test]
    fn small_but_visible_scale_is_hit() {
        let shape = unit_cube();
        // 0.4 units across straight ahead of the ray.
        let transform = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -1.0).with_scale(Vec3::splat(0.4)),
        );
        let t = shape.intersect(forward_ray(Vec3::new(0.0, 0.0, 5.0)), &transform).unwrap();
        assert!((t - 5.8).abs() < 1e-4);

        let tiny = GlobalTransform::from(Transform::from_scale(Vec3::splat(0.004)));
        let t = shape.intersect(forward_ray(Vec3::new(0.0, 0.0, 5.0)), &tiny).unwrap();
        assert!((t - 4.998).abs() < 1e-4);
    }

    #[test]
    fn empty_triangle_list_is_not_pickable() {
        assert!(PickShape::from_triangles(Vec::new()).is_none());
    }
}
