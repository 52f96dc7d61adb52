//! Scene: material arena plus the root hittable list.
//!
//! The scene owns every material; objects refer to materials through
//! `MaterialId` handles. Nothing here is mutated once rendering starts.

use crate::hittable::{HitRecord, Hittable, HittableList};
use crate::material::{Material, MaterialId};
use ember_math::{Interval, Ray};

/// A renderable scene.
#[derive(Default)]
pub struct Scene {
    materials: Vec<Box<dyn Material>>,
    objects: HittableList,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the arena and return its handle.
    ///
    /// Handles are stable for the lifetime of the scene, so any number of
    /// objects may share one.
    pub fn add_material<M: Material + 'static>(&mut self, material: M) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.materials.push(Box::new(material));
        id
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.add(object);
    }

    /// Resolve a material handle.
    pub fn material(&self, id: MaterialId) -> &dyn Material {
        self.materials[id.0].as_ref()
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        self.objects.hit(ray, ray_t, rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Lambertian, Metal};
    use crate::sphere::Sphere;
    use ember_math::Vec3;

    #[test]
    fn test_material_handles_are_stable() {
        let mut scene = Scene::new();
        let a = scene.add_material(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
        let b = scene.add_material(Metal::new(Color::ONE, 0.1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_scene_hit_delegates_to_objects() {
        let mut scene = Scene::new();
        let gray = scene.add_material(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray)));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        assert!(scene.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert_eq!(rec.material, gray);
        assert_eq!(scene.object_count(), 1);
    }
}
