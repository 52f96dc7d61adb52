//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    material::MaterialId,
};
use ember_math::{Interval, Ray, Vec3};

/// A sphere primitive.
///
/// The radius is signed. A negative radius keeps the same surface but
/// flips the outward normal inward, which is how hollow dielectric shells
/// (an air bubble inside a glass sphere) are modeled. Do not normalize or
/// clamp it away.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Create a new sphere with a handle into the scene's material arena.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        // Half-b form of the ray-sphere quadratic avoids cancellation
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        // Signed radius: a hollow sphere reports an inward outward-normal here
        let outward_normal = (rec.p - self.center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        rec.material = self.material;

        true
    }
}
