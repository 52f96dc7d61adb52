//! Ember - CPU Monte Carlo ray tracing
//!
//! A recursive Monte Carlo ray tracer for scenes of spheres with diffuse,
//! metallic, and dielectric materials, with stochastic antialiasing and
//! thin-lens depth of field.

mod camera;
mod hittable;
mod material;
mod ppm;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, MaterialId, Metal, ScatterResult};
pub use ppm::write_ppm;
pub use renderer::{linear_to_gamma, ray_color, render, render_pixel, ImageBuffer};
pub use sampling::{gen_f32, random_in_unit_disk, random_unit_vector};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from ember_math
pub use ember_math::{Interval, Ray, Vec3};
