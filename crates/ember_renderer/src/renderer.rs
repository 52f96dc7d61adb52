//! Core render loop.
//!
//! Monte Carlo ray tracing with:
//! - Bounded bounce depth with an accumulated attenuation product
//! - Gamma correction
//! - Anti-aliasing via jittered multi-sampling

use crate::material::Color;
use crate::scene::Scene;
use crate::{Camera, HitRecord, Hittable};
use ember_math::{Interval, Ray};
use log::info;
use rand::RngCore;

/// Compute the color seen by a ray.
///
/// Walks up to `max_depth` bounces iteratively, multiplying the
/// attenuation of each scatter event into a running product. Rays that
/// escape the scene pick up the sky gradient; absorbed rays and exhausted
/// bounce budgets contribute black.
pub fn ray_color(ray: &Ray, scene: &Scene, max_depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut current = *ray;
    let mut attenuation = Color::ONE;

    for _ in 0..max_depth {
        let mut rec = HitRecord::default();

        // The 0.001 lower bound suppresses shadow acne at scatter origins
        if !scene.hit(&current, Interval::new(0.001, f32::INFINITY), &mut rec) {
            return attenuation * sky_gradient(&current);
        }

        match scene.material(rec.material).scatter(&current, &rec, rng) {
            Some(scatter) => {
                attenuation *= scatter.attenuation;
                current = scatter.scattered;
            }
            // Absorbed
            None => return Color::ZERO,
        }
    }

    // Bounce budget exhausted
    Color::ZERO
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, scene, camera.max_depth, rng);
    }

    // Average the samples
    pixel_color / camera.samples_per_pixel as f32
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the entire scene to an image buffer, single-threaded.
///
/// Initializes the camera first, then walks scanlines top to bottom with
/// a progress counter on stderr.
pub fn render(camera: &mut Camera, scene: &Scene, rng: &mut dyn RngCore) -> ImageBuffer {
    camera.initialize();

    let width = camera.image_width;
    let height = camera.image_height();
    info!(
        "rendering {}x{} at {} spp, depth {}",
        width, height, camera.samples_per_pixel, camera.max_depth
    );

    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        eprint!("\rScanlines remaining: {} ", height - y);
        for x in 0..width {
            let color = render_pixel(camera, scene, x, y, rng);
            image.set(x, y, color);
        }
    }
    eprintln!("\rDone.                 ");

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use crate::sphere::Sphere;
    use crate::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        let gray = scene.add_material(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray)));
        scene
    }

    #[test]
    fn test_sky_gradient() {
        // Ray pointing up should be more blue (less red) than one pointing
        // down (white)
        let up_ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let up_color = sky_gradient(&up_ray);

        let down_ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let down_color = sky_gradient(&down_ray);

        assert!(up_color.x < down_color.x);
        // Blue channel of the gradient is always saturated
        assert!((up_color.z - 1.0).abs() < 1e-6);
        assert!((down_color.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 1e-4);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_ray_color_depth_zero_is_black() {
        let scene = one_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(ray_color(&ray, &scene, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_ray_color_miss_returns_gradient() {
        let scene = one_sphere_scene();
        // Straight up, far from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut rng = StdRng::seed_from_u64(1);

        let color = ray_color(&ray, &scene, 10, &mut rng);
        assert_eq!(color, Color::new(0.5, 0.7, 1.0));
    }

    #[test]
    fn test_guaranteed_hit_with_depth_one_is_black() {
        // A narrow field of view keeps every jittered primary ray on the
        // sphere, and at depth 1 the diffuse bounce exhausts the budget
        let scene = one_sphere_scene();
        let mut camera = Camera::new()
            .with_image(1, 1.0)
            .with_quality(4, 1)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(20.0, 0.0, 1.0);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(11);
        let color = render_pixel(&camera, &scene, 0, 0, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_render_empty_scene_is_background() {
        // Every ray misses; the blue channel of the gradient is exactly 1
        let scene = Scene::new();
        let mut camera = Camera::new()
            .with_image(2, 2.0)
            .with_quality(1, 5)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);

        let mut rng = StdRng::seed_from_u64(7);
        let image = render(&mut camera, &scene, &mut rng);

        assert_eq!(image.width, 2);
        assert_eq!(image.height, 1);
        for y in 0..image.height {
            for x in 0..image.width {
                let c = image.get(x, y);
                assert!((c.z - 1.0).abs() < 1e-5);
                assert!(c.x <= c.y && c.y <= c.z);
            }
        }
    }
}
