//! Demo scene renderer.
//!
//! Builds the classic four-sphere scene (ground, diffuse, hollow glass,
//! metal), renders it, and writes the PPM image to stdout. Progress goes
//! to stderr; set RUST_LOG for render diagnostics.

use anyhow::Result;
use ember_math::Vec3;
use ember_renderer::{render, write_ppm, Camera, Color, Dielectric, Lambertian, Metal, Scene, Sphere};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufWriter, Write};

fn main() -> Result<()> {
    env_logger::init();

    let scene = build_scene();
    info!("scene built with {} objects", scene.object_count());

    let mut camera = Camera::new()
        .with_image(400, 16.0 / 9.0)
        .with_quality(100, 10)
        .with_position(
            Vec3::new(0.0, 0.0, 0.0),  // look_from
            Vec3::new(0.0, 0.0, -1.0), // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_lens(90.0, 10.0, 1.4);

    let mut rng = StdRng::from_entropy();
    let image = render(&mut camera, &scene, &mut rng);

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_ppm(&image, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = scene.add_material(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass = scene.add_material(Dielectric::new(1.5));
    let gold = scene.add_material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)));
    // Glass sphere with a negative-radius inner shell: the inverted normal
    // turns the pair into a hollow lens
    scene.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass)));
    scene.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        -0.4,
        glass,
    )));
    scene.add(Box::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, gold)));

    scene
}
