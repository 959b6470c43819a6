//! Minimal path-trace loop over the kernel.
//!
//! Traces a small grid of primary rays through a three-primitive scene and
//! prints path statistics. The scene loop, sampling strategy, and image
//! plane belong to the integrator, not the kernel; this example stands in
//! for that collaborator.
//!
//! Run with `RUST_LOG=debug` to see the scene-construction log lines.

use lucent_kernel::{
    AreaLight, AreaSample, Disc, Emitter, Geom, Intersection, LightRay, Plane, Ray, Sphere, Vec3,
};
use lucent_math::{is_nearly_zero, uniform_sample_hemisphere};
use rand::rngs::StdRng;
use rand::SeedableRng;

const GRID: u32 = 32;
const SAMPLES_PER_CELL: u32 = 4;
const MAX_BOUNCES: u32 = 5;
const ALBEDO: f32 = 0.7;

fn main() {
    env_logger::init();

    println!("lucent kernel - firefly example");
    println!("===============================");

    let lamp_material = Emitter::new(Vec3::new(4.0, 3.6, 3.2));
    let lamp_light = AreaLight::new(Vec3::new(4.0, 3.6, 3.2));
    let gray = Emitter::new(Vec3::splat(0.5));

    let lamp = Sphere::with_light(Vec3::new(0.0, 6.0, 0.0), 2.0, &lamp_material, &lamp_light)
        .expect("lamp sphere");
    let floor = Disc::new(Vec3::ZERO, Vec3::Y, 6.0, &gray).expect("floor disc");
    let backdrop = Plane::new(Vec3::new(0.0, 0.0, -8.0), Vec3::Z, &gray).expect("backdrop plane");

    let geoms: Vec<&dyn Geom> = vec![&lamp, &floor, &backdrop];

    let mut rng = StdRng::seed_from_u64(2077);
    let eye = Vec3::new(0.0, 3.0, 12.0);

    let mut paths = 0u32;
    let mut lit_paths = 0u32;
    let mut escaped = 0u32;
    let mut total = Vec3::ZERO;
    let mut shadowed = 0u32;
    let mut shadow_rays = 0u32;

    for y in 0..GRID {
        for x in 0..GRID {
            for _ in 0..SAMPLES_PER_CELL {
                // Aim at a window on the z = 0 plane in front of the eye.
                let u = (x as f32 + 0.5) / GRID as f32 * 2.0 - 1.0;
                let v = (y as f32 + 0.5) / GRID as f32 * 2.0 - 1.0;
                let target = Vec3::new(u * 6.0, 3.0 + v * 4.0, 0.0);

                let primary = LightRay::white(eye, (target - eye).normalize());
                let (color, hit_light) = trace(&geoms, primary, &mut rng);

                paths += 1;
                total += color;
                if hit_light {
                    lit_paths += 1;
                } else if is_nearly_zero(color.length()) {
                    escaped += 1;
                }

                // Direct-light bookkeeping: sample the lamp surface and
                // test occlusion with the cheap shadow query.
                let (point, _normal) = lamp.sample_point(&mut rng);
                let to_light = point - eye;
                let shadow = Ray::new(eye, to_light.normalize());
                shadow_rays += 1;
                if floor.intersect_shadow(&shadow, to_light.length())
                    || backdrop.intersect_shadow(&shadow, to_light.length())
                {
                    shadowed += 1;
                }
            }
        }
    }

    let mean = total / paths as f32;
    println!("paths traced:     {paths}");
    println!("reached the lamp: {lit_paths}");
    println!("escaped black:    {escaped}");
    println!("mean radiance:    ({:.4}, {:.4}, {:.4})", mean.x, mean.y, mean.z);
    println!("shadow rays:      {shadow_rays} ({shadowed} occluded)");
    println!("lamp area:        {:.2}", lamp.area());
}

/// Bounce a light ray around the scene until it terminates or escapes.
fn trace(geoms: &[&dyn Geom], mut ray: LightRay, rng: &mut StdRng) -> (Vec3, bool) {
    for _ in 0..MAX_BOUNCES {
        if ray.is_black() || ray.is_degenerate() {
            break;
        }

        let Some((geom, isect)) = nearest(geoms, &ray.ray()) else {
            // Escaped the scene.
            return (Vec3::ZERO, false);
        };

        if geom.area_light().is_some() {
            let out = geom.material().propagate(&ray, &isect, rng);
            return (out.color(), true);
        }

        // Diffuse bounce, handled by this integrator: uniform hemisphere
        // direction, throughput scaled by a flat albedo. Nudge the origin
        // off the surface so the next query cannot re-hit it.
        ray = LightRay::new(
            isect.position + isect.normal * 1e-3,
            uniform_sample_hemisphere(isect.normal, rng),
            ray.color() * ALBEDO,
        );
    }

    (Vec3::ZERO, false)
}

/// Closest hit across all primitives, the job an acceleration structure
/// would do in a full renderer.
fn nearest<'a>(geoms: &[&'a dyn Geom], ray: &Ray) -> Option<(&'a dyn Geom, Intersection)> {
    let mut best: Option<(&dyn Geom, Intersection)> = None;
    for &geom in geoms {
        if let Some(isect) = geom.intersect(ray) {
            let closer = match &best {
                Some((_, current)) => isect.distance < current.distance,
                None => true,
            };
            if closer {
                best = Some((geom, isect));
            }
        }
    }
    best
}
