use std::collections::HashSet;

use collider_space::*;

fn main() {
    let mut scene = Scene::default();
    for i in 0..5 {
        scene.spawn(
            Transform::from_xy(3.0 + i as f32 * 2.5, (i as f32 - 2.0) * 0.4),
            Collider::rect(Vec2::splat(0.5)),
        );
    }

    let ray = Ray::unbounded(Vec2::new(0.0, 0.0), Vec2::X);
    let hit = scene.raycast(&ray, &HashSet::new());
    match hit.other {
        Some(transform) => println!(
            "Ray hit {transform:?} at {:.2} ({:?})",
            hit.distance,
            ray.point_at(hit.distance)
        ),
        None => println!("Ray hit nothing"),
    }
}
