use collider_space::*;

fn main() {
    let mut scene = Scene::new(1.0 / 60.0);
    let floor = scene.spawn_with_body(
        Transform::from_xy(0.0, -1.0),
        Collider::rect(Vec2::new(10.0, 1.0)),
        RigidBody::immovable(),
    );

    let boxes: Vec<_> = (0..5)
        .map(|i| {
            scene.spawn_with_body(
                Transform::from_xy(0.0, 0.4 + i as f32 * 0.9),
                Collider::rect(Vec2::splat(0.5)),
                RigidBody::from_mass(1.0),
            )
        })
        .collect();

    let mut recorder = EventRecorder::new();
    for _ in 0..120 {
        scene.step(1.0 / 60.0, &mut recorder);
    }

    println!("Floor at {:?}", scene.position(floor.transform));
    for (i, owner) in boxes.iter().enumerate() {
        println!("Box {i} at {:?}", scene.position(owner.transform));
    }
    println!("Collision events: {}", recorder.collisions().count());
}
