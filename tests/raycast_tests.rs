use std::collections::HashSet;

use approx::assert_relative_eq;
use collider_space::*;

fn add_box(store: &mut ComponentStore, space: &mut ColliderSpace, position: Vec2) -> TransformHandle {
    let transform = store.transforms.insert(Transform::from_position(position));
    let collider = store.colliders.insert(Collider::rect(Vec2::ONE));
    space.insert(ColliderOwner::new(transform, collider));
    transform
}

fn no_ignores() -> HashSet<TransformHandle> {
    HashSet::new()
}

#[test]
fn ray_at_face_hits_at_analytic_distance() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    let square = add_box(&mut store, &mut space, Vec2::ZERO);

    // from below, through the bottom face at y = -1
    let up = Ray::unbounded(Vec2::new(0.3, -5.0), Vec2::Y);
    let hit = space.raycast(&store, &up, &no_ignores());
    assert_eq!(hit.other, Some(square));
    assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
    assert_relative_eq!(up.point_at(hit.distance).y, -1.0, epsilon = 1e-5);

    // from the right, through the right face at x = 1, with a scaled direction
    let left = Ray::unbounded(Vec2::new(7.0, -0.5), Vec2::new(-2.0, 0.0));
    let hit = space.raycast(&store, &left, &no_ignores());
    assert_eq!(hit.other, Some(square));
    assert_relative_eq!(hit.distance, 3.0, epsilon = 1e-5);
}

#[test]
fn ray_aimed_away_misses() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    add_box(&mut store, &mut space, Vec2::ZERO);

    let away = Ray::unbounded(Vec2::new(0.0, -5.0), Vec2::NEG_Y);
    let hit = space.raycast(&store, &away, &no_ignores());
    assert!(!hit.is_hit());
    assert!(hit.other.is_none());

    let beside = Ray::unbounded(Vec2::new(3.0, -5.0), Vec2::Y);
    assert!(!space.raycast(&store, &beside, &no_ignores()).is_hit());
}

#[test]
fn bounded_ray_stops_short() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    add_box(&mut store, &mut space, Vec2::ZERO);

    let short = Ray::new(Vec2::new(0.0, -5.0), Vec2::Y, 3.5);
    let hit = space.raycast(&store, &short, &no_ignores());
    assert!(!hit.is_hit());
    assert_eq!(hit.distance, 3.5);

    let exact = Ray::new(Vec2::new(0.0, -5.0), Vec2::Y, 4.0);
    assert!(space.raycast(&store, &exact, &no_ignores()).is_hit());
}

#[test]
fn nearest_candidate_wins_regardless_of_registration_order() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    let far = add_box(&mut store, &mut space, Vec2::new(0.0, 20.0));
    let near = add_box(&mut store, &mut space, Vec2::new(0.0, 0.0));
    let middle = add_box(&mut store, &mut space, Vec2::new(0.0, 10.0));

    let ray = Ray::unbounded(Vec2::new(0.0, -10.0), Vec2::Y);
    let hit = space.raycast(&store, &ray, &no_ignores());
    assert_eq!(hit.other, Some(near));
    assert_relative_eq!(hit.distance, 9.0, epsilon = 1e-5);

    let ignored: HashSet<_> = [near].into_iter().collect();
    let hit = space.raycast(&store, &ray, &ignored);
    assert_eq!(hit.other, Some(middle));
    assert_relative_eq!(hit.distance, 19.0, epsilon = 1e-5);

    let ignored: HashSet<_> = [near, middle].into_iter().collect();
    let mut candidates = 0;
    let hit = space.raycast_inspect(&store, &ray, &ignored, |_, _| candidates += 1);
    assert_eq!(hit.other, Some(far));
    assert_eq!(candidates, 1);
}

#[test]
fn accumulator_never_grows_within_one_query() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    for y in [15.0, 30.0, 4.0, 12.0, -2.0, 8.0] {
        add_box(&mut store, &mut space, Vec2::new(0.0, y));
    }

    let ray = Ray::unbounded(Vec2::new(0.0, -10.0), Vec2::Y);
    let mut seen = Vec::new();
    let hit = space.raycast_inspect(&store, &ray, &no_ignores(), |_, acc| seen.push(acc.distance));

    assert_eq!(seen.len(), 6);
    for pair in seen.windows(2) {
        assert!(pair[1] <= pair[0], "distance grew from {} to {}", pair[0], pair[1]);
    }
    let expected = [24.0, 24.0, 13.0, 13.0, 7.0, 7.0];
    for (got, want) in seen.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-5);
    }
    assert_relative_eq!(hit.distance, 7.0, epsilon = 1e-5);
}

#[test]
fn overlapping_boxes_keep_their_own_first_edge() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    let a = add_box(&mut store, &mut space, Vec2::ZERO);
    let b = add_box(&mut store, &mut space, Vec2::new(0.5, 0.0));
    let ray = Ray::unbounded(Vec2::new(-10.0, 0.0), Vec2::X);

    // each box's first edge in winding order is its right face
    let hit = space.raycast(&store, &ray, &no_ignores());
    assert_eq!(hit.other, Some(a));
    assert_relative_eq!(hit.distance, 11.0, epsilon = 1e-5);

    let ignored: HashSet<_> = [a].into_iter().collect();
    let alone = space.raycast(&store, &ray, &ignored);
    assert_eq!(alone.other, Some(b));
    assert_relative_eq!(alone.distance, 11.5, epsilon = 1e-5);

    // the result for b must not depend on a being scanned before it
    let mut reversed = ColliderSpace::new();
    for owner in space.owners().iter().rev() {
        reversed.insert(*owner);
    }
    let hit = reversed.raycast(&store, &ray, &no_ignores());
    assert_eq!(hit.other, Some(a));
    assert_relative_eq!(hit.distance, 11.0, epsilon = 1e-5);
}

#[test]
fn accumulated_distance_never_grows() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    let ray = Ray::unbounded(Vec2::new(0.0, -10.0), Vec2::Y);

    let mut previous = f32::INFINITY;
    for y in [15.0, 30.0, 4.0, 12.0, -2.0, 8.0] {
        add_box(&mut store, &mut space, Vec2::new(0.0, y));
        let hit = space.raycast(&store, &ray, &no_ignores());
        assert!(hit.is_hit());
        assert!(
            hit.distance <= previous,
            "distance grew from {previous} to {}",
            hit.distance
        );
        previous = hit.distance;
    }
    assert_relative_eq!(previous, 7.0, epsilon = 1e-5);
}

#[test]
fn zero_distance_hit_ends_the_scan() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    let surface = add_box(&mut store, &mut space, Vec2::ZERO);
    add_box(&mut store, &mut space, Vec2::new(0.0, 5.0));
    add_box(&mut store, &mut space, Vec2::new(0.0, 9.0));

    // starts exactly on the bottom face of `surface`
    let ray = Ray::unbounded(Vec2::new(0.0, -1.0), Vec2::Y);
    let mut candidates = Vec::new();
    let hit = space.raycast_inspect(&store, &ray, &no_ignores(), |owner, _| candidates.push(owner));
    assert_eq!(hit.other, Some(surface));
    assert_eq!(hit.distance, 0.0);
    assert_eq!(candidates, vec![surface]);
}

#[test]
fn scan_continues_until_zero_hit_is_found() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    add_box(&mut store, &mut space, Vec2::new(0.0, 5.0));
    add_box(&mut store, &mut space, Vec2::new(0.0, 9.0));
    let surface = add_box(&mut store, &mut space, Vec2::ZERO);
    add_box(&mut store, &mut space, Vec2::new(0.0, 20.0));

    let ray = Ray::unbounded(Vec2::new(0.0, -1.0), Vec2::Y);
    let mut candidates = 0;
    let hit = space.raycast_inspect(&store, &ray, &no_ignores(), |_, _| candidates += 1);
    assert_eq!(hit.other, Some(surface));
    assert_eq!(candidates, 3);
}

#[test]
fn polygon_collider_is_hit_on_slanted_face() {
    let mut store = ComponentStore::new();
    let mut space = ColliderSpace::new();
    let transform = store.transforms.insert(Transform::from_xy(0.0, 0.0));
    let collider = store.colliders.insert(Collider::polygon(vec![
        Vec2::new(2.0, 0.0),
        Vec2::new(0.0, 2.0),
        Vec2::new(0.0, 0.0),
    ]));
    space.insert(ColliderOwner::new(transform, collider));

    // hypotenuse x + y = 2 is the first edge in winding order
    let ray = Ray::unbounded(Vec2::new(5.0, 5.0), Vec2::new(-1.0, -1.0));
    let hit = space.raycast(&store, &ray, &no_ignores());
    assert_eq!(hit.other, Some(transform));
    assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
}
