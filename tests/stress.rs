//! Stress workload: many objects, repeated typed queries.
//!
//! The point is that `component::<T>` goes through the type index, so the
//! query cost stays flat as the per-object component count grows. These
//! tests assert correctness only; timing lives in benches/typed_query.rs.

use std::any::Any;

use gameobjects::{Component, GameObject};

const NUM_OBJECTS: usize = 1000;
const NUM_GETS: usize = 1000;

struct Hay;

impl Component for Hay {
    fn update(&mut self, _dt: f32) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct Needle(u32);

impl Component for Needle {
    fn update(&mut self, _dt: f32) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn query_needles_with_n_per_object(per_object: usize) {
    for i in 0..NUM_OBJECTS {
        let mut object = GameObject::new();
        let needle_at = i % per_object;
        for j in 0..per_object {
            if j == needle_at {
                object.add_component(Needle(i as u32));
            } else {
                object.add_component(Hay);
            }
        }

        for _ in 0..NUM_GETS {
            let found = object.component::<Needle>().expect("needle present");
            assert_eq!(found.0, i as u32);
        }
    }
}

#[test]
fn queries_with_1_component_per_object() {
    query_needles_with_n_per_object(1);
}

#[test]
fn queries_with_10_components_per_object() {
    query_needles_with_n_per_object(10);
}

#[test]
fn queries_with_100_components_per_object() {
    query_needles_with_n_per_object(100);
}

#[test]
fn bulk_removal_under_load() {
    let mut object = GameObject::new();
    for i in 0..10_000 {
        if i % 10 == 0 {
            object.add_component(Needle(i as u32));
        } else {
            object.add_component(Hay);
        }
    }

    assert_eq!(object.remove_components::<Needle>(), 1000);
    assert_eq!(object.components::<Needle>().count(), 0);
    assert_eq!(object.len(), 9000);
    assert_eq!(object.components::<Hay>().count(), 9000);
}
