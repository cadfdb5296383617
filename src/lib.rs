pub mod behaviors;
pub mod component;
pub mod gameobject;
pub mod scenario;

pub use component::{Component, GameObjectId, OwnerCell};
pub use gameobject::{AddedComponent, ComponentId, GameObject};
pub use scenario::{Scenario, ScenarioLoader};
