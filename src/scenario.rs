use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::behaviors::{Clock, Countdown, Jitter, Oscillator};
use crate::gameobject::GameObject;

fn default_dt_seconds() -> f32 {
    1.0 / 60.0
}

fn default_period_seconds() -> f32 {
    1.0
}

fn default_amplitude() -> f32 {
    1.0
}

fn default_intensity() -> f32 {
    0.1
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default = "default_dt_seconds")]
    pub dt_seconds: f32,
    #[serde(default)]
    pub ticks: Option<u64>,
    pub objects: Vec<ObjectSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectSpec {
    pub name: String,
    pub components: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentSpec {
    Clock,
    Oscillator {
        #[serde(default = "default_period_seconds")]
        period_seconds: f32,
        #[serde(default = "default_amplitude")]
        amplitude: f32,
    },
    Jitter {
        #[serde(default = "default_intensity")]
        intensity: f32,
    },
    Countdown {
        seconds: f32,
    },
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario must define at least one object")]
    NoObjects,
    #[error("dt_seconds must be positive, got {0}")]
    NonPositiveDt(f32),
    #[error("object '{0}' is defined more than once")]
    DuplicateObject(String),
    #[error("object '{0}' has no components")]
    EmptyObject(String),
    #[error("object '{object}': {field} must be positive, got {value}")]
    NonPositiveField {
        object: String,
        field: &'static str,
        value: f32,
    },
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.objects.is_empty() {
            return Err(ScenarioError::NoObjects);
        }
        if self.dt_seconds <= 0.0 {
            return Err(ScenarioError::NonPositiveDt(self.dt_seconds));
        }
        let mut known = Vec::new();
        for object in &self.objects {
            if known.contains(&object.name) {
                return Err(ScenarioError::DuplicateObject(object.name.clone()));
            }
            known.push(object.name.clone());
            if object.components.is_empty() {
                return Err(ScenarioError::EmptyObject(object.name.clone()));
            }
            for component in &object.components {
                match component {
                    ComponentSpec::Oscillator { period_seconds, .. } if *period_seconds <= 0.0 => {
                        return Err(ScenarioError::NonPositiveField {
                            object: object.name.clone(),
                            field: "period_seconds",
                            value: *period_seconds,
                        });
                    }
                    ComponentSpec::Countdown { seconds } if *seconds <= 0.0 => {
                        return Err(ScenarioError::NonPositiveField {
                            object: object.name.clone(),
                            field: "seconds",
                            value: *seconds,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Assemble one game object per spec entry, components in file order.
    ///
    /// Jitter streams are seeded from the scenario seed and the component's
    /// position, so two builds of the same scenario replay identically.
    pub fn build_objects(&self) -> Vec<(String, GameObject)> {
        let mut objects = Vec::with_capacity(self.objects.len());
        for (object_index, spec) in self.objects.iter().enumerate() {
            let mut object = GameObject::new();
            for (component_index, component) in spec.components.iter().enumerate() {
                match component {
                    ComponentSpec::Clock => {
                        object.add_component(Clock::new());
                    }
                    ComponentSpec::Oscillator {
                        period_seconds,
                        amplitude,
                    } => {
                        object.add_component(Oscillator::new(*period_seconds, *amplitude));
                    }
                    ComponentSpec::Jitter { intensity } => {
                        let seed = derive_seed(self.seed, object_index, component_index);
                        object.add_component(Jitter::new(seed, *intensity));
                    }
                    ComponentSpec::Countdown { seconds } => {
                        object.add_component(Countdown::new(*seconds));
                    }
                }
            }
            objects.push((spec.name.clone(), object));
        }
        objects
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.or(self.ticks).unwrap_or(600)
    }
}

fn derive_seed(master: u64, object_index: usize, component_index: usize) -> u64 {
    master
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add((object_index as u64) << 32)
        .wrapping_add(component_index as u64)
}
