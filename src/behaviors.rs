//! Stock components used by scenarios and the demo runner

use std::any::Any;
use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::component::{Component, GameObjectId, OwnerCell};

/// Accumulates elapsed simulation time.
pub struct Clock {
    elapsed: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Clock {
    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Sine wave driven by the tick clock.
pub struct Oscillator {
    period_seconds: f32,
    amplitude: f32,
    phase: f32,
    value: f32,
}

impl Oscillator {
    pub fn new(period_seconds: f32, amplitude: f32) -> Self {
        Self {
            period_seconds,
            amplitude,
            phase: 0.0,
            value: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Component for Oscillator {
    fn update(&mut self, dt: f32) {
        self.phase = (self.phase + dt / self.period_seconds).fract();
        self.value = self.amplitude * (self.phase * TAU).sin();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Bounded random offset, regenerated every tick from a seeded stream.
///
/// Each instance owns its own `ChaCha8Rng`, so runs with the same scenario
/// seed replay the same trajectory regardless of other objects.
pub struct Jitter {
    rng: ChaCha8Rng,
    intensity: f32,
    offset: (f32, f32),
}

impl Jitter {
    pub fn new(seed: u64, intensity: f32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            intensity,
            offset: (0.0, 0.0),
        }
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }
}

impl Component for Jitter {
    fn update(&mut self, _dt: f32) {
        if self.intensity > 0.0 {
            self.offset = (
                self.rng.gen_range(-self.intensity..self.intensity),
                self.rng.gen_range(-self.intensity..self.intensity),
            );
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Message that refills every [`Countdown`] in the object.
pub struct ResetCountdown;

/// Counts down to zero, tracking how often it expired.
///
/// Keeps a back-reference to its owner, bound once at attach time, and
/// listens for [`ResetCountdown`] broadcasts.
pub struct Countdown {
    remaining: f32,
    initial: f32,
    expirations: u32,
    owner: OwnerCell,
}

impl Countdown {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            initial: seconds,
            expirations: 0,
            owner: OwnerCell::new(),
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn expirations(&self) -> u32 {
        self.expirations
    }

    pub fn owner(&self) -> Option<GameObjectId> {
        self.owner.get()
    }
}

impl Component for Countdown {
    fn update(&mut self, dt: f32) {
        if self.remaining <= 0.0 {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.expirations += 1;
        }
    }

    fn attached(&mut self, owner: GameObjectId) {
        self.owner.bind(owner);
    }

    fn listen(&mut self, message: &dyn Any) {
        if message.downcast_ref::<ResetCountdown>().is_some() {
            self.remaining = self.initial;
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
