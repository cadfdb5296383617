use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use gameobjects::{
    behaviors::{Clock, Countdown, Jitter, Oscillator},
    scenario::ScenarioLoader,
    GameObject,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Scenario-driven game object playground")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/playground.yaml")]
    scenario: PathBuf,

    /// Override tick count (uses scenario default when omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Print a progress line every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    report_every: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let mut objects = scenario.build_objects();
    let ticks = scenario.ticks(cli.ticks);
    let dt = scenario.dt_seconds;

    let start = Instant::now();
    for tick in 1..=ticks {
        for (_, object) in objects.iter_mut() {
            object.update(dt);
        }
        if cli.report_every > 0 && tick % cli.report_every == 0 {
            report_progress(tick, &objects);
        }
    }
    let elapsed = start.elapsed();

    println!(
        "Scenario '{}' completed: {} objects, {} ticks in {:.2?}",
        scenario.name,
        objects.len(),
        ticks,
        elapsed
    );
    for (name, object) in &objects {
        summarize(name, object);
    }
    Ok(())
}

fn report_progress(tick: u64, objects: &[(String, GameObject)]) {
    let components: usize = objects.iter().map(|(_, object)| object.len()).sum();
    println!(
        "tick {tick}: {} objects, {components} components",
        objects.len()
    );
}

fn summarize(name: &str, object: &GameObject) {
    let mut parts = Vec::new();
    if let Some(clock) = object.component::<Clock>() {
        parts.push(format!("clock {:.2}s", clock.elapsed()));
    }
    if let Some(oscillator) = object.component::<Oscillator>() {
        parts.push(format!("oscillator {:+.3}", oscillator.value()));
    }
    if let Some(jitter) = object.component::<Jitter>() {
        let (x, y) = jitter.offset();
        parts.push(format!("jitter ({x:+.3}, {y:+.3})"));
    }
    let countdowns = object.components::<Countdown>().count();
    if countdowns > 0 {
        let expired = object
            .components::<Countdown>()
            .filter(|countdown| countdown.remaining() <= 0.0)
            .count();
        parts.push(format!("countdowns {expired}/{countdowns} expired"));
    }
    println!("  {name}: {} components ({})", object.len(), parts.join(", "));
}
