//! Headless patrol demo.
//!
//! Runs the reference map and prints the weight field every logical step,
//! with the agent's tweened position underneath.
//!
//! Run with:
//!   cargo run -p patrol-bench --example headless_patrol -- [steps]
//!
//! Set `RUST_LOG=patrol_engine=debug` to see each committed step.

use patrol_bench::{reference_profile, render_ascii};
use patrol_engine::{PatrolWorld, StepOutcome, DEFAULT_STEP_INTERVAL};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let steps: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(40);

    let mut world = match PatrolWorld::new(reference_profile(DEFAULT_STEP_INTERVAL)) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!(%e, "could not start patrol");
            std::process::exit(1);
        }
    };

    println!("=== raypatrol headless demo ===\n");
    let mut committed = 0;
    while committed < steps {
        let outcome = world.advance_tick();
        let (x, y) = world.interpolated_position();
        if let StepOutcome::Committed { from, to, weight } = outcome {
            committed += 1;
            println!(
                "step {committed:>3} (frame {}): {from} -> {to} (weight {weight})",
                world.current_tick()
            );
            print!("{}", render_ascii(&world));
            println!("agent at ({x:.2}, {y:.2})\n");
        }
    }

    let passable = world.grid().passable_count();
    let metrics = world.metrics();
    println!(
        "visited {}/{} cells ({:.0}%), {} idle steps",
        metrics.visited(),
        passable,
        metrics.coverage_ratio(passable) * 100.0,
        metrics.idle_steps
    );
    if let Some(tick) = metrics.full_coverage_tick(passable) {
        println!("full coverage reached on frame {tick}");
    }
}
