// src/main.rs
//
// Headless simulation of the line breaker. Triggers a number of rounds
// and drives the controller with fixed-size frames, as a browser's
// animation loop would.

use linebreaker::{ChainConfig, Controller, TickOutcome};

/// Frame length fed to the controller, roughly 60 fps.
const FRAME_MS: f64 = 16.0;

const DEFAULT_ROUNDS: usize = 12;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rounds = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(e) => {
                log::error!("invalid round count {:?}: {}", arg, e);
                std::process::exit(2);
            }
        },
        None => DEFAULT_ROUNDS,
    };

    let mut controller = match Controller::new(ChainConfig::default()) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("failed to build controller: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "running {} rounds over {} nodes",
        rounds,
        controller.chain().len()
    );

    let mut elapsed_ms = 0.0;
    for round in 0..rounds {
        controller.trigger();

        while controller.is_running() {
            let report = controller.advance_time(FRAME_MS);
            elapsed_ms += FRAME_MS;

            match report.finished {
                Some(TickOutcome::RoundComplete { from, to }) => {
                    log::info!("round {}: node {} -> {} at {} ms", round, from, to, elapsed_ms);
                }
                Some(TickOutcome::BoundaryReached { at, traversal }) => {
                    log::info!(
                        "round {}: boundary at node {}, now {:?} at {} ms",
                        round,
                        at,
                        traversal,
                        elapsed_ms
                    );
                }
                Some(TickOutcome::Continue) | None => {}
            }
        }
    }

    let readback = controller.readback();
    println!("active node: {} ({:?})", readback.active, readback.traversal);
    for node in &readback.nodes {
        println!(
            "node {}: scales [{:.2}, {:.2}, {:.2}]",
            node.index, node.scales[0], node.scales[1], node.scales[2]
        );
    }
}
