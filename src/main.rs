use std::{process::ExitCode, rc::Rc};

use clap::Parser;
use tracing::error;

use obsr::{
    demo::run_scenario,
    logging::log_init,
    observers::{ConcreteObserverA, ConcreteObserverB},
    Observer, Subject,
};

/// Runs the subject/observer demonstration.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the subject's random source, OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    log_init(cli.log_filter);

    let mut subject = match cli.seed {
        Some(seed) => Subject::from_seed(seed),
        None => Subject::default(),
    };

    let observer_a: Rc<dyn Observer> = Rc::new(ConcreteObserverA::new());
    let observer_b: Rc<dyn Observer> = Rc::new(ConcreteObserverB::new());

    match run_scenario(&mut subject, observer_a, observer_b) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "scenario failed");
            ExitCode::FAILURE
        }
    }
}
