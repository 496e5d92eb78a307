#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::{Parser, Subcommand};
    use gait_lab::config::LabConfig;
    use gait_lab::error::LabError;
    use gait_lab::lab::{Command, Lab};
    use gait_lab::phase::Phase;
    use gait_lab::pose::Pose;
    use gait_lab::render;
    use gait_lab::scheduler::Scheduler;
    use gait_lab::LabEvent;
    use instant::Instant;
    use log::{error, info};
    use std::path::PathBuf;
    use tokio::sync::mpsc::unbounded_channel;

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// JSON file with session timing and sampling parameters
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        /// Fixed random seed for reproducible sessions
        #[arg(long, global = true)]
        seed: Option<u64>,

        #[command(subcommand)]
        mode: Option<Mode>,
    }

    #[derive(Subcommand, Debug)]
    enum Mode {
        /// Record a session against the clock and print the report
        Run {
            /// Clock speed relative to real time
            #[arg(long, default_value_t = 1.0)]
            speed: f32,
            /// Print the final snapshot as JSON instead of the text report
            #[arg(long)]
            json: bool,
        },
        /// Record a session without waiting and print the report
        Report {
            #[arg(long)]
            json: bool,
        },
        /// Print the walking figure at one phase as SVG
        Pose {
            /// Gait phase in radians
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            phase: f32,
            /// Draw contact markers and joint labels
            #[arg(long)]
            labels: bool,
        },
    }

    pub fn main() {
        env_logger::init();
        if let Err(lab_error) = execute(Args::parse()) {
            error!("{lab_error}");
            std::process::exit(1);
        }
    }

    fn execute(args: Args) -> Result<(), LabError> {
        let mut config = match &args.config {
            Some(path) => LabConfig::load(path)?,
            None => LabConfig::default(),
        };
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        let mode = args.mode.unwrap_or(Mode::Run {
            speed: 1.0,
            json: false,
        });
        match mode {
            Mode::Run { speed, json } => {
                let lab = run(Lab::new(config), speed)?;
                print_outcome(&lab, json)
            }
            Mode::Report { json } => {
                let mut lab = Lab::new(config);
                lab.record();
                print_outcome(&lab, json)
            }
            Mode::Pose { phase, labels } => {
                print!("{}", render::svg(&Pose::solve(Phase::new(phase)), labels));
                Ok(())
            }
        }
    }

    fn run(lab: Lab, speed: f32) -> Result<Lab, LabError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        runtime.block_on(async move {
            let (radio, mut events) = unbounded_channel();
            let (commands, command_receiver) = unbounded_channel();
            let scheduler = Scheduler::new(lab, radio).with_speed(speed)?;
            let driver = tokio::spawn(scheduler.run(command_receiver));
            let started = Instant::now();
            let mut frames = 0usize;
            commands
                .send(Command::Start)
                .map_err(|_| std::io::Error::other("scheduler stopped before the start"))?;
            while let Some(event) = events.recv().await {
                match event {
                    LabEvent::Frame(_) => frames += 1,
                    LabEvent::Tick(session) if session.elapsed.millis() % 1_000 == 0 => {
                        info!(
                            "{} steps {} cadence {}",
                            session.elapsed, session.step_count, session.cadence
                        );
                    }
                    LabEvent::Terminated(_) => break,
                    _ => {}
                }
            }
            drop(commands);
            let lab = driver.await.map_err(std::io::Error::other)?;
            let wall = started.elapsed().as_secs_f32();
            info!(
                "{frames} frames in {wall:.1}s wall clock ({:.0} fps)",
                frames as f32 / wall.max(f32::EPSILON)
            );
            Ok::<Lab, LabError>(lab)
        })
    }

    fn print_outcome(lab: &Lab, json: bool) -> Result<(), LabError> {
        if json {
            println!("{}", serde_json::to_string_pretty(&lab.snapshot())?);
        } else {
            match lab.report() {
                Some(report) => println!("{report}"),
                None => println!("No completed session to report"),
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
