//! Drives a lab from two periodic callbacks on a single task: the animation
//! frame clock and the session timer. Both clocks exist only while a session
//! is recording and are dropped in the same step that stops it.

use crate::error::LabError;
use crate::lab::{Command, Lab};
use crate::session::Transition;
use crate::LabEvent;
use log::{debug, info};
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub type Radio = UnboundedSender<LabEvent>;

impl LabEvent {
    pub fn send(self, radio: &Radio) {
        if radio.send(self).is_err() {
            debug!("No one is listening to the lab");
        }
    }
}

const SHORTEST_PERIOD: Duration = Duration::from_millis(1);
const LONGEST_PERIOD: Duration = Duration::from_secs(3_600);

/// Clock speeds relative to real time that `with_speed` accepts
pub const SPEEDS: RangeInclusive<f32> = 0.001..=1_000.0;

fn scaled(period: Duration, speed: f32) -> Duration {
    Duration::try_from_secs_f32(period.as_secs_f32() / speed)
        .map_or(LONGEST_PERIOD, |period| {
            period.clamp(SHORTEST_PERIOD, LONGEST_PERIOD)
        })
}

struct Clocks {
    timer: Interval,
    animation: Interval,
}

impl Clocks {
    fn new(tick_period: Duration, frame_period: Duration) -> Self {
        let now = Instant::now();
        // like a browser interval, the first tick comes one period after start
        let timer = interval_at(now + tick_period, tick_period);
        let mut animation = interval_at(now + frame_period, frame_period);
        animation.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { timer, animation }
    }
}

enum Wake {
    Command(Command),
    Tick,
    Frame,
}

pub struct Scheduler {
    lab: Lab,
    radio: Radio,
    tick_period: Duration,
    frame_period: Duration,
}

impl Scheduler {
    pub fn new(lab: Lab, radio: Radio) -> Self {
        let tick_period = lab.config().tick_period();
        let frame_period = lab.config().frame_period();
        Self {
            lab,
            radio,
            tick_period,
            frame_period,
        }
    }

    /// Run the clocks faster (or slower) than real time. The session itself
    /// still counts its configured tick length.
    pub fn with_speed(mut self, speed: f32) -> Result<Self, LabError> {
        if !SPEEDS.contains(&speed) {
            return Err(LabError::InvalidConfig(format!(
                "speed {speed} outside {}..={}",
                SPEEDS.start(),
                SPEEDS.end()
            )));
        }
        self.tick_period = scaled(self.tick_period, speed);
        self.frame_period = scaled(self.frame_period, speed);
        Ok(self)
    }

    /// Serve commands until the command channel closes, then hand back the lab.
    pub async fn run(mut self, mut commands: UnboundedReceiver<Command>) -> Lab {
        let mut clocks: Option<Clocks> = None;
        loop {
            let wake = match clocks.as_mut() {
                None => match commands.recv().await {
                    Some(command) => Wake::Command(command),
                    None => break,
                },
                Some(clocks) => tokio::select! {
                    biased;
                    command = commands.recv() => match command {
                        Some(command) => Wake::Command(command),
                        None => break,
                    },
                    _ = clocks.timer.tick() => Wake::Tick,
                    _ = clocks.animation.tick() => Wake::Frame,
                },
            };
            match wake {
                Wake::Command(Command::Start) => {
                    self.lab.start();
                    clocks = Some(Clocks::new(self.tick_period, self.frame_period));
                    LabEvent::Started.send(&self.radio);
                }
                Wake::Command(Command::Reset) => {
                    clocks = None;
                    self.lab.reset();
                    LabEvent::Reset.send(&self.radio);
                }
                Wake::Tick => {
                    let transition = self.lab.tick();
                    let session = self.lab.session();
                    LabEvent::Tick(session).send(&self.radio);
                    if transition == Some(Transition::Terminated) {
                        clocks = None;
                        LabEvent::Terminated(session).send(&self.radio);
                    }
                }
                Wake::Frame => {
                    if let Some(phase) = self.lab.frame() {
                        LabEvent::Frame(phase).send(&self.radio);
                    }
                }
            }
        }
        info!("Scheduler stopped");
        self.lab
    }
}
