/// The scheduler must stop both periodic callbacks on the step that ends a session
use gait_lab::config::LabConfig;
use gait_lab::error::LabError;
use gait_lab::lab::{Command, Lab};
use gait_lab::scheduler::Scheduler;
use gait_lab::session::Stage;
use gait_lab::LabEvent;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::sleep;

struct Harness {
    commands: UnboundedSender<Command>,
    events: UnboundedReceiver<LabEvent>,
    driver: JoinHandle<Lab>,
}

fn seeded() -> Lab {
    Lab::new(LabConfig {
        seed: Some(5),
        ..LabConfig::default()
    })
}

impl Harness {
    fn new() -> Self {
        Self::with_speed(1.0)
    }

    fn with_speed(speed: f32) -> Self {
        let (radio, events) = unbounded_channel();
        let (commands, command_receiver) = unbounded_channel();
        let scheduler = Scheduler::new(seeded(), radio).with_speed(speed).unwrap();
        let driver = tokio::spawn(scheduler.run(command_receiver));
        Self {
            commands,
            events,
            driver,
        }
    }

    fn send(&self, command: Command) {
        self.commands.send(command).unwrap();
    }

    async fn finish(self) -> (Lab, Vec<LabEvent>) {
        let Harness {
            commands,
            mut events,
            driver,
        } = self;
        drop(commands);
        let lab = driver.await.unwrap();
        let mut received = Vec::new();
        while let Some(event) = events.recv().await {
            received.push(event);
        }
        (lab, received)
    }
}

fn count(events: &[LabEvent], predicate: impl Fn(&LabEvent) -> bool) -> usize {
    events.iter().filter(|event| predicate(event)).count()
}

#[tokio::test(start_paused = true)]
async fn test_termination_cancels_both_clocks() {
    let harness = Harness::new();
    harness.send(Command::Start);
    sleep(Duration::from_secs(20)).await;
    let (lab, events) = harness.finish().await;

    assert_eq!(lab.session().stage, Stage::Terminal);
    assert_eq!(*lab.session().elapsed_seconds(), 15.0);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Terminated(_))), 1);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Tick(_))), 150);
    assert!(count(&events, |e| matches!(e, LabEvent::Frame(_))) > 800);

    let terminated_at = events
        .iter()
        .position(|e| matches!(e, LabEvent::Terminated(_)))
        .unwrap();
    assert!(
        events[terminated_at..].iter().all(|e| !e.is_periodic()),
        "a clock fired after termination"
    );
    assert!(matches!(events[0], LabEvent::Started));
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_both_clocks() {
    let harness = Harness::new();
    harness.send(Command::Start);
    sleep(Duration::from_millis(4_950)).await;
    harness.send(Command::Reset);
    sleep(Duration::from_secs(15)).await;
    let (lab, events) = harness.finish().await;

    assert_eq!(lab.session().stage, Stage::Idle);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Terminated(_))), 0);
    let ticks = count(&events, |e| matches!(e, LabEvent::Tick(_)));
    assert_eq!(ticks, 49);

    let reset_at = events
        .iter()
        .position(|e| matches!(e, LabEvent::Reset))
        .unwrap();
    assert_eq!(reset_at, events.len() - 1);
}

#[tokio::test(start_paused = true)]
async fn test_idle_lab_stays_quiet() {
    let harness = Harness::new();
    sleep(Duration::from_secs(3)).await;
    let (lab, events) = harness.finish().await;
    assert!(events.is_empty());
    assert_eq!(lab.session().stage, Stage::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_restart_runs_a_fresh_session() {
    let harness = Harness::new();
    harness.send(Command::Start);
    sleep(Duration::from_millis(2_050)).await;
    harness.send(Command::Start);
    sleep(Duration::from_secs(16)).await;
    let (lab, events) = harness.finish().await;

    assert_eq!(count(&events, |e| matches!(e, LabEvent::Started)), 2);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Terminated(_))), 1);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Tick(_))), 20 + 150);
    assert_eq!(*lab.session().elapsed_seconds(), 15.0);
}

#[tokio::test(start_paused = true)]
async fn test_accelerated_session() {
    let harness = Harness::with_speed(10.0);
    harness.send(Command::Start);
    sleep(Duration::from_secs(2)).await;
    let (lab, events) = harness.finish().await;

    assert_eq!(lab.session().stage, Stage::Terminal);
    assert_eq!(*lab.session().elapsed_seconds(), 15.0);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Tick(_))), 150);
    assert_eq!(count(&events, |e| matches!(e, LabEvent::Terminated(_))), 1);
}

#[test]
fn test_unusable_speeds_are_rejected() {
    for speed in [0.0, -1.0, 1e-30, 1e30, f32::NAN, f32::INFINITY] {
        let (radio, _events) = unbounded_channel();
        assert!(
            matches!(
                Scheduler::new(seeded(), radio).with_speed(speed),
                Err(LabError::InvalidConfig(_))
            ),
            "speed {speed} accepted"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_extreme_frame_rate_still_schedules() {
    let lab = Lab::new(LabConfig {
        seed: Some(5),
        frames_per_second: 1e-30,
        ..LabConfig::default()
    });
    let (radio, mut events) = unbounded_channel();
    let (commands, command_receiver) = unbounded_channel();
    let scheduler = Scheduler::new(lab, radio).with_speed(0.001).unwrap();
    let driver = tokio::spawn(scheduler.run(command_receiver));
    commands.send(Command::Start).unwrap();
    sleep(Duration::from_secs(1)).await;
    drop(commands);
    let lab = driver.await.unwrap();
    assert_eq!(lab.session().stage, Stage::Active);
    assert!(matches!(events.recv().await, Some(LabEvent::Started)));
}
