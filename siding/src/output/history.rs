use smallvec::SmallVec;

use crate::input::topology::{Pos, TrainRole};
use crate::section::signals::Aspect;
use failure;

/// Everything one tick committed: final positions for every train,
/// signal aspects that changed, and any vetoed advance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickEvent {
    Position(TrainRole, Pos, f64),
    Signal(usize, Aspect),
    Held(TrainRole),
}

pub type TickReport = SmallVec<[TickEvent; 8]>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    Start,
    Stop,
    Divert(TrainRole),
}

#[derive(Debug, PartialEq)]
pub enum LogEvent {
    Control(ControlEvent),
    Tick(u64, TickReport),
}

#[derive(Debug)]
pub struct History {
    pub events: Vec<LogEvent>,
}

impl Default for History {
    fn default() -> History {
        History { events: vec![] }
    }
}

impl History {
    pub fn control(&mut self, ev: ControlEvent) {
        self.events.push(LogEvent::Control(ev));
    }

    pub fn tick(&mut self, n: u64, report: TickReport) {
        self.events.push(LogEvent::Tick(n, report));
    }
}

/// Print one train position per line on the following format:
/// `trainname tick x y`.
pub fn positions(h: &History) -> Result<String, failure::Error> {
    use std::fmt::Write;
    let mut s = String::new();
    for ev in &h.events {
        if let LogEvent::Tick(n, ref report) = *ev {
            for tev in report {
                if let TickEvent::Position(role, x, y) = *tev {
                    write!(s, "{} {} {} {}\n", role.name(), n, x, y)?;
                }
            }
        }
    }
    Ok(s)
}

#[test]
fn test_positions_format() {
    let mut h = History::default();
    h.control(ControlEvent::Start);
    let mut report = TickReport::new();
    report.push(TickEvent::Position(TrainRole::Up, 67.0, 0.0));
    report.push(TickEvent::Held(TrainRole::Up));
    h.tick(0, report);
    let s = positions(&h).unwrap();
    assert_eq!(s, "up 0 67 0\n");
}
