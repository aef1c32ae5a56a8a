//! The movement engine.
//!
//! `tick` is a pure step function over the whole section state; it
//! owns no timer. `Engine` wraps a state with the start/stop toggle
//! and the operator triggers, and records a `History` of everything
//! it commits. Callers drive `advance()` from whatever loop or timer
//! they own, one call at a time; a tick that is never driven is simply
//! absent, never replayed.

use log::info;

use crate::input::topology::{Layout, TrainRole};
use crate::output::history::{ControlEvent, History, TickEvent, TickReport};
use crate::section::signals::{Aspect, SignalBank, NUM_SLOTS};
use crate::section::train::Train;
use crate::section::{diversion, guard};

pub const UP: usize = 0;
pub const DOWN: usize = 1;
pub const FREIGHT: usize = 2;

#[derive(Debug, Copy, Clone)]
pub struct SectionState {
    pub trains: [Train; 3],
    pub signals: SignalBank,
    pub running: bool,
}

impl SectionState {
    pub fn new(layout: &Layout) -> SectionState {
        SectionState {
            trains: [Train::new(layout, TrainRole::Up),
                     Train::new(layout, TrainRole::Down),
                     Train::new(layout, TrainRole::Freight)],
            signals: SignalBank::new(),
            running: false,
        }
    }

    pub fn train(&self, role: TrainRole) -> &Train {
        match role {
            TrainRole::Up => &self.trains[UP],
            TrainRole::Down => &self.trains[DOWN],
            TrainRole::Freight => &self.trains[FREIGHT],
        }
    }
}

/// Advances every train one step and resolves the interlocking.
/// Pure: the input state is untouched, the committed state and the
/// tick's events are returned.
pub fn tick(layout: &Layout, state: &SectionState) -> (SectionState, TickReport) {
    let mut next = *state;
    let mut report = TickReport::new();

    // Tentative next positions along each train's direction axis.
    let tentative_up = next.trains[UP].position.x + next.trains[UP].step;
    let tentative_down = next.trains[DOWN].position.x + next.trains[DOWN].step;
    let tentative_freight =
        (next.trains[FREIGHT].position.x + next.trains[FREIGHT].step).rem_euclid(layout.extent);

    let verdict = guard::check(layout,
                               &next.trains[UP],
                               &next.trains[DOWN],
                               tentative_up,
                               tentative_down);

    if verdict.hold_up {
        report.push(TickEvent::Held(TrainRole::Up));
    } else {
        next.trains[UP].position.x = tentative_up;
    }
    next.trains[DOWN].position.x = tentative_down;
    next.trains[FREIGHT].position.x = tentative_freight;

    // Diversion arcs, resolved on the committed positions. The lateral
    // offset accumulates for every tick spent inside a band.
    for &i in &[UP, DOWN] {
        let res = diversion::resolve(layout, &next.trains[i]);
        next.trains[i].position.y += res.lateral;
        for w in res.writes {
            if next.signals.set(w.slot, w.aspect) {
                report.push(TickEvent::Signal(w.slot, w.aspect));
            }
        }
    }
    for w in verdict.writes {
        if next.signals.set(w.slot, w.aspect) {
            report.push(TickEvent::Signal(w.slot, w.aspect));
        }
    }

    for t in &next.trains {
        report.push(TickEvent::Position(t.role, t.position.x, t.position.y));
    }

    (next, report)
}

pub struct Engine {
    layout: Layout,
    state: SectionState,
    history: History,
    ticks: u64,
}

impl Engine {
    pub fn new(layout: Layout) -> Engine {
        let state = SectionState::new(&layout);
        Engine {
            layout: layout,
            state: state,
            history: History::default(),
            ticks: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &SectionState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    /// Idempotent: starting a running engine does nothing.
    pub fn start(&mut self) {
        if !self.state.running {
            self.state.running = true;
            self.history.control(ControlEvent::Start);
            info!("tracking started");
        }
    }

    /// Idempotent: stopping a stopped engine does nothing. State is
    /// left exactly as last committed.
    pub fn stop(&mut self) {
        if self.state.running {
            self.state.running = false;
            self.history.control(ControlEvent::Stop);
            info!("tracking stopped");
        }
    }

    /// Latches the train's diversion flag. The core never clears it.
    pub fn request_diversion(&mut self, role: TrainRole) {
        let idx = match role {
            TrainRole::Up => UP,
            TrainRole::Down => DOWN,
            TrainRole::Freight => panic!("freight train has no diversion arc"),
        };
        if !self.state.trains[idx].diverted {
            self.state.trains[idx].diverted = true;
            self.history.control(ControlEvent::Divert(role));
            info!("diversion requested for {} train", role.name());
        }
    }

    /// Commits one tick if running; returns whether a tick fired.
    pub fn advance(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        let (next, report) = tick(&self.layout, &self.state);
        self.state = next;
        self.history.tick(self.ticks, report);
        self.ticks += 1;
        true
    }

    pub fn signals(&self) -> &[Aspect; NUM_SLOTS] {
        self.state.signals.aspects()
    }

    pub fn positions(&self) -> [(TrainRole, f64, f64); 3] {
        let p = |i: usize| {
            let t = &self.state.trains[i];
            (t.role, t.position.x, t.position.y)
        };
        [p(UP), p(DOWN), p(FREIGHT)]
    }
}
