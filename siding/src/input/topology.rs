//! Static description of the supervised section.
//!
//! Positions are layout units along the running line (the same units
//! the rendering layer maps to pixels). All breakpoints here are fixed
//! at startup; a layout with inverted bands is a configuration defect,
//! not a runtime error.

pub type Pos = f64;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TrainRole {
    /// Outbound train, advancing in increasing position.
    Up,
    /// Inbound train, advancing in decreasing position.
    Down,
    /// Independent train, never part of the interlocking.
    Freight,
}

impl TrainRole {
    pub fn name(&self) -> &'static str {
        match *self {
            TrainRole::Up => "up",
            TrainRole::Down => "down",
            TrainRole::Freight => "freight",
        }
    }
}

/// Half-open position interval [start, end).
#[derive(Debug, Copy, Clone)]
pub struct Band {
    pub start: Pos,
    pub end: Pos,
}

impl Band {
    pub fn new(start: Pos, end: Pos) -> Band {
        debug_assert!(start < end, "inverted band");
        Band { start: start, end: end }
    }

    pub fn contains(&self, x: Pos) -> bool {
        self.start <= x && x < self.end
    }
}

/// Position breakpoints for one interlocked train's diversion arc.
#[derive(Debug, Copy, Clone)]
pub struct Thresholds {
    /// Band in which the train climbs onto the arc.
    pub arc_entry: Band,
    /// Band in which the train descends back toward the confluence.
    pub arc_exit: Band,
}

impl Thresholds {
    /// Full extent of the arc, entry through exit.
    pub fn arc_span(&self) -> Band {
        let lo = self.arc_entry.start.min(self.arc_exit.start);
        let hi = self.arc_entry.end.max(self.arc_exit.end);
        Band::new(lo, hi)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Layout {
    /// The single-track mid-section both interlocked trains contend for.
    pub shared: Band,
    /// The inbound train has cleared the shared section once it drops
    /// below this position.
    pub handoff: Pos,
    /// Position at which an undiverted outbound train is held while the
    /// shared section is not handed off (the junction protecting signal).
    pub approach_limit: Pos,
    /// Width of the drawn layout; the freight track wraps here.
    pub extent: Pos,
    /// Lateral offset applied per tick while inside an arc band.
    pub arc_step: f64,
    up: Thresholds,
    down: Thresholds,
}

impl Layout {
    pub fn new() -> Layout {
        Layout {
            shared: Band::new(330.0, 475.0),
            handoff: 330.0,
            approach_limit: 160.0,
            extent: 800.0,
            arc_step: 5.0,
            up: Thresholds {
                arc_entry: Band::new(150.0, 185.0),
                arc_exit: Band::new(280.0, 312.0),
            },
            // The inbound train traverses the same loop from the other
            // end, so its entry band is the outbound train's exit band.
            down: Thresholds {
                arc_entry: Band::new(280.0, 312.0),
                arc_exit: Band::new(150.0, 185.0),
            },
        }
    }

    pub fn thresholds_for(&self, role: TrainRole) -> Thresholds {
        match role {
            TrainRole::Up => self.up,
            TrainRole::Down => self.down,
            TrainRole::Freight => panic!("freight train is not interlocked"),
        }
    }

    /// Fixed starting position (running coordinate, lateral offset).
    pub fn start_for(&self, role: TrainRole) -> (Pos, f64) {
        match role {
            TrainRole::Up => (55.0, 0.0),
            TrainRole::Down => (445.0, 0.0),
            TrainRole::Freight => (40.0, 0.0),
        }
    }

    /// Signed advance per tick along the running coordinate.
    pub fn step_for(&self, role: TrainRole) -> f64 {
        match role {
            TrainRole::Up => 12.0,
            TrainRole::Down => -10.0,
            TrainRole::Freight => 8.0,
        }
    }
}

impl Default for Layout {
    fn default() -> Layout {
        Layout::new()
    }
}

#[test]
fn test_band_half_open() {
    let b = Band::new(150.0, 185.0);
    assert!(b.contains(150.0));
    assert!(b.contains(184.9));
    assert!(!b.contains(185.0));
    assert!(!b.contains(149.9));
}

#[test]
fn test_arc_span() {
    let l = Layout::new();
    let span = l.thresholds_for(TrainRole::Up).arc_span();
    assert!(span.contains(150.0));
    assert!(span.contains(200.0));
    assert!(span.contains(311.9));
    assert!(!span.contains(312.0));
}
