use crate::input::topology::{Layout, Pos, TrainRole};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    /// Running coordinate along the line.
    pub x: Pos,
    /// Lateral offset; nonzero only while riding a diversion arc.
    pub y: f64,
}

/// Segment membership, derived from position and the diversion flag
/// every tick. Never stored, so it cannot diverge from the position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Segment {
    Main,
    Diverted,
    Shared,
    Unresolved,
}

#[derive(Debug, Copy, Clone)]
pub struct Train {
    pub role: TrainRole,
    pub position: Position,
    /// Signed advance per tick.
    pub step: f64,
    /// Latched by the operator; never reset by the core.
    pub diverted: bool,
}

impl Train {
    pub fn new(layout: &Layout, role: TrainRole) -> Train {
        let (x, y) = layout.start_for(role);
        Train {
            role: role,
            position: Position { x: x, y: y },
            step: layout.step_for(role),
            diverted: false,
        }
    }

    /// At most one of diverted/shared/main holds, by construction.
    pub fn segment(&self, layout: &Layout) -> Segment {
        let x = self.position.x;
        if x < 0.0 || x > layout.extent {
            return Segment::Unresolved;
        }
        match self.role {
            TrainRole::Freight => Segment::Main,
            role => {
                if self.diverted && layout.thresholds_for(role).arc_span().contains(x) {
                    Segment::Diverted
                } else if layout.shared.contains(x) {
                    Segment::Shared
                } else {
                    Segment::Main
                }
            }
        }
    }
}

#[test]
fn test_segment_membership() {
    let layout = Layout::new();
    let mut up = Train::new(&layout, TrainRole::Up);
    assert_eq!(up.segment(&layout), Segment::Main);
    up.position.x = 340.0;
    assert_eq!(up.segment(&layout), Segment::Shared);
    up.position.x = 200.0;
    up.diverted = true;
    assert_eq!(up.segment(&layout), Segment::Diverted);
    up.position.x = 340.0;
    // Past the arc, a diverted train is back on the line proper.
    assert_eq!(up.segment(&layout), Segment::Shared);
    up.position.x = 900.0;
    assert_eq!(up.segment(&layout), Segment::Unresolved);
}
