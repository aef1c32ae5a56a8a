//! The diversion controller.
//!
//! Given a train's committed position for this tick and its latched
//! diversion flag, decides the lateral offset to apply and which
//! signal slots to write. The offset is applied every tick the
//! position lies inside a band, so the lateral displacement
//! accumulates into a continuous arc over several ticks rather than
//! jumping once at the boundary.

use smallvec::SmallVec;
use log::debug;

use crate::input::topology::{Layout, TrainRole};
use crate::section::signals::{Aspect, SignalWrite, UP_MAIN, UP_ARC, DOWN_MAIN, DOWN_ARC};
use crate::section::train::Train;

#[derive(Debug)]
pub struct Resolution {
    /// Lateral displacement to add to the train's position this tick.
    pub lateral: f64,
    pub writes: SmallVec<[SignalWrite; 4]>,
}

impl Resolution {
    fn none() -> Resolution {
        Resolution { lateral: 0.0, writes: SmallVec::new() }
    }
}

fn write(slot: usize, aspect: Aspect) -> SignalWrite {
    SignalWrite { slot: slot, aspect: aspect }
}

pub fn resolve(layout: &Layout, train: &Train) -> Resolution {
    if !train.diverted {
        // Nothing requested; occupancy of the shared section is the
        // guard's business.
        return Resolution::none();
    }

    let x = train.position.x;
    match train.role {
        TrainRole::Up => {
            let th = layout.thresholds_for(TrainRole::Up);
            if th.arc_entry.contains(x) {
                // Climbing onto the arc: the arc opens, the main
                // continuation closes behind the train, and the loop
                // block is claimed against the inbound train.
                let mut writes = SmallVec::new();
                writes.push(write(UP_ARC, Aspect::Clear));
                writes.push(write(UP_MAIN, Aspect::Blocked));
                writes.push(write(DOWN_MAIN, Aspect::Blocked));
                debug!("up train on arc entry at x={}", x);
                Resolution { lateral: -layout.arc_step, writes: writes }
            } else if th.arc_exit.contains(x) {
                // Descending toward the confluence: the inbound pair
                // flips, handing it priority.
                let mut writes = SmallVec::new();
                writes.push(write(DOWN_MAIN, Aspect::Clear));
                writes.push(write(DOWN_ARC, Aspect::Blocked));
                debug!("up train on arc exit at x={}", x);
                Resolution { lateral: layout.arc_step, writes: writes }
            } else {
                Resolution::none()
            }
        }
        TrainRole::Down => {
            let th = layout.thresholds_for(TrainRole::Down);
            if th.arc_entry.contains(x) {
                let mut writes = SmallVec::new();
                writes.push(write(DOWN_ARC, Aspect::Clear));
                writes.push(write(DOWN_MAIN, Aspect::Blocked));
                writes.push(write(UP_MAIN, Aspect::Blocked));
                debug!("down train on arc entry at x={}", x);
                Resolution { lateral: layout.arc_step, writes: writes }
            } else if th.arc_exit.contains(x) {
                let mut writes = SmallVec::new();
                writes.push(write(UP_MAIN, Aspect::Clear));
                writes.push(write(UP_ARC, Aspect::Blocked));
                debug!("down train on arc exit at x={}", x);
                Resolution { lateral: -layout.arc_step, writes: writes }
            } else {
                Resolution::none()
            }
        }
        TrainRole::Freight => Resolution::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::train::Position;

    fn up_at(layout: &Layout, x: f64, diverted: bool) -> Train {
        let mut t = Train::new(layout, TrainRole::Up);
        t.position = Position { x: x, y: 0.0 };
        t.diverted = diverted;
        t
    }

    #[test]
    fn undiverted_train_gets_no_offset() {
        let layout = Layout::new();
        let r = resolve(&layout, &up_at(&layout, 160.0, false));
        assert_eq!(r.lateral, 0.0);
        assert!(r.writes.is_empty());
    }

    #[test]
    fn entry_band_applies_negative_offset_every_tick() {
        let layout = Layout::new();
        for &x in &[151.0, 163.0, 175.0] {
            let r = resolve(&layout, &up_at(&layout, x, true));
            assert_eq!(r.lateral, -5.0);
            assert!(r.writes.contains(&write(UP_ARC, Aspect::Clear)));
            assert!(r.writes.contains(&write(UP_MAIN, Aspect::Blocked)));
            assert!(r.writes.contains(&write(DOWN_MAIN, Aspect::Blocked)));
        }
        // Between the bands the offset stays where it is.
        let r = resolve(&layout, &up_at(&layout, 200.0, true));
        assert_eq!(r.lateral, 0.0);
    }

    #[test]
    fn exit_band_hands_priority_to_inbound() {
        let layout = Layout::new();
        let r = resolve(&layout, &up_at(&layout, 295.0, true));
        assert_eq!(r.lateral, 5.0);
        assert!(r.writes.contains(&write(DOWN_MAIN, Aspect::Clear)));
        assert!(r.writes.contains(&write(DOWN_ARC, Aspect::Blocked)));
    }

    #[test]
    fn down_train_is_symmetric_with_opposite_signs() {
        let layout = Layout::new();
        let mut down = Train::new(&layout, TrainRole::Down);
        down.diverted = true;
        down.position.x = 300.0;
        let r = resolve(&layout, &down);
        assert_eq!(r.lateral, 5.0);
        assert!(r.writes.contains(&write(DOWN_ARC, Aspect::Clear)));
        down.position.x = 170.0;
        let r = resolve(&layout, &down);
        assert_eq!(r.lateral, -5.0);
        assert!(r.writes.contains(&write(UP_MAIN, Aspect::Clear)));
    }
}
