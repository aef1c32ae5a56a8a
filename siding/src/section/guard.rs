//! Mutual-exclusion guard for the shared single-track mid-section.
//!
//! Applies only while neither contending train has a diversion
//! requested. The outbound train is held at the junction protecting
//! signal until the inbound train has cleared the hand-off threshold;
//! holding the clearing train as well could never unfreeze, so the
//! hold applies to the train requesting entry. Once the hand-off is
//! crossed, movement resumes with no operator action.

use smallvec::SmallVec;
use log::debug;

use crate::input::topology::{Layout, Pos};
use crate::section::signals::{Aspect, SignalWrite, UP_MAIN, DOWN_MAIN};
use crate::section::train::Train;

#[derive(Debug)]
pub struct Verdict {
    /// True if the outbound train's tentative advance is discarded.
    pub hold_up: bool,
    pub writes: SmallVec<[SignalWrite; 2]>,
}

pub fn check(layout: &Layout,
             up: &Train,
             down: &Train,
             tentative_up_x: Pos,
             tentative_down_x: Pos)
             -> Verdict {
    if up.diverted || down.diverted {
        // A requested diversion takes the conflict elsewhere; the
        // diversion controller owns the signals now.
        return Verdict { hold_up: false, writes: SmallVec::new() };
    }

    let mut writes = SmallVec::new();
    if tentative_down_x >= layout.handoff && tentative_up_x >= layout.approach_limit {
        // Shared section not yet handed off: close both entries and
        // hold the outbound train where it is.
        writes.push(SignalWrite { slot: UP_MAIN, aspect: Aspect::Blocked });
        writes.push(SignalWrite { slot: DOWN_MAIN, aspect: Aspect::Blocked });
        debug!("holding up train at x={} (down at x={})",
               up.position.x, tentative_down_x);
        Verdict { hold_up: true, writes: writes }
    } else {
        // Condition lapsed (or never held): the entries open again.
        writes.push(SignalWrite { slot: UP_MAIN, aspect: Aspect::Clear });
        writes.push(SignalWrite { slot: DOWN_MAIN, aspect: Aspect::Clear });
        Verdict { hold_up: false, writes: writes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::topology::TrainRole;

    #[test]
    fn holds_undiverted_up_train_at_approach() {
        let layout = Layout::new();
        let mut up = Train::new(&layout, TrainRole::Up);
        up.position.x = 151.0;
        let down = Train::new(&layout, TrainRole::Down);
        let v = check(&layout, &up, &down, 163.0, 435.0);
        assert!(v.hold_up);
        assert!(v.writes.contains(&SignalWrite { slot: UP_MAIN, aspect: Aspect::Blocked }));
        assert!(v.writes.contains(&SignalWrite { slot: DOWN_MAIN, aspect: Aspect::Blocked }));
    }

    #[test]
    fn releases_after_handoff() {
        let layout = Layout::new();
        let up = Train::new(&layout, TrainRole::Up);
        let down = Train::new(&layout, TrainRole::Down);
        let v = check(&layout, &up, &down, 163.0, 325.0);
        assert!(!v.hold_up);
        assert!(v.writes.contains(&SignalWrite { slot: UP_MAIN, aspect: Aspect::Clear }));
    }

    #[test]
    fn defers_entirely_when_a_diversion_is_requested() {
        let layout = Layout::new();
        let mut up = Train::new(&layout, TrainRole::Up);
        up.diverted = true;
        let down = Train::new(&layout, TrainRole::Down);
        let v = check(&layout, &up, &down, 163.0, 435.0);
        assert!(!v.hold_up);
        assert!(v.writes.is_empty());
    }
}
