//! The signal bank: four binary aspects gating entry into the
//! segments around the passing loop and the shared mid-section.

pub const NUM_SLOTS: usize = 4;

/// Slot guarding the outbound train's main-line continuation.
pub const UP_MAIN: usize = 0;
/// Slot guarding the outbound train's entry onto the diversion arc.
pub const UP_ARC: usize = 1;
/// Slot guarding the inbound train's main-line continuation.
pub const DOWN_MAIN: usize = 2;
/// Slot guarding the inbound train's entry onto the diversion arc.
pub const DOWN_ARC: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Aspect {
    Clear,
    Blocked,
}

/// A requested aspect change, produced by the diversion controller and
/// the mutual-exclusion guard. The bank itself is never written by the
/// operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignalWrite {
    pub slot: usize,
    pub aspect: Aspect,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignalBank {
    slots: [Aspect; NUM_SLOTS],
}

impl SignalBank {
    /// Main continuations start clear, arc entries start blocked.
    pub fn new() -> SignalBank {
        SignalBank {
            slots: [Aspect::Clear, Aspect::Blocked, Aspect::Clear, Aspect::Blocked],
        }
    }

    pub fn get(&self, slot: usize) -> Aspect {
        self.slots[slot]
    }

    /// Sets a slot, returning whether the aspect actually changed.
    /// Setting an already-set aspect is a no-op.
    pub fn set(&mut self, slot: usize, aspect: Aspect) -> bool {
        if self.slots[slot] == aspect {
            false
        } else {
            self.slots[slot] = aspect;
            true
        }
    }

    pub fn aspects(&self) -> &[Aspect; NUM_SLOTS] {
        &self.slots
    }
}

impl Default for SignalBank {
    fn default() -> SignalBank {
        SignalBank::new()
    }
}

#[test]
fn test_set_same_aspect_is_noop() {
    let mut bank = SignalBank::new();
    assert_eq!(bank.get(UP_MAIN), Aspect::Clear);
    assert!(!bank.set(UP_MAIN, Aspect::Clear));
    assert!(bank.set(UP_MAIN, Aspect::Blocked));
    assert!(!bank.set(UP_MAIN, Aspect::Blocked));
    assert_eq!(bank.get(UP_MAIN), Aspect::Blocked);
}

#[test]
#[should_panic]
fn test_out_of_range_slot() {
    let bank = SignalBank::new();
    bank.get(NUM_SLOTS);
}
