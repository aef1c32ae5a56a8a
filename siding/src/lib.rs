//! Siding -- single-track section simulation with diversion
//! interlocking.
//!
//! Two trains contend for a shared single-track mid-section; a
//! passing loop lets either one divert around it on operator request,
//! and four signal slots both reflect and enforce which path is
//! granted. A third train runs independently. The whole thing is a
//! fixed-step discrete simulation: the caller owns the clock and
//! drives one tick at a time.

#[macro_use]
extern crate failure_derive;

pub mod input;
pub mod section;
pub mod output;


use std::path::Path;

use crate::input::scenario::{Scenario, ScenarioAction};
use crate::input::topology::Layout;
use crate::output::history::History;
use crate::section::engine::Engine;

pub type AppResult<T> = Result<T, failure::Error>;

/// Runs a scenario script against a fresh section and returns the
/// committed history. `wait` actions issued while stopped burn their
/// ticks without firing, as the real timer would.
pub fn evaluate_scenario(layout: Layout, scenario: &Scenario) -> History {
    let mut engine = Engine::new(layout);
    for action in &scenario.actions {
        match *action {
            ScenarioAction::Start => engine.start(),
            ScenarioAction::Stop => engine.stop(),
            ScenarioAction::Wait(n) => {
                for _ in 0..n {
                    engine.advance();
                }
            }
            ScenarioAction::Divert(role) => engine.request_diversion(role),
        }
    }
    engine.into_history()
}

pub fn read_file(f: &Path) -> AppResult<String> {
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    let file = File::open(f)?;
    let mut file = BufReader::new(&file);
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn get_scenario(f: &Path) -> AppResult<Scenario> {
    let contents = read_file(f)?;
    let s = input::scenario::parse_scenario(&contents)?;
    Ok(s)
}
