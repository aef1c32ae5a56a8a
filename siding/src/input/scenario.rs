use crate::input::topology::TrainRole;
use regex::Regex;

#[derive(Debug)]
pub struct Scenario {
    pub actions: Vec<ScenarioAction>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScenarioAction {
    Start,
    Stop,
    Wait(u64),
    Divert(TrainRole),
}

#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "error in regular expression: {}", _0)]
    RegexError(String),
    #[fail(display = "error converting number")]
    NumberError,
    #[fail(display = "unrecognized scenario line: {}", _0)]
    Unrecognized(String),
}

/// Parses the scenario script format
///
/// * start
/// * wait 10
/// * divert up
/// * divert down
/// * stop
///
/// Blank lines and lines starting with `#` are ignored.
pub fn parse_scenario(input: &str) -> Result<Scenario, ParseError> {
    let mut actions = Vec::new();
    let start_re = Regex::new(r"^\s*start\s*$")
        .map_err(|e| ParseError::RegexError(format!("{:?}", e)))?;
    let stop_re = Regex::new(r"^\s*stop\s*$")
        .map_err(|e| ParseError::RegexError(format!("{:?}", e)))?;
    let wait_re = Regex::new(r"^\s*wait\s+(\d+)\s*$")
        .map_err(|e| ParseError::RegexError(format!("{:?}", e)))?;
    let divert_re = Regex::new(r"^\s*divert\s+(up|down)\s*$")
        .map_err(|e| ParseError::RegexError(format!("{:?}", e)))?;
    for line in input.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if start_re.is_match(line) {
            actions.push(ScenarioAction::Start);
            continue;
        }
        if stop_re.is_match(line) {
            actions.push(ScenarioAction::Stop);
            continue;
        }
        if let Some(groups) = wait_re.captures(line) {
            let n = groups[1].parse::<u64>().map_err(|_e| ParseError::NumberError)?;
            actions.push(ScenarioAction::Wait(n));
            continue;
        }
        if let Some(groups) = divert_re.captures(line) {
            let role = match &groups[1] {
                "up" => TrainRole::Up,
                _ => TrainRole::Down,
            };
            actions.push(ScenarioAction::Divert(role));
            continue;
        }
        return Err(ParseError::Unrecognized(line.to_string()));
    }

    Ok(Scenario { actions: actions })
}

#[test]
fn test_parse_scenario() {
    let s = parse_scenario("# comment\nstart\nwait 8\ndivert up\n\nwait 20\nstop\n").unwrap();
    assert_eq!(s.actions,
               vec![ScenarioAction::Start,
                    ScenarioAction::Wait(8),
                    ScenarioAction::Divert(TrainRole::Up),
                    ScenarioAction::Wait(20),
                    ScenarioAction::Stop]);
}

#[test]
fn test_parse_scenario_rejects() {
    assert!(parse_scenario("divert freight").is_err());
    assert!(parse_scenario("wait").is_err());
    assert!(parse_scenario("launch").is_err());
}
