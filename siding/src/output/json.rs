use failure::Error;
use super::history::{History, LogEvent, TickEvent, ControlEvent};
use crate::input::topology::Layout;
use crate::section::signals::Aspect;

use std::io;

pub fn javascript_history<W: io::Write>(layout: &Layout,
                                        history: &History,
                                        f: &mut W)
                                        -> Result<(), Error> {
    write!(f, "var data = ")?;
    json_history(layout, history, f)?;
    write!(f, ";")?;
    Ok(())
}

fn aspect_str(a: Aspect) -> &'static str {
    match a {
        Aspect::Clear => "clear",
        Aspect::Blocked => "blocked",
    }
}

pub fn json_history<W: io::Write>(layout: &Layout,
                                  history: &History,
                                  f: &mut W)
                                  -> Result<(), Error> {
    write!(f, "{{ \"layout\": {{\n")?;
    write!(f,
           "\"shared\": [{}, {}], \"handoff\": {}, \"approach_limit\": {}, \"extent\": {}",
           layout.shared.start,
           layout.shared.end,
           layout.handoff,
           layout.approach_limit,
           layout.extent)?;
    write!(f, "}},\n")?;

    write!(f, "\"events\":[")?;
    let mut first = true;
    for ev in &history.events {
        match *ev {
            LogEvent::Control(c) => {
                if first { first = false; } else { write!(f, ",\n")?; }
                let (name, arg) = match c {
                    ControlEvent::Start => ("start", None),
                    ControlEvent::Stop => ("stop", None),
                    ControlEvent::Divert(role) => ("divert", Some(role.name())),
                };
                match arg {
                    Some(r) => {
                        write!(f, "{{ \"event\": \"{}\", \"ref\": \"{}\" }}", name, r)?
                    }
                    None => write!(f, "{{ \"event\": \"{}\" }}", name)?,
                }
            }
            LogEvent::Tick(n, ref report) => {
                for tev in report {
                    if first { first = false; } else { write!(f, ",\n")?; }
                    match *tev {
                        TickEvent::Position(role, x, y) => {
                            write!(f,
                                   "{{ \"tick\": {}, \"event\": \"position\", \"ref\": \"{}\", \"x\": {}, \"y\": {} }}",
                                   n, role.name(), x, y)?
                        }
                        TickEvent::Signal(slot, aspect) => {
                            write!(f,
                                   "{{ \"tick\": {}, \"event\": \"signal\", \"slot\": {}, \"aspect\": \"{}\" }}",
                                   n, slot, aspect_str(aspect))?
                        }
                        TickEvent::Held(role) => {
                            write!(f,
                                   "{{ \"tick\": {}, \"event\": \"held\", \"ref\": \"{}\" }}",
                                   n, role.name())?
                        }
                    }
                }
            }
        }
    }
    write!(f, "]\n")?;

    write!(f, "}}\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::topology::TrainRole;
    use crate::output::history::TickReport;

    #[test]
    fn json_output_is_wellformed_enough() {
        let layout = Layout::new();
        let mut h = History::default();
        h.control(ControlEvent::Start);
        let mut report = TickReport::new();
        report.push(TickEvent::Position(TrainRole::Up, 67.0, 0.0));
        report.push(TickEvent::Signal(0, Aspect::Blocked));
        h.tick(0, report);
        let mut buf = Vec::new();
        json_history(&layout, &h, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("\"event\": \"start\""));
        assert!(s.contains("\"aspect\": \"blocked\""));
        assert_eq!(s.matches('{').count(), s.matches('}').count());
    }
}
