use siding::*;
use siding::input::scenario::ScenarioAction;
use siding::input::topology::Layout;
use siding::section::engine::Engine;

use std::path::PathBuf;
use structopt::StructOpt;

/// Siding -- single-track section simulation
#[derive(StructOpt, Debug)]
#[structopt(name = "siding")]
struct Opt {
    /// Verbose mode (-v, -vv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Scenario script file
    #[structopt(parse(from_os_str))]
    scenario: PathBuf,

    /// Output JSON history file
    #[structopt(short = "j", long = "json", parse(from_os_str))]
    json: Option<PathBuf>,

    /// Output JSON history as JavaScript
    #[structopt(short = "J", long = "javascript", parse(from_os_str))]
    javascript: Option<PathBuf>,

    /// Output per-tick train positions to file
    #[structopt(short = "p", long = "positions", parse(from_os_str))]
    positions: Option<PathBuf>,

    /// Drive ticks from the wall clock instead of evaluating at once
    #[structopt(short = "l", long = "live")]
    live: bool,

    /// Tick period in milliseconds (live mode)
    #[structopt(short = "t", long = "period-ms", default_value = "500")]
    period_ms: u64,
}

fn run_live(opt: &Opt, layout: Layout) -> AppResult<output::history::History> {
    use std::thread;
    use std::time::Duration;

    let scenario = get_scenario(&opt.scenario)?;
    let mut engine = Engine::new(layout);
    let period = Duration::from_millis(opt.period_ms);
    for action in &scenario.actions {
        match *action {
            ScenarioAction::Start => engine.start(),
            ScenarioAction::Stop => engine.stop(),
            ScenarioAction::Divert(role) => engine.request_diversion(role),
            ScenarioAction::Wait(n) => {
                for _ in 0..n {
                    // The loop is sequential, so a tick always runs to
                    // completion before the next period elapses.
                    thread::sleep(period);
                    if engine.advance() {
                        for &(role, x, y) in engine.positions().iter() {
                            println!("{} {} {}", role.name(), x, y);
                        }
                    }
                }
            }
        }
    }
    Ok(engine.into_history())
}

fn run(opt: &Opt) -> AppResult<()> {
    let layout = Layout::new();
    if opt.verbose >= 2 {
        println!("Layout: {:?}", layout);
    }

    let history = if opt.live {
        run_live(opt, layout)?
    } else {
        let scenario = get_scenario(&opt.scenario)?;
        if opt.verbose >= 1 {
            println!("Scenario:");
            for x in &scenario.actions {
                println!("  - {:?}", x);
            }
            println!("");
        }
        evaluate_scenario(layout, &scenario)
    };

    println!("# Section history:");
    for x in &history.events {
        println!("> {:?}", x);
    }

    if let Some(ref json) = opt.json {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(json)?;
        let mut writer = BufWriter::new(&file);
        output::json::json_history(&layout, &history, &mut writer)?;
    }

    if let Some(ref javascript) = opt.javascript {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(javascript)?;
        let mut writer = BufWriter::new(&file);
        output::json::javascript_history(&layout, &history, &mut writer)?;
    }

    if let Some(ref positions) = opt.positions {
        use std::fs::File;
        use std::io::BufWriter;
        use std::io::Write;
        let string = output::history::positions(&history)?;
        let file = File::create(positions)?;
        let mut writer = BufWriter::new(&file);
        write!(writer, "{}", string)?;
    }

    Ok(())
}

pub fn main() {
    let opt = Opt::from_args();
    let level = match opt.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    simple_logging::log_to_stderr(level);
    match run(&opt) {
        Ok(()) => {}
        Err(e) => {
            println!("Error:\n{}", e);
            std::process::exit(1);
        }
    }
}
