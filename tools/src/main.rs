//! airspace-runner: headless driver for the airspace engine.
//!
//! Usage:
//!   airspace-runner --seed 12345 --ticks 600 --dt 16 --data-dir ./data
//!   airspace-runner --seed 12345 --ipc-mode
//!
//! Batch mode flies the controlled agent with a seeded autopilot and prints
//! a summary. IPC mode reads one JSON request per line on stdin and answers
//! each with one JSON line on stdout.

use airspace_core::{
    command::SimCommand,
    config::SimConfig,
    engine::SimEngine,
    event::SimEvent,
    input::{InputState, Key},
    intent::ControlIntent,
    rng::{RngStream, SimRng},
    snapshot::SimSnapshot,
    types::Millis,
};
use anyhow::Result;
use glam::DVec2;
use std::env;
use std::io::{self, BufRead, Write};

/// Ticks between autopilot decisions.
const AUTOPILOT_INTERVAL: u64 = 120;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick {
        #[serde(default = "one")]
        count: u64,
        dt: Millis,
    },
    Command {
        command: SimCommand,
    },
    /// Raw input from a device layer, translated through `InputState`.
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    Quit,
}

fn one() -> u64 {
    1
}

#[derive(serde::Serialize)]
struct UiState {
    events: Vec<SimEvent>,
    state: SimSnapshot,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 600u64);
    let dt = parse_arg(&args, "--dt", 16.0f64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = SimConfig::load(data_dir)?;

    let run_id = format!("run-{seed}-{}", chrono::Utc::now().format("%Y%m%dT%H%M%S"));
    let mut engine = SimEngine::new(seed, config)?;

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        println!("Airspace runner");
        println!("  run_id:    {run_id}");
        println!("  seed:      {seed}");
        println!("  ticks:     {ticks}");
        println!("  dt:        {dt} ms");
        println!("  data_dir:  {data_dir}");
        println!();

        let stats = run_autopilot(&mut engine, seed, ticks, dt)?;
        print_summary(&engine, &run_id, &stats);
    }

    Ok(())
}

#[derive(Default)]
struct RunStats {
    intents: u64,
    clamped: u64,
}

/// Fly the controlled agent with seeded random intents.
fn run_autopilot(engine: &mut SimEngine, seed: u64, ticks: u64, dt: Millis) -> Result<RunStats> {
    let mut rng = SimRng::derived(seed, RngStream::Autopilot);
    let mut stats = RunStats::default();
    let (half_w, half_h) = {
        let f = engine.field();
        (f.width / 2.0, f.height / 2.0)
    };

    engine.apply(SimCommand::Start)?;
    for t in 0..ticks {
        if t % AUTOPILOT_INTERVAL == 0 {
            let intent = if rng.chance(0.2) {
                ControlIntent::Idle
            } else {
                match rng.next_u64_below(3) {
                    0 => ControlIntent::Thrust {
                        main: rng.range(-1.0, 1.0),
                        side: rng.range(-1.0, 1.0),
                    },
                    1 => ControlIntent::Direction {
                        x: rng.range(-1.0, 1.0),
                        y: rng.range(-1.0, 1.0),
                    },
                    _ => ControlIntent::Orbit {
                        x: rng.range(-half_w, half_w),
                        y: rng.range(-half_h, half_h),
                    },
                }
            };
            log::info!("tick={t} autopilot: {intent:?}");
            engine.apply(SimCommand::SetIntent { intent })?;
            stats.intents += 1;
        }

        let events = engine.tick(dt);
        stats.clamped += events
            .iter()
            .filter(|e| matches!(e, SimEvent::FrameClamped { .. }))
            .count() as u64;
    }
    Ok(stats)
}

fn run_ipc_loop(engine: &mut SimEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut input = InputState::default();

    writeln!(stdout, "{}", serde_json::to_string(&ui_state(engine, vec![engine.init_event()]))?)?;
    stdout.flush()?;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let events = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => Vec::new(),
            IpcCommand::Tick { count, dt } => {
                let mut events = Vec::new();
                for _ in 0..count {
                    events.extend(engine.tick(dt));
                }
                events
            }
            IpcCommand::Command { command } => match engine.apply(command) {
                Ok(events) => events,
                Err(e) => {
                    log::warn!("command rejected: {e}");
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            },
            IpcCommand::KeyDown { key } => {
                input.press(key);
                engine.set_intent(input.intent())
            }
            IpcCommand::KeyUp { key } => {
                input.release(key);
                engine.set_intent(input.intent())
            }
            IpcCommand::PointerDown { x, y } => {
                input.pointer_at(DVec2::new(x, y));
                engine.set_intent(input.intent())
            }
            IpcCommand::PointerMove { x, y } => {
                // Drags only steer while the pointer is held.
                if input.pointer.is_none() {
                    Vec::new()
                } else {
                    input.pointer_at(DVec2::new(x, y));
                    engine.set_intent(input.intent())
                }
            }
            IpcCommand::PointerUp => {
                input.pointer_up();
                engine.set_intent(input.intent())
            }
        };

        writeln!(stdout, "{}", serde_json::to_string(&ui_state(engine, events))?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn ui_state(engine: &SimEngine, events: Vec<SimEvent>) -> UiState {
    UiState {
        events,
        state: engine.snapshot(),
    }
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{err_json}")?;
    out.flush()?;
    Ok(())
}

fn print_summary(engine: &SimEngine, run_id: &str, stats: &RunStats) {
    let snapshot = engine.snapshot();

    println!("=== RUN SUMMARY ===");
    println!("  run_id:         {run_id}");
    println!("  final tick:     {}", snapshot.tick);
    println!("  elapsed:        {:.1} s", snapshot.elapsed_ms / 1000.0);
    println!("  intents issued: {}", stats.intents);
    println!("  frames clamped: {}", stats.clamped);
    println!("  last intent:    {}", snapshot.intent.kind());

    println!();
    println!("=== AGENTS ===");
    for a in &snapshot.agents {
        println!(
            "  {} | pos ({:>8.2}, {:>8.2}) | v {:.4} | heading {:>6.1}° | tilt {:+.5}",
            a.key,
            a.position.x,
            a.position.y,
            a.v,
            a.angle.to_degrees(),
            a.tilt
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
