//! T-Maze headless host
//!
//! Builds the reference maze and replays a command script frame by frame:
//!
//! ```text
//! t-maze [settings.json] [script.json]
//! ```
//!
//! A script is a JSON array of frames, each frame an array of commands applied
//! before that frame's movement step. Without a script a short built-in session
//! runs instead. `RUST_LOG=debug` shows every rejected move and rotation.

use std::path::Path;
use std::process::ExitCode;

use t_maze::sim::{Command, Handle, Key};
use t_maze::{Engine, Level, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("T-Maze (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args.first().map(String::as_str), args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings_path: Option<&str>, script_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match settings_path {
        Some(path) => Settings::from_json(&read(path)?)?,
        None => Settings::default(),
    };
    let script: Vec<Vec<Command>> = match script_path {
        Some(path) => serde_json::from_str(&read(path)?)?,
        None => demo_script(),
    };

    let mut engine = Engine::new(Level::reference(), settings)?;
    for frame in script {
        for command in frame {
            engine.enqueue(command);
        }
        let report = engine.tick();
        log::info!(
            "frame {:>4}: {:?} rotations={:?} pose={:?}",
            report.frame,
            report.movement,
            report.rotations,
            engine.pose()
        );
    }

    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    if engine.has_won() {
        println!("Congratulations! You've completed the maze!");
    }
    Ok(())
}

fn read(path: &str) -> std::io::Result<String> {
    std::fs::read_to_string(Path::new(path))
}

/// Walk into the first wall, tilt against it, then back off
fn demo_script() -> Vec<Vec<Command>> {
    let mut frames = vec![vec![Command::KeyDown { key: Key::Right }]];
    frames.extend(std::iter::repeat_n(Vec::new(), 11));
    frames.push(vec![
        Command::KeyUp { key: Key::Right },
        // Bottom handle pivot sits at the stem's bottom-center
        Command::PointerDown {
            handle: Handle::Bottom,
            x: 193.0,
            y: 250.0,
        },
        Command::PointerMove { x: 133.0, y: 310.0 },
        Command::PointerUp,
    ]);
    frames.push(vec![Command::KeyDown { key: Key::Left }]);
    frames.extend(std::iter::repeat_n(Vec::new(), 5));
    frames.push(vec![Command::KeyUp { key: Key::Left }]);
    frames
}
