//! Headless demo runner
//!
//! Drives the simulation core with a scripted input sequence, standing in
//! for the windowing/frame-clock host. Useful for smoke-testing difficulty
//! pacing and for dumping a reproducible end state.

use space_battle::sim::{FrameInput, GamePhase, GameState, tick};

struct Args {
    seed: u64,
    frames: u64,
    dump_state: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 0xC0FFEE,
        frames: 3600,
        dump_state: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value.parse().map_err(|_| format!("bad frame count: {value}"))?;
            }
            "--dump-state" => args.dump_state = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

/// Scripted input: press start once, then weave left and right
fn script(frame: u64) -> FrameInput {
    FrameInput {
        move_left: (frame / 40) % 2 == 0,
        move_right: (frame / 40) % 2 == 1,
        confirm: frame == 0,
        frame_count: frame,
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: space-battle [--seed N] [--frames N] [--dump-state]");
            std::process::exit(2);
        }
    };

    let mut state = GameState::new(args.seed);
    for frame in 0..args.frames {
        tick(&mut state, &script(frame));
        if state.phase == GamePhase::GameOver {
            log::info!("run ended on frame {frame}");
            break;
        }
    }

    println!("seed {} score {}", args.seed, state.score);

    if args.dump_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize state: {err}");
                std::process::exit(1);
            }
        }
    }
}
