//! Terminal runner (default binary).
//!
//! Wires the host side of the game: crossterm key presses in, a ~60 FPS frame loop that
//! feeds timestamps to the gravity driver, and a framebuffer renderer out.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameLoop, GameSnapshot, GameState, PieceRandomizer};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence. Without it every game is different.
    /// Example: `blockfall --seed 42`.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write debug logs to this file. The terminal itself is never logged to.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Restore the terminal before printing a panic, otherwise the message is lost on the
    // alternate screen.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stderr = io::stderr();
        let _ = crossterm::execute!(
            stderr,
            crossterm::style::ResetColor,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        default_hook(info);
    }));

    let randomizer = match args.seed {
        Some(seed) => PieceRandomizer::new(seed),
        None => PieceRandomizer::from_entropy(),
    };
    let mut game_state = GameState::with_randomizer(randomizer);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_ok() {
        println!("Final score: {}", game_state.score());
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState) -> Result<()> {
    let mut view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let start = Instant::now();
    let mut game_loop = GameLoop::new();
    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut next_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit requested at score {}", game_state.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        log::trace!("key action {}", action.as_str());
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        if Instant::now() < next_frame {
            continue;
        }

        // Frame: advance gravity, publish the score, redraw.
        next_frame = Instant::now() + frame_duration;
        let now_ms = start.elapsed().as_millis() as u64;
        game_loop.frame(now_ms, game_state);

        if let Some(score) = game_state.take_score_event() {
            log::debug!("score {score}");
            view.set_score(score);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}
