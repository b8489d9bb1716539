mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use display::Viewport;
use portfolio_arcade::error::Result;
use portfolio_arcade::{ArcadeLoop, Settings, TetrisLoop};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw/alternate-screen mode while playing, so logs
/// always go to a file.
fn init_logging(log_path: &Path) -> Result<()> {
    let file = File::create(log_path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Frame clock ───────────────────────────────────────────────────────────────

/// Whole milliseconds elapsed between successive `lap` calls, without drift.
struct FrameClock {
    start: Instant,
    last_ms: u64,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            last_ms: 0,
        }
    }

    fn lap(&mut self) -> u64 {
        let now_ms = self.start.elapsed().as_millis() as u64;
        let dt = now_ms - self.last_ms;
        self.last_ms = now_ms;
        dt
    }
}

fn viewport() -> std::io::Result<Viewport> {
    let (width, height) = terminal::size()?;
    Ok(Viewport { width, height })
}

fn sleep_rest_of_frame(frame_start: Instant) {
    let elapsed = frame_start.elapsed();
    if elapsed < FRAME {
        thread::sleep(FRAME - elapsed);
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

fn is_back(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Shooter,
    Tetris,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  ARCADE  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(4),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy.saturating_sub(2)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Pick a game:"))?;

    let options: &[(&str, &str, Color, &str)] = &[
        ("1", "Shooter", Color::Green, "Hit a target to win (set target_fall_speed)"),
        ("2", "Tetris ", Color::Magenta, "Clear lines until you top out"),
    ];

    for (i, (key, label, color, desc)) in options.iter().enumerate() {
        let row = cy + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(10), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<8}", label)))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(" — {}", desc)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            })) => match code {
                KeyCode::Char('1') => return Ok(MenuResult::Shooter),
                KeyCode::Char('2') => return Ok(MenuResult::Tetris),
                _ if is_back(code) || is_quit(code, modifiers) => return Ok(MenuResult::Quit),
                _ => {}
            },
            Ok(_) => {}
            // Input thread is gone; nothing more can be chosen
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loops ────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
fn shooter_loop<W: Write>(
    out: &mut W,
    game: &mut ArcadeLoop,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut clock = FrameClock::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if is_quit(code, modifiers) {
                return Ok(true);
            }
            match code {
                _ if is_back(code) => return Ok(false),
                KeyCode::Char(' ') => game.fire(),
                KeyCode::Char('r') | KeyCode::Char('R') if kind == KeyEventKind::Press => {
                    game.reset()
                }
                _ => {}
            }
        }

        game.tick(clock.lap());
        display::shooter::render(out, game.state(), viewport()?)?;
        sleep_rest_of_frame(frame_start);
    }
}

fn tetris_loop<W: Write>(
    out: &mut W,
    game: &mut TetrisLoop,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut clock = FrameClock::new();

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if is_quit(code, modifiers) {
                return Ok(true);
            }
            match code {
                _ if is_back(code) => return Ok(false),
                KeyCode::Left | KeyCode::Char('a') => game.move_left(),
                KeyCode::Right | KeyCode::Char('d') => game.move_right(),
                KeyCode::Up | KeyCode::Char('w') => game.rotate(),
                KeyCode::Down | KeyCode::Char('s') => game.soft_drop(),
                KeyCode::Char(' ') if kind == KeyEventKind::Press => game.hard_drop(),
                KeyCode::Char('r') | KeyCode::Char('R') if kind == KeyEventKind::Press => {
                    game.reset()
                }
                _ => {}
            }
        }

        game.tick(clock.lap());
        display::tetris::render(out, game.state(), viewport()?)?;
        sleep_rest_of_frame(frame_start);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path)?;
    init_logging(&settings.log_path(&settings_path))?;
    log::info!("starting with {:?}", settings);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                log::error!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &settings);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    Ok(result?)
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
) -> std::io::Result<()> {
    loop {
        let quit = match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Shooter => {
                let rules = settings.shooter.clone();
                let mut game = match settings.seed {
                    Some(seed) => ArcadeLoop::seeded(rules, seed),
                    None => ArcadeLoop::from_entropy(rules),
                };
                shooter_loop(out, &mut game, rx)?
            }
            MenuResult::Tetris => {
                let rules = settings.tetris.clone();
                let mut game = match settings.seed {
                    Some(seed) => TetrisLoop::seeded(rules, seed),
                    None => TetrisLoop::from_entropy(rules),
                };
                tetris_loop(out, &mut game, rx)?
            }
        };
        if quit {
            break;
        }
    }
    Ok(())
}
