use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyCode, KeyEventKind,
    },
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use skyshow::color::{self, Rgb};
use skyshow::config::{self, DEFAULT_SCALE, ShowConfig};
use skyshow::effects::{Effect, fireworks::FireworksEffect};
use skyshow::pattern::PatternType;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Terminal fireworks. Click anywhere to launch a rocket.
///
/// Keys: 1-4 pick burst/ring/willow/spiral, c/C cycle colour, a or space
/// toggles the auto show, h hides the status bar, q/Esc/Ctrl+C quits.
#[derive(Parser, Debug)]
#[command(name = "skyshow", version)]
struct Cli {
    /// Launch colour as hex RRGGBB
    #[arg(long, value_parser = config::parse_color, default_value = "FF5A6E")]
    color: Rgb,

    /// Explosion pattern: burst, ring, willow or spiral
    #[arg(long, default_value_t = PatternType::Burst)]
    pattern: PatternType,

    /// Background colour as hex RRGGBB (e.g. 1a1b26)
    #[arg(long, value_parser = config::parse_color, default_value = "0A0A0F")]
    bg_color: Rgb,

    /// Start the automatic show immediately
    #[arg(long)]
    auto: bool,

    /// World units per half-block pixel; larger values zoom out
    #[arg(long, value_parser = config::parse_scale, default_value_t = DEFAULT_SCALE)]
    scale: f32,

    /// Seed for a reproducible show
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv) of the --log-file output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write logs to this file. Without it logging is off, since stderr
    /// shares the terminal the show is drawn on
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> ShowConfig {
        ShowConfig {
            color: self.color,
            pattern: self.pattern,
            background: self.bg_color,
            auto: self.auto,
            scale: self.scale,
            seed: self.seed,
        }
    }
}

/// Raw mode and alternate screen for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on Drop undoes whatever got switched on
        let guard = TerminalGuard;
        execute!(
            out,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            EnableMouseCapture,
            EnableFocusChange
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut stdout()) {
            log::error!("failed to restore terminal: {err}");
        }
    }
}

fn restore_terminal<W: Write>(out: &mut W) -> std::io::Result<()> {
    let shown = execute!(out, Show, LeaveAlternateScreen, DisableMouseCapture, DisableFocusChange);
    // Leave raw mode even if the escape sequences could not be written
    let cooked = terminal::disable_raw_mode();
    shown.and(cooked)
}

fn run_effect<E: Effect>(config: &ShowConfig) -> skyshow::Result<()> {
    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    let _guard = TerminalGuard::enter(&mut stdout)?;
    let result = event_loop::<E, _>(&mut stdout, config);
    stdout.flush()?;

    result
}

fn event_loop<E: Effect, W: Write>(stdout: &mut W, config: &ShowConfig) -> skyshow::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut effect = E::new(cols as usize, rows as usize * 2, config);

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;
    const FIXED_DT: f32 = 1.0 / 60.0;

    loop {
        if event::poll(Duration::from_millis(1))? {
            let event = event::read()?;
            if let Event::Key(key_event) = &event {
                if key_event.kind == KeyEventKind::Press
                    && (key_event.code == KeyCode::Char('q')
                        || key_event.code == KeyCode::Esc
                        || (key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(event::KeyModifiers::CONTROL)))
                {
                    break;
                }
            }
            if let Event::Resize(..) = event {
                execute!(stdout, Clear(ClearType::All))?;
            }
            effect.handle_event(&event);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        // Never catch up more than a few ticks after a stall
        accumulator += frame_time;
        if accumulator > FIXED_DT * 3.0 {
            accumulator = FIXED_DT * 3.0;
        }

        while accumulator >= FIXED_DT {
            effect.update(FIXED_DT);
            accumulator -= FIXED_DT;
        }

        effect.render(stdout)?;
    }

    Ok(())
}

fn logger(cli: &Cli) -> anyhow::Result<env_logger::Builder> {
    let Some(path) = &cli.log_file else {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Off);
        return Ok(builder);
    };

    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    Ok(builder)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger(&cli)?.init();

    let config = cli.config();
    log::info!(
        "starting show: {} {} on {}, scale {}",
        config.pattern,
        color::to_hex(config.color),
        color::to_hex(config.background),
        config.scale
    );

    run_effect::<FireworksEffect>(&config).context("fireworks show failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Record};

    #[test]
    fn log_file_receives_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skyshow.log");
        let cli = Cli::parse_from(["skyshow", "-vv", "--log-file", path.to_str().unwrap()]);

        let logger = logger(&cli).unwrap().build();
        assert_eq!(logger.filter(), LevelFilter::Debug);

        logger.log(
            &Record::builder()
                .args(format_args!("launching burst rocket"))
                .level(Level::Debug)
                .target("skyshow::show")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("launching burst rocket"), "{written:?}");
    }

    #[test]
    fn logging_is_off_without_a_file() {
        let cli = Cli::parse_from(["skyshow", "-vvv"]);
        assert_eq!(logger(&cli).unwrap().build().filter(), LevelFilter::Off);
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("skyshow.log");
        let cli = Cli::parse_from(["skyshow", "--log-file", path.to_str().unwrap()]);
        assert!(logger(&cli).is_err());
    }

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?25h"));
        assert!(text.contains("\x1b[?1049l"));
    }
}
