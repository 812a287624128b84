//! Desktop simulator for the Detroit watchface.
//!
//! Drives a `detroit-core` [`Watchface`] the way the watch runtime would:
//! load once, then one tick per minute with a day-change flag. Frames are
//! drawn into the core's [`FrameBuffer`] and flushed to an
//! `embedded-graphics-simulator` display.
//!
//! # Modes
//!
//! | Invocation                                   | Behavior                                  |
//! |----------------------------------------------|-------------------------------------------|
//! | `detroit-simulator`                          | Render the current time to a PNG          |
//! | `detroit-simulator --start 2025-12-31T23:58 --minutes 3` | Fast-forward, PNG of the last frame |
//! | `detroit-simulator --window` (feature `sdl`) | Live SDL window; Q or Esc quits           |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDateTime, TimeDelta};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::info;

use detroit_core::{
    ClockSource, FrameBuffer, MinuteTicker, SimulatedClock, WallClockSample, Watchface,
    WatchfaceConfig, WatchfaceScreen,
};

#[derive(Parser, Debug)]
#[command(name = "detroit-simulator", about = "Render the Detroit watchface on the desktop")]
struct Args {
    /// TOML file overriding the default watchface config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated start time (YYYY-MM-DDTHH:MM); defaults to the system clock
    #[arg(long, value_parser = parse_start)]
    start: Option<NaiveDateTime>,

    /// Simulated minutes to advance after the initial frame
    #[arg(long, default_value_t = 0)]
    minutes: u32,

    /// PNG file receiving the last frame
    #[arg(long, default_value = "watchface.png")]
    output: PathBuf,

    /// Pixel scale factor for the output image or window
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Show a live SDL window instead of writing a PNG
    #[cfg(feature = "sdl")]
    #[arg(long)]
    window: bool,
}

fn parse_start(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").map_err(|e| e.to_string())
}

/// `detroit_core::Error` is `no_std`, so it is carried into anyhow by message.
fn core_error(error: detroit_core::Error) -> anyhow::Error {
    anyhow!("{error}")
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Host wall clock in the local time zone.
struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&mut self) -> detroit_core::Result<WallClockSample> {
        WallClockSample::from_datetime(&Local::now())
    }
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Everything the watch runtime would own: clock, tick source, watchface and
/// the offscreen framebuffer.
struct Simulation {
    clock: Box<dyn ClockSource>,
    ticker: MinuteTicker,
    face: Watchface<WatchfaceScreen>,
    framebuffer: FrameBuffer,
}

impl Simulation {
    fn new(clock: Box<dyn ClockSource>, config: &WatchfaceConfig) -> Result<Self> {
        let screen = WatchfaceScreen::new(config).map_err(core_error)?;
        let framebuffer = FrameBuffer::new(screen.layout().screen.size);

        Ok(Self {
            clock,
            ticker: MinuteTicker::new(),
            face: Watchface::new(screen),
            framebuffer,
        })
    }

    /// Sample the clock and load the watchface.
    fn start(&mut self) -> Result<()> {
        let sample = self.clock.now().map_err(core_error)?;
        self.ticker.observe(sample);
        self.face.load(sample).map_err(core_error)?;
        info!(
            "Loaded at {}-{:02}-{:02} {:02}:{:02}",
            sample.year(),
            sample.month(),
            sample.day(),
            sample.hour(),
            sample.minute()
        );
        Ok(())
    }

    /// Sample the clock and deliver a tick if the minute changed.
    ///
    /// Returns `true` when a tick was delivered.
    fn step(&mut self) -> Result<bool> {
        let sample = self.clock.now().map_err(core_error)?;
        let Some(event) = self.ticker.observe(sample) else {
            return Ok(false);
        };

        self.face.on_tick(event).map_err(core_error)?;
        let screen = self.face.sink();
        info!(
            "Tick: {} {}{}",
            screen.region(detroit_core::Region::Time).text(),
            screen.region(detroit_core::Region::Period).text(),
            if event.day_changed {
                " (new day)"
            } else {
                ""
            }
        );
        Ok(true)
    }

    /// Draw dirty regions offscreen, then flush the changed pixels.
    fn render<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Ok(()) = self.face.sink_mut().draw(&mut self.framebuffer);
        self.framebuffer.flush(display)
    }

    fn stop(&mut self) -> Result<()> {
        self.face.unload().map_err(core_error)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<WatchfaceConfig> {
    let Some(path) = path else {
        return Ok(WatchfaceConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: WatchfaceConfig =
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
    config.validate().map_err(core_error)?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

// ---------------------------------------------------------------------------
// Headless mode
// ---------------------------------------------------------------------------

/// Clock for a headless run.
///
/// A single frame of "now" reads the system clock; anything that advances
/// time steps a simulated clock from `start` (or from now).
fn headless_clock(start: Option<NaiveDateTime>, minutes: u32) -> Box<dyn ClockSource> {
    match (start, minutes) {
        (None, 0) => Box::new(SystemClock),
        (start, _) => {
            let start = start.unwrap_or_else(|| Local::now().naive_local());
            Box::new(SimulatedClock::new(start, TimeDelta::minutes(1)))
        }
    }
}

fn run_headless(args: &Args, config: &WatchfaceConfig) -> Result<()> {
    let mut sim = Simulation::new(headless_clock(args.start, args.minutes), config)?;
    let mut display = SimulatorDisplay::<Rgb565>::new(sim.framebuffer.size());

    sim.start()?;
    let Ok(()) = sim.render(&mut display);

    for _ in 0..args.minutes {
        if sim.step()? {
            let Ok(()) = sim.render(&mut display);
        }
    }
    sim.stop()?;

    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!("Wrote {}", args.output.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Window mode
// ---------------------------------------------------------------------------

#[cfg(feature = "sdl")]
fn run_window(args: &Args, config: &WatchfaceConfig) -> Result<()> {
    use std::time::{Duration, Instant};

    use embedded_graphics_simulator::{SimulatorEvent, Window, sdl2::Keycode};

    /// Target frame duration (~30 FPS).
    const FRAME_DURATION: Duration = Duration::from_millis(33);
    /// How often the system clock is polled for a new minute.
    const CLOCK_POLL_INTERVAL: Duration = Duration::from_secs(1);
    /// Real time per simulated minute when fast-forwarding from `--start`.
    const FAST_FORWARD_INTERVAL: Duration = Duration::from_millis(250);

    let (clock, poll_interval): (Box<dyn ClockSource>, Duration) = match args.start {
        Some(start) => (
            Box::new(SimulatedClock::new(start, TimeDelta::minutes(1))),
            FAST_FORWARD_INTERVAL,
        ),
        None => (Box::new(SystemClock), CLOCK_POLL_INTERVAL),
    };

    let mut sim = Simulation::new(clock, config)?;
    let mut display = SimulatorDisplay::<Rgb565>::new(sim.framebuffer.size());
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Detroit Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    sim.start()?;
    let Ok(()) = sim.render(&mut display);
    window.update(&display);

    let mut last_poll = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. }
                    if keycode == Keycode::Q || keycode == Keycode::Escape =>
                {
                    break 'running;
                }
                _ => {}
            }
        }

        if last_poll.elapsed() >= poll_interval {
            if sim.step()? {
                let Ok(()) = sim.render(&mut display);
            }
            last_poll = Instant::now();
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    sim.stop()?;
    info!("Simulator exiting");
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    info!(
        "Display: {}x{} (scale {}x)",
        config.screen.width, config.screen.height, args.scale
    );

    #[cfg(feature = "sdl")]
    {
        if args.window {
            return run_window(&args, &config);
        }
    }

    run_headless(&args, &config)
}
