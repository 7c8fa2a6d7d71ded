//! src/app.rs
//!
//! Live terminal view of a directed graph file.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Loads the graph file, then runs the UI main loop: every frame it asks the
//! [`GraphSource`] whether a reload is due, swaps in the new snapshot when one
//! arrives, and redraws the panel tree.
//!
//! # Running
//!
//! ```text
//! cargo run --release -- txt/topologia.txt
//! cargo run --release -- --format weighted txt/matrixGrafoL.txt
//! cargo run --release -- --log-file topoview.log      # RUST_LOG=debug for reload details
//! ```
//!
//! # Keyboard Controls
//!
//! - **q**, **Esc** or **Ctrl-C**: quit and restore the terminal.
//!
//! # Refresh Policy
//!
//! The file is re-read when more than `--refresh` seconds have passed since the
//! last reload, or as soon as its modification time changes (including the file
//! appearing or disappearing). A reload that fails leaves the previous graph on
//! screen and shows the error in the Status panel until the next good reload.
//!
//! At startup the file is read once before the terminal is taken over. For the
//! weighted format a missing file or an edge to an undeclared vertex aborts the
//! program there; a missing topology file simply starts empty.

use std::fs::File;
use std::path::Path;
use std::thread;
use std::time::Instant;

use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};

use crate::cli::Args;
use crate::graph::{GraphSource, GraphView, RenderConfig};
use crate::panels::{GraphPanel, InfoPanel, LegendPanel, ParagraphPanel, WarningsPanel};
use crate::ui::{Node, column, leaf, row};

pub fn run(args: Args) -> Result<()> {
    init_logging(args.log_file.as_deref())?;

    let config = args.render_config();
    let path = args.path();
    let format = args.format();
    log::info!("watching {} ({})", path.display(), format);

    let now = Instant::now();
    let mut source = GraphSource::new(&path, format, config.refresh_interval, now);
    let initial = source
        .load()
        .wrap_err_with(|| format!("failed to load {}", path.display()))?;
    let mut view = GraphView::new(initial, &config, now);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &config, &mut source, &mut view);
    ratatui::restore();

    log::info!("exiting after {} reloads", view.reloads);
    result
}

/// Route `log` output to `log_file`. Without one the terminal belongs to the UI,
/// so logging stays off unless `RUST_LOG` asks for it.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().wrap_err("logger already initialised")?;
    Ok(())
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    config: &RenderConfig,
    source: &mut GraphSource,
    view: &mut GraphView,
) -> Result<()> {
    let frame_time = config.frame_time();

    loop {
        let frame_start = Instant::now();

        if let Some(result) = source.poll(frame_start) {
            view.apply(result, config, frame_start);
        }

        let root = screen(config, source, view, frame_start);
        terminal.draw(|f| root.draw(f, f.area()))?;

        if quit_requested()? {
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

/// Drain pending terminal events; true once a quit key was pressed.
fn quit_requested() -> Result<bool> {
    let mut quit = false;
    while event::poll(std::time::Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            quit |= is_quit_key(key);
        }
    }
    Ok(quit)
}

fn is_quit_key(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Panel tree for one frame:
///
/// ```text
/// +-------------------- title ---------------------+
/// |                                    | status    |
/// |            graph canvas            | legend    |
/// |                                    | warnings  |
/// +-------------------- footer --------------------+
/// ```
fn screen<'a>(
    config: &'a RenderConfig,
    source: &'a GraphSource,
    view: &'a GraphView,
    now: Instant,
) -> Node<'a> {
    let format = source.format();
    let title = ParagraphPanel::new(
        format!("topoview: {} ({})", source.path().display(), format),
        "Title",
    )
    .style(Style::default().add_modifier(Modifier::BOLD))
    .centered();

    let mut footer_style = Style::default();
    if view.is_stale() {
        footer_style = footer_style.fg(Color::Red);
    }
    let footer = ParagraphPanel::new(
        format!(
            "Q/Esc=Quit  refresh every {:.1}s or on change  {} fps",
            config.refresh_interval.as_secs_f64(),
            config.fps
        ),
        "Controls",
    )
    .style(footer_style);

    let side = column(
        vec![
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Min(3),
        ],
        vec![
            leaf(InfoPanel::new(source, view, now)),
            leaf(LegendPanel::new(format, &config.palette)),
            leaf(WarningsPanel::new(&view.warnings)),
        ],
    );

    column(
        vec![
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ],
        vec![
            leaf(title),
            row(
                vec![Constraint::Percentage(72), Constraint::Percentage(28)],
                vec![leaf(GraphPanel::new(&view.snapshot, config)), side],
            ),
            leaf(footer),
        ],
    )
}
