//! src/cli.rs
//!
//! Command-line arguments and their mapping onto `RenderConfig`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::graph::{Format, RenderConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `N` / `A` / `V` tagged lines
    Topology,
    /// `VERTICES` / `ARISTAS` sections
    Weighted,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Topology => Format::Topology,
            FormatArg::Weighted => Format::Weighted,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "topoview")]
#[command(version)]
#[command(about = "Live terminal view of a directed graph file", long_about = None)]
pub struct Args {
    /// Graph file to watch (defaults to txt/topologia.txt or txt/matrixGrafoL.txt)
    pub path: Option<PathBuf>,

    /// Input format
    #[arg(long, short = 'f', value_enum, default_value = "topology")]
    pub format: FormatArg,

    /// Seconds between unconditional reloads
    #[arg(long, default_value = "1.0")]
    pub refresh: f64,

    /// Frames per second
    #[arg(long, default_value = "30")]
    pub fps: u32,

    /// Width of the virtual canvas the layout uses
    #[arg(long, default_value = "1000")]
    pub width: f64,

    /// Height of the virtual canvas the layout uses
    #[arg(long, default_value = "700")]
    pub height: f64,

    /// Write logs here (filter with RUST_LOG); logging is off otherwise
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn format(&self) -> Format {
        self.format.into()
    }

    pub fn path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format().default_path()))
    }

    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            width: self.width.max(1.0),
            height: self.height.max(1.0),
            refresh_interval: Duration::try_from_secs_f64(self.refresh.max(0.0))
                .unwrap_or(defaults.refresh_interval),
            fps: self.fps.max(1),
            ..defaults
        }
    }
}
