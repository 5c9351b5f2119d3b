use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for boundary-cli
#[derive(Debug, Parser)]
#[command(
    name = "boundary-cli",
    version,
    about = "Dry-run boundary overlay operations against a headless map engine"
)]
pub struct CliArgs {
    /// Path to a JSON map configuration (same keys as the component inputs)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Do not load the startup district set
    #[arg(long = "no-districts", global = true)]
    pub no_districts: bool,

    /// Log manager decisions (same as RUST_LOG=boundary_core=debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the effective configuration as JSON
    Config,

    /// Load a boundary (optionally several times) and show the engine calls
    Load {
        /// Geocode, e.g. 610604, 610604;610607 or 10__
        geocode: String,

        #[command(flatten)]
        style: StyleArgs,

        /// Number of times to issue the same load
        #[arg(short = 'n', long = "repeat", default_value_t = 1)]
        repeat: u32,
    },

    /// Run a JSON script of operations and show the engine calls
    Replay {
        /// Script file: a JSON array of {"op": "ready" | "load" | "clear" | "districts" | "dispose", ...}
        script: PathBuf,

        /// Start without a map; the script must send {"op": "ready"} itself
        #[arg(long = "detached")]
        detached: bool,
    },
}

/// Boundary display options
#[derive(Debug, Args)]
pub struct StyleArgs {
    /// Fill color, e.g. '#ff0000'
    #[arg(long = "fill-color", conflicts_with = "no_fill")]
    pub fill_color: Option<String>,

    /// Draw the outline only
    #[arg(long = "no-fill")]
    pub no_fill: bool,

    #[arg(long = "line-color")]
    pub line_color: Option<String>,

    /// Merge sub-areas into a single object
    #[arg(long = "combine")]
    pub combine: bool,

    /// Geometry detail, 0.00005 (high) to 0.001 (low)
    #[arg(long = "simplify")]
    pub simplify: Option<f64>,

    /// Skip small disconnected fragments
    #[arg(long = "ignore-fragment")]
    pub ignore_fragment: bool,

    #[arg(long = "title")]
    pub title: Option<String>,

    #[arg(long = "label")]
    pub label: Option<String>,
}

impl StyleArgs {
    /// Only flags that were given end up set; the engine defaults the rest.
    pub fn to_options(&self) -> boundary_core::BoundaryOptions {
        let mut options = boundary_core::BoundaryOptions::new();
        if let Some(color) = &self.fill_color {
            options = options.with_fill_color(color);
        }
        if self.no_fill {
            options = options.without_fill();
        }
        if let Some(color) = &self.line_color {
            options = options.with_line_color(color);
        }
        if self.combine {
            options = options.with_combine(true);
        }
        if let Some(simplify) = self.simplify {
            options = options.with_simplify(simplify);
        }
        if self.ignore_fragment {
            options = options.with_ignore_fragment(true);
        }
        if let Some(title) = &self.title {
            options = options.with_title(title);
        }
        if let Some(label) = &self.label {
            options = options.with_label(label);
        }
        options
    }
}
