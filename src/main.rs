//! Vizora - Main binary
//!
//! Serves the CSV fixtures as JSON and shows them in a terminal dashboard.
//!
//! # Architecture
//!
//! The data server runs on a tokio runtime in the background; the dashboard
//! owns the terminal on the main thread and fetches over HTTP like any other
//! client:
//!
//! ```text
//! ┌────────────────┐    GET /api/*     ┌────────────────┐
//! │  Data Server   │ ◄──────────────── │   Dashboard    │
//! │  (tokio/axum)  │ ────────────────► │  (main thread) │
//! └────────────────┘    JSON arrays    └────────────────┘
//! ```
//!
//! # Modes
//!
//! - default: server and dashboard together
//! - `--headless`: server only, logs to stderr
//! - `--no-server`: dashboard only, against `--server-url`

mod config;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use client::{ClientConfig, DataClient};
use server::{ServerConfig, ServerState};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use tui::{ActiveView, Dashboard};

pub use config::DashboardConfig;

/// Vizora - CSV data server with a terminal dashboard
#[derive(Parser, Debug)]
#[command(name = "vizora")]
#[command(about = "Serves CSV datasets as JSON and visualizes them in the terminal")]
#[command(version)]
struct Args {
    /// Run the data server only, without the dashboard
    #[arg(long, env = "VIZORA_HEADLESS")]
    headless: bool,

    /// Run the dashboard only, against an already running server
    #[arg(long, env = "VIZORA_NO_SERVER", conflicts_with = "headless")]
    no_server: bool,

    /// Interface the server binds to
    #[arg(long, env = "VIZORA_HOST")]
    host: Option<String>,

    /// Port the server listens on
    #[arg(long, env = "VIZORA_PORT")]
    port: Option<u16>,

    /// Directory holding the CSV files
    #[arg(long, env = "VIZORA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Server the dashboard fetches from (defaults to the embedded server)
    #[arg(long, env = "VIZORA_SERVER_URL")]
    server_url: Option<String>,

    /// Log file used while the dashboard owns the terminal
    #[arg(long, env = "VIZORA_LOG_FILE", default_value = "vizora.log")]
    log_file: PathBuf,

    /// Dashboard frame rate
    #[arg(long, env = "VIZORA_FPS")]
    fps: Option<u64>,

    /// View to open first (1 Map, 2 Sales, 3 Population, 4 Arcs, 5 Stocks)
    #[arg(long, env = "VIZORA_VIEW")]
    view: Option<usize>,

    /// Fewer frames and slower arcs, for remote terminals
    #[arg(long)]
    low_power: bool,

    /// Marker radius of the least populous city, in degrees
    #[arg(long)]
    min_radius: Option<f64>,

    /// Marker radius of the most populous city, in degrees
    #[arg(long)]
    max_radius: Option<f64>,

    /// Lift at the arc midpoint, in degrees of latitude
    #[arg(long)]
    arc_height: Option<f64>,

    /// Visible arc trail as a fraction of the arc (0.0 - 1.0)
    #[arg(long)]
    arc_trail: Option<f64>,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig::from_env();
        if let Some(ref host) = self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ref dir) = self.data_dir {
            config.data_dir = dir.clone();
        }
        config
    }

    fn dashboard_config(&self) -> Result<DashboardConfig> {
        let mut config = if self.low_power {
            DashboardConfig::low_power()
        } else {
            DashboardConfig::default()
        };
        if let Some(fps) = self.fps {
            config = config.frame_rate(fps);
        }
        if let Some(n) = self.view {
            let view = ActiveView::from_number(n)
                .with_context(|| format!("--view must be between 1 and {}", ActiveView::ALL.len()))?;
            config = config.start_view(view);
        }
        if self.min_radius.is_some() || self.max_radius.is_some() {
            let min = self.min_radius.unwrap_or(config.min_radius);
            let max = self.max_radius.unwrap_or(config.max_radius);
            config = config.radius_range(min, max);
        }
        if let Some(height) = self.arc_height {
            config = config.arc_height(height);
        }
        if let Some(trail) = self.arc_trail {
            config = config.arc_trail(trail);
        }
        Ok(config)
    }
}

/// Install the global subscriber. With a path, logs go to that file so they
/// do not tear the dashboard.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into())
        .add_directive("hyper=warn".parse()?);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Log which datasets are present before serving them.
fn log_catalog(config: &ServerConfig) {
    for info in config.store().catalog() {
        match info.error {
            None => tracing::info!(
                dataset = %info.name,
                rows = info.row_count.unwrap_or(0),
                "dataset available"
            ),
            Some(ref error) => tracing::warn!(dataset = %info.name, %error, "dataset unavailable"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let dashboard = args.dashboard_config()?;
    let server_config = args.server_config();

    init_logging((!args.headless).then_some(args.log_file.as_path()))?;

    let runtime = Runtime::new().context("cannot start tokio runtime")?;

    if args.headless {
        run_headless(&runtime, server_config)
    } else {
        run_with_tui(runtime, server_config, dashboard, &args)
    }
}

/// Serve until interrupted.
fn run_headless(runtime: &Runtime, config: ServerConfig) -> Result<()> {
    log_catalog(&config);
    runtime.block_on(async {
        let listener = server::bind(&config)
            .await
            .with_context(|| format!("cannot bind {}", config.bind_addr()))?;
        server::serve(listener, ServerState::new(config.store()))
            .await
            .context("data server stopped")
    })
}

/// Run the dashboard, with the server in the background unless `--no-server`.
fn run_with_tui(
    runtime: Runtime,
    config: ServerConfig,
    dashboard: DashboardConfig,
    args: &Args,
) -> Result<()> {
    let client_config = if args.no_server {
        ClientConfig::new(args.server_url.clone().unwrap_or_else(|| ClientConfig::default().base_url))
    } else {
        log_catalog(&config);
        let listener = runtime
            .block_on(server::bind(&config))
            .with_context(|| format!("cannot bind {}", config.bind_addr()))?;
        let port = listener.local_addr()?.port();
        let state = ServerState::new(config.store());
        runtime.spawn(async move {
            if let Err(e) = server::serve(listener, state).await {
                tracing::error!(error = %e, "data server stopped");
            }
        });
        match args.server_url {
            Some(ref url) => ClientConfig::new(url.clone()),
            None => ClientConfig::new(format!("http://127.0.0.1:{port}")),
        }
    };
    tracing::info!(server = %client_config.base_url, "starting dashboard");

    let result = Dashboard::new(DataClient::new(client_config), runtime.handle().clone())
        .frame_rate(dashboard.frame_rate)
        .scale(dashboard.scale_config())
        .arcs(dashboard.arc_config())
        .start_on(dashboard.start_view)
        .run()
        .context("terminal dashboard failed");

    runtime.shutdown_background();
    result
}
