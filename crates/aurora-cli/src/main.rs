mod scan;
mod server;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use aurora_core::{
    LifeArea, classify, now_unix_millis, select_resurfacing, select_resurfacing_seeded, template,
    time_context,
};
use aurora_store::{Config, Store};

#[derive(Parser)]
#[command(name = "aurora", about = "Aurora file dashboard: tagging and resurfacing")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan directories into the file catalogue
    Scan {
        /// Directories to scan; defaults to the configured scan roots
        dirs: Vec<PathBuf>,
    },

    /// Suggest a life-area tag for each catalogued file
    Suggest {
        /// Show every suggestion, ignoring the configured threshold
        #[arg(long)]
        all: bool,
        /// Emit JSON rows instead of the text listing
        #[arg(long)]
        json: bool,
    },

    /// Pick up to three "remember this?" candidates
    Resurface {
        /// Seed for a reproducible random-delight pick
        #[arg(long)]
        seed: Option<u64>,
        /// Emit JSON candidates instead of the text listing
        #[arg(long)]
        json: bool,
    },

    /// List or manage life areas
    Areas {
        #[command(subcommand)]
        command: Option<AreasCommand>,
    },

    /// Record a chosen life-area tag for a file
    Tag {
        /// Catalogued file path
        path: String,
        /// Life-area id to tag it with
        area_id: String,
    },

    /// Show the time-of-day UI hint
    Context {
        /// Hour of day 0-23; defaults to the current UTC hour
        #[arg(long)]
        hour: Option<u8>,
    },

    /// Serve the dashboard JSON API
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:7420")]
        addr: String,
    },
}

#[derive(Subcommand)]
enum AreasCommand {
    /// Add a life area (template-backed ids pick up keyword matching)
    Add {
        id: String,
        name: String,
        /// Icon identifier shown on the dashboard
        #[arg(long, default_value = "dot")]
        icon: String,
    },
}

fn open_store() -> Result<Store> {
    aurora_store::open_default().context("failed to open store")
}

fn load_config() -> Result<Config> {
    Config::load(&aurora_store::data_dir()).context("failed to load config")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Scan { dirs } => cmd_scan(dirs),
        Commands::Suggest { all, json } => cmd_suggest(*all, *json),
        Commands::Resurface { seed, json } => cmd_resurface(*seed, *json),
        Commands::Areas { command } => match command {
            None => cmd_areas_list(),
            Some(AreasCommand::Add { id, name, icon }) => cmd_areas_add(id, name, icon),
        },
        Commands::Tag { path, area_id } => cmd_tag(path, area_id),
        Commands::Context { hour } => cmd_context(*hour),
        Commands::Serve { addr } => cmd_serve(addr).await,
    }
}

fn cmd_scan(dirs: &[PathBuf]) -> Result<()> {
    let store = open_store()?;
    let config = load_config()?;

    let roots = if dirs.is_empty() {
        config.scan_roots.clone()
    } else {
        dirs.to_vec()
    };
    if roots.is_empty() {
        anyhow::bail!("no directories given and no scan_roots configured");
    }

    let records = scan::scan_roots(&roots)?;
    let count = store.upsert_files(&records).context("failed to save catalogue")?;

    println!("scanned {count} files. catalogue now holds {}", store.file_count()?);
    Ok(())
}

fn cmd_suggest(all: bool, json: bool) -> Result<()> {
    let store = open_store()?;
    let config = load_config()?;

    let areas = store.life_areas()?;
    if areas.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("no life areas configured. try: aurora areas add work Work");
        }
        return Ok(());
    }

    let files = store.all_files()?;
    let total = files.len();
    let rows: Vec<server::SuggestionRow> = files
        .into_iter()
        .filter_map(|file| {
            let suggestion = classify(&file, &areas)?;
            (all || suggestion.confidence >= config.min_confidence)
                .then_some(server::SuggestionRow { file, suggestion })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in &rows {
        println!(
            "{}  →  {} ({:.2})",
            row.file.path, row.suggestion.life_area_id, row.suggestion.confidence
        );
    }
    println!("{} suggestions across {total} files", rows.len());
    Ok(())
}

fn cmd_resurface(seed: Option<u64>, json: bool) -> Result<()> {
    let store = open_store()?;
    let config = load_config()?;
    if !config.show_remember_this {
        if json {
            println!("[]");
        } else {
            println!("resurfacing is disabled in aurora.toml");
        }
        return Ok(());
    }

    let files = store.all_files()?;
    let now_ms = now_unix_millis();
    let candidates = match seed {
        Some(seed) => select_resurfacing_seeded(&files, now_ms, seed),
        None => {
            let mut rng = SmallRng::from_os_rng();
            select_resurfacing(&files, now_ms, &mut rng)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }
    if candidates.is_empty() {
        println!("(nothing to resurface)");
        return Ok(());
    }
    for c in &candidates {
        let days = aurora_core::activity::days_since(c.file.last_touched_ms(), now_ms);
        println!(
            "[{}] {}  (last touched {:.0}d ago)",
            c.rationale.as_str(),
            c.file.path,
            days
        );
    }
    Ok(())
}

fn cmd_areas_list() -> Result<()> {
    let store = open_store()?;
    let areas = store.life_areas()?;
    if areas.is_empty() {
        println!("(no life areas configured)");
        return Ok(());
    }
    for area in &areas {
        match template(&area.id).and_then(|t| t.purpose) {
            Some(purpose) => println!("{}  {} — {}", area.id, area.name, purpose),
            None => println!("{}  {} (custom, no keyword matching)", area.id, area.name),
        }
    }
    Ok(())
}

fn cmd_areas_add(id: &str, name: &str, icon: &str) -> Result<()> {
    let store = open_store()?;
    store
        .add_life_area(&LifeArea::new(id, name, icon))
        .context("failed to save life area")?;

    match template(id) {
        Some(t) => println!(
            "added {id}. template-backed{}",
            t.purpose.map(|p| format!(": {p}")).unwrap_or_default()
        ),
        None => println!("added {id}. no template with this id, so it won't attract suggestions"),
    }
    Ok(())
}

fn cmd_tag(path: &str, area_id: &str) -> Result<()> {
    let store = open_store()?;
    let areas = store.life_areas()?;
    if !areas.iter().any(|a| a.id == area_id) {
        anyhow::bail!("unknown life area '{area_id}' — add it first with: aurora areas add");
    }

    let files = store.all_files()?;
    let Some(file) = files.iter().find(|f| f.path == path) else {
        anyhow::bail!("'{path}' is not in the catalogue — run a scan first");
    };

    let now_ms = now_unix_millis();
    let suggestion = classify(file, &areas);
    store
        .set_tag(path, suggestion.as_ref(), area_id, now_ms)
        .context("failed to save tag")?;
    store.touch_life_area(area_id, now_ms)?;

    println!("tagged {path} as {area_id}");
    Ok(())
}

fn cmd_context(hour: Option<u8>) -> Result<()> {
    let hour = hour.unwrap_or_else(current_utc_hour);
    let ctx = time_context(hour);
    println!(
        "{:02}:00 — {} (complexity: {}, busy: {})",
        hour % 24,
        ctx.label,
        ctx.complexity.as_str(),
        ctx.is_busy_time
    );
    Ok(())
}

fn current_utc_hour() -> u8 {
    (now_unix_millis().div_euclid(3_600_000).rem_euclid(24)) as u8
}

async fn cmd_serve(addr: &str) -> Result<()> {
    let store = open_store()?;
    let config = load_config()?;

    let pidfile = acquire_pidfile();
    server::serve(store, config, addr).await?;
    if let Some(path) = pidfile {
        release_pidfile(&path);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Advisory pidfile for observability
// ---------------------------------------------------------------------------

fn pidfile_path() -> PathBuf {
    aurora_store::data_dir().join("aurora-serve.pid")
}

/// Check for an existing pidfile and log accordingly, then write our own.
fn acquire_pidfile() -> Option<PathBuf> {
    let path = pidfile_path();
    if let Ok(content) = std::fs::read_to_string(&path)
        && let Ok(pid) = content.trim().parse::<u32>()
    {
        if is_process_alive(pid) {
            tracing::warn!("another aurora serve (PID {pid}) is running — coexisting with busy_timeout");
        } else {
            tracing::info!("cleaned up stale pidfile (PID {pid} is dead)");
            let _ = std::fs::remove_file(&path);
        }
    }

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match std::fs::File::create(&path) {
        Ok(mut f) => {
            let _ = write!(f, "{}", std::process::id());
            Some(path)
        }
        Err(e) => {
            tracing::warn!("failed to write pidfile: {e}");
            None
        }
    }
}

fn release_pidfile(path: &std::path::Path) {
    let _ = std::fs::remove_file(path);
}

#[cfg(unix)]
fn is_process_alive(pid: u32) -> bool {
    // kill(pid, 0) checks existence without sending a signal
    unsafe { libc::kill(pid as libc::pid_t, 0) == 0 }
}

#[cfg(not(unix))]
fn is_process_alive(_pid: u32) -> bool {
    false // conservative: assume dead on non-unix
}
