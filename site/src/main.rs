//! # guard-site
//!
//! Static site generator for the Guard documentation homepage.
//!
//! Renders the homepage to `<out>/index.html` and copies the static asset
//! directory (Docusaurus-style `static/`) verbatim into the site root.
//!
//! ```bash
//! guard-site --out dist --static-dir static
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use guard_homepage::render_homepage;

#[derive(Parser, Debug)]
#[command(name = "guard-site")]
#[command(about = "Build the static Guard documentation site")]
#[command(version)]
struct Args {
    /// Output directory for the generated site
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Directory of static assets copied verbatim into the site root
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Building Guard docs site v{}", env!("CARGO_PKG_VERSION"));

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let html = render_homepage();
    let index = args.out.join("index.html");
    fs::write(&index, &html).with_context(|| format!("writing {}", index.display()))?;
    info!("Wrote {} ({} bytes)", index.display(), html.len());

    if args.static_dir.is_dir() {
        let copied = copy_dir(&args.static_dir, &args.out)?;
        info!(
            "Copied {} static assets from {}",
            copied,
            args.static_dir.display()
        );
    } else {
        // Missing assets are the asset pipeline's problem, not a build failure
        warn!(
            "Static asset directory {} not found, images will be missing",
            args.static_dir.display()
        );
    }

    Ok(())
}

/// Recursively copy `src` into `dst`, returning the number of files copied.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());
        if path.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
            copied += copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target)
                .with_context(|| format!("copying {}", path.display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}
