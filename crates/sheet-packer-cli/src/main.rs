use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use globset::{Glob, GlobSetBuilder};
use image::{DynamicImage, ImageReader};
use sheet_packer_core::{pack_images, save_canvas, to_json, InputImage, PackerConfig};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sheet-packer",
    about = "Pack images into a single auto-growing sprite sheet",
    version
)]
struct Cli {
    // Input/Output
    /// Input files or directories (directories are searched recursively)
    #[arg(required = true, help_heading = "Input/Output")]
    inputs: Vec<PathBuf>,
    /// Output image path; the extension picks the format (.png/.jpg/.jpeg/.bmp)
    #[arg(short, long, default_value = "sheet.png", help_heading = "Input/Output")]
    output: PathBuf,
    /// Write a JSON manifest of the placements to this path
    #[arg(long, help_heading = "Input/Output")]
    manifest: Option<PathBuf>,
    /// Encoder parameter: JPEG quality 0..=100 (default 95), PNG compression 0..=9 (default 3)
    #[arg(long, help_heading = "Input/Output")]
    param: Option<i32>,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Layout
    /// Padding reserved around every item, in pixels per side
    #[arg(short, long, default_value_t = 0, help_heading = "Layout")]
    padding: u32,
    /// Round sheet dimensions up to powers of two
    #[arg(short, long, default_value_t = false, help_heading = "Layout")]
    aligned: bool,
    /// Draw red outlines around occupied slots (debug)
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    outlines: bool,
    /// Compute the layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    dry_run: bool,

    // Logging/UX
    /// Disable the loading progress bar
    #[arg(long, default_value_t = false, help_heading = "Logging/UX")]
    no_progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli, !cli.no_progress && !cli.quiet)
}

fn run(cli: &Cli, show_progress: bool) -> anyhow::Result<()> {
    let paths = gather_paths(&cli.inputs, &cli.include, &cli.exclude)?;
    if paths.is_empty() {
        anyhow::bail!("no input images found");
    }

    let (inputs, with_alpha) = load_images_with_progress(&paths, show_progress)?;
    if inputs.is_empty() {
        anyhow::bail!("none of the inputs could be loaded");
    }
    info!(count = inputs.len(), with_alpha, "loaded input images");

    let cfg = PackerConfig {
        padding: cli.padding,
        aligned: cli.aligned,
        outlines: cli.outlines,
        ..Default::default()
    };

    let out = pack_images(inputs, &cfg);
    let stats = out.stats();
    info!(
        width = out.sheet.width,
        height = out.sheet.height,
        placed = stats.num_placed,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "packed sheet"
    );
    if !out.sheet.unfit.is_empty() {
        warn!(count = out.sheet.unfit.len(), "some items did not fit");
    }

    if cli.dry_run {
        return Ok(());
    }

    if let Some(dir) = cli.output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
    }
    save_canvas(&cli.output, &out.rgba, with_alpha, cli.param)
        .with_context(|| format!("write {}", cli.output.display()))?;
    info!(path = ?cli.output, "wrote sheet");

    if let Some(manifest_path) = &cli.manifest {
        let json_value = to_json(&out.sheet);
        let json = serde_json::to_string_pretty(&json_value)?;
        fs::write(manifest_path, json)
            .with_context(|| format!("write {}", manifest_path.display()))?;
        info!(path = ?manifest_path, "wrote manifest");
    }

    Ok(())
}

fn gather_paths(
    roots: &[PathBuf],
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    // Build glob matchers
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    let mut list: Vec<PathBuf> = Vec::new();
    for root in roots {
        if root.is_file() {
            if should_skip(root, inc_set.as_ref(), exc_set.as_ref()) {
                continue;
            }
            if is_image(root) {
                list.push(root.clone());
            } else {
                warn!(path = ?root, "not a recognized image file, skipping");
            }
        } else {
            for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
                let p = entry.path();
                if p.is_file() && !should_skip(p, inc_set.as_ref(), exc_set.as_ref()) && is_image(p)
                {
                    list.push(p.to_path_buf());
                }
            }
        }
    }
    // stable order regardless of filesystem walk order; drop duplicates
    // from overlapping roots
    list.sort();
    list.dedup();
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn is_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "tga" | "gif")
    )
}

/// Loads every path, skipping unreadable files with an error log. The second
/// return value reports whether any loaded image carries an alpha channel,
/// which controls RGBA vs RGB output for formats that support both.
fn load_images_with_progress(
    paths: &[PathBuf],
    progress: bool,
) -> anyhow::Result<(Vec<InputImage>, bool)> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )
            .unwrap(),
        );
        Some(b)
    } else {
        None
    };
    let mut list = Vec::with_capacity(paths.len());
    let mut with_alpha = false;
    for p in paths {
        let msg = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(b) = &bar {
            b.set_message(msg.to_string());
        }
        match load_image(p) {
            Ok(img) => {
                let color = img.color();
                with_alpha |= color.has_alpha();
                debug!(?p, w = img.width(), h = img.height(), ?color, "loaded");
                let key = p.to_string_lossy().replace('\\', "/");
                list.push(InputImage { key, image: img });
            }
            Err(e) => {
                error!(?p, error = %e, "skip image");
            }
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok((list, with_alpha))
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
