// File: crates/geom-demo/src/main.rs
// Summary: Demo loads item sizes from CSV, fits each into a viewport and prints the placed geometry.

use anyhow::{Context, Result};
use geom_core::types::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use geom_core::{fit_rect, relative_rect, scaled_to_largest_side, Rect, ResizeOptions, Size};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

fn init_log() {
    let mut filter = EnvFilter::default();
    if cfg!(debug_assertions) {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }
    if let Ok(env) = std::env::var("RUST_LOG") {
        if let Ok(directive) = env.parse() {
            filter = filter.add_directive(directive);
        }
    }
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    init_log();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(raw) = args.first() else {
        anyhow::bail!("usage: geom-demo <items.csv> [viewport_width viewport_height]");
    };
    let viewport = parse_viewport(&args[1..])?;
    let resize = resize_options_from_env()?;

    let path = Path::new(raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    let items = load_sizes_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    tracing::info!(count = items.len(), ?viewport, "loaded items");
    if items.is_empty() {
        anyhow::bail!("no item sizes loaded; check the width/height headers.");
    }

    for (i, item) in items.iter().enumerate() {
        let fit = fit_rect(&viewport, item);
        let rel = relative_rect(&fit.rect, &viewport);
        println!(
            "#{i}: {}x{} -> x={:.2} y={:.2} w={:.2} h={:.2} scale={:.4} (rel w={:.3} h={:.3})",
            item.width,
            item.height,
            fit.rect.x,
            fit.rect.y,
            fit.rect.width,
            fit.rect.height,
            fit.scale_factor,
            rel.width,
            rel.height,
        );
        if let Some(opts) = &resize {
            let size = Size::new(item.width as u32, item.height as u32);
            match scaled_to_largest_side(size, opts) {
                Ok(out) => println!("    share copy: {}x{}", out.width, out.height),
                Err(e) => tracing::warn!(%e, "skipping share resize"),
            }
        }
    }
    Ok(())
}

/// Viewport from `[width height]` args, falling back to the default surface size.
fn parse_viewport(args: &[String]) -> Result<Rect> {
    match args {
        [] => Ok(Rect::from_size(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)),
        [w, h] => {
            let w: f64 = w.parse().with_context(|| format!("bad viewport width '{w}'"))?;
            let h: f64 = h.parse().with_context(|| format!("bad viewport height '{h}'"))?;
            if w <= 0.0 || h <= 0.0 {
                anyhow::bail!("viewport must be positive, got {w}x{h}");
            }
            Ok(Rect::from_size(w, h))
        }
        _ => anyhow::bail!("expected viewport as two numbers: <width> <height>"),
    }
}

/// `GEOM_LARGEST_SIDE` enables the share-resize column.
fn resize_options_from_env() -> Result<Option<ResizeOptions>> {
    match std::env::var("GEOM_LARGEST_SIDE") {
        Ok(v) => {
            let largest_side = v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("GEOM_LARGEST_SIDE is not a number: '{v}'"))?;
            Ok(Some(ResizeOptions { largest_side }))
        }
        Err(_) => Ok(None),
    }
}

/// Load `width,height` rows into item rects. Rows that fail to parse are skipped.
fn load_sizes_csv(path: &Path) -> Result<Vec<Rect>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let (Some(i_w), Some(i_h)) = (idx(&["width", "w"]), idx(&["height", "h"])) else {
        anyhow::bail!("missing width/height columns in {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(i_w), parse(i_h)) {
            (Some(w), Some(h)) => out.push(Rect::from_size(w, h)),
            _ => tracing::debug!(row, "skipping unparsable row"),
        }
    }
    Ok(out)
}
