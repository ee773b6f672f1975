//! Shared helpers for the example binaries.
use anyhow::Context;
use halftone_scatter::surface::Pixmap;

/// Install a stdout tracing subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Encode a pixmap as a PNG file at `path`.
pub fn save_pixmap_png(pixmap: &Pixmap, path: &str) -> anyhow::Result<()> {
    let image = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
        .context("pixmap buffer does not match its dimensions")?;
    image.save(path).with_context(|| format!("writing {path}"))?;
    println!("Wrote {path}");
    Ok(())
}
