use halftone_scatter::prelude::*;
use halftone_scatter_examples::{init_tracing, save_pixmap_png};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a random halftone background and write it to a PNG.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(42);

    // Dark glyphs on a plain paper color so the pattern is easy to inspect.
    let config = BackgroundConfig::default().with_glyph_color(Rgba::new(72, 72, 72, 64));
    let mut background = Background::try_new(config)?;

    let mut surface = Pixmap::new(1280, 720);
    surface.clear(Rgba::new(255, 250, 240, 255));
    background.draw(&mut surface, &mut rng);

    save_pixmap_png(&surface, "background-basic.png")
}
