use halftone_scatter::prelude::*;
use halftone_scatter_examples::{init_tracing, save_pixmap_png};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the same background twice from one seed and verify the cached
/// pixels are identical before writing the result.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let seed = 20_240_817;
    let config = BackgroundConfig::default().with_glyph_color(Rgba::new(72, 72, 72, 64));

    let mut first = Background::try_new(config.clone())?;
    let mut second = Background::try_new(config)?;

    let mut rng_a = StdRng::seed_from_u64(seed);
    let mut rng_b = StdRng::seed_from_u64(seed);
    first.init(1024, 768, &mut rng_a);
    second.init(1024, 768, &mut rng_b);

    anyhow::ensure!(first.zones() == second.zones(), "zone layouts diverged");
    anyhow::ensure!(
        first.cache().unwrap().data() == second.cache().unwrap().data(),
        "cache contents diverged"
    );
    println!("Seed {seed} reproduces the same configuration and cache.");

    let mut surface = Pixmap::new(1024, 768);
    surface.clear(Rgba::WHITE);
    let mut rng = StdRng::seed_from_u64(seed);
    first.draw(&mut surface, &mut rng);

    save_pixmap_png(&surface, "background-seeded-determinism.png")
}
