use tintflash::{DarkFlash, FilterEngine};
use tracing_subscriber::EnvFilter;

// usage: cargo run --example darkflash -- <input> <output> [light_ratio]
fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.png".to_string());
    let output = args.next().unwrap_or_else(|| "darkflash.png".to_string());
    let light_ratio = args
        .next()
        .map(|ratio| ratio.parse().unwrap())
        .unwrap_or(tintflash::DEFAULT_LIGHT_RATIO);

    let img = tintflash::image::open(&input).unwrap();
    let filter = DarkFlash::new(light_ratio).unwrap();

    let flash = FilterEngine::new().apply(&img, &filter).unwrap();
    flash.save(&output).unwrap();

    println!("wrote {}", output);
}
