use tracing_subscriber::EnvFilter;

const HUE: f64 = 200.0;

// usage: cargo run --example dye -- <input> <output>
fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.png".to_string());
    let output = args.next().unwrap_or_else(|| "dye.png".to_string());

    // jpegs and other formats without alpha come out fully opaque before dyeing
    let img = tintflash::image::open(&input).unwrap();

    let dyed = tintflash::apply_dye(
        &img,
        HUE,
        tintflash::DEFAULT_SATURATION_FILL,
        tintflash::DEFAULT_BRIGHTNESS_FILL,
    )
    .unwrap();
    dyed.save(&output).unwrap();

    println!("wrote {}", output);
}
