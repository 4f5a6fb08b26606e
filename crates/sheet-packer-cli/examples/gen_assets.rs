use image::{Rgba, RgbaImage};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

fn ensure_dir(p: &PathBuf) -> anyhow::Result<()> {
    fs::create_dir_all(p)?;
    Ok(())
}

fn save(img: &RgbaImage, path: &PathBuf) -> anyhow::Result<()> {
    img.save(path)?;
    Ok(())
}

fn solid(w: u32, h: u32, c: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(c))
}

fn random_color_opaque(rng: &mut impl Rng) -> [u8; 4] {
    [rng.r#gen(), rng.r#gen(), rng.r#gen(), 255]
}

fn draw_border(img: &mut RgbaImage, color: [u8; 4]) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    for x in 0..w {
        img.put_pixel(x, 0, Rgba(color));
        img.put_pixel(x, h - 1, Rgba(color));
    }
    for y in 0..h {
        img.put_pixel(0, y, Rgba(color));
        img.put_pixel(w - 1, y, Rgba(color));
    }
}

fn gen_basic(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    ensure_dir(out)?;
    for i in 0..60u32 {
        let w = rng.gen_range(16..=128);
        let h = rng.gen_range(16..=128);
        let mut img = solid(w, h, random_color_opaque(rng));
        draw_border(&mut img, [0, 0, 0, 255]);
        save(&img, &out.join(format!("basic_{:03}.png", i)))?;
    }
    fs::write(
        out.join("README.txt"),
        "Opaque rectangles with varied sizes.",
    )?;
    Ok(())
}

fn gen_thin(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    ensure_dir(out)?;
    for i in 0..40u32 {
        let horiz = rng.gen_bool(0.5);
        let (w, h) = if horiz {
            (rng.gen_range(64..=200), rng.gen_range(4..=12))
        } else {
            (rng.gen_range(4..=12), rng.gen_range(64..=200))
        };
        let mut img = solid(w, h, random_color_opaque(rng));
        draw_border(&mut img, [0, 0, 0, 255]);
        save(&img, &out.join(format!("thin_{:03}.png", i)))?;
    }
    fs::write(
        out.join("README.txt"),
        "Very thin horizontal/vertical bars to stress growth direction.",
    )?;
    Ok(())
}

fn gen_sprites(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    ensure_dir(out)?;
    for i in 0..40u32 {
        let w = rng.gen_range(32..=96);
        let h = rng.gen_range(32..=96);
        let mut img = solid(w, h, [0, 0, 0, 0]);
        let color = random_color_opaque(rng);
        for yy in h / 4..(3 * h / 4) {
            for xx in w / 4..(3 * w / 4) {
                img.put_pixel(xx, yy, Rgba(color));
            }
        }
        save(&img, &out.join(format!("sprite_{:03}.png", i)))?;
    }
    fs::write(
        out.join("README.txt"),
        "Opaque cores on transparent margins to exercise alpha output.",
    )?;
    Ok(())
}

fn gen_pow2(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    ensure_dir(out)?;
    let sizes = [16u32, 32, 64, 128];
    for i in 0..30u32 {
        let w = *sizes.choose(rng).unwrap_or(&64);
        let h = *sizes.choose(rng).unwrap_or(&64);
        let mut img = solid(w, h, random_color_opaque(rng));
        draw_border(&mut img, [0, 0, 0, 255]);
        save(&img, &out.join(format!("pow2_{:03}.png", i)))?;
    }
    fs::write(
        out.join("README.txt"),
        "Power-of-two opaque blocks (various sizes).",
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Usage: cargo run -p sheet-packer-cli --example gen_assets -- [out_root]
    // Default out_root: assets/generated
    let out_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/generated"));
    ensure_dir(&out_root)?;

    let mut rng = rand::rngs::StdRng::seed_from_u64(0xDEADBEEF);
    gen_basic(&out_root.join("basic"), &mut rng)?;
    gen_thin(&out_root.join("thin"), &mut rng)?;
    gen_sprites(&out_root.join("sprites"), &mut rng)?;
    gen_pow2(&out_root.join("pow2"), &mut rng)?;

    fs::write(
        out_root.join("README.txt"),
        "Generated test image sets: basic, thin, sprites, pow2.",
    )?;
    println!("Generated assets under {}", out_root.display());
    Ok(())
}
