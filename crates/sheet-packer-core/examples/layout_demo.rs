use rand::{Rng, SeedableRng};
use sheet_packer_core::config::PackerConfig;
use sheet_packer_core::pipeline::pack_layout;
use std::time::Instant;

fn run(n: usize, aligned: bool, seed: u64) {
    let cfg = PackerConfig {
        padding: 2,
        aligned,
        ..Default::default()
    };

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let inputs: Vec<(String, u32, u32)> = (0..n)
        .map(|i| {
            (
                format!("r{}", i),
                rng.gen_range(4..=96),
                rng.gen_range(4..=96),
            )
        })
        .collect();

    let start = Instant::now();
    let sheet = pack_layout(inputs, &cfg);
    let elapsed = start.elapsed();

    let stats = sheet.stats();
    println!(
        "aligned={} placed={} sheet={}x{} occ={:.2}% time={}ms",
        aligned,
        stats.num_placed,
        sheet.width,
        sheet.height,
        stats.occupancy * 100.0,
        elapsed.as_millis()
    );
}

fn main() {
    println!("N=1000");
    run(1000, false, 1337);
    run(1000, true, 1337);
    println!("\nN=5000");
    run(5000, false, 4242);
    run(5000, true, 4242);
}
