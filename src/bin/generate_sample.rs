//! Writes `data1.csv` … `data3.csv` of plausible layout-benchmark timings so
//! the viewer can be exercised without running the actual benchmark.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const L1_BYTES: f64 = 256_000.0;
const L2_BYTES: f64 = 1_024_000.0;

/// Synthetic time in ns for iterating `bytes` of data: roughly linear per
/// byte, with the per-byte cost stepping up past each cache boundary.
fn timing(bytes: f64, base_ns_per_byte: f64, cache_penalty: f64, rng: &mut SimpleRng) -> f64 {
    let mut ns_per_byte = base_ns_per_byte;
    if bytes > L1_BYTES {
        ns_per_byte *= 1.0 + cache_penalty;
    }
    if bytes > L2_BYTES {
        ns_per_byte *= 1.0 + 2.0 * cache_penalty;
    }
    let t = bytes * ns_per_byte;
    (t + rng.gauss(0.0, 0.02 * t)).max(0.0)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Byte counts: 40 kB steps spanning both cache boundaries.
    let x_axis: Vec<f64> = (1..=64).map(|i| i as f64 * 40_000.0).collect();

    // (base ns/byte, penalty past a cache boundary) per measurement row:
    // AoS construction / single access / multiple access, then the SoA trio.
    // AoS pays more for single-field traversal, SoA for construction.
    let profiles: [(f64, f64); 6] = [
        (0.42, 0.30),
        (0.25, 0.55),
        (0.30, 0.40),
        (0.48, 0.22),
        (0.18, 0.20),
        (0.28, 0.25),
    ];

    for file_no in 1..=3 {
        let path = format!("data{file_no}.csv");
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .expect("Failed to create output file");

        let x_row: Vec<String> = x_axis.iter().map(|v| format!("{v}")).collect();
        writer.write_record(&x_row).expect("Failed to write X axis");

        for &(base, penalty) in &profiles {
            let row: Vec<String> = x_axis
                .iter()
                .map(|&bytes| format!("{:.1}", timing(bytes, base, penalty, &mut rng)))
                .collect();
            writer.write_record(&row).expect("Failed to write row");
        }

        writer.flush().expect("Failed to flush output file");
        println!("Wrote {} sample points x 6 series to {path}", x_axis.len());
    }
}
