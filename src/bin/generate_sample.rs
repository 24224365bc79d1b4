//! Generate a small deterministic demo dataset for the viewer.
//!
//! Writes `sample_data.csv`: four numeric features clustered per class, a
//! `class` column exercising both canonical and hue-partitioned labels, and
//! a few blank cells to demo the tolerant blank policy.

use anyhow::Result;

/// Minimal deterministic PRNG (xoshiro256**), seeded with splitmix64.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_add(0x9e3779b97f4a7c15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
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

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Box-Muller transform.
    fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        mu + sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(0x7ab_71e5);

    let mut writer = csv::Writer::from_path("sample_data.csv")?;
    writer.write_record([
        "sepal_length",
        "sepal_width",
        "petal_length",
        "petal_width",
        "class",
    ])?;

    let classes: [(&str, [f64; 4]); 3] = [
        ("benign", [5.0, 3.4, 1.5, 0.2]),
        ("malignant", [6.5, 3.0, 5.5, 2.0]),
        ("ambiguous", [5.9, 2.8, 4.3, 1.3]),
    ];

    for (label, centers) in classes {
        for i in 0..50 {
            let mut record: Vec<String> = centers
                .iter()
                .map(|&mu| format!("{:.2}", rng.gauss(mu, 0.35).max(0.0)))
                .collect();
            // A sprinkle of blanks for the tolerant blank policy.
            if i % 17 == 0 {
                record[2] = String::new();
            }
            record.push(label.to_string());
            writer.write_record(&record)?;
        }
    }
    writer.flush()?;

    println!("Wrote sample_data.csv (150 rows)");
    Ok(())
}
