//! Write a deterministic sample of the unicorn-startups CSV, including the
//! decorated source headers and a few rows exercising the awkward cases
//! (unparseable entry dates, blank valuations, missing investors).

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let sectors = [
        "Fintech",
        "E-commerce",
        "Edtech",
        "SaaS",
        "Logistics",
        "Healthtech",
        "Gaming",
    ];
    let locations = [
        "Bangalore",
        "Mumbai",
        "Gurgaon",
        "Delhi",
        "Pune",
        "Chennai",
        "Hyderabad",
    ];
    let investors = [
        "Sequoia",
        "Tiger Global",
        "Accel",
        "SoftBank",
        "Elevation Capital",
        "Lightspeed",
        "Matrix Partners",
        "Falcon Edge",
    ];

    let output_path = "sample_unicorns.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "Company",
        "Sector",
        "Entry Valuation^^ ($B)",
        "Valuation ($B)",
        "Entry",
        "Location",
        "Select Investors",
    ])?;

    let n_rows = 100;
    for i in 0..n_rows {
        let entry_valuation = 1.0 + rng.next_f64() * 2.0;
        let current_valuation = entry_valuation * (1.0 + rng.next_f64() * 9.0);
        let year = 2011 + (rng.next_u64() % 13) as i64;
        let month = 1 + (rng.next_u64() % 12) as i64;
        let day = 1 + (rng.next_u64() % 28) as i64;

        // Sprinkle in the messy shapes the loader must tolerate.
        let entry_date = match i % 17 {
            0 => String::new(),
            5 => "TBD".to_string(),
            _ => format!("{day:02}/{month:02}/{year}"),
        };
        let entry_valuation_cell = if i % 13 == 0 {
            String::new()
        } else {
            format!("{entry_valuation:.2}")
        };
        let investors_cell = if i % 11 == 0 {
            String::new()
        } else {
            format!("{}, {}", rng.pick(&investors), rng.pick(&investors))
        };

        writer.write_record([
            format!("Startup{i:03}"),
            rng.pick(&sectors).to_string(),
            entry_valuation_cell,
            format!("{current_valuation:.2}"),
            entry_date,
            rng.pick(&locations).to_string(),
            investors_cell,
        ])?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} sample unicorns to {output_path}");
    Ok(())
}
