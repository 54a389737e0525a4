//! Write a deterministic sample `StartUp.csv` for demos and manual testing.
//! The output deliberately contains the source file's dirt: lowercase
//! investment types, trailing commas on cities, blank amounts, and the odd
//! unparsable date, so the loader's normalization has something to do.

use std::path::Path;

use anyhow::Result;
use fundscope::load_csv;

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

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let startups = [
        "Acme Pay", "ZipCart", "MediLink", "FarmFresh", "EduSpark", "RideNow",
        "CloudKite", "FinBolt", "GreenGrid", "ShopStreet",
    ];
    let industries = [
        "FinTech", "E-Commerce", "HealthTech", "AgriTech", "EdTech", "Logistics",
    ];
    let cities = ["Bangalore", "Mumbai", "Pune", "Delhi", "Hyderabad,", "Chennai"];
    let investor_pools = [
        "Sequoia Capital, Accel",
        "\"Blume Ventures\"",
        "Tiger Global",
        "Matrix Partners, Kalaari Capital, SAIF",
        "Undisclosed",
    ];
    let investment_types = ["seed funding", "private equity", "debt funding", "series a"];
    let rounds = [
        "Seed", "Angel", "Series A", "Series B", "Series C", "Private Equity", "Other",
    ];

    let mut writer = csv::Writer::from_path("StartUp.csv")?;
    writer.write_record([
        "Date",
        "Startup Name",
        "Industry Vertical",
        "SubVertical",
        "City",
        "Investors",
        "Investment Type",
        "Amount in USD",
        "Funding_Category",
        "Funding_Round",
        "Power_Score_x",
        "Influence_Index",
        "Final_Rank",
    ])?;

    let mut rows = 0usize;
    for i in 0..400u32 {
        let year = 2018 + (rng.next_u64() % 6) as i32;
        let month = 1 + (rng.next_u64() % 12) as u32;
        let day = 1 + (rng.next_u64() % 28) as u32;
        // every 80th row gets a date the loader will drop
        let date = if i % 80 == 79 {
            "not-a-date".to_string()
        } else {
            format!("{day:02}/{month:02}/{year}")
        };

        // log-uniform between ~1e4 and ~1e9, with occasional blanks
        let amount = if i % 23 == 0 {
            String::new()
        } else {
            let exp = 4.0 + rng.next_f64() * 5.0;
            format!("{:.0}", 10f64.powf(exp))
        };
        let category = match amount.parse::<f64>().unwrap_or(0.0) {
            a if a >= 1e8 => "Very Large",
            a if a >= 1e7 => "Large",
            a if a >= 1e6 => "Medium",
            a if a > 0.0 => "Small",
            _ => "",
        };

        let power = format!("{:.4}", rng.next_f64());
        let influence = format!("{:.4}", rng.next_f64());
        let rank = (1 + rng.next_u64() % 500).to_string();

        writer.write_record([
            date.as_str(),
            rng.pick(&startups),
            rng.pick(&industries),
            if i % 7 == 0 { "" } else { "B2B Platform" },
            rng.pick(&cities),
            rng.pick(&investor_pools),
            rng.pick(&investment_types),
            amount.as_str(),
            category,
            rng.pick(&rounds),
            power.as_str(),
            influence.as_str(),
            rank.as_str(),
        ])?;
        rows += 1;
    }
    writer.flush()?;
    println!("Wrote {rows} rows to StartUp.csv");

    // sanity pass through the loader (RUST_LOG=info shows the drop count)
    let dataset = load_csv(Path::new("StartUp.csv"))?;
    println!(
        "Loader kept {} records ({} dropped)",
        dataset.len(),
        dataset.dropped_rows()
    );
    Ok(())
}
