use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;

const TRIPS_PER_CITY: usize = 2000;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n.max(1)
    }

    /// Pick an element, biased towards the front of the slice.
    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let skew = self.next_f64() * self.next_f64();
        let idx = ((skew * items.len() as f64) as usize).min(items.len() - 1);
        items[idx]
    }
}

struct CitySpec {
    file: &'static str,
    stations: &'static [&'static str],
    demographics: bool,
    seed: u64,
}

const CITIES: [CitySpec; 3] = [
    CitySpec {
        file: "chicago.csv",
        stations: &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Theater on the Lake",
            "Michigan Ave & Oak St",
        ],
        demographics: true,
        seed: 1,
    },
    CitySpec {
        file: "new_york_city.csv",
        stations: &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "8 Ave & W 31 St",
            "Lafayette St & E 8 St",
            "Broadway & E 22 St",
        ],
        demographics: true,
        seed: 2,
    },
    CitySpec {
        file: "washington.csv",
        stations: &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "Thomas Circle",
        ],
        demographics: false,
        seed: 3,
    },
];

const USER_TYPES: [&str; 2] = ["Subscriber", "Customer"];
const GENDERS: [&str; 2] = ["Male", "Female"];

fn random_start(rng: &mut SimpleRng) -> Option<NaiveDateTime> {
    // January through June 2017, weighted towards commute hours.
    let day = NaiveDate::from_ymd_opt(2017, 1, 1)? + Duration::days(rng.below(181) as i64);
    let hour = match rng.below(4) {
        0 => 8,
        1 => 17,
        _ => 6 + rng.below(16) as u32,
    };
    day.and_hms_opt(hour, rng.below(60) as u32, rng.below(60) as u32)
}

fn write_city(dir: &Path, city: &CitySpec) -> Result<usize> {
    let path = dir.join(city.file);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut rng = SimpleRng::new(city.seed);

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if city.demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header)?;

    for id in 0..TRIPS_PER_CITY {
        let start = random_start(&mut rng).context("generating start time")?;
        let seconds = 120 + rng.below(2400) as i64;
        let end = start + Duration::seconds(seconds);

        let mut row = vec![
            (1000 + id * 7).to_string(),
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string(),
            seconds.to_string(),
            rng.pick(city.stations).to_string(),
            rng.pick(city.stations).to_string(),
        ];
        // Roughly one row in fifty has no user type.
        let user_type = if rng.below(50) == 0 { "" } else { rng.pick(&USER_TYPES) };
        row.push(user_type.to_string());

        if city.demographics {
            if user_type == "Customer" && rng.below(2) == 0 {
                row.extend([String::new(), String::new()]);
            } else {
                row.push(rng.pick(&GENDERS).to_string());
                row.push(format!("{}.0", 1950 + rng.below(50)));
            }
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(TRIPS_PER_CITY)
}

/// Write synthetic chicago.csv, new_york_city.csv and washington.csv.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Output directory, created if missing.
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let Args { dir } = Args::parse();
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    for city in &CITIES {
        let rows = write_city(&dir, city)?;
        println!("Wrote {rows} trips to {}", dir.join(city.file).display());
    }
    Ok(())
}
