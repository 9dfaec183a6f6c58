use chrono::{Datelike, NaiveDate};

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

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Platform name with its typical engagement-rate multiplier.
const PLATFORMS: [(&str, f64); 5] = [
    ("Instagram", 1.3),
    ("TikTok", 1.5),
    ("Facebook", 0.9),
    ("Twitter", 0.7),
    ("LinkedIn", 0.8),
];
const CONTENT_TYPES: [(&str, f64); 4] = [
    ("Reel", 1.4),
    ("Video", 1.2),
    ("Image", 1.0),
    ("Text", 0.6),
];
const CAMPAIGNS: [&str; 6] = [
    "Spring Launch",
    "Summer Sale",
    "Back to School",
    "Festive Offers",
    "Black Friday",
    "Brand Awareness",
];

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "social_media_engagement_enhanced.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record([
        "platform",
        "content_type",
        "year",
        "month",
        "post_hour",
        "campaign_name",
        "engagement",
        "engagement_rate",
        "reach",
        "ad_spend",
        "roi",
        "date",
    ])?;

    let n_rows = 1500;
    for _ in 0..n_rows {
        let (platform, platform_boost) = *rng.pick(&PLATFORMS);
        let (content_type, content_boost) = *rng.pick(&CONTENT_TYPES);
        let campaign = *rng.pick(&CAMPAIGNS);

        let year = if rng.next_f64() < 0.5 { 2023 } else { 2024 };
        let month = 1 + (rng.next_u64() % 12) as u32;
        let day = 1 + (rng.next_u64() % 28) as u32;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow::anyhow!("invalid date {year}-{month}-{day}"))?;
        let post_hour = (rng.next_u64() % 24) as u8;

        // Evenings and Q4 do a little better.
        let hour_boost = if (17..=22).contains(&post_hour) { 1.25 } else { 1.0 };
        let season_boost = if date.month() >= 10 { 1.15 } else { 1.0 };

        let reach = (rng.range(2_000.0, 50_000.0) * platform_boost).round();
        let engagement_rate =
            round2(rng.range(1.0, 4.0) * platform_boost * content_boost * hour_boost);
        let engagement = (reach * engagement_rate / 100.0 * season_boost).round();
        let ad_spend = round2(rng.range(50.0, 2_000.0));
        let roi = round2(rng.range(-0.3, 2.5));

        writer.write_record([
            platform.to_string(),
            content_type.to_string(),
            year.to_string(),
            month.to_string(),
            post_hour.to_string(),
            campaign.to_string(),
            engagement.to_string(),
            engagement_rate.to_string(),
            reach.to_string(),
            ad_spend.to_string(),
            roi.to_string(),
            date.format("%Y-%m-%d").to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} records to {output_path}");
    Ok(())
}
