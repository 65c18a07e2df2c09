use afl::fuzz;
use chrono::{TimeDelta, Utc};
use dealer_checks::{
    decode_vin_basic, format_currency, format_date, format_number, format_percentage,
    format_short_date, slugify, truncate, validate_national_id, validate_plate, validate_vin,
    NationalIdType, RateLimitConfig, RateLimiter,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let check = validate_national_id(input);
    assert!(check
        .formatted
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    if check.is_valid {
        assert_ne!(check.id_type, NationalIdType::Unknown);
    }

    if validate_vin(input) {
        assert_eq!(input.chars().count(), 17);
    }
    let _ = decode_vin_basic(input);
    let _ = validate_plate(input);

    let max_length = rng.gen_range(0..64);
    assert!(truncate(input, max_length).chars().count() <= max_length);

    let slug = slugify(input);
    assert!(slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    assert!(!slug.starts_with('-') && !slug.ends_with('-') && !slug.contains("--"));

    let _ = format_date(input);
    let _ = format_short_date(input);
    let value = f64::from_bits(rng.gen());
    let _ = format_currency(value);
    let _ = format_number(value);
    let _ = format_percentage(value);

    let limiter = RateLimiter::in_memory(RateLimitConfig::default());
    let mut now = Utc::now();
    for _ in 0..rng.gen_range(0..12) {
        now += TimeDelta::seconds(rng.gen_range(0..600));
        let status = limiter.record_attempt_at(input, rng.gen_bool(0.2), now);
        assert!(status.remaining_attempts <= limiter.config().max_attempts);
        assert_eq!(status, limiter.check_rate_limit_at(input, now));
    }
}
