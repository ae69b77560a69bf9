use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MealError, Result};

/// random.org decimal-fraction endpoint: one fraction, two decimals, plain text.
const RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Supplies a uniform random fraction in [0, 1).
pub trait RandomSource {
    fn get_random(&mut self) -> Result<f64>;
}

/// Random source backed by random.org's HTTP API.
pub struct RandomOrgClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl RandomOrgClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MealError::RandomRequest(e.to_string()))?;

        Ok(Self {
            http,
            url: RANDOM_ORG_URL.to_string(),
        })
    }
}

impl RandomSource for RandomOrgClient {
    fn get_random(&mut self) -> Result<f64> {
        let response = self.http.get(&self.url).send().map_err(|e| {
            if e.is_timeout() {
                MealError::RandomTimeout
            } else {
                MealError::RandomRequest(e.to_string())
            }
        })?;

        let body = response
            .text()
            .map_err(|e| MealError::RandomRequest(e.to_string()))?;

        parse_fraction(&body)
    }
}

/// Parse a plain-text response body as a decimal fraction.
fn parse_fraction(body: &str) -> Result<f64> {
    let trimmed = body.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| MealError::RandomParse(trimmed.to_string()))
}

/// Offline random source using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn get_random(&mut self) -> Result<f64> {
        Ok(rand::thread_rng().r#gen::<f64>())
    }
}

/// Reproducible random source seeded from a fixed value.
#[derive(Debug)]
pub struct SeededRngSource {
    rng: StdRng,
}

impl SeededRngSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRngSource {
    fn get_random(&mut self) -> Result<f64> {
        Ok(self.rng.r#gen::<f64>())
    }
}
