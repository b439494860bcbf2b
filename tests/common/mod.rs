//! In-memory upstream fakes shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use outerspace::models::*;
use outerspace::upstream::{AstronomyPictures, LaunchCatalog, MathFacts, UpstreamError, Upstreams};
use reqwest::StatusCode;

pub fn upstream_failure() -> UpstreamError {
    UpstreamError::Status {
        host: "fake.upstream".to_string(),
        status: StatusCode::BAD_GATEWAY,
    }
}

pub fn falcon_9() -> Rocket {
    Rocket {
        id: "123".to_string(),
        name: "Falcon 9".to_string(),
        description: "Orbital rocket".to_string(),
        height: Height { meters: 70.0 },
        mass: Mass { kg: 549_054 },
    }
}

pub fn falcon_heavy() -> Rocket {
    Rocket {
        id: "456".to_string(),
        name: "Falcon Heavy".to_string(),
        description: "Heavy lift".to_string(),
        height: Height { meters: 70.0 },
        mass: Mass { kg: 1_420_788 },
    }
}

pub fn mission_x() -> Launch {
    Launch {
        flight_number: 100,
        mission_name: "Mission X".to_string(),
        date_utc: "2023-01-01T12:00:00Z".to_string(),
        success: true,
        details: "Test mission".to_string(),
    }
}

pub fn meaning_of_life() -> MathFact {
    MathFact {
        text: "42 is the meaning of life".to_string(),
        number: 42,
        found: true,
        kind: "math".to_string(),
    }
}

pub fn picture() -> Apod {
    Apod {
        title: "Pillars of Creation".to_string(),
        date: "2024-05-01".to_string(),
        explanation: "Columns of gas and dust".to_string(),
        url: "https://apod.nasa.gov/apod/image/pillars.jpg".to_string(),
        media_type: "image".to_string(),
        service_version: "v1".to_string(),
    }
}

/// Launch catalog backed by a fixed rocket list. Counts `rocket` calls.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    pub launch: Launch,
    pub rockets: Vec<Rocket>,
    pub fail: bool,
    pub rocket_calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn healthy() -> Self {
        Self {
            launch: mission_x(),
            rockets: vec![falcon_9(), falcon_heavy()],
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rocket_calls(&self) -> usize {
        self.rocket_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LaunchCatalog for FakeCatalog {
    async fn latest_launch(&self) -> Result<Launch, UpstreamError> {
        if self.fail {
            return Err(upstream_failure());
        }
        Ok(self.launch.clone())
    }

    async fn rocket(&self, id: &str) -> Result<Rocket, UpstreamError> {
        self.rocket_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(upstream_failure());
        }
        self.rockets
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(UpstreamError::Status {
                host: "fake.upstream".to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }

    async fn rocket_summaries(&self) -> Result<Vec<RocketSummary>, UpstreamError> {
        if self.fail {
            return Err(upstream_failure());
        }
        Ok(summarize(self.rockets.clone()))
    }
}

/// Math trivia source; `None` fails every call.
#[derive(Clone, Default)]
pub struct FakeNumbers(pub Option<MathFact>);

#[async_trait]
impl MathFacts for FakeNumbers {
    async fn math_fact(&self) -> Result<MathFact, UpstreamError> {
        self.0.clone().ok_or_else(upstream_failure)
    }
}

/// Astronomy source that either answers or reports rate limiting.
#[derive(Clone, Default)]
pub struct FakePictures {
    pub rate_limited: bool,
}

#[async_trait]
impl AstronomyPictures for FakePictures {
    async fn picture_of_the_day(&self) -> Result<Apod, UpstreamError> {
        if self.rate_limited {
            return Err(UpstreamError::RateLimited {
                status: StatusCode::TOO_MANY_REQUESTS,
            });
        }
        Ok(picture())
    }
}

pub fn healthy_upstreams() -> (Upstreams, FakeCatalog) {
    let catalog = FakeCatalog::healthy();
    let upstreams = Upstreams::new(
        catalog.clone(),
        FakeNumbers(Some(meaning_of_life())),
        FakePictures::default(),
    );
    (upstreams, catalog)
}

pub fn failing_upstreams() -> (Upstreams, FakeCatalog) {
    let catalog = FakeCatalog::failing();
    let upstreams = Upstreams::new(
        catalog.clone(),
        FakeNumbers(None),
        FakePictures { rate_limited: true },
    );
    (upstreams, catalog)
}
