use std::time::Duration;

use super::ServiceClient;

/// Outcome counts for one client cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl CycleReport {
    fn record<T, E: std::fmt::Display>(&mut self, step: &str, result: &Result<T, E>) {
        match result {
            Ok(_) => self.succeeded += 1,
            Err(e) => {
                tracing::warn!(step, error = %e, "Client step failed");
                self.failed += 1;
            }
        }
    }
}

/// Query every operation once and print the results.
///
/// A failing step is logged and counted; it never stops the remaining steps.
/// The rocket detail step uses the first id from the rocket list and is
/// skipped when the list is empty or unavailable.
pub async fn run_cycle(client: &dyn ServiceClient) -> CycleReport {
    let mut report = CycleReport::default();

    println!("\n=== Getting Latest Launch ===");
    let launch = client.latest_launch().await;
    report.record("latest_launch", &launch);
    if let Ok(launch) = &launch {
        println!("Flight Number: {}", launch.flight_number);
        println!("Mission Name: {}", launch.mission_name);
        println!("Date (UTC): {}", launch.date_utc);
        println!("Success: {}", launch.success);
        println!("Details: {}", launch.details);
    }

    println!("\n=== Getting All Rockets ===");
    let rockets = client.rockets().await;
    report.record("rockets", &rockets);
    if let Ok(rockets) = &rockets {
        println!("Available Rockets:");
        for rocket in rockets {
            println!("- {} (ID: {})", rocket.name, rocket.id);
        }
    }

    if let Some(first) = rockets.as_ref().ok().and_then(|r| r.first()) {
        println!("\n=== Getting Rocket Details ===");
        let rocket = client.rocket(&first.id).await;
        report.record("rocket", &rocket);
        if let Ok(rocket) = &rocket {
            println!("Rocket Name: {}", rocket.name);
            println!("Description: {}", rocket.description);
            println!("Height: {:.2} meters", rocket.height.meters);
            println!("Mass: {} kg", rocket.mass.kg);
        }
    }

    println!("\n=== Getting Math Fact ===");
    let fact = client.math_fact().await;
    report.record("math_fact", &fact);
    if let Ok(fact) = &fact {
        println!("Number: {}", fact.number);
        println!("Type: {}", fact.kind);
        println!("Fact: {}", fact.text);
        println!("Found: {}", fact.found);
    }

    report
}

/// Run [`run_cycle`] every `interval`, or exactly once when `once` is set.
pub async fn poll(client: &dyn ServiceClient, interval: Duration, once: bool) {
    loop {
        tracing::info!(
            started_at = %chrono::Utc::now().to_rfc3339(),
            "Starting client cycle"
        );
        let report = run_cycle(client).await;
        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "Client cycle completed"
        );

        if once {
            return;
        }
        tracing::info!(interval_secs = interval.as_secs(), "Sleeping until next cycle");
        tokio::time::sleep(interval).await;
    }
}
