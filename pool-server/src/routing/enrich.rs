//! Batch enrichment of facilities with travel distance/time.
//!
//! The provider accepts up to 100 locations per request; one slot is always
//! the user's own address, so facilities go out in batches of at most 99.
//! Batches run concurrently and complete independently: each successful
//! batch merges its metrics, flushes the card cache, and logs, without
//! waiting for its siblings. A failed batch appends one error status entry
//! and touches nothing.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::browse::CardCache;
use crate::dataset::{FacilityStore, MetricUpdate};
use crate::domain::Facility;
use crate::status::StatusLog;

use super::MatrixProvider;
use super::error::RoutingError;
use super::types::Matrix;

/// Maximum facilities per request; the origin takes the hundredth slot.
pub const MAX_BATCH_FACILITIES: usize = 99;

/// Distances above this are flagged as likely provider errors (km).
pub const MAX_PLAUSIBLE_KM: f64 = 50.0;

/// One request's worth of facilities.
///
/// `names[i]` corresponds to `locations[i + 1]`; `locations[0]` is the
/// origin. Facilities are sorted by name before address extraction so the
/// positional correspondence with the response arrays is well-defined.
#[derive(Debug, Clone)]
pub struct Batch {
    pub names: Vec<String>,
    pub locations: Vec<String>,
}

/// The validated outcome of one batch request.
#[derive(Debug)]
pub struct BatchResult {
    pub updates: Vec<MetricUpdate>,
    pub warnings: Vec<String>,
}

/// Partition facilities into request batches for the given origin.
pub fn plan_batches(origin: &str, facilities: &[Facility]) -> Vec<Batch> {
    facilities
        .chunks(MAX_BATCH_FACILITIES)
        .map(|chunk| {
            let mut sorted: Vec<&Facility> = chunk.iter().collect();
            sorted.sort_by(|a, b| a.name.cmp(&b.name));

            let names = sorted.iter().map(|f| f.name.clone()).collect();
            let locations = std::iter::once(origin.to_string())
                .chain(sorted.iter().map(|f| f.address.clone()))
                .collect();

            Batch { names, locations }
        })
        .collect()
}

/// Run one batch request and validate its response shape.
///
/// The provider may echo a leading self-distance entry; it must be exactly
/// zero and is discarded. Any other length disagreement aborts the batch
/// without producing updates.
pub async fn run_batch(
    provider: &impl MatrixProvider,
    batch: &Batch,
) -> Result<BatchResult, RoutingError> {
    let Matrix {
        mut distances,
        mut times,
    } = provider.matrix(&batch.locations).await?;

    let expected = batch.names.len();

    if times.len() != distances.len() {
        return Err(RoutingError::ShapeMismatch {
            expected: distances.len(),
            actual: times.len(),
        });
    }

    if distances.len() == expected + 1 {
        let self_distance = distances[0];
        if self_distance != 0.0 {
            return Err(RoutingError::SelfDistance(self_distance));
        }
        distances.remove(0);
        times.remove(0);
    } else if distances.len() != expected {
        return Err(RoutingError::ShapeMismatch {
            expected,
            actual: distances.len(),
        });
    }

    let mut updates = Vec::with_capacity(expected);
    let mut warnings = Vec::new();

    for ((name, km), secs) in batch.names.iter().zip(distances).zip(times) {
        if km == 0.0 || km > MAX_PLAUSIBLE_KM {
            warnings.push(format!(
                "distance for {name} looks implausible ({km} km); keeping it anyway"
            ));
        }
        updates.push(MetricUpdate {
            name: name.clone(),
            distance_km: km,
            travel_time_secs: secs,
        });
    }

    Ok(BatchResult { updates, warnings })
}

/// Run a full enrichment pass for one origin address.
///
/// Batches are dispatched concurrently; completions are handled as they
/// arrive. Nothing is retried and nothing is cancelled; the user re-triggers
/// manually if a batch fails.
pub async fn enrich(
    provider: &impl MatrixProvider,
    store: &FacilityStore,
    cards: &CardCache,
    status: &StatusLog,
    origin: &str,
) {
    let facilities = store.snapshot().await;
    let batches = plan_batches(origin, &facilities);
    tracing::info!(
        batches = batches.len(),
        facilities = facilities.len(),
        "starting travel lookup"
    );

    let mut runs: FuturesUnordered<_> = batches
        .iter()
        .map(|batch| async move { (run_batch(provider, batch).await, batch) })
        .collect();

    while let Some((result, batch)) = runs.next().await {
        match result {
            Ok(outcome) => {
                for warning in outcome.warnings {
                    status.warning(warning).await;
                }
                let applied = store.apply_metrics(&outcome.updates).await;
                cards.invalidate_all();
                status
                    .info(format!("travel info updated for {applied} pools"))
                    .await;
            }
            Err(e) => {
                status
                    .error(format!(
                        "travel lookup failed for a batch of {}: {e}",
                        batch.names.len()
                    ))
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::testutil::facility;
    use crate::routing::MockMatrixProvider;
    use crate::status::StatusLevel;

    const DATE: &str = "2019-07-19";

    fn fleet(n: usize) -> Vec<Facility> {
        (0..n)
            .map(|i| facility(&format!("Pool {i:03}"), DATE, &[(600, 720)]))
            .collect()
    }

    #[test]
    fn small_set_is_one_batch() {
        let facilities = fleet(5);
        let batches = plan_batches("1 Origin Rd", &facilities);

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].names.len(), 5);
        assert_eq!(batches[0].locations.len(), 6);
        assert_eq!(batches[0].locations[0], "1 Origin Rd");
    }

    #[test]
    fn ninety_nine_fits_one_batch_and_150_takes_two() {
        assert_eq!(plan_batches("o", &fleet(99)).len(), 1);

        let batches = plan_batches("1 Origin Rd", &fleet(150));
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].names.len(), 99);
        assert_eq!(batches[1].names.len(), 51);
        // The origin leads both requests.
        assert_eq!(batches[0].locations[0], "1 Origin Rd");
        assert_eq!(batches[1].locations[0], "1 Origin Rd");
    }

    #[test]
    fn batches_are_sorted_by_name_with_parallel_addresses() {
        let facilities = vec![
            facility("Zeta Pool", DATE, &[(600, 720)]),
            facility("Alpha Pool", DATE, &[(600, 720)]),
        ];
        let batch = plan_batches("1 Origin Rd", &facilities).remove(0);

        assert_eq!(batch.names, vec!["Alpha Pool", "Zeta Pool"]);
        assert_eq!(batch.locations[1], "1 Alpha Pool St");
        assert_eq!(batch.locations[2], "1 Zeta Pool St");
    }

    #[tokio::test]
    async fn run_batch_merges_positionally() {
        let facilities = vec![
            facility("Alpha Pool", DATE, &[(600, 720)]),
            facility("Beta Pool", DATE, &[(600, 720)]),
        ];
        let batch = plan_batches("1 Origin Rd", &facilities).remove(0);

        let mock = MockMatrixProvider::new()
            .with_route("1 Alpha Pool St", 2.5, 480.0)
            .with_route("1 Beta Pool St", 7.1, 1200.0);

        let outcome = run_batch(&mock, &batch).await.unwrap();
        assert_eq!(outcome.updates.len(), 2);
        assert_eq!(outcome.updates[0].name, "Alpha Pool");
        assert_eq!(outcome.updates[0].distance_km, 2.5);
        assert_eq!(outcome.updates[1].name, "Beta Pool");
        assert_eq!(outcome.updates[1].travel_time_secs, 1200.0);
        assert!(outcome.warnings.is_empty());
    }

    #[tokio::test]
    async fn leading_zero_self_entry_is_discarded() {
        let facilities = vec![facility("Alpha Pool", DATE, &[(600, 720)])];
        let batch = plan_batches("1 Origin Rd", &facilities).remove(0);

        let mock = MockMatrixProvider::new()
            .with_route("1 Alpha Pool St", 2.5, 480.0)
            .with_self_entry(0.0);

        let outcome = run_batch(&mock, &batch).await.unwrap();
        assert_eq!(outcome.updates.len(), 1);
        assert_eq!(outcome.updates[0].distance_km, 2.5);
    }

    #[tokio::test]
    async fn nonzero_self_entry_aborts() {
        let facilities = vec![facility("Alpha Pool", DATE, &[(600, 720)])];
        let batch = plan_batches("1 Origin Rd", &facilities).remove(0);

        let mock = MockMatrixProvider::new()
            .with_route("1 Alpha Pool St", 2.5, 480.0)
            .with_self_entry(0.4);

        let err = run_batch(&mock, &batch).await.unwrap_err();
        assert!(matches!(err, RoutingError::SelfDistance(_)));
    }

    #[tokio::test]
    async fn shape_mismatch_aborts() {
        let facilities = fleet(3);
        let batch = plan_batches("1 Origin Rd", &facilities).remove(0);

        let mock = MockMatrixProvider::new().with_canned(Matrix {
            distances: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            times: vec![60.0, 120.0, 180.0, 240.0, 300.0],
        });

        let err = run_batch(&mock, &batch).await.unwrap_err();
        assert!(matches!(
            err,
            RoutingError::ShapeMismatch {
                expected: 3,
                actual: 5
            }
        ));
    }

    #[tokio::test]
    async fn implausible_distances_warn_but_merge() {
        let facilities = vec![
            facility("Alpha Pool", DATE, &[(600, 720)]),
            facility("Beta Pool", DATE, &[(600, 720)]),
        ];
        let batch = plan_batches("1 Origin Rd", &facilities).remove(0);

        let mock = MockMatrixProvider::new()
            .with_route("1 Alpha Pool St", 0.0, 0.0)
            .with_route("1 Beta Pool St", 73.0, 4000.0);

        let outcome = run_batch(&mock, &batch).await.unwrap();
        assert_eq!(outcome.updates.len(), 2);
        assert_eq!(outcome.warnings.len(), 2);
    }

    #[tokio::test]
    async fn enrich_merges_and_surfaces_annotations() {
        let store = FacilityStore::new(vec![
            facility("Alpha Pool", DATE, &[(600, 720)]),
            facility("Beta Pool", DATE, &[(600, 720)]),
        ]);
        let cards = CardCache::default();
        let status = StatusLog::new();

        // Warm the cache so enrichment has something stale to flush.
        let snapshot = store.snapshot().await;
        let before = cards.get_or_build(&snapshot[0], DATE).unwrap();
        assert_eq!(before.display_name, "Alpha Pool");

        let mock = MockMatrixProvider::new()
            .with_route("1 Alpha Pool St", 2.5, 480.0)
            .with_route("1 Beta Pool St", 7.1, 1200.0);

        enrich(&mock, &store, &cards, &status, "1 Origin Rd").await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot[0].distance, Some(2.5));

        let after = cards.get_or_build(&snapshot[0], DATE).unwrap();
        assert_eq!(after.display_name, "Alpha Pool (2.5 km) (8 min)");

        let entries = status.snapshot().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, StatusLevel::Info);
    }

    #[tokio::test]
    async fn failed_batch_logs_one_error_and_merges_nothing() {
        let store = FacilityStore::new(fleet(3));
        let cards = CardCache::default();
        let status = StatusLog::new();

        let mock = MockMatrixProvider::new().with_canned(Matrix {
            distances: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            times: vec![60.0, 120.0, 180.0, 240.0, 300.0],
        });

        enrich(&mock, &store, &cards, &status, "1 Origin Rd").await;

        assert!(store.snapshot().await.iter().all(|f| f.distance.is_none()));

        let entries = status.snapshot().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, StatusLevel::Error);
    }

    #[tokio::test]
    async fn hundred_fifty_facilities_issue_two_requests() {
        let mut mock = MockMatrixProvider::new();
        for i in 0..150 {
            mock = mock.with_route(format!("1 Pool {i:03} St"), 1.0 + i as f64 / 100.0, 60.0);
        }

        let store = FacilityStore::new(fleet(150));
        let cards = CardCache::default();
        let status = StatusLog::new();

        enrich(&mock, &store, &cards, &status, "1 Origin Rd").await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r[0] == "1 Origin Rd"));
        assert_eq!(store.snapshot().await[0].distance, Some(1.0));
    }
}
