use origin_relay_jobs::CacheSweepJob;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCacheMaintenancePort;

#[tokio::test]
async fn test_cache_sweep_job_first_tick_is_immediate() {
    let mock = Arc::new(MockCacheMaintenancePort::new());
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(3600));

    tokio::spawn(job.start());
    sleep(Duration::from_millis(50)).await;

    assert_eq!(mock.sweep_call_count(), 1);
}

#[tokio::test]
async fn test_cache_sweep_job_fires_on_interval() {
    let mock = Arc::new(MockCacheMaintenancePort::new());
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(1));

    tokio::spawn(job.start());
    sleep(Duration::from_millis(1100)).await;

    assert!(
        mock.sweep_call_count() >= 2,
        "Sweep should have fired at start and after one interval"
    );
}

#[tokio::test]
async fn test_cache_sweep_job_error_is_non_fatal() {
    let mock = Arc::new(MockCacheMaintenancePort::new());
    mock.set_should_fail(true);
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(1));

    tokio::spawn(job.start());
    sleep(Duration::from_millis(1100)).await;

    assert!(
        mock.sweep_call_count() >= 2,
        "Job should keep running after a failed sweep"
    );
}

#[tokio::test]
async fn test_cache_sweep_job_stops_on_cancellation() {
    let mock = Arc::new(MockCacheMaintenancePort::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        CacheSweepJob::new(mock.clone())
            .with_interval(3600)
            .with_cancellation(token.clone()),
    );

    let handle = tokio::spawn(job.start());
    token.cancel();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("job should exit after cancellation")
        .unwrap();
}

#[test]
fn test_zero_interval_is_clamped() {
    let mock = Arc::new(MockCacheMaintenancePort::new());
    let job = CacheSweepJob::new(mock).with_interval(0);
    assert_eq!(job.interval_secs(), 1);
}
