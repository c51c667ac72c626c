use knap_utils::{format_duration, mean_duration, RuntimeStats};
use std::time::Duration;

#[test]
fn test_mean_duration() {
    assert_eq!(mean_duration(&[]), None);
    assert_eq!(
        mean_duration(&[
            Duration::from_millis(1),
            Duration::from_millis(2),
            Duration::from_millis(6)
        ]),
        Some(Duration::from_millis(3))
    );
    assert_eq!(
        mean_duration(&[Duration::from_secs(3), Duration::from_nanos(1)]),
        Some(Duration::from_nanos(1_500_000_000))
    );
}

#[test]
fn test_runtime_stats() {
    let samples = [
        Duration::from_micros(40),
        Duration::from_micros(10),
        Duration::from_micros(25),
    ];
    let stats = RuntimeStats::from_samples(&samples).unwrap();
    assert_eq!(stats.samples, 3);
    assert_eq!(stats.mean, Duration::from_micros(25));
    assert_eq!(stats.min, Duration::from_micros(10));
    assert_eq!(stats.max, Duration::from_micros(40));
    assert!(RuntimeStats::from_samples(&[]).is_none());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_nanos(999)), "999ns");
    assert_eq!(format_duration(Duration::from_micros(12)), "12.000µs");
    assert_eq!(format_duration(Duration::from_micros(12_345)), "12.345ms");
    assert_eq!(format_duration(Duration::from_millis(2_500)), "2.500s");
}
