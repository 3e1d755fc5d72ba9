use action_stats::{ActionRegistry, ActionService, JsonActionService, TracingObserver};
use std::sync::Arc;

const JUMP: &str = "jump";
const RUN: &str = "run";
const WALK: &str = "walk";

fn action(kind: &str, time: u64) -> String {
    format!(r#"{{"action":"{kind}", "time":{time}}}"#)
}

fn assert_results(service: &JsonActionService, kind: &str, count: u64, total: u64) {
    let stats = service
        .action_statistics(kind)
        .unwrap_or_else(|| panic!("no statistics for {kind}"));
    let expected_avg = if count == 0 { 0 } else { total / count };
    assert_eq!(stats.kind.as_ref(), kind);
    assert_eq!(stats.event_count, count, "count for {kind}");
    assert_eq!(stats.total_duration, total, "total for {kind}");
    assert_eq!(stats.average, expected_avg, "average for {kind}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_paired_jumps_from_many_tasks() {
    let registry = Arc::new(ActionRegistry::new().with_observer(Arc::new(TracingObserver)));

    let tasks = 500u64;
    let handles: Vec<_> = (0..tasks)
        .map(|_| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                registry.record_action(JUMP, 100).unwrap();
                registry.record_action(JUMP, 200).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let jump = registry.statistics_for(JUMP).unwrap();
    assert_eq!(jump.event_count, 2 * tasks);
    assert_eq!(jump.total_duration, 300 * tasks);
    assert_eq!(jump.average, 150);
    assert_eq!(registry.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_mixed_readers_and_writers() {
    let service = Arc::new(JsonActionService::new());

    let loops = 5_000u64;
    let handles: Vec<_> = (0..loops)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service.add_action(&action(JUMP, 100)).unwrap();
                service.get_stats().unwrap();
                service.add_action(&action(RUN, 50)).unwrap();
                service.get_stats().unwrap();
                service.add_action(&action(WALK, 200)).unwrap();
                service.get_stats().unwrap();
                service.add_action(&action(WALK, 300)).unwrap();
                service.get_stats().unwrap();
                service.add_action(&action(RUN, 100)).unwrap();
                service.get_stats().unwrap();
                service.add_action(&action(JUMP, 200)).unwrap();
                service.get_stats().unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_results(&service, JUMP, loops * 2, loops * 300);
    assert_results(&service, RUN, loops * 2, loops * 150);
    assert_results(&service, WALK, loops * 2, loops * 500);

    let report = service.get_stats().unwrap();
    assert!(report.contains(r#"{"action":"run","avg":75}"#));
    assert!(report.contains(r#"{"action":"walk","avg":250}"#));
    assert!(report.contains(r#"{"action":"jump","avg":150}"#));
}

#[test]
fn test_many_distinct_kinds() {
    let registry = ActionRegistry::new();
    let kinds = 10_000u64;
    let threads = 8u64;

    std::thread::scope(|s| {
        for t in 0..threads {
            let registry = &registry;
            s.spawn(move || {
                for index in (t..kinds).step_by(threads as usize) {
                    registry
                        .record_action(&format!("ACTION-{index}"), index)
                        .unwrap();
                }
            });
        }
    });

    assert!(registry.statistics_for("ACTION-0").is_some());
    assert!(registry.statistics_for(&format!("ACTION-{}", kinds - 1)).is_some());
    assert!(registry.statistics_for("DoesNotExist").is_none());

    let view = registry.all_statistics();
    assert_eq!(view.len() as u64, kinds);
    assert_eq!(view.get("ACTION-42").unwrap().average, 42);

    // Dropping or consuming the view leaves the registry untouched
    let consumed: Vec<_> = view.into_iter().collect();
    assert_eq!(consumed.len() as u64, kinds);
    assert_eq!(registry.all_statistics().len() as u64, kinds);
}

#[test]
fn test_snapshots_never_split_an_update() {
    let registry = ActionRegistry::new();
    let done = std::sync::atomic::AtomicBool::new(false);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..5_000 {
                    registry.record_action(JUMP, 7).unwrap();
                }
            });
        }
        s.spawn(|| {
            while !done.load(std::sync::atomic::Ordering::Relaxed) {
                for snapshot in &registry.all_statistics() {
                    assert_eq!(snapshot.total_duration, snapshot.event_count * 7);
                    if snapshot.event_count > 0 {
                        assert_eq!(snapshot.average, 7);
                    }
                }
                if registry
                    .statistics_for(JUMP)
                    .is_some_and(|jump| jump.event_count == 20_000)
                {
                    done.store(true, std::sync::atomic::Ordering::Relaxed);
                }
            }
        });
    });

    assert_eq!(registry.statistics_for(JUMP).unwrap().event_count, 20_000);
}

#[test]
fn test_malformed_input_leaves_registry_empty() {
    let service = JsonActionService::new();
    for raw in [r#"{"xaction":"test", "xtime":100}"#, r#"{"action":"test"}"#, ""] {
        assert!(service.add_action(raw).is_err());
    }
    assert!(service.registry().is_empty());
    assert!(service.action_statistics("test").is_none());
}
