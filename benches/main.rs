use criterion::{Criterion, black_box, criterion_group, criterion_main};
use swb_status_line::registry::{DEFAULT_SEPARATOR, StatusRegistry};
use swb_status_line::sink::MemorySink;
use tokio::runtime::Runtime;

fn create_test_registry() -> StatusRegistry {
    let mut registry = StatusRegistry::new();
    registry.insert("cpu", "CPU: 0.52", " | ");
    registry.insert("memory", "MEM: 43%", " | ");
    registry.insert("battery", "BAT: 87%", " | ");
    registry.insert("date", "2025/06/01 12:30", "");
    registry
}

fn bench_registry_operations(c: &mut Criterion) {
    c.bench_function("registry_creation", |b| {
        b.iter(|| {
            let registry = create_test_registry();
            black_box(registry);
        })
    });

    c.bench_function("registry_render", |b| {
        let registry = create_test_registry();

        b.iter(|| {
            let line = registry.render();
            black_box(line);
        })
    });

    c.bench_function("registry_upsert_existing", |b| {
        let mut registry = create_test_registry();

        b.iter(|| {
            registry.upsert(black_box("memory"), black_box("MEM: 44%"));
            let line = registry.render();
            black_box(line);
        })
    });

    c.bench_function("registry_upsert_fallback_insert", |b| {
        b.iter(|| {
            let mut registry = StatusRegistry::new();
            for i in 0..16 {
                registry.upsert(black_box(&format!("block-{i}")), black_box("内容"));
            }
            black_box(registry);
        })
    });

    c.bench_function("registry_render_many_blocks", |b| {
        let mut registry = StatusRegistry::new();
        for i in 0..64 {
            registry.insert(format!("block-{i}"), "一段较长的状态文本", DEFAULT_SEPARATOR);
        }

        b.iter(|| {
            let line = registry.render();
            black_box(line);
        })
    });
}

fn bench_publish(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("publish_to_memory_sink", |b| {
        let registry = create_test_registry();
        let sink = MemorySink::new();

        b.iter(|| {
            rt.block_on(async {
                registry.publish(black_box(&sink)).await.unwrap();
            })
        })
    });
}

criterion_group!(benches, bench_registry_operations, bench_publish);
criterion_main!(benches);
