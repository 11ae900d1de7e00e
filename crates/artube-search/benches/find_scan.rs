use artube_core::{Cache, Config, TermWeights, VideoContent};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use tempfile::TempDir;

fn bench_find_100_entries(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let model = TermWeights::from_lines([
        "to be or not to be that is the question",
        "whether tis nobler in the mind to suffer",
        "the slings and arrows of outrageous fortune",
    ]);
    let config = Config {
        cache_dir: temp_dir.path().to_path_buf(),
        ..Config::new()
    };
    let cache = Cache::with_model(config, Arc::new(model)).unwrap();

    for i in 0..100 {
        cache
            .index_video(
                &format!("tx{}", i),
                VideoContent {
                    title: format!("video{} rocket launch", i),
                    description: "implementation with keywords".to_string(),
                    likes: 0,
                    poster_tx_id: String::new(),
                },
            )
            .unwrap();
    }

    c.bench_function("find_100_entries", |b| {
        b.iter(|| {
            cache.find(black_box("rocket launch")).unwrap();
        });
    });
}

criterion_group!(benches, bench_find_100_entries);
criterion_main!(benches);
