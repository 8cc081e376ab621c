use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathkit::path::normalize;
use pathkit::Path;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_path", |b| {
        let path = Path::new("/absolute/path/to/file");
        b.iter(|| black_box(&path).normalize());
    });

    group.bench_function("relative_path", |b| {
        let path = Path::new("./relative/path");
        b.iter(|| black_box(&path).normalize());
    });

    group.bench_function("with_dots", |b| {
        let path = Path::new("/a/b/../c/./d");
        b.iter(|| black_box(&path).normalize());
    });

    group.bench_function("many_dots", |b| {
        let path = Path::new("/a/b/c/d/../../e/f");
        b.iter(|| black_box(&path).normalize());
    });

    group.bench_function("tilde_expansion", |b| {
        let path = Path::new("~/project/src");
        b.iter(|| black_box(&path).normalize());
    });

    group.finish();
}

fn bench_normalize_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_operations");

    group.bench_function("expand_tilde", |b| {
        b.iter(|| normalize::expand_tilde(black_box("~/test")));
    });

    group.bench_function("resolve_components", |b| {
        b.iter(|| normalize::resolve_components(black_box("/a/b/../c/./d")));
    });

    group.bench_function("abbreviate", |b| {
        let path = Path::home() + "Library/Caches";
        b.iter(|| black_box(&path).abbreviate());
    });

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    let base = Path::new("/users/test/projects/pathkit");

    group.bench_function("plain", |b| {
        b.iter(|| black_box(&base) + black_box("src/path"));
    });

    group.bench_function("parent", |b| {
        b.iter(|| black_box(&base) + black_box("../../other"));
    });

    group.bench_function("absolute_override", |b| {
        b.iter(|| black_box(&base) + black_box("/usr/bin"));
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    for depth in [1usize, 5, 10, 20].iter() {
        let raw = format!("/{}", vec!["dir"; *depth].join("/"));
        let path = Path::new(raw);

        group.bench_with_input(BenchmarkId::new("split", depth), &path, |b, path| {
            b.iter(|| black_box(path).components());
        });

        group.bench_with_input(BenchmarkId::new("rebuild", depth), &path, |b, path| {
            let components = path.components();
            b.iter(|| Path::from_components(black_box(&components)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_normalize_operations,
    bench_append,
    bench_components
);
criterion_main!(benches);
