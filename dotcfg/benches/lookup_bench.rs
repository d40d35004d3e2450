use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dotcfg::{FileType, ParsedConfig};

const CONF: &str = "name = demo\nserver.host = 0.0.0.0\nserver.port = 8080\n";
const INI: &str = "name = demo\n[server]\nhost = 0.0.0.0\nport = 8080\n";
const JSON: &str = r#"{"name": "demo", "server": {"host": "0.0.0.0", "port": 8080, "tls": {"enabled": false}}}"#;
const YAML: &str = "name: demo\nserver:\n  host: 0.0.0.0\n  port: 8080\n  tls:\n    enabled: false\n";

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (file_type, content) in [
        (FileType::Conf, CONF),
        (FileType::Ini, INI),
        (FileType::Json, JSON),
        (FileType::Yaml, YAML),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(file_type),
            content,
            |b, content| {
                b.iter(|| ParsedConfig::from_bytes(file_type, black_box(content.as_bytes())));
            },
        );
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    let cases = [
        (FileType::Conf, CONF, "server.port"),
        (FileType::Ini, INI, "server.port"),
        (FileType::Json, JSON, "server.tls.enabled"),
        (FileType::Yaml, YAML, "server.tls.enabled"),
    ];

    for (file_type, content, key) in cases {
        let config = ParsedConfig::from_bytes(file_type, content.as_bytes()).unwrap();
        group.bench_with_input(BenchmarkId::new("hit", file_type), key, |b, key| {
            b.iter(|| config.get(black_box(key)));
        });
        group.bench_with_input(BenchmarkId::new("miss", file_type), key, |b, _| {
            b.iter(|| config.get(black_box("server.nope")));
        });
    }

    // Stringifying a sub-mapping is the slowest path
    let config = ParsedConfig::from_bytes(FileType::Json, JSON.as_bytes()).unwrap();
    group.bench_function("sub_mapping", |b| {
        b.iter(|| config.get(black_box("server")));
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_get);
criterion_main!(benches);
