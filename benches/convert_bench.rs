//! Conversion benchmark
//!
//! Measures parse, map and render over generated rule files.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prom2grafana::mapper::{map_groups, MappingParams};
use prom2grafana::source::parse_rules;
use prom2grafana::writer::render;

fn generate_rules(groups: usize, rules_per_group: usize) -> String {
    let mut yaml = String::from("groups:\n");
    for g in 0..groups {
        yaml.push_str(&format!("  - name: group_{g}\n    rules:\n"));
        for r in 0..rules_per_group {
            yaml.push_str(&format!(
                "      - record: job:metric_{g}_{r}:rate5m\n        expr: sum by (job) (rate(metric_{g}_{r}_total[5m]))\n"
            ));
        }
    }
    yaml
}

fn benchmark_convert(c: &mut Criterion) {
    let params = MappingParams::default();
    let mut group = c.benchmark_group("convert");

    for (groups, rules) in [(1, 10), (10, 50), (50, 100)] {
        let yaml = generate_rules(groups, rules);
        group.bench_with_input(
            BenchmarkId::new("parse_map_render", format!("{groups}x{rules}")),
            &yaml,
            |b, yaml| {
                b.iter(|| {
                    let file = parse_rules(yaml.as_bytes()).unwrap();
                    render(&map_groups(&file.groups, &params)).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_convert);
criterion_main!(benches);
