use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heading_case_lint::{AllowList, HeadingCaseValidator};
use std::hint::black_box;

/// Generate headings for a specific validation scenario
fn generate_headings(count: usize, scenario: &str) -> Vec<String> {
    let mut headings = Vec::new();

    match scenario {
        "all_valid" => {
            for i in 0..count {
                headings.push(format!("Configure the API client for project {}", i));
            }
        }
        "interior_capitals" => {
            for i in 0..count {
                headings.push(format!("Getting Started With Project Number {}", i));
            }
        }
        "numbered" => {
            for i in 0..count {
                if i % 2 == 0 {
                    headings.push(format!("{}. Deploy the service to GitHub", i));
                } else {
                    headings.push(format!("{}. deploy the Service to Production", i));
                }
            }
        }
        "frontmatter" => {
            for i in 0..count {
                headings.push(format!(
                    "title: \"Build Your First Agent {}\"\ndescription: Tutorial\nkeywords: AI",
                    i
                ));
            }
        }
        "mixed" => {
            for i in 0..count {
                match i % 6 {
                    0 => headings.push("Getting started with Claude".to_string()),
                    1 => headings.push("Getting Started With the API".to_string()),
                    2 => headings.push(format!("{}. Install the SDK on macOS", i)),
                    3 => headings.push("title: 'my New Project'".to_string()),
                    4 => headings.push("NASA".to_string()),
                    5 => headings.push(String::new()),
                    _ => unreachable!(),
                }
            }
        }
        _ => {
            for i in 0..count {
                headings.push(format!("Heading {}", i));
            }
        }
    }

    headings
}

/// Benchmark validation with different heading shapes
fn bench_validation_scenarios(c: &mut Criterion) {
    let validator = HeadingCaseValidator::with_default_allow_list();

    let scenarios = vec![
        "all_valid",
        "interior_capitals",
        "numbered",
        "frontmatter",
        "mixed",
    ];

    let mut group = c.benchmark_group("validation_scenarios");

    for scenario in scenarios {
        let headings = generate_headings(5000, scenario);

        group.throughput(Throughput::Elements(headings.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &headings,
            |b, headings| {
                b.iter(|| {
                    for heading in headings {
                        black_box(validator.validate(black_box(heading)));
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark allow-list size against lookup cost
fn bench_allow_list_size(c: &mut Criterion) {
    let headings = generate_headings(1_000, "interior_capitals");
    let sizes = vec![0, 10, 100, 1_000, 10_000];

    let mut group = c.benchmark_group("allow_list_size");

    for &size in &sizes {
        let list: AllowList = (0..size).map(|i| format!("Term{}", i)).collect();
        let validator = HeadingCaseValidator::new(list);

        group.throughput(Throughput::Elements(headings.len() as u64));
        group.bench_with_input(BenchmarkId::new("terms", size), &headings, |b, headings| {
            b.iter(|| {
                for heading in headings {
                    black_box(validator.validate(black_box(heading)));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark a document traversal with node handles attached
fn bench_check_nodes(c: &mut Criterion) {
    let validator = HeadingCaseValidator::with_default_allow_list();
    let headings = generate_headings(10_000, "mixed");

    c.bench_function("check_nodes_mixed", |b| {
        b.iter(|| {
            let nodes = headings
                .iter()
                .enumerate()
                .map(|(line, text)| (text.as_str(), line));
            black_box(validator.check_nodes(black_box(nodes)))
        })
    });
}

/// Benchmark building the validator from the embedded terms
fn bench_embedded_allow_list(c: &mut Criterion) {
    c.bench_function("embedded_allow_list", |b| {
        b.iter(|| black_box(HeadingCaseValidator::with_default_allow_list()))
    });
}

criterion_group!(
    validation_benches,
    bench_validation_scenarios,
    bench_allow_list_size,
    bench_check_nodes,
    bench_embedded_allow_list
);

criterion_main!(validation_benches);
