// benches/durations.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use course_explorer::{catalogue::Catalogue, core::duration::{parse_duration, DurationHeuristics}};

const SAMPLES: [&str; 12] = [
    "5 hours a day for 3 days",
    "16 videos roughly 4–17 min each",
    "35 videos roughly 50 mins each",
    "Approx. 1.5 hours",
    "5hrs",
    "90 min",
    "12 weeks",
    "one semester",
    "half a semester",
    "3 months",
    "2 years",
    "self-paced, varies",
];

fn synthetic_catalogue(rows: usize) -> String {
    let mut csv = s_header();
    for i in 0..rows {
        let domain = if i % 25 == 0 { "Data" } else { "" };
        csv.push_str(&format!(
            "{domain},Analytics,Course {i},https://example.org/{i},Coursera,\"{}\",\"SQL, Data Analysis, Communication\"\n",
            SAMPLES[i % SAMPLES.len()],
        ));
    }
    csv
}

fn s_header() -> String {
    String::from("Competency domain,Focus Areas,Resource title,URL,Platform / host,Length (mins),Skill area\n")
}

fn bench_durations(c: &mut Criterion) {
    c.bench_function("parse_duration_samples", |b| {
        b.iter(|| {
            let mut known = 0usize;
            for s in SAMPLES {
                if parse_duration(black_box(s)).is_some() { known += 1; }
            }
            black_box(known)
        })
    });

    let csv = synthetic_catalogue(2_000);
    let h = DurationHeuristics::default();
    c.bench_function("load_catalogue_2k", |b| {
        b.iter(|| {
            let cat = Catalogue::from_reader(black_box(csv.as_bytes()), &h).expect("load");
            black_box(cat.len())
        })
    });
}

criterion_group!(benches, bench_durations);
criterion_main!(benches);
