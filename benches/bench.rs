// Criterion benchmarks for the persona quiz

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persona_quiz::core::{Catalog, Matcher, Scorer};
use persona_quiz::models::{
    AnswerRound, Answers, College, CollegeFilters, CollegeSize, CollegeType, Enrollment,
    LocationPreference,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const STATES: [&str; 6] = ["IA", "NE", "MN", "WI", "IL", "MO"];
const TYPES: [&str; 3] = ["Public", "Private", "Denominational"];

fn create_college(id: usize) -> College {
    College {
        name: format!("College {}", id),
        website: format!("www.college{}.edu", id),
        state: STATES[id % STATES.len()].to_string(),
        college_type: TYPES[id % TYPES.len()].to_string(),
        enrollment: Some(Enrollment::Count(500 + (id as u64 * 737) % 40_000)),
    }
}

fn round(best: [&str; 3], most: &str, least: [&str; 3]) -> AnswerRound {
    AnswerRound {
        best: best.iter().map(|s| s.to_string()).collect(),
        most: most.to_string(),
        least: least.iter().map(|s| s.to_string()).collect(),
    }
}

fn create_answers() -> Answers {
    Answers {
        traits_round1: round(
            ["Confident", "Curious", "Determined"],
            "Confident",
            ["Poised", "Compassionate", "Enthusiastic"],
        ),
        traits_round2: round(
            ["Influential", "Independent", "Analytical"],
            "Independent",
            ["Expressive", "Polished", "Playful"],
        ),
        images: round(
            ["BlueSet.jpg", "BrownSet.jpg", "GreenSet.jpg"],
            "BlueSet.jpg",
            ["PinkSet.jpg", "OrangeSet.jpg", "PurpleSet.jpg"],
        ),
        modes: vec!["Achieve With Me".to_string(), "Strive With Me".to_string()],
    }
}

fn create_filters() -> CollegeFilters {
    CollegeFilters {
        location: LocationPreference::InState,
        college_type: CollegeType::Private,
        college_size: CollegeSize::Small,
        state: "Iowa".to_string(),
    }
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = Scorer::new(Arc::new(Catalog::new()));
    let answers = create_answers();

    c.bench_function("score_answers", |b| {
        b.iter(|| scorer.score(black_box(&answers)))
    });
}

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| b.iter(Catalog::new));
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::default();
    let filters = create_filters();

    let mut group = c.benchmark_group("matching");

    for college_count in [50, 500, 2_000, 10_000].iter() {
        let colleges: Vec<College> = (0..*college_count).map(create_college).collect();
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(
            BenchmarkId::new("match_with_rng", college_count),
            college_count,
            |b, _| {
                b.iter(|| {
                    matcher.match_with_rng(black_box(&filters), black_box(&colleges), &mut rng)
                });
            },
        );
    }

    group.finish();
}

fn bench_filtering_pipeline(c: &mut Criterion) {
    let matcher = Matcher::default();
    let filters = create_filters();
    let colleges: Vec<College> = (0..1_000).map(create_college).collect();

    c.bench_function("filtering_pipeline_1000_colleges", |b| {
        b.iter(|| black_box(matcher.narrow(black_box(&filters), &colleges).len()))
    });
}

criterion_group!(
    benches,
    bench_scoring,
    bench_catalog_build,
    bench_matching,
    bench_filtering_pipeline
);

criterion_main!(benches);
