use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symptom_predictor::{
    NaiveBayesKind, NaiveBayesModel, SymptomClassifier, SymptomEncoding, SymptomRequest, Vocabulary,
};

/// Roughly the shape of the disease dataset: 132 symptoms, 41 diseases
const NUM_SYMPTOMS: usize = 132;
const NUM_DISEASES: usize = 41;

fn setup_benchmark_classifier(kind: NaiveBayesKind, classes: usize) -> SymptomClassifier {
    let vocabulary: Vocabulary = (0..NUM_SYMPTOMS).map(|i| format!("symptom_{}", i)).collect();

    let mut builder = NaiveBayesModel::builder(kind);
    for c in 0..classes {
        let probs = (0..NUM_SYMPTOMS)
            .map(|f| if (f + c) % 7 == 0 { 0.8f64.ln() } else { 0.02f64.ln() })
            .collect();
        builder = builder
            .add_class(format!("disease_{}", c), (1.0 / classes as f64).ln(), probs)
            .unwrap();
    }

    SymptomClassifier::new(builder.build().unwrap(), vocabulary)
}

fn sample_request() -> SymptomRequest {
    SymptomRequest::parse(
        br#"{"symptoms": ["symptom_0", " symptom_7", "symptom_14", "unknown", "symptom_21"]}"#,
    )
    .unwrap()
}

fn bench_encoding(c: &mut Criterion) {
    let classifier = setup_benchmark_classifier(NaiveBayesKind::Bernoulli, NUM_DISEASES);
    let request = sample_request();
    let mut group = c.benchmark_group("Encoding");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("parse_request", |b| b.iter(|| {
        SymptomRequest::parse(black_box(br#"{"symptoms": ["symptom_0", "symptom_7"]}"#)).unwrap()
    }));
    group.bench_function("encode", |b| b.iter(|| {
        classifier.encode(black_box(request.symptoms()))
    }));

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prediction");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));
    let request = sample_request();

    for (name, kind) in [
        ("bernoulli", NaiveBayesKind::Bernoulli),
        ("multinomial", NaiveBayesKind::Multinomial),
    ] {
        let classifier = setup_benchmark_classifier(kind, NUM_DISEASES);
        group.bench_function(format!("classify_{}", name), |b| b.iter(|| {
            classifier.classify(black_box(&request)).unwrap()
        }));
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));
    let request = sample_request();

    for &count in &[2, 10, 41, 100] {
        let classifier = setup_benchmark_classifier(NaiveBayesKind::Bernoulli, count);
        group.bench_function(format!("classes_{}", count), |b| b.iter(|| {
            classifier.classify(black_box(&request)).unwrap()
        }));
    }

    group.finish();
}

criterion_group!(benches, bench_encoding, bench_prediction, bench_scaling);
criterion_main!(benches);
