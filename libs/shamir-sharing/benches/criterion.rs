use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use shamir_sharing::{select_prime, AuditConfig, Auditor, Point, Shamir, ThresholdConfig};

const SECRET_VALUE: u64 = 15130512518_u64;

fn build_shamir(threshold: usize, share_count: usize) -> Shamir {
    let config = ThresholdConfig::new(threshold, share_count).expect("invalid threshold");
    let modulus = select_prime(SECRET_VALUE, &config).expect("prime selection failed");
    Shamir::new(threshold, modulus).expect("shamir construction failed")
}

fn build_shares(shamir: &Shamir, share_count: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(42);
    shamir.generate_shares(SECRET_VALUE, share_count, &mut rng).expect("generate shares failed").into_points()
}

fn bench_generate_shares(c: &mut Criterion) {
    let shamir = build_shamir(5, 16);
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("generate shares", |b| {
        b.iter(|| shamir.generate_shares(black_box(SECRET_VALUE), 16, &mut rng).expect("generate shares failed"));
    });
}

fn bench_reconstruct(c: &mut Criterion) {
    let shamir = build_shamir(5, 16);
    let shares = build_shares(&shamir, 16);
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("reconstruct", |b| {
        b.iter(|| shamir.reconstruct(black_box(&shares), &mut rng).expect("reconstruct failed"));
    });
}

fn bench_audit(c: &mut Criterion, name: &str, parallel: bool) {
    let shamir = build_shamir(5, 16);
    let shares = build_shares(&shamir, 16);
    let auditor = Auditor::new(shamir, AuditConfig { parallel, ..Default::default() });
    c.bench_function(name, |b| {
        b.iter(|| auditor.audit(black_box(&shares)).expect("audit failed"));
    });
}

fn bench_audit_serial(c: &mut Criterion) {
    bench_audit(c, "audit 5 of 16 (serial)", false);
}

fn bench_audit_parallel(c: &mut Criterion) {
    bench_audit(c, "audit 5 of 16 (parallel)", true);
}

criterion_group!(
    name = sharing;
    config = Criterion::default();
    targets = bench_generate_shares, bench_reconstruct
);

criterion_group!(
    name = audit;
    config = Criterion::default().sample_size(10);
    targets = bench_audit_serial, bench_audit_parallel
);

criterion_main!(sharing, audit);
