use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_lib::{
    modular::Modulus,
    polynomial::{lagrange_polynomial, point::Point, point_sequence::PointSequence, Polynomial},
};
use std::time::Duration;

const PRIME: u64 = 4294967311;

fn points(degree: u64) -> (Modulus, PointSequence) {
    let modulus = Modulus::new(PRIME).expect("invalid prime");
    let coefficients: Vec<u64> = (1..=degree + 1).map(|c| c * 7919).collect();
    let polynomial = Polynomial::from_values(modulus, &coefficients);
    let points = (1..=degree + 1).map(|x| Point::new(x, polynomial.eval_at(x).value())).collect();
    (modulus, points)
}

fn run_interpolate_bench(c: &mut Criterion) {
    let (modulus, points) = points(32);
    c.bench_function("32-degree interpolation at zero", |b| {
        b.iter(|| black_box(&points).lagrange_interpolate(modulus).expect("interpolation failed"))
    });
}

fn run_polynomial_bench(c: &mut Criterion) {
    let (modulus, points) = points(32);
    c.bench_function("32-degree polynomial reconstruction", |b| {
        b.iter(|| lagrange_polynomial(black_box(&points), modulus).expect("interpolation failed"))
    });
}

criterion_group!(
    name = lagrange_bench;
    config = Criterion::default().significance_level(0.1).sample_size(10).measurement_time(Duration::from_secs(2));
    targets = run_interpolate_bench, run_polynomial_bench
);

criterion_main!(lagrange_bench);
