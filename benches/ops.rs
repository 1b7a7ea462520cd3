use core::str::FromStr;
use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion,
};
use decimal128::{Decimal128, DecimalLiteral};

const OPERANDS: [(&str, i128, i128); 3] = [
    ("one_word", 123_456_789, 1_234),
    ("two_words", 123_456_789_012_345_678_901_234_567, 98_765_432_109_876_543),
    ("full_width", i128::MAX - 12_345, 18_446_744_073_709_551_629),
];

macro_rules! add_benchmark_group {
    ($criterion:expr, $f:ident, $op:tt) => {
        fn $f<M>(group: &mut BenchmarkGroup<'_, M>)
        where
            M: Measurement,
        {
            for (name, a, b) in OPERANDS {
                group.bench_with_input(BenchmarkId::new("decimal128", name), &(a, b), |ben, &(a, b)| {
                    let (a, b) = (Decimal128::from(a), Decimal128::from(b));
                    ben.iter(|| black_box(black_box(a) $op black_box(b)))
                });

                group.bench_with_input(BenchmarkId::new("i128", name), &(a, b), |ben, &(a, b)| {
                    ben.iter(|| black_box(black_box(a) $op black_box(b)))
                });
            }
        }

        let mut group = $criterion.benchmark_group(stringify!($f));
        $f(&mut group);
        group.finish();
    };
}

fn arithmetic_benchmark(c: &mut Criterion) {
    add_benchmark_group!(c, addition, +);
    add_benchmark_group!(c, subtraction, -);
    add_benchmark_group!(c, multiplication, *);
    add_benchmark_group!(c, division, /);
    add_benchmark_group!(c, remainder, %);
}

fn string_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");
    for input in ["0.001", "123.45", "-1.5E-9", "-170141183460469231731687303715884105728"] {
        group.bench_with_input(BenchmarkId::new("parse", input), input, |ben, input| {
            ben.iter(|| black_box(DecimalLiteral::from_str(black_box(input))))
        });

        let literal = DecimalLiteral::from_str(input).unwrap();
        group.bench_with_input(BenchmarkId::new("to_string_with_scale", input), &literal, |ben, literal| {
            ben.iter(|| black_box(literal.value.to_string_with_scale(black_box(literal.scale))))
        });
    }
    group.finish();
}

fn rescale_benchmark(c: &mut Criterion) {
    let value = Decimal128::from(1_234_567_890_000_000i128);
    c.bench_function("rescale_up", |ben| ben.iter(|| black_box(black_box(value).rescale(2, 20))));
    c.bench_function("rescale_down", |ben| ben.iter(|| black_box(black_box(value).rescale(9, 2))));
}

criterion_group!(benches, arithmetic_benchmark, string_benchmark, rescale_benchmark);
criterion_main!(benches);
