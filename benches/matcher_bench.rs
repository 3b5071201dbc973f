use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rlibphonematcher::{Leniency, PhoneNumberMatcher, PHONE_NUMBER_UTIL};

// A paragraph shaped like real prose: a few numbers buried in digit noise
// that the matcher has to classify away.
const TEXT: &str = "Released 10/12/2011, build 2012-01-02 08:00. Sales: (650) 253-0000 x123, \
support 415-555-1212 or +44 20 7031 3000. See VLDB J. 12(3): 211-227 (2003) \
for details, or stop by room 5.";

fn bench_find_numbers(c: &mut Criterion) {
    // Force the one-off pattern compilation out of the measurement.
    let warmup: Vec<_> = PHONE_NUMBER_UTIL.find_numbers(TEXT, "US").collect();
    assert_eq!(warmup.len(), 3);

    c.bench_function("find_numbers/valid", |b| {
        b.iter(|| {
            PhoneNumberMatcher::new(&PHONE_NUMBER_UTIL, black_box(TEXT), "US").count()
        })
    });

    c.bench_function("find_numbers/exact_grouping", |b| {
        b.iter(|| {
            PhoneNumberMatcher::with_options(
                &PHONE_NUMBER_UTIL,
                black_box(TEXT),
                "US",
                Leniency::ExactGrouping,
                i32::MAX,
            )
            .count()
        })
    });

    c.bench_function("find_numbers/no_numbers", |b| {
        let noise = "nothing to see here, move along; released 10/12/2011 at 08:00".repeat(8);
        b.iter(|| PhoneNumberMatcher::new(&PHONE_NUMBER_UTIL, black_box(&noise), "US").count())
    });
}

criterion_group!(benches, bench_find_numbers);
criterion_main!(benches);
