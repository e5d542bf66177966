use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonelib::{
    PhoneNumber, PhoneNumberFormat, group,
    library::{StaticAreaLookup, StaticCountryLookup},
};

fn setup_numbers() -> Vec<PhoneNumber> {
    ["+46 8 774 02 12", "031-123 45 67", "+1 877 402 12", "+998 774 02 12 34 56 78"]
        .into_iter()
        .map(|raw| {
            let mut number = PhoneNumber::new(StaticCountryLookup::english(), "46");
            number.register_area_lookup(Arc::new(StaticAreaLookup::swedish()));
            number.set_raw(raw);
            number
        })
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut bench_group = c.benchmark_group("Formatting");

    for number_format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
    ] {
        bench_group.bench_function(format!("format_as({:?})", number_format), |b| {
            b.iter(|| {
                for number in &numbers {
                    number.format_as(black_box(number_format));
                }
            })
        });
    }

    bench_group.bench_function("group: 7 to 20 digits", |b| {
        let inputs = ["7740212", "87740212", "9987740212", "12345678901234567890"];
        b.iter(|| {
            for digits in inputs {
                group(black_box(digits));
            }
        })
    });

    bench_group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
