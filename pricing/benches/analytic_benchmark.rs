// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::analytic::OptionPrice;
use pricing::common::models::Asset;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_closed_form_valuation);
criterion_main!(benches);

pub fn criterion_closed_form_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Closed form option valuation");

    group.bench_function("call and put prices across a strike chain", |b| {
        b.iter(|| price_strike_chain(black_box((300.0, 0.03, 0.15))))
    });

    group.finish()
}

fn price_strike_chain((initial_price, rfr, vola): (f64, f64, f64)) {
    let asset = Asset::without_dividends(initial_price, rfr, vola).unwrap();

    for strike in [250.0, 275.0, 300.0, 325.0, 350.0] {
        let call = asset.call(strike, 1.0).unwrap();
        let put = asset.put(strike, 1.0).unwrap();
        assert!(call >= 0.0 && put >= 0.0);
    }
}
