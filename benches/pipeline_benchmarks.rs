//! Performance benchmarks for the payroll engine pipeline.
//!
//! Covers both halves of the core separately: HTML report extraction and
//! metric calculation, each over growing report sizes.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use payroll_engine::calculation::{MalformedRowPolicy, compute_report};
use payroll_engine::extract::extract_records;
use payroll_engine::models::{PunchRecord, RateTable, ShiftSchedule};

/// Builds an export with a decoy navigation table and `rows` data rows.
fn report_html(rows: usize) -> String {
    let mut doc = String::from(
        "<html><body>\
         <table><tr><td>Menu</td><td>Reports</td></tr></table>\
         <table border=\"1\">\
         <tr><th>Date</th><th>ID Number</th><th>Name</th>\
             <th>Punch 1</th><th>Punch 2</th><th>Punch 3</th><th>Punch 4</th></tr>",
    );
    for i in 0..rows {
        doc.push_str(&format!(
            "<tr><td>2025-03-14</td><td>{i}</td><td>Employee {i}</td>\
             <td>08:05:00</td><td>12:00:00</td><td>13:00:00</td><td>17:20:00</td></tr>"
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn punch_records(count: usize) -> Vec<PunchRecord> {
    (0..count)
        .map(|i| PunchRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            employee_id: i.to_string(),
            employee_name: format!("Employee {i}"),
            first_in: "08:05:00".to_string(),
            last_out: "17:20:00".to_string(),
        })
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    for size in [10usize, 100, 1000] {
        let doc = report_html(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| extract_records(black_box(doc)).unwrap());
        });
    }
    group.finish();
}

fn bench_calculation(c: &mut Criterion) {
    let schedule = ShiftSchedule::new(
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    );
    let mut rates = RateTable::new();
    rates.set("0", Decimal::from(5));

    let mut group = c.benchmark_group("calculation");
    for size in [10usize, 100, 1000] {
        let records = punch_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                compute_report(
                    black_box(records),
                    &schedule,
                    &rates,
                    MalformedRowPolicy::FailFast,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extraction, bench_calculation);
criterion_main!(benches);
