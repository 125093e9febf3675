//! Fuzz target for the insight detectors.
//!
//! Builds numeric tables from arbitrary floats (including NaN and infinities
//! stored as values) and checks the engine never panics and keeps
//! percentages in range.

#![no_main]

use arbitrary::Arbitrary;
use autoeda::{Column, InsightEngine, Table};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    rows: u8,
    cells: Vec<Option<f64>>,
    columns: u8,
}

fuzz_target!(|input: Input| {
    let rows = input.rows as usize;
    let columns = (input.columns % 6) as usize + 1;

    let table_columns: Vec<Column> = (0..columns)
        .map(|c| {
            let values = (0..rows).map(|r| {
                input
                    .cells
                    .get(c * rows + r)
                    .copied()
                    .flatten()
            });
            Column::numeric(format!("c{c}"), values)
        })
        .collect();

    let Ok(table) = Table::new(table_columns) else {
        return;
    };

    let run = InsightEngine::new().run(&table);
    for row in &run.outliers.rows {
        assert!((0.0..=100.0).contains(&row.outlier_pct));
    }
    for row in &run.cardinality {
        assert!((0.0..=100.0).contains(&row.uniqueness_pct));
    }
});
