// tests/town_view.rs
//
// Loading, reshaping and per-town series without the UI.

mod common;

use std::fs;
use std::path::PathBuf;

use housing_scrape::{
    data::{load_and_prepare, PriceTable, CHANGE_COLUMNS, PRICE_COLUMNS},
    gui::components::bar_chart::{fmt_value, value_range},
    store::{load_dataset, DataSet, Memo},
    Error,
};
use pretty_assertions::assert_eq;

use common::tmp_dir;

// Columns shuffled, dc1y missing, one extra column, Acton twice.
const PREPARED: &str = "\
Town,pr2003,pr2008,pr2012,pr2013,pc1y,pc5y,pc10y,dm2013,dm2012,Notes
Acton,\"$400,000\",\"$430,000\",\"$445,000\",\"$451,000\",1.3,4.9,12.8,61,70,x
Arlington,350000,420000,560000,610000,8.9,45.2,-2.5,35,41,
Acton,1,1,1,1,1,1,1,1,1,dup
";

fn fixture(name: &str, text: &str) -> PathBuf {
    let path = tmp_dir(name).join("housingData2014prepared.csv");
    fs::write(&path, text).unwrap();
    path
}

fn prepared(name: &str) -> PriceTable {
    load_and_prepare(&fixture(name, PREPARED)).unwrap()
}

#[test]
fn columns_are_reordered_and_renamed() {
    let t = prepared("reorder");
    assert_eq!(
        t.headers(),
        &[
            "Town",
            "2013 Price",
            "2012 Price",
            "2008 Price",
            "2003 Price",
            "1Yr Change",
            "5Yr Change",
            "10Yr Change",
            "2013 Days on Market",
            "2012 Days on Market",
            "1Yr DOM Change",
        ]
    );
    // All rows kept, extra column gone, missing column empty.
    assert_eq!(t.row_count(), 3);
    assert_eq!(t.rows()[1][0], "Arlington");
    assert_eq!(t.rows()[1][1], "610000");
    assert_eq!(t.rows()[1][10], "");
}

#[test]
fn selecting_a_town_transposes_its_prices() {
    let t = prepared("select");
    let s = t.series("Arlington", PRICE_COLUMNS).unwrap();

    assert_eq!(s.town, "Arlington");
    let labels: Vec<&str> = s.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, PRICE_COLUMNS);
    assert_eq!(
        s.values(),
        vec![Some(610000.0), Some(560000.0), Some(420000.0), Some(350000.0)]
    );
}

#[test]
fn formatted_cells_still_chart() {
    let t = prepared("formatted");
    let s = t.series("Acton", PRICE_COLUMNS).unwrap();
    assert_eq!(s.bars[0].raw, "$451,000");
    assert_eq!(s.bars[0].value, Some(451000.0));
}

#[test]
fn first_row_wins_for_duplicate_towns() {
    let t = prepared("dups");
    assert_eq!(t.towns(), &["Acton", "Arlington"]);
    assert_eq!(t.row_index("Acton"), Some(0));
    let s = t.series("Acton", CHANGE_COLUMNS).unwrap();
    assert_eq!(s.values(), vec![Some(1.3), Some(4.9), Some(12.8)]);
}

#[test]
fn unknown_town_is_an_error() {
    let t = prepared("unknown");
    assert!(matches!(t.series("Boston", PRICE_COLUMNS), Err(Error::UnknownTown(ref town)) if town == "Boston"));
}

#[test]
fn file_without_town_column_is_rejected() {
    let path = fixture("nokey", "City,pr2013\nActon,1\n");
    let err = load_and_prepare(&path).unwrap_err();
    assert!(matches!(err, Error::MissingKeyColumn { .. }), "got {err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = tmp_dir("missing").join("nope.csv");
    assert!(matches!(load_and_prepare(&path), Err(Error::Io { .. })));
}

#[test]
fn numeric_columns_skip_the_key() {
    let t = prepared("numeric");
    let numeric = t.numeric_columns();
    assert!(!numeric[0]);
    assert!(numeric[1..].iter().all(|n| *n));
    // worked out once at load, not per call
    assert!(std::ptr::eq(numeric, t.numeric_columns()));
}

#[test]
fn ragged_rows_load() {
    let path = fixture("ragged", "Town,pr2013\nActon\nArlington,5,extra\n");
    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.rows, vec![vec!["Acton".to_string()], vec!["Arlington".into(), "5".into(), "extra".into()]]);

    let t = PriceTable::prepare(&ds, &path).unwrap();
    assert_eq!(t.rows()[0][1], "");
    assert_eq!(t.rows()[1][1], "5");
}

#[test]
fn memo_loads_once() {
    let path = fixture("memo", PREPARED);
    let memo: Memo<PriceTable> = Memo::new();

    let a = memo.get_or_load(|| load_and_prepare(&path)).unwrap();
    fs::remove_file(&path).unwrap();
    let b = memo.get_or_load(|| load_and_prepare(&path)).unwrap();

    assert_eq!(memo.loads(), 1);
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn memo_does_not_keep_failures() {
    let memo: Memo<DataSet> = Memo::new();
    assert!(memo.get_or_load(|| Err(Error::UnknownTown("x".into()))).is_err());
    assert!(!memo.is_loaded());

    let ds = memo.get_or_load(|| Ok(DataSet::default())).unwrap();
    assert_eq!(ds.row_count(), 0);
    assert_eq!(memo.loads(), 2);
}

#[test]
fn chart_range_always_spans_zero() {
    assert_eq!(value_range(&[Some(5.0), Some(10.0)]), (0.0, 10.0));
    assert_eq!(value_range(&[Some(-2.5), Some(8.9), None]), (-2.5, 8.9));
    assert_eq!(value_range(&[None, None]), (0.0, 1.0));
    assert_eq!(value_range(&[]), (0.0, 1.0));
}

#[test]
fn chart_labels() {
    assert_eq!(fmt_value(451000.0), "451,000");
    assert_eq!(fmt_value(-1234567.0), "-1,234,567");
    assert_eq!(fmt_value(12.5), "12.5");
    assert_eq!(fmt_value(-3.0), "-3");
    assert_eq!(fmt_value(999.0), "999");
}
