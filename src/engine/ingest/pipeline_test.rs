use crate::engine::core::MAX_ROWS;
use crate::engine::ingest::errors::IngestError;
use crate::engine::ingest::pipeline::ingest_records;
use crate::shared::datetime::HourBucketer;
use crate::test_helpers::Factory;

#[test]
fn clean_batch_produces_rows_and_a_summary() {
    crate::logging::init_for_tests();
    let records = Factory::raw_record().create_list(3);

    let report = ingest_records(&records, &HourBucketer::utc()).unwrap();

    assert_eq!(report.stats.total, 3);
    assert_eq!(report.stats.valid, 3);
    assert_eq!(report.stats.invalid, 0);
    assert!(report.issues.is_empty());
    assert_eq!(report.summary.unwrap().total.count, 3);
}

#[test]
fn bad_rows_are_dropped_without_aborting_the_batch() {
    let records = vec![
        Factory::raw_record().create(),
        Factory::raw_record().with("status", "refunded").create(),
        Factory::raw_record().with("ts", "not a time").create(),
        Factory::raw_record().create(),
    ];

    let report = ingest_records(&records, &HourBucketer::utc()).unwrap();

    assert_eq!(report.stats.total, 4);
    assert_eq!(report.stats.valid, 2);
    assert_eq!(report.stats.invalid, 2);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.summary.unwrap().total.count, 2);
}

#[test]
fn issues_carry_one_based_indices_in_input_order() {
    let records = vec![
        Factory::raw_record().with("qty", "??").create(),
        Factory::raw_record().create(),
        Factory::raw_record().without("name").create(),
    ];

    let report = ingest_records(&records, &HourBucketer::utc()).unwrap();

    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].index, 1);
    assert_eq!(report.issues[1].index, 3);
    assert_eq!(report.issues[1].message, "name is required");
}

#[test]
fn empty_input_yields_no_summary() {
    let report = ingest_records(&[], &HourBucketer::utc()).unwrap();

    assert!(report.rows.is_empty());
    assert!(report.summary.is_none());
    assert_eq!(report.stats.total, 0);
}

#[test]
fn all_invalid_rows_also_yield_no_summary() {
    let records = vec![
        Factory::raw_record().with("status", "refunded").create(),
        Factory::raw_record().with("status", "maybe").create(),
    ];

    let report = ingest_records(&records, &HourBucketer::utc()).unwrap();

    assert!(report.summary.is_none());
    assert_eq!(report.stats.invalid, 2);
}

#[test]
fn batch_at_the_row_cap_aggregates() {
    let records = Factory::raw_record().create_list(MAX_ROWS);

    let report = ingest_records(&records, &HourBucketer::utc()).unwrap();

    assert_eq!(report.stats.valid, MAX_ROWS);
    assert_eq!(report.summary.unwrap().total.count, MAX_ROWS as u64);
}

#[test]
fn batch_over_the_row_cap_fails_atomically_with_counts() {
    let mut records = Factory::raw_record().create_list(MAX_ROWS + 1);
    records.push(Factory::raw_record().with("status", "refunded").create());

    let err = ingest_records(&records, &HourBucketer::utc()).unwrap_err();

    match err {
        IngestError::TooManyRows {
            limit,
            stats,
            issues,
        } => {
            assert_eq!(limit, MAX_ROWS);
            assert_eq!(stats.total, MAX_ROWS + 2);
            assert_eq!(stats.valid, MAX_ROWS + 1);
            assert_eq!(stats.invalid, 1);
            assert_eq!(issues.len(), 1);
        }
        other => panic!("expected TooManyRows, got {other:?}"),
    }
}

#[test]
fn invalid_rows_do_not_count_against_the_cap() {
    // MAX_ROWS valid rows plus a handful of invalid ones must still pass.
    let mut records = Factory::raw_record().create_list(MAX_ROWS);
    records.push(Factory::raw_record().with("status", "refunded").create());
    records.push(Factory::raw_record().with("qty", "??").create());

    let report = ingest_records(&records, &HourBucketer::utc()).unwrap();

    assert_eq!(report.stats.valid, MAX_ROWS);
    assert_eq!(report.stats.invalid, 2);
}
