mod common;

use common::{date, entry, temp_path};
use std::fs;
use worklogbook::core::add_week::{AddWeekLogic, DayDraft};
use worklogbook::errors::AppError;
use worklogbook::models::LogEntry;
use worklogbook::models::activity::{activity_label, is_known_activity, normalize_code};
use worklogbook::models::entry::{day_index_from_key, day_name, is_sunday, week_ending, week_start};
use worklogbook::store::{CsvEntryStore, EntryStore, MemoryEntryStore, filter_range, month_span, with_entry};
use worklogbook::utils::date::{months_in_range, parse_date, sundays_in_month};
use worklogbook::utils::parse_range;

#[test]
fn test_week_ending_is_following_sunday() {
    // Saturday
    assert_eq!(week_ending(date("2025-11-01")), date("2025-11-02"));
    // Sunday closes its own week
    assert_eq!(week_ending(date("2025-11-02")), date("2025-11-02"));
    // Monday
    assert_eq!(week_ending(date("2025-11-03")), date("2025-11-09"));
    // across a year boundary
    assert_eq!(week_ending(date("2025-12-29")), date("2026-01-04"));
}

#[test]
fn test_log_entry_derives_day_and_week() {
    let e = LogEntry::new(date("2025-11-01"), " 4.2 ", "Did things", Some("  "), Some("Fixed it"));
    assert_eq!(e.day_name, "SATURDAY");
    assert_eq!(e.week_ending, date("2025-11-02"));
    assert_eq!(e.activity_code, "4.2");
    assert_eq!(e.problem, None);
    assert_eq!(e.solution.as_deref(), Some("Fixed it"));
    assert_eq!(day_name(date("2025-11-03")), "MONDAY");
}

#[test]
fn test_sundays_in_month() {
    let nov = sundays_in_month(date("2025-11-01"));
    assert_eq!(nov.len(), 5);
    assert!(nov.iter().all(|d| is_sunday(*d)));
    assert_eq!(nov[0], date("2025-11-02"));

    // month starting on a Sunday
    let feb = sundays_in_month(date("2026-02-15"));
    assert_eq!(feb, vec![
        date("2026-02-01"),
        date("2026-02-08"),
        date("2026-02-15"),
        date("2026-02-22"),
    ]);
}

#[test]
fn test_months_in_range() {
    let months = months_in_range(date("2025-11-20"), date("2026-01-03"));
    assert_eq!(months, vec![date("2025-11-01"), date("2025-12-01"), date("2026-01-01")]);
}

#[test]
fn test_parse_date_accepts_datetime() {
    assert_eq!(parse_date("2025-11-03"), Some(date("2025-11-03")));
    assert_eq!(parse_date("2025-11-03 00:00:00"), Some(date("2025-11-03")));
    assert_eq!(parse_date("03/11/2025"), None);
}

#[test]
fn test_parse_range_shapes() {
    assert_eq!(
        parse_range("2025-11").unwrap(),
        (date("2025-11-01"), date("2025-11-30"))
    );
    assert_eq!(
        parse_range("2025").unwrap(),
        (date("2025-01-01"), date("2025-12-31"))
    );
    assert_eq!(
        parse_range("2025-10:2025-12").unwrap(),
        (date("2025-10-01"), date("2025-12-31"))
    );
    assert_eq!(
        parse_range("2025-11-03").unwrap(),
        (date("2025-11-03"), date("2025-11-03"))
    );

    assert!(matches!(parse_range("2025-11-10:2025-11-01"), Err(AppError::InvalidRange(_))));
    assert!(matches!(parse_range("2025-11:2025-11-30"), Err(AppError::InvalidRange(_))));
    assert!(parse_range("nov").is_err());
}

#[test]
fn test_activity_codes() {
    assert_eq!(normalize_code("4.2 - Program code"), Some("4.2"));
    assert_eq!(normalize_code("other"), Some("Other"));
    assert_eq!(normalize_code("7.7"), None);
    assert_eq!(activity_label("22.1"), Some("Cloud Computing Tasks"));
    assert!(is_known_activity("9.1"));
}

#[test]
fn test_with_entry_rejects_empty_description() {
    let table = with_entry(Vec::new(), entry("2025-11-03", "4.2", "ok")).expect("valid entry");
    assert_eq!(table.len(), 1);

    let err = with_entry(table, entry("2025-11-04", "4.2", "   ")).unwrap_err();
    assert!(matches!(err, AppError::EmptyDescription(_)));
}

#[test]
fn test_memory_store_append_and_clear() {
    let mut store = MemoryEntryStore::new();
    store.append(entry("2025-11-03", "4.2", "one")).unwrap();
    let added = store
        .append_many(vec![
            entry("2025-11-04", "4.3", "two"),
            entry("2025-11-05", "4.3", "three"),
        ])
        .unwrap();
    assert_eq!(added, 2);
    assert_eq!(store.load_all().unwrap().len(), 3);

    store.clear().unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_filter_range_and_month_span() {
    let entries = vec![
        entry("2025-10-30", "4.2", "a"),
        entry("2025-11-03", "4.2", "b"),
        entry("2025-12-02", "4.2", "c"),
    ];

    let nov = filter_range(&entries, date("2025-11-01"), date("2025-11-30"));
    assert_eq!(nov.len(), 1);
    assert_eq!(nov[0].description, "b");

    assert_eq!(
        month_span(&entries),
        Some((date("2025-10-01"), date("2025-12-31")))
    );
    assert_eq!(month_span(&[]), None);
}

#[test]
fn test_csv_store_round_trip() {
    let path = temp_path("csv_round_trip", "csv");
    let mut store = CsvEntryStore::new(&path);

    assert!(store.load_all().unwrap().is_empty());
    assert!(path.exists());

    let first = LogEntry::new(
        date("2025-11-03"),
        "4.2",
        "Wrote, with a comma",
        Some("Flaky test"),
        Some("Added retry"),
    );
    store.append(first.clone()).unwrap();
    store.append(entry("2025-11-04", "Other", "Second")).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], first);
    assert_eq!(loaded[1].problem, None);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Date,Day,Week_Ending,Activity_Code,Description,Problems,Solutions"));
    assert!(text.contains("2025-11-03,MONDAY,2025-11-09,4.2"));
}

#[test]
fn test_csv_store_reads_datetime_dates() {
    let path = temp_path("csv_datetime", "csv");
    fs::write(
        &path,
        "Date,Day,Week_Ending,Activity_Code,Description,Problems,Solutions\n\
         2025-11-03 00:00:00,Monday,2025-11-09 00:00:00,4.2,Imported,,\n",
    )
    .unwrap();

    let loaded = CsvEntryStore::new(&path).load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].date, date("2025-11-03"));
    assert_eq!(loaded[0].day_name, "MONDAY");
    assert_eq!(loaded[0].week_ending, date("2025-11-09"));
}

#[test]
fn test_csv_store_refuses_empty_description() {
    let path = temp_path("csv_empty_desc", "csv");
    let mut store = CsvEntryStore::new(&path);

    let err = store.append(entry("2025-11-03", "4.2", "")).unwrap_err();
    assert!(matches!(err, AppError::EmptyDescription(_)));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_csv_store_clear() {
    let path = temp_path("csv_clear", "csv");
    let mut store = CsvEntryStore::new(&path);
    store.append(entry("2025-11-03", "4.2", "gone soon")).unwrap();

    store.clear().unwrap();
    assert!(!path.exists());
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_csv_store_skips_unreadable_rows() {
    let path = temp_path("csv_bad_row", "csv");
    fs::write(
        &path,
        "Date,Day,Week_Ending,Activity_Code,Description,Problems,Solutions\n\
         2025-11-03,MONDAY,2025-11-09,4.2,Good row,,\n\
         2025-11-04,TUESDAY,,4.2,No week ending,,\n\
         not-a-date,WEDNESDAY,2025-11-09,4.2,Bad date,,\n",
    )
    .unwrap();

    let store = CsvEntryStore::new(&path);
    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "Good row");

    let checked = store.load_checked().unwrap();
    let lines: Vec<usize> = checked.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![3, 4]);
    assert!(checked.rejected[1].reason.contains("not-a-date"));
}

#[test]
fn test_csv_store_append_keeps_unreadable_rows() {
    let path = temp_path("csv_append_bad_row", "csv");
    fs::write(
        &path,
        "Date,Day,Week_Ending,Activity_Code,Description,Problems,Solutions\n\
         2025-11-04,TUESDAY,,4.2,Fix me by hand,,",
    )
    .unwrap();

    let mut store = CsvEntryStore::new(&path);
    store.append(entry("2025-11-05", "4.2", "Appended")).unwrap();
    let added = store
        .append_many(vec![entry("2025-11-06", "4.3", "Batch one"), entry("2025-11-07", "4.3", "Batch two")])
        .unwrap();
    assert_eq!(added, 2);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("2025-11-04,TUESDAY,,4.2,Fix me by hand"));

    let checked = store.load_checked().unwrap();
    assert_eq!(checked.entries.len(), 3);
    assert_eq!(checked.entries[0].description, "Appended");
    assert_eq!(checked.rejected.len(), 1);
    assert_eq!(checked.rejected[0].line, 2);
}

#[test]
fn test_csv_store_append_many_is_all_or_nothing() {
    let path = temp_path("csv_append_many_empty", "csv");
    let mut store = CsvEntryStore::new(&path);

    let err = store
        .append_many(vec![entry("2025-11-03", "4.2", "Fine"), entry("2025-11-04", "4.2", " ")])
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyDescription(_)));
    assert!(store.load_all().unwrap().is_empty());
}

fn draft(description: &str) -> DayDraft {
    DayDraft {
        description: description.to_string(),
        ..DayDraft::default()
    }
}

#[test]
fn test_week_start_and_day_keys() {
    assert_eq!(week_start(date("2025-11-05")), date("2025-11-03"));
    assert_eq!(week_start(date("2025-11-03")), date("2025-11-03"));
    assert_eq!(week_start(date("2025-11-09")), date("2025-11-03"));

    assert_eq!(day_index_from_key("mon"), Some(0));
    assert_eq!(day_index_from_key("Wednesday"), Some(2));
    assert_eq!(day_index_from_key("SUN"), Some(6));
    assert_eq!(day_index_from_key("t"), None);
    assert_eq!(day_index_from_key("funday"), None);
}

#[test]
fn test_add_week_skips_blank_days() {
    let mut store = MemoryEntryStore::new();
    let mut days = vec![draft(""); 7];
    days[0] = draft("Monday work");
    days[2] = DayDraft {
        code: Some("4.3 - Test programs".to_string()),
        problem: Some("Flaky CI".to_string()),
        ..draft("Wednesday work")
    };
    days[4] = draft("   ");
    days[6] = draft("Sunday catch-up");

    // any day of the week selects it
    let saved = AddWeekLogic::apply(&mut store, None, date("2025-11-07"), &days, "4.2").unwrap();
    assert_eq!(saved.len(), 3);

    let stored = store.load_all().unwrap();
    let dates: Vec<String> = stored.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-11-03", "2025-11-05", "2025-11-09"]);
    assert!(stored.iter().all(|e| e.week_ending == date("2025-11-09")));
    assert_eq!(stored[0].activity_code, "4.2");
    assert_eq!(stored[1].activity_code, "4.3");
    assert_eq!(stored[1].day_name, "WEDNESDAY");
    assert_eq!(stored[1].problem.as_deref(), Some("Flaky CI"));
    assert_eq!(stored[2].day_name, "SUNDAY");
}

#[test]
fn test_add_week_rejects_unknown_code_without_saving() {
    let mut store = MemoryEntryStore::new();
    let mut days = vec![draft(""); 7];
    days[0] = draft("Fine");
    days[1] = DayDraft {
        code: Some("7.7".to_string()),
        ..draft("Bad code")
    };

    let err = AddWeekLogic::apply(&mut store, None, date("2025-11-03"), &days, "4.2").unwrap_err();
    assert!(matches!(err, AppError::InvalidActivity(_)));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_add_week_with_no_descriptions_saves_nothing() {
    let mut store = MemoryEntryStore::new();
    let saved = AddWeekLogic::apply(&mut store, None, date("2025-11-03"), &vec![draft(" "); 7], "4.2").unwrap();
    assert!(saved.is_empty());
    assert!(store.load_all().unwrap().is_empty());
}
