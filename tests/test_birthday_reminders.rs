//! Characterization of the weekly birthday-reminder schedule.
//!
//! Dates are anchored on October 2026: the 19th is a Monday, the 21st a
//! Wednesday and the 24th/25th are a weekend.

use address_book::models::{weekday_name, AddressBook, Record, REMINDER_WINDOW_DAYS};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn contact(name: &str, birthday: NaiveDate) -> Record {
    let mut record = Record::try_new(name).unwrap();
    record
        .set_birthday(&birthday.format("%d.%m.%Y").to_string())
        .unwrap();
    record
}

fn book_of(contacts: Vec<Record>) -> AddressBook {
    contacts.into_iter().collect()
}

#[test]
fn test_weekday_birthday_three_days_out() {
    let today = date(2026, 10, 19);
    let book = book_of(vec![contact("Ann", date(1990, 10, 22))]);

    let reminders = book.schedule_birthday_reminders(today);
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders.get(Weekday::Thu), Some(&["Ann".to_string()][..]));
    assert_eq!(
        reminders.iter().collect::<Vec<_>>(),
        vec![("Thursday", &["Ann".to_string()][..])]
    );
}

#[test]
fn test_birthday_today_is_included() {
    let today = date(2026, 10, 21);
    let book = book_of(vec![contact("Ann", date(1985, 10, 21))]);

    let reminders = book.schedule_birthday_reminders(today);
    assert_eq!(reminders.get(Weekday::Wed), Some(&["Ann".to_string()][..]));
}

#[test]
fn test_birthday_today_on_weekend_moves_to_monday() {
    // Saturday, delta 0 < 5.
    let today = date(2026, 10, 24);
    let book = book_of(vec![contact("Ann", date(1985, 10, 24))]);

    let reminders = book.schedule_birthday_reminders(today);
    assert_eq!(reminders.get(Weekday::Mon), Some(&["Ann".to_string()][..]));
    assert_eq!(reminders.get(Weekday::Sat), None);
}

#[test]
fn test_birthday_eight_days_out_is_excluded() {
    let today = date(2026, 10, 19);
    let book = book_of(vec![contact(
        "Ann",
        (today + Duration::days(REMINDER_WINDOW_DAYS + 1)).with_year(1990).unwrap(),
    )]);

    assert!(book.schedule_birthday_reminders(today).is_empty());
}

#[test]
fn test_passed_birthday_recurring_next_year_is_included() {
    // Tuesday 2026-12-29; 1 January 2027 is a Friday.
    let today = date(2026, 12, 29);
    let book = book_of(vec![
        contact("Ann", date(1990, 1, 1)),
        contact("Bob", date(1990, 1, 6)),
    ]);

    let reminders = book.schedule_birthday_reminders(today);
    assert_eq!(reminders.get(Weekday::Fri), Some(&["Ann".to_string()][..]));
    assert_eq!(reminders.len(), 1);
}

#[test]
fn test_weekend_shift_example() {
    // Thursday: Saturday is 2 days out (2 < 5), moved to Monday.
    let book = book_of(vec![contact("A", date(1990, 10, 24))]);
    let reminders = book.schedule_birthday_reminders(date(2026, 10, 22));
    assert_eq!(reminders.get(Weekday::Mon), Some(&["A".to_string()][..]));

    // Sunday: Saturday is 6 days out (6 is not < 5), stays on Saturday.
    let book = book_of(vec![contact("B", date(1990, 10, 24))]);
    let reminders = book.schedule_birthday_reminders(date(2026, 10, 18));
    assert_eq!(reminders.get(Weekday::Sat), Some(&["B".to_string()][..]));
}

#[test]
fn test_full_week_grouping_and_order() {
    let today = date(2026, 10, 19);
    let book = book_of(vec![
        contact("Sat5", date(1990, 10, 24)),
        contact("Tue1", date(1990, 10, 20)),
        contact("NoBirthdayNear", date(1990, 3, 1)),
        contact("Sun6", date(1990, 10, 25)),
        contact("Mon7", date(1990, 10, 26)),
        contact("Mon0", date(1990, 10, 19)),
    ]);

    let reminders = book.schedule_birthday_reminders(today);
    let groups = reminders
        .iter()
        .map(|(day, names)| (day.to_string(), names.to_vec()))
        .collect::<Vec<_>>();

    assert_eq!(
        groups,
        vec![
            ("Saturday".to_string(), vec!["Sat5".to_string()]),
            ("Tuesday".to_string(), vec!["Tue1".to_string()]),
            ("Sunday".to_string(), vec!["Sun6".to_string()]),
            (
                "Monday".to_string(),
                vec!["Mon7".to_string(), "Mon0".to_string()]
            ),
        ]
    );
}

#[test]
fn test_schedule_is_a_pure_query() {
    let book = book_of(vec![contact("Ann", date(1990, 10, 22))]);

    let first = book.schedule_birthday_reminders(date(2026, 10, 19));
    let _other_day = book.schedule_birthday_reminders(date(2026, 3, 1));
    let again = book.schedule_birthday_reminders(date(2026, 10, 19));

    assert_eq!(first, again);
    assert_eq!(book.len(), 1);
}

#[test]
fn test_every_day_of_a_year_stays_inside_window() {
    let book = book_of(vec![
        contact("Leap", date(2000, 2, 29)),
        contact("Eve", date(1990, 12, 31)),
        contact("New", date(1990, 1, 1)),
    ]);

    let mut today = date(2027, 1, 1);
    while today.year() == 2027 {
        for (day, names) in book.schedule_birthday_reminders(today).iter() {
            assert!(!names.is_empty());
            assert!(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                .contains(&day));
        }
        today += Duration::days(1);
    }

    assert_eq!(weekday_name(Weekday::Fri), "Friday");
}
