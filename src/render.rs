//! Plain-text rendering of countdowns and record views.

use chrono::NaiveDate;

use crate::age;
use crate::countdown::days_until_next_birthday;
use crate::records::BirthdayRecord;

const LIST_ALIGN_WIDTH: usize = 36;

/// The consumer-facing countdown message.
pub fn countdown_message(days: u32) -> String {
    if days == 0 {
        "Happy birthday!".to_string()
    } else {
        format!("{} day{} left", days, age::plural(days as i32))
    }
}

/// One aligned list line per record: `Name ........ N days left`.
pub fn list(records: &[BirthdayRecord], reference: NaiveDate) -> String {
    let mut out = String::new();
    for record in records {
        let days = days_until_next_birthday(record.birthday, reference);
        out.push_str(&list_row(&record.full_name(), &countdown_message(days)));
        out.push('\n');
    }
    out
}

/// Full view of a single record with age and countdown.
pub fn detail(record: &BirthdayRecord, reference: NaiveDate) -> String {
    let days = days_until_next_birthday(record.birthday, reference);
    let age = age::age_on(record.birthday, reference);
    format!(
        "{name}\n  Birthday: {birthday}\n  Age: {age}\n  {message}\n",
        name = record.full_name(),
        birthday = record.birthday.format("%Y-%m-%d"),
        message = countdown_message(days),
    )
}

fn list_row(key: &str, value: &str) -> String {
    let key_part = format!("{key} ");
    let available = LIST_ALIGN_WIDTH.saturating_sub(key_part.len());
    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };
    format!("{key_part}{dots}{value}")
}
