//! Strict validation of calendar dates sent by clients.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Check whether `text` is a real calendar date written exactly as `YYYY-MM-DD`.
///
/// The year must be four digits without a sign, and the month and day must be
/// zero-padded to two digits. Leading or trailing characters are rejected.
pub fn is_valid_date(text: &str) -> bool {
    has_date_shape(text) && Date::parse(text, DATE_FORMAT).is_ok()
}

// `Date::parse` also accepts a signed year, so check the layout first.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::is_valid_date;

    #[test]
    fn accepts_real_dates() {
        for date in [
            "2024-03-10",
            "2024-01-01",
            "2024-12-31",
            "2024-02-29",
            "2000-02-29",
            "1999-04-30",
        ] {
            assert!(is_valid_date(date), "want {date:?} to be valid");
        }
    }

    #[test]
    fn rejects_impossible_days_and_months() {
        for date in [
            "2024-13-01",
            "2024-00-10",
            "2024-01-32",
            "2024-01-00",
            "2023-02-29",
            "1900-02-29",
            "2024-04-31",
        ] {
            assert!(!is_valid_date(date), "want {date:?} to be invalid");
        }
    }

    #[test]
    fn rejects_other_formats() {
        for date in [
            "01-01-2024",
            "2024/01/01",
            "2024.01.01",
            "20240101",
            "2024-1-01",
            "2024-01-1",
            "24-01-01",
            "+024-01-01",
            "-024-01-01",
            "",
        ] {
            assert!(!is_valid_date(date), "want {date:?} to be invalid");
        }
    }

    #[test]
    fn rejects_extra_characters() {
        for date in [
            " 2024-01-01",
            "2024-01-01 ",
            "2024-01-01T00:00:00",
            "2024-01-01Z",
            "x2024-01-01",
        ] {
            assert!(!is_valid_date(date), "want {date:?} to be invalid");
        }
    }
}
