//! Command handlers for the `wb` binary

pub mod cda;
pub mod dashboard;
pub mod directory;
pub mod maintenance;
pub mod property;
pub mod report;
pub mod street;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

/// Today's date in the registry's `YYYY-MM-DD` format.
pub(crate) fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Validate a user-supplied registration date, defaulting to today.
pub(crate) fn registration_date(value: Option<String>) -> Result<String> {
    match value {
        Some(value) => {
            if NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_err() {
                bail!("invalid date {value:?}, expected YYYY-MM-DD");
            }
            Ok(value)
        }
        None => Ok(today()),
    }
}

/// Ask a yes/no question on stdin. Defaults to "no".
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_dates_and_defaults_to_today() {
        assert_eq!(
            registration_date(Some("2023-03-15".into())).unwrap(),
            "2023-03-15"
        );
        assert_eq!(registration_date(None).unwrap(), today());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(registration_date(Some("15/03/2023".into())).is_err());
        assert!(registration_date(Some("not-a-date".into())).is_err());
    }
}
