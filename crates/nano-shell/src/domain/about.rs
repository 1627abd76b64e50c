//! About panel contents.

use chrono::{Datelike, Local};
use serde::Serialize;

pub const APPLICATION_NAME: &str = "Lisk Nano";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPanel {
    pub application_name: String,
    pub copyright: String,
}

impl AboutPanel {
    pub fn for_year(year: i32) -> Self {
        Self {
            application_name: APPLICATION_NAME.to_string(),
            copyright: format!("Copyright © 2016 - {year} Lisk Foundation"),
        }
    }

    /// Panel for the current local year.
    pub fn current() -> Self {
        Self::for_year(Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        let about = AboutPanel::for_year(2017);
        assert_eq!(about.application_name, "Lisk Nano");
        assert_eq!(about.copyright, "Copyright © 2016 - 2017 Lisk Foundation");
    }

    #[test]
    fn test_current_uses_this_year() {
        let year = Local::now().year();
        assert!(AboutPanel::current().copyright.ends_with(&format!("{year} Lisk Foundation")));
    }
}
