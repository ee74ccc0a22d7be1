use js_sys::Date;
use wasm_bindgen::JsValue;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Local calendar components of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: u32,
    /// 0-based, as in JS
    pub month: u32,
    pub day: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DateParts {
    /// Parse anything `new Date(..)` accepts. Browser only.
    pub fn parse(value: &str) -> Option<Self> {
        let date = Date::new(&JsValue::from_str(value));
        if date.get_time().is_nan() {
            return None;
        }
        Some(Self::from_js(&date))
    }

    pub fn from_js(date: &Date) -> Self {
        Self {
            year: date.get_full_year(),
            month: date.get_month(),
            day: date.get_date(),
            hours: date.get_hours(),
            minutes: date.get_minutes(),
            seconds: date.get_seconds(),
        }
    }
}

/// `27 Oct 2025`
pub fn format_generated_date(parts: &DateParts) -> String {
    let month = MONTHS.get(parts.month as usize).copied().unwrap_or("???");
    format!("{} {} {}", parts.day, month, parts.year)
}

/// `11:35:11`
pub fn format_generated_time(parts: &DateParts) -> String {
    format!("{:02}:{:02}:{:02}", parts.hours, parts.minutes, parts.seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> DateParts {
        DateParts { year: 2025, month: 9, day: 27, hours: 9, minutes: 5, seconds: 1 }
    }

    #[test]
    fn date_uses_short_month_name() {
        assert_eq!(format_generated_date(&parts()), "27 Oct 2025");
    }

    #[test]
    fn time_is_zero_padded() {
        assert_eq!(format_generated_time(&parts()), "09:05:01");
    }
}
