//! Wall-clock helpers for rendered copy.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year, used by the footer copyright line.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line for `year`.
pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}
