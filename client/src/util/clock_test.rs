use super::*;

#[test]
#[cfg(not(feature = "hydrate"))]
fn current_year_is_plausible() {
    let year = current_year();
    assert!((2024..3000).contains(&year), "unexpected year {year}");
}

#[test]
fn copyright_line_includes_year_and_brand() {
    assert_eq!(copyright_line(2026, "Learnora"), "© 2026 Learnora. All rights reserved.");
}
