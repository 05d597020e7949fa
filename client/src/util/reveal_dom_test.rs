use super::*;
use motion::reveal::RevealConfig;

#[test]
fn delay_css_value_uses_milliseconds() {
    assert_eq!(delay_css_value(0), "0ms");
    assert_eq!(delay_css_value(350), "350ms");
}

#[test]
fn delay_css_values_for_default_stagger_cycle() {
    let config = RevealConfig::default();
    let values = (0..7).map(|i| delay_css_value(config.stagger_delay_ms(i))).collect::<Vec<_>>();
    assert_eq!(values, ["0ms", "70ms", "140ms", "210ms", "280ms", "350ms", "0ms"]);
}
