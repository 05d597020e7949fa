use super::*;
use std::collections::HashSet;

fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>, what: &str) {
    let mut seen = HashSet::new();
    for key in keys {
        assert!(seen.insert(key), "duplicate {what}: {key}");
    }
}

// =============================================================
// Catalog shape
// =============================================================

#[test]
fn catalog_record_counts() {
    assert_eq!(CATALOG.partners.len(), 5);
    assert_eq!(CATALOG.outcomes.len(), 4);
    assert_eq!(CATALOG.programs.len(), 6);
    assert_eq!(CATALOG.steps.len(), 3);
    assert_eq!(CATALOG.testimonials.len(), 3);
    assert_eq!(CATALOG.plans.len(), 3);
    assert_eq!(CATALOG.faqs.len(), 5);
}

#[test]
fn catalog_render_keys_are_unique() {
    assert_unique(CATALOG.partners.iter().copied(), "partner");
    assert_unique(CATALOG.programs.iter().map(|p| p.title), "program");
    assert_unique(CATALOG.steps.iter().map(|s| s.title), "step");
    assert_unique(CATALOG.testimonials.iter().map(|t| t.name), "testimonial");
    assert_unique(CATALOG.plans.iter().map(|p| p.name), "plan");
    assert_unique(CATALOG.faqs.iter().map(|f| f.question), "faq");
}

#[test]
fn exactly_one_plan_is_featured() {
    let featured = CATALOG.plans.iter().filter(|p| p.featured).map(|p| p.name).collect::<Vec<_>>();
    assert_eq!(featured, vec!["Pro"]);
}

#[test]
fn plans_list_features() {
    assert!(CATALOG.plans.iter().all(|p| !p.features.is_empty()));
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn step_labels_are_zero_padded() {
    assert_eq!(Step::label(0), "01");
    assert_eq!(Step::label(2), "03");
    assert_eq!(Step::label(9), "10");
}

#[test]
fn plan_classes_follow_featured_flag() {
    let starter = &CATALOG.plans[0];
    let pro = &CATALOG.plans[1];
    assert_eq!(starter.card_class(), "price-card");
    assert_eq!(starter.cta_class(), "btn btn-secondary");
    assert_eq!(pro.card_class(), "price-card featured");
    assert_eq!(pro.cta_class(), "btn btn-primary");
    assert_eq!(pro.aria_label(), "Pro plan");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn primary_nav_links_are_in_page_anchors() {
    assert!(PRIMARY_NAV.iter().all(|link| link.href.starts_with('#')));
    assert!(FOOTER_NAV.iter().all(|link| link.href.starts_with('#')));
}

#[test]
fn primary_nav_ends_with_cta() {
    let last = PRIMARY_NAV.last().copied();
    assert_eq!(last.map(|l| l.label), Some("Start free trial"));
    assert_eq!(last.and_then(|l| l.class), Some("btn btn-primary nav-cta"));
}

#[test]
fn only_the_cta_link_carries_a_class() {
    let classed = PRIMARY_NAV.iter().filter(|l| l.class.is_some()).map(|l| l.label).collect::<Vec<_>>();
    assert_eq!(classed, vec!["Start free trial"]);
    assert!(FOOTER_NAV.iter().all(|l| l.class.is_none()));
}
