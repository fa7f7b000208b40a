use super::*;

#[test]
fn parse_round_trips_storage_values() {
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn next_cycles_through_all_three() {
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::System);
    assert_eq!(Theme::System.next(), Theme::Light);
}

#[test]
fn system_follows_browser_preference() {
    assert!(Theme::System.is_dark(true));
    assert!(!Theme::System.is_dark(false));
    assert!(Theme::Dark.is_dark(false));
    assert!(!Theme::Light.is_dark(true));
}

#[test]
fn logo_matches_background() {
    assert_eq!(logo_src(true), "/logos/Logo White.png");
    assert_eq!(logo_src(false), "/logos/Logo Black.png");
}

#[test]
fn theme_attr_names_the_effective_scheme() {
    assert_eq!(theme_attr(true), "dark");
    assert_eq!(theme_attr(false), "light");
    assert_eq!(theme_attr(Theme::System.is_dark(true)), "dark");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_outside_hydrate() {
    assert_eq!(read_preference(), Theme::System);
    assert!(!system_prefers_dark());
    persist(Theme::Dark);
    apply(true);
}
