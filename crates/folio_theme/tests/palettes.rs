use folio_theme::{Rgb, StyleVariable, ThemeName};

#[test]
fn palette_catalog_contains_expected_themes() {
    let ids: Vec<&str> = ThemeName::all().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["indigo", "green", "purple"]);
}

#[test]
fn palettes_use_expected_triples() {
    let expected = [
        (ThemeName::Indigo, ["48 44 233", "67 56 202", "79 70 229"]),
        (ThemeName::Green, ["22 163 74", "21 128 61", "34 197 94"]),
        (ThemeName::Purple, ["124 58 237", "109 40 217", "168 85 247"]),
    ];

    for (theme, triples) in expected {
        let palette = theme.palette();
        for (variable, triple) in StyleVariable::all().iter().zip(triples) {
            assert_eq!(
                palette.get(*variable),
                triple.parse::<Rgb>().unwrap(),
                "theme={theme:?} variable={variable:?}"
            );
        }
    }
}

#[test]
fn palettes_are_distinct() {
    let all = ThemeName::all();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.palette(), b.palette(), "{a:?} and {b:?} share a palette");
        }
    }
}

#[test]
fn ids_round_trip_through_lookup() {
    for theme in ThemeName::all() {
        assert_eq!(ThemeName::from_id(theme.id()), Some(*theme));
        assert_eq!(theme.id().parse::<ThemeName>(), Ok(*theme));
    }
}

#[test]
fn style_variable_names_match_stylesheet() {
    let names: Vec<&str> = StyleVariable::all().iter().map(|v| v.css_name()).collect();
    assert_eq!(
        names,
        vec!["--color-primary-500", "--color-primary-600", "--color-border-color"]
    );
}
