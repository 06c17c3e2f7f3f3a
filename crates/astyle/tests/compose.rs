//! Integration tests for namespaces and class composition.

use astyle::prelude::*;

#[test]
fn later_namespace_overrides_earlier() {
    let mut styler = Styler::synthetic(StylerOptions::default());
    let base = style! { "color" => "black", "padding" => "4px" };
    let primary = style! { "color" => "white" };
    let entries = [("base", &base), ("primary", &primary)];
    let sheet = styler.create(entries).unwrap();

    let merged = compose([&sheet["base"], &sheet["primary"]]);
    assert_eq!(merged.get("color"), sheet["primary"].get("color"));
    assert_eq!(merged.get("padding"), sheet["base"].get("padding"));

    let class = cx([&sheet["base"], &sheet["primary"]]);
    assert_eq!(class.split(' ').count(), 2);
}

#[test]
fn conditional_maps_are_skipped() {
    let mut styler = Styler::synthetic(StylerOptions::default());
    let base = styler.compile(&style! { "color" => "black" }).unwrap();
    let disabled = styler.compile(&style! { "opacity" => 0.5 }).unwrap();

    let is_disabled = false;
    let maps = [Some(&base), is_disabled.then_some(&disabled), None];
    assert_eq!(cx(maps), base.class_names());
}

#[test]
fn empty_composition() {
    let maps: [&ClassMap; 0] = [];
    assert!(compose(maps).is_empty());
    assert_eq!(cx(maps), "");
}

#[test]
fn pseudo_entries_compose_independently() {
    let mut styler = Styler::synthetic(StylerOptions::default());
    let link = styler
        .compile(&style! { "color" => "blue", ":visited" => { "color" => "purple" } })
        .unwrap();
    let override_color = styler.compile(&style! { "color" => "green" }).unwrap();

    let merged = compose([&link, &override_color]);
    assert_eq!(merged.get("color"), override_color.get("color"));
    assert_eq!(merged.get("color:visited"), link.get("color:visited"));
}
