use pretty_assertions::assert_eq;
use styled_props::{
    deep_theme, if_not_prop, if_prop, palette, prop, props, resolve_path, switch_prop, with_prop,
    FieldTest, Needle, Value,
};

#[test]
fn negative_tone_picks_last_entry() {
    let props = props! {
        "theme": props! { "palette": props! { "primary": ["a", "b", "c"] } },
    };
    assert_eq!(palette("primary", -1, ()).call(&props).unwrap(), Value::from("c"));
}

#[test]
fn resolve_path_walks_or_defaults() {
    let root = props! { "foo": props! { "bar": "x" } };
    assert_eq!(resolve_path(&root, "foo.bar", Value::Undefined), Value::from("x"));
    assert_eq!(
        resolve_path(&props! {}, "foo.bar", Value::from("default")),
        Value::from("default")
    );
}

#[test]
fn field_needle_mixes_literals_and_predicates() {
    let needle = Needle::fields([
        ("foo", FieldTest::from(true)),
        ("bar", FieldTest::test(|v| Ok((v.as_str() == Some("ok")).into()))),
    ]);
    let pick = if_prop(needle, "yes", "no");
    assert_eq!(pick.call(&props! { "foo": true, "bar": "ok" }).unwrap(), Value::from("yes"));
    assert_eq!(pick.call(&props! { "foo": true, "bar": "no" }).unwrap(), Value::from("no"));
}

#[test]
fn switch_prop_uses_default_case_on_miss() {
    let color = switch_prop("type", [("blue", "blue"), ("red", "red")], "green");
    assert_eq!(color.call(&props! { "type": "purple" }).unwrap(), Value::from("green"));
}

#[test]
fn missing_paths_return_any_default() {
    let defaults = [
        Value::Undefined,
        Value::Null,
        Value::from(0),
        Value::from(""),
        Value::from("fallback"),
        Value::list([1, 2]),
    ];
    for default in defaults {
        let out = prop("a.b.c", default.clone()).call(&props! { "a": props! {} }).unwrap();
        assert_eq!(out, default);
    }
}

#[test]
fn empty_list_needle_passes() {
    let needle = Needle::all(Vec::<Needle>::new());
    assert_eq!(if_prop(needle, "yes", "no").call(&props! {}).unwrap(), Value::from("yes"));
}

#[test]
fn conditions_compose_with_palettes() {
    let background = if_not_prop(
        "disabled",
        palette("primary", (), ()),
        deep_theme("muted", "#ccc"),
    );
    let theme = props! {
        "muted": "#eee",
        "palette": props! { "primary": ["#1976d2", "#2196f3"] },
    };

    let props = props! { "tone": 1, "theme": theme.clone() };
    assert_eq!(background.call(&props).unwrap(), Value::from("#2196f3"));

    let props = props! { "disabled": true, "theme": theme };
    assert_eq!(background.call(&props).unwrap(), Value::from("#eee"));
}

#[test]
fn with_prop_builds_values_from_several_props() {
    let border = with_prop(["width", "style", "theme.border"], |args| {
        Ok(format!("{}px {} {}", args[0], args[1], args[2]).into())
    });
    let props = props! {
        "width": 2,
        "style": "dashed",
        "theme": props! { "border": "#333" },
    };
    assert_eq!(border.call(&props).unwrap(), Value::from("2px dashed #333"));
}

#[test]
fn dynamic_needles_follow_their_shape() {
    let needle = Value::list([
        Value::from("foo"),
        Value::map([("bar", Value::from("ok"))]),
    ]);
    let pick = if_prop(&needle, "yes", "no");
    assert_eq!(pick.call(&props! { "foo": 1, "bar": "ok" }).unwrap(), Value::from("yes"));
    assert_eq!(pick.call(&props! { "foo": 1, "bar": "no" }).unwrap(), Value::from("no"));
}
