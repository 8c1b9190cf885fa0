//! The same build specification rendered by every preset adapter must match
//! one expected token list.

use rstest::rstest;
use xml_parts_engine::{Element, MarkupAdapter, StyledAdapter, compile, words};

fn assert_all_adapters_match(spec: &Element, expected: &[&str]) {
    let pattern = compile(expected.iter().copied()).unwrap();

    for adapter in StyledAdapter::presets() {
        let rendered = adapter.render(spec);
        assert!(
            pattern.test(&rendered),
            "{} rendered {:?}: {}",
            adapter.name(),
            rendered,
            pattern.explain(&rendered).unwrap()
        );
    }
}

#[rstest]
#[case::nested_empty_element(
    Element::new("div").child(Element::new("br")),
    "<div> <br/> </div>"
)]
#[case::attributes(
    Element::new("div").attr("class", "strong").child(Element::new("br")),
    r#"<div class="strong" > <br/> </div>"#
)]
#[case::literal_markup(
    Element::new("div").raw("<strong>foo</strong>"),
    "<div> <strong> foo </strong> </div>"
)]
#[case::paragraph(Element::new("p").child(Element::new("br")), "<p> <br/> </p>")]
#[case::text(Element::new("div").text("Hello"), "<div> Hello </div>")]
#[case::deep_nesting(
    Element::new("ul")
        .child(Element::new("li").child(Element::new("hr")))
        .child(Element::new("li").text("two")),
    "<ul> <li> <hr/> </li> <li> two </li> </ul>"
)]
fn every_adapter_matches(#[case] spec: Element, #[case] expected: &str) {
    assert_all_adapters_match(&spec, &words(expected));
}

#[test]
fn escaped_text_matches_with_entities() {
    let spec = Element::new("div").text(r#"=<">= <=== Crab emoticon"#);

    assert_all_adapters_match(
        &spec,
        &["<div>", r#"=&lt;"&gt;="#, "&lt;===", "Crab", "emoticon", "</div>"],
    );
}

#[test]
fn different_text_does_not_match_any_adapter() {
    let spec = Element::new("div").text("Goodbye");
    let pattern = compile(words("<div> Hello </div>")).unwrap();

    for adapter in StyledAdapter::presets() {
        assert!(!pattern.test(&adapter.render(&spec)), "{}", adapter.name());
    }
}

#[test]
fn different_empty_element_does_not_match_any_adapter() {
    let spec = Element::new("div").child(Element::new("span"));
    let pattern = compile(words("<div> <br/> </div>")).unwrap();

    for adapter in StyledAdapter::presets() {
        let rendered = adapter.render(&spec);
        let mismatch = pattern.explain(&rendered).unwrap();
        assert_eq!(mismatch.index, 1, "{}", adapter.name());
    }
}

// An attributed empty element written as `<div ... />` only survives adapters
// that spell empty elements with a slash.
#[test]
fn self_closing_element_with_attributes_needs_a_slash() {
    let spec = Element::new("div")
        .attr("class", "the_class")
        .attr("id", "the_id");
    let pattern = compile(words(r#"<div class="the_class" id="the_id" />"#)).unwrap();

    let results: Vec<(String, bool)> = StyledAdapter::presets()
        .iter()
        .map(|a| (a.name().to_string(), pattern.test(&a.render(&spec))))
        .collect();

    assert_eq!(
        results,
        vec![
            ("xml".to_string(), true),
            ("html".to_string(), false),
            ("compact".to_string(), true),
            ("spaced".to_string(), true),
            ("entity-quoted".to_string(), false),
        ]
    );
}
