use domkit_core::{render, Content, ElementDescription, Mutation, Mutations, NodeId};
use pretty_assertions::assert_eq;

#[test]
fn text_content_from_json() {
    let desc: ElementDescription = serde_json::from_str(
        r#"{
            "tag": "a",
            "attributes": { "href": "https://google.com", "target": "_blank" },
            "content": "Click me to visit Google"
        }"#,
    )
    .unwrap();

    assert_eq!(
        desc,
        ElementDescription::new("a")
            .attr("href", "https://google.com")
            .attr("target", "_blank")
            .text("Click me to visit Google")
    );
}

#[test]
fn nested_content_from_json() {
    let desc: ElementDescription = serde_json::from_str(
        r#"{
            "tag": "ul",
            "content": [
                { "tag": "li", "content": "one" },
                { "tag": "li" }
            ]
        }"#,
    )
    .unwrap();

    assert!(desc.attributes().is_empty());
    assert_eq!(
        desc.content(),
        &Content::Children(vec![
            ElementDescription::new("li").text("one"),
            ElementDescription::new("li"),
        ])
    );
}

#[test]
fn misspelled_keys_are_rejected() {
    let err = serde_json::from_str::<ElementDescription>(r#"{ "tag": "p", "contnet": "hi" }"#)
        .unwrap_err();
    assert!(err.to_string().contains("contnet"), "{err}");

    assert!(serde_json::from_str::<ElementDescription>(
        r#"{ "tag": "ul", "content": [{ "tag": "li", "atributes": {} }] }"#
    )
    .is_err());
}

#[test]
fn empty_attributes_are_skipped() {
    let json = serde_json::to_string(&ElementDescription::new("div").text("hi")).unwrap();
    assert_eq!(json, r#"{"tag":"div","content":"hi"}"#);
}

#[test]
fn recorded_edits_serialize_with_a_type_tag() {
    let mut edits = Mutations::default();
    render(ElementDescription::new("br"), NodeId::ROOT, &mut edits).unwrap();

    let json = serde_json::to_value(&edits.edits).unwrap();
    assert_eq!(json[0]["type"], "CreateElement");
    assert_eq!(json[0]["tag"], "br");
    assert_eq!(json[1]["type"], "AppendChild");
    assert_eq!(
        edits.edits[1],
        Mutation::AppendChild {
            parent: NodeId::ROOT,
            child: NodeId::new(1)
        }
    );
}
