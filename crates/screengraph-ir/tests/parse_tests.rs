use screengraph_ir::parse::parse_graph;
use screengraph_ir::types::ActionSpec;
use screengraph_ir::{Element, SwipeDirection};

#[test]
fn test_parse_minimal_graph() {
    let json = r#"{
        "initial": "Home",
        "scenes": [
            { "id": "Home" }
        ]
    }"#;
    let spec = parse_graph(json).unwrap();
    assert_eq!(spec.initial, "Home");
    assert_eq!(spec.scenes.len(), 1);
    assert!(spec.scenes[0].edges.is_empty());
    assert!(spec.scenes[0].back.is_none());
    assert!(!spec.scenes[0].dismiss_on_use);
}

#[test]
fn test_parse_all_action_kinds() {
    let json = r#"{
        "initial": "Menu",
        "scenes": [
            {
                "id": "Menu",
                "dismiss_on_use": true,
                "edges": [
                    { "to": "Tab", "action": { "type": "tap", "element": [{ "kind": "button", "locator": "Close Menu" }] } },
                    { "to": "Menu2", "action": { "type": "swipe", "direction": "left", "element": [{ "kind": "other", "locator": "menuView" }] } },
                    { "to": "Tab", "action": { "type": "tap_if_exists", "element": [{ "kind": "button", "locator": "Start" }] } },
                    { "to": "Tab", "action": { "type": "type_text", "text": "hi\r", "into": [{ "kind": "text_field", "locator": "address" }] } }
                ],
                "back": { "type": "tap", "element": [{ "kind": "button", "locator": "Cancel" }] }
            }
        ]
    }"#;
    let spec = parse_graph(json).unwrap();
    let scene = &spec.scenes[0];
    assert!(scene.dismiss_on_use);
    assert_eq!(scene.edges.len(), 4);
    assert_eq!(
        scene.edges[0].action,
        ActionSpec::Tap {
            element: Element::button("Close Menu")
        }
    );
    assert_eq!(
        scene.edges[1].action,
        ActionSpec::Swipe {
            element: Element::other("menuView"),
            direction: SwipeDirection::Left,
        }
    );
    assert!(matches!(scene.edges[2].action, ActionSpec::TapIfExists { .. }));
    assert!(matches!(scene.edges[3].action, ActionSpec::TypeText { ref text, .. } if text == "hi\r"));
    assert!(scene.back.is_some());
}

#[test]
fn test_parse_unknown_action_type_fails() {
    let json = r#"{
        "initial": "A",
        "scenes": [
            { "id": "A", "edges": [ { "to": "B", "action": { "type": "pinch" } } ] }
        ]
    }"#;
    assert!(parse_graph(json).is_err());
}

#[test]
fn test_parse_invalid_json() {
    assert!(parse_graph("not json at all").is_err());
}
