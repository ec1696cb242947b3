//! End-to-end tests over the compile → render → select → edit → save loop

use sketchpad_editor::{
    Edit, EditorSession, FontWeight, Mount, NodeId, RenderedNode,
};
use std::cell::RefCell;
use std::rc::Rc;

const DEMO: &str = r#"
    function MyComponent() {
      return (
        <div style={{ padding: 20 }}>
          <h1>Hello World</h1>
          <p>This is editable text.</p>
        </div>
      );
    }
    export default MyComponent;
"#;

fn find_by_tag(mount: &Mount, tag: &str) -> NodeId {
    mount
        .node_ids()
        .find(|&id| mount.tag(id) == Some(tag))
        .unwrap()
}

/// The original assignment scenario: click the h1, change its text and
/// color, save, and check the emitted source.
#[test]
fn test_end_to_end_edit_and_save() {
    let mut session = EditorSession::new();
    session.compile_and_render(DEMO).unwrap();

    let h1 = find_by_tag(session.mount(), "h1");
    let snapshot = session.select(h1).unwrap();
    assert_eq!(snapshot.text, "Hello World");

    session.edit(Edit::Text("Hi".to_string())).unwrap();
    session.edit(Edit::Color("#ff0000".to_string())).unwrap();

    let saved = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&saved);
    session.on_save(move |jsx| *sink.borrow_mut() = jsx.to_string());

    let jsx = session.save().unwrap();
    assert_eq!(*saved.borrow(), jsx);

    assert!(jsx.contains(r##"<h1 style={{ color: "#ff0000" }}>Hi</h1>"##));
    assert!(jsx.contains("<p>This is editable text.</p>"));
    assert!(jsx.starts_with(r#"<div style={{ padding: "20px" }}>"#));
}

/// Saved output must be valid input for the compiler, and re-rendering it
/// must reproduce the tree (tags, text, styles).
#[test]
fn test_round_trip_through_save() {
    let mut session = EditorSession::new();
    session.compile_and_render(DEMO).unwrap();
    let jsx = session.save().unwrap();

    let source = format!(
        "function Saved() {{ return ({}); }} export default Saved;",
        jsx
    );
    let mut second = EditorSession::new();
    second.compile_and_render(&source).unwrap();

    let first_root = session.mount().first_root().unwrap();
    let second_root = second.mount().first_root().unwrap();
    assert_trees_equal(session.mount(), first_root, second.mount(), second_root);

    // And serializing the reloaded session yields the same text
    assert_eq!(second.save().unwrap(), jsx);
}

/// Edits survive the round trip: the reloaded tree carries them.
#[test]
fn test_edits_survive_round_trip() {
    let mut session = EditorSession::new();
    session.compile_and_render(DEMO).unwrap();

    let h1 = find_by_tag(session.mount(), "h1");
    session.select(h1);
    session.edit(Edit::Text("Hi".to_string())).unwrap();
    session.edit(Edit::FontSize(24)).unwrap();
    session.edit(Edit::FontWeight(FontWeight::Bold)).unwrap();

    let jsx = session.save().unwrap();
    let source = format!(
        "function Saved() {{ return ({}); }} export default Saved;",
        jsx
    );

    let mut reloaded = EditorSession::new();
    reloaded.compile_and_render(&source).unwrap();

    let h1 = find_by_tag(reloaded.mount(), "h1");
    let snapshot = reloaded.select(h1).unwrap();
    assert_eq!(snapshot.text, "Hi");
    assert_eq!(snapshot.font_size, 24);
    assert_eq!(snapshot.font_weight, FontWeight::Bold);
}

/// Selection marker state never leaks into serialized output.
#[test]
fn test_selection_marker_not_serialized() {
    let mut session = EditorSession::new();
    session.compile_and_render(DEMO).unwrap();

    let h1 = find_by_tag(session.mount(), "h1");
    session.select(h1);

    let jsx = session.save().unwrap();
    assert!(!jsx.contains("selected"));
    assert!(!jsx.contains("outline"));
}

/// A failed recompile clears the preview but keeps the session alive; the
/// next valid source renders normally.
#[test]
fn test_failed_recompile_then_recover() {
    let mut session = EditorSession::new();
    session.compile_and_render(DEMO).unwrap();

    session.compile_and_render("not valid syntax {{{").unwrap_err();
    assert!(session.mount().is_empty());

    session.compile_and_render(DEMO).unwrap();
    let h1 = find_by_tag(session.mount(), "h1");
    assert!(session.select(h1).is_some());
}

/// Structural equality on the parts that are supposed to survive: tag,
/// text, child order, and style mapping.
fn assert_trees_equal(a: &Mount, a_id: NodeId, b: &Mount, b_id: NodeId) {
    match (a.get(a_id).unwrap(), b.get(b_id).unwrap()) {
        (
            RenderedNode::Element {
                tag: a_tag,
                styles: a_styles,
                children: a_children,
                ..
            },
            RenderedNode::Element {
                tag: b_tag,
                styles: b_styles,
                children: b_children,
                ..
            },
        ) => {
            assert_eq!(a_tag, b_tag);
            assert_eq!(a_styles, b_styles);
            assert_eq!(a_children.len(), b_children.len());
            for (&a_child, &b_child) in a_children.iter().zip(b_children.iter()) {
                assert_trees_equal(a, a_child, b, b_child);
            }
        }
        (
            RenderedNode::Text { content: a_text },
            RenderedNode::Text { content: b_text },
        ) => {
            assert_eq!(a_text, b_text);
        }
        (a_node, b_node) => panic!("node kind mismatch: {:?} vs {:?}", a_node, b_node),
    }
}
