//! Selection controller: tracks exactly one selected node.
//!
//! One controller serves the whole mount (container-level interception, not
//! per-node listeners), so tree replacement costs nothing: a rebuilt arena
//! simply carries no markers. Activation is assumed to be hit-tested to the
//! deepest node already; the controller clears the previous marker, sets the
//! new one, and notifies the registered callback.

use sketchpad_evaluator::{Mount, NodeId};
use tracing::debug;

type SelectCallback = Box<dyn FnMut(NodeId)>;

/// Intercepts pointer activation over the rendered tree
#[derive(Default)]
pub struct SelectionController {
    on_select: Option<SelectCallback>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback invoked with each newly selected node
    pub fn on_select(&mut self, callback: impl FnMut(NodeId) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Handle a pointer activation on `id`. Clears any existing marker,
    /// marks the activated element, and fires the callback. Activations on
    /// text leaves (or dangling handles) change nothing.
    pub fn activate(&mut self, mount: &mut Mount, id: NodeId) -> Option<NodeId> {
        if !mount.is_element(id) {
            debug!(?id, "activation target is not selectable");
            return None;
        }

        mount.clear_selection();
        mount.set_selected(id);

        if let Some(callback) = &mut self.on_select {
            callback(id);
        }

        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_evaluator::{compile, RenderedNode};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn render_demo() -> Mount {
        let source = r#"
            function Demo() {
              return (
                <div>
                  <h1>one</h1>
                  <p>two</p>
                </div>
              );
            }
            export default Demo;
        "#;
        let mut mount = Mount::new();
        compile(source).unwrap().render(&mut mount).unwrap();
        mount
    }

    #[test]
    fn test_exactly_one_marker_after_many_activations() {
        let mut mount = render_demo();
        let mut controller = SelectionController::new();

        let elements: Vec<NodeId> = mount
            .node_ids()
            .filter(|&id| mount.is_element(id))
            .collect();
        assert!(elements.len() >= 3);

        let mut last = None;
        for &id in elements.iter().cycle().take(7) {
            last = controller.activate(&mut mount, id);
        }

        // Exactly one marker, and it is the most recent activation
        let marked: Vec<NodeId> = mount
            .node_ids()
            .filter(|&id| {
                matches!(
                    mount.get(id),
                    Some(RenderedNode::Element { selected: true, .. })
                )
            })
            .collect();
        assert_eq!(marked, vec![last.unwrap()]);
    }

    #[test]
    fn test_text_leaf_activation_is_noop() {
        let mut mount = render_demo();
        let mut controller = SelectionController::new();

        let element = mount.node_ids().find(|&id| mount.is_element(id)).unwrap();
        controller.activate(&mut mount, element);

        let leaf = mount.node_ids().find(|&id| !mount.is_element(id)).unwrap();
        assert_eq!(controller.activate(&mut mount, leaf), None);

        // Prior selection is untouched
        assert_eq!(mount.selected(), Some(element));
    }

    #[test]
    fn test_callback_receives_selected_node() {
        let mut mount = render_demo();
        let mut controller = SelectionController::new();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.on_select(move |id| sink.borrow_mut().push(id));

        let element = mount.node_ids().find(|&id| mount.is_element(id)).unwrap();
        controller.activate(&mut mount, element);

        assert_eq!(seen.borrow().as_slice(), &[element]);
    }
}
