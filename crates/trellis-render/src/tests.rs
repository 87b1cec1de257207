#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use trellis_core::prelude::*;

    use crate::{RenderedValue, Renderer};

    fn rendered_children(node: &crate::RenderedNode) -> &[RenderedValue] {
        match &node.props["children"] {
            RenderedValue::List(children) => children,
            other => panic!("expected children list, got {other:?}"),
        }
    }

    #[test]
    fn render_expands_nested_elements() {
        let renderer = Renderer::new();
        let app = component("app", || {
            vec![
                HostElement::new("label").prop("text", "hello").into(),
                component("section", || {
                    vec![HostElement::new("label").prop("text", "nested").into()]
                }),
            ]
        });

        let tree = renderer.render(app.as_ref());
        assert_eq!(tree.name, "app");

        let children = rendered_children(&tree);
        assert_eq!(children.len(), 2);
        match &children[0] {
            RenderedValue::Node(label) => {
                assert_eq!(label.name, "label");
                assert!(matches!(&label.props["text"], RenderedValue::Str(s) if s == "hello"));
            }
            other => panic!("expected rendered label, got {other:?}"),
        }
        match &children[1] {
            RenderedValue::Node(section) => {
                assert_eq!(section.name, "section");
                let nested = rendered_children(section);
                assert!(matches!(&nested[0], RenderedValue::Node(n) if n.name == "label"));
            }
            other => panic!("expected rendered section, got {other:?}"),
        }
    }

    #[test]
    fn child_contexts_persist_across_renders() {
        let renderer = Renderer::new();
        // the child element is rebuilt every pass; its context is not
        let app = component("app", || {
            vec![component("child", || {
                let renders = use_ref(|| 0i64);
                *renders.borrow_mut() += 1;
                let count = *renders.borrow();
                vec![HostElement::new("label").prop("renders", count).into()]
            })]
        });

        let first = renderer.render(app.as_ref());
        let second = renderer.render(app.as_ref());

        let count_of = |tree: &crate::RenderedNode| match &rendered_children(tree)[0] {
            RenderedValue::Node(child) => match &rendered_children(child)[0] {
                RenderedValue::Node(label) => match &label.props["renders"] {
                    RenderedValue::Int(count) => *count,
                    other => panic!("expected render count, got {other:?}"),
                },
                other => panic!("expected rendered label, got {other:?}"),
            },
            other => panic!("expected rendered child, got {other:?}"),
        };
        assert_eq!(count_of(&first), 1);
        assert_eq!(count_of(&second), 2);
    }

    #[test]
    fn set_state_marks_queue_and_rerender_sees_it() {
        let renderer = Renderer::new();
        let setter_slot: Rc<RefCell<Option<SetState<i64>>>> = Rc::new(RefCell::new(None));
        let app = component("app", {
            let setter_slot = setter_slot.clone();
            move || {
                let (count, set_count) = use_state(|| 0i64);
                *setter_slot.borrow_mut() = Some(set_count);
                vec![HostElement::new("label").prop("count", count).into()]
            }
        });

        let first = renderer.render(app.as_ref());
        assert!(renderer.queue().is_empty());

        let set_count = setter_slot.borrow().clone().unwrap();
        set_count.set(5);
        assert_eq!(renderer.queue().drain(), vec![renderer.root_context().id()]);
        assert!(renderer.queue().is_empty());

        let second = renderer.render(app.as_ref());
        let count_of = |tree: &crate::RenderedNode| match &rendered_children(tree)[0] {
            RenderedValue::Node(label) => match &label.props["count"] {
                RenderedValue::Int(count) => *count,
                other => panic!("expected count, got {other:?}"),
            },
            other => panic!("expected rendered label, got {other:?}"),
        };
        assert_eq!(count_of(&first), 0);
        assert_eq!(count_of(&second), 5);
    }

    #[test]
    fn nested_state_change_marks_the_nested_context() {
        let renderer = Renderer::new();
        let setter_slot: Rc<RefCell<Option<SetState<i64>>>> = Rc::new(RefCell::new(None));
        let nested_id: Rc<RefCell<Option<ContextId>>> = Rc::new(RefCell::new(None));
        let app = component("app", {
            let setter_slot = setter_slot.clone();
            let nested_id = nested_id.clone();
            move || {
                let setter_slot = setter_slot.clone();
                let nested_id = nested_id.clone();
                vec![component("child", move || {
                    let (_, set_count) = use_state(|| 0i64);
                    *nested_id.borrow_mut() = Some(current_context().unwrap().id());
                    *setter_slot.borrow_mut() = Some(set_count);
                    vec![]
                })]
            }
        });

        renderer.render(app.as_ref());
        let set_count = setter_slot.borrow().clone().unwrap();
        set_count.set(1);

        let nested_id = nested_id.borrow().unwrap();
        assert_ne!(nested_id, renderer.root_context().id());
        assert_eq!(renderer.queue().drain(), vec![nested_id]);
    }

    #[test]
    fn rendered_tree_serializes_to_json() {
        let renderer = Renderer::new();
        let label: AnyElement = HostElement::new("label")
            .prop("text", "hello")
            .prop("emphasis", true)
            .into();

        let node = renderer.render(label.as_ref());
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "label",
                "props": {
                    "emphasis": true,
                    "text": "hello"
                }
            })
        );
    }

    #[test]
    fn rendered_tree_snapshot() {
        let renderer = Renderer::new();
        let app = component("app", || {
            vec![
                HostElement::new("heading").prop("text", "remote view").into(),
                HostElement::new("status").prop("connected", true).into(),
            ]
        });

        let tree = renderer.render(app.as_ref());
        insta::assert_json_snapshot!(tree, @r###"
        {
          "name": "app",
          "props": {
            "children": [
              {
                "name": "heading",
                "props": {
                  "text": "remote view"
                }
              },
              {
                "name": "status",
                "props": {
                  "connected": true
                }
              }
            ]
          }
        }
        "###);
    }
}
