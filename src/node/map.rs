//! Message mapping over node trees.
//!
//! `map_msg` rewrites every handler of a tree so that its message is passed
//! through `f`, leaving the shape, styles and keys untouched. It is what lets
//! a component built for one message type be embedded in a parent that
//! speaks another.
//!
//! The rewrite obeys the functor laws: mapping the identity yields an
//! equivalent tree, and mapping `g` then `f` is the same as mapping `f ∘ g`.

use std::rc::Rc;

use super::tree::{Canvas, Handler, MouseHandlers, Node, Text, View};

/// Remap the message type of every handler in `node`.
pub fn map_msg<A, B, F>(f: F, node: Node<A>) -> Node<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    let f: Rc<dyn Fn(A) -> B> = Rc::new(f);
    map_node(&f, node)
}

impl<A: 'static> Node<A> {
    /// Method form of [`map_msg`].
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + 'static) -> Node<B> {
        map_msg(f, self)
    }
}

fn map_node<A: 'static, B: 'static>(f: &Rc<dyn Fn(A) -> B>, node: Node<A>) -> Node<B> {
    match node {
        Node::View(v) => Node::View(View {
            style: v.style,
            children: map_children(f, v.children),
            key: v.key,
            handlers: map_handlers(f, v.handlers),
        }),
        Node::Text(t) => Node::Text(Text {
            content: t.content,
            style: t.style,
            key: t.key,
            on_click: map_handler(f, t.on_click),
        }),
        Node::Canvas(c) => Node::Canvas(Canvas {
            primitives: c.primitives,
            style: c.style,
            key: c.key,
            handlers: map_handlers(f, c.handlers),
        }),
        Node::Fragment(children) => Node::Fragment(map_children(f, children)),
        Node::Empty => Node::Empty,
    }
}

fn map_children<A: 'static, B: 'static>(
    f: &Rc<dyn Fn(A) -> B>,
    children: Vec<Node<A>>,
) -> Vec<Node<B>> {
    children.into_iter().map(|child| map_node(f, child)).collect()
}

fn map_handlers<A: 'static, B: 'static>(
    f: &Rc<dyn Fn(A) -> B>,
    handlers: MouseHandlers<A>,
) -> MouseHandlers<B> {
    MouseHandlers {
        on_click: map_handler(f, handlers.on_click),
        on_mouse_down: map_handler(f, handlers.on_mouse_down),
        on_mouse_up: map_handler(f, handlers.on_mouse_up),
        on_mouse_move: map_handler(f, handlers.on_mouse_move),
        on_mouse_enter: map_handler(f, handlers.on_mouse_enter),
        on_mouse_leave: map_handler(f, handlers.on_mouse_leave),
    }
}

fn map_handler<E: 'static, A: 'static, B: 'static>(
    f: &Rc<dyn Fn(A) -> B>,
    handler: Option<Handler<E, A>>,
) -> Option<Handler<E, B>> {
    let handler = handler?;
    let f = Rc::clone(f);
    Some(Rc::new(move |event: E| handler(event).map(|msg| f(msg))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::style::Style;
    use crate::node::tree::ButtonInput;
    use crate::state::mouse::MouseButton;
    use crate::types::Point;

    #[derive(Debug, Clone, PartialEq)]
    enum Child {
        Clicked(i32),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Parent {
        FromChild(Child),
    }

    fn sample() -> Node<Child> {
        Node::view(
            Style::new().with_width(10.0),
            vec![
                Node::text("hi", Style::new()).on_click(|p| Some(Child::Clicked(p.x as i32))),
                Node::fragment(vec![
                    Node::canvas(Style::new(), vec![])
                        .on_mouse_down(|b| Some(Child::Clicked(b.position.y as i32))),
                ]),
                Node::empty(),
            ],
        )
        .with_key("root")
        .on_mouse_enter(|_| Some(Child::Clicked(-1)))
        .on_mouse_leave(|_| None)
    }

    #[test]
    fn test_map_wraps_messages() {
        let mapped: Node<Parent> = sample().map(Parent::FromChild);

        let handlers = mapped.mouse_handlers().unwrap();
        let enter = handlers.on_mouse_enter.as_ref().unwrap();
        assert_eq!(enter(()), Some(Parent::FromChild(Child::Clicked(-1))));

        let leave = handlers.on_mouse_leave.as_ref().unwrap();
        assert_eq!(leave(()), None);
    }

    #[test]
    fn test_map_preserves_shape() {
        let mapped: Node<Parent> = map_msg(Parent::FromChild, sample());

        assert_eq!(mapped.key(), Some("root"));
        assert_eq!(mapped.style().and_then(|s| s.width), Some(10.0));
        assert_eq!(mapped.children().len(), 3);
        assert!(matches!(mapped.children()[1], Node::Fragment(ref c) if c.len() == 1));
        assert!(matches!(mapped.children()[2], Node::Empty));
    }

    #[test]
    fn test_map_nested_handlers() {
        let mapped: Node<Parent> = sample().map(Parent::FromChild);

        let Node::Fragment(inner) = &mapped.children()[1] else {
            panic!("expected fragment");
        };
        let down = inner[0].mouse_handlers().unwrap().on_mouse_down.as_ref().unwrap();
        let input = ButtonInput {
            position: Point::new(0.0, 7.0),
            button: MouseButton::Left,
        };
        assert_eq!(down(input), Some(Parent::FromChild(Child::Clicked(7))));
    }

    /// Every handler in `node`'s subtree fired with fixed inputs, in tree
    /// order. Structure labels are interleaved so shape changes show up too.
    fn fire_all<M>(node: &Node<M>, at: String, out: &mut Vec<(String, Option<Option<M>>)>) {
        match node {
            Node::View(v) => {
                out.push((format!("{at} view {:?}", v.key), None));
                fire_handlers(&at, &v.handlers, out);
                for (i, child) in v.children.iter().enumerate() {
                    fire_all(child, format!("{at}.{i}"), out);
                }
            }
            Node::Text(t) => {
                out.push((format!("{at} text {}", t.content), None));
                let position = Point::new(3.0, 4.0);
                out.push((format!("{at} click"), t.on_click.as_ref().map(|h| h(position))));
            }
            Node::Canvas(c) => {
                out.push((format!("{at} canvas {}", c.primitives.len()), None));
                fire_handlers(&at, &c.handlers, out);
            }
            Node::Fragment(children) => {
                out.push((format!("{at} fragment"), None));
                for (i, child) in children.iter().enumerate() {
                    fire_all(child, format!("{at}.{i}"), out);
                }
            }
            Node::Empty => out.push((format!("{at} empty"), None)),
        }
    }

    fn fire_handlers<M>(at: &str, handlers: &MouseHandlers<M>, out: &mut Vec<(String, Option<Option<M>>)>) {
        let position = Point::new(3.0, 4.0);
        let input = || ButtonInput {
            position,
            button: MouseButton::Right,
        };
        out.push((format!("{at} click"), handlers.on_click.as_ref().map(|h| h(position))));
        out.push((format!("{at} down"), handlers.on_mouse_down.as_ref().map(|h| h(input()))));
        out.push((format!("{at} up"), handlers.on_mouse_up.as_ref().map(|h| h(input()))));
        out.push((format!("{at} move"), handlers.on_mouse_move.as_ref().map(|h| h(position))));
        out.push((format!("{at} enter"), handlers.on_mouse_enter.as_ref().map(|h| h(()))));
        out.push((format!("{at} leave"), handlers.on_mouse_leave.as_ref().map(|h| h(()))));
    }

    fn fired<M>(node: &Node<M>) -> Vec<(String, Option<Option<M>>)> {
        let mut out = Vec::new();
        fire_all(node, "0".to_string(), &mut out);
        out
    }

    fn full_tree() -> Node<i32> {
        Node::view(
            Style::new(),
            vec![
                Node::text("label", Style::new()).on_click(|p| Some(p.x as i32 + 1)),
                Node::fragment(vec![
                    Node::canvas(Style::new(), vec![])
                        .on_click(|p| Some(p.y as i32))
                        .on_mouse_down(|b| Some(b.position.y as i32 * 10))
                        .on_mouse_up(|b| (b.button == MouseButton::Right).then_some(5))
                        .on_mouse_move(|p| Some((p.x + p.y) as i32))
                        .on_mouse_enter(|_| Some(100))
                        .on_mouse_leave(|_| None),
                    Node::fragment(vec![
                        Node::view(Style::new(), vec![Node::empty()])
                            .with_key("deep")
                            .on_mouse_up(|b| Some(b.position.x as i32 - 9)),
                        Node::text("plain", Style::new()),
                    ]),
                ]),
            ],
        )
        .on_mouse_down(|_| Some(-4))
        .on_mouse_move(|_| None)
        .on_mouse_enter(|_| Some(7))
    }

    #[test]
    fn test_map_identity_law() {
        let expected = fired(&full_tree());
        let mapped = map_msg(|msg: i32| msg, full_tree());

        assert_eq!(fired(&mapped), expected);
        assert!(expected.iter().any(|(_, result)| matches!(result, Some(Some(_)))));
    }

    #[test]
    fn test_map_composition_law() {
        let g = |n: i32| n * 3;
        let f = |n: i32| format!("#{n}");

        let stepwise = map_msg(f, map_msg(g, full_tree()));
        let composed = map_msg(move |n| f(g(n)), full_tree());

        let stepwise = fired(&stepwise);
        assert_eq!(stepwise, fired(&composed));
        assert!(stepwise.contains(&("0.1.0 down".to_string(), Some(Some("#120".to_string())))));
    }

    #[test]
    fn test_unset_handlers_stay_unset() {
        let mapped: Node<Parent> = sample().map(Parent::FromChild);
        let handlers = mapped.mouse_handlers().unwrap();
        assert!(handlers.on_click.is_none());
        assert!(handlers.on_mouse_move.is_none());
    }
}
