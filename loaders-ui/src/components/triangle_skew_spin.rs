//! Flipping triangle spinner.

use super::spinner;
use crate::style::TRIANGLE_SKEW_SPIN;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TriangleSkewSpinProps {
    /// Whether the animation is shown
    pub loading: bool,
}

/// A triangle flipping around both axes while `loading` is set.
#[component]
pub fn TriangleSkewSpin(props: TriangleSkewSpinProps) -> Element {
    spinner(&TRIANGLE_SKEW_SPIN, props.loading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{
        count_divs, dom_with_style_counter, render, render_count, rerender,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    #[component]
    fn Toggled(flag: Rc<Cell<bool>>) -> Element {
        rsx! {
            TriangleSkewSpin { loading: flag.get() }
        }
    }

    #[test]
    fn test_loading_renders_container_and_marker() {
        let html = render(TriangleSkewSpin, TriangleSkewSpinProps { loading: true });
        assert!(html.contains("<div class=\"triangle-skew-spin\"><div></div></div>"));
        assert_eq!(count_divs(&html), 2);
    }

    #[test]
    fn test_not_loading_renders_nothing() {
        let html = render(TriangleSkewSpin, TriangleSkewSpinProps { loading: false });
        assert_eq!(html, "");
    }

    #[test]
    fn test_toggle_leaves_no_residue() {
        let flag = Rc::new(Cell::new(false));
        let mut dom = VirtualDom::new_with_props(Toggled, ToggledProps { flag: flag.clone() });
        dom.rebuild_in_place();
        assert_eq!(dioxus_ssr::render(&dom), "");

        flag.set(true);
        let shown = rerender(&mut dom);
        assert_eq!(count_divs(&shown), 2);
        assert!(shown.contains("class=\"triangle-skew-spin\""));

        flag.set(false);
        assert_eq!(rerender(&mut dom), "");

        flag.set(true);
        assert_eq!(rerender(&mut dom), shown);
    }

    #[test]
    fn test_toggling_inserts_stylesheet_once() {
        let flag = Rc::new(Cell::new(true));
        let (mut dom, styles) = dom_with_style_counter(Toggled, ToggledProps { flag: flag.clone() });
        dom.rebuild_in_place();
        assert_eq!(styles.get(), 1);

        for _ in 0..5 {
            flag.set(false);
            assert_eq!(rerender(&mut dom), "");
            flag.set(true);
            assert_eq!(count_divs(&rerender(&mut dom)), 2);
        }
        assert_eq!(styles.get(), 1);
    }

    #[test]
    fn test_hidden_spinner_still_inserts_stylesheet_once() {
        let flag = Rc::new(Cell::new(false));
        let (mut dom, styles) = dom_with_style_counter(Toggled, ToggledProps { flag: flag.clone() });
        dom.rebuild_in_place();
        assert_eq!(dioxus_ssr::render(&dom), "");
        assert_eq!(styles.get(), 1);

        flag.set(true);
        rerender(&mut dom);
        assert_eq!(styles.get(), 1);
    }

    #[test]
    fn test_rerenders_only_when_loading_changes() {
        let name = TRIANGLE_SKEW_SPIN.class_name;
        let flag = Rc::new(Cell::new(true));
        let mut dom = VirtualDom::new_with_props(Toggled, ToggledProps { flag: flag.clone() });

        let before = render_count(name);
        dom.rebuild_in_place();
        assert_eq!(render_count(name), before + 1);

        for _ in 0..3 {
            rerender(&mut dom);
        }
        assert_eq!(render_count(name), before + 1);

        flag.set(false);
        rerender(&mut dom);
        assert_eq!(render_count(name), before + 2);

        rerender(&mut dom);
        assert_eq!(render_count(name), before + 2);
    }
}
