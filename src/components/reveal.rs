use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::observers::{ObserveNext, ObservedEntry, ObserverOptions, ViewportObserver};
use crate::pages::landing_state::{stagger_delay_ms, Reveal};

/// Tracks whether the element behind `node` has entered the viewport yet.
/// Flips to [`Reveal::Triggered`] once and then stops observing.
#[hook]
pub fn use_reveal(node: NodeRef) -> Reveal {
    let reveal = use_state_eq(Reveal::default);

    {
        let setter = reveal.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    let options = ObserverOptions {
                        root_margin: REVEAL_ROOT_MARGIN,
                        threshold: Some(REVEAL_THRESHOLD),
                    };
                    let on_batch = {
                        let setter = setter.clone();
                        let mut state = Reveal::Pending;
                        move |entries: Vec<ObservedEntry>| {
                            state = state.observe(entries.iter().any(|entry| entry.intersecting));
                            if state.is_triggered() {
                                setter.set(Reveal::Triggered);
                                ObserveNext::Stop
                            } else {
                                ObserveNext::Continue
                            }
                        }
                    };
                    match ViewportObserver::new(&options, on_batch) {
                        Ok(created) => {
                            created.observe(&element);
                            observer = Some(created);
                        }
                        Err(err) => {
                            // Without an observer the content is shown immediately.
                            warn!("reveal observer unavailable: {}", err);
                            setter.set(Reveal::Triggered);
                        }
                    }
                }
                move || drop(observer)
            },
            node,
        );
    }

    *reveal
}

pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", stagger_delay_ms(index, step_ms))
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that gains the `revealed` class the first time
/// it scrolls into view. Children opt into the animation with `reveal-item`.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", reveal.is_triggered().then_some("revealed"), props.classes.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_style_uses_index_delay() {
        assert_eq!(stagger_style(0, 100), "transition-delay: 0ms;");
        assert_eq!(stagger_style(3, 120), "transition-delay: 360ms;");
    }
}
