//! Scoped browser subscriptions. Every handle here releases its listener or
//! observer when dropped, so effects only need to drop them on unmount.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_offset() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Passive `scroll` listener on the window.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(mut on_scroll: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window()?;
        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        debug!("scroll listener attached");
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        debug!("scroll listener removed");
    }
}

/// One intersection record, reduced to what the page cares about.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservedEntry {
    pub id: String,
    pub intersecting: bool,
}

/// Returned from a batch callback to keep or stop observing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveNext {
    Continue,
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: Option<f64>,
}

/// Owned `IntersectionObserver`; disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_batch` receives every entry of one observation batch in the order
    /// the browser delivered them. Returning [`ObserveNext::Stop`] disconnects
    /// the observer; the handle stays valid and can still be dropped normally.
    pub fn new<F>(options: &ObserverOptions, mut on_batch: F) -> Result<Self, DomError>
    where
        F: FnMut(Vec<ObservedEntry>) -> ObserveNext + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            if on_batch(collect_entries(&entries)) == ObserveNext::Stop {
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Observes the elements with the given ids. Missing ids are skipped;
    /// returns how many elements were found.
    pub fn observe_ids<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<usize, DomError> {
        let document = document()?;
        let mut found = 0;
        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => {
                    self.observer.observe(&element);
                    found += 1;
                }
                None => debug!("no element with id '{}' to observe", id),
            }
        }
        Ok(found)
    }

}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn collect_entries(entries: &Array) -> Vec<ObservedEntry> {
    entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| ObservedEntry {
            id: entry.target().id(),
            intersecting: entry.is_intersecting(),
        })
        .collect()
}

/// Something that can bring an anchored element into view.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface {
    /// Issues a smooth scroll aligning the element's top with the viewport
    /// top. Returns `false` without scrolling if no element has that id.
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

/// The live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ScrollSurface for DocumentSurface {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let Some(element) = document().ok().and_then(|d| d.get_element_by_id(anchor)) else {
            debug!("scroll target '#{}' not in document", anchor);
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_section(id: &str) -> Element {
        let document = document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id(id);
        document.body().unwrap().append_child(&section).unwrap();
        section
    }

    #[wasm_bindgen_test]
    fn scrolls_to_present_anchor() {
        let section = mount_section("observers-present");
        assert!(DocumentSurface.scroll_to_anchor("observers-present"));
        section.remove();
    }

    #[wasm_bindgen_test]
    fn missing_anchor_is_a_silent_no_op() {
        assert!(!DocumentSurface.scroll_to_anchor("observers-missing"));
    }

    #[wasm_bindgen_test]
    fn observe_ids_skips_missing_elements() {
        let section = mount_section("observers-observed");
        let observer = ViewportObserver::new(
            &ObserverOptions { root_margin: "0px", threshold: None },
            |_| ObserveNext::Continue,
        )
        .unwrap();
        let found = observer
            .observe_ids(["observers-observed", "observers-nowhere"])
            .unwrap();
        assert_eq!(found, 1);
        drop(observer);
        section.remove();
    }

    #[wasm_bindgen_test]
    fn dropped_scroll_listener_stops_receiving() {
        let calls = Rc::new(RefCell::new(0));
        let listener = {
            let calls = calls.clone();
            ScrollListener::attach(move |_| *calls.borrow_mut() += 1).unwrap()
        };
        drop(listener);
        let event = web_sys::Event::new("scroll").unwrap();
        window().unwrap().dispatch_event(&event).unwrap();
        assert_eq!(*calls.borrow(), 0);
    }
}
