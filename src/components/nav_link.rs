use std::fmt;

use yew::html::IntoPropValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Link target split into its path, query and fragment parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Href {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Href {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            fragment: None,
        }
    }

    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Same-origin absolute path, e.g. `/pricing` but not `//cdn.example.com`.
    pub fn is_internal(&self) -> bool {
        self.path.starts_with('/') && !self.path.starts_with("//")
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

impl From<&str> for Href {
    fn from(raw: &str) -> Self {
        Href::parse(raw)
    }
}

impl From<Route> for Href {
    fn from(route: Route) -> Self {
        Href::parse(&route.to_path())
    }
}

impl IntoPropValue<Href> for &'static str {
    fn into_prop_value(self) -> Href {
        Href::parse(self)
    }
}

impl IntoPropValue<Href> for String {
    fn into_prop_value(self) -> Href {
        Href::parse(&self)
    }
}

impl IntoPropValue<Href> for Route {
    fn into_prop_value(self) -> Href {
        Href::from(self)
    }
}

/// Only the path takes part in the comparison.
pub fn is_active(current_path: &str, target: &Href) -> bool {
    current_path == target.path()
}

pub fn link_classes(base: &Classes, active_classes: &Classes, active: bool) -> Classes {
    let mut classes = base.clone();
    if active {
        classes.push(active_classes.clone());
    }
    classes
}

fn has_modifier(e: &MouseEvent) -> bool {
    e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() || e.button() != 0
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Href,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub active_classes: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or_default]
    pub rel: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that adds `active_classes` while the router location matches its
/// target path. The location comes from whichever `Router` hosts it.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let location = use_location();
    let navigator = use_navigator();

    let active = location
        .as_ref()
        .map(|location| is_active(location.path(), &props.to))
        .unwrap_or(false);

    let onclick = {
        let caller = props.onclick.clone();
        let href = props.to.clone();
        let opens_elsewhere = props.target.is_some();
        Callback::from(move |e: MouseEvent| {
            if let Some(caller) = &caller {
                caller.emit(e.clone());
            }
            if e.default_prevented() || opens_elsewhere || has_modifier(&e) {
                return;
            }
            // Query strings and fragments go through a regular page load.
            if !href.is_internal() || href.query().is_some() || href.fragment().is_some() {
                return;
            }
            if let (Some(navigator), Some(route)) = (&navigator, Route::recognize(href.path())) {
                e.prevent_default();
                navigator.push(&route);
            }
        })
    };

    html! {
        <a
            href={props.to.to_string()}
            class={link_classes(&props.classes, &props.active_classes, active)}
            onclick={onclick}
            target={props.target.clone()}
            rel={props.rel.clone()}
            id={props.id.clone()}
            title={props.title.clone()}
            aria-label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_paths_are_active() {
        assert!(is_active("/a", &Href::parse("/a")));
        assert!(!is_active("/a", &Href::parse("/b")));
        assert!(!is_active("/a", &Href::parse("/a/b")));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert!(is_active("/a", &Href::parse("/a?x=1#y")));
        assert!(is_active("/a", &Href::new("/a").with_query("x=1").with_fragment("y")));
        assert!(is_active("/", &Href::parse("/#features")));
    }

    #[test]
    fn parse_splits_path_query_and_fragment() {
        let href = Href::parse("/a?x=1&z=2#y");
        assert_eq!(href.path(), "/a");
        assert_eq!(href.query(), Some("x=1&z=2"));
        assert_eq!(href.fragment(), Some("y"));
        assert_eq!(href.to_string(), "/a?x=1&z=2#y");

        let href = Href::parse("/a#frag?not-a-query");
        assert_eq!(href.query(), None);
        assert_eq!(href.fragment(), Some("frag?not-a-query"));

        let href = Href::parse("#gallery");
        assert_eq!(href.path(), "");
        assert!(!href.is_internal());
    }

    #[test]
    fn internal_paths() {
        assert!(Href::parse("/").is_internal());
        assert!(Href::parse("/404").is_internal());
        assert!(!Href::parse("//cdn.example.com/x").is_internal());
        assert!(!Href::parse("https://example.com").is_internal());
    }

    #[test]
    fn routes_convert_to_their_path() {
        assert_eq!(Href::from(Route::Home).path(), "/");
        assert_eq!(Href::from(Route::NotFound).path(), "/404");
    }

    #[test]
    fn active_classes_are_added_only_when_active() {
        let base = classes!("nav-logo");
        let extra = classes!("nav-logo-active");
        assert_eq!(link_classes(&base, &extra, true).to_string(), "nav-logo nav-logo-active");
        assert_eq!(link_classes(&base, &extra, false).to_string(), "nav-logo");
        assert_eq!(link_classes(&base, &Classes::new(), true).to_string(), "nav-logo");
    }
}
