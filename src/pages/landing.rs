use chrono::{Datelike, Local};
use log::{debug, warn};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icon::{Icon, IconGlyph};
use crate::components::nav_link::NavLink;
use crate::components::reveal::{stagger_style, RevealOnScroll};
use crate::config::{ACTIVE_SECTION_ROOT_MARGIN, STAGGER_STEP_MS, STEP_STAGGER_MS};
use crate::content::{
    SectionId, BRAND, FEATURES, FOOTER_LINKS, GALLERY_ITEMS, HERO_IMAGE, HERO_STATS, NAV_LINKS,
    PROCESS_STEPS, SOCIAL_LINKS,
};
use crate::observers::{
    scroll_offset, scroll_to_top, DocumentSurface, ObserveNext, ObservedEntry, ObserverOptions,
    ScrollListener, ScrollSurface, ViewportObserver,
};
use crate::pages::landing_state::{LandingAction, LandingState};
use crate::Route;

/// Scrolls `section` into view and returns the follow-up action. The menu is
/// closed whether or not the section exists.
pub fn navigate_to_section<S: ScrollSurface + ?Sized>(surface: &S, section: SectionId) -> LandingAction {
    if surface.scroll_to_anchor(section.anchor()) {
        debug!("scrolling to #{}", section);
    }
    LandingAction::CloseMobileMenu
}

/// Sections that entered the active band, keeping delivery order.
pub fn entered_sections(entries: &[ObservedEntry]) -> Vec<SectionId> {
    entries
        .iter()
        .filter(|entry| entry.intersecting)
        .filter_map(|entry| SectionId::from_anchor(&entry.id))
        .collect()
}

pub fn footer_year<T: Datelike>(now: &T) -> i32 {
    now.year()
}

pub fn copyright_notice(year: i32) -> String {
    format!("© {} All rights reserved.", year)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer_eq(LandingState::default);

    // Navbar background follows the scroll offset
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(LandingAction::Scrolled(scroll_offset()));
                let listener = {
                    let dispatcher = dispatcher.clone();
                    ScrollListener::attach(move |offset| {
                        dispatcher.dispatch(LandingAction::Scrolled(offset));
                    })
                };
                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        warn!("scroll tracking disabled: {}", err);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    // Active nav link follows whichever section crosses the middle band
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let options = ObserverOptions {
                    root_margin: ACTIVE_SECTION_ROOT_MARGIN,
                    threshold: None,
                };
                let observer = ViewportObserver::new(&options, move |entries| {
                    let entered = entered_sections(&entries);
                    if !entered.is_empty() {
                        dispatcher.dispatch(LandingAction::SectionsEntered(entered));
                    }
                    ObserveNext::Continue
                })
                .and_then(|observer| {
                    let found = observer.observe_ids(SectionId::ALL.iter().map(|s| s.anchor()))?;
                    debug!("tracking {} of {} sections", found, SectionId::ALL.len());
                    Ok(observer)
                });
                let observer = match observer {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("active section tracking disabled: {}", err);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: SectionId| {
            dispatcher.dispatch(navigate_to_section(&DocumentSurface, section));
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LandingAction::ToggleMobileMenu))
    };

    html! {
        <div class="landing-page">
            <Navbar
                scrolled={state.scrolled}
                active_section={state.active_section}
                mobile_menu_open={state.mobile_menu_open}
                on_navigate={on_navigate}
                on_toggle_menu={on_toggle_menu}
            />
            <Hero />
            <FeaturesSection />
            <ProcessSection />
            <GallerySection />
            <CtaSection />
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scrolled: bool,
    pub active_section: Option<SectionId>,
    pub mobile_menu_open: bool,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let section_click = |section: SectionId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    let on_logo_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let is_active = |section: SectionId| props.active_section == Some(section);

    html! {
        <nav class={classes!("top-nav", props.scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <NavLink
                    to={Route::Home}
                    classes="nav-logo"
                    active_classes="nav-logo-active"
                    aria_label={AttrValue::from(BRAND)}
                    onclick={on_logo_click}
                >
                    <span class="nav-logo-mark">{"F"}</span>
                    <span class="nav-logo-text">{BRAND}</span>
                </NavLink>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.section.href()}
                            class={classes!("nav-link", is_active(link.section).then_some("active"))}
                            onclick={section_click(link.section)}
                        >
                            {link.label}
                            if is_active(link.section) {
                                <span class="nav-indicator"></span>
                            }
                        </a>
                    }) }
                    <Button size={ButtonSize::Sm} classes="nav-login">{"Login"}</Button>
                </div>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={props.mobile_menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <IconGlyph icon={if props.mobile_menu_open { Icon::X } else { Icon::Menu }} size={22} />
                </button>
            </div>

            if props.mobile_menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.section.href()}
                            class={classes!("mobile-link", is_active(link.section).then_some("active"))}
                            onclick={section_click(link.section)}
                        >
                            {link.label}
                        </a>
                    }) }
                    <Button size={ButtonSize::Sm} classes="nav-login">{"Login"}</Button>
                </div>
            }
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-background">
                <img
                    src={HERO_IMAGE.url}
                    alt={HERO_IMAGE.alt}
                    loading={HERO_IMAGE.loading.as_attr()}
                    class="hero-image"
                />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    <span>{"Interior Design Visualization"}</span>
                </div>
                <h1 class="hero-title">
                    {"Craft Your "}
                    <span class="text-gradient-gold">{"Dream Space"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Design stunning furniture layouts in 2D and experience them in immersive 3D. Help your customers visualize their perfect room before making a decision."}
                </p>
                <div class="hero-cta-group">
                    <Button size={ButtonSize::Lg} classes="hero-cta">
                        {"Get Started"}
                        <IconGlyph icon={Icon::ArrowRight} size={20} classes="icon-trailing" />
                    </Button>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Lg} classes="hero-demo">
                        <IconGlyph icon={Icon::Play} size={16} classes="icon-leading" />
                        {"Watch Demo"}
                    </Button>
                </div>
                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="hero-stat">
                            <p class="hero-stat-value">{stat.value}</p>
                            <p class="hero-stat-label">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadProps {
    eyebrow: &'static str,
    title: &'static str,
    subtitle: &'static str,
}

#[function_component(SectionHead)]
fn section_head(props: &SectionHeadProps) -> Html {
    html! {
        <RevealOnScroll classes="section-head">
            <p class="section-eyebrow reveal-item">{props.eyebrow}</p>
            <h2 class="reveal-item">{props.title}</h2>
            <p class="section-subtitle reveal-item">{props.subtitle}</p>
        </RevealOnScroll>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <section id={SectionId::Features.anchor()} class="features-section">
            <SectionHead
                eyebrow="Features"
                title="Everything You Need"
                subtitle="Powerful tools designed for furniture designers to create, visualize, and perfect room layouts."
            />
            <RevealOnScroll classes="features-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <div
                        key={feature.title}
                        class="feature-card reveal-item"
                        style={stagger_style(index, STAGGER_STEP_MS)}
                    >
                        <div class="feature-icon">
                            <IconGlyph icon={feature.icon} />
                        </div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </RevealOnScroll>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section() -> Html {
    let last = PROCESS_STEPS.len() - 1;
    html! {
        <section id={SectionId::HowItWorks.anchor()} class="process-section">
            <SectionHead
                eyebrow="Process"
                title="How It Works"
                subtitle="From room specs to a realistic 3D view, in just four simple steps."
            />
            <RevealOnScroll classes="steps-grid">
                { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                    <div
                        key={step.number}
                        class="step reveal-item"
                        style={stagger_style(index, STEP_STAGGER_MS)}
                    >
                        if index < last {
                            <div class="step-connector"></div>
                        }
                        <div class="step-icon">
                            <IconGlyph icon={step.icon} size={32} />
                        </div>
                        <span class="step-number">{format!("Step {}", step.number)}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </RevealOnScroll>
        </section>
    }
}

#[function_component(GallerySection)]
fn gallery_section() -> Html {
    html! {
        <section id={SectionId::Gallery.anchor()} class="gallery-section">
            <SectionHead
                eyebrow="Inspiration"
                title="Design Gallery"
                subtitle="Explore beautifully designed rooms created with Furnexa."
            />
            <RevealOnScroll classes="gallery-grid">
                { for GALLERY_ITEMS.iter().enumerate().map(|(index, item)| html! {
                    <div
                        key={item.title}
                        class="gallery-card reveal-item"
                        style={stagger_style(index, STEP_STAGGER_MS)}
                    >
                        <div class="gallery-image">
                            <img src={item.image.url} alt={item.image.alt} loading={item.image.loading.as_attr()} />
                        </div>
                        <div class="gallery-body">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                            <div class="gallery-tags">
                                { for item.tags.iter().map(|tag| html! {
                                    <span key={*tag} class="gallery-tag">{*tag}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                }) }
            </RevealOnScroll>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    html! {
        <section class="cta-section">
            <RevealOnScroll classes="cta-content">
                <h2 class="reveal-item">
                    {"Ready to Design"}
                    <br />
                    <span class="text-gradient-gold">{"Something Beautiful?"}</span>
                </h2>
                <p class="reveal-item">
                    {"Sign in as a designer and start creating stunning room visualizations for your customers today."}
                </p>
                <div class="reveal-item">
                    <Button size={ButtonSize::Lg} classes="hero-cta">
                        {"Sign In as Designer"}
                        <IconGlyph icon={Icon::ArrowRight} size={20} classes="icon-trailing" />
                    </Button>
                </div>
            </RevealOnScroll>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = footer_year(&Local::now());
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{BRAND}</span>
                    <span class="footer-copyright">{copyright_notice(year)}</span>
                </div>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} aria-label={link.label}>
                            <IconGlyph icon={link.icon} size={20} />
                        </a>
                    }) }
                </div>
                <div class="footer-links">
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href}>{link.label}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::MockScrollSurface;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn menu_open() -> LandingState {
        LandingState {
            mobile_menu_open: true,
            ..LandingState::default()
        }
    }

    #[test]
    fn navigating_to_present_section_scrolls_once_and_closes_menu() {
        let mut surface = MockScrollSurface::new();
        surface
            .expect_scroll_to_anchor()
            .withf(|anchor: &str| anchor == "how-it-works")
            .times(1)
            .return_const(true);

        let action = navigate_to_section(&surface, SectionId::HowItWorks);
        assert_eq!(action, LandingAction::CloseMobileMenu);
        assert!(!menu_open().apply(action).mobile_menu_open);
    }

    #[test]
    fn navigating_to_missing_section_still_closes_menu() {
        let mut surface = MockScrollSurface::new();
        surface
            .expect_scroll_to_anchor()
            .withf(|anchor: &str| anchor == "gallery")
            .times(1)
            .return_const(false);

        let action = navigate_to_section(&surface, SectionId::Gallery);
        assert!(!menu_open().apply(action).mobile_menu_open);
    }

    #[test]
    fn navigating_with_closed_menu_keeps_it_closed() {
        let mut surface = MockScrollSurface::new();
        surface.expect_scroll_to_anchor().times(1).return_const(true);

        let state = LandingState::default().apply(navigate_to_section(&surface, SectionId::Features));
        assert_eq!(state, LandingState::default());
    }

    #[test]
    fn entered_sections_keeps_order_and_drops_exits() {
        let entries = vec![
            ObservedEntry { id: "gallery".into(), intersecting: true },
            ObservedEntry { id: "features".into(), intersecting: false },
            ObservedEntry { id: "unrelated".into(), intersecting: true },
            ObservedEntry { id: "features".into(), intersecting: true },
        ];
        assert_eq!(
            entered_sections(&entries),
            vec![SectionId::Gallery, SectionId::Features]
        );
    }

    #[test]
    fn batch_commits_to_last_entry() {
        let entries = vec![
            ObservedEntry { id: "features".into(), intersecting: true },
            ObservedEntry { id: "how-it-works".into(), intersecting: true },
        ];
        let state = LandingState::default()
            .apply(LandingAction::SectionsEntered(entered_sections(&entries)));
        assert_eq!(state.active_section, Some(SectionId::HowItWorks));
    }

    #[test]
    fn footer_year_follows_the_clock() {
        let new_years_eve = Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(footer_year(&new_years_eve), 2031);

        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(footer_year(&date), 2026);
    }

    #[test]
    fn copyright_notice_snapshot() {
        let now = Utc.with_ymd_and_hms(2029, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(copyright_notice(footer_year(&now)), "© 2029 All rights reserved.");
    }
}
