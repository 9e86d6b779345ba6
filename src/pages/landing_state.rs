use std::rc::Rc;

use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::content::SectionId;

/// Transient navbar state owned by the landing page. Reset on every page load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub scrolled: bool,
    pub active_section: Option<SectionId>,
    pub mobile_menu_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LandingAction {
    /// Current vertical scroll offset in px.
    Scrolled(f64),
    /// Sections that started intersecting the active band, in delivery order.
    SectionsEntered(Vec<SectionId>),
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl LandingState {
    pub fn apply(&self, action: LandingAction) -> LandingState {
        let mut next = self.clone();
        match action {
            LandingAction::Scrolled(offset) => {
                next.scrolled = offset > SCROLL_THRESHOLD_PX;
            }
            LandingAction::SectionsEntered(sections) => {
                // Last entry of the batch wins, regardless of overlap size.
                if let Some(last) = sections.last() {
                    next.active_section = Some(*last);
                }
            }
            LandingAction::ToggleMobileMenu => {
                next.mobile_menu_open = !self.mobile_menu_open;
            }
            LandingAction::CloseMobileMenu => {
                next.mobile_menu_open = false;
            }
        }
        next
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == Some(section)
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Entrance animation state of a section. Once triggered it stays triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Triggered,
}

impl Reveal {
    pub fn observe(self, intersecting: bool) -> Reveal {
        match self {
            Reveal::Pending if intersecting => Reveal::Triggered,
            other => other,
        }
    }

    pub fn is_triggered(self) -> bool {
        self == Reveal::Triggered
    }
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_at(offset: f64) -> bool {
        LandingState::default().apply(LandingAction::Scrolled(offset)).scrolled
    }

    #[test]
    fn scroll_flag_is_strictly_greater_than_threshold() {
        assert!(!scrolled_at(0.0));
        assert!(!scrolled_at(19.5));
        assert!(!scrolled_at(20.0));
        assert!(scrolled_at(20.5));
        assert!(scrolled_at(1200.0));
    }

    #[test]
    fn scrolling_back_up_clears_the_flag() {
        let state = LandingState::default()
            .apply(LandingAction::Scrolled(300.0))
            .apply(LandingAction::Scrolled(4.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn last_section_in_a_batch_wins() {
        let state = LandingState::default().apply(LandingAction::SectionsEntered(vec![
            SectionId::Gallery,
            SectionId::Features,
            SectionId::HowItWorks,
        ]));
        assert_eq!(state.active_section, Some(SectionId::HowItWorks));
        assert!(state.is_active(SectionId::HowItWorks));
        assert!(!state.is_active(SectionId::Gallery));
    }

    #[test]
    fn later_batches_replace_the_active_section() {
        let state = LandingState::default()
            .apply(LandingAction::SectionsEntered(vec![SectionId::Features]))
            .apply(LandingAction::SectionsEntered(vec![SectionId::Gallery]));
        assert_eq!(state.active_section, Some(SectionId::Gallery));
    }

    #[test]
    fn empty_batch_keeps_the_active_section() {
        let state = LandingState::default()
            .apply(LandingAction::SectionsEntered(vec![SectionId::Features]))
            .apply(LandingAction::SectionsEntered(Vec::new()));
        assert_eq!(state.active_section, Some(SectionId::Features));
    }

    #[test]
    fn double_toggle_restores_menu_state() {
        let closed = LandingState::default();
        let opened = closed.apply(LandingAction::ToggleMobileMenu);
        assert!(opened.mobile_menu_open);
        assert_eq!(opened.apply(LandingAction::ToggleMobileMenu), closed);

        let reopened = opened
            .apply(LandingAction::ToggleMobileMenu)
            .apply(LandingAction::ToggleMobileMenu);
        assert_eq!(reopened, opened);
    }

    #[test]
    fn close_is_idempotent() {
        let state = LandingState::default().apply(LandingAction::CloseMobileMenu);
        assert!(!state.mobile_menu_open);
        let state = state
            .apply(LandingAction::ToggleMobileMenu)
            .apply(LandingAction::CloseMobileMenu)
            .apply(LandingAction::CloseMobileMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn flags_are_independent() {
        let state = LandingState::default()
            .apply(LandingAction::ToggleMobileMenu)
            .apply(LandingAction::Scrolled(80.0))
            .apply(LandingAction::SectionsEntered(vec![SectionId::Gallery]));
        assert_eq!(
            state,
            LandingState {
                scrolled: true,
                active_section: Some(SectionId::Gallery),
                mobile_menu_open: true,
            }
        );
    }

    #[test]
    fn reveal_triggers_once() {
        let reveal = Reveal::default();
        assert_eq!(reveal.observe(false), Reveal::Pending);
        let reveal = reveal.observe(true);
        assert!(reveal.is_triggered());
        // leaving and re-entering the viewport never resets it
        assert_eq!(reveal.observe(false), Reveal::Triggered);
        assert_eq!(reveal.observe(false).observe(true), Reveal::Triggered);
    }

    #[test]
    fn stagger_grows_linearly() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay_ms(i, 120)).collect();
        assert_eq!(delays, vec![0, 120, 240, 360]);
        assert_eq!(stagger_delay_ms(0, 100), 0);
    }
}
