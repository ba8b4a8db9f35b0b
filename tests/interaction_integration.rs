use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, prelude::*};
use tokio::sync::mpsc;

use foliotui::{
    action::Action,
    components::{Component, Page},
    content::Section,
    widgets::{NavBar, Palette, TabBar},
};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;
const VIEWPORT_Y: u16 = 1; // one nav row above the scrolled region

fn drawn_page() -> Page {
    let mut page = Page::new();
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    terminal
        .draw(|f| {
            let area = f.area();
            page.draw(f, area).expect("draw");
        })
        .expect("frame");
    page
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn jump_to(page: &mut Page, section: Section) {
    page.update(Action::GoToSection(section)).expect("goto");
    let mut steps = 0;
    while page.scroll_target().is_some() {
        page.update(Action::Render).expect("render");
        steps += 1;
        assert!(steps < 1000, "scroll animation must terminate");
    }
}

#[test]
fn test_smooth_scroll_is_animated_and_converges() {
    let mut page = drawn_page();
    page.update(Action::GoToSection(Section::Experience))
        .expect("goto");
    let target = page.scroll_target().expect("target set after layout");
    assert!(target > 0);

    let mut prev = page.scroll();
    let mut frames = 0;
    while page.scroll_target().is_some() {
        page.update(Action::Render).expect("render");
        assert!(page.scroll() >= prev, "scroll must move toward the target");
        assert!(page.scroll() <= target, "scroll must not overshoot");
        prev = page.scroll();
        frames += 1;
        assert!(frames < 1000);
    }
    assert_eq!(page.scroll(), target);
    assert!(frames > 1, "section jump is animated, not instant");
}

#[test]
fn test_manual_scroll_cancels_animation() {
    let mut page = drawn_page();
    page.update(Action::GoToSection(Section::Contact))
        .expect("goto");
    assert!(page.scroll_target().is_some());

    page.update(Action::ScrollDown).expect("scroll");
    assert_eq!(page.scroll_target(), None);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let mut page = drawn_page();
    page.update(Action::ScrollToBottom).expect("bottom");
    assert!(page.scroll() > 0);
    page.update(Action::ScrollToTop).expect("top");
    assert_eq!(page.scroll(), 0);
}

#[test]
fn test_hover_follows_pointer_and_is_exclusive() {
    let mut page = drawn_page();
    let (tx, mut rx) = mpsc::unbounded_channel();
    page.register_action_handler(tx).expect("handler");

    jump_to(&mut page, Section::Experience);
    let doc = page.build_document(WIDTH);
    let scroll = page.scroll();
    let cards = doc.experience_cards.clone();

    // enter the first card
    let row = VIEWPORT_Y + (cards[0].y + 1 - scroll);
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, row))
        .expect("move");
    let action = rx.try_recv().expect("hover action");
    assert_eq!(action, Action::HoverExperience(Some(0)));
    page.update(action).expect("update");
    assert_eq!(page.hovered_experience(), Some(0));

    // move to the second card: the first is left, the second entered
    let row = VIEWPORT_Y + (cards[1].y + 1 - scroll);
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, row))
        .expect("move");
    let action = rx.try_recv().expect("hover action");
    assert_eq!(action, Action::HoverExperience(Some(1)));
    page.update(action).expect("update");
    assert_eq!(page.hovered_experience(), Some(1));
    assert_eq!(page.hovered_stage(), None);

    // leave into the gap between cards
    let row = VIEWPORT_Y + (cards[0].y + cards[0].height - scroll);
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, row))
        .expect("move");
    let action = rx.try_recv().expect("hover action");
    assert_eq!(action, Action::HoverExperience(None));
    page.update(action).expect("update");
    assert_eq!(page.hovered_experience(), None);

    // no further hover traffic without movement across a boundary
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_stage_hover_mirrors_experience_hover() {
    let mut page = drawn_page();
    let (tx, mut rx) = mpsc::unbounded_channel();
    page.register_action_handler(tx).expect("handler");

    jump_to(&mut page, Section::Research);
    let doc = page.build_document(WIDTH);
    let scroll = page.scroll();
    let cards = doc.stage_cards.clone();
    assert!(cards[0].y >= scroll, "first stage card must be in view");

    let row = VIEWPORT_Y + (cards[0].y + 1 - scroll);
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, row))
        .expect("move");
    let action = rx.try_recv().expect("hover action");
    assert_eq!(action, Action::HoverStage(Some(0)));
    page.update(action).expect("update");
    assert_eq!(page.hovered_stage(), Some(0));
    assert_eq!(page.hovered_experience(), None);

    // leaving into the gap below the card clears the stage hover
    let row = VIEWPORT_Y + (cards[0].y + cards[0].height - scroll);
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, row))
        .expect("move");
    let action = rx.try_recv().expect("leave action");
    assert_eq!(action, Action::HoverStage(None));
}

#[test]
fn test_hover_clears_when_pointer_leaves_viewport() {
    let mut page = drawn_page();
    let (tx, mut rx) = mpsc::unbounded_channel();
    page.register_action_handler(tx).expect("handler");

    jump_to(&mut page, Section::Experience);
    let doc = page.build_document(WIDTH);
    let scroll = page.scroll();
    let row = VIEWPORT_Y + (doc.experience_cards[0].y + 1 - scroll);
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, row))
        .expect("move");
    let action = rx.try_recv().expect("hover action");
    page.update(action).expect("update");
    assert_eq!(page.hovered_experience(), Some(0));

    // the nav row is outside the scrolled region
    page.handle_mouse_events(mouse(MouseEventKind::Moved, 2, 0))
        .expect("move");
    let action = rx.try_recv().expect("leave action");
    assert_eq!(action, Action::HoverExperience(None));
}

#[test]
fn test_mouse_wheel_scrolls() {
    let mut page = drawn_page();
    let action = page
        .handle_mouse_events(mouse(MouseEventKind::ScrollDown, 10, 10))
        .expect("wheel");
    assert_eq!(action, Some(Action::ScrollDown));

    let action = page
        .handle_mouse_events(mouse(MouseEventKind::ScrollUp, 10, 10))
        .expect("wheel");
    assert_eq!(action, Some(Action::ScrollUp));
}

#[test]
fn test_nav_click_targets_section() {
    let mut page = drawn_page();
    let nav = NavBar::new(None, Palette::default());
    let x = (0..WIDTH)
        .find(|x| nav.hit(*x) == Some(Section::About))
        .expect("about entry");

    let action = page
        .handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), x, 0))
        .expect("click");
    assert_eq!(action, Some(Action::GoToSection(Section::About)));
}

#[test]
fn test_nav_click_on_gap_is_noop() {
    let mut page = drawn_page();
    // column 0 is the brand, not a section entry
    let action = page
        .handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0))
        .expect("click");
    assert_eq!(action, None);
    assert_eq!(page.scroll_target(), None);
}

#[test]
fn test_tab_click_selects_category() {
    let mut page = drawn_page();
    jump_to(&mut page, Section::Skills);
    let doc = page.build_document(WIDTH);
    let scroll = page.scroll();
    assert!(doc.tab_row >= scroll, "tab row must be in view");
    let row = VIEWPORT_Y + (doc.tab_row - scroll);

    let tab_bar = TabBar::new(0, Palette::default());
    let x = (0..WIDTH).find(|x| tab_bar.hit(*x) == Some(2)).expect("tab");

    let action = page
        .handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), x, row))
        .expect("click");
    assert_eq!(action, Some(Action::SelectSkillsTab(2)));
}
