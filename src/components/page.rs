use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Widget};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    content::{
        profile, Section, EDUCATION, EXPERIENCE, PIPELINE_STAGES, SKILL_CATEGORIES,
    },
    mode::Mode,
    text::wrap_words,
    tui::Frame,
    widgets::{ExperienceCard, LinkRow, NavBar, Palette, SkillTags, StageCard, TabBar},
};

const MIN_DOC_WIDTH: u16 = 40;
const SECTION_GAP: u16 = 2;
const CARD_GAP: u16 = 1;
/// Lines scrolled per key press or wheel notch.
const SCROLL_STEP: u16 = 3;

/// The whole page rendered into one off-screen buffer; hit regions come out
/// of the same layout pass that produced the buffer.
pub struct Document {
    pub buffer: Buffer,
    pub height: u16,
    pub width: u16,
    pub sections: Vec<(Section, u16)>,
    pub experience_cards: Vec<Rect>,
    pub stage_cards: Vec<Rect>,
    pub tab_bar: TabBar,
    pub tab_row: u16,
    pub skills_panel: Rect,
    pub hero_links: LinkRow,
    pub hero_links_row: u16,
    pub contact_links: LinkRow,
    pub contact_links_row: u16,
    pub diagram: Rect,
}

impl Document {
    pub fn section_start(&self, section: Section) -> Option<u16> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, y)| *y)
    }
}

/// Where the last frame put things on screen, kept for event routing.
struct PageLayout {
    nav_area: Rect,
    viewport: Rect,
    nav_bar: NavBar,
    doc_height: u16,
    sections: Vec<(Section, u16)>,
    experience_cards: Vec<Rect>,
    stage_cards: Vec<Rect>,
    tab_bar: TabBar,
    tab_row: u16,
    hero_links: LinkRow,
    hero_links_row: u16,
    contact_links: LinkRow,
    contact_links_row: u16,
    diagram: Rect,
}

/// The scrolling portfolio page.
///
/// All content comes from the static tables in [`crate::content`]; the only
/// mutable state is the active skills tab, the two hovered-card indices and
/// the viewport scroll.
pub struct Page {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    skills_tab: usize,
    hovered_experience: Option<usize>,
    hovered_stage: Option<usize>,
    scroll: u16,
    scroll_target: Option<u16>,
    layout: Option<PageLayout>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            skills_tab: 0,
            hovered_experience: None,
            hovered_stage: None,
            scroll: 0,
            scroll_target: None,
            layout: None,
        }
    }

    pub fn skills_tab(&self) -> usize {
        self.skills_tab
    }

    pub fn hovered_experience(&self) -> Option<usize> {
        self.hovered_experience
    }

    pub fn hovered_stage(&self) -> Option<usize> {
        self.hovered_stage
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_target(&self) -> Option<u16> {
        self.scroll_target
    }

    fn palette(&self) -> Palette {
        Palette::from_config(&self.config, Mode::Home)
    }

    /// Lay out and render the full page at `width` columns.
    pub fn build_document(&self, width: u16) -> Document {
        let width = width.max(MIN_DOC_WIDTH);
        let palette = self.palette();

        // measure pass
        let mut y = 0u16;
        let mut sections = Vec::new();
        for section in Section::ALL {
            sections.push((section, y));
            y += self.section_height(section, width);
            y += SECTION_GAP;
        }
        let height = y.saturating_sub(SECTION_GAP);

        let mut doc = Document {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            height,
            width,
            sections,
            experience_cards: Vec::new(),
            stage_cards: Vec::new(),
            tab_bar: TabBar::new(self.skills_tab, palette),
            tab_row: 0,
            skills_panel: Rect::default(),
            hero_links: LinkRow::new(palette),
            hero_links_row: 0,
            contact_links: LinkRow::new(palette),
            contact_links_row: 0,
            diagram: Rect::default(),
        };

        // render pass
        for (section, start) in doc.sections.clone() {
            self.render_section(section, start, width, palette, &mut doc);
        }

        doc
    }

    fn inner(width: u16) -> usize {
        width as usize
    }

    fn section_height(&self, section: Section, width: u16) -> u16 {
        let inner = Self::inner(width);
        let palette = self.palette();
        match section {
            Section::Hero => {
                let subtitle = wrap_words(profile::SUBTITLE, inner).len() as u16;
                // tagline, name, subtitle, gap, links, gap, focus header, focus rows
                3 + subtitle + 2 + 1 + profile::FOCUS.len() as u16
            }
            Section::About => {
                let mut h = 2; // title + gap
                for (i, paragraph) in profile::ABOUT.iter().enumerate() {
                    if i > 0 {
                        h += 1;
                    }
                    h += wrap_words(paragraph, inner).len() as u16;
                }
                h
            }
            Section::Research => {
                let mut h = 2; // title + gap
                h += 1; // research title
                h += wrap_words(profile::RESEARCH_SUBTITLE, inner).len() as u16;
                h += wrap_words(profile::RESEARCH_BLURB, inner).len() as u16;
                h += 1; // gap
                h += 3; // diagram box
                h += 1; // gap
                for stage in PIPELINE_STAGES {
                    h += StageCard::new(stage, false, palette).height(width);
                    h += CARD_GAP;
                }
                h += 1; // "Tech Stack:" label
                h += SkillTags::new(&profile::TECH_STACK, palette).height(width);
                h
            }
            Section::Experience => {
                let mut h = 2;
                for entry in EXPERIENCE {
                    h += ExperienceCard::new(entry, false, palette).height(width);
                    h += CARD_GAP;
                }
                h.saturating_sub(CARD_GAP)
            }
            Section::Skills => {
                let tags = SkillTags::new(SKILL_CATEGORIES[self.skills_tab].skills, palette);
                // title + gap + tabs + gap + bordered panel
                2 + 1 + 1 + tags.height(width.saturating_sub(4)) + 2
            }
            Section::Education => {
                let mut h = 2;
                for (i, entry) in EDUCATION.iter().enumerate() {
                    if i > 0 {
                        h += 1;
                    }
                    h += 3; // degree, school, period
                    h += wrap_words(entry.detail, inner).len() as u16;
                }
                h
            }
            Section::Contact => {
                let mut h = 2;
                h += wrap_words(profile::CONTACT_BLURB, inner).len() as u16;
                h += 1; // gap
                h += 1; // links
                h
            }
        }
    }

    fn render_section(
        &self,
        section: Section,
        start: u16,
        width: u16,
        palette: Palette,
        doc: &mut Document,
    ) {
        let inner = Self::inner(width);
        let buf = &mut doc.buffer;
        let mut y = start;
        let line = |buf: &mut Buffer, y: &mut u16, l: Line<'_>| {
            l.render(Rect::new(0, *y, width, 1), buf);
            *y += 1;
        };

        // every section but the hero opens with its heading
        if section != Section::Hero {
            line(
                buf,
                &mut y,
                Line::from(Span::styled(section.title(), palette.accent_bold)),
            );
            y += 1;
        }

        match section {
            Section::Hero => {
                line(
                    buf,
                    &mut y,
                    Line::from(Span::styled(
                        profile::TAGLINE.to_uppercase(),
                        palette.accent,
                    )),
                );
                line(
                    buf,
                    &mut y,
                    Line::from(Span::styled(profile::NAME, palette.text.bold())),
                );
                for row in wrap_words(profile::SUBTITLE, inner) {
                    line(buf, &mut y, Line::from(Span::styled(row, palette.muted)));
                }
                y += 1;
                doc.hero_links_row = y;
                doc.hero_links
                    .clone()
                    .render(Rect::new(0, y, width, 1), buf);
                y += 2;
                line(
                    buf,
                    &mut y,
                    Line::from(Span::styled("Current Focus", palette.accent_bold)),
                );
                for (title, detail) in profile::FOCUS {
                    line(
                        buf,
                        &mut y,
                        Line::from(vec![
                            Span::styled("▸ ", palette.accent),
                            Span::styled(title, palette.text.bold()),
                            Span::styled(format!(" · {detail}"), palette.muted),
                        ]),
                    );
                }
            }
            Section::About => {
                for (i, paragraph) in profile::ABOUT.iter().enumerate() {
                    if i > 0 {
                        y += 1;
                    }
                    for row in wrap_words(paragraph, inner) {
                        line(buf, &mut y, Line::from(Span::styled(row, palette.text)));
                    }
                }
            }
            Section::Research => {
                line(
                    buf,
                    &mut y,
                    Line::from(Span::styled(profile::RESEARCH_TITLE, palette.text.bold())),
                );
                for row in wrap_words(profile::RESEARCH_SUBTITLE, inner) {
                    line(buf, &mut y, Line::from(Span::styled(row, palette.muted)));
                }
                for row in wrap_words(profile::RESEARCH_BLURB, inner) {
                    line(buf, &mut y, Line::from(Span::styled(row, palette.text)));
                }
                y += 1;

                doc.diagram = Rect::new(0, y, width, 3);
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(palette.card_border);
                let diagram_inner = block.inner(doc.diagram);
                block.render(doc.diagram, buf);
                Line::from(vec![
                    Span::styled("Complete Workflow", palette.accent),
                    Span::styled("  pipeline diagram, press d to open", palette.muted),
                ])
                .render(diagram_inner, buf);
                y += 4;

                for (i, stage) in PIPELINE_STAGES.into_iter().enumerate() {
                    let hovered = self.hovered_stage == Some(i);
                    let card = StageCard::new(stage, hovered, palette);
                    let h = card.height(width);
                    let area = Rect::new(0, y, width, h);
                    doc.stage_cards.push(area);
                    card.render(area, buf);
                    y += h + CARD_GAP;
                }

                line(
                    buf,
                    &mut y,
                    Line::from(Span::styled("Tech Stack:", palette.accent_bold)),
                );
                let tags = SkillTags::new(&profile::TECH_STACK, palette);
                let h = tags.height(width);
                tags.render(Rect::new(0, y, width, h), buf);
            }
            Section::Experience => {
                for (i, entry) in EXPERIENCE.into_iter().enumerate() {
                    let hovered = self.hovered_experience == Some(i);
                    let card = ExperienceCard::new(entry, hovered, palette);
                    let h = card.height(width);
                    let area = Rect::new(0, y, width, h);
                    doc.experience_cards.push(area);
                    card.render(area, buf);
                    y += h + CARD_GAP;
                }
            }
            Section::Skills => {
                doc.tab_row = y;
                doc.tab_bar.clone().render(Rect::new(0, y, width, 1), buf);
                y += 2;

                let tags = SkillTags::new(SKILL_CATEGORIES[self.skills_tab].skills, palette);
                let panel_height = tags.height(width.saturating_sub(4)) + 2;
                let panel = Rect::new(0, y, width, panel_height);
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(palette.card_border)
                    .padding(Padding::horizontal(1));
                let panel_inner = block.inner(panel);
                doc.skills_panel = panel_inner;
                block.render(panel, buf);
                tags.render(panel_inner, buf);
            }
            Section::Education => {
                for (i, entry) in EDUCATION.iter().enumerate() {
                    if i > 0 {
                        y += 1;
                    }
                    line(
                        buf,
                        &mut y,
                        Line::from(Span::styled(entry.degree, palette.text.bold())),
                    );
                    line(
                        buf,
                        &mut y,
                        Line::from(Span::styled(entry.school, palette.accent_bold)),
                    );
                    line(buf, &mut y, Line::from(Span::styled(entry.period, palette.muted)));
                    for row in wrap_words(entry.detail, inner) {
                        line(buf, &mut y, Line::from(Span::styled(row, palette.text)));
                    }
                }
            }
            Section::Contact => {
                for row in wrap_words(profile::CONTACT_BLURB, inner) {
                    line(buf, &mut y, Line::from(Span::styled(row, palette.text)));
                }
                y += 1;
                doc.contact_links_row = y;
                doc.contact_links
                    .clone()
                    .render(Rect::new(0, y, width, 1), buf);
            }
        }
    }

    fn max_scroll(doc_height: u16, viewport: Rect) -> u16 {
        doc_height.saturating_sub(viewport.height)
    }

    /// The section currently at (or above) the top of the viewport.
    fn active_section(sections: &[(Section, u16)], scroll: u16) -> Option<Section> {
        sections
            .iter()
            .rev()
            .find(|(_, start)| *start <= scroll)
            .map(|(section, _)| *section)
    }

    /// One animation frame of the smooth scroll: step a quarter of the
    /// remaining distance (at least one line) toward the target.
    fn advance_scroll(&mut self, max_scroll: u16) {
        if let Some(target) = self.scroll_target {
            let target = target.min(max_scroll);
            let current = i32::from(self.scroll);
            let delta = i32::from(target) - current;
            if delta == 0 {
                self.scroll_target = None;
            } else {
                let step = (delta.abs() / 4).max(1);
                self.scroll = (current + delta.signum() * step) as u16;
            }
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll_target = None;
        let max = self
            .layout
            .as_ref()
            .map(|l| Self::max_scroll(l.doc_height, l.viewport))
            .unwrap_or(u16::MAX);
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(max));
        self.scroll = next as u16;
    }

    fn hover_candidates(&self, mouse: &MouseEvent) -> (Option<usize>, Option<usize>) {
        let Some(layout) = &self.layout else {
            return (None, None);
        };
        let viewport = layout.viewport;
        if !viewport.contains(Position::new(mouse.column, mouse.row)) {
            return (None, None);
        }
        let doc_x = mouse.column - viewport.x;
        let doc_y = (mouse.row - viewport.y).saturating_add(self.scroll);
        let pos = Position::new(doc_x, doc_y);

        let experience = layout
            .experience_cards
            .iter()
            .position(|r| r.contains(pos));
        let stage = layout.stage_cards.iter().position(|r| r.contains(pos));
        (experience, stage)
    }

    fn click(&self, mouse: &MouseEvent) -> Option<Action> {
        let layout = self.layout.as_ref()?;

        if mouse.row == layout.nav_area.y {
            let x = mouse.column.checked_sub(layout.nav_area.x)?;
            return layout.nav_bar.hit(x).map(Action::GoToSection);
        }

        let viewport = layout.viewport;
        if !viewport.contains(Position::new(mouse.column, mouse.row)) {
            return None;
        }
        let doc_x = mouse.column - viewport.x;
        let doc_y = (mouse.row - viewport.y).saturating_add(self.scroll);

        if doc_y == layout.tab_row {
            return layout.tab_bar.hit(doc_x).map(Action::SelectSkillsTab);
        }
        if doc_y == layout.hero_links_row {
            return layout.hero_links.hit(doc_x).map(Action::OpenLink);
        }
        if doc_y == layout.contact_links_row {
            return layout.contact_links.hit(doc_x).map(Action::OpenLink);
        }
        if layout.diagram.contains(Position::new(doc_x, doc_y)) {
            return Some(Action::OpenPipelineDiagram);
        }

        None
    }
}

impl Component for Page {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Moved => {
                let (experience, stage) = self.hover_candidates(&mouse);
                if experience != self.hovered_experience {
                    if let Some(tx) = &self.command_tx {
                        tx.send(Action::HoverExperience(experience))?;
                    }
                }
                if stage != self.hovered_stage {
                    if let Some(tx) = &self.command_tx {
                        tx.send(Action::HoverStage(stage))?;
                    }
                }
                Ok(None)
            }
            MouseEventKind::Down(MouseButton::Left) => Ok(self.click(&mouse)),
            MouseEventKind::ScrollUp => Ok(Some(Action::ScrollUp)),
            MouseEventKind::ScrollDown => Ok(Some(Action::ScrollDown)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Render => {
                let max = self
                    .layout
                    .as_ref()
                    .map(|l| Self::max_scroll(l.doc_height, l.viewport))
                    .unwrap_or(u16::MAX);
                self.advance_scroll(max);
            }
            Action::SelectSkillsTab(i) => {
                if i < SKILL_CATEGORIES.len() {
                    self.skills_tab = i;
                }
            }
            Action::NextSkillsTab => {
                self.skills_tab = (self.skills_tab + 1) % SKILL_CATEGORIES.len();
            }
            Action::PrevSkillsTab => {
                self.skills_tab =
                    (self.skills_tab + SKILL_CATEGORIES.len() - 1) % SKILL_CATEGORIES.len();
            }
            Action::HoverExperience(i) => self.hovered_experience = i,
            Action::HoverStage(i) => self.hovered_stage = i,
            Action::GoToSection(section) => {
                // unknown or not-yet-laid-out anchors are a silent no-op
                if let Some(layout) = &self.layout {
                    let start = layout
                        .sections
                        .iter()
                        .find(|(s, _)| *s == section)
                        .map(|(_, y)| *y);
                    if let Some(start) = start {
                        let max = Self::max_scroll(layout.doc_height, layout.viewport);
                        self.scroll_target = Some(start.min(max));
                    }
                }
            }
            Action::ScrollUp => self.scroll_by(-i32::from(SCROLL_STEP)),
            Action::ScrollDown => self.scroll_by(i32::from(SCROLL_STEP)),
            Action::ScrollToTop => {
                self.scroll_target = None;
                self.scroll = 0;
            }
            Action::ScrollToBottom => {
                self.scroll_target = None;
                self.scroll = self
                    .layout
                    .as_ref()
                    .map(|l| Self::max_scroll(l.doc_height, l.viewport))
                    .unwrap_or(0);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let palette = self.palette();

        let nav_area = Rect::new(area.x, area.y, area.width, area.height.min(1));
        // bottom two rows belong to the status bar
        let viewport = Rect::new(
            area.x,
            area.y.saturating_add(1),
            area.width,
            area.height.saturating_sub(3),
        );

        let doc = self.build_document(viewport.width);
        let max_scroll = Self::max_scroll(doc.height, viewport);
        self.scroll = self.scroll.min(max_scroll);

        // blit the visible slice of the document
        let visible_w = doc.width.min(viewport.width);
        for y in 0..viewport.height {
            let doc_y = y + self.scroll;
            if doc_y >= doc.height {
                break;
            }
            for x in 0..visible_w {
                if let (Some(src), Some(dst)) = (
                    doc.buffer.cell((x, doc_y)),
                    f.buffer_mut().cell_mut((viewport.x + x, viewport.y + y)),
                ) {
                    *dst = src.clone();
                }
            }
        }

        let active = Self::active_section(&doc.sections, self.scroll);
        let nav_bar = NavBar::new(active, palette);
        nav_bar.clone().render(nav_area, f.buffer_mut());

        self.layout = Some(PageLayout {
            nav_area,
            viewport,
            nav_bar,
            doc_height: doc.height,
            sections: doc.sections,
            experience_cards: doc.experience_cards,
            stage_cards: doc.stage_cards,
            tab_bar: doc.tab_bar,
            tab_row: doc.tab_row,
            hero_links: doc.hero_links,
            hero_links_row: doc.hero_links_row,
            contact_links: doc.contact_links,
            contact_links_row: doc.contact_links_row,
            diagram: doc.diagram,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_initial_state() {
        let page = Page::new();
        assert_eq!(page.skills_tab(), 0);
        assert_eq!(page.hovered_experience(), None);
        assert_eq!(page.hovered_stage(), None);
        assert_eq!(page.scroll(), 0);
    }

    #[test]
    fn test_tab_selection_bounds() -> Result<()> {
        let mut page = Page::new();
        page.update(Action::SelectSkillsTab(3))?;
        assert_eq!(page.skills_tab(), 3);

        // out-of-range selection is ignored
        page.update(Action::SelectSkillsTab(99))?;
        assert_eq!(page.skills_tab(), 3);

        Ok(())
    }

    #[test]
    fn test_tab_cycling_wraps() -> Result<()> {
        let mut page = Page::new();
        page.update(Action::PrevSkillsTab)?;
        assert_eq!(page.skills_tab(), SKILL_CATEGORIES.len() - 1);
        page.update(Action::NextSkillsTab)?;
        assert_eq!(page.skills_tab(), 0);

        Ok(())
    }

    #[test]
    fn test_hover_states_are_independent() -> Result<()> {
        let mut page = Page::new();
        page.update(Action::HoverExperience(Some(1)))?;
        page.update(Action::HoverStage(Some(4)))?;
        assert_eq!(page.hovered_experience(), Some(1));
        assert_eq!(page.hovered_stage(), Some(4));

        page.update(Action::HoverExperience(None))?;
        assert_eq!(page.hovered_experience(), None);
        assert_eq!(page.hovered_stage(), Some(4));

        Ok(())
    }

    #[test]
    fn test_goto_section_before_first_draw_is_noop() -> Result<()> {
        let mut page = Page::new();
        page.update(Action::GoToSection(Section::Contact))?;
        assert_eq!(page.scroll_target(), None);
        assert_eq!(page.scroll(), 0);

        Ok(())
    }

    #[test]
    fn test_document_sections_in_order() {
        let page = Page::new();
        let doc = page.build_document(80);
        let order: Vec<Section> = doc.sections.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::ALL.to_vec());

        let starts: Vec<u16> = doc.sections.iter().map(|(_, y)| *y).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted, "section offsets must be increasing");
    }

    #[test]
    fn test_document_records_all_cards() {
        let page = Page::new();
        let doc = page.build_document(80);
        assert_eq!(doc.experience_cards.len(), EXPERIENCE.len());
        assert_eq!(doc.stage_cards.len(), PIPELINE_STAGES.len());
        assert!(doc.height > 0);
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let page = Page::new();
        let doc = page.build_document(80);
        assert_eq!(
            Page::active_section(&doc.sections, 0),
            Some(Section::Hero)
        );
        let skills_start = doc.section_start(Section::Skills).expect("skills start");
        assert_eq!(
            Page::active_section(&doc.sections, skills_start),
            Some(Section::Skills)
        );
    }
}
