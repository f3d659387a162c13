pub const HEADER_CLEARANCE: f64 = 80.0;
pub const LONG_PRESS_MS: u32 = 500;

/// Tracks which registered section is "current" for a scroll offset.
///
/// Sections keep their declaration order. The scan runs in reverse and stops
/// at the first section whose top, minus half the viewport, is above the
/// scroll offset, so later sections win ties.
#[derive(Clone, Debug)]
pub struct ScrollSpy<S> {
    sections: Vec<(S, Option<f64>)>,
    active: S,
}

impl<S: Copy + PartialEq> ScrollSpy<S> {
    pub fn new(declared: &[S]) -> Option<Self> {
        let first = *declared.first()?;
        Some(Self {
            sections: declared.iter().map(|&section| (section, None)).collect(),
            active: first,
        })
    }

    pub fn register(&mut self, section: S, top: f64) {
        if let Some(entry) = self.sections.iter_mut().find(|(id, _)| *id == section) {
            entry.1 = Some(top);
        }
    }

    pub fn unregister(&mut self, section: S) {
        if let Some(entry) = self.sections.iter_mut().find(|(id, _)| *id == section) {
            entry.1 = None;
        }
    }

    pub fn on_scroll(&mut self, scroll_offset: f64, viewport_height: f64) -> bool {
        let half_viewport = viewport_height / 2.0;
        let next = self
            .sections
            .iter()
            .rev()
            .find_map(|&(section, top)| {
                top.filter(|top| top - half_viewport < scroll_offset)
                    .map(|_| section)
            });

        match next {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> S {
        self.active
    }

    pub fn navigate_target(&self, section: S) -> Option<f64> {
        let top = self
            .sections
            .iter()
            .find(|(id, _)| *id == section)
            .and_then(|&(_, top)| top)?;
        Some(navigation_offset(top))
    }
}

pub fn navigation_offset(section_top: f64) -> f64 {
    (section_top - HEADER_CLEARANCE).max(0.0)
}

pub fn scroll_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_offset / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavToggle {
    pub label: &'static str,
    pub glyph: &'static str,
}

// Wide viewports keep the navigation pinned open and offer no toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sidebar {
    mobile: bool,
    open: bool,
}

impl Sidebar {
    pub fn new(mobile: bool) -> Self {
        Self {
            mobile,
            open: !mobile,
        }
    }

    pub fn resized(self, mobile: bool) -> Self {
        if mobile == self.mobile {
            self
        } else {
            Self::new(mobile)
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            open: self.open != self.mobile,
            ..self
        }
    }

    pub fn navigated(self) -> Self {
        Self {
            open: self.open && !self.mobile,
            ..self
        }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Option<NavToggle> {
        if !self.mobile {
            return None;
        }
        Some(if self.open {
            NavToggle {
                label: "Close navigation",
                glyph: "✕",
            }
        } else {
            NavToggle {
                label: "Open navigation",
                glyph: "☰",
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy_with(offsets: &[f64]) -> ScrollSpy<usize> {
        let ids: Vec<usize> = (0..offsets.len()).collect();
        let mut spy = ScrollSpy::new(&ids).expect("non-empty");
        for (id, &top) in offsets.iter().enumerate() {
            spy.register(id, top);
        }
        spy
    }

    #[test]
    fn first_declared_section_starts_active() {
        let spy = spy_with(&[0.0, 800.0]);
        assert_eq!(spy.active(), 0);
    }

    #[test]
    fn empty_declaration_has_no_spy() {
        assert!(ScrollSpy::<usize>::new(&[]).is_none());
    }

    #[test]
    fn middle_section_becomes_active() {
        let mut spy = spy_with(&[0.0, 800.0, 1600.0]);
        assert!(spy.on_scroll(1000.0, 600.0));
        assert_eq!(spy.active(), 1);
    }

    #[test]
    fn boundary_is_strict() {
        let mut spy = spy_with(&[0.0, 800.0, 1600.0]);
        spy.on_scroll(1300.0, 600.0);
        assert_eq!(spy.active(), 1);
        spy.on_scroll(1300.5, 600.0);
        assert_eq!(spy.active(), 2);
    }

    #[test]
    fn later_section_wins_overlap() {
        let mut spy = spy_with(&[0.0, 500.0, 500.0]);
        spy.on_scroll(400.0, 600.0);
        assert_eq!(spy.active(), 2);
    }

    #[test]
    fn unchanged_section_reports_no_change() {
        let mut spy = spy_with(&[0.0, 800.0]);
        assert!(!spy.on_scroll(10.0, 600.0));
        assert!(spy.on_scroll(600.0, 600.0));
        assert!(!spy.on_scroll(700.0, 600.0));
    }

    #[test]
    fn no_match_keeps_current_section() {
        let mut spy = spy_with(&[400.0, 800.0]);
        spy.on_scroll(1000.0, 600.0);
        assert_eq!(spy.active(), 1);
        assert!(!spy.on_scroll(0.0, 0.0));
        assert_eq!(spy.active(), 1);
    }

    #[test]
    fn unregistered_sections_are_skipped() {
        let mut spy = spy_with(&[0.0, 800.0, 1600.0]);
        spy.unregister(2);
        spy.on_scroll(5_000.0, 600.0);
        assert_eq!(spy.active(), 1);
        assert_eq!(spy.navigate_target(2), None);
    }

    #[test]
    fn navigation_leaves_header_clearance() {
        let spy = spy_with(&[0.0, 800.0]);
        assert_eq!(spy.navigate_target(1), Some(720.0));
        assert_eq!(spy.navigate_target(0), Some(0.0));
        assert_eq!(spy.navigate_target(9), None);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(500.0, 2_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_progress(5_000.0, 2_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1_000.0), 0.0);
    }

    #[test]
    fn desktop_sidebar_stays_open_without_a_toggle() {
        let sidebar = Sidebar::new(false);
        assert!(sidebar.is_open());
        assert_eq!(sidebar.toggle(), None);
        assert!(sidebar.toggled().is_open());
        assert!(sidebar.navigated().is_open());
    }

    #[test]
    fn mobile_toggle_describes_the_action_it_performs() {
        let closed = Sidebar::new(true);
        assert!(!closed.is_open());
        assert_eq!(closed.toggle().map(|toggle| toggle.label), Some("Open navigation"));

        let open = closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.toggle().map(|toggle| toggle.label), Some("Close navigation"));
        assert!(!open.navigated().is_open());
    }

    #[test]
    fn crossing_the_breakpoint_resets_the_sidebar() {
        let open_on_mobile = Sidebar::new(true).toggled();
        assert_eq!(open_on_mobile.resized(true), open_on_mobile);
        assert_eq!(open_on_mobile.resized(false), Sidebar::new(false));
        assert!(!Sidebar::new(false).resized(true).is_open());
    }
}
