//! Panel navigation: the single active section plus the one-shot load gate
//! that holds back the home entrance animation.

use std::time::{Duration, Instant};

/// Delay between start-up and the load gate opening.
pub const LOAD_DELAY: Duration = Duration::from_millis(100);

/// One of the mutually exclusive content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Home,
    Experience,
    Education,
    Projects,
    Skills,
    Contact,
    Socials,
}

impl Panel {
    /// Navigation order.
    pub const ALL: [Panel; 7] = [
        Panel::Home,
        Panel::Experience,
        Panel::Education,
        Panel::Projects,
        Panel::Skills,
        Panel::Contact,
        Panel::Socials,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Panel::Home => "home",
            Panel::Experience => "experience",
            Panel::Education => "education",
            Panel::Projects => "projects",
            Panel::Skills => "skills",
            Panel::Contact => "contact",
            Panel::Socials => "socials",
        }
    }

    /// Tooltip text for the nav button.
    pub fn title(self) -> &'static str {
        match self {
            Panel::Home => "Home",
            Panel::Experience => "Experience",
            Panel::Education => "Education",
            Panel::Projects => "Projects",
            Panel::Skills => "Skills",
            Panel::Contact => "Contact",
            Panel::Socials => "Socials",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Panel::Home => "\u{25A3}",
            Panel::Experience => "\u{25C9}",
            Panel::Education => "\u{25C6}",
            Panel::Projects => "\u{25A6}",
            Panel::Skills => "\u{25C8}",
            Panel::Contact => "\u{25A2}",
            Panel::Socials => "\u{25CE}",
        }
    }

    pub fn from_id(id: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|p| p.id() == id)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::Home
    }
}

/// Error for a panel id outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPanel {
    pub id: String,
}

impl std::fmt::Display for UnknownPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown panel id: {:?}", self.id)
    }
}

impl std::error::Error for UnknownPanel {}

impl std::str::FromStr for Panel {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Panel::from_id(s).ok_or_else(|| UnknownPanel { id: s.to_string() })
    }
}

/// Single-writer register holding the visible panel.
///
/// Also remembers when the panel last changed so the newly visible block
/// can play its entrance transition.
#[derive(Debug, Clone)]
pub struct PanelNavigator {
    active: Panel,
    changed_at: Instant,
}

impl PanelNavigator {
    pub fn new(now: Instant) -> Self {
        Self {
            active: Panel::default(),
            changed_at: now,
        }
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    /// Show `panel`. Re-selecting the visible panel keeps its transition clock.
    pub fn set_active(&mut self, panel: Panel, now: Instant) {
        if panel == self.active {
            return;
        }
        log::debug!("panel {} -> {}", self.active.id(), panel.id());
        self.active = panel;
        self.changed_at = now;
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.active == panel
    }

    /// Time since the active panel became visible.
    pub fn shown_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.changed_at)
    }
}

impl Default for PanelNavigator {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

/// Write-once "loaded" flag, opened [`LOAD_DELAY`] after start.
#[derive(Debug, Clone)]
pub struct LoadGate {
    started: Instant,
    loaded: bool,
}

impl LoadGate {
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            loaded: false,
        }
    }

    /// Advance the gate. Returns `true` on the frame it opens.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.loaded {
            return false;
        }
        if now.saturating_duration_since(self.started) >= LOAD_DELAY {
            self.loaded = true;
            log::debug!("load gate open");
            return true;
        }
        false
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// How long the gate has been open, `None` while still closed.
    pub fn opened_for(&self, now: Instant) -> Option<Duration> {
        if !self.loaded {
            return None;
        }
        Some(now.saturating_duration_since(self.started + LOAD_DELAY))
    }

    /// Time left before the gate opens (zero once open).
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.loaded {
            return Duration::ZERO;
        }
        LOAD_DELAY.saturating_sub(now.saturating_duration_since(self.started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        let nav = PanelNavigator::new(Instant::now());
        assert_eq!(nav.active(), Panel::Home);
        assert!(nav.is_visible(Panel::Home));
    }

    #[test]
    fn latest_set_wins_and_one_visible() {
        let t0 = Instant::now();
        let mut nav = PanelNavigator::new(t0);
        let sequence = [
            Panel::Skills,
            Panel::Contact,
            Panel::Contact,
            Panel::Home,
            Panel::Socials,
            Panel::Education,
        ];
        for (i, panel) in sequence.iter().enumerate() {
            nav.set_active(*panel, t0 + Duration::from_millis(i as u64));
            assert_eq!(nav.active(), *panel);
            let visible = Panel::ALL.iter().filter(|p| nav.is_visible(**p)).count();
            assert_eq!(visible, 1);
        }
    }

    #[test]
    fn reselect_keeps_transition_clock() {
        let t0 = Instant::now();
        let mut nav = PanelNavigator::new(t0);
        nav.set_active(Panel::Projects, t0 + Duration::from_millis(10));
        nav.set_active(Panel::Projects, t0 + Duration::from_millis(500));
        assert_eq!(
            nav.shown_for(t0 + Duration::from_millis(510)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn ids_round_trip_and_unknown_rejected() {
        for panel in Panel::ALL {
            assert_eq!(panel.id().parse::<Panel>(), Ok(panel));
        }
        let err = "blog".parse::<Panel>().unwrap_err();
        assert_eq!(err.id, "blog");
        assert_eq!(Panel::from_id("Home"), None);
    }

    #[test]
    fn load_gate_opens_once() {
        let t0 = Instant::now();
        let mut gate = LoadGate::new(t0);
        assert!(!gate.tick(t0 + Duration::from_millis(50)));
        assert!(!gate.is_loaded());
        assert_eq!(
            gate.remaining(t0 + Duration::from_millis(50)),
            Duration::from_millis(50)
        );
        assert!(gate.tick(t0 + Duration::from_millis(100)));
        assert!(gate.is_loaded());
        assert!(!gate.tick(t0 + Duration::from_millis(200)));
        assert!(gate.is_loaded());
        assert_eq!(gate.remaining(t0), Duration::ZERO);
    }

    #[test]
    fn opened_for_counts_from_gate_open() {
        let t0 = Instant::now();
        let mut gate = LoadGate::new(t0);
        assert_eq!(gate.opened_for(t0 + Duration::from_millis(50)), None);
        // a late first tick still measures from the scheduled open instant
        gate.tick(t0 + Duration::from_millis(180));
        assert_eq!(
            gate.opened_for(t0 + Duration::from_millis(400)),
            Some(Duration::from_millis(300))
        );
    }
}
