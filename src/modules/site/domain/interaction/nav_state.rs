use crate::site::domain::navigation::NavAction;

/// Offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    ToggleMenu,
    Scrolled { y: f64 },
    Activate(NavAction),
}

/// Interaction state owned by the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    menu: MenuState,
    scrolled: bool,
}

impl NavState {
    /// State for a page rendered at the given scroll offset.
    pub fn at_offset(scroll_y: f64) -> Self {
        Self {
            menu: MenuState::Closed,
            scrolled: scroll_y > SCROLL_THRESHOLD_PX,
        }
    }

    /// Applies `event`; returns the navigation to perform, if any.
    pub fn apply(&mut self, event: NavEvent) -> Option<NavAction> {
        match event {
            NavEvent::ToggleMenu => {
                self.menu = match self.menu {
                    MenuState::Closed => MenuState::Open,
                    MenuState::Open => MenuState::Closed,
                };
                None
            }
            NavEvent::Scrolled { y } => {
                self.scrolled = y > SCROLL_THRESHOLD_PX;
                None
            }
            NavEvent::Activate(action) => {
                self.menu = MenuState::Closed;
                Some(action).filter(|a| *a != NavAction::None)
            }
        }
    }

    pub fn after(&self, event: NavEvent) -> Self {
        let mut next = *self;
        next.apply(event);
        next
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        if self.is_menu_open() {
            vec![("menu", "open".to_string())]
        } else {
            Vec::new()
        }
    }
}
