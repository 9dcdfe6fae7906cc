// Detail overlay state
//
// Closed -> Open(id) on a card click, Open -> Closed on any close trigger.
// The fade in/out timings are cosmetic and don't add states.

use std::time::Duration;

/// Delay before the overlay's "show" class is applied after it is displayed
pub const SHOW_DELAY: Duration = Duration::from_millis(10);

/// How long the fade-out runs before the overlay is hidden
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open {
        recipe_id: i64,
    },
}

/// Where a click inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    CloseButton,
    /// Outside the content area
    Backdrop,
    Content,
}

/// Visual transition to play after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Show { after: Duration },
    Hide { after: Duration },
}

impl Overlay {
    /// Bind a recipe and open
    pub fn open(&mut self, recipe_id: i64) -> Transition {
        *self = Overlay::Open { recipe_id };
        Transition::Show { after: SHOW_DELAY }
    }

    /// Unbind and close. Closing a closed overlay does nothing.
    pub fn close(&mut self) -> Option<Transition> {
        match self {
            Overlay::Closed => None,
            Overlay::Open { .. } => {
                *self = Overlay::Closed;
                Some(Transition::Hide { after: HIDE_DELAY })
            }
        }
    }

    pub fn click(&mut self, target: OverlayClick) -> Option<Transition> {
        match target {
            OverlayClick::CloseButton | OverlayClick::Backdrop => self.close(),
            OverlayClick::Content => None,
        }
    }

    pub fn selected(&self) -> Option<i64> {
        match self {
            Overlay::Open { recipe_id } => Some(*recipe_id),
            Overlay::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected().is_some()
    }
}
