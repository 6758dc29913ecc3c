//! Mobile navigation menu transitions
//!
//! The menu has no model of its own: the expanded flag lives on the toggle
//! button's `aria-expanded` attribute. The DOM layer reads it, passes it in
//! with the current layout, and applies the returned effects.

use crate::viewport::LayoutMode;

/// Toggle button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    /// Read from an `aria-expanded` value. Anything but `"true"` is collapsed.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("true") => MenuState::Expanded,
            _ => MenuState::Collapsed,
        }
    }

    pub fn as_attribute(self) -> &'static str {
        match self {
            MenuState::Collapsed => "false",
            MenuState::Expanded => "true",
        }
    }

    pub fn is_expanded(self) -> bool {
        self == MenuState::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        }
    }

    /// Label describing what the next click will do
    pub fn label(self) -> MenuLabel {
        match self {
            MenuState::Collapsed => MenuLabel::Open,
            MenuState::Expanded => MenuLabel::Close,
        }
    }
}

/// Accessible label of the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLabel {
    Open,
    Close,
}

/// Panel visibility marker (`aria-hidden`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    /// `aria-hidden="true"`
    Hidden,
    /// `aria-hidden="false"`
    Shown,
    /// No `aria-hidden` attribute; the panel is part of the desktop layout
    Unmarked,
}

/// Instruction for the DOM layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    SetState(MenuState),
    SetLabel(MenuLabel),
    SetPanel(PanelVisibility),
    /// Add (true) or remove (false) the body scroll-lock class
    SetScrollLock(bool),
    PreventDefault,
}

/// Outcome of a click on the toggle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTransition {
    pub state: MenuState,
    pub effects: Vec<MenuEffect>,
}

/// Effects that force the panel into a state consistent with `layout`.
/// Runs on load and on every resize.
///
/// On mobile the menu collapses and the scroll lock is released with it.
/// On desktop the panel is always visible and scrolling is never locked;
/// the toggle's own flag is left alone.
pub fn sync_layout(layout: LayoutMode) -> Vec<MenuEffect> {
    match layout {
        LayoutMode::Mobile => vec![
            MenuEffect::SetPanel(PanelVisibility::Hidden),
            MenuEffect::SetState(MenuState::Collapsed),
            MenuEffect::SetLabel(MenuLabel::Open),
            MenuEffect::SetScrollLock(false),
        ],
        LayoutMode::Desktop => vec![
            MenuEffect::SetPanel(PanelVisibility::Unmarked),
            MenuEffect::SetScrollLock(false),
        ],
    }
}

/// Flip the menu after a click on the toggle button.
pub fn toggle(current: MenuState, layout: LayoutMode) -> MenuTransition {
    let state = current.toggled();
    let mut effects = vec![MenuEffect::PreventDefault, MenuEffect::SetState(state)];

    if layout.is_mobile() {
        let panel = if state.is_expanded() {
            PanelVisibility::Shown
        } else {
            PanelVisibility::Hidden
        };
        effects.push(MenuEffect::SetPanel(panel));
        effects.push(MenuEffect::SetScrollLock(state.is_expanded()));
    }

    effects.push(MenuEffect::SetLabel(state.label()));
    MenuTransition { state, effects }
}
