//! Player input: menu clicks and mouse gestures.
//!
//! Input arrives out of band through an [`InputHandle`] and is queued until
//! the driver drains it at the start of a tick.

use combat_core::{PlayerCommand, Technique};
use tokio::sync::mpsc;

use crate::error::{Result, RuntimeError};

/// Battle menu buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Fight,
    Back,
    Run,
    Allies,
    Items,
    Punch,
    Shoot,
    Heat,
}

/// Which battle menu page is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// No battle is running.
    #[default]
    None,
    Main,
    Fight,
    Allies,
    Items,
    Run,
}

/// Screen position in pixels; `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Menu(MenuButton),
    /// A mouse drag from press to release.
    Gesture { from: Point, to: Point },
}

/// Meaning of a diagonal drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Left-down: back to the main menu.
    Back,
    /// Right-up.
    Punch,
    /// Left-up.
    Heat,
    /// Right-down.
    Shoot,
}

impl GestureKind {
    /// Classifies a drag by its direction. Drags that are not strictly
    /// diagonal mean nothing.
    pub fn classify(from: Point, to: Point) -> Option<Self> {
        let right = to.x > from.x;
        let left = to.x < from.x;
        let up = to.y < from.y;
        let down = to.y > from.y;

        match (left, right, up, down) {
            (true, _, _, true) => Some(Self::Back),
            (_, true, true, _) => Some(Self::Punch),
            (true, _, true, _) => Some(Self::Heat),
            (_, true, _, true) => Some(Self::Shoot),
            _ => None,
        }
    }
}

/// What an input event asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    /// Menu page to show once the event is handled.
    pub menu: Option<MenuState>,
    pub command: Option<PlayerCommand>,
}

impl Intent {
    fn navigate(menu: MenuState) -> Self {
        Self {
            menu: Some(menu),
            command: None,
        }
    }

    fn attack(technique: Technique) -> Self {
        Self {
            menu: Some(MenuState::Main),
            command: Some(technique.command()),
        }
    }
}

impl InputEvent {
    pub fn intent(&self) -> Intent {
        match *self {
            InputEvent::Menu(button) => match button {
                MenuButton::Fight => Intent::navigate(MenuState::Fight),
                MenuButton::Back => Intent::navigate(MenuState::Main),
                MenuButton::Allies => Intent::navigate(MenuState::Allies),
                MenuButton::Items => Intent::navigate(MenuState::Items),
                MenuButton::Run => Intent {
                    menu: Some(MenuState::Run),
                    command: Some(PlayerCommand::Run),
                },
                MenuButton::Punch => Intent::attack(Technique::Punch),
                MenuButton::Shoot => Intent::attack(Technique::Shoot),
                MenuButton::Heat => Intent::attack(Technique::Heat),
            },
            InputEvent::Gesture { from, to } => match GestureKind::classify(from, to) {
                Some(GestureKind::Back) => Intent::navigate(MenuState::Main),
                Some(GestureKind::Punch) => Intent::attack(Technique::Punch),
                Some(GestureKind::Heat) => Intent::attack(Technique::Heat),
                Some(GestureKind::Shoot) => Intent::attack(Technique::Shoot),
                None => Intent::default(),
            },
        }
    }
}

/// Cloneable sender for player input.
#[derive(Clone, Debug)]
pub struct InputHandle {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl InputHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<InputEvent>) -> Self {
        Self { tx }
    }

    /// Queues an event for the next tick.
    pub fn send(&self, event: InputEvent) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|_| RuntimeError::InputChannelClosed)
    }

    pub fn click(&self, button: MenuButton) -> Result<()> {
        self.send(InputEvent::Menu(button))
    }

    pub fn drag(&self, from: Point, to: Point) -> Result<()> {
        self.send(InputEvent::Gesture { from, to })
    }
}
