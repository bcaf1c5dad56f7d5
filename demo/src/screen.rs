//! Screens: a title and an ordered row of buttons.

use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("screen `{screen}` has no button `{label}` (available: {})", .available.join(", "))]
    UnknownButton {
        screen: String,
        label: String,
        available: Vec<String>,
    },
}

/// A labelled action. Pressing it runs exactly one navigation intent.
#[derive(Clone)]
pub struct Button {
    label: &'static str,
    action: Rc<dyn Fn()>,
}

impl Button {
    pub fn new(label: &'static str, action: impl Fn() + 'static) -> Self {
        Self {
            label,
            action: Rc::new(action),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn press(&self) {
        (self.action)();
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Button").field(&self.label).finish()
    }
}

#[derive(Debug, Clone)]
pub struct Screen {
    title: &'static str,
    buttons: Vec<Button>,
}

impl Screen {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            buttons: Vec::new(),
        }
    }

    pub fn button(mut self, label: &'static str, action: impl Fn() + 'static) -> Self {
        self.buttons.push(Button::new(label, action));
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.buttons.iter().map(Button::label).collect()
    }

    /// Press the first button labelled `label`.
    pub fn press(&self, label: &str) -> Result<(), ScreenError> {
        match self.buttons.iter().find(|b| b.label == label) {
            Some(button) => {
                tracing::debug!(screen = self.title, button = label, "button pressed");
                button.press();
                Ok(())
            }
            None => Err(ScreenError::UnknownButton {
                screen: self.title.to_string(),
                label: label.to_string(),
                available: self.labels().into_iter().map(String::from).collect(),
            }),
        }
    }

    pub fn summary(&self) -> ScreenSummary {
        ScreenSummary {
            title: self.title,
            buttons: self.labels(),
        }
    }
}

/// Two screens are equal when they show the same title and buttons.
impl PartialEq for Screen {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.labels() == other.labels()
    }
}

impl Eq for Screen {}

/// Serializable view of a screen, without its actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSummary {
    pub title: &'static str,
    pub buttons: Vec<&'static str>,
}
