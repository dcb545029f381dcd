//! The page hosting the presentation, seen from the controller

use heartlock_core::{Color, Viewport};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Addressable page elements, displayed under their stable page names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Dial(usize),
    Status,
    Scene(u32),
    Canvas,
    Navigation,
    LockWrapper,
    NextTrigger,
    Music,
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Dial(i) => write!(f, "tumbler-{i}"),
            ElementId::Status => write!(f, "status-msg"),
            ElementId::Scene(n) => write!(f, "scene-{n}"),
            ElementId::Canvas => write!(f, "main-canvas"),
            ElementId::Navigation => write!(f, "nav-controls"),
            ElementId::LockWrapper => write!(f, "lock-wrapper"),
            ElementId::NextTrigger => write!(f, "next-btn"),
            ElementId::Music => write!(f, "bg-music"),
        }
    }
}

/// Styling hint for status text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

impl Tone {
    pub fn color(&self) -> Color {
        match self {
            Tone::Error => Color::from_hex(0xff6b6b),
            Tone::Success => Color::from_hex(0x4fa3ff),
        }
    }
}

/// Failures the host may report. All of them are tolerated by the controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("element not found: {0}")]
    MissingElement(ElementId),

    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
}

pub type HostResult = std::result::Result<(), HostError>;

/// Everything the controller asks of the page
pub trait HostPage {
    /// Current drawing surface size. Queried after a resize notification.
    fn viewport(&self) -> Viewport;

    fn set_text(&mut self, element: ElementId, text: &str, tone: Option<Tone>) -> HostResult;

    fn set_visible(&mut self, element: ElementId, visible: bool) -> HostResult;

    /// Trigger a named one-shot animation on an element
    fn play_animation(&mut self, element: ElementId, animation: &str) -> HostResult;

    /// Start an audio element. Hosts may refuse without a prior user gesture.
    fn play_audio(&mut self, element: ElementId, volume: f32) -> HostResult;
}

/// A call the controller made on a [`HeadlessHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    SetText {
        element: ElementId,
        text: String,
        tone: Option<Tone>,
    },
    SetVisible {
        element: ElementId,
        visible: bool,
    },
    PlayAnimation {
        element: ElementId,
        animation: String,
    },
    PlayAudio {
        element: ElementId,
        volume: f32,
    },
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCommand::SetText {
                element,
                text,
                tone: Some(tone),
            } => write!(f, "{element}: text {text:?} ({})", tone.color().to_hex_string()),
            HostCommand::SetText { element, text, .. } => write!(f, "{element}: text {text:?}"),
            HostCommand::SetVisible { element, visible } => {
                write!(f, "{element}: {}", if *visible { "shown" } else { "hidden" })
            }
            HostCommand::PlayAnimation { element, animation } => {
                write!(f, "{element}: animate {animation}")
            }
            HostCommand::PlayAudio { element, volume } => {
                write!(f, "{element}: play at volume {volume}")
            }
        }
    }
}

/// In-memory page that records accepted calls
///
/// Elements can be marked missing and audio can be refused, to exercise the
/// controller's tolerance paths.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    commands: Vec<HostCommand>,
    missing: HashSet<ElementId>,
    reject_audio: bool,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
            missing: HashSet::new(),
            reject_audio: false,
        }
    }

    pub fn with_missing(mut self, element: ElementId) -> Self {
        self.missing.insert(element);
        self
    }

    pub fn rejecting_audio(mut self) -> Self {
        self.reject_audio = true;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    fn check(&self, element: ElementId) -> HostResult {
        if self.missing.contains(&element) {
            Err(HostError::MissingElement(element))
        } else {
            Ok(())
        }
    }
}

impl HostPage for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_text(&mut self, element: ElementId, text: &str, tone: Option<Tone>) -> HostResult {
        self.check(element)?;
        self.commands.push(HostCommand::SetText {
            element,
            text: text.to_string(),
            tone,
        });
        Ok(())
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) -> HostResult {
        self.check(element)?;
        self.commands.push(HostCommand::SetVisible { element, visible });
        Ok(())
    }

    fn play_animation(&mut self, element: ElementId, animation: &str) -> HostResult {
        self.check(element)?;
        self.commands.push(HostCommand::PlayAnimation {
            element,
            animation: animation.to_string(),
        });
        Ok(())
    }

    fn play_audio(&mut self, element: ElementId, volume: f32) -> HostResult {
        self.check(element)?;
        if self.reject_audio {
            return Err(HostError::PlaybackRejected(
                "audio requires a user interaction first".into(),
            ));
        }
        self.commands.push(HostCommand::PlayAudio { element, volume });
        Ok(())
    }
}
