//! Single modal surface with a confirm/cancel sub-workflow

use super::content::ModalContent;
use std::fmt;

/// Work to run when the user confirms, given the services it mutates.
pub type ConfirmHandler<C> = Box<dyn FnOnce(&mut C)>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Cancel,
}

/// Confirm/Cancel handlers of an open confirmation dialog.
///
/// The handlers only respond once `wired` is set, which happens when the
/// display layer reports the dialog's controls as attached.
struct ConfirmWiring<C> {
    on_confirm: Option<ConfirmHandler<C>>,
    wired: bool,
}

pub struct OpenModal<C> {
    pub title: String,
    pub content: ModalContent,
    attached: bool,
    confirm: Option<ConfirmWiring<C>>,
}

pub enum ModalState<C> {
    Closed,
    Open(OpenModal<C>),
}

/// Owns the one modal surface. Showing new content replaces the old.
pub struct ModalController<C> {
    state: ModalState<C>,
    revision: u64,
}

impl<C> Default for ModalController<C> {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            revision: 0,
        }
    }
}

impl<C> fmt::Debug for ModalController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ModalState::Closed => f
                .debug_struct("ModalController")
                .field("state", &"closed")
                .field("revision", &self.revision)
                .finish(),
            ModalState::Open(open) => f
                .debug_struct("ModalController")
                .field("title", &open.title)
                .field("content", &open.content)
                .field("attached", &open.attached)
                .field("awaiting_choice", &open.confirm.is_some())
                .field("revision", &self.revision)
                .finish(),
        }
    }
}

impl<C> ModalController<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal with new content, discarding whatever was shown before.
    pub fn show(&mut self, title: impl Into<String>, content: ModalContent) {
        self.open(title.into(), content, None);
    }

    /// Opens a confirmation dialog. The Confirm and Cancel controls respond
    /// only after [`ModalController::attach`] has been called.
    pub fn confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: Option<ConfirmHandler<C>>,
    ) {
        let content = ModalContent::Confirm {
            message: message.into(),
        };
        let wiring = ConfirmWiring {
            on_confirm,
            wired: false,
        };
        self.open(title.into(), content, Some(wiring));
    }

    fn open(&mut self, title: String, content: ModalContent, confirm: Option<ConfirmWiring<C>>) {
        self.revision += 1;
        self.state = ModalState::Open(OpenModal {
            title,
            content,
            attached: false,
            confirm,
        });
    }

    /// Closes the modal. Pending confirm handlers are dropped unrun.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Called by the display layer once the current content is on screen.
    /// Wires the confirm controls if the content has them.
    ///
    /// Returns `true` if this call wired a pending confirmation.
    pub fn attach(&mut self) -> bool {
        let ModalState::Open(open) = &mut self.state else {
            return false;
        };
        open.attached = true;
        match open.confirm.as_mut() {
            Some(wiring) if !wiring.wired => {
                wiring.wired = true;
                true
            }
            _ => false,
        }
    }

    /// Applies the user's answer to an open confirmation dialog.
    ///
    /// Confirm runs the handler against `ctx` and then closes; Cancel only
    /// closes. Returns `false` without effect when no wired confirmation is
    /// open.
    pub fn select(&mut self, choice: ConfirmChoice, ctx: &mut C) -> bool {
        let ModalState::Open(open) = &mut self.state else {
            return false;
        };
        if !open.confirm.as_ref().is_some_and(|w| w.wired) {
            return false;
        }
        let handler = open.confirm.take().and_then(|w| w.on_confirm);
        if choice == ConfirmChoice::Confirm {
            if let Some(handler) = handler {
                handler(ctx);
            }
        }
        self.close();
        true
    }

    /// A click on the backdrop around the dialog closes it without confirming.
    pub fn click_backdrop(&mut self) -> bool {
        let was_open = self.is_open();
        self.close();
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn current(&self) -> Option<&OpenModal<C>> {
        match &self.state {
            ModalState::Open(open) => Some(open),
            ModalState::Closed => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut ModalContent> {
        match &mut self.state {
            ModalState::Open(open) => Some(&mut open.content),
            ModalState::Closed => None,
        }
    }

    /// Incremented each time new content is shown.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<C> OpenModal<C> {
    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether this is a confirmation dialog still waiting for an answer.
    pub fn awaiting_choice(&self) -> bool {
        self.confirm.is_some()
    }

    /// Whether the Confirm and Cancel controls respond yet.
    pub fn choice_wired(&self) -> bool {
        self.confirm.as_ref().is_some_and(|w| w.wired)
    }
}
