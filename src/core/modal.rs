use super::constants::MODAL_CLOSE_DELAY_MS;

/// Content snapshot copied from the trigger element when a modal opens.
///
/// The modal never looks at the trigger again, so removing the trigger while
/// the modal is up is harmless. Missing attributes render as empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl ModalContent {
    /// `fallback_title` is only consulted when `data-title` is absent.
    pub fn from_attributes(
        image: Option<String>,
        title: Option<String>,
        fallback_title: impl FnOnce() -> Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            image: image.unwrap_or_default(),
            title: title.or_else(fallback_title).unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }
}

/// Lifecycle of one overlay. `H` is the host's timer handle type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase<H> {
    Closed,
    Open,
    /// Exit animation running; `timer` finishes the close when it fires.
    Closing { timer: H },
}

/// Class flags the phase renders to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalFlags {
    pub open: bool,
    pub closing: bool,
}

#[derive(Clone, Debug)]
pub struct ModalController<H> {
    phase: ModalPhase<H>,
    content: Option<ModalContent>,
    close_delay_ms: u32,
}

impl<H: Copy + PartialEq> Default for ModalController<H> {
    fn default() -> Self {
        Self::new(MODAL_CLOSE_DELAY_MS)
    }
}

impl<H: Copy + PartialEq> ModalController<H> {
    pub fn new(close_delay_ms: u32) -> Self {
        Self {
            phase: ModalPhase::Closed,
            content: None,
            close_delay_ms,
        }
    }

    #[inline]
    pub fn phase(&self) -> ModalPhase<H> {
        self.phase
    }

    #[inline]
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    #[inline]
    pub fn close_delay_ms(&self) -> u32 {
        self.close_delay_ms
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.phase, ModalPhase::Closed)
    }

    /// Open and Closing both keep the page scroll suspended.
    #[inline]
    pub fn holds_scroll(&self) -> bool {
        !self.is_closed()
    }

    pub fn flags(&self) -> ModalFlags {
        match self.phase {
            ModalPhase::Closed => ModalFlags::default(),
            ModalPhase::Open => ModalFlags {
                open: true,
                closing: false,
            },
            ModalPhase::Closing { .. } => ModalFlags {
                open: true,
                closing: true,
            },
        }
    }

    /// Show `content`. From Closing, the pending close timer is handed to
    /// `cancel` and the modal goes straight back to Open. Returns false when
    /// already Open.
    pub fn open(&mut self, content: Option<ModalContent>, cancel: impl FnOnce(H)) -> bool {
        match self.phase {
            ModalPhase::Open => return false,
            ModalPhase::Closing { timer } => cancel(timer),
            ModalPhase::Closed => {}
        }
        self.content = content;
        self.phase = ModalPhase::Open;
        true
    }

    /// Start the exit animation. `schedule` receives the delay and returns
    /// the handle of the timer that will call [`finish_close`]; if the host
    /// could not schedule one, the modal closes at once. Only valid from
    /// Open; repeated calls while Closing schedule nothing.
    ///
    /// [`finish_close`]: ModalController::finish_close
    pub fn close(&mut self, schedule: impl FnOnce(u32) -> Option<H>) -> bool {
        if !matches!(self.phase, ModalPhase::Open) {
            return false;
        }
        match schedule(self.close_delay_ms) {
            Some(timer) => self.phase = ModalPhase::Closing { timer },
            None => {
                self.phase = ModalPhase::Closed;
                self.content = None;
            }
        }
        true
    }

    /// A click landed inside the overlay. Only a click whose target is the
    /// overlay root (the scrim) dismisses; clicks on content bubble up with a
    /// descendant target and are ignored.
    pub fn dismiss_on_click(
        &mut self,
        target_is_root: bool,
        schedule: impl FnOnce(u32) -> Option<H>,
    ) -> bool {
        target_is_root && self.close(schedule)
    }

    /// The close timer `fired` elapsed. Ignored unless it is the timer the
    /// current Closing phase is waiting on.
    pub fn finish_close(&mut self, fired: H) -> bool {
        match self.phase {
            ModalPhase::Closing { timer } if timer == fired => {
                self.phase = ModalPhase::Closed;
                self.content = None;
                true
            }
            _ => false,
        }
    }
}
