//! Copy-to-clipboard acknowledgement state.
//!
//! A copy action flips the state to [`CopyState::Acknowledged`] and hands
//! back a ticket. The caller schedules a one-shot timer for the ticket and
//! calls [`CopyAck::expire`] when it fires. Triggering again issues a new
//! ticket, so a timer left over from an earlier click can never cut the
//! new acknowledgement short.

/// How long the "Copied!" acknowledgement stays visible, in milliseconds.
pub const COPY_ACK_WINDOW_MS: u32 = 2_000;

/// Visible state of a copy button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Acknowledged,
}

impl CopyState {
    /// Button label for this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy",
            Self::Acknowledged => "Copied!",
        }
    }
}

/// Handle for one scheduled revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckTicket {
    generation: u64,
}

impl AckTicket {
    /// Delay to hand to the timer.
    pub fn delay_ms(&self) -> u32 {
        COPY_ACK_WINDOW_MS
    }
}

/// Acknowledgement state machine for one code block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyAck {
    state: CopyState,
    generation: u64,
}

impl CopyAck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn is_acknowledged(&self) -> bool {
        self.state == CopyState::Acknowledged
    }

    /// Record a copy and return the ticket for its revert.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn trigger(&mut self) -> AckTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = CopyState::Acknowledged;

        AckTicket {
            generation: self.generation,
        }
    }

    /// Revert to idle if `ticket` is the latest one.
    ///
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if ticket.generation != self.generation || self.state == CopyState::Idle {
            return false;
        }

        self.state = CopyState::Idle;
        true
    }
}
