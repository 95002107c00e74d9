//! Overlay state machine.
//!
//! At most one overlay is open at a time:
//!
//! ```text
//! Closed ──open(id)──► Detail ──apply──► Application ──submit ok──► Closed
//!    ▲                   │                    │
//!    └──close/esc/backdrop┴────────────────────┘
//! ```

use super::modal::DetailView;

/// Which overlay, if any, is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Listing detail for one record.
    Detail(DetailView),
    /// Application form for the titled listing.
    Application { vaga_title: String },
}

impl ModalState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Detail(_) => "detail",
            Self::Application { .. } => "application",
        }
    }
}
