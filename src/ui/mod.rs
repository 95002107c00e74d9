//! User interface layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → RenderSink::apply
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: The [`RenderSink`] seam and the ANSI terminal sink
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Frame buffer, text fitting and search highlighting
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, AnsiRenderer, RenderSink};
pub use theme::Theme;
pub use viewmodel::{
    ApplicationView, DisplayItem, EmptyState, FieldView, FilterGroupView, FilterOption, FooterInfo,
    HeaderInfo, ModalView, NotificationInfo, PaginationInfo, SearchBarInfo, SortOption, UIViewModel,
};
