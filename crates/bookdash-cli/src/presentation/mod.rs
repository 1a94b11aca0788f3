//! # Presentation Layer
//!
//! Turns report results into terminal output, following a small MVVM split.
//!
//! ## Data Flow
//!
//! ### Console output (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                         ==(text)==> [ View ]
//! ```
//!
//! ### Interactive TUI
//!
//! ```text
//! [ Handler: DashboardSource ] <--(selection)-- [ TuiRenderer (router) ]
//!            |                                         |
//!            +------------(ViewModels)---------------->+--> [ Component ] <-- keys
//!                                                                |
//!                                                            [ Widget ]
//! ```
//!
//! ## Rules
//!
//! 1. **View models hold raw data.** `average_rating: Option<f64>`, not `"7.8 ⭐"`.
//!    JSON output is the full view model and ignores `ViewMode`.
//! 2. **`ViewMode` changes density only.** Compact drops sections and columns
//!    from the text view; it never changes the numbers.
//! 3. **Presenters decide, views lay out.** Badges, tips and section contents are
//!    chosen in `presenters/`; colors, padding and number formatting live in
//!    `views/` and `formatters/`.
//! 4. **UI state stays in components.** Cursor, scroll offset and the current
//!    dashboard section belong to `views/tui/components/`, never to a view model.
//!    Components clamp offsets against the data before rendering.
//! 5. **The TUI router does no arithmetic.** When the country selection changes it
//!    asks its `DashboardSource` for new view models.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, DashboardSource, Renderer, TuiRenderer};
pub use view_models::{OutputFormat, ViewMode};
