//! Case Study Render
//!
//! Display side of case-study documents: a tabbed report over a complete,
//! sparse or missing document. Nothing here fails; missing data is omitted.
//!
//! # Architecture
//!
//! ```text
//! stored text → codec::decode_for_display → ReportViewer → ReportView → markdown
//!                                                ↑
//!                                   derive_tabs (presence-gated)
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod markdown;
pub mod sections;
pub mod tabs;
pub mod view;
pub mod viewer;

pub use config::{ConfigError, RenderConfig, DEFAULT_REPORT_TITLE};
pub use sections::{point_line, render_header, render_tab, rendered_buckets};
pub use tabs::{derive_tabs, TabId};
pub use view::{BadgeView, Block, HeaderView, ReportView, SectionView, TabView};
pub use viewer::ReportViewer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
