//! Folio Core Library
//!
//! Interactivity for a static portfolio page, modelled headlessly.
//!
//! ## Overview
//!
//! The page is an arena [`Document`]. At page-ready time a [`UiSession`]
//! wires five controllers to it:
//!
//! - **Sections**: the managed sections behave like tabs
//! - **Anchors**: in-page links narrow to a section or reveal all, then scroll
//! - **Contact form**: acknowledged locally and reset, never sent
//! - **Certificates**: a click shows a short-lived tip and opens the lightbox
//! - **Projects**: detail buttons open a modal from a static description table
//!
//! Input is fed in as discrete events; timers run on a virtual clock the
//! caller advances.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{build_document, FolioConfig, PageSpec, RecordingHost, Selector, UiSession};
//!
//! let doc = build_document(&PageSpec::default());
//! let mut session = UiSession::start(doc, FolioConfig::default(), RecordingHost::new());
//!
//! let link = session.find(&Selector::parse(".nav-links a[href=\"#skills\"]")?).unwrap();
//! session.click(link);
//! assert_eq!(session.snapshot().visible_sections(), ["skills"]);
//! # Ok::<(), folio_core::FolioError>(())
//! ```

pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod event;
pub mod host;
pub mod logging;
pub mod page;
pub mod script;
pub mod selector;
pub mod session;
pub mod snapshot;
pub mod timer;

// Re-exports
pub use config::{FolioConfig, ProjectCatalog};
pub use dom::{Document, Element, NodeId};
pub use error::{FolioError, FolioResult};
pub use event::{Event, EventKind, EventTarget, Handler, ESCAPE};
pub use host::{Host, RecordingHost, ScrollRequest};
pub use page::{build_document, PageSpec};
pub use script::{Script, Step, StepOutcome};
pub use selector::Selector;
pub use session::{DispatchOutcome, UiSession};
pub use snapshot::SessionSnapshot;
pub use timer::{TimerHandle, TimerQueue, TimerTask};
