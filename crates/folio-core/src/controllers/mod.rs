//! Page controllers.
//!
//! Each controller resolves the elements it needs once, at page-ready
//! time, and registers named handlers with the dispatcher. Absent
//! elements make the matching behavior a silent no-op.

pub mod anchors;
pub mod certificates;
pub mod contact;
pub mod projects;
pub mod sections;

pub use anchors::AnchorRouter;
pub use certificates::{find_cards, CertificateCard, CertificateTips, Lightbox};
pub use contact::ContactForm;
pub use projects::ProjectModal;
pub use sections::SectionVisibility;
