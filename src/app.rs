use std::time::{Duration, Instant};

use dioxus::prelude::*;
use folio_core::{build_document, UiSession};

use crate::components::{
    AboutSection, CertificateLightbox, CertificatesSection, ContactSection, ProjectModal,
    ProjectsSection, SiteFooter, SiteHeader, SkillsSection,
};
use crate::context::PageHandle;
use crate::host::DesktopHost;
use crate::theme::GLOBAL_STYLES;

/// How often the timer clock is brought up to wall time.
const TICK: Duration = Duration::from_millis(50);

/// Root application component.
///
/// Builds the page session once, provides it to every component and
/// drives its timer clock.
#[component]
pub fn App() -> Element {
    let origin = use_hook(Instant::now);
    let session = use_signal(|| {
        let startup = crate::startup();
        UiSession::start(
            build_document(&startup.page),
            startup.config.clone(),
            DesktopHost::default(),
        )
    });
    let page = use_context_provider(|| PageHandle::new(session, origin));

    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            page.tick();
        }
    });

    // Keys bubble here from anywhere on the page
    let on_keydown = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        page.route(|s| {
            s.key_down(&key);
        });
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page", tabindex: "0", autofocus: true, onkeydown: on_keydown,
            SiteHeader {}
            main {
                AboutSection {}
                SkillsSection {}
                CertificatesSection {}
                ProjectsSection {}
                ContactSection {}
            }
            SiteFooter {}
            CertificateLightbox {}
            ProjectModal {}
        }
    }
}
