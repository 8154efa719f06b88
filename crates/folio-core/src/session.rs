//! The page session.
//!
//! [`UiSession`] is built once, when the page is ready, and owns
//! everything the page script touches: the document, the listener
//! registry, the timer clock, the host and the controllers. Input events
//! are fed in one at a time and every handler runs to completion before
//! the call returns.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::FolioConfig;
use crate::controllers::{
    find_cards, AnchorRouter, CertificateTips, ContactForm, Lightbox, ProjectModal,
    SectionVisibility,
};
use crate::dom::{Document, NodeId};
use crate::event::{Dispatcher, Event, Handler, Invocation};
use crate::host::Host;
use crate::selector::Selector;
use crate::snapshot::SessionSnapshot;
use crate::timer::{TimerQueue, TimerTask};

pub const YEAR_ID: &str = "year";

/// What happened to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// A handler suppressed the host's default action
    pub default_prevented: bool,
    pub handlers_run: usize,
}

pub struct UiSession<H: Host> {
    document: Document,
    dispatcher: Dispatcher,
    timers: TimerQueue,
    host: H,
    config: FolioConfig,
    sections: SectionVisibility,
    anchors: AnchorRouter,
    contact: ContactForm,
    tips: CertificateTips,
    lightbox: Lightbox,
    projects: ProjectModal,
}

impl<H: Host> UiSession<H> {
    /// Page-ready: stamp the footer year and wire every controller.
    ///
    /// Wiring order fixes listener order on shared elements: anchors,
    /// the contact form, certificate tips, the lightbox, then the project
    /// modal.
    pub fn start(mut document: Document, config: FolioConfig, host: H) -> Self {
        if let Some(year) = document.element_by_id(YEAR_ID) {
            document.set_text_content(year, &host.current_year().to_string());
        }

        let mut dispatcher = Dispatcher::new();
        let sections = SectionVisibility::wire(&document, &config.managed_sections);
        let anchors = AnchorRouter::wire(&document, &mut dispatcher);
        let contact = ContactForm::wire(&document, &mut dispatcher, &config.acknowledgment);
        let cards = find_cards(&document);
        let tips = CertificateTips::wire(&cards, &mut dispatcher, config.tip_duration());
        let lightbox = Lightbox::wire(
            &document,
            &mut dispatcher,
            &cards,
            &config.default_lightbox_caption,
        );
        let projects = ProjectModal::wire(
            &document,
            &mut dispatcher,
            &config.projects,
            &config.default_project_title,
        );

        info!(
            listeners = dispatcher.len(),
            certificates = cards.len(),
            "Page session started"
        );

        Self {
            document,
            dispatcher,
            timers: TimerQueue::new(),
            host,
            config,
            sections,
            anchors,
            contact,
            tips,
            lightbox,
            projects,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn sections(&self) -> &SectionVisibility {
        &self.sections
    }

    pub fn anchors(&self) -> &AnchorRouter {
        &self.anchors
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn tips(&self) -> &CertificateTips {
        &self.tips
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn projects(&self) -> &ProjectModal {
        &self.projects
    }

    /// Time since page-ready on the session clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn next_timer_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Resolve `selector` to its first match in the document.
    pub fn find(&self, selector: &Selector) -> Option<NodeId> {
        self.document.query_selector(self.document.body(), selector)
    }

    pub fn click(&mut self, node: NodeId) -> DispatchOutcome {
        let outcome = self.dispatch(Event::click(node));
        if !outcome.default_prevented {
            if let Some(form) = self.implicit_submission(node) {
                let submitted = self.dispatch(Event::submit(form));
                return DispatchOutcome {
                    default_prevented: submitted.default_prevented,
                    handlers_run: outcome.handlers_run + submitted.handlers_run,
                };
            }
        }
        outcome
    }

    pub fn submit(&mut self, form: NodeId) -> DispatchOutcome {
        self.dispatch(Event::submit(form))
    }

    pub fn key_down(&mut self, key: &str) -> DispatchOutcome {
        self.dispatch(Event::key_down(key))
    }

    /// User input into a form control.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.document.set_value(node, value);
    }

    /// Deliver `event` to every listener on its path, in order.
    pub fn dispatch(&mut self, mut event: Event) -> DispatchOutcome {
        let route = self.dispatcher.route(&self.document, &event);
        debug!(kind = ?event.kind(), target = ?event.target(), listeners = route.len(), "Dispatching");
        for invocation in &route {
            self.invoke(*invocation, &mut event);
        }
        DispatchOutcome {
            default_prevented: event.default_prevented(),
            handlers_run: route.len(),
        }
    }

    fn invoke(&mut self, invocation: Invocation, event: &mut Event) {
        let current = invocation.current_target.node();
        let doc = &mut self.document;
        match invocation.handler {
            Handler::AnchorNavigate => {
                if let Some(link) = current {
                    self.anchors
                        .on_click(link, event, doc, &self.sections, &mut self.host);
                }
            }
            Handler::ContactSubmit => self.contact.on_submit(event, doc, &mut self.host),
            Handler::CertificateTip { card } => {
                self.tips.on_media_click(card, event, doc, &mut self.timers)
            }
            Handler::OpenLightbox { image } => self.lightbox.on_media_click(image, doc),
            Handler::LightboxBackdrop => self.lightbox.on_backdrop_click(event, doc),
            Handler::LightboxClose => self.lightbox.close(doc),
            Handler::LightboxEscape => self.lightbox.on_key_down(event, doc),
            Handler::ProjectDetails => {
                if let Some(button) = current {
                    self.projects.on_details_click(button, doc);
                }
            }
            Handler::ProjectModalBackdrop => self.projects.on_backdrop_click(event, doc),
            Handler::ProjectModalClose => self.projects.close(doc),
            Handler::ProjectModalEscape => self.projects.on_key_down(event, doc),
        }
    }

    /// A click on a submit button (or inside one) submits its form.
    fn implicit_submission(&self, node: NodeId) -> Option<NodeId> {
        let button = self.document.closest(node, &Selector::tag("button"))?;
        let kind = self
            .document
            .attribute(button, "type")
            .unwrap_or_else(|| "submit".to_string());
        if kind != "submit" {
            return None;
        }
        let form_selector = Selector::tag("form");
        self.document.closest(button, &form_selector)
    }

    /// Advance the clock by `by`, firing due timers in order.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        self.advance_to(until);
    }

    /// Advance the clock to `until` (measured from page-ready). Earlier
    /// readings are ignored.
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(task) = self.timers.pop_due(until) {
            match task {
                TimerTask::HideTip { card } => self.tips.on_timer(card, &mut self.document),
            }
        }
        self.timers.settle(until);
    }

    pub fn show_only_section(&mut self, target_id: &str) {
        self.sections.show_only(&mut self.document, target_id);
    }

    pub fn show_all_sections(&mut self) {
        self.sections.show_all(&mut self.document);
    }

    pub fn open_lightbox(&mut self, src: &str, alt: &str) {
        self.lightbox.open(&mut self.document, src, alt);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close(&mut self.document);
    }

    pub fn open_project_modal(&mut self, title: &str, description: &str) {
        self.projects.open(&mut self.document, title, description);
    }

    pub fn close_project_modal(&mut self) {
        self.projects.close(&mut self.document);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}

impl<H: Host> std::fmt::Debug for UiSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiSession")
            .field("elements", &self.document.len())
            .field("listeners", &self.dispatcher.len())
            .field("now", &self.timers.now())
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}
