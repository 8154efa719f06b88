//! Contact form: acknowledge locally and reset. Nothing is sent anywhere.

use tracing::debug;

use crate::dom::{Document, NodeId};
use crate::event::{Dispatcher, Event, EventKind, EventTarget, Handler};
use crate::host::Host;

pub const CONTACT_FORM_ID: &str = "contact-form";

#[derive(Debug, Clone)]
pub struct ContactForm {
    form: Option<NodeId>,
    acknowledgment: String,
}

impl ContactForm {
    pub fn wire(doc: &Document, dispatcher: &mut Dispatcher, acknowledgment: &str) -> Self {
        let form = doc.element_by_id(CONTACT_FORM_ID);
        if let Some(form) = form {
            dispatcher.listen(EventTarget::Node(form), EventKind::Submit, Handler::ContactSubmit);
        }
        Self {
            form,
            acknowledgment: acknowledgment.to_string(),
        }
    }

    pub fn form(&self) -> Option<NodeId> {
        self.form
    }

    pub fn on_submit(&self, event: &mut Event, doc: &mut Document, host: &mut impl Host) {
        let Some(form) = self.form else {
            return;
        };
        event.prevent_default();
        debug!("Contact form captured locally");
        host.alert(&self.acknowledgment);
        doc.reset_form(form);
    }
}
