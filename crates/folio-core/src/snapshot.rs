//! Serializable view of the page's interactive state.

use std::fmt;

use serde::Serialize;

use crate::controllers::certificates::{find_cards, TIP_CLASS};
use crate::controllers::projects::{MODAL_DESCRIPTION_ID, MODAL_TITLE_ID};
use crate::dom::Document;
use crate::host::Host;
use crate::selector::Selector;
use crate::session::{UiSession, YEAR_ID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionState {
    pub id: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateState {
    pub title: String,
    pub tip_visible: bool,
    /// Deadline of the pending hide timer; the tip hides once the clock passes it
    pub hides_at_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxState {
    pub open: bool,
    pub aria_hidden: Option<String>,
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectModalState {
    pub open: bool,
    pub aria_hidden: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub now_ms: u64,
    pub year: Option<String>,
    pub sections: Vec<SectionState>,
    pub certificates: Vec<CertificateState>,
    /// `None` when the page has no lightbox
    pub lightbox: Option<LightboxState>,
    /// `None` when the page has no project modal
    pub project_modal: Option<ProjectModalState>,
    pub contact_form: Vec<FieldState>,
}

fn millis(d: std::time::Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl SessionSnapshot {
    pub fn capture<H: Host>(session: &UiSession<H>) -> Self {
        let doc = session.document();

        let sections = session
            .sections()
            .sections()
            .iter()
            .map(|(id, node)| SectionState {
                id: id.clone(),
                visible: !doc.is_hidden(*node),
            })
            .collect();

        let heading = Selector::tag("h3");
        let certificates = find_cards(doc)
            .into_iter()
            .map(|cert| CertificateState {
                title: doc
                    .query_selector(cert.card, &heading)
                    .map(|h| doc.text_content(h).trim().to_string())
                    .unwrap_or_default(),
                tip_visible: doc.has_class(cert.card, TIP_CLASS),
                hides_at_ms: session.tips().pending(cert.card).map(|h| millis(h.deadline())),
            })
            .collect();

        let lightbox = session.lightbox().root().map(|root| {
            let attr = |name: &str| {
                session
                    .lightbox()
                    .image()
                    .and_then(|img| doc.attribute(img, name))
                    .unwrap_or_default()
            };
            LightboxState {
                open: session.lightbox().is_open(doc),
                aria_hidden: doc.attribute(root, "aria-hidden"),
                src: attr("src"),
                alt: attr("alt"),
                caption: session
                    .lightbox()
                    .caption()
                    .map(|c| doc.text_content(c))
                    .unwrap_or_default(),
            }
        });

        let project_modal = session.projects().root().map(|root| ProjectModalState {
            open: session.projects().is_open(doc),
            aria_hidden: doc.attribute(root, "aria-hidden"),
            title: text_by_id(doc, MODAL_TITLE_ID),
            description: text_by_id(doc, MODAL_DESCRIPTION_ID),
        });

        let contact_form = session
            .contact()
            .form()
            .map(|form| {
                doc.form_controls(form)
                    .into_iter()
                    .map(|control| FieldState {
                        name: doc.attribute(control, "name").unwrap_or_default(),
                        value: doc.value(control).unwrap_or_default().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            now_ms: millis(session.now()),
            year: doc.element_by_id(YEAR_ID).map(|y| doc.text_content(y)),
            sections,
            certificates,
            lightbox,
            project_modal,
            contact_form,
        }
    }

    /// Ids of the sections currently visible.
    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.id.as_str())
            .collect()
    }
}

fn text_by_id(doc: &Document, id: &str) -> String {
    doc.element_by_id(id)
        .map(|n| doc.text_content(n))
        .unwrap_or_default()
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clock: {} ms", self.now_ms)?;
        if let Some(year) = &self.year {
            writeln!(f, "Year: {}", year)?;
        }

        writeln!(f, "Sections:")?;
        for s in &self.sections {
            writeln!(f, "  {} {}", if s.visible { "●" } else { "○" }, s.id)?;
        }

        if !self.certificates.is_empty() {
            writeln!(f, "Certificates:")?;
            for c in &self.certificates {
                write!(f, "  {}", c.title)?;
                if c.tip_visible {
                    write!(f, " [tip]")?;
                }
                if let Some(at) = c.hides_at_ms {
                    write!(f, " (hides at {} ms)", at)?;
                }
                writeln!(f)?;
            }
        }

        match &self.lightbox {
            Some(lb) if lb.open => writeln!(f, "Lightbox: open {} \"{}\"", lb.src, lb.caption)?,
            Some(_) => writeln!(f, "Lightbox: closed")?,
            None => writeln!(f, "Lightbox: absent")?,
        }

        match &self.project_modal {
            Some(m) if m.open => writeln!(f, "Project modal: open \"{}\"", m.title)?,
            Some(_) => writeln!(f, "Project modal: closed")?,
            None => writeln!(f, "Project modal: absent")?,
        }

        if !self.contact_form.is_empty() {
            writeln!(f, "Contact form:")?;
            for field in &self.contact_form {
                writeln!(f, "  {} = {:?}", field.name, field.value)?;
            }
        }
        Ok(())
    }
}
