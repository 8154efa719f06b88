//! Page content and the document it builds.
//!
//! [`PageSpec`] is the author-controlled content of the portfolio.
//! [`build_document`] lays it out in the fixed structure the controllers
//! expect: managed sections by id, certificate cards, feature cards with
//! detail buttons, the contact form and the two overlays.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dom::{Document, NodeId};
use crate::error::FolioResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Fragment target without the leading `#`
    pub target: String,
}

impl NavLink {
    fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSpec {
    pub title: String,
    pub issuer: String,
    pub image: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    /// Key into the project description table; cards without one get a
    /// details button that does nothing.
    #[serde(default)]
    pub key: Option<String>,
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub default_value: String,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            default_value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    pub owner: String,
    pub tagline: String,
    pub nav: Vec<NavLink>,
    pub about: String,
    pub skills: Vec<String>,
    pub certificates: Vec<CertificateSpec>,
    pub projects: Vec<ProjectCard>,
    pub contact_email: String,
    pub contact_fields: Vec<FieldSpec>,
    pub include_lightbox: bool,
    pub include_project_modal: bool,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            owner: "Portfolio Owner".to_string(),
            tagline: "Software developer building practical web applications.".to_string(),
            nav: vec![
                NavLink::new("Home", "top"),
                NavLink::new("About", "about"),
                NavLink::new("Skills", "skills"),
                NavLink::new("Certificates", "certificates"),
                NavLink::new("Projects", "projects"),
                NavLink::new("Contact", "contact"),
            ],
            about: "I design and build full-stack web applications with a focus on clear interfaces and reliable back ends.".to_string(),
            skills: ["HTML", "CSS", "JavaScript", "Python", "SQL", "Git"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            certificates: vec![
                CertificateSpec {
                    title: "Web Development Fundamentals".to_string(),
                    issuer: "Online Academy".to_string(),
                    image: "assets/certificates/web-development.jpg".to_string(),
                    alt: "Web Development Fundamentals certificate".to_string(),
                },
                CertificateSpec {
                    title: "Python Programming".to_string(),
                    issuer: "Online Academy".to_string(),
                    image: "assets/certificates/python.jpg".to_string(),
                    alt: "Python Programming certificate".to_string(),
                },
            ],
            projects: vec![
                ProjectCard {
                    key: Some("user-profile".to_string()),
                    title: "User Profile and Networking System".to_string(),
                    summary: "Profiles, connections and secure information exchange.".to_string(),
                },
                ProjectCard {
                    key: Some("agro-mentor".to_string()),
                    title: "Agro Mentor".to_string(),
                    summary: "Agricultural guidance for farmers.".to_string(),
                },
            ],
            contact_email: "hello@example.com".to_string(),
            contact_fields: vec![
                FieldSpec::new("name", "Name", FieldKind::Text),
                FieldSpec::new("email", "Email", FieldKind::Email),
                FieldSpec::new("message", "Message", FieldKind::Textarea),
            ],
            include_lightbox: true,
            include_project_modal: true,
        }
    }
}

impl PageSpec {
    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Lay out `spec` as a document.
pub fn build_document(spec: &PageSpec) -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    build_header(&mut doc, body, spec);

    let main = doc.append(body, "main").build();
    build_about(&mut doc, main, spec);
    build_skills(&mut doc, main, spec);
    build_certificates(&mut doc, main, spec);
    build_projects(&mut doc, main, spec);
    build_contact(&mut doc, main, spec);

    let footer = doc.append(body, "footer").class("site-footer").build();
    let line = doc.append(footer, "p").build();
    doc.append(line, "span").text("© ").build();
    doc.append(line, "span").id("year").build();
    doc.append(line, "span").text(&format!(" {}", spec.owner)).build();
    doc.append(footer, "a")
        .class("back-to-top")
        .attr("href", "#top")
        .text("Back to top")
        .build();

    if spec.include_lightbox {
        build_lightbox(&mut doc, body);
    }
    if spec.include_project_modal {
        build_project_modal(&mut doc, body);
    }

    doc
}

fn build_header(doc: &mut Document, body: NodeId, spec: &PageSpec) {
    let header = doc.append(body, "header").id("top").class("site-header").build();
    doc.append(header, "a")
        .class("brand")
        .attr("href", "#top")
        .text(&spec.owner)
        .build();
    let nav = doc.append(header, "nav").class("site-nav").build();
    let list = doc.append(nav, "ul").class("nav-links").build();
    for link in &spec.nav {
        let item = doc.append(list, "li").build();
        doc.append(item, "a")
            .attr("href", &link.href())
            .text(&link.label)
            .build();
    }
    doc.append(header, "p").class("tagline").text(&spec.tagline).build();
    doc.append(header, "a")
        .class("button cta")
        .attr("href", "#contact")
        .text("Get in touch")
        .build();
}

fn section(doc: &mut Document, main: NodeId, id: &str, heading: &str) -> NodeId {
    let section = doc.append(main, "section").id(id).class("section").build();
    doc.append(section, "h2").text(heading).build();
    section
}

fn build_about(doc: &mut Document, main: NodeId, spec: &PageSpec) {
    let about = section(doc, main, "about", "About");
    doc.append(about, "p").text(&spec.about).build();
}

fn build_skills(doc: &mut Document, main: NodeId, spec: &PageSpec) {
    let skills = section(doc, main, "skills", "Skills");
    let list = doc.append(skills, "ul").class("skill-list").build();
    for skill in &spec.skills {
        doc.append(list, "li").class("skill").text(skill).build();
    }
}

fn build_certificates(doc: &mut Document, main: NodeId, spec: &PageSpec) {
    let certificates = section(doc, main, "certificates", "Certificates");
    let grid = doc.append(certificates, "div").class("certificate-grid").build();
    for cert in &spec.certificates {
        let card = doc.append(grid, "article").class("certificate-card").build();
        let media = doc
            .append(card, "a")
            .class("certificate-media")
            .attr("href", "#")
            .build();
        doc.append(media, "img")
            .class("certificate-image")
            .attr("src", &cert.image)
            .attr("alt", &cert.alt)
            .build();
        doc.append(card, "span")
            .class("certificate-tip")
            .text("Click to view full size")
            .build();
        doc.append(card, "h3").text(&cert.title).build();
        doc.append(card, "p").class("issuer").text(&cert.issuer).build();
    }
}

fn build_projects(doc: &mut Document, main: NodeId, spec: &PageSpec) {
    let projects = section(doc, main, "projects", "Projects");
    let grid = doc.append(projects, "div").class("feature-grid").build();
    for project in &spec.projects {
        let card = doc.append(grid, "article").class("feature-card").build();
        doc.append(card, "h3").text(&project.title).build();
        doc.append(card, "p").text(&project.summary).build();
        let button = doc
            .append(card, "button")
            .class("project-details")
            .attr("type", "button")
            .text("View details")
            .build();
        if let Some(key) = &project.key {
            doc.set_attribute(button, "data-project", key);
        }
    }
}

fn build_contact(doc: &mut Document, main: NodeId, spec: &PageSpec) {
    let contact = section(doc, main, "contact", "Contact");
    doc.append(contact, "p")
        .class("contact-email")
        .text(&spec.contact_email)
        .build();
    let form = doc.append(contact, "form").id("contact-form").build();
    for field in &spec.contact_fields {
        let control_id = format!("contact-{}", field.name);
        doc.append(form, "label")
            .attr("for", &control_id)
            .text(&field.label)
            .build();
        let control = match field.kind {
            FieldKind::Textarea => doc.append(form, "textarea"),
            FieldKind::Text => doc.append(form, "input").attr("type", "text"),
            FieldKind::Email => doc.append(form, "input").attr("type", "email"),
        };
        control
            .id(&control_id)
            .attr("name", &field.name)
            .default_value(&field.default_value)
            .build();
    }
    doc.append(form, "button")
        .class("button")
        .attr("type", "submit")
        .text("Send")
        .build();
}

fn build_lightbox(doc: &mut Document, body: NodeId) {
    let root = doc
        .append(body, "div")
        .id("certificate-lightbox")
        .class("lightbox")
        .attr("aria-hidden", "true")
        .attr("role", "dialog")
        .build();
    let content = doc.append(root, "div").class("lightbox-content").build();
    doc.append(content, "button")
        .class("lightbox-close")
        .attr("type", "button")
        .attr("aria-label", "Close")
        .text("×")
        .build();
    doc.append(content, "img").class("lightbox-image").attr("src", "").attr("alt", "").build();
    doc.append(content, "p").class("lightbox-caption").build();
}

fn build_project_modal(doc: &mut Document, body: NodeId) {
    let root = doc
        .append(body, "div")
        .id("project-modal")
        .class("project-modal")
        .attr("aria-hidden", "true")
        .attr("role", "dialog")
        .build();
    let content = doc.append(root, "div").class("project-modal-content").build();
    doc.append(content, "button")
        .class("project-modal-close")
        .attr("type", "button")
        .attr("aria-label", "Close")
        .text("×")
        .build();
    doc.append(content, "h3").id("project-modal-title").build();
    doc.append(content, "p").id("project-modal-description").build();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selector;

    fn count(doc: &Document, selector: &str) -> usize {
        let sel = Selector::parse(selector).unwrap();
        doc.query_selector_all(doc.body(), &sel).len()
    }

    #[test]
    fn test_default_page_has_required_shape() {
        let doc = build_document(&PageSpec::default());
        for id in [
            "year",
            "about",
            "skills",
            "certificates",
            "projects",
            "contact",
            "contact-form",
            "certificate-lightbox",
            "project-modal",
            "project-modal-title",
            "project-modal-description",
        ] {
            assert!(doc.element_by_id(id).is_some(), "missing #{id}");
        }
        assert_eq!(count(&doc, ".certificate-card .certificate-media .certificate-image"), 2);
        assert_eq!(count(&doc, ".feature-card h3"), 2);
        assert_eq!(count(&doc, ".project-details[data-project]"), 2);
        assert_eq!(count(&doc, ".nav-links a[href^=\"#\"]"), 6);
        assert_eq!(count(&doc, "#contact-form textarea"), 1);
    }

    #[test]
    fn test_overlays_are_optional() {
        let spec = PageSpec {
            include_lightbox: false,
            include_project_modal: false,
            ..PageSpec::default()
        };
        let doc = build_document(&spec);
        assert!(doc.element_by_id("certificate-lightbox").is_none());
        assert!(doc.element_by_id("project-modal").is_none());
    }

    #[test]
    fn test_keyless_project_has_no_data_attribute() {
        let spec = PageSpec {
            projects: vec![ProjectCard {
                key: None,
                title: "Untitled".to_string(),
                summary: String::new(),
            }],
            ..PageSpec::default()
        };
        let doc = build_document(&spec);
        assert_eq!(count(&doc, ".project-details"), 1);
        assert_eq!(count(&doc, ".project-details[data-project]"), 0);
    }

    #[test]
    fn test_page_json_defaults_missing_fields() {
        let spec = PageSpec::from_json(r#"{ "owner": "Ada" }"#).unwrap();
        assert_eq!(spec.owner, "Ada");
        assert!(spec.include_lightbox);
        assert_eq!(spec.nav.len(), 6);
    }
}
