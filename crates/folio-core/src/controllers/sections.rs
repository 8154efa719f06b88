//! Section visibility: managed sections behave like tabs.

use tracing::debug;

use crate::dom::{Document, NodeId};

#[derive(Debug, Clone)]
pub struct SectionVisibility {
    managed_ids: Vec<String>,
    /// Managed sections present in the document, in configured order
    sections: Vec<(String, NodeId)>,
}

impl SectionVisibility {
    /// Resolve the managed ids against `doc`, dropping any that are absent.
    pub fn wire(doc: &Document, managed_ids: &[String]) -> Self {
        let sections: Vec<(String, NodeId)> = managed_ids
            .iter()
            .filter_map(|id| doc.element_by_id(id).map(|node| (id.clone(), node)))
            .collect();
        debug!(
            configured = managed_ids.len(),
            present = sections.len(),
            "Managed sections resolved"
        );
        Self {
            managed_ids: managed_ids.to_vec(),
            sections,
        }
    }

    /// Whether `id` names a managed section, present or not.
    pub fn is_managed(&self, id: &str) -> bool {
        self.managed_ids.iter().any(|m| m == id)
    }

    pub fn sections(&self) -> &[(String, NodeId)] {
        &self.sections
    }

    /// Show the section whose id is `target_id` and hide the rest.
    pub fn show_only(&self, doc: &mut Document, target_id: &str) {
        debug!(target_id, "Focusing section");
        for (id, node) in &self.sections {
            doc.set_hidden(*node, id != target_id);
        }
    }

    pub fn show_all(&self, doc: &mut Document) {
        debug!("Showing all sections");
        for (_, node) in &self.sections {
            doc.set_hidden(*node, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MANAGED_SECTION_IDS;

    fn managed() -> Vec<String> {
        MANAGED_SECTION_IDS.iter().map(|s| s.to_string()).collect()
    }

    fn doc_with(ids: &[&str]) -> Document {
        let mut doc = Document::new();
        let body = doc.body();
        for id in ids {
            doc.append(body, "section").id(id).build();
        }
        doc
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let doc = doc_with(&["about", "contact"]);
        let sections = SectionVisibility::wire(&doc, &managed());
        let ids: Vec<_> = sections.sections().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["about", "contact"]);
        assert!(sections.is_managed("skills"));
        assert!(!sections.is_managed("top"));
    }

    #[test]
    fn test_show_only_then_all() {
        let mut doc = doc_with(&MANAGED_SECTION_IDS);
        let sections = SectionVisibility::wire(&doc, &managed());

        sections.show_only(&mut doc, "skills");
        let visible: Vec<_> = sections
            .sections()
            .iter()
            .filter(|(_, n)| !doc.is_hidden(*n))
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(visible, ["skills"]);

        sections.show_all(&mut doc);
        assert!(sections.sections().iter().all(|(_, n)| !doc.is_hidden(*n)));
    }

    #[test]
    fn test_show_only_unknown_hides_everything() {
        let mut doc = doc_with(&MANAGED_SECTION_IDS);
        let sections = SectionVisibility::wire(&doc, &managed());
        sections.show_only(&mut doc, "nowhere");
        assert!(sections.sections().iter().all(|(_, n)| doc.is_hidden(*n)));
    }
}
