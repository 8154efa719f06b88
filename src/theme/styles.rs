//! Global CSS styles for Folio.
//!
//! The marker classes the page controllers toggle (`show-tip`, `is-open`)
//! and the `hidden` attribute on sections are what make state visible.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #fbfaf7;
  --paper-raised: #ffffff;
  --ink: #1d2330;
  --ink-soft: rgba(29, 35, 48, 0.7);
  --rule: #e4e1da;

  /* Accent */
  --accent: #2f6f6a;
  --accent-soft: rgba(47, 111, 106, 0.12);

  /* Overlays */
  --scrim: rgba(12, 16, 22, 0.72);

  /* Typography */
  --font-serif: 'Source Serif Pro', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
}

[hidden] {
  display: none !important;
}

.page {
  outline: none;
  min-height: 100vh;
}

a {
  color: var(--accent);
  text-decoration: none;
}

.button {
  display: inline-block;
  padding: 0.6rem 1.4rem;
  border: none;
  border-radius: 999px;
  background: var(--accent);
  color: var(--paper-raised);
  font: inherit;
  cursor: pointer;
}

/* === Header === */
.site-header {
  padding: 3rem 2rem 2rem;
  border-bottom: 1px solid var(--rule);
}

.brand {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--ink);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  margin: 1rem 0;
  list-style: none;
}

.tagline {
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

/* === Sections === */
.section {
  max-width: 960px;
  margin: 0 auto;
  padding: 3rem 2rem;
}

.section h2 {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  margin-bottom: 1.25rem;
}

.skill-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
}

.skill {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: var(--accent-soft);
  font-size: var(--text-sm);
}

/* === Certificates === */
.certificate-grid,
.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.certificate-card,
.feature-card {
  position: relative;
  padding: 1rem;
  border: 1px solid var(--rule);
  border-radius: 12px;
  background: var(--paper-raised);
}

.certificate-image {
  display: block;
  width: 100%;
  border-radius: 8px;
  cursor: zoom-in;
}

.certificate-tip {
  position: absolute;
  top: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.3rem 0.8rem;
  border-radius: 6px;
  background: var(--ink);
  color: var(--paper-raised);
  font-size: var(--text-sm);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-fast);
}

.certificate-card.show-tip .certificate-tip {
  opacity: 1;
}

.issuer {
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.feature-card h3 {
  margin-bottom: 0.5rem;
}

.project-details {
  margin-top: 1rem;
  padding: 0.4rem 1rem;
  border: 1px solid var(--accent);
  border-radius: 999px;
  background: transparent;
  color: var(--accent);
  font: inherit;
  cursor: pointer;
}

/* === Contact === */
#contact-form {
  display: grid;
  gap: 0.75rem;
  max-width: 520px;
  margin-top: 1rem;
}

#contact-form input,
#contact-form textarea {
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--rule);
  border-radius: 8px;
  font: inherit;
}

/* === Footer === */
.site-footer {
  display: flex;
  justify-content: space-between;
  padding: 2rem;
  border-top: 1px solid var(--rule);
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

/* === Overlays === */
.lightbox,
.project-modal {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: var(--scrim);
  z-index: 100;
}

.lightbox.is-open,
.project-modal.is-open {
  display: flex;
}

.lightbox-content,
.project-modal-content {
  position: relative;
  max-width: min(90vw, 900px);
  max-height: 90vh;
  padding: 1.5rem;
  border-radius: 12px;
  background: var(--paper-raised);
  overflow: auto;
}

.lightbox-image {
  display: block;
  max-width: 100%;
  max-height: 75vh;
}

.lightbox-caption {
  margin-top: 0.75rem;
  text-align: center;
  color: var(--ink-soft);
}

.lightbox-close,
.project-modal-close {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  border: none;
  background: transparent;
  font-size: var(--text-lg);
  cursor: pointer;
}

#project-modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  margin-bottom: 0.75rem;
}
"#;
