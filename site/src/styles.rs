//! CSS for the landing page.
//!
//! One stylesheet, inlined by [`crate::components::PageDocument`] for static
//! renders and injected by the CSR entry point. Entrance transitions are CSS
//! keyframes; components set `animation-delay` inline to stagger cards.
//!
//! # Customization
//!
//! ```rust
//! use majorem_site::styles::SITE_CSS;
//!
//! let my_css = ".tool-card { border-radius: 4px; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete stylesheet - light theme, blue accent.
pub const SITE_CSS: &str = r#"
:root {
    --bg-page: #f8fafc;
    --bg-page-end: #eff6ff;
    --bg-white: #ffffff;
    --bg-muted: #f9fafb;
    --bg-accent-soft: #eff6ff;
    --bg-accent-icon: #dbeafe;
    --text-strong: #111827;
    --text-body: #4b5563;
    --text-soft: #6b7280;
    --text-faint: #9ca3af;
    --border: #e5e7eb;
    --border-input: #d1d5db;
    --accent: #2563eb;
    --accent-hover: #1d4ed8;
    --accent-deep: #1e40af;
    --success: #22c55e;
    --star: #facc15;
    --positive-bg: #dcfce7;
    --positive-fg: #166534;
    --negative-bg: #fee2e2;
    --negative-fg: #991b1b;
    --neutral-bg: #f3f4f6;
    --neutral-fg: #1f2937;
    --radius: 12px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1280px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text-body);
    background: linear-gradient(135deg, var(--bg-page), var(--bg-page-end));
    min-height: 100vh;
    line-height: 1.6;
}

h1, h2, h3, h4 {
    color: var(--text-strong);
    margin: 0;
    line-height: 1.2;
}

a {
    color: inherit;
    text-decoration: none;
}

.mono {
    font-family: var(--font-mono);
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow {
    max-width: 896px;
}

/* Icons */
.icon-accent { color: var(--accent); }
.icon-on-accent { color: var(--bg-white); }
.icon-success { color: var(--success); flex-shrink: 0; }
.icon-star { color: var(--star); }

/* Entrance transitions */
@keyframes rise-in {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in-left {
    from { opacity: 0; transform: translateX(-30px); }
    to { opacity: 1; transform: translateX(0); }
}

@keyframes slide-in-right {
    from { opacity: 0; transform: translateX(30px); }
    to { opacity: 1; transform: translateX(0); }
}

.reveal {
    animation: rise-in 0.6s ease-out both;
}

.reveal-left {
    animation: slide-in-left 0.6s ease-out both;
}

.reveal-right {
    animation: slide-in-right 0.6s ease-out both;
}

@media (prefers-reduced-motion: reduce) {
    .reveal, .reveal-left, .reveal-right {
        animation: none;
    }
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 6px;
    padding: 12px 32px;
    border-radius: 8px;
    font-weight: 600;
    font-size: 16px;
    border: 2px solid transparent;
    cursor: pointer;
    transition: background-color 0.2s, color 0.2s;
}

.btn-primary {
    background: var(--accent);
    color: var(--bg-white);
}

.btn-primary:hover {
    background: var(--accent-hover);
}

.btn-primary:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.btn-outline {
    border-color: var(--accent);
    color: var(--accent);
    background: transparent;
}

.btn-outline:hover {
    background: var(--bg-accent-soft);
}

.btn-small {
    padding: 8px 24px;
    font-weight: 500;
}

.btn-block {
    width: 100%;
}

/* Navigation */
.nav {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 64px;
}

.nav-brand, .footer-brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.brand-mark {
    width: 32px;
    height: 32px;
    border-radius: 8px;
    background: var(--accent);
    display: flex;
    align-items: center;
    justify-content: center;
}

.nav-title, .footer-title {
    font-size: 20px;
    font-weight: 700;
    color: var(--text-strong);
}

.nav-links {
    display: flex;
    gap: 32px;
}

.nav-link {
    color: var(--text-body);
    font-weight: 500;
}

.nav-link:hover {
    color: var(--accent);
}

@media (max-width: 767px) {
    .nav-links { display: none; }
}

/* Hero */
.hero {
    padding: 80px 0;
}

.hero-inner {
    text-align: center;
}

.hero-title {
    font-size: clamp(36px, 6vw, 60px);
    font-weight: 700;
    margin-bottom: 24px;
}

.hero-title-accent {
    display: block;
    margin-top: 8px;
    color: var(--accent);
}

.hero-description {
    font-size: 20px;
    max-width: 768px;
    margin: 0 auto 32px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
}

/* Sections */
.section {
    padding: 80px 0;
}

.section-light {
    background: var(--bg-white);
}

.section-muted {
    background: var(--bg-muted);
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: clamp(30px, 4vw, 36px);
    font-weight: 700;
    margin-bottom: 16px;
}

.section-description {
    font-size: 20px;
    max-width: 768px;
    margin: 0 auto;
}

/* Tool catalog */
.tools-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 32px;
}

.tool-card {
    background: linear-gradient(135deg, var(--bg-white), var(--bg-accent-soft));
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 24px;
    transition: box-shadow 0.2s, transform 0.2s;
}

.tool-card:hover {
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transform: translateY(-5px);
}

.tool-card-header {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 16px;
}

.tool-icon {
    width: 48px;
    height: 48px;
    border-radius: 8px;
    background: var(--bg-accent-icon);
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
}

.tool-title {
    font-size: 20px;
    font-weight: 600;
}

.tool-description {
    margin: 0 0 16px;
}

.tool-demo-btn {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    padding: 0;
    border: none;
    background: none;
    color: var(--accent);
    font: inherit;
    font-weight: 500;
    cursor: pointer;
}

.tool-demo-btn:hover {
    color: var(--accent-deep);
}

/* Modals */
.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 16px;
}

.modal {
    background: var(--bg-white);
    border-radius: var(--radius);
    max-width: 672px;
    width: 100%;
    max-height: 80vh;
    overflow-y: auto;
    padding: 24px;
}

.modal-compact {
    max-width: 420px;
    text-align: center;
}

.modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 16px;
}

.modal-title {
    font-size: 24px;
    font-weight: 700;
}

.modal-close {
    border: none;
    background: none;
    color: var(--text-faint);
    cursor: pointer;
    padding: 4px;
}

.modal-close:hover {
    color: var(--text-body);
}

.modal-intro {
    margin: 0 0 24px;
}

.ack-icon {
    display: flex;
    justify-content: center;
    margin-bottom: 12px;
}

/* Demos */
.demo-input {
    width: 100%;
    height: 128px;
    padding: 16px;
    border: 1px solid var(--border-input);
    border-radius: 8px;
    margin-bottom: 16px;
    font: inherit;
    resize: vertical;
}

.demo-input.mono {
    font-family: var(--font-mono);
}

.demo-input-short {
    height: 96px;
}

.demo-input:focus, .form-input:focus {
    outline: 2px solid var(--accent);
    border-color: transparent;
}

.demo-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    align-items: center;
}

.demo-result {
    margin-top: 24px;
    padding: 16px;
    border-radius: 8px;
    background: var(--bg-accent-soft);
}

.demo-result-title {
    font-size: 16px;
    font-weight: 600;
    margin-bottom: 8px;
}

.demo-result-box {
    background: var(--bg-white);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 12px;
    color: var(--neutral-fg);
}

.demo-result-note {
    font-size: 14px;
    color: var(--text-soft);
    margin: 8px 0 0;
}

.demo-result-text {
    margin: 0;
}

.sentiment-badge {
    padding: 8px 16px;
    border-radius: 8px;
    font-weight: 500;
}

.sentiment-badge.sentiment-positive { background: var(--positive-bg); color: var(--positive-fg); }
.sentiment-badge.sentiment-negative { background: var(--negative-bg); color: var(--negative-fg); }
.sentiment-badge.sentiment-neutral { background: var(--neutral-bg); color: var(--neutral-fg); }

.sentiment-word { font-weight: 700; }
.sentiment-word.sentiment-positive { color: #16a34a; }
.sentiment-word.sentiment-negative { color: #dc2626; }
.sentiment-word.sentiment-neutral { color: var(--text-body); }

/* About */
.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 48px;
    align-items: center;
}

.about-text {
    font-size: 18px;
    margin: 0 0 24px;
}

.about-highlights {
    list-style: none;
    padding: 0;
    margin: 0;
}

.about-highlight {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-top: 8px;
    color: var(--text-strong);
    font-weight: 500;
}

.about-panel {
    background: linear-gradient(135deg, #3b82f6, var(--accent));
    border-radius: 16px;
    padding: 32px;
    color: var(--bg-white);
}

.about-panel-title {
    color: var(--bg-white);
    font-size: 24px;
    font-weight: 700;
    margin-bottom: 16px;
}

.about-reasons {
    display: grid;
    gap: 16px;
}

.about-reason-title {
    color: var(--bg-white);
    font-weight: 600;
}

.about-reason-body {
    color: var(--bg-accent-icon);
    margin: 0;
}

/* Testimonials */
.testimonials-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 32px;
}

.testimonial-card {
    margin: 0;
    background: var(--bg-white);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 24px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.testimonial-stars {
    display: flex;
    gap: 2px;
    margin-bottom: 16px;
}

.testimonial-quote {
    margin: 0 0 24px;
    font-style: italic;
    color: var(--neutral-fg);
}

.testimonial-name {
    margin: 0;
    font-weight: 600;
    color: var(--text-strong);
}

.testimonial-role {
    margin: 0;
}

/* Contact */
.contact-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 48px;
}

.contact-heading {
    font-size: 24px;
    font-weight: 700;
    margin-bottom: 24px;
}

.contact-details {
    display: grid;
    gap: 16px;
}

.contact-item {
    display: flex;
    align-items: flex-start;
    gap: 12px;
}

.contact-label {
    margin: 0;
    font-weight: 500;
    color: var(--text-strong);
}

.contact-value {
    margin: 0;
}

.contact-callout {
    margin-top: 24px;
    padding: 16px;
    border-radius: 8px;
    background: var(--bg-accent-soft);
}

.contact-callout-title {
    font-weight: 600;
    margin-bottom: 8px;
}

.contact-callout-link {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    color: var(--accent);
    font-weight: 500;
}

.contact-form {
    display: grid;
    gap: 24px;
}

.form-label {
    display: block;
    font-size: 14px;
    font-weight: 500;
    color: #374151;
    margin-bottom: 4px;
}

.form-input {
    width: 100%;
    padding: 12px;
    border: 1px solid var(--border-input);
    border-radius: 8px;
    font: inherit;
}

/* Footer */
.footer {
    background: var(--text-strong);
    color: var(--bg-white);
    padding: 48px 0;
}

.footer-inner {
    text-align: center;
}

.footer-brand {
    justify-content: center;
    margin-bottom: 16px;
}

.footer-title {
    color: var(--bg-white);
}

.footer-tagline {
    color: var(--text-faint);
    margin: 0 0 24px;
}

.footer-links {
    display: flex;
    justify-content: center;
    gap: 24px;
}

.footer-link {
    color: var(--text-faint);
}

.footer-link:hover {
    color: var(--bg-white);
}

.footer-copyright {
    color: var(--text-soft);
    margin: 32px 0 0;
}
"#;
