//! CSS for the homepage.
//!
//! One stylesheet constant, inlined into the document head by
//! [`HomepageDocument`](crate::components::HomepageDocument). The grid
//! classes (`container`, `row`, `col--4`) and the feature classes
//! (`features`, `featureImg`) are the layout contract the components
//! assume.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use guard_homepage::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete CSS for the homepage.
///
/// Provides:
/// - Base typography and spacing
/// - Nav, hero, and footer chrome
/// - The responsive three-column feature grid
/// - Terminal mock-up styling for the hero
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-alt: #f6f8fa;
    --text: #1c1e21;
    --text-dim: #525860;
    --accent: #2e8555;
    --accent-dark: #205d3b;
    --border: rgba(28, 30, 33, 0.12);
    --terminal-bg: #11161d;
    --terminal-text: #c9d1d9;
    --terminal-dim: #6e7681;
    --terminal-green: #3fb950;
    --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1140px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 -16px;
}

.col {
    padding: 0 16px;
    flex: 1 0 0;
}

.col--4 {
    flex: 0 0 33.333%;
    max-width: 33.333%;
}

.text--center {
    text-align: center;
}

.padding-horiz--md {
    padding-left: 16px;
    padding-right: 16px;
}

/* Nav */

.nav {
    border-bottom: 1px solid var(--border);
    background: var(--bg);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 14px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: baseline;
    gap: 8px;
    text-decoration: none;
    color: var(--text);
}

.nav-title {
    font-weight: 700;
    font-size: 18px;
}

.nav-version {
    font-family: var(--font-mono);
    font-size: 12px;
    color: var(--text-dim);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 20px;
}

.nav-link {
    color: var(--text-dim);
    text-decoration: none;
    font-size: 15px;
}

.nav-link:hover {
    color: var(--accent);
}

/* Hero */

.hero {
    padding: 72px 0;
    background: var(--bg-alt);
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-family: var(--font-mono);
    font-size: 12px;
    color: var(--accent-dark);
    border: 1px solid var(--border);
    border-radius: 999px;
    padding: 4px 12px;
    margin-bottom: 20px;
    background: var(--bg);
}

.hero-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--accent);
}

.hero-title {
    font-size: 40px;
    line-height: 1.15;
    margin: 0 0 16px;
}

.hero-title-accent {
    color: var(--accent);
}

.hero-description {
    color: var(--text-dim);
    font-size: 17px;
    margin: 0 0 28px;
}

.hero-actions {
    display: flex;
    gap: 12px;
}

.btn {
    display: inline-block;
    padding: 10px 22px;
    border-radius: 6px;
    text-decoration: none;
    font-weight: 600;
    font-size: 15px;
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--accent-dark);
}

.btn-secondary {
    border: 1px solid var(--border);
    color: var(--text);
    background: var(--bg);
}

/* Terminal mock-up */

.hero-terminal {
    background: var(--terminal-bg);
    border-radius: 8px;
    overflow: hidden;
    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.18);
    font-family: var(--font-mono);
    font-size: 13px;
}

.terminal-header {
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 10px 14px;
    background: rgba(255, 255, 255, 0.06);
}

.terminal-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
}

.terminal-dot.red { background: #ff5f57; }
.terminal-dot.yellow { background: #febc2e; }
.terminal-dot.green { background: #28c840; }

.terminal-title {
    margin-left: 8px;
    color: var(--terminal-dim);
    font-size: 12px;
}

.terminal-body {
    padding: 16px;
    color: var(--terminal-text);
}

.terminal-line {
    display: flex;
    gap: 8px;
}

.terminal-prompt {
    color: var(--terminal-green);
}

.terminal-output {
    white-space: pre-wrap;
}

.terminal-output.muted {
    color: var(--terminal-dim);
}

.terminal-output.success {
    color: var(--terminal-green);
}

/* Features */

.features {
    display: flex;
    align-items: center;
    padding: 2rem 0;
    width: 100%;
}

.featureImg {
    height: 200px;
    width: 200px;
}

.features h3 {
    margin: 12px 0 8px;
    font-size: 20px;
}

.features p {
    color: var(--text-dim);
    margin: 0 0 16px;
}

/* Footer */

.footer {
    border-top: 1px solid var(--border);
    padding: 32px 0;
    margin-top: 24px;
}

.footer-brand {
    font-weight: 700;
    margin-bottom: 8px;
}

.footer-links {
    display: flex;
    gap: 20px;
    margin-bottom: 8px;
}

.footer-link {
    color: var(--text-dim);
    text-decoration: none;
    font-size: 14px;
}

.footer-link:hover {
    color: var(--accent);
}

.footer-copyright {
    color: var(--text-dim);
    font-size: 13px;
    margin: 0;
}

/* Responsive */

@media (max-width: 996px) {
    .hero-grid {
        grid-template-columns: 1fr;
    }

    .col--4 {
        flex: 0 0 100%;
        max-width: 100%;
    }

    .hero-title {
        font-size: 32px;
    }
}
"#;
