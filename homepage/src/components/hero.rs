use leptos::prelude::*;

use super::VERSION;

/// Hero banner: badge, headline, call-to-action links, CLI mock-up.
#[component]
pub fn Hero() -> impl IntoView {
    let badge_text = format!("{} — CLI & REST API", VERSION);
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Find it. Redact it."</span>
                            <br />
                            "PII redaction for your documents."
                        </h1>
                        <p class="hero-description">
                            "Guard detects and redacts personally identifiable information "
                            "in your documents. Point the CLI at a PDF or call the REST API; "
                            "names, e-mail addresses, phone numbers and license plates come "
                            "back redacted."
                        </p>
                        <div class="hero-actions">
                            <a href="/docs" class="btn btn-primary">
                                "Get Started"
                            </a>
                            <a href="https://github.com/guard-dev/guard" target="_blank" class="btn btn-secondary">
                                "View on GitHub →"
                            </a>
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"~/reports"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"guard -f quarterly_report.pdf -o ./redacted"</span>
                </div>
                <div class="terminal-output muted">"Processing file: quarterly_report.pdf"</div>
                <div class="terminal-output">"PII-Detected: PERSON Max Mustermann"</div>
                <div class="terminal-output">"PII-Detected: EMAIL_ADDRESS max.mustermann@myserver.com"</div>
                <div class="terminal-output">"PII-Detected: PHONE_NUMBER +43 512 508 3399"</div>
                <div class="terminal-output">"PII-Detected: LICENSE_PLATE W-24681R"</div>
                <div class="terminal-output muted">"Documents parsed to text: 1"</div>
                <div class="terminal-output success">"Redacted files saved to: ./redacted"</div>
            </div>
        </div>
    }
}
