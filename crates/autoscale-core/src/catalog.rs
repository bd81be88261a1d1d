#![forbid(unsafe_code)]

//! The compiled-in catalog of case studies and service offerings.
//!
//! The catalog is built once per process and never mutated. Every accessor is
//! pure and total: the same call returns the same data for the lifetime of the
//! process.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

/// Placeholder URL used in the dataset for "no recording yet".
pub const VIDEO_PLACEHOLDER: &str = "#";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Direction hint attached to a metric.
///
/// It selects which indicator is drawn next to the value. It is never computed
/// from the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// The value represents an improvement.
    Up,
    /// The value represents a reduction.
    Down,
}

impl Trend {
    /// Single-cell indicator glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }

    /// Human-readable meaning of the indicator.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Up => "improvement",
            Self::Down => "reduction",
        }
    }
}

/// One headline number on a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, trend: Trend) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend,
        }
    }
}

/// A completed automation project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    /// Unique, stable lookup key.
    pub id: String,
    pub title: String,
    pub short_desc: String,
    pub category: String,
    pub problem: String,
    pub solution: String,
    /// Tools in display order.
    pub tools: Vec<String>,
    /// Metrics in display order.
    pub metrics: Vec<Metric>,
    /// Workflow steps in execution order.
    pub architecture: Vec<String>,
    /// External recording, if any. `#` is the dataset's "none" placeholder.
    pub video_url: Option<String>,
}

impl CaseStudy {
    /// The recording link, or `None` when absent or a placeholder.
    pub fn video_link(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != VIDEO_PLACEHOLDER)
    }

    /// Architecture steps paired with their 1-based position.
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.architecture
            .iter()
            .enumerate()
            .map(|(idx, step)| (idx + 1, step.as_str()))
    }
}

/// Symbolic icon reference. Drawing it is the front end's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconRef {
    MessageSquare,
    Mail,
    Workflow,
    Zap,
}

impl IconRef {
    /// Text stand-in for terminals.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::MessageSquare => "✉",
            Self::Mail => "@",
            Self::Workflow => "⇄",
            Self::Zap => "ϟ",
        }
    }
}

/// A service the consultant sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub title: String,
    pub desc: String,
    pub icon: IconRef,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable store of case studies and services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    case_studies: Vec<CaseStudy>,
    services: Vec<ServiceOffering>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog from explicit records.
    ///
    /// Case-study ids must be unique. A later record reusing an id is dropped
    /// (first one wins) so lookups stay unambiguous.
    pub fn new(case_studies: Vec<CaseStudy>, services: Vec<ServiceOffering>) -> Self {
        let mut seen = HashSet::with_capacity(case_studies.len());
        let case_studies = case_studies
            .into_iter()
            .filter(|study| {
                let fresh = seen.insert(study.id.clone());
                if !fresh {
                    tracing::warn!(
                        target: "autoscale.catalog",
                        id = %study.id,
                        "dropping case study with duplicate id"
                    );
                }
                fresh
            })
            .collect();
        Self {
            case_studies,
            services,
        }
    }

    /// The process-wide catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog::new(builtin_case_studies(), builtin_services()))
    }

    /// All case studies in display order.
    pub fn list_case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    /// All service offerings in display order.
    pub fn list_services(&self) -> &[ServiceOffering] {
        &self.services
    }

    /// Look a case study up by id.
    pub fn find(&self, id: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|study| study.id == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn builtin_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: "medicine-reminder".into(),
            title: "Automated Patient Refill System".into(),
            short_desc: "Eliminating revenue leakage for a multi-branch pharmacy through \
                         proactive WhatsApp reminders."
                .into(),
            category: "Healthcare / CRM".into(),
            problem: "Manual reminder calls were inconsistent. Customers forgot refills, \
                      leading to a 25% drop in recurring revenue and staff burnout."
                .into(),
            solution: "Engineered a logic-heavy n8n workflow connected to the Pharmacy \
                       Management System (PMS) and WhatsApp Business API."
                .into(),
            tools: strings(&["n8n", "WhatsApp API", "Google Sheets", "PostgreSQL"]),
            metrics: vec![
                Metric::new("Manual Work", "0%", Trend::Down),
                Metric::new("Missed Refills", "-82%", Trend::Down),
                Metric::new("Retention Rate", "94%", Trend::Up),
                Metric::new("ROI", "12x", Trend::Up),
            ],
            architecture: strings(&[
                "Daily Cron Trigger at 9:00 AM",
                "Data fetch from PMS via API",
                "Filter patients with refills due in 3 days",
                "Conditional check: Is user already notified?",
                "Send personalized WhatsApp message via Cloud API",
                "Update \"Last Notified\" timestamp in DB",
            ]),
            video_url: Some(VIDEO_PLACEHOLDER.into()),
        },
        CaseStudy {
            id: "lead-nurture".into(),
            title: "AI Lead Qualification Engine".into(),
            short_desc: "Automating high-volume lead filtering for a real estate agency to \
                         focus agents on hot deals."
                .into(),
            category: "Sales / AI".into(),
            problem: "Agents were spending 4 hours/day calling \"junk\" leads. Response time \
                      was > 2 hours, losing hot prospects."
                .into(),
            solution: "Built an AI-powered triage system using n8n + OpenAI that qualifies \
                       leads in 30 seconds."
                .into(),
            tools: strings(&["n8n", "OpenAI", "Typeform", "HubSpot"]),
            metrics: vec![
                Metric::new("Response Time", "30 sec", Trend::Down),
                Metric::new("Agent Productivity", "+300%", Trend::Up),
                Metric::new("Qualified Leads", "2.5x", Trend::Up),
                Metric::new("Human Error", "Zero", Trend::Down),
            ],
            architecture: strings(&[
                "Web-hook trigger from Facebook Ads/Typeform",
                "Analyze lead input using GPT-4o for intent",
                "Calculate Lead Score based on budget/timeline",
                "If Score > 80: Alert Agent on WhatsApp immediately",
                "If Score < 80: Start automated email nurturing sequence",
            ]),
            video_url: Some("https://gemini.google.com/share/6cde6bcbe465".into()),
        },
    ]
}

fn builtin_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            title: "WhatsApp Automation".into(),
            desc: "Reminders, follow-ups, and lead nurturing that meets your customers \
                   where they are."
                .into(),
            icon: IconRef::MessageSquare,
        },
        ServiceOffering {
            title: "Email & CRM Sync".into(),
            desc: "Auto-replies, invoice alerts, and keeping your customer data clean \
                   across all platforms."
                .into(),
            icon: IconRef::Mail,
        },
        ServiceOffering {
            title: "Custom n8n Workflows".into(),
            desc: "Tailor-made automation architecture built for your specific business logic."
                .into(),
            icon: IconRef::Workflow,
        },
        ServiceOffering {
            title: "Process Optimization".into(),
            desc: "Converting manual \"human-heavy\" processes into scalable digital systems."
                .into(),
            icon: IconRef::Zap,
        },
    ]
}
