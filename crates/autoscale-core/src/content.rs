#![forbid(unsafe_code)]

//! Static copy shared by fragments that carry no catalog records.
//!
//! Contact channels are inert placeholders: they are display strings, not
//! live integrations.

/// Brand wordmark, split so front ends can accent the second half.
pub const BRAND: (&str, &str) = ("AUTO", "SCALE");

/// Hero banner copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub badge: &'static str,
    pub headline: &'static str,
    pub subhead: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    badge: "Automation Problem Solver",
    headline: "I build AI & Automation systems that save businesses time & money.",
    subhead: "Stop wasting human talent on manual tasks. Scale your operations with custom \
              n8n workflows that work 24/7 without errors.",
};

/// A headline figure in the hero strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: "50+",
        label: "Workflows Built",
    },
    Stat {
        value: "10k+",
        label: "Hours Saved Yearly",
    },
    Stat {
        value: "24/7",
        label: "System Monitoring",
    },
    Stat {
        value: "0%",
        label: "Human Error",
    },
];

/// Section heading plus tagline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: &'static str,
    pub tagline: &'static str,
}

pub const GRID_HOME: SectionCopy = SectionCopy {
    title: "Case Studies",
    tagline: "Real problems solved with automation. No fluff.",
};

pub const GRID_FULL: SectionCopy = SectionCopy {
    title: "The Portfolio",
    tagline: "Proof of delivery for real business owners.",
};

pub const SERVICES: SectionCopy = SectionCopy {
    title: "I sell Outcomes, not just Tools.",
    tagline: "Don't hire a developer. Hire a growth partner who understands business ROI.",
};

pub const PRICING: SectionCopy = SectionCopy {
    title: "How I charge",
    tagline: "",
};

pub const METHODOLOGY: SectionCopy = SectionCopy {
    title: "Professional Architecture. Not YouTube Automation.",
    tagline: "The Framework",
};

pub const CONTACT: SectionCopy = SectionCopy {
    title: "Let's audit your business.",
    tagline: "I'll identify 3 manual processes that you can automate this week to save at \
              least 5 hours/month.",
};

/// Closing call-to-action on a case-study detail page.
pub const DETAIL_CTA: SectionCopy = SectionCopy {
    title: "Want a similar system for your business?",
    tagline: "Let's hop on a 15-minute call to audit your current manual processes.",
};

/// An engagement model on the pricing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Build-to-Own",
        summary: "One-time fee for a custom workflow hand-off.",
    },
    PricingPlan {
        name: "Automation Retainer",
        summary: "Monthly fee for maintenance & continuous improvement.",
    },
];

/// One principle on the methodology section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Data Security & Encryption",
        body: "Everything is built with API security and data privacy as a priority. No \
               plain-text passwords or exposed endpoints.",
    },
    Pillar {
        title: "Error Handling & Logging",
        body: "Built-in retry logic and error alerting via Slack/Telegram so systems never \
               silently fail.",
    },
    Pillar {
        title: "Scalability & Documentation",
        body: "Workflows are documented for your team so you're never \"locked-in\" to a \
               single developer.",
    },
];

/// Sample workflow manifest shown beside the pillars.
pub const WORKFLOW_MANIFEST: &[&str] = &[
    "{",
    "  \"workflow\": \"Lead_Qualification_v3\",",
    "  \"status\": \"active\",",
    "  \"triggers\": [\"webhook\", \"cron\"],",
    "  \"security\": \"AES-256\",",
    "  \"retention\": \"30_days\",",
    "}",
];

/// An inert contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub blurb: &'static str,
    pub link_label: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Book a Call",
        blurb: "15-minute intro session",
        link_label: "Calendly Link →",
    },
    ContactChannel {
        title: "WhatsApp Me",
        blurb: "Direct technical chat",
        link_label: "Launch Chat →",
    },
];

pub const CONTACT_EMAIL_PROMPT: &str = "Prefer Email?";
pub const CONTACT_EMAIL: &str = "hello@autoscale.agency";

pub const FOOTER_NOTE: &str = "© 2024 AutoScale Agency. Built for ROI.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(HERO_STATS.len(), 4);
        assert_eq!(
            PRICING_PLANS.iter().map(|p| p.name).collect::<Vec<_>>(),
            ["Build-to-Own", "Automation Retainer"]
        );
        assert_eq!(
            PILLARS.iter().map(|p| p.title).collect::<Vec<_>>(),
            [
                "Data Security & Encryption",
                "Error Handling & Logging",
                "Scalability & Documentation",
            ]
        );
        assert_eq!(
            CONTACT_CHANNELS.iter().map(|c| c.title).collect::<Vec<_>>(),
            ["Book a Call", "WhatsApp Me"]
        );
        assert_eq!(CONTACT_EMAIL, "hello@autoscale.agency");
    }

    #[test]
    fn no_entry_has_blank_copy() {
        assert!(PRICING_PLANS.iter().all(|p| !p.summary.trim().is_empty()));
        assert!(PILLARS.iter().all(|p| !p.body.trim().is_empty()));
        assert!(CONTACT_CHANNELS.iter().all(|c| !c.blurb.is_empty() && !c.link_label.is_empty()));
        assert!(HERO_STATS.iter().all(|s| !s.value.is_empty() && !s.label.is_empty()));
    }

    #[test]
    fn manifest_is_braced() {
        assert_eq!(WORKFLOW_MANIFEST.first(), Some(&"{"));
        assert_eq!(WORKFLOW_MANIFEST.last(), Some(&"}"));
        assert!(WORKFLOW_MANIFEST[1..WORKFLOW_MANIFEST.len() - 1]
            .iter()
            .all(|row| row.starts_with("  ")));
    }

    #[test]
    fn copy_values_compare_by_content() {
        let plan = PRICING_PLANS[0];
        assert_eq!(plan, PRICING_PLANS[0]);
        assert_ne!(PILLARS[0], PILLARS[1]);
        let copy = SERVICES;
        assert_eq!(copy, SERVICES);
    }
}
