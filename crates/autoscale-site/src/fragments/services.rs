#![forbid(unsafe_code)]

//! Service offerings and the pricing models.

use autoscale_core::catalog::ServiceOffering;
use autoscale_core::content::{self, PricingPlan};
use ftui_text::Span;

use super::BodyWriter;
use crate::theme;

pub fn render_services(w: &mut BodyWriter<'_>, offerings: &[ServiceOffering]) {
    w.heading(content::SERVICES.title);
    w.wrapped(content::SERVICES.tagline, theme::muted());
    for offering in offerings {
        w.blank();
        w.hanging(
            Span::styled(format!(" {}  ", offering.icon.glyph()), theme::icon(offering.icon)),
            &offering.title,
            theme::heading(),
        );
        w.hanging(Span::raw("    "), &offering.desc, theme::body());
    }
}

pub fn render_pricing(w: &mut BodyWriter<'_>, plans: &[PricingPlan]) {
    w.heading(content::PRICING.title);
    w.wrapped(content::PRICING.tagline, theme::muted());
    for plan in plans {
        w.blank();
        w.hanging(Span::styled(" ◆ ", theme::eyebrow()), plan.name, theme::heading());
        w.hanging(Span::raw("   "), plan.summary, theme::body());
    }
}
