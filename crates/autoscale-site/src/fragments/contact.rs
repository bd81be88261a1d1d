#![forbid(unsafe_code)]

//! The contact funnel. Channels are display strings only.

use autoscale_core::content::{CONTACT, CONTACT_EMAIL_PROMPT, ContactChannel};
use ftui_text::{Line, Span};

use super::BodyWriter;
use crate::theme;

pub fn render(w: &mut BodyWriter<'_>, channels: &[ContactChannel], email: &str) {
    w.heading(CONTACT.title);
    w.wrapped(CONTACT.tagline, theme::body());

    for channel in channels {
        w.blank();
        w.hanging(Span::styled(" ◉ ", theme::eyebrow()), channel.title, theme::heading());
        w.hanging(Span::raw("   "), channel.blurb, theme::muted());
        w.hanging(Span::raw("   "), channel.link_label, theme::button_secondary());
    }

    w.blank();
    w.line(Line::styled(CONTACT_EMAIL_PROMPT, theme::muted()));
    w.wrapped(email, theme::heading());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusRing;
    use autoscale_core::content::{CONTACT_CHANNELS, CONTACT_EMAIL};

    #[test]
    fn shows_channels_and_email() {
        let ring = FocusRing::default();
        let mut w = BodyWriter::new(80, &ring);
        render(&mut w, CONTACT_CHANNELS, CONTACT_EMAIL);
        let body = w.finish();
        assert_eq!(body.control_count(), 0);
        let text = body.to_plain_text();
        assert!(text.contains("Let's audit your business."));
        assert!(text.contains("Book a Call"));
        assert!(text.contains("WhatsApp Me"));
        assert!(text.contains("hello@autoscale.agency"));
    }
}
