//! Contact form state. Nothing leaves the process; submitting only flips the
//! form into its confirmation state and clears the fields.
use tracing::info;

use crate::catalog::ContactFormText;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    sent: bool,
}

impl ContactForm {
    pub fn submit(&mut self) {
        info!(message_len = self.message.chars().count(), "contact form submitted");
        *self = ContactForm { sent: true, ..ContactForm::default() };
    }

    /// Any edit after a submit hides the confirmation again.
    pub fn edit(&mut self, f: impl FnOnce(&mut Self)) {
        self.sent = false;
        f(self);
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// The localized confirmation, once submitted.
    pub fn confirmation<'a>(&self, text: &'a ContactFormText) -> Option<&'a str> {
        self.is_sent().then_some(text.sent.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, lang::Language};

    fn filled() -> ContactForm {
        let mut f = ContactForm::default();
        f.edit(|f| {
            f.full_name = "Ali".into();
            f.email = "ali@example.com".into();
            f.phone = "+964 770 000 0000".into();
            f.message = "Need a quote".into();
        });
        f
    }

    #[test]
    fn submit_clears_fields_and_confirms() {
        let catalog = Catalog::load_embedded().expect("embedded catalog");
        let mut f = filled();
        assert_eq!(f.confirmation(&catalog.get(Language::En).contact_page.form), None);
        f.submit();
        assert!(f.is_sent());
        assert!(f.full_name.is_empty() && f.email.is_empty() && f.phone.is_empty() && f.message.is_empty());
        assert_eq!(f.confirmation(&catalog.get(Language::En).contact_page.form), Some("Message Sent ✅"));
        assert_eq!(f.confirmation(&catalog.get(Language::Ar).contact_page.form), Some("تم إرسال الرسالة ✅"));
    }

    #[test]
    fn editing_after_submit_hides_confirmation() {
        let mut f = filled();
        f.submit();
        f.edit(|f| f.message.push('x'));
        assert!(!f.is_sent());
        assert_eq!(f.message, "x");
    }
}
