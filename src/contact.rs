//! Contact form buffers and the `mailto:` hand-off to the system mail client.

use thiserror::Error;
use url::form_urlencoded;

/// Errors that can occur when sending the contact form.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("write a message before sending")]
    Empty,
    #[error("failed to open mail client: {0}")]
    Open(#[from] std::io::Error),
}

/// Text typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a `mailto:` URL addressed to `recipient` with the form content
    /// as subject and body.
    pub fn mailto_url(&self, recipient: &str) -> Result<String, ContactError> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::Empty);
        }

        let name = self.name.trim();
        let email = self.email.trim();

        let subject = if name.is_empty() {
            "Project inquiry".to_owned()
        } else {
            format!("Project inquiry from {name}")
        };

        let mut body = message.to_owned();
        match (name.is_empty(), email.is_empty()) {
            (false, false) => body.push_str(&format!("\n\n{name} <{email}>")),
            (false, true) => body.push_str(&format!("\n\n{name}")),
            (true, false) => body.push_str(&format!("\n\n{email}")),
            (true, true) => {}
        }

        // Form encoding writes spaces as '+', which mail clients show literally.
        // Literal '+' is already escaped as %2B, so the swap is lossless.
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("subject", &subject)
            .append_pair("body", &body)
            .finish()
            .replace('+', "%20");

        Ok(format!("mailto:{recipient}?{query}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_rejected() {
        let form = ContactForm {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            message: "   \n".to_owned(),
        };
        assert!(matches!(
            form.mailto_url("hello@flik.in"),
            Err(ContactError::Empty)
        ));
    }

    #[test]
    fn mailto_url_encodes_subject_and_body() {
        let form = ContactForm {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            message: "Villa walkthrough & VR?".to_owned(),
        };
        let url = form.mailto_url("hello@flik.in").unwrap();
        assert_eq!(
            url,
            "mailto:hello@flik.in?subject=Project%20inquiry%20from%20Asha\
             &body=Villa%20walkthrough%20%26%20VR%3F%0A%0AAsha%20%3Casha%40example.com%3E"
        );
    }

    #[test]
    fn anonymous_message_uses_plain_subject() {
        let form = ContactForm {
            message: "1+1".to_owned(),
            ..Default::default()
        };
        let url = form.mailto_url("hello@flik.in").unwrap();
        assert_eq!(url, "mailto:hello@flik.in?subject=Project%20inquiry&body=1%2B1");
    }

    #[test]
    fn clear_empties_every_field() {
        let mut form = ContactForm {
            name: "a".to_owned(),
            email: "b".to_owned(),
            message: "c".to_owned(),
        };
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
