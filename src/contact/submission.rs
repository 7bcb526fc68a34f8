//! Submitted contact fields.

use serde::{Deserialize, Serialize};

use super::ContactError;
use super::inquiry::InquiryType;

/// Value of the `form-name` field expected by the forms provider.
pub const FORM_NAME: &str = "contact";

/// The contact form as posted by the browser.
///
/// Field names match the forms provider's contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(rename = "form-name")]
    pub form_name: String,
    #[serde(rename = "inquiryType")]
    pub inquiry_type: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot. Hidden from people; bots tend to fill it in.
    #[serde(rename = "bot-field", skip_serializing)]
    pub bot_field: String,
}

impl ContactSubmission {
    /// The selected category, if the submitted id is known.
    pub fn inquiry(&self) -> Option<InquiryType> {
        InquiryType::from_id(&self.inquiry_type)
    }

    pub fn is_spam(&self) -> bool {
        !self.bot_field.trim().is_empty()
    }

    /// Check required fields. Phone is optional.
    pub fn validate(&self) -> Result<InquiryType, ContactError> {
        let mut problems = Vec::new();

        let inquiry = self.inquiry();
        if inquiry.is_none() {
            problems.push("inquiry type".to_string());
        }
        for (label, value) in [
            ("name", &self.name),
            ("company", &self.company),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                problems.push(label.to_string());
            }
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            problems.push("email".to_string());
        }

        match inquiry {
            Some(inquiry) if problems.is_empty() => Ok(inquiry),
            _ => Err(ContactError::Invalid(problems)),
        }
    }

    /// `application/x-www-form-urlencoded` body for the forms endpoint.
    ///
    /// Fields are emitted in contract order; the honeypot is never forwarded.
    pub fn encode(&self) -> String {
        let form_name = if self.form_name.is_empty() {
            FORM_NAME
        } else {
            self.form_name.as_str()
        };

        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("form-name", form_name)
            .append_pair("inquiryType", &self.inquiry_type)
            .append_pair("name", &self.name)
            .append_pair("company", &self.company)
            .append_pair("email", &self.email)
            .append_pair("phone", &self.phone)
            .append_pair("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            form_name: FORM_NAME.into(),
            inquiry_type: "b2b".into(),
            name: "Dana Reyes".into(),
            company: "Acme Goods".into(),
            email: "dana@acme.test".into(),
            phone: String::new(),
            message: "Need retail compliance & routing.".into(),
            bot_field: String::new(),
        }
    }

    #[test]
    fn test_complete_submission_is_valid() {
        assert_eq!(complete().validate().unwrap(), InquiryType::B2b);
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let submission = ContactSubmission {
            inquiry_type: "nope".into(),
            company: "   ".into(),
            email: "not-an-email".into(),
            ..complete()
        };
        match submission.validate() {
            Err(ContactError::Invalid(problems)) => {
                assert_eq!(problems, ["inquiry type", "company", "email"]);
            }
            other => panic!("expected invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_field_order_and_escaping() {
        let body = complete().encode();
        assert_eq!(
            body,
            "form-name=contact&inquiryType=b2b&name=Dana+Reyes&company=Acme+Goods\
             &email=dana%40acme.test&phone=&message=Need+retail+compliance+%26+routing."
        );
    }

    #[test]
    fn test_honeypot_is_detected_and_not_forwarded() {
        let submission = ContactSubmission {
            bot_field: "http://spam.example".into(),
            ..complete()
        };
        assert!(submission.is_spam());
        assert!(!submission.encode().contains("bot-field"));
    }

    #[test]
    fn test_deserializes_contract_field_names() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"form-name":"contact","inquiryType":"wms","name":"A","bot-field":""}"#,
        )
        .unwrap();
        assert_eq!(submission.inquiry(), Some(InquiryType::Wms));
        assert_eq!(submission.email, "");
    }
}
