//! Contact form submissions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Collection that stores contact submissions.
pub const CONTACT_COLLECTION: &str = "contactsubmission";

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

/// Characters allowed in an unquoted local part besides alphanumerics and `.`.
const LOCAL_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// A contact form submission from the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Kind of project the visitor is asking about.
    #[serde(default)]
    pub project_type: Option<String>,
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

/// Reason an email address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value is not a valid email address: {0}")]
pub struct InvalidEmail(&'static str);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let email = raw.trim();

        if email.len() > MAX_EMAIL_LEN {
            return Err(InvalidEmail("address is too long"));
        }
        if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidEmail("address contains whitespace or control characters"));
        }

        let (local, domain) = email
            .split_once('@')
            .ok_or(InvalidEmail("an email address must have an @-sign"))?;

        if domain.contains('@') {
            return Err(InvalidEmail("an email address must have exactly one @-sign"));
        }
        if local.is_empty() {
            return Err(InvalidEmail("there must be something before the @-sign"));
        }
        if local.len() > MAX_LOCAL_LEN {
            return Err(InvalidEmail("the part before the @-sign is too long"));
        }
        if !local
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || LOCAL_SPECIALS.contains(c))
        {
            return Err(InvalidEmail("the part before the @-sign contains invalid characters"));
        }
        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return Err(InvalidEmail("the part before the @-sign has a misplaced period"));
        }
        if domain.is_empty() {
            return Err(InvalidEmail("there must be something after the @-sign"));
        }
        if !domain.contains('.') {
            return Err(InvalidEmail("the part after the @-sign is not a valid domain"));
        }
        let labels_ok = domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        });
        if !labels_ok {
            return Err(InvalidEmail("the part after the @-sign is not a valid domain"));
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_ordinary_addresses() {
        for raw in [
            "ada@example.com",
            "first.last+tag@studio.co.uk",
            "x@a-b.io",
            "o'brien!#$%&*/=?^_`{|}~@example.com",
        ] {
            assert_eq!(EmailAddress::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let email = EmailAddress::parse("  ada@example.com ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "",
            "ada",
            "ada@",
            "@example.com",
            "ada@@example.com",
            "a@b@example.com",
            "ada@localhost",
            "ada@example..com",
            "ada@-example.com",
            ".ada@example.com",
            "ada lovelace@example.com",
            "a(b)@example.com",
            "a<b>@example.com",
            "a,b@example.com",
            "a:b;c@example.com",
            "a\"b@example.com",
            "a[b]@example.com",
            "a\\b@example.com",
        ] {
            assert!(EmailAddress::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn rejects_control_characters() {
        let err = EmailAddress::parse("ada\u{0}@example.com").unwrap_err();
        assert!(err.to_string().contains("control characters"));
    }

    #[test]
    fn rejects_overlong_local_part() {
        let raw = format!("{}@example.com", "a".repeat(65));
        assert!(EmailAddress::parse(&raw).is_err());
    }

    #[test]
    fn submission_deserializes_with_optional_fields_missing() {
        let submission: ContactSubmission = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Kitchen refresh",
            "budget": "ignored"
        }))
        .unwrap();
        assert_eq!(submission.email.as_str(), "ada@example.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.project_type, None);
    }

    #[test]
    fn submission_rejects_invalid_email() {
        let result = serde_json::from_value::<ContactSubmission>(json!({
            "name": "Ada",
            "email": "not-an-email",
            "message": "Hi"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not a valid email address"), "{err}");
    }

    #[test]
    fn submission_requires_email() {
        let result = serde_json::from_value::<ContactSubmission>(json!({
            "name": "Ada",
            "message": "Hi"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn email_serializes_as_plain_string() {
        let email = EmailAddress::parse("ada@example.com").unwrap();
        assert_eq!(serde_json::to_value(&email).unwrap(), json!("ada@example.com"));
    }
}
