use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult, Entity, ValueObject};

/// Supplier identifier: the company name is the unique key within a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierName(String);

impl SupplierName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SupplierName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for SupplierName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SupplierName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Contact information for a supplier.
///
/// Email and phone are validated by [`Supplier::new`]; the address is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ValueObject for ContactInfo {}

/// Entity: Supplier.
///
/// Immutable after construction; a supplier is destroyed only with the owning
/// warehouse (there is no explicit delete operation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    name: SupplierName,
    contact: ContactInfo,
}

impl Supplier {
    /// Validated constructor.
    ///
    /// Fails if the name is shorter than 2 characters, the email does not
    /// match the accepted shape, or the phone is not 10-15 digits (with an
    /// optional leading `+`). The address accepts any string.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        if name.chars().count() < 2 {
            return Err(DomainError::validation(
                "supplier name must be at least 2 characters",
            ));
        }
        if !is_valid_email(&email) {
            return Err(DomainError::validation("invalid email format"));
        }
        if !is_valid_phone(&phone) {
            return Err(DomainError::validation("invalid phone number format"));
        }

        Ok(Self {
            name: SupplierName(name),
            contact: ContactInfo {
                email,
                phone,
                address: address.into(),
            },
        })
    }

    pub fn name(&self) -> &SupplierName {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    pub fn phone(&self) -> &str {
        &self.contact.phone
    }

    pub fn address(&self) -> &str {
        &self.contact.address
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

impl Entity for Supplier {
    type Id = SupplierName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (tel: {}, email: {})",
            self.name, self.contact.phone, self.contact.email
        )
    }
}

/// Accepted shape: split at the last `@`; the local part must be non-empty and
/// space-free; the domain part splits at its last `.` into a non-empty domain
/// and an extension of at least 2 characters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain_part)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(' ') {
        return false;
    }
    let Some((domain, extension)) = domain_part.rsplit_once('.') else {
        return false;
    };
    !domain.is_empty() && extension.chars().count() >= 2
}

/// Accepted shape: optional leading `+`, then 10-15 ASCII digits.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    digits.chars().all(|c| c.is_ascii_digit()) && (10..=15).contains(&digits.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_supplier() -> Supplier {
        Supplier::new(
            "Acme",
            "a@b.co",
            "+12345678901",
            "742 Evergreen Terrace",
        )
        .unwrap()
    }

    #[test]
    fn valid_supplier_exposes_its_fields() {
        let supplier = test_supplier();
        assert_eq!(supplier.name().as_str(), "Acme");
        assert_eq!(supplier.email(), "a@b.co");
        assert_eq!(supplier.phone(), "+12345678901");
        assert_eq!(supplier.address(), "742 Evergreen Terrace");
    }

    #[test]
    fn reconstruction_with_same_fields_is_idempotent_in_content() {
        assert_eq!(test_supplier(), test_supplier());
    }

    #[test]
    fn name_shorter_than_two_characters_is_rejected() {
        for name in ["", "A"] {
            let err = Supplier::new(name, "a@b.co", "1234567890", "").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn empty_address_is_accepted() {
        assert!(Supplier::new("Acme", "a@b.co", "1234567890", "").is_ok());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "",
            "plainaddress",     // no @
            "@b.co",            // empty local part
            "a b@b.co",         // space in local part
            "a@",               // empty domain part
            "a@nodot",          // no dot in domain part
            "a@.co",            // empty domain
            "a@b.c",            // extension shorter than 2
            "a@b.",             // empty extension
        ] {
            assert!(
                Supplier::new("Acme", email, "1234567890", "").is_err(),
                "expected rejection of {email:?}"
            );
        }
    }

    #[test]
    fn email_splits_at_the_last_at_sign() {
        // Everything before the last `@` is the local part, so an earlier `@`
        // is tolerated as long as the local part stays space-free.
        assert!(Supplier::new("Acme", "a@b@c.co", "1234567890", "").is_ok());
    }

    #[test]
    fn email_extension_splits_at_the_last_dot() {
        assert!(Supplier::new("Acme", "a@b.co.uk", "1234567890", "").is_ok());
    }

    #[test]
    fn malformed_phones_are_rejected() {
        for phone in [
            "",
            "123456789",        // 9 digits
            "1234567890123456", // 16 digits
            "+",                // nothing after the prefix
            "12345abc90",       // letters
            "123 456 7890",     // spaces
            "++1234567890",     // only one leading + is stripped
        ] {
            assert!(
                Supplier::new("Acme", "a@b.co", phone, "").is_err(),
                "expected rejection of {phone:?}"
            );
        }
    }

    #[test]
    fn phone_boundaries_are_inclusive() {
        assert!(Supplier::new("Acme", "a@b.co", "1234567890", "").is_ok()); // 10
        assert!(Supplier::new("Acme", "a@b.co", "123456789012345", "").is_ok()); // 15
        assert!(Supplier::new("Acme", "a@b.co", "+123456789012345", "").is_ok());
    }

    #[test]
    fn display_includes_phone_and_email() {
        let rendered = test_supplier().to_string();
        assert_eq!(rendered, "Acme (tel: +12345678901, email: a@b.co)");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: any 10-15 digit string is a valid phone, with or
            /// without the leading `+`.
            #[test]
            fn digit_strings_in_range_are_valid_phones(digits in "[0-9]{10,15}", plus in any::<bool>()) {
                let phone = if plus { format!("+{digits}") } else { digits };
                prop_assert!(Supplier::new("Acme", "a@b.co", &phone, "").is_ok());
            }

            /// Property: digit strings outside 10-15 are rejected.
            #[test]
            fn digit_strings_out_of_range_are_rejected(digits in "[0-9]{1,9}|[0-9]{16,20}") {
                prop_assert!(Supplier::new("Acme", "a@b.co", &digits, "").is_err());
            }

            /// Property: emails of the accepted grammar always pass.
            #[test]
            fn well_formed_emails_are_accepted(
                local in "[a-z0-9._%-]{1,16}",
                domain in "[a-z0-9-]{1,12}",
                ext in "[a-z]{2,6}",
            ) {
                let email = format!("{local}@{domain}.{ext}");
                prop_assert!(Supplier::new("Acme", &email, "1234567890", "").is_ok());
            }
        }
    }
}
