use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::errors::{DomainError, Rejection};
use super::too_long;

pub const MAX_IMAGES: usize = 5;

/// Whether a venue is open for business. Only open venues are listed to
/// buyers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenicStatus {
    #[default]
    Open,
    Closed,
}

impl ScenicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenicStatus::Open => "OPEN",
            ScenicStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for ScenicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenicStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(ScenicStatus::Open),
            "CLOSED" => Ok(ScenicStatus::Closed),
            other => Err(DomainError::Internal(format!(
                "unknown scenic status '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scenic {
    pub id: Uuid,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: ScenicStatus,
}

/// Venue form as submitted by its owner.
#[derive(Debug, Clone, Default)]
pub struct ScenicInput {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: ScenicStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewScenic {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: ScenicStatus,
}

/// One page of venues plus the total number of matches.
#[derive(Debug, Clone)]
pub struct ScenicPage {
    pub items: Vec<Scenic>,
    pub total: i64,
}

/// Mainland mobile number: eleven digits, `1` then `3`-`9`.
fn is_mobile_number(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 11
        && bytes.iter().all(u8::is_ascii_digit)
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_scenic(input: &ScenicInput) -> Result<NewScenic, DomainError> {
    if input.name.trim().is_empty() {
        return Err(Rejection::MissingScenicName.into());
    }
    if too_long(&input.name) {
        return Err(Rejection::ScenicNameTooLong.into());
    }
    if input.address.trim().is_empty() {
        return Err(Rejection::MissingAddress.into());
    }

    let contact_phone = non_blank(&input.contact_phone);
    if let Some(phone) = &contact_phone {
        if !is_mobile_number(phone) {
            return Err(Rejection::InvalidContactPhone.into());
        }
    }

    if input.images.len() > MAX_IMAGES {
        return Err(Rejection::TooManyImages.into());
    }

    Ok(NewScenic {
        name: input.name.trim().to_string(),
        description: non_blank(&input.description),
        address: input.address.trim().to_string(),
        contact_phone,
        images: input.images.clone(),
        status: input.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, address: &str, phone: Option<&str>) -> ScenicInput {
        ScenicInput {
            name: name.to_string(),
            address: address.to_string(),
            contact_phone: phone.map(str::to_string),
            ..Default::default()
        }
    }

    fn rejection(result: Result<NewScenic, DomainError>) -> Rejection {
        match result {
            Err(DomainError::Rejected(r)) => r,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn accepts_minimal_venue() {
        let venue = validate_scenic(&form(" West Lake ", "Hangzhou", None)).unwrap();
        assert_eq!(venue.name, "West Lake");
        assert_eq!(venue.contact_phone, None);
        assert_eq!(venue.status, ScenicStatus::Open);
    }

    #[test]
    fn name_then_address_are_required() {
        assert_eq!(
            rejection(validate_scenic(&form("", "", None))),
            Rejection::MissingScenicName
        );
        assert_eq!(
            rejection(validate_scenic(&form("West Lake", "  ", None))),
            Rejection::MissingAddress
        );
        assert_eq!(
            rejection(validate_scenic(&form(&"湖".repeat(256), "Hangzhou", None))),
            Rejection::ScenicNameTooLong
        );
    }

    #[test]
    fn phone_is_optional_but_checked_when_given() {
        assert!(validate_scenic(&form("West Lake", "Hangzhou", Some("13912345678"))).is_ok());
        assert!(validate_scenic(&form("West Lake", "Hangzhou", Some("  "))).is_ok());
        for phone in ["12912345678", "1391234567", "139123456789", "1391234567a"] {
            assert_eq!(
                rejection(validate_scenic(&form("West Lake", "Hangzhou", Some(phone)))),
                Rejection::InvalidContactPhone,
                "phone {:?}",
                phone
            );
        }
    }

    #[test]
    fn at_most_five_images() {
        let mut input = form("West Lake", "Hangzhou", None);
        input.images = (0..6).map(|i| format!("https://img.example/{}.jpg", i)).collect();
        assert_eq!(rejection(validate_scenic(&input)), Rejection::TooManyImages);
        input.images.pop();
        assert!(validate_scenic(&input).is_ok());
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!("CLOSED".parse::<ScenicStatus>().unwrap(), ScenicStatus::Closed);
        assert!("营业".parse::<ScenicStatus>().is_err());
    }
}
