//! Validation helpers for API contract types
//!
//! The rules mirror what the backend enforces on form submissions. Phone
//! numbers are deliberately loose: barbers register a compact
//! internationalizable number, while job and shop contact numbers also
//! allow spacing.

use crate::error::ApiContractError;
use crate::types::*;
use validator::{Validate, ValidationError};

/// Display names (barber full name, user name) need at least 2 characters
/// once surrounding whitespace is removed.
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        return Err(ValidationError::new("display_name_too_short"));
    }
    Ok(())
}

/// Shop names on job listings need at least 3 characters.
pub fn validate_shop_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 3 {
        return Err(ValidationError::new("shop_name_too_short"));
    }
    Ok(())
}

/// Descriptions and shop info need at least 10 characters.
pub fn validate_long_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() < 10 {
        return Err(ValidationError::new("text_too_short"));
    }
    Ok(())
}

/// Field must not be empty or whitespace-only.
pub fn validate_non_empty(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("empty"));
    }
    Ok(())
}

/// Compact phone number: optional leading `+`, then 7 to 15 digits.
pub fn validate_phone_compact(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let ok = (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
    if !ok {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

/// Spaced phone number: optional leading `+`, a digit, then at least 7 more
/// digits or spaces.
pub fn validate_phone_spaced(phone: &str) -> Result<(), ValidationError> {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let mut chars = rest.chars();
    let leading_digit = matches!(chars.next(), Some(c) if c.is_ascii_digit());
    let tail: Vec<char> = chars.collect();
    let ok = leading_digit
        && tail.len() >= 7
        && tail.iter().all(|c| c.is_ascii_digit() || c.is_ascii_whitespace());
    if !ok {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

/// Loose email shape: something before an `@`, and a dot with characters on
/// both sides somewhere after it.
pub fn validate_email_loose(email: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = email.chars().collect();
    for at in 1..chars.len() {
        if chars[at] != '@' {
            continue;
        }
        let rest = &chars[at + 1..];
        if rest
            .iter()
            .enumerate()
            .any(|(i, &c)| c == '.' && i >= 1 && i + 1 < rest.len())
        {
            return Ok(());
        }
    }
    Err(ValidationError::new("invalid_email"))
}

/// Validate a barber creation request
pub fn validate_new_barber(request: &NewBarber) -> Result<(), ApiContractError> {
    request.validate()?;
    Ok(())
}

/// Validate a barber update request (only present fields are checked)
pub fn validate_barber_patch(patch: &BarberPatch) -> Result<(), ApiContractError> {
    patch.validate()?;
    Ok(())
}

/// Validate a job creation request
pub fn validate_new_job(request: &NewJob) -> Result<(), ApiContractError> {
    request.validate()?;
    Ok(())
}

/// Validate a job update request
pub fn validate_job_patch(patch: &JobPatch) -> Result<(), ApiContractError> {
    patch.validate()?;
    Ok(())
}

/// Validate a shop creation request
pub fn validate_new_shop(request: &NewShop) -> Result<(), ApiContractError> {
    request.validate()?;
    Ok(())
}

/// Validate a shop update request
pub fn validate_shop_patch(patch: &ShopPatch) -> Result<(), ApiContractError> {
    patch.validate()?;
    Ok(())
}

/// Validate a profile update request
pub fn validate_update_user(request: &UpdateUserRequest) -> Result<(), ApiContractError> {
    request.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bn_domain_types::{City, JobType};

    fn sample_new_barber() -> NewBarber {
        NewBarber {
            full_name: "Tariq Mahmood".to_string(),
            city: City::Leeds,
            bio: Some("Fades and beard work".to_string()),
            phone_number: "+447700900123".to_string(),
            email: Some("tariq@example.co.uk".to_string()),
            experience: "3-5 years".to_string(),
            skills: vec!["Skin fade".to_string()],
            specialities: vec!["Afro hair".to_string()],
            images: vec![],
            owner_id: "user-1".to_string(),
        }
    }

    fn sample_new_job() -> NewJob {
        NewJob {
            shop_name: "Kings Cuts".to_string(),
            phone_number: "0113 496 0000".to_string(),
            location: "Leeds".to_string(),
            job_type: JobType::FullTime,
            salary_text: "£28,000".to_string(),
            description: "Senior barber wanted, walk-ins heavy shop".to_string(),
            images: vec![],
            owner_id: "user-1".to_string(),
        }
    }

    #[test]
    fn test_valid_new_barber() {
        assert!(validate_new_barber(&sample_new_barber()).is_ok());
    }

    #[test]
    fn test_new_barber_short_name() {
        let mut request = sample_new_barber();
        request.full_name = " a ".to_string();
        assert!(validate_new_barber(&request).is_err());
    }

    #[test]
    fn test_new_barber_bad_phone() {
        let mut request = sample_new_barber();
        request.phone_number = "0113 496 0000".to_string(); // spaces not allowed here
        assert!(validate_new_barber(&request).is_err());

        request.phone_number = "+44770".to_string(); // too short
        assert!(validate_new_barber(&request).is_err());
    }

    #[test]
    fn test_new_barber_email_is_optional_but_checked() {
        let mut request = sample_new_barber();
        request.email = None;
        assert!(validate_new_barber(&request).is_ok());

        request.email = Some("not-an-email".to_string());
        assert!(validate_new_barber(&request).is_err());
    }

    #[test]
    fn test_valid_new_job() {
        assert!(validate_new_job(&sample_new_job()).is_ok());
    }

    #[test]
    fn test_new_job_short_description() {
        let mut request = sample_new_job();
        request.description = "too short".to_string(); // 9 chars
        assert!(validate_new_job(&request).is_err());
    }

    #[test]
    fn test_spaced_phone_accepts_spacing() {
        assert!(validate_phone_spaced("0113 496 0000").is_ok());
        assert!(validate_phone_spaced("+44 113 496 0000").is_ok());
        assert!(validate_phone_spaced(" 0113 496 0000").is_err()); // must start with a digit
        assert!(validate_phone_spaced("call me").is_err());
    }

    #[test]
    fn test_email_loose_shapes() {
        assert!(validate_email_loose("a@b.co").is_ok());
        assert!(validate_email_loose("a@b").is_err());
        assert!(validate_email_loose("@b.co").is_err());
        assert!(validate_email_loose("a@.co").is_err());
        assert!(validate_email_loose("a@b.").is_err());
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        let patch = BarberPatch {
            owner_id: "user-1".to_string(),
            ..Default::default()
        };
        assert!(validate_barber_patch(&patch).is_ok());

        let patch = BarberPatch {
            full_name: Some("x".to_string()),
            owner_id: "user-1".to_string(),
            ..Default::default()
        };
        assert!(validate_barber_patch(&patch).is_err());
    }

    #[test]
    fn test_new_shop_rules() {
        let mut shop = NewShop {
            shop_name: "Fade Factory".to_string(),
            sale_price: "£45,000".to_string(),
            location: "Manchester".to_string(),
            info: "Established shop with four chairs and loyal walk-in trade".to_string(),
            phone_number: "0161 496 0000".to_string(),
            images: vec![],
            owner_id: "user-2".to_string(),
        };
        assert!(validate_new_shop(&shop).is_ok());

        shop.info = "tiny".to_string();
        assert!(validate_new_shop(&shop).is_err());
    }
}
