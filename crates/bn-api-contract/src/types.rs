//! API contract types for the BarberNet REST service

use bn_domain_types::{City, JobType};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{
    validate_display_name, validate_email_loose, validate_long_text, validate_non_empty,
    validate_phone_compact, validate_phone_spaced, validate_shop_name,
};

/// A barber profile as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberProfile {
    pub id: String,
    pub full_name: String,
    pub city: City,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-text experience bucket, e.g. "0-1 years"
    pub experience: String,
    pub skills: Vec<String>,
    pub specialities: Vec<String>,
    /// Remote URLs or inline base64 data URIs, both carried as strings
    pub images: Vec<String>,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A job listing as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub shop_name: String,
    pub phone_number: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_text: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<String>,
}

/// A barbershop sale listing as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopListing {
    pub id: String,
    pub shop_name: String,
    /// Display-formatted currency string, e.g. "£45,000"
    pub sale_price: String,
    pub location: String,
    pub info: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<String>,
}

/// The signed-in user's profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<String>,
}

/// Barber creation request (`POST /barbers/new-barber`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewBarber {
    #[validate(custom(function = validate_display_name))]
    pub full_name: String,
    pub city: City,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[validate(custom(function = validate_phone_compact))]
    pub phone_number: String,
    #[validate(custom(function = validate_email_loose))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub experience: String,
    pub skills: Vec<String>,
    pub specialities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    pub owner_id: String,
}

/// Barber update request (`PUT /barbers/update/:id`)
///
/// Every mutable field is optional; `owner_id` always travels with the body
/// because the server authorizes the update against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BarberPatch {
    #[validate(custom(function = validate_display_name))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[validate(custom(function = validate_phone_compact))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[validate(custom(function = validate_email_loose))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub owner_id: String,
}

/// Job creation request (`POST /jobs/new-job`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewJob {
    #[validate(custom(function = validate_shop_name))]
    pub shop_name: String,
    #[validate(custom(function = validate_phone_spaced))]
    pub phone_number: String,
    #[validate(custom(function = validate_non_empty))]
    pub location: String,
    pub job_type: JobType,
    pub salary_text: String,
    #[validate(custom(function = validate_long_text))]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    pub owner_id: String,
}

/// Job update request (`PUT /jobs/update/:id`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct JobPatch {
    #[validate(custom(function = validate_shop_name))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[validate(custom(function = validate_phone_spaced))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_text: Option<String>,
    #[validate(custom(function = validate_long_text))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub owner_id: String,
}

/// Shop creation request (`POST /shops/new-shop`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewShop {
    #[validate(custom(function = validate_non_empty))]
    pub shop_name: String,
    #[validate(custom(function = validate_non_empty))]
    pub sale_price: String,
    #[validate(custom(function = validate_non_empty))]
    pub location: String,
    #[validate(custom(function = validate_long_text))]
    pub info: String,
    #[validate(custom(function = validate_phone_spaced))]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    pub owner_id: String,
}

/// Shop update request (`PUT /shops/update/:id`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ShopPatch {
    #[validate(custom(function = validate_non_empty))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[validate(custom(function = validate_long_text))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[validate(custom(function = validate_phone_spaced))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub owner_id: String,
}

/// Body for DELETE requests
///
/// This backend authorizes deletes from the request body rather than the
/// URL, so every delete carries the caller's asserted owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub owner_id: String,
}

/// Response for `DELETE /barbers/delete/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBarberResponse {
    pub message: String,
}

/// Response for `DELETE /jobs/delete/:id` (echoes the removed listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub message: String,
    pub job: JobListing,
}

/// Response for `DELETE /shops/delete/:id` (echoes the removed listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteShopResponse {
    pub message: String,
    pub shop: ShopListing,
}

/// Registration request (`POST /auth/register`)
///
/// The id comes from the identity provider; the backend never assigns
/// user ids itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(custom(function = validate_email_loose))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Profile update request (`PUT /user/update`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub id: String,
    #[validate(custom(function = validate_display_name))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(custom(function = validate_email_loose))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Response for `PUT /user/update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<String>,
}

/// Credential login request (`POST /auth/login`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
