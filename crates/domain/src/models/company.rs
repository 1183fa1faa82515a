//! Internship host company model.
//!
//! Tax ids and phone numbers are stored as bare digits and formatted only
//! when rendered in a response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{digits_only, format_phone, format_tax_id};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a company.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CompanyRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_tax_id"))]
    pub tax_id: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "Contact person must be at most 100 characters"))]
    pub contact_person: Option<String>,
}

impl CompanyRequest {
    /// Tax id reduced to digits. Call after `validate()`.
    pub fn normalized_tax_id(&self) -> Option<String> {
        self.tax_id.as_deref().map(digits_only)
    }

    /// Phone reduced to digits. Call after `validate()`.
    pub fn normalized_phone(&self) -> Option<String> {
        self.phone.as_deref().map(digits_only)
    }
}

/// Company as rendered to clients, with masked tax id and phone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            tax_id: company.tax_id.as_deref().map(format_tax_id),
            address: company.address,
            phone: company.phone.as_deref().map(format_phone),
            email: company.email,
            contact_person: company.contact_person,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

/// Response for listing companies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListCompaniesResponse {
    pub companies: Vec<CompanyResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_company() -> Company {
        Company {
            id: 5,
            name: "Acme Engenharia".to_string(),
            tax_id: Some("11222333000181".to_string()),
            address: None,
            phone: Some("11987654321".to_string()),
            email: Some("rh@acme.example".to_string()),
            contact_person: Some("Carla".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_company_request_accepts_masked_values() {
        let json = r#"{
            "name": "Acme Engenharia",
            "tax_id": "11.222.333/0001-81",
            "phone": "(11) 98765-4321",
            "email": "rh@acme.example"
        }"#;
        let request: CompanyRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.normalized_tax_id().as_deref(), Some("11222333000181"));
        assert_eq!(request.normalized_phone().as_deref(), Some("11987654321"));
    }

    #[test]
    fn test_company_request_name_only() {
        let request: CompanyRequest = serde_json::from_str(r#"{"name": "Solo"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.normalized_tax_id().is_none());
        assert!(request.normalized_phone().is_none());
    }

    #[test]
    fn test_company_request_short_tax_id() {
        let request = CompanyRequest {
            name: "Acme".to_string(),
            tax_id: Some("1122233300018".to_string()),
            address: None,
            phone: None,
            email: None,
            contact_person: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tax_id"));
    }

    #[test]
    fn test_company_request_blank_tax_id_and_phone_rejected() {
        let request: CompanyRequest =
            serde_json::from_str(r#"{"name": "Acme", "tax_id": "", "phone": " "}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("tax_id"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_company_request_invalid_email() {
        let request = CompanyRequest {
            name: "Acme".to_string(),
            tax_id: None,
            address: None,
            phone: None,
            email: Some("not-an-email".to_string()),
            contact_person: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_company_response_formats_digits() {
        let response = CompanyResponse::from(stored_company());
        assert_eq!(response.tax_id.as_deref(), Some("11.222.333/0001-81"));
        assert_eq!(response.phone.as_deref(), Some("(11) 98765-4321"));
        assert_eq!(response.name, "Acme Engenharia");
    }

    #[test]
    fn test_company_response_keeps_missing_fields_null() {
        let mut company = stored_company();
        company.tax_id = None;
        company.phone = None;
        let json = serde_json::to_value(CompanyResponse::from(company)).unwrap();
        assert!(json["tax_id"].is_null());
        assert!(json["phone"].is_null());
    }
}
