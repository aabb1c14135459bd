//! The customer-profile data contract shared with the backend service.
//!
//! RULE: every scalar the service may omit is an `Option`, and every
//! repeated sub-record is a `Vec` that tolerates both a missing key and an
//! explicit `null`. Read sites decide the fallback; deserialization never
//! fails because a field is absent.

use crate::types::{Amount, CustomerId};
use serde::{Deserialize, Deserializer, Serialize};

/// One record per requested identifier, in service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfileRecord {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accounts: Vec<Account>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deposits: Vec<Deposit>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub loans: Vec<Loan>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cards: Vec<Card>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub segment: Option<Segment>,
    #[serde(default)]
    pub behavior: Option<Behavior>,
}

impl CustomerProfileRecord {
    pub fn personal_info(&self) -> Option<&PersonalInfo> {
        self.customer.as_ref()?.personal_info.as_ref()
    }

    pub fn demographics(&self) -> Option<&Demographics> {
        self.customer.as_ref()?.demographics.as_ref()
    }

    pub fn status(&self) -> Option<&CustomerStatus> {
        self.customer.as_ref()?.status.as_ref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.personal_info()?.full_name.as_deref()
    }

    /// Label for the customer picker: full name, else the record key.
    pub fn display_name(&self) -> &str {
        self.full_name()
            .filter(|n| !n.is_empty())
            .unwrap_or(self.customer_id.as_str())
    }
}

// ── Customer ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub demographics: Option<Demographics>,
    #[serde(default)]
    pub status: Option<CustomerStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "count")]
    pub age: Option<u32>,
    #[serde(default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub npwp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub years_employed: Option<f64>,
    #[serde(default)]
    pub monthly_income: Option<Amount>,
    #[serde(default)]
    pub income_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerStatus {
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub customer_status: Option<String>,
    #[serde(default)]
    pub customer_since: Option<String>,
}

// ── Address & contact ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub residence_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub primary_phone: Option<String>,
    #[serde(default)]
    pub secondary_phone: Option<String>,
    #[serde(default)]
    pub email_primary: Option<String>,
    #[serde(default)]
    pub email_secondary: Option<String>,
    #[serde(default)]
    pub communication_preferences: Option<CommunicationPreferences>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunicationPreferences {
    #[serde(default)]
    pub preferred_channel: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub email_consent: Option<bool>,
    #[serde(default, deserialize_with = "truthy")]
    pub sms_consent: Option<bool>,
    #[serde(default, deserialize_with = "truthy")]
    pub whatsapp_consent: Option<bool>,
    #[serde(default, deserialize_with = "truthy")]
    pub marketing_consent: Option<bool>,
}

// ── Products ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub balance: Option<Amount>,
    #[serde(default)]
    pub available_balance: Option<Amount>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    #[serde(default)]
    pub deposit_number: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub deposit_status: Option<String>,
    #[serde(default)]
    pub principal_amount: Option<Amount>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "count")]
    pub tenor_months: Option<u32>,
    #[serde(default)]
    pub maturity_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(default)]
    pub loan_number: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub loan_status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Days past due.
    #[serde(default, deserialize_with = "count")]
    pub dpd: Option<u32>,
    #[serde(default)]
    pub outstanding_balance: Option<Amount>,
    #[serde(default)]
    pub monthly_installment: Option<Amount>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "count")]
    pub remaining_months: Option<u32>,
}

impl Loan {
    pub fn is_overdue(&self) -> bool {
        self.payment_status.as_deref() == Some("overdue")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_brand: Option<String>,
    #[serde(default)]
    pub card_tier: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub credit_limit: Option<Amount>,
    #[serde(default)]
    pub outstanding_balance: Option<Amount>,
    #[serde(default)]
    pub available_credit: Option<Amount>,
    #[serde(default)]
    pub rewards_balance: Option<f64>,
}

impl Card {
    /// Debit cards come back with a zero or missing limit.
    pub fn has_credit_line(&self) -> bool {
        self.credit_limit.is_some_and(|l| l > 0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    #[serde(default)]
    pub investment_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub investment_type: Option<String>,
    #[serde(default)]
    pub initial_investment: Option<Amount>,
    #[serde(default)]
    pub current_value: Option<Amount>,
    #[serde(default)]
    pub unrealized_gain_loss: Option<Amount>,
    #[serde(default)]
    pub return_percentage: Option<f64>,
}

// ── Analytics ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub current_segment: Option<String>,
    #[serde(default)]
    pub potential_segment: Option<String>,
    #[serde(default)]
    pub segment_score: Option<f64>,
    #[serde(default)]
    pub lifetime_value: Option<Amount>,
    #[serde(default)]
    pub profitability_score: Option<f64>,
    #[serde(default)]
    pub churn_risk: Option<String>,
    #[serde(default)]
    pub churn_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    #[serde(default)]
    pub channel_usage: Option<ChannelUsage>,
    #[serde(default)]
    pub engagement: Option<Engagement>,
    #[serde(default)]
    pub product_ownership: Option<ProductOwnership>,
    #[serde(default)]
    pub transaction_patterns: Option<TransactionPatterns>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelUsage {
    #[serde(default)]
    pub primary_channel: Option<String>,
    #[serde(default)]
    pub last_mobile_login: Option<String>,
    #[serde(default)]
    pub last_atm_usage: Option<String>,
    #[serde(default)]
    pub last_branch_visit: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub mobile_banking_active: Option<bool>,
    #[serde(default, deserialize_with = "truthy")]
    pub internet_banking_active: Option<bool>,
    // The service sends either flags or visit counts for these two.
    #[serde(default, deserialize_with = "truthy")]
    pub atm_usage: Option<bool>,
    #[serde(default, deserialize_with = "truthy")]
    pub branch_visits: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub engagement_score: Option<f64>,
    #[serde(default)]
    pub digital_adoption: Option<String>,
    #[serde(default)]
    pub campaign_response_rate: Option<f64>,
    #[serde(default)]
    pub nps_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOwnership {
    #[serde(default, deserialize_with = "count")]
    pub total_products: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub accounts: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub deposits: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub loans: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub cards: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub investments: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPatterns {
    #[serde(default)]
    pub avg_monthly_transactions: Option<f64>,
    #[serde(default)]
    pub avg_transaction_value: Option<Amount>,
    #[serde(default)]
    pub preferred_transaction_type: Option<String>,
    #[serde(default)]
    pub peak_transaction_time: Option<String>,
}

// ── Wire envelope ──────────────────────────────────────────────────

/// Request body for the batched lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerQuery {
    pub customer_id: Vec<CustomerId>,
}

/// Response envelope returned by the lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<CustomerProfileRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Lenient field decoding ─────────────────────────────────────────

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Counts arrive as integers or whole floats (`35.0`). Anything that is
/// not a non-negative number in `u32` range decodes as `None`.
fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n
            .as_u64()
            .and_then(|x| u32::try_from(x).ok())
            .or_else(|| {
                n.as_f64()
                    .filter(|x| x.is_finite() && *x >= 0.0 && *x <= f64::from(u32::MAX))
                    .map(|x| x.round() as u32)
            }),
        _ => None,
    }))
}

/// Flags arrive as booleans, counts or strings; anything truthy is `true`.
fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }))
}
