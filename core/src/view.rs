//! Read-only view model of one customer profile.
//!
//! The view holds display-ready strings only. Every fallback is applied
//! here, at the read site, through the helpers in `format` and `classify`;
//! renderers print what they are given.

use crate::{
    classify::{
        account_type_icon, channel_style, consent_style, product_status_color, return_style,
        segment_badge_color, StyleClass, Tone, OVERDUE_BADGE,
    },
    format::{
        check_mark, display_or_dash, format_currency, format_date, format_number,
        format_percent, format_ratio_percent, format_return, gender_label, number_or_dash,
        segment_label, upper_or_dash, with_unit,
    },
    metrics::ProfileTotals,
    profile::{Account, Card, CustomerProfileRecord, Deposit, Investment, Loan},
    types::PLACEHOLDER,
};
use serde::{Deserialize, Serialize};

/// Classes of the translucent badges on the profile banner.
const BANNER_BADGE_CLASSES: &str = "bg-white/20 text-white border-white/30";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Option<Tone>,
    pub classes: String,
}

impl Badge {
    pub fn styled(label: impl Into<String>, style: StyleClass) -> Self {
        Self {
            label: label.into(),
            tone: Some(style.tone),
            classes: style.classes.to_string(),
        }
    }

    fn banner(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: None,
            classes: BANNER_BADGE_CLASSES.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

impl InfoRow {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// One product card: an account, deposit, loan, card or investment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<Badge>,
    pub highlight: Option<InfoRow>,
    pub rows: Vec<InfoRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<InfoRow>,
    pub badge_caption: Option<String>,
    pub badges: Vec<Badge>,
    pub entries: Vec<Entry>,
    pub empty_message: Option<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            badge_caption: None,
            badges: Vec::new(),
            entries: Vec::new(),
            empty_message: None,
        }
    }

    fn with_rows(title: impl Into<String>, rows: Vec<InfoRow>) -> Self {
        Self {
            rows,
            ..Self::new(title)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKey {
    Personal,
    Accounts,
    Products,
    Analytics,
    Contact,
    Behavior,
}

impl TabKey {
    /// Display order.
    pub const ALL: [TabKey; 6] = [
        TabKey::Personal,
        TabKey::Accounts,
        TabKey::Products,
        TabKey::Analytics,
        TabKey::Contact,
        TabKey::Behavior,
    ];

    pub const DEFAULT: TabKey = TabKey::Personal;

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "personal" => Some(TabKey::Personal),
            "accounts" => Some(TabKey::Accounts),
            "products" => Some(TabKey::Products),
            "analytics" => Some(TabKey::Analytics),
            "contact" => Some(TabKey::Contact),
            "behavior" | "behaviour" => Some(TabKey::Behavior),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileTab {
    pub key: TabKey,
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileHeader {
    pub full_name: String,
    pub subtitle: String,
    pub badges: Vec<Badge>,
    pub lifetime_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub customer_id: String,
    pub header: ProfileHeader,
    pub totals: ProfileTotals,
    pub quick_stats: Vec<StatTile>,
    pub tabs: Vec<ProfileTab>,
}

impl ProfileView {
    pub fn build(record: &CustomerProfileRecord) -> Self {
        let totals = ProfileTotals::compute(record);
        Self {
            customer_id: record.customer_id.clone(),
            header: build_header(record),
            totals,
            quick_stats: build_quick_stats(&totals),
            tabs: TabKey::ALL
                .iter()
                .map(|key| build_tab(*key, record, &totals))
                .collect(),
        }
    }

    pub fn tab(&self, key: TabKey) -> Option<&ProfileTab> {
        self.tabs.iter().find(|t| t.key == key)
    }
}

// ── Header & quick stats ───────────────────────────────────────────

fn build_header(record: &CustomerProfileRecord) -> ProfileHeader {
    let status = record.status();
    let info = record.personal_info();

    let shown_id = record
        .customer
        .as_ref()
        .and_then(|c| c.customer_id.as_deref())
        .unwrap_or(record.customer_id.as_str());
    let since = format_date(status.and_then(|s| s.customer_since.as_deref()));

    let segment = status.and_then(|s| s.segment.as_deref());
    let segment_style = segment_badge_color(segment);
    let mut badges = vec![Badge {
        label: display_or_dash(segment_label(segment).as_deref()),
        tone: Some(segment_style.tone),
        classes: format!("{} border", segment_style.classes),
    }];
    if let Some(customer_status) = status.and_then(|s| s.customer_status.as_deref()) {
        badges.push(Badge::banner(customer_status.to_uppercase()));
    }
    if let Some(age) = info.and_then(|i| i.age) {
        badges.push(Badge::banner(format!("{age} years old")));
    }

    ProfileHeader {
        full_name: record.display_name().to_string(),
        subtitle: format!("{shown_id} • Customer since {since}"),
        badges,
        lifetime_value: format_currency(record.segment.as_ref().and_then(|s| s.lifetime_value)),
    }
}

fn build_quick_stats(totals: &ProfileTotals) -> Vec<StatTile> {
    [
        ("Total Balance", totals.total_balance),
        ("Investments", totals.total_investments),
        ("Loans", totals.total_loans),
        ("Card Outstanding", totals.total_cards),
    ]
    .into_iter()
    .map(|(label, amount)| StatTile {
        label: label.to_string(),
        value: format_currency(Some(amount)),
    })
    .collect()
}

// ── Tabs ───────────────────────────────────────────────────────────

fn build_tab(key: TabKey, record: &CustomerProfileRecord, totals: &ProfileTotals) -> ProfileTab {
    let (title, sections) = match key {
        TabKey::Personal => ("Personal".to_string(), personal_sections(record)),
        TabKey::Accounts => (
            format!("Accounts ({})", totals.total_accounts),
            vec![accounts_section(&record.accounts)],
        ),
        TabKey::Products => ("Products".to_string(), product_sections(record)),
        TabKey::Analytics => ("Analytics".to_string(), analytics_sections(record)),
        TabKey::Contact => ("Contact".to_string(), contact_sections(record)),
        TabKey::Behavior => ("Behavior".to_string(), behavior_sections(record)),
    };
    ProfileTab {
        key,
        title,
        sections,
    }
}

fn personal_sections(record: &CustomerProfileRecord) -> Vec<Section> {
    let info = record.personal_info().cloned().unwrap_or_default();
    let demo = record.demographics().cloned().unwrap_or_default();

    let mut sections = vec![
        Section::with_rows(
            "Personal Information",
            vec![
                InfoRow::new("Full Name", display_or_dash(info.full_name.as_deref())),
                InfoRow::new("Gender", gender_label(info.gender.as_deref())),
                InfoRow::new("Date of Birth", format_date(info.birth_date.as_deref())),
                InfoRow::new("Age", with_unit(info.age.map(f64::from), "years")),
                InfoRow::new("Birth Place", display_or_dash(info.birth_place.as_deref())),
                InfoRow::new(
                    "Marital Status",
                    display_or_dash(info.marital_status.as_deref()),
                ),
                InfoRow::new("Religion", display_or_dash(info.religion.as_deref())),
                InfoRow::new("ID Number", display_or_dash(info.id_number.as_deref())),
                InfoRow::new("NPWP", display_or_dash(info.npwp.as_deref())),
            ],
        ),
        Section::with_rows(
            "Demographics",
            vec![
                InfoRow::new("Occupation", display_or_dash(demo.occupation.as_deref())),
                InfoRow::new("Industry", display_or_dash(demo.industry.as_deref())),
                InfoRow::new("Education", display_or_dash(demo.education.as_deref())),
                InfoRow::new(
                    "Employment Status",
                    display_or_dash(demo.employment_status.as_deref()),
                ),
                InfoRow::new("Employer", display_or_dash(demo.employer_name.as_deref())),
                InfoRow::new("Years Employed", with_unit(demo.years_employed, "years")),
                InfoRow::new("Monthly Income", format_currency(demo.monthly_income)),
                InfoRow::new("Income Range", display_or_dash(demo.income_range.as_deref())),
            ],
        ),
    ];

    if let Some(address) = &record.address {
        let street = match (
            address.address_line1.as_deref().filter(|l| !l.is_empty()),
            address.address_line2.as_deref().filter(|l| !l.is_empty()),
        ) {
            (Some(first), Some(second)) => format!("{first}, {second}"),
            (first, second) => display_or_dash(first.or(second)),
        };
        sections.push(Section::with_rows(
            "Address",
            vec![
                InfoRow::new("Street Address", street),
                InfoRow::new("City", display_or_dash(address.city.as_deref())),
                InfoRow::new("Province", display_or_dash(address.province.as_deref())),
                InfoRow::new("Postal Code", display_or_dash(address.postal_code.as_deref())),
                InfoRow::new(
                    "Residence Type",
                    display_or_dash(address.residence_type.as_deref()),
                ),
            ],
        ));
    }
    sections
}

fn accounts_section(accounts: &[Account]) -> Section {
    let mut section = Section::new("Accounts");
    if accounts.is_empty() {
        section.empty_message = Some("No accounts found".to_string());
        return section;
    }
    section.entries = accounts.iter().map(account_entry).collect();
    section
}

fn account_entry(account: &Account) -> Entry {
    let icon = account_type_icon(account.account_type.as_deref());
    Entry {
        title: format!(
            "{icon} {}",
            display_or_dash(account.product_name.as_deref())
        ),
        subtitle: display_or_dash(account.account_number.as_deref()),
        badges: vec![status_badge(account.account_status.as_deref())],
        highlight: Some(InfoRow::new("Balance", format_currency(account.balance))),
        rows: vec![
            InfoRow::new("Type", display_or_dash(account.account_type.as_deref())),
            InfoRow::new("Currency", display_or_dash(account.currency.as_deref())),
            InfoRow::new("Available", format_currency(account.available_balance)),
            InfoRow::new("Interest Rate", format_percent(account.interest_rate)),
        ],
    }
}

/// Deposits, loans, cards and investments; empty groups are left out.
fn product_sections(record: &CustomerProfileRecord) -> Vec<Section> {
    let groups: [(&str, Vec<Entry>); 4] = [
        ("Deposits", record.deposits.iter().map(deposit_entry).collect()),
        ("Loans", record.loans.iter().map(loan_entry).collect()),
        ("Cards", record.cards.iter().map(card_entry).collect()),
        (
            "Investments",
            record.investments.iter().map(investment_entry).collect(),
        ),
    ];
    groups
        .into_iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(name, entries)| Section {
            title: format!("{name} ({})", entries.len()),
            entries,
            ..Section::new(name)
        })
        .collect()
}

fn deposit_entry(deposit: &Deposit) -> Entry {
    Entry {
        title: display_or_dash(deposit.product_name.as_deref()),
        subtitle: display_or_dash(deposit.deposit_number.as_deref()),
        badges: vec![status_badge(deposit.deposit_status.as_deref())],
        highlight: None,
        rows: vec![
            InfoRow::new("Principal", format_currency(deposit.principal_amount)),
            InfoRow::new("Interest Rate", format_percent(deposit.interest_rate)),
            InfoRow::new("Tenor", with_unit(deposit.tenor_months.map(f64::from), "months")),
            InfoRow::new("Maturity", format_date(deposit.maturity_date.as_deref())),
        ],
    }
}

fn loan_entry(loan: &Loan) -> Entry {
    let mut badges = vec![status_badge(loan.loan_status.as_deref())];
    if loan.is_overdue() {
        let dpd = loan.dpd.map_or_else(|| PLACEHOLDER.to_string(), |d| d.to_string());
        badges.push(Badge::styled(format!("{dpd} DPD"), OVERDUE_BADGE));
    }
    Entry {
        title: display_or_dash(loan.product_name.as_deref()),
        subtitle: display_or_dash(loan.loan_number.as_deref()),
        badges,
        highlight: None,
        rows: vec![
            InfoRow::new("Outstanding", format_currency(loan.outstanding_balance)),
            InfoRow::new("Monthly Payment", format_currency(loan.monthly_installment)),
            InfoRow::new("Interest Rate", format_percent(loan.interest_rate)),
            InfoRow::new(
                "Remaining",
                with_unit(loan.remaining_months.map(f64::from), "months"),
            ),
        ],
    }
}

fn card_entry(card: &Card) -> Entry {
    let name = [card.card_brand.as_deref(), card.card_tier.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut rows = Vec::new();
    if card.has_credit_line() {
        rows.push(InfoRow::new("Credit Limit", format_currency(card.credit_limit)));
        rows.push(InfoRow::new(
            "Outstanding",
            format_currency(card.outstanding_balance),
        ));
        rows.push(InfoRow::new("Available", format_currency(card.available_credit)));
    }
    rows.push(InfoRow::new(
        "Rewards",
        format!("{} pts", format_number(card.rewards_balance)),
    ));

    Entry {
        title: display_or_dash(Some(name.as_str())),
        subtitle: display_or_dash(card.card_number.as_deref()),
        badges: vec![Badge::banner(display_or_dash(card.card_type.as_deref()))],
        highlight: None,
        rows,
    }
}

fn investment_entry(inv: &Investment) -> Entry {
    let badges = inv
        .return_percentage
        .map(|r| vec![Badge::styled(format_return(r), return_style(r))])
        .unwrap_or_default();
    Entry {
        title: display_or_dash(inv.product_name.as_deref()),
        subtitle: display_or_dash(inv.investment_id.as_deref()),
        badges,
        highlight: None,
        rows: vec![
            InfoRow::new("Initial", format_currency(inv.initial_investment)),
            InfoRow::new("Current", format_currency(inv.current_value)),
            InfoRow::new("Gain/Loss", format_currency(inv.unrealized_gain_loss)),
            InfoRow::new("Type", display_or_dash(inv.investment_type.as_deref())),
        ],
    }
}

fn status_badge(status: Option<&str>) -> Badge {
    Badge::styled(display_or_dash(status), product_status_color(status))
}

fn analytics_sections(record: &CustomerProfileRecord) -> Vec<Section> {
    let segment = record.segment.clone().unwrap_or_default();
    let behavior = record.behavior.clone().unwrap_or_default();
    let ownership = behavior.product_ownership.unwrap_or_default();
    let engagement = behavior.engagement.unwrap_or_default();
    let patterns = behavior.transaction_patterns.unwrap_or_default();
    let count = |c: Option<u32>| number_or_dash(c.map(f64::from));

    vec![
        Section::with_rows(
            "Segmentation",
            vec![
                InfoRow::new(
                    "Current Segment",
                    display_or_dash(segment_label(segment.current_segment.as_deref()).as_deref()),
                ),
                InfoRow::new(
                    "Potential Segment",
                    display_or_dash(
                        segment_label(segment.potential_segment.as_deref()).as_deref(),
                    ),
                ),
                InfoRow::new("Segment Score", number_or_dash(segment.segment_score)),
                InfoRow::new("Lifetime Value", format_currency(segment.lifetime_value)),
                InfoRow::new(
                    "Profitability Score",
                    number_or_dash(segment.profitability_score),
                ),
                InfoRow::new("Churn Risk", display_or_dash(segment.churn_risk.as_deref())),
                InfoRow::new("Churn Score", number_or_dash(segment.churn_score)),
            ],
        ),
        Section::with_rows(
            "Product Ownership",
            vec![
                InfoRow::new("Total Products", count(ownership.total_products)),
                InfoRow::new("Accounts", count(ownership.accounts)),
                InfoRow::new("Deposits", count(ownership.deposits)),
                InfoRow::new("Loans", count(ownership.loans)),
                InfoRow::new("Cards", count(ownership.cards)),
                InfoRow::new("Investments", count(ownership.investments)),
            ],
        ),
        Section::with_rows(
            "Engagement Metrics",
            vec![
                InfoRow::new(
                    "Engagement Score",
                    number_or_dash(engagement.engagement_score),
                ),
                InfoRow::new(
                    "Digital Adoption",
                    upper_or_dash(engagement.digital_adoption.as_deref()),
                ),
                InfoRow::new(
                    "Campaign Response",
                    format_ratio_percent(engagement.campaign_response_rate),
                ),
                InfoRow::new("NPS Score", number_or_dash(engagement.nps_score)),
                InfoRow::new(
                    "Avg Monthly Transactions",
                    number_or_dash(patterns.avg_monthly_transactions),
                ),
                InfoRow::new(
                    "Avg Transaction Value",
                    format_currency(patterns.avg_transaction_value),
                ),
            ],
        ),
    ]
}

fn contact_sections(record: &CustomerProfileRecord) -> Vec<Section> {
    let contact = record.contact.clone().unwrap_or_default();
    let prefs = contact.communication_preferences.unwrap_or_default();

    let mut preferences = Section::with_rows(
        "Communication Preferences",
        vec![
            InfoRow::new(
                "Preferred Channel",
                display_or_dash(prefs.preferred_channel.as_deref()),
            ),
            InfoRow::new(
                "Preferred Language",
                display_or_dash(prefs.preferred_language.as_deref()),
            ),
        ],
    );
    preferences.badge_caption = Some("Consents:".to_string());
    preferences.badges = [
        ("Email", prefs.email_consent),
        ("SMS", prefs.sms_consent),
        ("WhatsApp", prefs.whatsapp_consent),
        ("Marketing", prefs.marketing_consent),
    ]
    .into_iter()
    .map(|(label, granted)| {
        Badge::styled(
            format!("{label}: {}", check_mark(granted)),
            consent_style(granted),
        )
    })
    .collect();

    vec![
        Section::with_rows(
            "Contact Information",
            vec![
                InfoRow::new("Primary Phone", display_or_dash(contact.primary_phone.as_deref())),
                InfoRow::new(
                    "Secondary Phone",
                    display_or_dash(contact.secondary_phone.as_deref()),
                ),
                InfoRow::new("Primary Email", display_or_dash(contact.email_primary.as_deref())),
                InfoRow::new(
                    "Secondary Email",
                    display_or_dash(contact.email_secondary.as_deref()),
                ),
            ],
        ),
        preferences,
    ]
}

fn behavior_sections(record: &CustomerProfileRecord) -> Vec<Section> {
    let behavior = record.behavior.clone().unwrap_or_default();
    let usage = behavior.channel_usage.unwrap_or_default();
    let patterns = behavior.transaction_patterns.unwrap_or_default();

    let mut channels = Section::with_rows(
        "Channel Usage",
        vec![
            InfoRow::new(
                "Primary Channel",
                display_or_dash(usage.primary_channel.as_deref()),
            ),
            InfoRow::new(
                "Last Mobile Login",
                format_date(usage.last_mobile_login.as_deref()),
            ),
            InfoRow::new("Last ATM Usage", format_date(usage.last_atm_usage.as_deref())),
            InfoRow::new(
                "Last Branch Visit",
                format_date(usage.last_branch_visit.as_deref()),
            ),
        ],
    );
    channels.badge_caption = Some("Active Channels:".to_string());
    channels.badges = [
        ("Mobile Banking", usage.mobile_banking_active),
        ("Internet Banking", usage.internet_banking_active),
        ("ATM", usage.atm_usage),
        ("Branch", usage.branch_visits),
    ]
    .into_iter()
    .map(|(label, active)| {
        Badge::styled(
            format!("{label} {}", check_mark(active)),
            channel_style(active),
        )
    })
    .collect();

    vec![
        channels,
        Section::with_rows(
            "Transaction Patterns",
            vec![
                InfoRow::new(
                    "Avg Monthly Transactions",
                    number_or_dash(patterns.avg_monthly_transactions),
                ),
                InfoRow::new(
                    "Avg Transaction Value",
                    format_currency(patterns.avg_transaction_value),
                ),
                InfoRow::new(
                    "Preferred Type",
                    display_or_dash(patterns.preferred_transaction_type.as_deref()),
                ),
                InfoRow::new(
                    "Peak Time",
                    display_or_dash(patterns.peak_transaction_time.as_deref()),
                ),
            ],
        ),
    ]
}
