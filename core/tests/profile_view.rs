//! Profile view model: header, quick stats and tab contents.

use c360_core::{
    classify::Tone,
    profile::{CustomerProfileRecord, ProfileResponse},
    view::{Entry, ProfileView, Section, TabKey},
};

// ── Helpers ────────────────────────────────────────────────────────

fn fixture_records() -> Vec<CustomerProfileRecord> {
    let response: ProfileResponse =
        serde_json::from_str(include_str!("fixtures/customer_profiles.json")).unwrap();
    response.data
}

fn full_view() -> ProfileView {
    ProfileView::build(&fixture_records()[0])
}

fn sparse_view() -> ProfileView {
    ProfileView::build(&fixture_records()[1])
}

fn section<'a>(view: &'a ProfileView, key: TabKey, title: &str) -> &'a Section {
    view.tab(key)
        .unwrap()
        .sections
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| panic!("no section {title} in {key:?}"))
}

fn row<'a>(rows: &'a [c360_core::view::InfoRow], label: &str) -> &'a str {
    rows.iter()
        .find(|r| r.label == label)
        .map(|r| r.value.as_str())
        .unwrap_or_else(|| panic!("no row {label}"))
}

fn badge_labels(entry: &Entry) -> Vec<&str> {
    entry.badges.iter().map(|b| b.label.as_str()).collect()
}

// ── Header & stats ─────────────────────────────────────────────────

#[test]
fn header_shows_identity_and_badges() {
    let view = full_view();
    let header = &view.header;

    assert_eq!(header.full_name, "Budi Santoso");
    assert_eq!(header.subtitle, "CUST0000001 • Customer since 1 Maret 2015");
    assert_eq!(header.lifetime_value, "Rp\u{a0}850.000.000");

    let labels: Vec<&str> = header.badges.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["MASS AFFLUENT", "ACTIVE", "39 years old"]);
    assert_eq!(header.badges[0].tone, Some(Tone::Blue));
    assert_eq!(
        header.badges[0].classes,
        "bg-blue-100 text-blue-800 border-blue-300 border"
    );
}

/// Missing status, age and lifetime value degrade to fallbacks.
#[test]
fn sparse_header_uses_fallbacks() {
    let view = sparse_view();
    let header = &view.header;

    assert_eq!(header.subtitle, "CUST0000002 • Customer since -");
    assert_eq!(header.lifetime_value, "Rp 0");
    assert_eq!(header.badges[0].label, "PRIVATE BANKING");
    assert_eq!(
        header.badges[0].tone,
        Some(Tone::Gray),
        "unknown segment styles as mass"
    );
    assert_eq!(header.badges[1].label, "INACTIVE");
}

#[test]
fn quick_stats_follow_totals() {
    let view = full_view();
    let stats: Vec<(&str, &str)> = view
        .quick_stats
        .iter()
        .map(|s| (s.label.as_str(), s.value.as_str()))
        .collect();
    assert_eq!(
        stats,
        vec![
            ("Total Balance", "Rp\u{a0}150.000.000"),
            ("Investments", "Rp\u{a0}85.250.000"),
            ("Loans", "Rp\u{a0}450.000.000"),
            ("Card Outstanding", "Rp\u{a0}7.250.000"),
        ]
    );
    assert_eq!(view.totals.total_accounts, 3);
}

#[test]
fn tabs_are_in_display_order() {
    let view = full_view();
    let titles: Vec<&str> = view.tabs.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Personal", "Accounts (3)", "Products", "Analytics", "Contact", "Behavior"]
    );
    assert_eq!(view.tabs[0].key, TabKey::DEFAULT);
}

// ── Personal ───────────────────────────────────────────────────────

#[test]
fn personal_tab_formats_identity_rows() {
    let view = full_view();
    let info = section(&view, TabKey::Personal, "Personal Information");

    assert_eq!(row(&info.rows, "Gender"), "Male");
    assert_eq!(row(&info.rows, "Date of Birth"), "15 Juni 1985");
    assert_eq!(row(&info.rows, "Age"), "39 years");
    assert_eq!(row(&info.rows, "NPWP"), "-");

    let demo = section(&view, TabKey::Personal, "Demographics");
    assert_eq!(row(&demo.rows, "Monthly Income"), "Rp\u{a0}25.000.000");
    assert_eq!(row(&demo.rows, "Years Employed"), "8 years");

    let address = section(&view, TabKey::Personal, "Address");
    assert_eq!(
        row(&address.rows, "Street Address"),
        "Jl. Merdeka No. 10, RT 02 RW 05"
    );
}

/// No address record, no address section.
#[test]
fn address_section_only_when_present() {
    let view = sparse_view();
    let personal = view.tab(TabKey::Personal).unwrap();
    assert_eq!(personal.sections.len(), 2);
    assert!(personal.sections.iter().all(|s| s.title != "Address"));

    let info = section(&view, TabKey::Personal, "Personal Information");
    assert_eq!(row(&info.rows, "Gender"), "Female");
    assert_eq!(row(&info.rows, "Date of Birth"), "-");
}

// ── Accounts ───────────────────────────────────────────────────────

#[test]
fn accounts_tab_lists_each_account() {
    let view = full_view();
    let accounts = section(&view, TabKey::Accounts, "Accounts");

    let titles: Vec<&str> = accounts.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["💰 Tabungan Plus", "💳 Giro Bisnis", "💼 Tabungan Payroll"]
    );

    let blocked = &accounts.entries[1];
    assert_eq!(badge_labels(blocked), vec!["blocked"]);
    assert_eq!(blocked.badges[0].tone, Some(Tone::Red));
    assert_eq!(
        blocked.highlight.as_ref().map(|r| r.value.as_str()),
        Some("Rp 0"),
        "missing balance shows the zero literal"
    );
    assert_eq!(row(&accounts.entries[0].rows, "Interest Rate"), "1.5%");
}

#[test]
fn empty_accounts_show_message() {
    let view = sparse_view();
    assert_eq!(view.tab(TabKey::Accounts).unwrap().title, "Accounts (0)");
    let accounts = section(&view, TabKey::Accounts, "Accounts");
    assert!(accounts.entries.is_empty());
    assert_eq!(accounts.empty_message.as_deref(), Some("No accounts found"));
}

// ── Products ───────────────────────────────────────────────────────

#[test]
fn product_groups_carry_counts() {
    let view = full_view();
    let titles: Vec<&str> = view
        .tab(TabKey::Products)
        .unwrap()
        .sections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Deposits (1)", "Loans (2)", "Cards (2)", "Investments (2)"]
    );
}

/// Empty product groups are omitted entirely.
#[test]
fn empty_product_groups_are_omitted() {
    let view = sparse_view();
    assert!(view.tab(TabKey::Products).unwrap().sections.is_empty());
}

#[test]
fn overdue_loan_gets_dpd_badge() {
    let view = full_view();
    let loans = section(&view, TabKey::Products, "Loans (2)");

    assert_eq!(badge_labels(&loans.entries[0]), vec!["active", "15 DPD"]);
    assert_eq!(loans.entries[0].badges[1].classes, "bg-red-100 text-red-800");
    assert_eq!(badge_labels(&loans.entries[1]), vec!["current"]);
    assert_eq!(row(&loans.entries[1].rows, "Outstanding"), "Rp 0");
    assert_eq!(row(&loans.entries[0].rows, "Remaining"), "120 months");
}

/// Credit rows only for cards with a positive limit.
#[test]
fn card_credit_rows_only_with_credit_line() {
    let view = full_view();
    let cards = section(&view, TabKey::Products, "Cards (2)");

    let credit = &cards.entries[0];
    assert_eq!(credit.title, "VISA Platinum");
    let labels: Vec<&str> = credit.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Credit Limit", "Outstanding", "Available", "Rewards"]);
    assert_eq!(row(&credit.rows, "Rewards"), "12.500 pts");

    let debit = &cards.entries[1];
    assert_eq!(debit.rows.len(), 1);
    assert_eq!(row(&debit.rows, "Rewards"), "0 pts");
}

#[test]
fn investment_return_badges_are_signed() {
    let view = full_view();
    let investments = section(&view, TabKey::Products, "Investments (2)");

    assert_eq!(badge_labels(&investments.entries[0]), vec!["+12.5%"]);
    assert_eq!(investments.entries[0].badges[0].tone, Some(Tone::Green));
    assert_eq!(badge_labels(&investments.entries[1]), vec!["-3.33%"]);
    assert_eq!(investments.entries[1].badges[0].tone, Some(Tone::Red));
    assert_eq!(
        row(&investments.entries[1].rows, "Gain/Loss"),
        "-Rp\u{a0}1.000.000"
    );
}

// ── Analytics, contact, behavior ───────────────────────────────────

#[test]
fn analytics_rows() {
    let view = full_view();
    let seg = section(&view, TabKey::Analytics, "Segmentation");
    assert_eq!(row(&seg.rows, "Potential Segment"), "HIGH NET_WORTH");
    assert_eq!(row(&seg.rows, "Churn Score"), "0.12");
    assert_eq!(row(&seg.rows, "Churn Risk"), "low");

    let ownership = section(&view, TabKey::Analytics, "Product Ownership");
    assert_eq!(row(&ownership.rows, "Total Products"), "10");

    let engagement = section(&view, TabKey::Analytics, "Engagement Metrics");
    assert_eq!(row(&engagement.rows, "Digital Adoption"), "HIGH");
    assert_eq!(row(&engagement.rows, "Avg Transaction Value"), "Rp\u{a0}750.000");
}

#[test]
fn contact_consents_as_badges() {
    let view = full_view();
    let info = section(&view, TabKey::Contact, "Contact Information");
    assert_eq!(row(&info.rows, "Secondary Phone"), "-");
    assert_eq!(row(&info.rows, "Primary Email"), "budi.santoso@example.com");

    let prefs = section(&view, TabKey::Contact, "Communication Preferences");
    let labels: Vec<&str> = prefs.badges.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Email: ✓", "SMS: ✗", "WhatsApp: ✓", "Marketing: ✗"]);
    assert_eq!(prefs.badge_caption.as_deref(), Some("Consents:"));
}

#[test]
fn behavior_channels_as_badges() {
    let view = full_view();
    let channels = section(&view, TabKey::Behavior, "Channel Usage");
    assert_eq!(row(&channels.rows, "Last Mobile Login"), "20 November 2024");
    assert_eq!(row(&channels.rows, "Last Branch Visit"), "-");

    let labels: Vec<&str> = channels.badges.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Mobile Banking ✓", "Internet Banking ✗", "ATM ✓", "Branch ✗"]
    );
}

/// Sparse records still produce every tab with placeholder rows.
#[test]
fn sparse_record_builds_every_tab() {
    let view = sparse_view();
    assert_eq!(view.tabs.len(), TabKey::ALL.len());
    let prefs = section(&view, TabKey::Contact, "Communication Preferences");
    assert!(prefs.badges.iter().all(|b| b.label.ends_with('✗')));
    let seg = section(&view, TabKey::Analytics, "Segmentation");
    assert_eq!(row(&seg.rows, "Lifetime Value"), "Rp 0");
    assert_eq!(row(&seg.rows, "Segment Score"), "-");
}
