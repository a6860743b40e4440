//! Tests for the archetype classification cascade.

use gapscan_analysis::archetype::classify;
use gapscan_core::PageArchetype;

#[test]
fn test_name_rules_first_match_wins() {
    // "detail" appears before the generic fallback — a detail page
    // is never classified as a list.
    assert_eq!(
        classify("WorkOrderDetailPage.tsx", "os", ""),
        PageArchetype::Detail
    );
    assert_eq!(
        classify("DashboardPage.tsx", "", ""),
        PageArchetype::Dashboard
    );
    assert_eq!(classify("LoginPage.tsx", "", ""), PageArchetype::Auth);
    assert_eq!(
        classify("ServiceCallMapPage.tsx", "chamados", ""),
        PageArchetype::Visualization
    );
    assert_eq!(
        classify("QuoteCreatePage.tsx", "orcamentos", ""),
        PageArchetype::Form
    );
    assert_eq!(
        classify("SettingsPage.tsx", "configuracoes", ""),
        PageArchetype::Config
    );
    assert_eq!(
        classify("CustomerMergePage.tsx", "cadastros", ""),
        PageArchetype::Utility
    );
    assert_eq!(
        classify("ReportsPage.tsx", "relatorios", ""),
        PageArchetype::Report
    );
    assert_eq!(
        classify("AuditLogPage.tsx", "admin", ""),
        PageArchetype::ReadonlyList
    );
    assert_eq!(
        classify("NotificationsPage.tsx", "notificacoes", ""),
        PageArchetype::Messaging
    );
    assert_eq!(
        classify("SkillsMatrixPage.tsx", "rh", ""),
        PageArchetype::Analysis
    );
}

#[test]
fn test_earlier_rule_beats_later_rule() {
    // "dashboard" (rule 1) wins over "report" (rule 9) when both
    // substrings appear.
    assert_eq!(
        classify("ReportDashboardPage.tsx", "", ""),
        PageArchetype::Dashboard
    );
}

#[test]
fn test_folder_rules() {
    assert_eq!(
        classify("MaintenanceTab.tsx", "fleet/components", ""),
        PageArchetype::TabComponent
    );
    assert_eq!(
        classify("SignatureCapture.tsx", "tech", ""),
        PageArchetype::TechFeature
    );
    // A page-suffixed file in a tech folder is not a tech feature.
    assert_eq!(
        classify("TechWorkOrdersPage.tsx", "tech", ""),
        PageArchetype::ListDefault
    );
}

#[test]
fn test_content_fallback_tabbed() {
    let tabbed = "const [activeTab, setActiveTab] = useState('general');";
    assert_eq!(
        classify("CentralPage.tsx", "central", tabbed),
        PageArchetype::Tabbed
    );
}

#[test]
fn test_default_is_list() {
    assert_eq!(
        classify("CustomersPage.tsx", "cadastros", "plain content"),
        PageArchetype::ListDefault
    );
}

#[test]
fn test_classifier_is_pure() {
    for _ in 0..10 {
        assert_eq!(
            classify("InvoicesPage.tsx", "financeiro", "x"),
            classify("InvoicesPage.tsx", "financeiro", "x"),
        );
    }
}
