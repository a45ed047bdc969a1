//! Static route metadata for the tool and marketing pages.

/// A route rendered from fixed copy: a heading and one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticRoute {
    /// Route relative to the output root.
    pub route: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub h1: &'static str,
    pub body: &'static str,
}

impl StaticRoute {
    /// Top-level output directory of the route.
    #[must_use]
    pub fn top_dir(&self) -> &'static str {
        self.route.split('/').next().unwrap_or(self.route)
    }
}

/// Directory holding the calculator tool pages.
pub const TOOLS_DIR: &str = "tools";

/// Directory holding the state guides.
pub const STATES_DIR: &str = "states";

pub const HOME_TITLE: &str = "LeaseLenses - AI Lease Agreement Analysis | Rental Contract Review Tool";

pub const HOME_DESCRIPTION: &str = "AI-powered lease agreement analysis and rental contract review for landlords. Upload your lease PDF and get instant extraction of key terms, risk analysis, and calendar reminders. Free lease clause checker.";

pub const HOME_HEADING: &str = "AI-Powered Lease Agreement Analysis";

pub const HOME_INTRO: &str = "Upload your lease agreement and get instant AI-powered analysis. Extract key terms, identify risks, check state compliance, and set calendar reminders — all in seconds.";

/// Feature bullets shown on the homepage.
pub const HOME_FEATURES: &[&str] = &[
    "AI-powered data extraction with 99%+ accuracy",
    "Risk identification and health scoring",
    "State-specific compliance checking for all 50 states",
    "Automatic calendar reminders for important dates",
    "Multi-document comparison",
    "Free tools: Security Deposit Calculator, Rent Increase Calculator, Late Fee Checker",
];

/// Product capabilities listed in the homepage structured data.
pub const APP_FEATURE_LIST: &[&str] = &[
    "AI-powered lease analysis",
    "Automatic key term extraction",
    "Risk identification",
    "Calendar reminders",
    "Multi-document comparison",
    "State-specific compliance checking",
];

pub const STATES_INDEX_TITLE: &str = "State Landlord-Tenant Law Guides | LeaseLenses";

pub const STATES_INDEX_DESCRIPTION: &str = "Browse landlord-tenant law guides for all 50 US states. Security deposit limits, rent increase rules, notice requirements, and key statutes.";

pub const STATES_INDEX_INTRO: &str = "Browse landlord-tenant law guides for all 50 US states. Learn about security deposit limits, rent increase rules, notice requirements, and key statutes.";

/// Characters of a state description shown in the index.
pub const STATE_EXCERPT_CHARS: usize = 120;

pub const BLOG_INDEX_HEADING: &str = "Landlord-Tenant Law Articles";

pub const BLOG_INDEX_DESCRIPTION: &str = "Guides and articles on landlord-tenant law, security deposits, rent increases, and lease compliance for US landlords.";

/// Free calculator tools.
pub const TOOLS: &[StaticRoute] = &[
    StaticRoute {
        route: "tools/security-deposit-calculator",
        title: "Security Deposit Calculator | LeaseLenses",
        description: "Free security deposit calculator. Find out the maximum security deposit your landlord can legally charge in your state.",
        h1: "Security Deposit Calculator",
        body: "Calculate the maximum security deposit your landlord can legally charge based on your state's laws. Enter your state and monthly rent to see the limit instantly.",
    },
    StaticRoute {
        route: "tools/rent-increase-calculator",
        title: "Rent Increase Calculator | LeaseLenses",
        description: "Free rent increase calculator. Calculate the maximum legal rent increase for your area and find out if your landlord's proposed increase is within legal limits.",
        h1: "Rent Increase Calculator",
        body: "Check if your landlord's proposed rent increase is within legal limits. Enter your current rent, state, and proposed increase to verify compliance.",
    },
    StaticRoute {
        route: "tools/lease-termination-notice-generator",
        title: "Lease Termination Notice Generator | LeaseLenses",
        description: "Free lease termination notice generator. Create a professional, legally-compliant lease termination letter customized for your state's requirements.",
        h1: "Lease Termination Notice Generator",
        body: "Generate a professional lease termination notice that complies with your state's requirements. Customize the letter with your details and download instantly.",
    },
    StaticRoute {
        route: "tools/late-fee-checker",
        title: "Late Fee Checker | LeaseLenses",
        description: "Free late fee checker. Verify whether your lease's late fee complies with state law. Check maximum late fees and grace period requirements.",
        h1: "Late Fee Checker",
        body: "Check if your lease's late fee is legal in your state. Enter your monthly rent, late fee amount, and state to verify compliance with local regulations.",
    },
];

/// Marketing and legal pages.
pub const MARKETING_PAGES: &[StaticRoute] = &[
    StaticRoute {
        route: "features",
        title: "Features - AI Lease Analysis Tools | LeaseLenses",
        description: "Explore LeaseLenses features: AI-powered data extraction, risk analysis, compliance checking, calendar reminders, and multi-document comparison.",
        h1: "LeaseLenses Features",
        body: "AI-powered lease analysis tools that help landlords extract key terms, identify risks, check state compliance, set calendar reminders, and compare multiple leases.",
    },
    StaticRoute {
        route: "about",
        title: "About LeaseLenses - AI Lease Agreement Analysis",
        description: "Learn about LeaseLenses, the AI-powered lease agreement analysis platform helping landlords review rental contracts with confidence.",
        h1: "About LeaseLenses",
        body: "LeaseLenses uses artificial intelligence to help landlords analyze lease agreements, extract key terms, identify risks, and ensure compliance with state regulations.",
    },
    StaticRoute {
        route: "pricing",
        title: "Pricing - LeaseLenses AI Lease Analysis",
        description: "View LeaseLenses pricing plans. Start with free credits and upgrade for unlimited AI lease analysis, risk reports, and compliance checks.",
        h1: "LeaseLenses Pricing",
        body: "Choose the right plan for your needs. Start analyzing leases for free and upgrade to unlock unlimited analysis, detailed risk reports, and state compliance checking.",
    },
    StaticRoute {
        route: "case-studies",
        title: "Case Studies - LeaseLenses",
        description: "See how landlords use LeaseLenses to analyze lease agreements, identify risky clauses, and save time on contract reviews.",
        h1: "Case Studies",
        body: "Discover how landlords and property managers use LeaseLenses to streamline lease review, catch problematic clauses, and ensure compliance with local regulations.",
    },
    StaticRoute {
        route: "templates",
        title: "Lease Templates & Resources | LeaseLenses",
        description: "Download free lease agreement templates, checklists, and landlord resources. State-specific templates for residential rental agreements.",
        h1: "Lease Templates & Resources",
        body: "Access free lease agreement templates, move-in/move-out checklists, and landlord resources to help you manage your rental properties effectively.",
    },
    StaticRoute {
        route: "privacy",
        title: "Privacy Policy | LeaseLenses",
        description: "LeaseLenses privacy policy. Learn how we collect, use, and protect your data.",
        h1: "Privacy Policy",
        body: "Your privacy is important to us. This policy describes how LeaseLenses collects, uses, and safeguards your personal information.",
    },
    StaticRoute {
        route: "terms",
        title: "Terms of Service | LeaseLenses",
        description: "LeaseLenses terms of service. Read the terms and conditions for using our platform.",
        h1: "Terms of Service",
        body: "These terms govern your use of the LeaseLenses platform and services. Please read them carefully before using our AI lease analysis tools.",
    },
    StaticRoute {
        route: "sample-report",
        title: "Sample Lease Analysis Report | LeaseLenses",
        description: "View a sample AI-generated lease analysis report. See how LeaseLenses extracts key terms, identifies risks, and checks compliance.",
        h1: "Sample Lease Analysis Report",
        body: "Preview a sample report generated by LeaseLenses AI. See how we extract key terms, calculate health scores, identify risk flags, and check state compliance.",
    },
];
