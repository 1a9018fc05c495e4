use std::fmt;

use serde::Serialize;

/// Closed set of standard event names accepted by the native layer.
///
/// The trailing group (`Achievement` through `ViewContent`) are legacy names
/// the collector still accepts for backward compatibility; new integrations
/// should prefer the content-event API ([`crate::ContentEventName`]) for
/// commerce events.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum StandardEventName {
    AchieveLevel,
    AddPaymentInfo,
    CompleteTutorial,
    CreateGroup,
    CreateRole,
    GenerateLead,
    ImpressionLevelAdRevenue,
    InAppAdClick,
    InAppAdImpr,
    InstallApp,
    JoinGroup,
    LaunchApp,
    LoanApplication,
    LoanApproval,
    LoanDisbursal,
    Login,
    Purchase,
    Rate,
    Registration,
    Search,
    SpendCredits,
    StartTrial,
    Subscribe,
    UnlockAchievement,
    // Legacy names, still accepted by the collector.
    Achievement,
    AddToCart,
    AddToWishlist,
    Checkout,
    CompleteRegistration,
    ViewContent,
}

impl StandardEventName {
    /// Wire name forwarded to the native layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardEventName::AchieveLevel => "AchieveLevel",
            StandardEventName::AddPaymentInfo => "AddPaymentInfo",
            StandardEventName::CompleteTutorial => "CompleteTutorial",
            StandardEventName::CreateGroup => "CreateGroup",
            StandardEventName::CreateRole => "CreateRole",
            StandardEventName::GenerateLead => "GenerateLead",
            StandardEventName::ImpressionLevelAdRevenue => "ImpressionLevelAdRevenue",
            StandardEventName::InAppAdClick => "InAppADClick",
            StandardEventName::InAppAdImpr => "InAppADImpr",
            StandardEventName::InstallApp => "InstallApp",
            StandardEventName::JoinGroup => "JoinGroup",
            StandardEventName::LaunchApp => "LaunchAPP",
            StandardEventName::LoanApplication => "LoanApplication",
            StandardEventName::LoanApproval => "LoanApproval",
            StandardEventName::LoanDisbursal => "LoanDisbursal",
            StandardEventName::Login => "Login",
            StandardEventName::Purchase => "Purchase",
            StandardEventName::Rate => "Rate",
            StandardEventName::Registration => "Registration",
            StandardEventName::Search => "Search",
            StandardEventName::SpendCredits => "SpendCredits",
            StandardEventName::StartTrial => "StartTrial",
            StandardEventName::Subscribe => "Subscribe",
            StandardEventName::UnlockAchievement => "UnlockAchievement",
            StandardEventName::Achievement => "Achievement",
            StandardEventName::AddToCart => "AddToCart",
            StandardEventName::AddToWishlist => "AddToWishlist",
            StandardEventName::Checkout => "Checkout",
            StandardEventName::CompleteRegistration => "CompleteRegistration",
            StandardEventName::ViewContent => "ViewContent",
        }
    }
}

impl fmt::Display for StandardEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
