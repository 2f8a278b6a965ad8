//! Route module - claim destinations and routing decisions

use std::fmt;

/// Destination queue for a claim
///
/// Routing is total: every claim receives exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Low-risk claim, straight-through processing
    FastTrack,
    /// A human adjuster must review the claim
    ManualReview,
    /// Suspected fraud or inconsistent data
    InvestigationFlag,
    /// Needs domain expertise (injury, total loss, specialized assets)
    SpecialistQueue,
}

impl Route {
    /// Every route
    pub const ALL: [Route; 4] = [
        Route::FastTrack,
        Route::ManualReview,
        Route::InvestigationFlag,
        Route::SpecialistQueue,
    ];

    /// Get the route label as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::FastTrack => "fast-track",
            Route::ManualReview => "manual-review",
            Route::InvestigationFlag => "investigation-flag",
            Route::SpecialistQueue => "specialist-queue",
        }
    }

    /// Parse a route label
    ///
    /// Accepts the report label as well as the title-case spelling used by
    /// older expected files ("Fast-track", "Manual Review").
    pub fn parse(s: &str) -> Option<Self> {
        let folded: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "fast-track" | "fasttrack" => Some(Route::FastTrack),
            "manual-review" => Some(Route::ManualReview),
            "investigation-flag" => Some(Route::InvestigationFlag),
            "specialist-queue" => Some(Route::SpecialistQueue),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid route: {}", s))
    }
}

/// Outcome of routing one claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Selected route
    pub route: Route,

    /// Single sentence naming the condition(s) that decided the route
    pub reasoning: String,

    /// Name of the rule that fired
    pub rule: &'static str,
}

impl RoutingDecision {
    /// Create a new decision
    pub fn new(route: Route, reasoning: impl Into<String>, rule: &'static str) -> Self {
        Self {
            route,
            reasoning: reasoning.into(),
            rule,
        }
    }
}
