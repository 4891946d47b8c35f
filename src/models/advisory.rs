use serde::{Deserialize, Serialize};

/// Risk tier driving the fixed allocation rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Case-normalizes free-form input. Anything unrecognized (including
    /// absence) maps to Medium.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("low") => RiskLevel::Low,
            Some("high") => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Confidence level attached to a recommendation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Monetary amounts arrive either as JSON numbers or as numeric strings
/// (clients send both). Labels always use the ₹ prefix; an absent amount is
/// rendered as "N/A" by the owning request, never as zero.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn label(&self) -> String {
        match self {
            Amount::Number(n) if n.fract() == 0.0 => format!("₹{n:.0}"),
            Amount::Number(n) => format!("₹{}", n),
            Amount::Text(s) => format!("₹{}", s),
        }
    }
}

const NOT_APPLICABLE: &str = "N/A";

/// Inbound advisory request. Every field is optional; defaults are applied
/// by the accessor methods so the struct stays a faithful image of the wire
/// payload. Immutable once constructed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub capital: Option<Amount>,
    pub monthly_investment: Option<Amount>,
    pub risk_level: Option<String>,
    pub preferences: Vec<String>,
    pub query: Option<String>,
    pub language: Option<String>,
}

impl AdvisoryRequest {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::parse(self.risk_level.as_deref())
    }

    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("en")
    }

    pub fn capital_label(&self) -> String {
        self.capital
            .as_ref()
            .map(Amount::label)
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    pub fn monthly_investment_label(&self) -> String {
        self.monthly_investment
            .as_ref()
            .map(Amount::label)
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    pub fn preferences_label(&self) -> String {
        if self.preferences.is_empty() {
            "Not specified".to_string()
        } else {
            self.preferences.join(", ")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    pub equity_percent: f64,
    pub debt_percent: f64,
    pub mutualfunds_percent: f64,
    pub bonds_percent: f64,
    pub gold_percent: f64,
    pub cash_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundPick {
    pub name: String,
    pub category: String,
    pub identifier_or_note: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockPick {
    pub name: String,
    pub exchange: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtPick {
    pub name: String,
    pub product: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BondPick {
    pub name: String,
    pub category: String,
    pub rationale: String,
}

/// Short answer to a general finance question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralAnswer {
    pub language: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Full structured portfolio recommendation. Allocation percentages come
/// from fixed rule tables and are not required to sum exactly to 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecommendation {
    pub language: String,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub time_horizon_years: u32,
    pub capital_label: String,
    pub monthly_investment_label: String,
    pub allocation: Allocation,
    pub projected_return_range: String,
    pub projected_notes: String,
    pub recommended_mutual_funds: Vec<FundPick>,
    pub recommended_stocks: Vec<StockPick>,
    pub recommended_debt_institutions: Vec<DebtPick>,
    pub recommended_bonds: Vec<BondPick>,
    pub risks: Vec<String>,
    pub action_steps: Vec<String>,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Returned when the LLM responded but its output could not be salvaged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationError {
    pub message: String,
    pub raw_text: String,
}

/// Result union, tagged on "type" over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdvisoryResult {
    General(GeneralAnswer),
    Portfolio(Box<PortfolioRecommendation>),
    Error(GenerationError),
}

impl AdvisoryResult {
    /// Attaches a fallback notice to locally generated variants. Error
    /// variants carry their own diagnostics and are left untouched.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        match &mut self {
            AdvisoryResult::General(general) => general.notice = Some(notice.into()),
            AdvisoryResult::Portfolio(portfolio) => portfolio.notice = Some(notice.into()),
            AdvisoryResult::Error(_) => {}
        }
        self
    }
}
