use std::sync::OnceLock;

use regex::Regex;

use crate::models::AdvisoryRequest;

/// Lexical markers that classify a free-text query as a general finance
/// question rather than a portfolio request. The prompt instructions and the
/// local fallback generator both derive from this single list so the two
/// paths can never disagree on the classification.
const GENERAL_QUERY_MARKERS: [&str; 6] =
    ["what", "how", "explain", "define", "difference", "meaning"];

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b({})\b", GENERAL_QUERY_MARKERS.join("|")))
            .expect("marker pattern is a valid regex")
    })
}

/// Case-insensitive whole-word test shared by prompt construction and the
/// fallback generator.
pub fn is_general_question(query: &str) -> bool {
    marker_pattern().is_match(query)
}

/// Renders the generation instruction for one request. Pure and total:
/// absent numbers become "N/A", absent preferences "Not specified", the risk
/// level is normalized, and the full output schema is spelled out
/// field-by-field so the model is boxed into a single JSON object.
pub fn build_prompt(request: &AdvisoryRequest) -> String {
    let capital = request.capital_label();
    let sip = match &request.monthly_investment {
        Some(amount) => format!("{} / month", amount.label()),
        None => "N/A".to_string(),
    };
    let preferences = request.preferences_label();
    let risk = request.risk();
    let query = request.query.as_deref().unwrap_or("Portfolio recommendation");

    let language = request.language();
    let lang_note = if language == "en" {
        "Return final text in English.".to_string()
    } else {
        format!("Return final text in the user's language: {}.", language)
    };

    let markers = GENERAL_QUERY_MARKERS.join("\", \"");

    format!(
        r#"You are an Indian financial advisor AI that returns only JSON. The user input:

- Capital: {capital}
- Monthly SIP: {sip}
- Risk appetite: {risk}
- Preferences: {preferences}
- Query: {query}
{lang_note}

TASK:
1) If the user query is a general question about investing (detect by words such as "{markers}"), return JSON with "type": "general" as specified below.
2) Otherwise produce a DETAILED portfolio recommendation in JSON only.

JSON OUTPUT SPECIFICATION:
Return a single JSON object (no extra commentary). Use these fields EXACTLY:

{{
  "type": "portfolio" | "general",
  "language": "<language code>",
  "riskLevel": "<low|medium|high>",
  "riskScore": <number between 0-10>,
  "timeHorizonYears": <integer, suggested>,
  "capitalLabel": "<string, e.g. ₹100000>",
  "monthlyInvestmentLabel": "<string>",
  "allocation": {{
    "equity_percent": <number between 0-100>,
    "debt_percent": <number between 0-100>,
    "mutualfunds_percent": <number between 0-100>,
    "bonds_percent": <number between 0-100>,
    "gold_percent": <number between 0-100>,
    "cash_percent": <number between 0-100>
  }},
  "projectedReturnRange": "<e.g. 9-12%>",
  "projectedNotes": "<short text about assumptions used to compute projections>",
  "recommendedMutualFunds": [
    {{"name":"<fund name>", "category":"<Large cap / Flexi cap / Debt / Hybrid>", "identifierOrNote":"<AMFI code or brief note>", "rationale":"<one-line reason>"}}
  ],
  "recommendedStocks": [
    {{"name":"<company name>", "exchange":"NSE/BSE", "rationale":"<one-line reason>"}}
  ],
  "recommendedDebtInstitutions": [
    {{"name":"<bank name>", "product":"<FD / Savings / Corporate FD>", "rationale":"<one-line reason>"}}
  ],
  "recommendedBonds": [
    {{"name":"<bond name>", "category":"<Govt / PSU>", "rationale":"<one-line reason>"}}
  ],
  "risks": ["<bullet points>"],
  "actionSteps": ["<step-by-step actionable items>"],
  "confidence": "<low|medium|high>"
}}

IMPORTANT:
- Keep numbers realistic.
- If the user asked a general finance question, set "type": "general" and return {{"type":"general", "language":"<language code>", "answer":"<short explanatory text>"}}.
- If the user asked for another language, return text in the requested language.
- Do NOT include any additional text outside the JSON object.
"#
    )
}
