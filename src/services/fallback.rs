use crate::models::{
    AdvisoryRequest, AdvisoryResult, Allocation, BondPick, Confidence, DebtPick, FundPick,
    GeneralAnswer, PortfolioRecommendation, RiskLevel, StockPick,
};
use crate::services::prompt::is_general_question;

/// Canned answers to general finance questions, keyed by language code.
/// Unknown codes fall back to the English entry.
const GENERAL_ANSWERS: [(&str, &str); 6] = [
    ("en", "SIP (Systematic Investment Plan) lets you invest a fixed amount regularly into mutual funds. It helps rupee cost averaging and disciplined investing."),
    ("hi", "SIP (सिस्टमेटिक इन्वेस्टमेंट प्लान) आपको नियमित रूप से म्यूचुअल फंडों में एक निश्चित राशि निवेश करने देता है। यह डिसिप्लिन और रु। वैरिएशन में मदद करता है।"),
    ("ta", "SIP என்பது மியூச்சுவல் ஃபண்டுகளில் மாத்திரையாக தொகையை முதலீடு செய்வதற்கு உதவுகிறது; இது உட்பட்ட செலவைக் குறைக்கிறது."),
    ("te", "SIP అనేది మీచ్యువల్ ఫండ్స్‌లో న్లకం చేయడానికి సహాయపడుతుంది. ఇది ఖర్చు సరిపడే విధంగా ఉంటుంది."),
    ("kn", "SIP ಮ್ಯೂಚುಯಲ್ ಫಂಡ್ಗಳಲ್ಲಿ ನಿಯತ ಪ್ರಮಾಣದ ಹೂಡಿಕೆಯನ್ನು ಸಹಾಯ ಮಾಡುತ್ತದೆ; ಇದು ಅವಸರದ ನಿರ್ವಹಣೆಗೆ ಸಹಕಾರಿ."),
    ("ml", "SIP മ്യൂച്വൽ ഫണ്ടുകളിൽ സ്ഥിരത്തവണ നിക്ഷേപം ചെയ്യാൻ സഹായിക്കുന്നു; ഇത് റൂಪಿ കോസ്റ്റ് ശരാശരി എന്നിവയുടെ ഗുണങ്ങള്‍ നല്‍കുന്നു."),
];

fn canned_answer(language: &str) -> &'static str {
    GENERAL_ANSWERS
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, text)| *text)
        .unwrap_or(GENERAL_ANSWERS[0].1)
}

/// One fixed rule tier. Only these three exist; unrecognized risk input has
/// already been normalized to Medium by the request.
struct Tier {
    allocation: Allocation,
    projected_return_range: &'static str,
    risk_score: u8,
}

const LOW_TIER: Tier = Tier {
    allocation: Allocation {
        equity_percent: 20.0,
        debt_percent: 50.0,
        mutualfunds_percent: 20.0,
        bonds_percent: 5.0,
        gold_percent: 3.0,
        cash_percent: 2.0,
    },
    projected_return_range: "6-8%",
    risk_score: 3,
};

const MEDIUM_TIER: Tier = Tier {
    allocation: Allocation {
        equity_percent: 45.0,
        debt_percent: 30.0,
        mutualfunds_percent: 15.0,
        bonds_percent: 5.0,
        gold_percent: 3.0,
        cash_percent: 2.0,
    },
    projected_return_range: "8-11%",
    risk_score: 5,
};

const HIGH_TIER: Tier = Tier {
    allocation: Allocation {
        equity_percent: 65.0,
        debt_percent: 10.0,
        mutualfunds_percent: 15.0,
        bonds_percent: 0.0,
        gold_percent: 5.0,
        cash_percent: 5.0,
    },
    projected_return_range: "12-15%",
    risk_score: 8,
};

fn tier(risk: RiskLevel) -> &'static Tier {
    match risk {
        RiskLevel::Low => &LOW_TIER,
        RiskLevel::Medium => &MEDIUM_TIER,
        RiskLevel::High => &HIGH_TIER,
    }
}

// Instrument catalogs are the same for every tier; only allocation and
// projected returns vary by risk.

fn fund_catalog() -> Vec<FundPick> {
    vec![
        FundPick {
            name: "SBI Bluechip Fund".to_string(),
            category: "Large cap".to_string(),
            identifier_or_note: "SBI Bluechip".to_string(),
            rationale: "Large-cap, steady performance".to_string(),
        },
        FundPick {
            name: "Parag Parikh Flexi Cap Fund".to_string(),
            category: "Flexi cap".to_string(),
            identifier_or_note: "PPFLEXI".to_string(),
            rationale: "Diversified across caps".to_string(),
        },
        FundPick {
            name: "Axis Long Term Equity Fund".to_string(),
            category: "ELSS / Equity".to_string(),
            identifier_or_note: "AXISLT".to_string(),
            rationale: "Tax-efficient and growth oriented".to_string(),
        },
    ]
}

fn stock_catalog() -> Vec<StockPick> {
    vec![
        StockPick {
            name: "Infosys".to_string(),
            exchange: "NSE".to_string(),
            rationale: "Strong IT exporter with stable cash flows".to_string(),
        },
        StockPick {
            name: "HDFC Bank".to_string(),
            exchange: "NSE".to_string(),
            rationale: "Leading private sector bank".to_string(),
        },
        StockPick {
            name: "Reliance Industries".to_string(),
            exchange: "NSE".to_string(),
            rationale: "Diversified business & energy/retail growth".to_string(),
        },
    ]
}

fn debt_catalog() -> Vec<DebtPick> {
    vec![
        DebtPick {
            name: "State Bank of India".to_string(),
            product: "FD".to_string(),
            rationale: "Largest PSU bank; stable returns".to_string(),
        },
        DebtPick {
            name: "HDFC Bank".to_string(),
            product: "Fixed deposit".to_string(),
            rationale: "Good track record".to_string(),
        },
    ]
}

fn bond_catalog() -> Vec<BondPick> {
    vec![BondPick {
        name: "RBI Sovereign Gold Bond / Government Bonds".to_string(),
        category: "Government".to_string(),
        rationale: "Low credit risk".to_string(),
    }]
}

fn risk_list() -> Vec<String> {
    vec![
        "Market volatility — diversify".to_string(),
        "Maintain emergency cash — 3-6 months".to_string(),
        "Regular SIPs for rupee-cost averaging".to_string(),
    ]
}

fn action_plan() -> Vec<String> {
    vec![
        "Open a demat and mutual fund folio".to_string(),
        "Start SIPs for selected mutual funds".to_string(),
        "Allocate to FDs / bonds as per debt allocation".to_string(),
        "Review quarterly and rebalance annually".to_string(),
    ]
}

/// Deterministic local generator used whenever the LLM path is unavailable.
/// Pure and total: every missing or unrecognized request field degrades to a
/// default, so this function never fails and performs no I/O.
pub fn generate(request: &AdvisoryRequest) -> AdvisoryResult {
    if let Some(query) = request.query.as_deref() {
        if is_general_question(query) {
            let language = request.language();
            return AdvisoryResult::General(GeneralAnswer {
                language: language.to_string(),
                answer: canned_answer(language).to_string(),
                notice: None,
            });
        }
    }

    let risk = request.risk();
    let tier = tier(risk);

    AdvisoryResult::Portfolio(Box::new(PortfolioRecommendation {
        language: request.language().to_string(),
        risk_level: risk,
        risk_score: tier.risk_score,
        time_horizon_years: 5,
        capital_label: request.capital_label(),
        monthly_investment_label: request.monthly_investment_label(),
        allocation: tier.allocation.clone(),
        projected_return_range: tier.projected_return_range.to_string(),
        projected_notes: "Projections based on historical ranges and not guaranteed. Assumes diversified equity returns and stable debt yields.".to_string(),
        recommended_mutual_funds: fund_catalog(),
        recommended_stocks: stock_catalog(),
        recommended_debt_institutions: debt_catalog(),
        recommended_bonds: bond_catalog(),
        risks: risk_list(),
        action_steps: action_plan(),
        confidence: Confidence::Medium,
        notice: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn portfolio(result: AdvisoryResult) -> PortfolioRecommendation {
        match result {
            AdvisoryResult::Portfolio(p) => *p,
            other => panic!("expected portfolio variant, got {other:?}"),
        }
    }

    #[test]
    fn interrogative_query_returns_general_variant() {
        let request = AdvisoryRequest {
            query: Some("What is SIP?".to_string()),
            ..Default::default()
        };
        match generate(&request) {
            AdvisoryResult::General(general) => {
                assert_eq!(general.language, "en");
                assert!(general.answer.contains("Systematic Investment Plan"));
            }
            other => panic!("expected general variant, got {other:?}"),
        }
    }

    #[test]
    fn canned_answer_selected_by_language_with_english_fallback() {
        assert_ne!(canned_answer("hi"), canned_answer("en"));
        assert_eq!(canned_answer("fr"), canned_answer("en"));

        let request = AdvisoryRequest {
            query: Some("Explain SIP".to_string()),
            language: Some("ta".to_string()),
            ..Default::default()
        };
        match generate(&request) {
            AdvisoryResult::General(general) => {
                assert_eq!(general.language, "ta");
                assert_eq!(general.answer, canned_answer("ta"));
            }
            other => panic!("expected general variant, got {other:?}"),
        }
    }

    #[test]
    fn non_question_query_returns_portfolio_variant() {
        let request = AdvisoryRequest {
            query: Some("build me an aggressive portfolio".to_string()),
            ..Default::default()
        };
        assert!(matches!(generate(&request), AdvisoryResult::Portfolio(_)));
    }

    #[test]
    fn empty_request_yields_medium_portfolio_with_na_labels() {
        let result = portfolio(generate(&AdvisoryRequest::default()));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.risk_score, 5);
        assert_eq!(result.capital_label, "N/A");
        assert_eq!(result.monthly_investment_label, "N/A");
        assert_eq!(result.confidence, Confidence::Medium);
        assert_eq!(result.time_horizon_years, 5);
    }

    #[test]
    fn tiers_fix_scores_and_bounded_allocations() {
        for (risk, score, range) in [
            (RiskLevel::Low, 3, "6-8%"),
            (RiskLevel::Medium, 5, "8-11%"),
            (RiskLevel::High, 8, "12-15%"),
        ] {
            let request = AdvisoryRequest {
                risk_level: Some(risk.to_string()),
                ..Default::default()
            };
            let result = portfolio(generate(&request));
            assert_eq!(result.risk_level, risk);
            assert_eq!(result.risk_score, score);
            assert_eq!(result.projected_return_range, range);

            let a = &result.allocation;
            for percent in [
                a.equity_percent,
                a.debt_percent,
                a.mutualfunds_percent,
                a.bonds_percent,
                a.gold_percent,
                a.cash_percent,
            ] {
                assert!((0.0..=100.0).contains(&percent));
            }
        }
    }

    #[test]
    fn unrecognized_risk_level_is_treated_as_medium() {
        let request = AdvisoryRequest {
            risk_level: Some("yolo".to_string()),
            ..Default::default()
        };
        let result = portfolio(generate(&request));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.risk_score, 5);
    }

    #[test]
    fn high_risk_scenario_matches_documented_labels() {
        let request = AdvisoryRequest {
            risk_level: Some("high".to_string()),
            capital: Some(Amount::Text("100000".to_string())),
            ..Default::default()
        };
        let result = portfolio(generate(&request));
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.allocation.equity_percent, 65.0);
        assert_eq!(result.capital_label, "₹100000");
    }

    #[test]
    fn catalogs_do_not_vary_by_tier() {
        let low = portfolio(generate(&AdvisoryRequest {
            risk_level: Some("low".to_string()),
            ..Default::default()
        }));
        let high = portfolio(generate(&AdvisoryRequest {
            risk_level: Some("high".to_string()),
            ..Default::default()
        }));
        assert_eq!(low.recommended_mutual_funds, high.recommended_mutual_funds);
        assert_eq!(low.recommended_stocks, high.recommended_stocks);
        assert_eq!(
            low.recommended_debt_institutions,
            high.recommended_debt_institutions
        );
        assert_eq!(low.recommended_bonds, high.recommended_bonds);
        assert_eq!(low.risks, high.risks);
        assert_eq!(low.action_steps, high.action_steps);
    }
}
