mod advisory;

pub use advisory::{
    AdvisoryRequest, AdvisoryResult, Allocation, Amount, BondPick, Confidence, DebtPick, FundPick,
    GeneralAnswer, GenerationError, PortfolioRecommendation, RiskLevel, StockPick,
};
