use anchor_lang::prelude::*;

#[error_code]
pub enum CoreError {
    #[msg("Generic: math operation has failed")]
    ArithmeticError,

    /*
    Trade Creation
     */
    #[msg("Trade Creation: stake zero or less")]
    CreationStakeZeroOrLess,
    #[msg("Trade Creation: slug is empty or longer than the seed limit")]
    CreationSlugInvalid,
    #[msg("Trade Creation: symbol is empty or too long")]
    CreationSymbolInvalid,

    /*
    Trade Take
     */
    #[msg("Trade Take: trade is not open")]
    TakeStatusNotOpen,
    #[msg("Trade Take: trade has already been taken")]
    TakeTakerAlreadySet,
    #[msg("Trade Take: trade window has already elapsed")]
    TakeWindowElapsed,
    #[msg("Trade Take: maker and taker must not be identical")]
    TakeMakerTakerIdentical,
    #[msg("Trade Take: trade holds no stake to match")]
    TakeNothingToMatch,

    /*
    Settlement
     */
    #[msg("Settlement: trade is not active")]
    SettlementStatusNotActive,
    #[msg("Settlement: trade window has not yet elapsed")]
    SettlementWindowNotElapsed,
    #[msg("Settlement: maker account does not match trade")]
    SettlementMakerMismatch,
    #[msg("Settlement: taker account does not match trade")]
    SettlementTakerMismatch,
    #[msg("Settlement: error calculating settlement payment")]
    SettlementPaymentCalculation,

    /*
    Oracle
     */
    #[msg("Oracle: feed account is not owned by the oracle program")]
    OracleFeedOwnerMismatch,
    #[msg("Oracle: feed does not describe the trade symbol")]
    OracleSymbolMismatch,
}
