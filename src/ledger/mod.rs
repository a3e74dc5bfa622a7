// ==========================================
// ERP 데모 엔진 - 원장 계층
// ==========================================
// 구성: 로트 원장 (1차 상태) + 급여/회계 원장 (파생 상태)
// ==========================================

pub mod accounting;
pub mod error;
pub mod lot_ledger;
pub mod payroll;

// 재수출: 핵심 타입
pub use accounting::AccountingLedger;
pub use error::{LedgerError, LedgerResult};
pub use lot_ledger::LotLedger;
pub use payroll::{build_payroll, PayrollPolicy};
