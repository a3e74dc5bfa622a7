// ==========================================
// ERP 데모 엔진 - 회계 분개 도메인 모델
// ==========================================
// 용도: 매입/매출/급여 원천 거래에서 파생되는 복식부기 분개 행
// 발행 규칙: 원천 거래당 차변 전용 1행 + 대변 전용 1행 (금액 동일, 0 아님)
// 불변식: reference_id별 Σ차변 == Σ대변
// ==========================================

use crate::domain::types::ReferenceType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// AccountingEntry - 회계 분개 행
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountingEntry {
    pub id: String,                   // 분개 행 ID (예: ACC-000001)
    pub entry_no: String,             // 전표 번호 (예: JE-202401-0001)
    pub date: NaiveDate,              // 전기일
    pub account_code: String,         // 계정 코드
    pub account_name: String,         // 계정 과목명
    pub debit_amount: f64,            // 차변 금액 (KRW)
    pub credit_amount: f64,           // 대변 금액 (KRW)
    pub reference_type: ReferenceType, // 원천 거래 유형
    pub reference_id: String,         // 원천 거래 ID
    pub department: String,           // 귀속 부서
}

impl AccountingEntry {
    /// 차변 전용 행 여부
    pub fn is_debit(&self) -> bool {
        self.debit_amount > 0.0 && self.credit_amount == 0.0
    }

    /// 대변 전용 행 여부
    pub fn is_credit(&self) -> bool {
        self.credit_amount > 0.0 && self.debit_amount == 0.0
    }
}

// ==========================================
// 계정 코드 상수
// ==========================================
// 분개 발행 시 사용하는 고정 계정 체계
pub mod accounts {
    /// 매출채권 (차변, 매출 분개)
    pub const ACCOUNTS_RECEIVABLE: (&str, &str) = ("110", "매출채권");
    /// 원재료 (차변, 매입 분개)
    pub const RAW_MATERIALS: (&str, &str) = ("140", "원재료");
    /// 매입채무 (대변, 매입 분개)
    pub const ACCOUNTS_PAYABLE: (&str, &str) = ("210", "매입채무");
    /// 미지급금 (대변, 급여 분개)
    pub const ACCRUED_EXPENSES: (&str, &str) = ("220", "미지급금");
    /// 매출 (대변, 매출 분개)
    pub const SALES_REVENUE: (&str, &str) = ("410", "매출");
    /// 급여 (차변, 급여 분개)
    pub const SALARY_EXPENSE: (&str, &str) = ("510", "급여");
}
