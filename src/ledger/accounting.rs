// ==========================================
// ERP 데모 엔진 - 회계 원장
// ==========================================
// 책임: 매입/매출/급여 원천 거래를 복식부기 분개 쌍으로 전기
// 발행 규칙: 원천 거래당 정확히 2행 (차변 전용 + 대변 전용, 금액 동일, 0 아님)
// 불변식: reference_id별 Σ차변 == Σ대변 (테스트로 검증, 런타임 방어 없음)
// ==========================================

use crate::domain::accounting::{accounts, AccountingEntry};
use crate::domain::attendance::PayrollRecord;
use crate::domain::delivery::DeliveryRecord;
use crate::domain::inbound::InboundRecord;
use crate::domain::master::Product;
use crate::domain::types::ReferenceType;
use chrono::NaiveDate;
use tracing::debug;

// ==========================================
// AccountingLedger - 회계 원장
// ==========================================
#[derive(Debug, Default)]
pub struct AccountingLedger {
    entries: Vec<AccountingEntry>,
    seq: u32,       // 분개 행 순번
    entry_seq: u32, // 전표 순번
}

impl AccountingLedger {
    /// 빈 원장 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 매입 전기: 원재료(차변) / 매입채무(대변)
    pub fn post_purchase(&mut self, inbound: &InboundRecord) {
        let amount = inbound.total_amount as f64;
        if amount <= 0.0 {
            return;
        }
        self.post_pair(
            inbound.date,
            accounts::RAW_MATERIALS,
            accounts::ACCOUNTS_PAYABLE,
            amount,
            ReferenceType::Purchase,
            &inbound.id,
            "구매부",
        );
    }

    /// 매출 전기: 매출채권(차변) / 매출(대변)
    ///
    /// 금액 = 납품 수량 × 제품 판매 단가
    pub fn post_sale(&mut self, delivery: &DeliveryRecord, product: &Product) {
        let amount = (delivery.quantity * product.sales_price) as f64;
        if amount <= 0.0 {
            return;
        }
        self.post_pair(
            delivery.delivery_date,
            accounts::ACCOUNTS_RECEIVABLE,
            accounts::SALES_REVENUE,
            amount,
            ReferenceType::Sales,
            &delivery.id,
            "영업부",
        );
    }

    /// 급여 전기: 급여(차변) / 미지급금(대변), 금액은 지급 총액
    pub fn post_payroll(&mut self, payroll: &PayrollRecord) {
        if payroll.gross_pay <= 0.0 {
            return;
        }
        // 지급일: 귀속 월 25일 (파싱 불가 시 건너뜀)
        let Some(pay_date) = parse_pay_date(&payroll.month) else {
            return;
        };
        self.post_pair(
            pay_date,
            accounts::SALARY_EXPENSE,
            accounts::ACCRUED_EXPENSES,
            payroll.gross_pay,
            ReferenceType::Payroll,
            &payroll.id,
            &payroll.department,
        );
    }

    /// 분개 쌍 전기 (차변 1행 + 대변 1행, 동일 전표/참조)
    #[allow(clippy::too_many_arguments)]
    fn post_pair(
        &mut self,
        date: NaiveDate,
        debit_account: (&str, &str),
        credit_account: (&str, &str),
        amount: f64,
        reference_type: ReferenceType,
        reference_id: &str,
        department: &str,
    ) {
        self.entry_seq += 1;
        let entry_no = format!("JE-{}-{:04}", date.format("%Y%m"), self.entry_seq);

        self.push_row(
            entry_no.clone(),
            date,
            debit_account,
            amount,
            0.0,
            reference_type,
            reference_id,
            department,
        );
        self.push_row(
            entry_no,
            date,
            credit_account,
            0.0,
            amount,
            reference_type,
            reference_id,
            department,
        );

        debug!(
            reference_id,
            %reference_type,
            amount,
            "분개 쌍 전기"
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn push_row(
        &mut self,
        entry_no: String,
        date: NaiveDate,
        account: (&str, &str),
        debit_amount: f64,
        credit_amount: f64,
        reference_type: ReferenceType,
        reference_id: &str,
        department: &str,
    ) {
        self.seq += 1;
        self.entries.push(AccountingEntry {
            id: format!("ACC-{:06}", self.seq),
            entry_no,
            date,
            account_code: account.0.to_string(),
            account_name: account.1.to_string(),
            debit_amount,
            credit_amount,
            reference_type,
            reference_id: reference_id.to_string(),
            department: department.to_string(),
        });
    }

    /// 전기된 분개 행 목록
    pub fn entries(&self) -> &[AccountingEntry] {
        &self.entries
    }

    /// 분개 행 소유권 이동 (데이터셋 조립용)
    pub fn into_entries(self) -> Vec<AccountingEntry> {
        self.entries
    }
}

/// 귀속 월(YYYY-MM) → 지급일(해당 월 25일)
fn parse_pay_date(month: &str) -> Option<NaiveDate> {
    let (year, month_num) = month.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month_num: u32 = month_num.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month_num, 25)
}
