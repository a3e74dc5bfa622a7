// ==========================================
// ERP 데모 엔진 - 로트 도메인 모델
// ==========================================
// 용도: 자재 입고 1건 = 로트 1건, 생산 소모로 잔량 차감
// 불변식: used_quantity + remaining_quantity == quantity, remaining >= 0
// 상태 전이: AVAILABLE → IN_USE → CONSUMED (단방향)
// 갱신 주체: 로트 원장(LotLedger)만 가능
// ==========================================

use crate::domain::types::{LotStatus, QualityStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Lot - 자재 로트
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    pub lot_number: String,           // 로트 번호 (<자재코드>-<YYYYMMDD>-<seq>)
    pub material_code: String,        // 자재 코드
    pub inbound_date: NaiveDate,      // 입고일
    pub quality_status: QualityStatus, // 입고 검사 판정
    pub quantity: i64,                // 입고 수량
    pub used_quantity: i64,           // 누적 소모 수량
    pub remaining_quantity: i64,      // 잔여 수량
    pub status: LotStatus,            // 로트 상태
}

impl Lot {
    /// 신규 로트 생성 (잔량 = 입고량, 상태 AVAILABLE)
    pub fn new(
        lot_number: String,
        material_code: String,
        inbound_date: NaiveDate,
        quality_status: QualityStatus,
        quantity: i64,
    ) -> Self {
        Self {
            lot_number,
            material_code,
            inbound_date,
            quality_status,
            quantity,
            used_quantity: 0,
            remaining_quantity: quantity,
            status: LotStatus::Available,
        }
    }

    /// 보존 불변식 검사: used + remaining == quantity, remaining >= 0
    pub fn is_conserved(&self) -> bool {
        self.used_quantity + self.remaining_quantity == self.quantity
            && self.remaining_quantity >= 0
            && self.used_quantity >= 0
    }

    /// 생산 투입 가능 여부 (합격 + 잔량 보유)
    pub fn is_eligible(&self, as_of: NaiveDate) -> bool {
        self.inbound_date <= as_of
            && self.quality_status == QualityStatus::Passed
            && self.remaining_quantity > 0
    }
}

// ==========================================
// MaterialUsage - 생산 자재 소모 내역
// ==========================================
// 생산 실적 1건이 어느 로트에서 얼마를 소모했는지 기록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub material_code: String, // 자재 코드
    pub lot_number: String,    // 소모 원천 로트 번호
    pub quantity: i64,         // 소모 수량
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lot(quantity: i64) -> Lot {
        Lot::new(
            "MAT-001-20240115-001".to_string(),
            "MAT-001".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            QualityStatus::Passed,
            quantity,
        )
    }

    #[test]
    fn test_new_lot_is_conserved() {
        let lot = make_lot(500);
        assert!(lot.is_conserved());
        assert_eq!(lot.remaining_quantity, 500);
        assert_eq!(lot.status, LotStatus::Available);
    }

    #[test]
    fn test_eligibility_by_date_and_quality() {
        let lot = make_lot(100);
        let before = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        // 입고일 이전에는 투입 불가
        assert!(!lot.is_eligible(before));
        assert!(lot.is_eligible(after));

        // 불합격 로트는 투입 불가
        let mut failed = make_lot(100);
        failed.quality_status = QualityStatus::Failed;
        assert!(!failed.is_eligible(after));
    }
}
