// ==========================================
// ERP 데모 엔진 - 로트 원장
// ==========================================
// 책임: 로트 상태의 단일 사실원 (발번/소모/적격 조회)
// 불변식: used + remaining == quantity, remaining >= 0 (항상)
// 소모 정책: 잔량 초과 요청은 거부 - 호출자가 잔량에 맞춰 조정
// ==========================================

use crate::domain::lot::Lot;
use crate::domain::types::{LotStatus, QualityStatus};
use crate::ledger::error::{LedgerError, LedgerResult};
use chrono::NaiveDate;
use tracing::debug;

// ==========================================
// LotLedger - 로트 원장
// ==========================================
#[derive(Debug, Default)]
pub struct LotLedger {
    lots: Vec<Lot>,
    seq: u32, // 로트 발번 순번 (원장 단위 단조 증가)
}

impl LotLedger {
    /// 빈 원장 생성
    pub fn new() -> Self {
        Self {
            lots: Vec::new(),
            seq: 0,
        }
    }

    /// 신규 로트 발번 (품질 합격 가정)
    ///
    /// # 반환
    /// 발번된 로트 번호 (<자재코드>-<YYYYMMDD>-<seq>)
    pub fn create_lot(&mut self, material_code: &str, date: NaiveDate, quantity: i64) -> String {
        self.create_lot_with_quality(material_code, date, quantity, QualityStatus::Passed)
    }

    /// 신규 로트 발번 (입고 검사 판정 포함)
    pub fn create_lot_with_quality(
        &mut self,
        material_code: &str,
        date: NaiveDate,
        quantity: i64,
        quality_status: QualityStatus,
    ) -> String {
        self.seq += 1;
        let lot_number = format!("{}-{}-{:03}", material_code, date.format("%Y%m%d"), self.seq);

        debug!(
            lot_number = %lot_number,
            quantity,
            %quality_status,
            "로트 발번"
        );

        self.lots.push(Lot::new(
            lot_number.clone(),
            material_code.to_string(),
            date,
            quality_status,
            quantity,
        ));
        lot_number
    }

    /// 로트 소모: 잔량 차감 + 누적 소모 증가
    ///
    /// # 오류
    /// - `LotNotFound`: 로트 번호 미존재
    /// - `InvalidQuantity`: 0 이하 수량 요청
    /// - `InsufficientLot`: 잔량 초과 요청 (잔량은 변경되지 않음)
    pub fn consume(&mut self, lot_number: &str, quantity: i64) -> LedgerResult<()> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity(quantity));
        }

        let lot = self
            .lots
            .iter_mut()
            .find(|l| l.lot_number == lot_number)
            .ok_or_else(|| LedgerError::LotNotFound(lot_number.to_string()))?;

        if quantity > lot.remaining_quantity {
            return Err(LedgerError::InsufficientLot {
                lot_number: lot_number.to_string(),
                requested: quantity,
                remaining: lot.remaining_quantity,
            });
        }

        lot.used_quantity += quantity;
        lot.remaining_quantity -= quantity;
        lot.status = if lot.remaining_quantity == 0 {
            LotStatus::Consumed
        } else {
            LotStatus::InUse
        };

        debug!(
            lot_number = %lot.lot_number,
            consumed = quantity,
            remaining = lot.remaining_quantity,
            status = %lot.status,
            "로트 소모"
        );
        Ok(())
    }

    /// 적격 로트 조회: 입고일 <= 기준일, 합격, 잔량 > 0
    ///
    /// 반환 순서는 입고일 오름차순 (선입선출). 유한하며 재호출 가능
    pub fn eligible_lots<'a>(
        &'a self,
        material_code: &'a str,
        as_of: NaiveDate,
    ) -> impl Iterator<Item = &'a Lot> + 'a {
        let mut matched: Vec<&Lot> = self
            .lots
            .iter()
            .filter(move |l| l.material_code == material_code && l.is_eligible(as_of))
            .collect();
        matched.sort_by_key(|l| l.inbound_date);
        matched.into_iter()
    }

    /// 로트 단건 조회
    pub fn get(&self, lot_number: &str) -> Option<&Lot> {
        self.lots.iter().find(|l| l.lot_number == lot_number)
    }

    /// 로트 잔량 조회 (미존재 시 0)
    pub fn remaining_of(&self, lot_number: &str) -> i64 {
        self.get(lot_number).map_or(0, |l| l.remaining_quantity)
    }

    /// 전체 로트 목록
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// 전체 로트 소유권 이동 (데이터셋 조립용)
    pub fn into_lots(self) -> Vec<Lot> {
        self.lots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_lot_number_format() {
        let mut ledger = LotLedger::new();
        let lot1 = ledger.create_lot("MAT-001", d(1, 15), 500);
        let lot2 = ledger.create_lot("MAT-002", d(1, 16), 300);

        assert_eq!(lot1, "MAT-001-20240115-001");
        assert_eq!(lot2, "MAT-002-20240116-002");
    }

    #[test]
    fn test_consume_transitions_status() {
        let mut ledger = LotLedger::new();
        let lot = ledger.create_lot("MAT-001", d(1, 15), 100);

        ledger.consume(&lot, 40).unwrap();
        assert_eq!(ledger.get(&lot).unwrap().status, LotStatus::InUse);
        assert_eq!(ledger.remaining_of(&lot), 60);

        ledger.consume(&lot, 60).unwrap();
        assert_eq!(ledger.get(&lot).unwrap().status, LotStatus::Consumed);
        assert_eq!(ledger.remaining_of(&lot), 0);
        assert!(ledger.get(&lot).unwrap().is_conserved());
    }

    #[test]
    fn test_consume_rejects_over_draw() {
        let mut ledger = LotLedger::new();
        let lot = ledger.create_lot("MAT-001", d(1, 15), 100);

        let result = ledger.consume(&lot, 150);
        assert!(matches!(result, Err(LedgerError::InsufficientLot { .. })));

        // 거부된 요청은 잔량을 변경하지 않음
        assert_eq!(ledger.remaining_of(&lot), 100);
        assert!(ledger.get(&lot).unwrap().is_conserved());
    }

    #[test]
    fn test_consume_rejects_unknown_lot() {
        let mut ledger = LotLedger::new();
        let result = ledger.consume("MAT-001-20240101-001", 10);
        assert!(matches!(result, Err(LedgerError::LotNotFound(_))));
    }

    #[test]
    fn test_eligible_lots_fifo_order() {
        let mut ledger = LotLedger::new();
        let late = ledger.create_lot("MAT-001", d(2, 10), 100);
        let early = ledger.create_lot("MAT-001", d(1, 5), 100);
        let _other = ledger.create_lot("MAT-002", d(1, 1), 100);
        let failed =
            ledger.create_lot_with_quality("MAT-001", d(1, 2), 100, QualityStatus::Failed);

        let eligible: Vec<String> = ledger
            .eligible_lots("MAT-001", d(3, 1))
            .map(|l| l.lot_number.clone())
            .collect();

        // 입고일 오름차순, 불합격 제외, 타 자재 제외
        assert_eq!(eligible, vec![early.clone(), late.clone()]);
        assert!(!eligible.contains(&failed));

        // 기준일 이전 입고만 적격
        let none: Vec<_> = ledger.eligible_lots("MAT-001", d(1, 1)).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_eligible_lots_excludes_consumed() {
        let mut ledger = LotLedger::new();
        let lot = ledger.create_lot("MAT-001", d(1, 5), 50);
        ledger.consume(&lot, 50).unwrap();

        let eligible: Vec<_> = ledger.eligible_lots("MAT-001", d(2, 1)).collect();
        assert!(eligible.is_empty());
    }
}
