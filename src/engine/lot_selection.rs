// ==========================================
// ERP 데모 엔진 - 로트 선정 전략
// ==========================================
// 책임: 생산 투입 로트 선정을 생성기 본체에서 분리
// 현행: 선입선출(FIFO) - 형식적 BOM 없이 적격 로트 순서대로 차출
// 확장: BOM 인지 전략으로 교체 가능 (생성기 수정 불필요)
// ==========================================

use crate::ledger::lot_ledger::LotLedger;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// LotDraw - 로트 차출 계획 항목
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotDraw {
    pub lot_number: String, // 차출 대상 로트
    pub quantity: i64,      // 차출 수량 (로트 잔량 이하 보장)
}

// ==========================================
// Trait: LotSelection
// ==========================================
pub trait LotSelection {
    /// 소요 수량에 대한 로트 차출 계획 수립
    ///
    /// 반환 계획의 각 항목은 해당 로트 잔량을 초과하지 않는다.
    /// 적격 로트가 부족하면 확보 가능한 수량까지만 계획한다 (부족분은 건너뜀).
    fn select(
        &self,
        ledger: &LotLedger,
        material_code: &str,
        as_of: NaiveDate,
        required: i64,
    ) -> Vec<LotDraw>;
}

// ==========================================
// FifoLotSelection - 선입선출 차출
// ==========================================
#[derive(Debug, Default)]
pub struct FifoLotSelection;

impl FifoLotSelection {
    pub fn new() -> Self {
        Self
    }
}

impl LotSelection for FifoLotSelection {
    fn select(
        &self,
        ledger: &LotLedger,
        material_code: &str,
        as_of: NaiveDate,
        required: i64,
    ) -> Vec<LotDraw> {
        let mut draws = Vec::new();
        let mut remaining = required;

        for lot in ledger.eligible_lots(material_code, as_of) {
            if remaining <= 0 {
                break;
            }
            let quantity = remaining.min(lot.remaining_quantity);
            if quantity > 0 {
                draws.push(LotDraw {
                    lot_number: lot.lot_number.clone(),
                    quantity,
                });
                remaining -= quantity;
            }
        }

        draws
    }
}
