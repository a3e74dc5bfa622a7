// ==========================================
// ERP 데모 엔진 - 생성 데이터셋 컨테이너
// ==========================================
// 용도: 이벤트 생성기 1회 실행 결과의 전체 그래프
// 생명주기: 생성 후 불변, 결과 캐시가 프로세스 수명 동안 보관
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::domain::{
    AccountingEntry, AttendanceRecord, DeliveryRecord, InboundRecord, Lot, PayrollRecord,
    ProductionRecord,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// GeneratedDataset - 생성 결과 그래프
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDataset {
    pub dataset_id: Uuid,          // 생성 회차 식별자
    pub start_date: NaiveDate,     // 구간 시작일
    pub end_date: NaiveDate,       // 구간 종료일
    pub catalog: ReferenceCatalog, // 생성에 사용된 기준정보
    pub lots: Vec<Lot>,
    pub inbounds: Vec<InboundRecord>,
    pub productions: Vec<ProductionRecord>,
    pub deliveries: Vec<DeliveryRecord>,
    pub attendance: Vec<AttendanceRecord>,
    pub payrolls: Vec<PayrollRecord>,
    pub accounting_entries: Vec<AccountingEntry>,
}

impl GeneratedDataset {
    /// 생산 실적 단건 조회
    pub fn find_production(&self, id: &str) -> Option<&ProductionRecord> {
        self.productions.iter().find(|p| p.id == id)
    }

    /// 납품 실적 단건 조회
    pub fn find_delivery(&self, id: &str) -> Option<&DeliveryRecord> {
        self.deliveries.iter().find(|d| d.id == id)
    }

    /// 입고 실적 단건 조회 (로트 번호 기준)
    pub fn find_inbound_by_lot(&self, lot_number: &str) -> Option<&InboundRecord> {
        self.inbounds.iter().find(|i| i.lot_number == lot_number)
    }

    /// 로트 단건 조회
    pub fn find_lot(&self, lot_number: &str) -> Option<&Lot> {
        self.lots.iter().find(|l| l.lot_number == lot_number)
    }

    /// 구간 표기 (요약 출력용)
    pub fn period_label(&self) -> String {
        format!("{} ~ {}", self.start_date, self.end_date)
    }
}
