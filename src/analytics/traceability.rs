// ==========================================
// ERP 데모 엔진 - 추적성 조회
// ==========================================
// 책임: 생성 데이터셋 위 순방향/역방향 추적 (읽기 전용, 부수효과 없음)
//   - 생산 → 투입 자재 로트 (공급업체·입고일 부가)
//   - 납품 → 원천 생산 → 자재 로트 (재귀)
// 부재 ID는 None 반환 - 오류 아님
// ==========================================

use crate::domain::{DeliveryRecord, ProductionRecord};
use crate::engine::dataset::GeneratedDataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// MaterialTrace - 소모 자재 추적 항목
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialTrace {
    pub material_code: String,          // 자재 코드
    pub material_name: String,          // 자재명 (마스터 부재 시 코드 그대로)
    pub lot_number: String,             // 원천 로트 번호
    pub quantity: i64,                  // 소모 수량
    pub supplier_code: String,          // 공급업체 코드
    pub supplier_name: String,          // 공급업체명
    pub inbound_date: Option<NaiveDate>, // 로트 입고일
}

// ==========================================
// ProductionTrace - 생산 → 자재 추적 결과
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionTrace {
    pub production: ProductionRecord,
    pub materials_used: Vec<MaterialTrace>,
}

// ==========================================
// DeliveryTrace - 납품 → 생산 추적 결과
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryTrace {
    pub delivery: DeliveryRecord,
    pub production_records: Vec<ProductionRecord>,
    pub traceability: Vec<ProductionTrace>, // 생산별 자재 추적 (재귀)
}

/// 생산 실적 → 투입 자재 로트 추적
///
/// # 반환
/// - Some: 생산 실적 + 공급업체/입고일이 부가된 소모 내역
/// - None: 생산 ID 부재
pub fn trace_production_to_materials(
    dataset: &GeneratedDataset,
    production_id: &str,
) -> Option<ProductionTrace> {
    let production = dataset.find_production(production_id)?;

    let materials_used = production
        .materials_used
        .iter()
        .map(|usage| {
            let material = dataset.catalog.find_material(&usage.material_code);
            let inbound = dataset.find_inbound_by_lot(&usage.lot_number);
            let supplier_code = inbound
                .map(|i| i.supplier_code.clone())
                .or_else(|| material.map(|m| m.supplier_code.clone()))
                .unwrap_or_default();
            let supplier_name = dataset
                .catalog
                .find_supplier(&supplier_code)
                .map(|s| s.name.clone())
                .unwrap_or_default();

            MaterialTrace {
                material_code: usage.material_code.clone(),
                material_name: material
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| usage.material_code.clone()),
                lot_number: usage.lot_number.clone(),
                quantity: usage.quantity,
                supplier_code,
                supplier_name,
                inbound_date: dataset
                    .find_lot(&usage.lot_number)
                    .map(|lot| lot.inbound_date),
            }
        })
        .collect();

    Some(ProductionTrace {
        production: production.clone(),
        materials_used,
    })
}

/// 납품 실적 → 원천 생산 실적 추적 (자재 추적 재귀 포함)
///
/// # 반환
/// - Some: 납품 + 원천 생산 목록 + 생산별 자재 추적
/// - None: 납품 ID 부재
pub fn trace_delivery_to_production(
    dataset: &GeneratedDataset,
    delivery_id: &str,
) -> Option<DeliveryTrace> {
    let delivery = dataset.find_delivery(delivery_id)?;

    let production_records: Vec<ProductionRecord> = delivery
        .production_record_ids
        .iter()
        .filter_map(|id| dataset.find_production(id))
        .cloned()
        .collect();

    let traceability = production_records
        .iter()
        .filter_map(|p| trace_production_to_materials(dataset, &p.id))
        .collect();

    Some(DeliveryTrace {
        delivery: delivery.clone(),
        production_records,
        traceability,
    })
}
