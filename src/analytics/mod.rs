// ==========================================
// ERP 데모 엔진 - 분석 계층
// ==========================================
// 구성: 추적성 조회 + 집계 KPI (전부 순수 함수)
// ==========================================

pub mod kpi;
pub mod traceability;

// 재수출: 조회 함수 및 보고 구조체
pub use kpi::{
    inventory_turnover, labor_cost, on_time_delivery_rate, production_efficiency, summary,
    DatasetSummary, DateRange, InventoryTurnoverReport, LaborCostReport, OnTimeDeliveryReport,
    ProductionEfficiencyReport, RecordCounts,
};
pub use traceability::{
    trace_delivery_to_production, trace_production_to_materials, DeliveryTrace, MaterialTrace,
    ProductionTrace,
};
