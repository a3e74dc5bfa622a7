// ==========================================
// ERP 데모 엔진 - 추적성 API
// ==========================================
// 책임: 생산/납품 ID 기반 추적 질의 창구
// 원칙: 부재 ID는 NotFound 오류로 변환 (분석 계층의 None → API 오류)
// ==========================================

use std::sync::Arc;

use crate::analytics::{self, DeliveryTrace, ProductionTrace};
use crate::api::error::{ApiError, ApiResult};
use crate::cache::DatasetCache;

// ==========================================
// TraceApi - 추적 질의 API
// ==========================================
pub struct TraceApi {
    cache: Arc<DatasetCache>,
}

impl TraceApi {
    /// 결과 캐시 주입 생성
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self { cache }
    }

    /// 생산 실적 → 투입 자재 로트 추적
    pub fn trace_production(&self, production_id: &str) -> ApiResult<ProductionTrace> {
        if production_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("생산 ID는 공백일 수 없음".to_string()));
        }
        let dataset = self.cache.get_or_create();
        analytics::trace_production_to_materials(&dataset, production_id).ok_or_else(|| {
            ApiError::NotFound(format!("생산 실적(id={})이 존재하지 않음", production_id))
        })
    }

    /// 납품 실적 → 원천 생산 추적 (자재 추적 재귀 포함)
    pub fn trace_delivery(&self, delivery_id: &str) -> ApiResult<DeliveryTrace> {
        if delivery_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("납품 ID는 공백일 수 없음".to_string()));
        }
        let dataset = self.cache.get_or_create();
        analytics::trace_delivery_to_production(&dataset, delivery_id).ok_or_else(|| {
            ApiError::NotFound(format!("납품 실적(id={})이 존재하지 않음", delivery_id))
        })
    }
}
