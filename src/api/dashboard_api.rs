// ==========================================
// ERP 데모 엔진 - 대시보드 API
// ==========================================
// 책임: 화면/챗봇 협력자용 집계 질의 창구
// 구조: 결과 캐시(Arc) 주입 → 분석 계층 순수 함수 위임
// 반환: 포맷 없는 구조화 데이터 (표현은 호출자 책임)
// ==========================================

use std::sync::Arc;

use crate::analytics::{
    self, DatasetSummary, DateRange, InventoryTurnoverReport, LaborCostReport,
    OnTimeDeliveryReport, ProductionEfficiencyReport,
};
use crate::api::error::{ApiError, ApiResult};
use crate::cache::DatasetCache;

// ==========================================
// DashboardApi - 집계 질의 API
// ==========================================
pub struct DashboardApi {
    cache: Arc<DatasetCache>,
}

impl DashboardApi {
    /// 결과 캐시 주입 생성
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self { cache }
    }

    /// 데이터셋 요약 (구간 + 유형별 건수)
    pub fn get_summary(&self) -> ApiResult<DatasetSummary> {
        let dataset = self.cache.get_or_create();
        Ok(analytics::summary(&dataset))
    }

    /// 납기 준수율
    ///
    /// # 인자
    /// - customer_code: 고객사 필터 (None: 전체)
    /// - range: 납품일 구간 필터 (None: 전체)
    pub fn on_time_delivery_rate(
        &self,
        customer_code: Option<&str>,
        range: Option<DateRange>,
    ) -> ApiResult<OnTimeDeliveryReport> {
        if let Some(code) = customer_code {
            validate_code("customer_code", code)?;
        }
        if let Some(range) = range {
            validate_range(&range)?;
        }
        let dataset = self.cache.get_or_create();
        Ok(analytics::on_time_delivery_rate(
            &dataset,
            customer_code,
            range,
        ))
    }

    /// 생산 효율 (달성률/불량률)
    pub fn production_efficiency(
        &self,
        range: Option<DateRange>,
    ) -> ApiResult<ProductionEfficiencyReport> {
        if let Some(range) = range {
            validate_range(&range)?;
        }
        let dataset = self.cache.get_or_create();
        Ok(analytics::production_efficiency(&dataset, range))
    }

    /// 재고 회전율
    pub fn inventory_turnover(
        &self,
        material_code: Option<&str>,
    ) -> ApiResult<InventoryTurnoverReport> {
        if let Some(code) = material_code {
            validate_code("material_code", code)?;
        }
        let dataset = self.cache.get_or_create();
        Ok(analytics::inventory_turnover(&dataset, material_code))
    }

    /// 인건비 집계
    ///
    /// # 인자
    /// - department: 부서 필터 (None: 전체)
    /// - month: 귀속 월 (YYYY-MM, None: 전체)
    pub fn labor_cost(
        &self,
        department: Option<&str>,
        month: Option<&str>,
    ) -> ApiResult<LaborCostReport> {
        if let Some(dept) = department {
            validate_code("department", dept)?;
        }
        if let Some(month) = month {
            validate_month(month)?;
        }
        let dataset = self.cache.get_or_create();
        Ok(analytics::labor_cost(&dataset, department, month))
    }
}

// ==========================================
// 입력 검증 보조
// ==========================================

fn validate_code(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{} 필터는 공백일 수 없음", field)));
    }
    Ok(())
}

fn validate_range(range: &DateRange) -> ApiResult<()> {
    if range.start > range.end {
        return Err(ApiError::InvalidInput(format!(
            "구간 역전: start={}, end={}",
            range.start, range.end
        )));
    }
    Ok(())
}

/// 귀속 월 형식 검증 (YYYY-MM)
fn validate_month(month: &str) -> ApiResult<()> {
    let valid = month
        .split_once('-')
        .and_then(|(year_part, month_part)| {
            if year_part.len() != 4 || month_part.len() != 2 {
                return None;
            }
            let _year: i32 = year_part.parse().ok()?;
            let month_num: u32 = month_part.parse().ok()?;
            (1..=12).contains(&month_num).then_some(())
        })
        .is_some();

    if !valid {
        return Err(ApiError::InvalidInput(format!(
            "귀속 월 형식 오류 (YYYY-MM): {}",
            month
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month() {
        assert!(validate_month("2024-01").is_ok());
        assert!(validate_month("2024-12").is_ok());
        assert!(validate_month("2024-13").is_err());
        assert!(validate_month("2024-1").is_err());
        assert!(validate_month("202401").is_err());
        assert!(validate_month("abcd-ef").is_err());
    }
}
