// ==========================================
// ERP 데모 데이터 엔진 - 코어 라이브러리
// ==========================================
// 기술 스택: Rust (단일 프로세스, 동기 실행)
// 시스템 정위: 데모용 합성 ERP 거래 생성 + 교차 모듈 추적성/분석
// 데이터 흐름: 기준정보 → 생성기 → 원장 → 분석 → (외부) 표현/챗봇
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 기준정보 계층 - 고정 조회 테이블
pub mod catalog;

// 원장 계층 - 로트/급여/회계
pub mod ledger;

// 생성 엔진 계층 - 시계열 이벤트 워커
pub mod engine;

// 분석 계층 - 추적성/KPI 질의
pub mod analytics;

// 설정 계층 - 생성 파라미터
pub mod config;

// 결과 캐시 - 프로세스 수명 단위 데이터셋 보관
pub mod cache;

// 로그 시스템
pub mod logging;

// API 계층 - 외부 협력자 창구
pub mod api;

// ==========================================
// 핵심 타입 재수출
// ==========================================

// 도메인 타입
pub use domain::types::{AttendanceStatus, LotStatus, QualityStatus, ReferenceType};

// 도메인 엔티티
pub use domain::{
    AccountingEntry, AttendanceRecord, Customer, DeliveryRecord, Employee, InboundRecord, Lot,
    Material, MaterialUsage, PayrollRecord, Product, ProductionRecord, Supplier,
};

// 기준정보
pub use catalog::ReferenceCatalog;

// 원장
pub use ledger::{AccountingLedger, LedgerError, LotLedger, PayrollPolicy};

// 생성 엔진
pub use engine::{EventGenerator, FifoLotSelection, GeneratedDataset, LotSelection};

// 설정
pub use config::{ConfigError, GeneratorConfig};

// 결과 캐시
pub use cache::DatasetCache;

// 분석
pub use analytics::{DatasetSummary, DateRange};

// API
pub use api::{ApiError, ApiResult, DashboardApi, TraceApi};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "ERP 데모 데이터 엔진";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
