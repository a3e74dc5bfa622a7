// ==========================================
// ERP 데모 엔진 - 도메인 오류 타입
// ==========================================
// 용도: 검증 생성자의 불변식 위반 보고
// 도구: thiserror 파생 매크로
// ==========================================

use thiserror::Error;

/// 도메인 계층 오류 타입
#[derive(Error, Debug)]
pub enum DomainError {
    // ===== 수량 불변식 =====
    #[error("수량 불변식 위반: {0}")]
    QuantityInvariant(String),

    #[error("불량 수량 범위 위반: defect={defect}, actual={actual}, planned={planned}")]
    DefectBoundViolation {
        defect: i64,
        actual: i64,
        planned: i64,
    },

    // ===== 시간 불변식 =====
    #[error("시각 순서 위반: start={start}, end={end}")]
    TimeOrderViolation { start: String, end: String },

    // ===== 필드 값 오류 =====
    #[error("필드 값 오류 (field={field}): {message}")]
    FieldValueError { field: String, message: String },
}

/// Result 타입 별칭
pub type DomainResult<T> = Result<T, DomainError>;
