// ==========================================
// ERP 데모 엔진 - API 계층 오류 타입
// ==========================================
// 책임: 외부 협력자(화면/챗봇)에 전달되는 오류 정의
// 원칙: 부재 ID만 NotFound - 집계 계층의 빈 결과는 오류가 아님
// ==========================================

use thiserror::Error;

/// API 계층 오류 타입
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    #[error("자원 미존재: {0}")]
    NotFound(String),

    #[error("내부 오류: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
