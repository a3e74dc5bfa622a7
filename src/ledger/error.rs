// ==========================================
// ERP 데모 엔진 - 원장 계층 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 처리 원칙: 로트 부족은 호출자가 수량 조정 또는 건너뜀으로 국소 처리
// ==========================================

use thiserror::Error;

/// 원장 계층 오류 타입
#[derive(Error, Debug)]
pub enum LedgerError {
    // ===== 로트 원장 오류 =====
    #[error("로트 미존재: lot_number={0}")]
    LotNotFound(String),

    #[error("로트 잔량 부족: lot_number={lot_number}, requested={requested}, remaining={remaining}")]
    InsufficientLot {
        lot_number: String,
        requested: i64,
        remaining: i64,
    },

    #[error("잘못된 소모 수량: {0}")]
    InvalidQuantity(i64),

    // ===== 통용 오류 =====
    #[error("내부 오류: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 타입 별칭
pub type LedgerResult<T> = Result<T, LedgerError>;
