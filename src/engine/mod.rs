// ==========================================
// ERP 데모 엔진 - 생성 엔진 계층
// ==========================================
// 구성: 시계열 워커 + 난수 소스 + 로트 선정 전략 + 결과 컨테이너
// ==========================================

pub mod dataset;
pub mod generator;
pub mod lot_selection;
pub mod rng;

// 재수출: 핵심 타입
pub use dataset::GeneratedDataset;
pub use generator::EventGenerator;
pub use lot_selection::{FifoLotSelection, LotDraw, LotSelection};
pub use rng::Prng;
