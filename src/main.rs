// ==========================================
// ERP 데모 데이터 엔진 - 데모 실행 진입점
// ==========================================
// 용도: 결과 캐시를 적재하고 데이터셋 요약을 JSON으로 출력
// 외부 표면은 이 진입점이 전부 - 질의는 전부 프로세스 내 API 경유
// ==========================================

use std::sync::Arc;

use erp_demo_engine::{logging, DashboardApi, DatasetCache};

fn main() -> anyhow::Result<()> {
    // 로그 시스템 초기화
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", erp_demo_engine::APP_NAME);
    tracing::info!("시스템 버전: {}", erp_demo_engine::VERSION);
    tracing::info!("==================================================");

    // 결과 캐시 구성 (프로세스 수명 동안 1회 생성)
    let cache = Arc::new(DatasetCache::new());
    let dashboard = DashboardApi::new(cache);

    let summary = dashboard.get_summary()?;
    tracing::info!(period = %summary.period, total = summary.counts.total(), "데이터셋 적재 완료");

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
