//! 조건 → 물성 중요도 조회, 비교, 참고 자료 로직을 라이브러리로 분리하여
//! CLI와 GUI가 같은 코드를 쓰게 한다.

pub mod app;
pub mod comparison;
pub mod condition;
pub mod config;
pub mod documents;
pub mod i18n;
pub mod importance;
pub mod library;
pub mod radar;
pub mod telemetry;
pub mod ui_cli;
