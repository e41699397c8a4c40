/// Screener.in 個股頁面
pub mod screener;
