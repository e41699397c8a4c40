use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// 公司頁面上 sub-nav 可導覽到的區塊
#[derive(PartialEq, Eq, Debug, Copy, Clone, AsRefStr, EnumIter)]
pub enum SectionKind {
    /// 公司簡介、重點與主要比率 (#top)
    Summary,
    /// 股價走勢圖，由前端繪製，沒有可解析的內容
    Chart,
    /// 優缺點 (#analysis)
    Analysis,
    /// 同業比較 (#peers)
    Peers,
    /// 季報 (#quarters)
    Quarters,
    /// 損益表 (#profit-loss)
    ProfitLoss,
    /// 資產負債表 (#balance-sheet)
    BalanceSheet,
    /// 現金流量表 (#cash-flow)
    CashFlow,
    /// 財務比率 (#ratios)
    Ratios,
    /// 股權結構 (#shareholding)
    Shareholding,
    /// 公告與年報 (#documents)
    Documents,
}

impl SectionKind {
    /// Section ids and nav labels the site uses for this kind.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Summary => &["top", "Summary"],
            SectionKind::Chart => &["chart", "Chart"],
            SectionKind::Analysis => &["analysis", "Analysis"],
            SectionKind::Peers => &["peers", "Peers"],
            SectionKind::Quarters => &["quarters", "Quarters"],
            SectionKind::ProfitLoss => &["profit-loss", "Profit & Loss"],
            SectionKind::BalanceSheet => &["balance-sheet", "Balance Sheet"],
            SectionKind::CashFlow => &["cash-flow", "Cash Flow"],
            SectionKind::Ratios => &["ratios", "Ratios"],
            SectionKind::Shareholding => &["shareholding", "investors", "Investors"],
            SectionKind::Documents => &["documents", "Documents"],
        }
    }

    /// Resolves a nav label or a section id. Matching is exact, the site's casing matters.
    pub fn lookup(key: &str) -> Option<SectionKind> {
        SectionKind::iter().find(|kind| kind.aliases().contains(&key))
    }

    /// The chart is drawn client side; everything else has a parser.
    pub fn has_parser(&self) -> bool {
        !matches!(self, SectionKind::Chart)
    }

    /// Key the statement table is stored under in the report.
    pub fn statement_key(&self) -> Option<&'static str> {
        match self {
            SectionKind::Quarters => Some("quarterly_results"),
            SectionKind::ProfitLoss => Some("profit_loss"),
            SectionKind::BalanceSheet => Some("balance_sheet"),
            SectionKind::CashFlow => Some("cash_flow"),
            SectionKind::Ratios => Some("ratios"),
            SectionKind::Shareholding => Some("shareholding"),
            _ => None,
        }
    }
}
