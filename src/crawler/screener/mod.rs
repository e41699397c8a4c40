//! # Screener 個股財報採集器
//!
//! 從 screener.in 的公司頁面抓取財報表格，整理成 JSON。
//!
//! ## 流程
//!
//! - 取得公司頁面 HTML，解析公司名稱與內部 id。
//! - 依 sub-nav 的連結找到各區塊，交由對應的 parser 處理。
//! - 讀取頁面上的成長率小表，並由損益表、季報自行計算成長率。
//! - 有 id 時再抓 commentary，必要時展開各列的明細 (schedule)。

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;
use urlencoding::encode;

use crate::{
    config::{App, Screener},
    util::http::{self, user_agent},
};

/// 公告與公司簡介
pub mod commentary;
/// 公司頁面整體流程
pub mod company;
/// 頁面上的成長率小表
pub mod growth;
/// 展開財報列的明細
pub mod schedule;
/// sub-nav 區塊定位與 parser 對照表
pub mod section;
/// 簡介、優缺點、公告
pub mod summary;
/// 財報表格
pub mod table;

#[cfg(test)]
pub(crate) mod fixture;

pub use company::{visit, CompanyReport};

/// Where the pages come from. The live site in production, canned markup in tests.
#[async_trait]
pub trait ScreenerSource: Sync {
    /// The company page markup.
    async fn company_page(&self, url: &str) -> Result<String>;

    /// The commentary fragment of a company.
    async fn commentary(&self, company_id: &str, referer: &str) -> Result<String>;

    /// The breakdown of one statement row.
    async fn schedule(
        &self,
        company_id: &str,
        parent: &str,
        section: &str,
        consolidated: bool,
    ) -> Result<Value>;
}

/// Which optional requests a visit makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOptions {
    pub commentary: bool,
    pub expand_schedules: bool,
    pub consolidated: bool,
}

impl Default for VisitOptions {
    fn default() -> Self {
        VisitOptions {
            commentary: true,
            expand_schedules: false,
            consolidated: true,
        }
    }
}

impl From<&App> for VisitOptions {
    fn from(app: &App) -> Self {
        VisitOptions {
            commentary: app.screener.commentary,
            expand_schedules: app.screener.expand_schedules,
            consolidated: app.screener.consolidated,
        }
    }
}

/// Talks to screener.in over HTTP.
pub struct HttpSource {
    host: String,
    csrf_token: String,
    session_id: String,
}

impl HttpSource {
    pub fn new(screener: &Screener) -> Self {
        HttpSource {
            host: screener.host.clone(),
            csrf_token: screener.csrf_token.clone(),
            session_id: screener.session_id.clone(),
        }
    }

    pub fn commentary_url(&self, company_id: &str) -> String {
        format!(
            "https://{}/wiki/company/{}/commentary/v2/",
            self.host, company_id
        )
    }

    pub fn schedule_url(
        &self,
        company_id: &str,
        parent: &str,
        section: &str,
        consolidated: bool,
    ) -> String {
        let url = format!(
            "https://{}/api/company/{}/schedules/?parent={}&section={}",
            self.host,
            company_id,
            encode(parent),
            encode(section)
        );

        if consolidated {
            url + "&consolidated="
        } else {
            url
        }
    }

    fn xhr_headers(&self, referer: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(header::REFERER, referer.parse()?);
        Ok(headers)
    }
}

#[async_trait]
impl ScreenerSource for HttpSource {
    async fn company_page(&self, url: &str) -> Result<String> {
        http::get(url, None).await
    }

    async fn commentary(&self, company_id: &str, referer: &str) -> Result<String> {
        let mut headers = self.xhr_headers(referer)?;
        headers.insert(header::USER_AGENT, HeaderValue::from_static(user_agent::MOBILE_CHROME));
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));

        if let Some(cookie) = http::cookie_header(&[
            ("csrftoken", self.csrf_token.as_str()),
            ("sessionid", self.session_id.as_str()),
        ]) {
            headers.insert(header::COOKIE, cookie.parse()?);
        }

        http::get(&self.commentary_url(company_id), Some(headers)).await
    }

    async fn schedule(
        &self,
        company_id: &str,
        parent: &str,
        section: &str,
        consolidated: bool,
    ) -> Result<Value> {
        let referer = format!("https://{}/", self.host);
        let headers = self.xhr_headers(&referer)?;
        let url = self.schedule_url(company_id, parent, section, consolidated);
        http::get_json::<Value>(&url, Some(headers)).await
    }
}
