use std::{env, path::PathBuf, str::FromStr};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{cli::Cli, logging};

const CONFIG_PATH: &str = "app.json";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct App {
    pub screener: Screener,
    pub output: Output,
}

const SCREENER_HOST: &str = "SCREENER_HOST";
const SCREENER_CSRF_TOKEN: &str = "SCREENER_CSRF_TOKEN";
const SCREENER_SESSION_ID: &str = "SCREENER_SESSION_ID";
const SCREENER_CONSOLIDATED: &str = "SCREENER_CONSOLIDATED";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Screener {
    pub host: String,
    /// 預設抓合併財報
    pub consolidated: bool,
    /// commentary 端點登入後才有完整內容，留空則不帶 cookie
    pub csrf_token: String,
    pub session_id: String,
    pub commentary: bool,
    pub expand_schedules: bool,
}

impl Default for Screener {
    fn default() -> Self {
        Screener {
            host: "www.screener.in".to_string(),
            consolidated: true,
            csrf_token: String::new(),
            session_id: String::new(),
            commentary: true,
            expand_schedules: false,
        }
    }
}

const OUTPUT_DIR: &str = "OUTPUT_DIR";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Output {
    pub dir: String,
    pub plot: bool,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            dir: ".".to_string(),
            plot: false,
        }
    }
}

pub static SETTINGS: Lazy<App> = Lazy::new(|| match App::get() {
    Ok(app) => app,
    Err(why) => {
        logging::error_console(format!(
            "I can't read the config context because {:?}",
            why
        ));
        App::default().override_with_env()
    }
});

impl App {
    fn get() -> Result<Self> {
        let config_path = config_path();
        if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            return Ok(config.override_with_env());
        }

        Ok(App::default().override_with_env())
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(mut self) -> Self {
        if let Ok(host) = env::var(SCREENER_HOST) {
            self.screener.host = host;
        }

        if let Ok(token) = env::var(SCREENER_CSRF_TOKEN) {
            self.screener.csrf_token = token;
        }

        if let Ok(session_id) = env::var(SCREENER_SESSION_ID) {
            self.screener.session_id = session_id;
        }

        if let Ok(consolidated) = env::var(SCREENER_CONSOLIDATED) {
            self.screener.consolidated =
                bool::from_str(consolidated.trim()).unwrap_or(self.screener.consolidated);
        }

        if let Ok(dir) = env::var(OUTPUT_DIR) {
            self.output.dir = dir;
        }

        self
    }

    /// 命令列參數優先於設定檔
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.output {
            self.output.dir = dir.clone();
        }

        if cli.plot {
            self.output.plot = true;
        }

        if cli.no_commentary {
            self.screener.commentary = false;
        }

        if cli.expand_schedules {
            self.screener.expand_schedules = true;
        }

        if cli.standalone {
            self.screener.consolidated = false;
        }

        self
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}
