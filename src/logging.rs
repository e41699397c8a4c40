use chrono::{format::DelayedFormat, Local};
use crossbeam_channel::{unbounded, Sender};
use once_cell::sync::Lazy;
use std::{
    fmt::Write as _,
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
};
use strum::{AsRefStr, Display};

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("screener"));

/// 單次寫檔前最多累積的字元數
const BATCH_SIZE: usize = 2048;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

pub struct Logger {
    info_writer: Sender<String>,
    warn_writer: Sender<String>,
    error_writer: Sender<String>,
    debug_writer: Sender<String>,
}

impl Logger {
    fn new(log_name: &str) -> Self {
        Logger {
            info_writer: Self::create_writer(log_name, Level::Info),
            warn_writer: Self::create_writer(log_name, Level::Warn),
            error_writer: Self::create_writer(log_name, Level::Error),
            debug_writer: Self::create_writer(log_name, Level::Debug),
        }
    }

    fn log(&self, level: Level, msg: String) {
        let writer = match level {
            Level::Info => &self.info_writer,
            Level::Warn => &self.warn_writer,
            Level::Error => &self.error_writer,
            Level::Debug => &self.debug_writer,
        };

        if let Err(why) = writer.send(msg) {
            error_console(why.to_string());
        }
    }

    fn create_writer(log_name: &str, level: Level) -> Sender<String> {
        let (tx, rx) = unbounded::<String>();
        let log_path = match Self::get_log_path(log_name, level) {
            Some(path) => path,
            None => {
                error_console("Failed to create log directory.".to_string());
                // 沒有目錄可寫時改輸出到 console
                thread::spawn(move || {
                    for received in &rx {
                        info_console(received);
                    }
                });
                return tx;
            }
        };

        // 寫入檔案的操作使用另一個線程處理
        thread::spawn(move || {
            let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
                Ok(file) => file,
                Err(why) => {
                    error_console(format!(
                        "Failed to open log file {} because {:?}",
                        log_path.display(),
                        why
                    ));
                    return;
                }
            };

            let mut writer = BufWriter::new(file);
            let mut line = String::with_capacity(BATCH_SIZE);

            for received in &rx {
                if writeln!(&mut line, "{} {}", Local::now().format("%F %X%.6f"), received)
                    .is_err()
                {
                    continue;
                }

                if rx.is_empty() || line.len() >= BATCH_SIZE {
                    if let Err(why) = writer.write_all(line.as_bytes()) {
                        error_console(format!(
                            "Failed to write to log file. because:{:#?}\r\nmsg:{}",
                            why, line
                        ));
                    }

                    if let Err(why) = writer.flush() {
                        error_console(format!("Failed to flush log file. because:{:#?}", why));
                    }

                    line.clear();
                }
            }
        });

        tx
    }

    fn get_log_path(name: &str, level: Level) -> Option<PathBuf> {
        let path = Path::new("log");

        if !path.exists() {
            fs::create_dir_all(path).ok()?;
        }

        let mut log_path = PathBuf::from(path);
        log_path.push(format!(
            "{}_{}_{}.log",
            Local::now().format("%Y-%m-%d"),
            name,
            level
        ));

        Some(log_path)
    }
}

pub fn info_file_async(log: String) {
    LOGGER.log(Level::Info, log);
}

pub fn warn_file_async(log: String) {
    LOGGER.log(Level::Warn, log);
}

pub fn error_file_async(log: String) {
    LOGGER.log(Level::Error, log);
}

pub fn debug_file_async(log: String) {
    LOGGER.log(Level::Debug, log);
}

pub fn info_console(log: String) {
    println!(
        "{} Info {}",
        Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        log
    );
}

pub fn error_console(log: String) {
    eprintln!(
        "{} Error {}",
        DelayedFormat::to_string(&Local::now().format("%Y-%m-%d %H:%M:%S.%3f")),
        log
    );
}
