use std::ascii;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::huffman::CodeTable;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        if let Err(message) = init_fallback() {
            eprintln!("{}", message);
        }
    }
}

fn init_fallback() -> Result<(), String> {
    let config =
        fallback_config().ok_or("Failed to build fallback logger configuration".to_string())?;
    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|e| format!("Failed to initialise fallback logger: {}", e))
}

fn fallback_config() -> Option<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .ok()
}

pub fn log_code_table(source: &str, table: &CodeTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let lines: Vec<String> = table
        .entries()
        .iter()
        .map(|entry| {
            let symbol: String = ascii::escape_default(entry.symbol)
                .map(char::from)
                .collect();
            format!("{}:{}", symbol, entry.code)
        })
        .collect();
    log::debug!("code table of {}\n{}", source, lines.join("\n"));
}
