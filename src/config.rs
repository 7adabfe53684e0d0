//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::sentiment::Language;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "GAMJEONG_CONFIG";

/// 감정 분석 CLI 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GamjeongConfig {
    /// `--lang`을 주지 않았을 때 쓰는 언어
    #[serde(default = "default_language")]
    pub default_language: Language,
    /// JSON 출력 들여쓰기
    #[serde(default)]
    pub pretty: bool,
    /// 한 번에 분류할 최대 텍스트 수
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,
}

fn default_language() -> Language {
    Language::Korean
}

fn default_batch_limit() -> usize {
    100
}

impl Default for GamjeongConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            pretty: false,
            batch_limit: default_batch_limit(),
        }
    }
}

/// 설정 저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일/디렉토리 쓰기 실패
    IoError(std::io::Error),
    /// JSON 직렬화 실패
    SerializeError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 쓰기 오류: {}", e),
            ConfigError::SerializeError(e) => write!(f, "설정 직렬화 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::SerializeError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

/// 설정 파일 경로: $GAMJEONG_CONFIG 또는 ~/.config/gamjeong/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("gamjeong").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> GamjeongConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(e) => {
            log::debug!("설정 파일 없음 ({}): {}", path.display(), e);
            GamjeongConfig::default()
        }
    }
}

fn parse_config(content: &str) -> GamjeongConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
        GamjeongConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(config: &GamjeongConfig) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json)?;
    Ok(())
}
