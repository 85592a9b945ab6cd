//! 설정 파일 로드/저장 (JSON)
//!
//! 설정은 CLI 동작(로그 레벨, 지연 예산, 구간 출력)만 바꾸며 변환 규칙에는 영향이 없습니다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Singlish 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SinglishConfig {
    /// env_logger 기본 필터 (RUST_LOG가 있으면 그쪽이 우선)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 한 번의 변환이 이 시간(ms)을 넘으면 경고 로그
    #[serde(default = "default_latency_budget_ms")]
    pub latency_budget_ms: u64,
    /// 구간별 분류 결과 출력
    #[serde(default)]
    pub explain: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_latency_budget_ms() -> u64 {
    2000
}

impl Default for SinglishConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            latency_budget_ms: default_latency_budget_ms(),
            explain: false,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/singlish/config.json 또는 ~/.config/singlish/config.json
pub fn config_path() -> PathBuf {
    if let Some(xdg) = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
    {
        return xdg.join("singlish").join("config.json");
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("singlish").join("config.json")
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<SinglishConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// 설정 로드, 실패하면 기본값과 함께 에러 반환
///
/// 파일이 없는 경우는 에러로 보지 않음. 로거 초기화 전에 호출되므로
/// 에러 기록은 호출자가 담당
pub fn load_or_default(path: &Path) -> (SinglishConfig, Option<ConfigError>) {
    match load_config_from(path) {
        Ok(config) => (config, None),
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            (SinglishConfig::default(), None)
        }
        Err(e) => (SinglishConfig::default(), Some(e)),
    }
}

/// 기본 경로의 설정 파일 로드 (`load_or_default` 참고)
pub fn load_config_checked() -> (SinglishConfig, Option<ConfigError>) {
    load_or_default(&config_path())
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &SinglishConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SinglishConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.latency_budget_ms, 2000);
        assert!(!config.explain);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = SinglishConfig {
            log_level: "debug".into(),
            latency_budget_ms: 500,
            explain: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SinglishConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 필드가 없는 경우 기본값 사용
        let json = r#"{"explain": true}"#;
        let config: SinglishConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.latency_budget_ms, 2000);
        assert!(config.explain);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("singlish-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = SinglishConfig {
            latency_budget_ms: 100,
            ..SinglishConfig::default()
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_errors() {
        let missing = std::env::temp_dir().join("singlish-no-such-dir/config.json");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Io(_))));

        let dir = std::env::temp_dir().join(format!("singlish-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("JSON"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_or_default_missing_file_is_silent() {
        let missing = std::env::temp_dir().join("singlish-no-such-dir/config.json");
        let (config, error) = load_or_default(&missing);
        assert_eq!(config, SinglishConfig::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_load_or_default_reports_broken_file() {
        let dir = std::env::temp_dir().join(format!("singlish-broken-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ 1: 2 }").unwrap();

        let (config, error) = load_or_default(&path);
        assert_eq!(config, SinglishConfig::default());
        assert!(matches!(error, Some(ConfigError::Parse(_))));

        fs::write(&path, r#"{"log_level": "debug"}"#).unwrap();
        let (config, error) = load_or_default(&path);
        assert_eq!(config.log_level, "debug");
        assert!(error.is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
