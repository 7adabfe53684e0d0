//! gamjeong - 한국어/영어 어휘 기반 감정 분석 CLI

use gamjeong::config::{config_path, load_config, save_config, GamjeongConfig};
use gamjeong::report::analyze_batch;
use gamjeong::{Language, SentimentClassifier};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const USAGE: &str = "사용법: gamjeong [--lang ko|en] [--pretty] [--save-config] [TEXT...]\n\
                     TEXT가 없으면 표준 입력에서 한 줄에 하나씩 읽습니다.\n\
                     --save-config: 현재 언어/출력 설정을 설정 파일에 저장";

/// 명령행 옵션
struct Args {
    language: Option<Language>,
    pretty: bool,
    save_config: bool,
    texts: Vec<String>,
}

impl Args {
    /// 설정 파일 값에 명령행 옵션을 덮어쓴 실제 설정
    fn effective_config(&self, config: &GamjeongConfig) -> GamjeongConfig {
        GamjeongConfig {
            default_language: self.language.unwrap_or(config.default_language),
            pretty: self.pretty || config.pretty,
            batch_limit: config.batch_limit,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>, String> {
    let mut parsed = Args {
        language: None,
        pretty: false,
        save_config: false,
        texts: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-l" | "--lang" => {
                let tag = args.next().ok_or("--lang 뒤에 언어 태그가 필요합니다")?;
                parsed.language = Some(Language::from_tag(&tag));
            }
            "--pretty" => parsed.pretty = true,
            "--save-config" => parsed.save_config = true,
            "--" => {
                parsed.texts.extend(args.by_ref());
            }
            _ => parsed.texts.push(arg),
        }
    }

    Ok(Some(parsed))
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    // 설정 로드
    let config = args.effective_config(&load_config());

    if args.save_config {
        if let Err(e) = save_config(&config) {
            log::error!("설정 저장 실패: {}", e);
            return ExitCode::FAILURE;
        }
        eprintln!("설정 저장: {}", config_path().display());
        if args.texts.is_empty() {
            return ExitCode::SUCCESS;
        }
    }

    let texts = if args.texts.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                log::error!("표준 입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.texts
    };

    if texts.iter().all(|t| t.trim().is_empty()) {
        eprintln!("분석할 텍스트를 입력해주세요.");
        return ExitCode::from(2);
    }

    let classifier = SentimentClassifier::new();
    let report = analyze_batch(&classifier, &texts, config.default_language, config.batch_limit);
    if report.processed < report.total_items {
        log::warn!(
            "{}건 중 {}건만 분석했습니다 (batch_limit={})",
            report.total_items,
            report.processed,
            config.batch_limit
        );
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };

    match json {
        Ok(json) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", json) {
                log::error!("출력 실패: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("결과 직렬화 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}
