//! singlish - 싱글리시(로마자 싱할라어) -> 싱할라 문자 변환기
//!
//! 사용법:
//!   singlish [--explain] [--config <path>] [--write-config] [text...]
//!
//! 텍스트 인자가 없으면 표준 입력을 한 줄씩 읽어 변환 결과를 출력합니다.

use clap::Parser;
use singlish::config::{
    config_path, load_config_checked, load_config_from, save_config_to, ConfigError,
    SinglishConfig,
};
use singlish::engine::{Engine, SpanReport};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// 명령행 인자
#[derive(Parser, Debug)]
#[command(name = "singlish", about = "싱글리시 -> 싱할라 문자 변환기")]
struct Args {
    /// 구간별 분류 결과 출력
    #[arg(long)]
    explain: bool,
    /// 설정 파일 경로 (기본: $XDG_CONFIG_HOME/singlish/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
    /// 현재 설정을 설정 파일에 저장
    #[arg(long)]
    write_config: bool,
    /// 변환할 텍스트 (없으면 표준 입력을 한 줄씩 변환)
    text: Vec<String>,
}

/// 설정 로드. 로거 초기화 전이므로 에러는 반환하여 나중에 기록
///
/// `--config`로 지정한 파일은 없어도 에러, 기본 경로는 없으면 조용히 기본값
fn load_settings(args: &Args) -> (SinglishConfig, Option<ConfigError>) {
    match &args.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => (config, None),
            Err(e) => (SinglishConfig::default(), Some(e)),
        },
        None => load_config_checked(),
    }
}

/// 워커 스레드가 처리할 작업 항목
enum WorkItem {
    /// 입력 한 줄 변환
    Translate(String),
}

/// 입력 하나를 변환하여 출력
fn run_once(
    engine: &Engine<'_>,
    input: &str,
    explain: bool,
    budget: Duration,
    out: &mut impl Write,
) -> io::Result<()> {
    let started = Instant::now();
    let result = engine.translate(input);
    let elapsed = started.elapsed();

    if elapsed > budget {
        log::warn!(
            "변환 지연 예산 초과: {:?} > {:?} ({} bytes)",
            elapsed,
            budget,
            input.len()
        );
    }

    writeln!(out, "{}", result.text)?;
    if explain {
        for report in engine.explain(input) {
            writeln!(out, "  {}", format_report(&report))?;
        }
    }
    Ok(())
}

fn format_report(report: &SpanReport) -> String {
    let origin = report.origin.map_or("-", |o| o.as_str());
    format!(
        "[{}..{}] {:<5} {:<9} {:?} -> {:?}",
        report.start,
        report.end,
        report.kind.as_str(),
        origin,
        report.input,
        report.output
    )
}

fn main() {
    let args = Args::parse();
    let (config, config_error) = load_settings(&args);

    // 로깅 초기화 (기본 warn, RUST_LOG 우선)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("설정 로드 실패, 기본값 사용: {}", e);
    }

    if args.write_config {
        let path = args.config.clone().unwrap_or_else(config_path);
        if let Err(e) = save_config_to(&config, &path) {
            log::error!("설정 저장 실패 ({}): {}", path.display(), e);
            std::process::exit(1);
        }
        eprintln!("설정 저장: {}", path.display());
        if args.text.is_empty() {
            return;
        }
    }

    let engine = Engine::builtin();
    let explain = args.explain || config.explain;
    let budget = Duration::from_millis(config.latency_budget_ms);

    if !args.text.is_empty() {
        let input = args.text.join(" ");
        let stdout = io::stdout();
        if let Err(e) = run_once(&engine, &input, explain, budget, &mut stdout.lock()) {
            log::error!("출력 실패: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // 라이브 모드: 입력이 바뀔 때마다(한 줄마다) 전체를 다시 변환
    let (work_tx, work_rx) = mpsc::channel::<WorkItem>();
    let worker = thread::spawn(move || {
        let stdout = io::stdout();
        while let Ok(item) = work_rx.recv() {
            match item {
                WorkItem::Translate(line) => {
                    let mut out = stdout.lock();
                    if let Err(e) = run_once(&engine, &line, explain, budget, &mut out) {
                        log::error!("출력 실패: {}", e);
                        break;
                    }
                    let _ = out.flush();
                }
            }
        }
    });

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if work_tx.send(WorkItem::Translate(line)).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        }
    }
    drop(work_tx);

    if worker.join().is_err() {
        log::error!("변환 워커 스레드 비정상 종료");
    }
}
