use anyhow::{Context, Result};
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

use lunge_counter::config::Config;
use lunge_counter::counter::LungeCounter;
use lunge_counter::pose::{DetectionResult, Landmark, PoseFrame};

const CONFIG_PATH: &str = "config.toml";

/// 1行 = 1フレーム。[x, y, z] の配列をJSONで記録したもの
/// 空配列は「人物未検出」のフレーム
fn parse_frame(line: &str) -> Result<DetectionResult> {
    let points: Vec<[f32; 3]> = serde_json::from_str(line)?;
    if points.is_empty() {
        return Ok(DetectionResult::empty());
    }
    let landmarks = points
        .iter()
        .map(|p| Landmark::new(p[0], p[1], p[2]))
        .collect();
    Ok(DetectionResult::single(PoseFrame::new(landmarks)))
}

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: lunge-counter <session.jsonl>")?;
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== Lunge Counter - Session Replay ===");
    println!("セッション: {}", path);
    println!(
        "判定設定: bent_leg_ratio={}, progress_step={}",
        config.counter.bent_leg_ratio, config.counter.progress_step
    );
    println!();

    let file = File::open(&path).with_context(|| format!("failed to open {}", path))?;
    let mut counter = LungeCounter::from_config(&config.counter);
    let mut last_feedback = None;

    for (no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let result = parse_frame(line).with_context(|| format!("invalid frame at line {}", no + 1))?;
        let update = counter.process(&result);

        if last_feedback != Some(update.feedback) {
            println!("[{:>4}] {}", no + 1, update.feedback.message());
            last_feedback = Some(update.feedback);
        }
        if let Some(progress) = update.progress {
            println!("[{:>4}] 進捗: {:>3.0}%", no + 1, progress * 100.0);
        }
        if update.rep_completed {
            println!("[{:>4}] レップ完了! 合計: {}", no + 1, counter.rep_count());
        }
    }

    println!();
    println!("合計レップ数: {}", counter.rep_count());
    Ok(())
}
