use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CounterConfig {
    /// 膝〜足首 / 腰〜膝 の距離比がこれを下回ると「曲がった脚」
    #[serde(default = "default_bent_leg_ratio")]
    pub bent_leg_ratio: f32,
    /// 1フレームあたりの進捗の増減量
    #[serde(default = "default_progress_step")]
    pub progress_step: f32,
}

fn default_bent_leg_ratio() -> f32 { 0.75 }
fn default_progress_step() -> f32 { 0.2 }

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            bent_leg_ratio: default_bent_leg_ratio(),
            progress_step: default_progress_step(),
        }
    }
}

impl CounterConfig {
    /// 1レップが何ステップ分か（progress_stepの逆数を丸めたもの）
    ///
    /// 不正な値（0以下）はデフォルトにフォールバック
    pub fn steps_per_rep(&self) -> u32 {
        let step = if self.progress_step > 0.0 {
            self.progress_step
        } else {
            default_progress_step()
        };
        ((1.0 / step).round() as u32).max(1)
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 読めなければデフォルト設定を返す
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
