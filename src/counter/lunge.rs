use crate::config::CounterConfig;
use crate::geometry;
use crate::pose::{DetectionResult, Landmark, PoseFrame, Side};

/// フレームごとのフィードバック種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// 人物が検出されていない
    NoPerson,
    /// 必要なランドマーク（腰・膝・足首）が欠けている
    MissingLandmarks,
    /// 判定中
    Assessing,
}

impl Feedback {
    /// UI向けの固定メッセージ
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::NoPerson => "Person not detected!",
            Feedback::MissingLandmarks => "Required body positions not detected.",
            Feedback::Assessing => "Assessing activity",
        }
    }
}

/// 1フレーム処理の通知内容
///
/// フィールド順は通知順（フィードバック → 進捗 → レップ完了）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub feedback: Feedback,
    /// 進捗が変化したフレームのみ Some(新しい値)
    pub progress: Option<f32>,
    /// このフレームでレップが完了したか
    pub rep_completed: bool,
}

impl FrameUpdate {
    fn feedback_only(feedback: Feedback) -> Self {
        Self {
            feedback,
            progress: None,
            rep_completed: false,
        }
    }
}

/// ランジのレップカウンタ
///
/// 1フレームずつ `process` に渡すと、片脚のみ曲がった姿勢（ランジ）の間は
/// 進捗を進め、姿勢が解けると進捗を戻す。進捗が0に戻った時点で1レップ完了。
///
/// 進捗は内部では整数ステップ位置で保持する。f32の累積加算では0.0に
/// 正確に戻らないことがあり、完了判定がそれに依存するため
pub struct LungeCounter {
    bent_leg_ratio: f32,
    progress_step: f32,
    steps_per_rep: u32,
    /// 現在のステップ位置 (0..=steps_per_rep)
    position: u32,
    in_progress: bool,
    rep_completed: bool,
    rep_count: u32,
}

impl LungeCounter {
    pub fn new() -> Self {
        Self::from_config(&CounterConfig::default())
    }

    /// 設定から作成
    pub fn from_config(config: &CounterConfig) -> Self {
        Self {
            bent_leg_ratio: config.bent_leg_ratio,
            progress_step: config.progress_step,
            steps_per_rep: config.steps_per_rep(),
            position: 0,
            in_progress: false,
            rep_completed: false,
            rep_count: 0,
        }
    }

    /// 現在の進捗 (0.0〜1.0)
    pub fn progress(&self) -> f32 {
        (self.position as f32 * self.progress_step).min(1.0)
    }

    /// 完了したレップ数
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// レップが進行中か
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// 直前のフレームでレップが完了したか
    pub fn rep_completed(&self) -> bool {
        self.rep_completed
    }

    /// 初期状態に戻す
    pub fn reset(&mut self) {
        self.position = 0;
        self.in_progress = false;
        self.rep_completed = false;
        self.rep_count = 0;
    }

    /// 片脚分の腰・膝・足首
    fn leg(pose: &PoseFrame, side: Side) -> Option<[&Landmark; 3]> {
        Some([pose.hip(side)?, pose.knee(side)?, pose.ankle(side)?])
    }

    /// 1フレーム分の検出結果を処理
    pub fn process(&mut self, result: &DetectionResult) -> FrameUpdate {
        let pose = match result.first() {
            Some(pose) => pose,
            None => return FrameUpdate::feedback_only(Feedback::NoPerson),
        };

        let (left, right) = match (Self::leg(pose, Side::Left), Self::leg(pose, Side::Right)) {
            (Some(left), Some(right)) => (left, right),
            _ => return FrameUpdate::feedback_only(Feedback::MissingLandmarks),
        };

        if !geometry::are_landmarks_valid(left.iter().chain(right.iter()).copied()) {
            return FrameUpdate::feedback_only(Feedback::MissingLandmarks);
        }

        let left_bent = geometry::is_leg_bent(left[0], left[1], left[2], self.bent_leg_ratio);
        let right_bent = geometry::is_leg_bent(right[0], right[1], right[2], self.bent_leg_ratio);
        // ランジ = 片脚だけ曲がっている（前脚が曲がり後脚が伸びた姿勢）
        let is_lunge = left_bent != right_bent;

        let mut update = FrameUpdate::feedback_only(Feedback::Assessing);

        if is_lunge {
            if !self.in_progress {
                self.in_progress = true;
                self.rep_completed = false;
            }
            if self.position < self.steps_per_rep {
                self.position += 1;
                update.progress = Some(self.progress());
            }
        } else if self.in_progress && self.position > 0 {
            self.position -= 1;
            update.progress = Some(self.progress());
            if self.position == 0 {
                // 進捗が0に戻った = 1レップ完了
                self.in_progress = false;
                self.rep_completed = true;
                self.rep_count += 1;
                update.rep_completed = true;
            }
        }

        update
    }
}

impl Default for LungeCounter {
    fn default() -> Self {
        Self::new()
    }
}
