use super::landmark::{Landmark, LandmarkIndex, Side};

/// 1人分の検出姿勢（1フレーム）
///
/// ランドマークは `LandmarkIndex` の慣例で並ぶが、上流によっては
/// 33個未満に切り詰められることがあるため全アクセスは境界チェック付き
#[derive(Debug, Clone, Default)]
pub struct PoseFrame {
    pub landmarks: Vec<Landmark>,
}

impl PoseFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// インデックスでランドマークを取得
    pub fn get(&self, index: LandmarkIndex) -> Option<&Landmark> {
        self.landmarks.get(index as usize)
    }

    /// 左右の腰
    pub fn hip(&self, side: Side) -> Option<&Landmark> {
        self.get(LandmarkIndex::hip(side))
    }

    /// 左右の膝
    pub fn knee(&self, side: Side) -> Option<&Landmark> {
        self.get(LandmarkIndex::knee(side))
    }

    /// 左右の足首
    pub fn ankle(&self, side: Side) -> Option<&Landmark> {
        self.get(LandmarkIndex::ankle(side))
    }
}

/// 外部パイプラインの1フレーム分の出力
///
/// 検出人数は0または1以上。複数人が写っていても最初の1人のみを扱う
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    pub poses: Vec<PoseFrame>,
}

impl DetectionResult {
    /// 検出なしのフレーム
    pub fn empty() -> Self {
        Self { poses: Vec::new() }
    }

    /// 1人分の検出結果からフレームを作成
    pub fn single(pose: PoseFrame) -> Self {
        Self { poses: vec![pose] }
    }

    /// 最初に検出された姿勢
    pub fn first(&self) -> Option<&PoseFrame> {
        self.poses.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_frame_get() {
        let mut landmarks = vec![Landmark::default(); LandmarkIndex::COUNT];
        landmarks[LandmarkIndex::LeftKnee as usize] = Landmark::new(0.4, 0.6, 0.1);

        let frame = PoseFrame::new(landmarks);
        let knee = frame.knee(Side::Left).unwrap();
        assert_eq!(knee.x, 0.4);
        assert_eq!(knee.y, 0.6);
        assert_eq!(knee.z, 0.1);
    }

    #[test]
    fn test_pose_frame_truncated() {
        // 腰(23)まで届かない短いフレーム
        let frame = PoseFrame::new(vec![Landmark::new(0.5, 0.5, 0.0); 20]);
        assert!(frame.get(LandmarkIndex::Nose).is_some());
        assert!(frame.hip(Side::Left).is_none());
        assert!(frame.ankle(Side::Right).is_none());
    }

    #[test]
    fn test_detection_result_first() {
        assert!(DetectionResult::empty().first().is_none());

        let frame = PoseFrame::new(vec![Landmark::new(0.1, 0.2, 0.3)]);
        let result = DetectionResult::single(frame);
        assert_eq!(result.first().unwrap().landmarks.len(), 1);
    }
}
