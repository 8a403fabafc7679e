//! ランドマーク幾何ユーティリティ
//!
//! 全て純関数。失敗経路なし

use crate::pose::Landmark;

/// 2ランドマーク間の3Dユークリッド距離
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// 脚が曲がっているか
///
/// 膝〜足首の距離が腰〜膝の距離 × ratio を下回れば「曲がっている」。
/// 関節角度の計算ではなく距離比による粗い近似で、視線角や短縮の影響を
/// 受けるのは既知のトレードオフ
pub fn is_leg_bent(hip: &Landmark, knee: &Landmark, ankle: &Landmark, ratio: f32) -> bool {
    let hip_to_knee = distance(hip, knee);
    let knee_to_ankle = distance(knee, ankle);
    knee_to_ankle < hip_to_knee * ratio
}

/// 全ランドマークが検出済みか
pub fn are_landmarks_valid<'a>(landmarks: impl IntoIterator<Item = &'a Landmark>) -> bool {
    landmarks.into_iter().all(|lm| lm.is_detected())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATIO: f32 = 0.75;

    fn approx_eq_f32(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_distance_axis_aligned() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.3, 0.0, 0.0);
        assert!(approx_eq_f32(distance(&a, &b), 0.3, 1e-6));
    }

    #[test]
    fn test_distance_3d() {
        let a = Landmark::new(1.0, 2.0, 3.0);
        let b = Landmark::new(2.0, 4.0, 5.0);
        // sqrt(1 + 4 + 4) = 3
        assert!(approx_eq_f32(distance(&a, &b), 3.0, 1e-6));
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Landmark::new(0.2, 0.7, -0.1);
        let b = Landmark::new(0.6, 0.3, 0.2);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_straight_leg_not_bent() {
        // 腰・膝・足首が等間隔で一直線
        let hip = Landmark::new(0.5, 0.4, 0.0);
        let knee = Landmark::new(0.5, 0.6, 0.0);
        let ankle = Landmark::new(0.5, 0.8, 0.0);
        assert!(!is_leg_bent(&hip, &knee, &ankle, RATIO));
    }

    #[test]
    fn test_bent_leg_detected() {
        // 足首が膝の近くに引き寄せられている
        let hip = Landmark::new(0.5, 0.4, 0.0);
        let knee = Landmark::new(0.5, 0.6, 0.0);
        let ankle = Landmark::new(0.5, 0.65, 0.0);
        assert!(is_leg_bent(&hip, &knee, &ankle, RATIO));
    }

    #[test]
    fn test_is_leg_bent_translation_invariant() {
        let hip = Landmark::new(0.5, 0.4, 0.0);
        let knee = Landmark::new(0.5, 0.6, 0.0);
        let ankle = Landmark::new(0.5, 0.65, 0.0);

        let shift = |lm: &Landmark| Landmark::new(lm.x + 0.17, lm.y - 0.23, lm.z + 0.4);
        assert_eq!(
            is_leg_bent(&hip, &knee, &ankle, RATIO),
            is_leg_bent(&shift(&hip), &shift(&knee), &shift(&ankle), RATIO)
        );
    }

    #[test]
    fn test_is_leg_bent_not_scale_invariant() {
        // 太腿がY方向、脛がX方向の脚。Xだけ潰すと脛が相対的に縮み判定が反転する
        let hip = Landmark::new(0.5, 0.2, 0.0);
        let knee = Landmark::new(0.5, 0.5, 0.0);
        let ankle = Landmark::new(0.78, 0.5, 0.0);
        assert!(!is_leg_bent(&hip, &knee, &ankle, RATIO));

        let squash = |lm: &Landmark| Landmark::new(lm.x * 0.2, lm.y, lm.z);
        assert!(is_leg_bent(&squash(&hip), &squash(&knee), &squash(&ankle), RATIO));
    }

    #[test]
    fn test_are_landmarks_valid() {
        let valid = [
            Landmark::new(0.5, 0.5, 0.0),
            Landmark::new(0.0, 0.1, 0.0),
        ];
        assert!(are_landmarks_valid(valid.iter()));

        let with_sentinel = [
            Landmark::new(0.5, 0.5, 0.0),
            Landmark::new(0.0, 0.0, 0.0),
        ];
        assert!(!are_landmarks_valid(with_sentinel.iter()));
    }

    #[test]
    fn test_are_landmarks_valid_empty() {
        let none: [Landmark; 0] = [];
        assert!(are_landmarks_valid(none.iter()));
    }
}
