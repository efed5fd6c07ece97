// src/components/game_state.rs

// serde を使う宣言！状態を JSON にして JS 側に見せる時に使うよ！
use serde::{Serialize, Deserialize};

/// ラウンドの進行状態を表す列挙型だよ！
///
/// 正解すると少し待ってから次のラウンドが配られるんだけど、
/// その「待ち時間」の間は入力を受け付けないようにするための目印になる。⏳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// プレイヤーが式を考えている (提出もパスもできる)
    #[default]
    Playing,
    /// 正解した！次のラウンドが配られるのを待っている
    AwaitingNextRound,
}

impl RoundPhase {
    pub fn accepts_input(&self) -> bool {
        matches!(self, RoundPhase::Playing)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_phase_accepts_input_only_while_playing() {
        assert_eq!(RoundPhase::default(), RoundPhase::Playing);
        assert!(RoundPhase::Playing.accepts_input());
        assert!(!RoundPhase::AwaitingNextRound.accepts_input());
        println!("RoundPhase のテスト、成功！🎉");
    }

    #[test]
    fn round_phase_serializes_by_name() {
        let json = serde_json::to_string(&RoundPhase::AwaitingNextRound).expect("シリアライズできるはず");
        assert_eq!(json, "\"AwaitingNextRound\"");
    }
}
