//! Static UI string tables.
//!
//! Templates containing `{label}` are filled in with [`fill`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Fr,
    Ja,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Zh, Language::Fr, Language::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Fr => "fr",
            Language::Ja => "ja",
        }
    }

    pub fn index(self) -> usize {
        Language::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
            Language::Fr => &FR,
            Language::Ja => &JA,
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub vote: &'static str,
    pub total_votes: &'static str,
    pub reset: &'static str,
    pub current_results: &'static str,
    pub customize: &'static str,
    pub reset_name: &'static str,
    pub change_color: &'static str,
    pub cast_your_vote: &'static str,
    pub final_results: &'static str,
    pub show_final_results: &'static str,
    pub start_new_vote: &'static str,
    pub wins: &'static str,
    pub tie: &'static str,
    pub language: &'static str,
    pub keys: &'static str,
    pub keys_edit: &'static str,
    pub picker_hint: &'static str,
    pub hex_prompt: &'static str,
    pub invalid_hex: &'static str,
    pub bad_hex: &'static str,
    pub mode_voting: &'static str,
    pub mode_revealed: &'static str,
    pub mode_edit: &'static str,
    pub mode_color: &'static str,
    pub mode_language: &'static str,
}

/// Substitute `{label}` in a template.
pub fn fill(template: &str, label: &str) -> String {
    template.replace("{label}", label)
}

static EN: Strings = Strings {
    title: "Vote Counter",
    vote: "Vote",
    total_votes: "Total Votes:",
    reset: "Reset",
    current_results: "Current Results",
    customize: "Click on the labels above to customize them",
    reset_name: "Reset Name",
    change_color: "Change Color",
    cast_your_vote: "Cast Your Vote",
    final_results: "Final Results",
    show_final_results: "Show Final Results",
    start_new_vote: "Start New Vote",
    wins: "{label} WINS!",
    tie: "IT'S A TIE!",
    language: "Language",
    keys: "←/→ select · Enter vote · r reset · L lang · q quit",
    keys_edit: "e edit name · d undo name · c color",
    picker_hint: "←/→ swatch · type #hex · Enter apply · Esc cancel",
    hex_prompt: "Hex: ",
    invalid_hex: "invalid hex",
    bad_hex: "Not a #rgb or #rrggbb color:",
    mode_voting: "VOTING",
    mode_revealed: "REVEALED",
    mode_edit: "EDIT",
    mode_color: "COLOR",
    mode_language: "LANG",
};

static ZH: Strings = Strings {
    title: "投票计数器",
    vote: "投票",
    total_votes: "总票数:",
    reset: "重置",
    current_results: "当前结果",
    customize: "点击上方标签进行自定义",
    reset_name: "重置名称",
    change_color: "更改颜色",
    cast_your_vote: "请投票",
    final_results: "最终结果",
    show_final_results: "显示最终结果",
    start_new_vote: "开始新投票",
    wins: "{label} 获胜！",
    tie: "平局！",
    language: "语言",
    keys: "←/→ 选择 · Enter 投票 · r 重置 · L 语言 · q 退出",
    keys_edit: "e 编辑名称 · d 还原名称 · c 颜色",
    picker_hint: "←/→ 色板 · 输入 #十六进制 · Enter 应用 · Esc 取消",
    hex_prompt: "十六进制: ",
    invalid_hex: "无效颜色",
    bad_hex: "不是 #rgb 或 #rrggbb 颜色:",
    mode_voting: "投票中",
    mode_revealed: "已揭晓",
    mode_edit: "编辑",
    mode_color: "颜色",
    mode_language: "语言",
};

static FR: Strings = Strings {
    title: "Compteur de Votes",
    vote: "Voter",
    total_votes: "Total des Votes:",
    reset: "Réinitialiser",
    current_results: "Résultats Actuels",
    customize: "Cliquez sur les étiquettes ci-dessus pour les personnaliser",
    reset_name: "Réinitialiser le nom",
    change_color: "Changer la couleur",
    cast_your_vote: "Votez",
    final_results: "Résultats Finaux",
    show_final_results: "Afficher les résultats",
    start_new_vote: "Nouveau vote",
    wins: "{label} GAGNE !",
    tie: "ÉGALITÉ !",
    language: "Langue",
    keys: "←/→ choix · Entrée voter · r réinitialiser · L langue · q quitter",
    keys_edit: "e renommer · d nom initial · c couleur",
    picker_hint: "←/→ nuance · tapez #hex · Entrée appliquer · Échap annuler",
    hex_prompt: "Hex : ",
    invalid_hex: "hex invalide",
    bad_hex: "Couleur #rgb ou #rrggbb invalide :",
    mode_voting: "VOTE",
    mode_revealed: "RÉSULTATS",
    mode_edit: "ÉDITION",
    mode_color: "COULEUR",
    mode_language: "LANGUE",
};

static JA: Strings = Strings {
    title: "投票カウンター",
    vote: "投票",
    total_votes: "総投票数:",
    reset: "リセット",
    current_results: "現在の結果",
    customize: "上のラベルをクリックしてカスタマイズしてください",
    reset_name: "名前をリセット",
    change_color: "色を変更",
    cast_your_vote: "投票してください",
    final_results: "最終結果",
    show_final_results: "最終結果を表示",
    start_new_vote: "新しい投票を開始",
    wins: "{label} の勝ち！",
    tie: "引き分け！",
    language: "言語",
    keys: "←/→ 選択 · Enter 投票 · r リセット · L 言語 · q 終了",
    keys_edit: "e 名前を編集 · d 名前を戻す · c 色",
    picker_hint: "←/→ 色見本 · #16進数を入力 · Enter 適用 · Esc キャンセル",
    hex_prompt: "16進数: ",
    invalid_hex: "無効な色",
    bad_hex: "#rgb または #rrggbb の色ではありません:",
    mode_voting: "投票中",
    mode_revealed: "結果発表",
    mode_edit: "編集",
    mode_color: "色",
    mode_language: "言語",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_strings() {
        for lang in Language::ALL {
            let s = lang.strings();
            for text in [
                s.title,
                s.vote,
                s.total_votes,
                s.reset,
                s.current_results,
                s.customize,
                s.reset_name,
                s.change_color,
                s.cast_your_vote,
                s.final_results,
                s.show_final_results,
                s.start_new_vote,
                s.tie,
                s.language,
                s.keys,
                s.keys_edit,
                s.picker_hint,
                s.hex_prompt,
                s.invalid_hex,
                s.bad_hex,
                s.mode_voting,
                s.mode_revealed,
                s.mode_edit,
                s.mode_color,
                s.mode_language,
            ] {
                assert!(!text.is_empty(), "empty string for {}", lang.code());
            }
            assert!(s.wins.contains("{label}"), "wins template for {}", lang.code());
        }
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill(EN.wins, "FLED"), "FLED WINS!");
        assert_eq!(fill(FR.wins, "Bleu"), "Bleu GAGNE !");
    }

    #[test]
    fn test_language_serde_codes() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let w: Wrapper = toml::from_str("language = \"ja\"").unwrap();
        assert_eq!(w.language, Language::Ja);
        assert_eq!(w.language.code(), "ja");
        assert_eq!(Language::Fr.index(), 2);
    }
}
