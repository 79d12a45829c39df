//! English and Japanese strings
//!
//! Bonus-scene flavor pools are fixed per language; `Locale` exposes them to
//! the simulation through `LinePool`.

use serde::{Deserialize, Serialize};

use crate::sim::{Achievement, BonusKind, GamePhase, LinePool, Snapshot};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// The other language (UI toggle)
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        }
    }
}

/// All user-facing text for one language
#[derive(Debug, Serialize)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub start: &'static str,
    pub playing: &'static str,
    pub launch: &'static str,
    pub distance: &'static str,
    pub your_score: &'static str,
    pub best_score: &'static str,
    pub restart: &'static str,
    pub results: &'static str,

    pub wine_title: &'static str,
    pub wine_lines: &'static [&'static str],
    pub sapphire_title: &'static str,
    pub sapphire_lines: &'static [&'static str],
    pub ruby_title: &'static str,
    pub ruby_lines: &'static [&'static str],
    pub golden_title: &'static str,
    pub golden_lines: &'static [&'static str],
    pub diamond_title: &'static str,
    pub diamond_lines: &'static [&'static str],

    pub legendary: &'static str,
    pub amazing: &'static str,
    pub excellent: &'static str,
    pub great: &'static str,
    pub good: &'static str,
}

impl Translations {
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Ja => &JA,
        }
    }

    pub fn scene_title(&self, kind: BonusKind) -> &'static str {
        match kind {
            BonusKind::Wine => self.wine_title,
            BonusKind::Sapphire => self.sapphire_title,
            BonusKind::Ruby => self.ruby_title,
            BonusKind::Golden => self.golden_title,
            BonusKind::Diamond => self.diamond_title,
        }
    }

    pub fn scene_lines(&self, kind: BonusKind) -> &'static [&'static str] {
        match kind {
            BonusKind::Wine => self.wine_lines,
            BonusKind::Sapphire => self.sapphire_lines,
            BonusKind::Ruby => self.ruby_lines,
            BonusKind::Golden => self.golden_lines,
            BonusKind::Diamond => self.diamond_lines,
        }
    }

    pub fn achievement(&self, achievement: Achievement) -> &'static str {
        match achievement {
            Achievement::LegendaryPerfect
            | Achievement::LegendaryElite
            | Achievement::Legendary => self.legendary,
            Achievement::Amazing => self.amazing,
            Achievement::Excellent => self.excellent,
            Achievement::Great => self.great,
            Achievement::Good => self.good,
        }
    }
}

/// Locale provider: the active language's strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn strings(&self) -> &'static Translations {
        Translations::for_language(self.language)
    }
}

/// Result banner as the renderer draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub text: &'static str,
    pub color: &'static str,
}

/// Localized text for one frame: the static UI strings plus whatever the
/// current phase shows (scene title, result banner)
#[derive(Debug, Clone, Serialize)]
pub struct FrameText {
    pub language: Language,
    pub strings: &'static Translations,
    pub scene_title: Option<&'static str>,
    pub banner: Option<Banner>,
}

impl Locale {
    pub fn frame_text(&self, snapshot: &Snapshot) -> FrameText {
        let strings = self.strings();
        let banner = match snapshot.phase {
            GamePhase::Result => snapshot.achievement.map(|a| Banner {
                text: strings.achievement(a),
                color: a.color(),
            }),
            _ => None,
        };
        FrameText {
            language: self.language,
            strings,
            scene_title: snapshot.phase.bonus_kind().map(|kind| strings.scene_title(kind)),
            banner,
        }
    }
}

impl LinePool for Locale {
    fn lines(&self, kind: BonusKind) -> &[&'static str] {
        self.strings().scene_lines(kind)
    }
}

static EN: Translations = Translations {
    title: "Poop Launcher",
    subtitle: "Commence the Sacred Launch ✨",
    start: "Tap to Start!",
    playing: "Playing...",
    launch: "Tap to Launch!",
    distance: "Distance",
    your_score: "Your Score",
    best_score: "Best Score",
    restart: "Tap to Restart",
    results: "🎉 Results 🎉",

    wine_title: "Art Critic Monkey",
    wine_lines: &[
        "Ah, a bold yet directionless flight.",
        "So much effort, so little depth.",
        "The trajectory lacks... sophistication.",
        "Amusing, but hardly transcendent.",
        "One might call this... pedestrian.",
    ],
    sapphire_title: "Sapphire Duo",
    sapphire_lines: &[
        "Hmm... Not entirely without merit, I suppose.",
        "A respectable effort, though hardly extraordinary.",
        "Adequate performance. One might call it... decent.",
        "Well, well... You've managed something passable.",
        "Moderately impressive. The sapphire acknowledges you.",
        "A fair display of skill, though room for improvement remains.",
        "Competent execution. The duo finds this... acceptable.",
    ],
    ruby_title: "Ruby Monkey",
    ruby_lines: &[
        "Impressive! You show real talent!",
        "The ruby recognizes your skill!",
        "Excellent form and precision!",
        "You're approaching mastery!",
        "Magnificent technique displayed!",
    ],
    golden_title: "🌟 Golden Monkey 🌟",
    golden_lines: &[
        "Golden! A flight worthy of legend!",
        "The golden star shines upon you!",
        "So close to the summit... brilliant!",
        "Such radiance! The crowd is speechless!",
        "Pure gold. Only diamonds remain above you.",
    ],
    diamond_title: "💎 DIAMOND EMPEROR MONKEY 💎",
    diamond_lines: &[
        "Magnificent... You have transcended mortal limits.",
        "Behold, the Diamond of Eternal Excellence!",
        "Your mastery shines brighter than the stars themselves.",
        "Witness the birth of a legend!",
        "The cosmos trembles before your supreme skill!",
        "You have achieved the impossible dream!",
        "Divine perfection incarnate!",
    ],

    legendary: "LEGENDARY! You have transcended humanity!",
    amazing: "AMAZING! World-class technique!",
    excellent: "EXCELLENT! Master-level skill!",
    great: "GREAT! Professional-grade performance!",
    good: "GOOD! Almost at 700m!",
};

static JA: Translations = Translations {
    title: "うんこランチャー",
    subtitle: "神聖なる発射を開始せよ ✨",
    start: "タップしてスタート！",
    playing: "プレイ中...",
    launch: "タップして発射！",
    distance: "飛距離",
    your_score: "今回のスコア",
    best_score: "ベストスコア",
    restart: "タップしてリスタート",
    results: "🎉 結果 🎉",

    wine_title: "芸術評論家モンキー",
    wine_lines: &[
        "力強いが…方向性に欠けるね。",
        "努力の割に、浅いね。",
        "軌道に…洗練さが足りない。",
        "面白いが、超越性はないね。",
        "これは…凡庸と言えるかな。",
    ],
    sapphire_title: "サファイアデュオ",
    sapphire_lines: &[
        "うーん…全く価値がないわけではないが。",
        "まずまずの努力だが、特別ではないな。",
        "適切な成果だ。まあまあ…と言えるかな。",
        "ほう、ほう…及第点は取れたようだね。",
        "そこそこ印象的だ。サファイアが認めよう。",
        "まあまあの技術だが、改善の余地はあるな。",
        "有能な実行力だ。デュオはこれを…受け入れよう。",
    ],
    ruby_title: "ルビーモンキー",
    ruby_lines: &[
        "素晴らしい！真の才能を見せているね！",
        "ルビーが君の技術を認めている！",
        "優秀なフォームと精度だ！",
        "マスタリーに近づいているぞ！",
        "見事な技術の披露だ！",
    ],
    golden_title: "🌟 ゴールデンモンキー 🌟",
    golden_lines: &[
        "黄金だ！伝説にふさわしい飛行だ！",
        "黄金の星が君を照らしている！",
        "頂点まであと少し…見事だ！",
        "なんという輝き！観客も言葉を失っている！",
        "純金の一投だ。君の上にはダイヤモンドしかない。",
    ],
    diamond_title: "💎 ダイヤモンド皇帝モンキー 💎",
    diamond_lines: &[
        "壮大だ…君は人間の限界を超越した。",
        "見よ、永遠の卓越のダイヤモンドを！",
        "君の熟練は星々よりも明るく輝いている。",
        "伝説の誕生を目撃せよ！",
        "宇宙が君の至高の技術の前に震えている！",
        "君は不可能な夢を達成した！",
        "神聖なる完璧の化身よ！",
    ],

    legendary: "伝説級！もはや人間を超越しています！",
    amazing: "驚異的！世界レベルの技術です！",
    excellent: "卓越！マスター級の実力です！",
    great: "素晴らしい！プロ級の腕前です！",
    good: "上手い！もう少しで700mです！",
};
