//! core::titles
//!
//! Rank titles awarded by total byte count.
//!
//! The tier table is fixed, ascending by threshold, and starts at zero so
//! every byte total resolves to a title.

use super::types::Lang;

/// One rank tier: the minimum bytes and its title in each language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleTier {
    /// Minimum total bytes for this title
    pub threshold: u64,
    pub title_ja: &'static str,
    pub title_en: &'static str,
}

impl TitleTier {
    /// Title in the given display language.
    pub fn title(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ja => self.title_ja,
            Lang::En => self.title_en,
        }
    }
}

/// All rank tiers, lowest first.
pub static TITLE_TIERS: [TitleTier; 10] = [
    TitleTier {
        threshold: 0,
        title_ja: "Hello Worldの住人",
        title_en: "Hello World Habitants",
    },
    TitleTier {
        threshold: 10_000,
        title_ja: "駆け出しコーダー",
        title_en: "Aspiring Developer",
    },
    TitleTier {
        threshold: 50_000,
        title_ja: "写経をする者",
        title_en: "Code Follower",
    },
    TitleTier {
        threshold: 100_000,
        title_ja: "不具合を狩る者",
        title_en: "Bug Hunter",
    },
    TitleTier {
        threshold: 250_000,
        title_ja: "ロジックの構築師",
        title_en: "Logic Architect",
    },
    TitleTier {
        threshold: 500_000,
        title_ja: "コードの設計士",
        title_en: "Code Designer",
    },
    TitleTier {
        threshold: 1_000_000,
        title_ja: "フレームワークの覇者",
        title_en: "Framework Master",
    },
    TitleTier {
        threshold: 2_500_000,
        title_ja: "伝説のデプロイヤー",
        title_en: "Legendary Deployer",
    },
    TitleTier {
        threshold: 5_000_000,
        title_ja: "システムの賢者",
        title_en: "System Sage",
    },
    TitleTier {
        threshold: 10_000_000,
        title_ja: "バイナリの神",
        title_en: "Binary God",
    },
];

/// Highest tier whose threshold is at or below `bytes`.
pub fn tier_for(bytes: u64) -> &'static TitleTier {
    TITLE_TIERS
        .iter()
        .rev()
        .find(|tier| bytes >= tier.threshold)
        .unwrap_or(&TITLE_TIERS[0])
}

/// Rank title for `bytes` in the given display language.
pub fn title_for(bytes: u64, lang: Lang) -> &'static str {
    tier_for(bytes).title(lang)
}
