// Builtin category table and forbidden-word set.

use mailseed_core::{Category, Lexicon};

/// Suffixes that must never be synthesized: reserved mail local-parts and
/// strings we do not want to hand out in an address, matched
/// case-insensitively. Pool words are not checked against this set.
const FORBIDDEN_WORDS: &[&str] = &[
    "abuse", "admin", "daemon", "fake", "hate", "homo", "kaka", "kill", "mailer", "nazi", "pedo",
    "porn", "root", "scam", "sexo", "spam",
];

struct CategoryDef {
    id: &'static str,
    name: &'static str,
    emoji: &'static str,
    words: &'static [&'static str],
}

const CATEGORY_DEFS: &[CategoryDef] = &[
    CategoryDef {
        id: "shopping",
        name: "Shopping",
        emoji: "\u{1F6D2}",
        words: &[
            "cart", "deal", "shop", "store", "order", "buy", "sale", "mall", "gift", "brand",
            "price", "market", "trade", "stock", "item", "goods", "retail", "offer", "promo",
            "value", "bargain", "haul", "wish", "basket", "coupon", "refund", "pack", "trend",
            "style", "pick",
        ],
    },
    CategoryDef {
        id: "social",
        name: "Social",
        emoji: "\u{1F4AC}",
        words: &[
            "chat", "feed", "post", "like", "share", "link", "group", "friend", "follow", "ping",
            "buzz", "wave", "meet", "club", "loop", "vibe", "crowd", "tribe", "circle", "spark",
            "bond", "sync", "voice", "story", "react", "emoji", "trend", "meme", "snap", "tag",
        ],
    },
    CategoryDef {
        id: "finance",
        name: "Finance",
        emoji: "\u{1F4B0}",
        words: &[
            "bank", "cash", "coin", "fund", "loan", "pay", "bill", "tax", "save", "earn", "gain",
            "asset", "rate", "debt", "credit", "stock", "bond", "trade", "yield", "profit",
            "ledger", "vault", "wallet", "check", "swift", "wire", "audit", "budget", "mint",
            "gold",
        ],
    },
    CategoryDef {
        id: "gaming",
        name: "Gaming",
        emoji: "\u{1F3AE}",
        words: &[
            "game", "play", "quest", "hero", "level", "boss", "raid", "loot", "arena", "guild",
            "team", "score", "combo", "skill", "rank", "pixel", "sword", "shield", "craft",
            "spawn", "buff", "mod", "steam", "retro", "epic", "tower", "dungeon", "rogue", "mage",
            "dash",
        ],
    },
    CategoryDef {
        id: "dev",
        name: "Dev",
        emoji: "\u{1F4BB}",
        words: &[
            "code", "git", "bug", "api", "node", "app", "data", "dev", "test", "log", "push",
            "pull", "hack", "bit", "byte", "stack", "rust", "docker", "cloud", "build", "deploy",
            "debug", "linux", "shell", "script", "merge", "branch", "func", "type", "loop",
        ],
    },
    CategoryDef {
        id: "newsletter",
        name: "Newsletter",
        emoji: "\u{1F4F0}",
        words: &[
            "news", "read", "daily", "weekly", "digest", "brief", "pulse", "alert", "report",
            "update", "press", "media", "blog", "article", "post", "review", "guide", "tip",
            "insight", "trend", "recap", "flash", "morning", "evening", "headline", "scoop",
            "draft", "issue", "topic", "note",
        ],
    },
    // Last entry: the fallback for unknown category ids.
    CategoryDef {
        id: "general",
        name: "General",
        emoji: "\u{2728}",
        words: &[
            "star", "moon", "sun", "wind", "rain", "wave", "peak", "glow", "spark", "drift",
            "echo", "pulse", "bloom", "frost", "shade", "mist", "dusk", "dawn", "pine", "reed",
            "stone", "creek", "leaf", "cloud", "ember", "coral", "sage", "iris", "jade", "onyx",
        ],
    },
];

/// Build the builtin lexicon: seven categories of thirty words each, with
/// `general` last as the fallback.
pub fn builtin_lexicon() -> Lexicon {
    let categories = CATEGORY_DEFS
        .iter()
        .map(|def| Category {
            id: def.id.to_string(),
            name: def.name.to_string(),
            emoji: def.emoji.to_string(),
            words: def.words.iter().map(|w| w.to_string()).collect(),
        })
        .collect();
    // The builtin table is statically well-formed.
    Lexicon::new(categories, FORBIDDEN_WORDS.iter().copied())
        .expect("builtin lexicon is well-formed")
}
