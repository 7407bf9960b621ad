//! Catalog module - bundled word lists
//!
//! Category → theme → word list. These lists feed the generator whenever the
//! remote lexicon is unavailable or returns too little. Some entries fall
//! outside the 4-8 letter range; the generator skips those.

use crate::types::Category;

/// A named theme and its fallback words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

const NATURE: [Theme; 5] = [
    Theme {
        name: "Forest",
        words: &[
            "TREE", "LEAF", "BARK", "ROOT", "MOSS", "FERN", "ACORN", "TWIG", "BERRY", "LAKE",
            "PINE", "STREAM",
        ],
    },
    Theme {
        name: "Ocean",
        words: &[
            "WAVE", "FISH", "SAND", "TIDE", "REEF", "KELP", "SHELL", "CORAL", "SHARK", "CRAB",
            "SEAL", "WATER",
        ],
    },
    Theme {
        name: "Mountains",
        words: &[
            "PEAK", "ROCK", "SNOW", "CAVE", "ECHO", "MIST", "CLIFF", "TRAIL", "VALLEY", "SLOPE",
            "SUMMIT", "GLACIER",
        ],
    },
    Theme {
        name: "Desert",
        words: &[
            "SAND", "DUNE", "HEAT", "OASIS", "CACTUS", "MIRAGE", "SCORPION", "SUNSET", "CAMEL",
            "ARID", "COYOTE", "DRY",
        ],
    },
    Theme {
        name: "Garden",
        words: &[
            "ROSE", "SEED", "BLOOM", "SOIL", "WATER", "SUNNY", "BUG", "PEST", "FLOWER", "HERB",
            "WEED", "PLANT",
        ],
    },
];

const POP: [Theme; 5] = [
    Theme {
        name: "Movies",
        words: &[
            "FILM", "STAR", "HERO", "PLOT", "SCENE", "CAST", "SCREEN", "ACTOR", "DIRECTOR",
            "GENRE", "FANTASY", "COMEDY",
        ],
    },
    Theme {
        name: "Music",
        words: &[
            "SONG", "BEAT", "TUNE", "BAND", "DANCE", "VOICE", "RHYTHM", "LYRIC", "ALBUM",
            "GUITAR", "PIANO", "MELODY",
        ],
    },
    Theme {
        name: "TV Shows",
        words: &[
            "SHOW", "CAST", "PLOT", "DRAMA", "LAUGH", "WATCH", "EPISODE", "SERIES", "SITCOM",
            "CABLE", "REMOTE", "CHANNEL",
        ],
    },
    Theme {
        name: "Gaming",
        words: &[
            "PLAY", "GAME", "LEVEL", "SCORE", "QUEST", "BOSS", "PLAYER", "WINNER", "CONSOLE",
            "ARCADE", "JOYSTICK", "AVATAR",
        ],
    },
    Theme {
        name: "Social Media",
        words: &[
            "POST", "LIKE", "SHARE", "VIRAL", "TREND", "MEME", "FOLLOW", "HASHTAG",
            "INFLUENCER", "STREAM", "FEED", "PROFILE",
        ],
    },
];

const GENERAL: [Theme; 5] = [
    Theme {
        name: "Science",
        words: &[
            "ATOM", "CELL", "GENE", "WAVE", "LIGHT", "HEAT", "FORCE", "ENERGY", "PROTON",
            "NATURE", "LAB", "THEORY",
        ],
    },
    Theme {
        name: "History",
        words: &[
            "PAST", "KING", "WAR", "PEACE", "EMPIRE", "SAGA", "ANCIENT", "EVENT", "BATTLE",
            "QUEEN", "KNIGHT", "ERA",
        ],
    },
    Theme {
        name: "Geography",
        words: &[
            "CITY", "LAND", "RIVER", "LAKE", "HILL", "ROAD", "OCEAN", "COUNTRY", "ISLAND",
            "DESERT", "FOREST", "MAP",
        ],
    },
    Theme {
        name: "Food",
        words: &[
            "RICE", "BREAD", "SOUP", "CAKE", "FRUIT", "MEAT", "CHEESE", "PASTA", "PIZZA",
            "SALAD", "SUGAR", "SPICE",
        ],
    },
    Theme {
        name: "Sports",
        words: &[
            "BALL", "GOAL", "TEAM", "WIN", "RACE", "JUMP", "SCORE", "ATHLETE", "FIELD", "COURT",
            "COACH", "MEDAL",
        ],
    },
];

/// Quotes shown on the welcome screen.
pub const WELCOME_QUOTES: [&str; 20] = [
    "The wise potato knows when to be mashed",
    "A confused penguin still slides with purpose",
    "The loudest silence happens during breakfast",
    "When the moon sneezes, the stars say bless you",
    "A backwards clock is still right twice a day",
    "The deepest puddle reflects the shallowest thoughts",
    "A dancing refrigerator never spoils the milk",
    "The last cookie in the jar holds infinite wisdom",
    "When clouds wear socks, rain becomes comfortable",
    "A sleeping calculator dreams of perfect equations",
    "The heaviest feather carries the lightest burden",
    "A mirror without reflection still shows the truth",
    "The fastest turtle wins the race it never entered",
    "When soup gets cold, it remembers being hot",
    "A library card opens doors that have no locks",
    "The smallest giant casts the largest shadow",
    "A musical banana peels itself with rhythm",
    "The emptiest cup holds the most possibility",
    "When gravity takes a day off, everything floats with purpose",
    "A laughing mountain echoes into tomorrow",
];

/// Themes of a category, in menu order.
pub fn themes(category: Category) -> &'static [Theme] {
    match category {
        Category::Nature => &NATURE,
        Category::Pop => &POP,
        Category::General => &GENERAL,
    }
}

/// Look up a theme by name (case-insensitive) across all categories.
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    Category::ALL
        .iter()
        .flat_map(|&c| themes(c).iter())
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_WORD_LEN, MIN_WORDS, MIN_WORD_LEN};

    #[test]
    fn test_every_category_has_five_themes() {
        for c in Category::ALL {
            assert_eq!(themes(c).len(), 5);
        }
    }

    #[test]
    fn test_every_theme_has_enough_usable_words() {
        for c in Category::ALL {
            for t in themes(c) {
                let usable = t
                    .words
                    .iter()
                    .filter(|w| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&w.len()))
                    .count();
                assert!(usable >= MIN_WORDS, "{} has {} usable", t.name, usable);
                assert!(t.words.iter().all(|w| w.bytes().all(|b| b.is_ascii_uppercase())));
            }
        }
    }

    #[test]
    fn test_find_theme() {
        assert_eq!(find_theme("ocean").map(|t| t.name), Some("Ocean"));
        assert!(find_theme("Volcanoes").is_none());
    }
}
