//! Word/clue corpus
//!
//! A bank is an ordered list of `(answer, clue)` pairs. The order matters:
//! candidate selection is a stable sort followed by a seeded shuffle, so the
//! same bank in a different order yields different puzzles.

use crate::error::BankError;
use serde::{Deserialize, Serialize};

/// Shortest answer the generator accepts
pub const MIN_ANSWER_LEN: usize = 3;
/// Longest answer the generator accepts
pub const MAX_ANSWER_LEN: usize = 13;

/// A single answer with its clue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    /// Uppercase A-Z answer
    pub answer: String,
    /// Clue text shown to the player
    pub clue: String,
}

impl WordEntry {
    pub fn new(answer: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            clue: clue.into(),
        }
    }

    /// Answer length in letters
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Ordered word/clue corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    entries: Vec<WordEntry>,
}

impl WordBank {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// The corpus compiled into the crate
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_WORDS
                .iter()
                .map(|&(answer, clue)| WordEntry::new(answer, clue))
                .collect(),
        )
    }

    /// Parse `ANSWER<TAB>clue` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. Answers are
    /// trimmed and upper-cased, then must be 3-13 letters of A-Z.
    pub fn from_tsv(text: &str) -> Result<Self, BankError> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (answer, clue) = raw
                .split_once('\t')
                .ok_or(BankError::MissingClue { line })?;
            let answer = normalize_answer(answer, line)?;
            entries.push(WordEntry::new(answer, clue.trim()));
        }
        Ok(Self::new(entries))
    }

    /// Validate entries that did not come through `from_tsv`, e.g. a JSON bank.
    /// Answers are upper-cased in place.
    pub fn validated(self) -> Result<Self, BankError> {
        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                let answer = normalize_answer(&entry.answer, idx + 1)?;
                Ok(WordEntry::new(answer, entry.clue))
            })
            .collect::<Result<Vec<_>, BankError>>()?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<WordEntry> for WordBank {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn normalize_answer(raw: &str, line: usize) -> Result<String, BankError> {
    let answer = raw.trim().to_ascii_uppercase();
    if answer.is_empty() {
        return Err(BankError::EmptyAnswer { line });
    }
    if !answer.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(BankError::InvalidCharacters { line, answer });
    }
    let len = answer.len();
    if !(MIN_ANSWER_LEN..=MAX_ANSWER_LEN).contains(&len) {
        return Err(BankError::InvalidLength { line, answer, len });
    }
    Ok(answer)
}

#[rustfmt::skip]
const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("ACORN", "Oak's beginning"),
    ("ADAGE", "Old saying"),
    ("AGENDA", "Meeting plan"),
    ("ALMOND", "Nut in marzipan"),
    ("ANCHOR", "It keeps a ship in place"),
    ("ANTHEM", "Song sung before a game"),
    ("APRICOT", "Orange stone fruit"),
    ("ARCADE", "Hall of coin-operated games"),
    ("ATLAS", "Book of maps"),
    ("AUTUMN", "Season of falling leaves"),
    ("AVALANCHE", "Snowy slide"),
    ("BADGER", "Burrowing mammal with a striped face"),
    ("BALLAD", "Slow love song"),
    ("BAMBOO", "Panda's favorite food"),
    ("BANANA", "Yellow fruit that bunches"),
    ("BARREL", "Cask for wine or oil"),
    ("BEACON", "Guiding light"),
    ("BISCUIT", "Cookie, to a Brit"),
    ("BLIZZARD", "Severe snowstorm"),
    ("BONSAI", "Miniature potted tree"),
    ("BREEZE", "Gentle wind"),
    ("BRIDGE", "It spans a river"),
    ("BUCKET", "Pail"),
    ("BUTTER", "Toast topper"),
    ("CABIN", "Log house"),
    ("CACTUS", "Desert plant with spines"),
    ("CANDLE", "Wick holder"),
    ("CANOE", "Paddled boat"),
    ("CANYON", "Deep gorge"),
    ("CARAMEL", "Chewy candy made from sugar"),
    ("CASTLE", "Fortified residence"),
    ("CELLO", "Large string instrument"),
    ("CHIMNEY", "Smoke outlet"),
    ("CIRCUS", "Big top show"),
    ("CLOVER", "Lucky plant with leaves in threes"),
    ("COMPASS", "It points north"),
    ("COMET", "Icy body with a tail"),
    ("CORAL", "Reef builder"),
    ("COTTON", "Soft fabric fiber"),
    ("CRATER", "Hole left by a meteor"),
    ("CRAYON", "Wax drawing stick"),
    ("CRICKET", "Chirping insect"),
    ("CROWN", "Royal headwear"),
    ("CRYSTAL", "Clear quartz"),
    ("CURTAIN", "Window covering"),
    ("DAISY", "White-petaled flower"),
    ("DANCER", "Ballerina, for one"),
    ("DESERT", "Sahara, for one"),
    ("DIAMOND", "Hardest natural gem"),
    ("DOLPHIN", "Clever marine mammal"),
    ("DRAGON", "Fire-breathing beast"),
    ("DRIZZLE", "Light rain"),
    ("EAGLE", "Bald bird of prey"),
    ("ECLIPSE", "Sun blocker"),
    ("ELBOW", "Arm joint"),
    ("EMERALD", "Green gem"),
    ("ENGINE", "Car's heart"),
    ("ESPRESSO", "Strong coffee shot"),
    ("FALCON", "Fast-diving raptor"),
    ("FEATHER", "Bird covering"),
    ("FERRY", "Boat that carries cars"),
    ("FIDDLE", "Violin, informally"),
    ("FLAMINGO", "Pink wading bird"),
    ("FOREST", "Woodland"),
    ("FOSSIL", "Ancient remains in rock"),
    ("FOUNTAIN", "Plaza water feature"),
    ("GALAXY", "Milky Way, for one"),
    ("GARDEN", "Place to grow vegetables"),
    ("GARLIC", "Pungent bulb"),
    ("GIRAFFE", "Tallest animal"),
    ("GLACIER", "Slow river of ice"),
    ("GOBLIN", "Mischievous sprite"),
    ("GRANITE", "Countertop stone"),
    ("HAMMOCK", "Hanging bed"),
    ("HARBOR", "Safe port"),
    ("HARVEST", "Crop gathering"),
    ("HAZEL", "Nut tree"),
    ("HELMET", "Protective headgear"),
    ("HONEY", "Bee product"),
    ("HORIZON", "Where sky meets earth"),
    ("ICEBERG", "Titanic's nemesis"),
    ("IGLOO", "Snow house"),
    ("INKWELL", "Quill's partner"),
    ("ISLAND", "Land surrounded by water"),
    ("IVORY", "Piano key material, once"),
    ("JACKET", "Light coat"),
    ("JASMINE", "Fragrant flower used in tea"),
    ("JIGSAW", "Puzzle with interlocking pieces"),
    ("JUNGLE", "Tropical rainforest"),
    ("KANGAROO", "Hopping marsupial"),
    ("KETTLE", "Tea pot for boiling"),
    ("KNIGHT", "Chess piece that moves in an L"),
    ("LADDER", "Climbing aid with rungs"),
    ("LANTERN", "Portable light"),
    ("LAVENDER", "Purple herb"),
    ("LEMON", "Sour citrus"),
    ("LIBRARY", "Book lender"),
    ("LIGHTHOUSE", "Coastal warning tower"),
    ("LOBSTER", "Clawed crustacean"),
    ("MAGNET", "It attracts iron"),
    ("MANGO", "Tropical stone fruit"),
    ("MAPLE", "Syrup tree"),
    ("MARBLE", "Sculptor's stone"),
    ("MEADOW", "Grassy field"),
    ("MEDAL", "Olympic prize"),
    ("MIRROR", "Reflective surface"),
    ("MOSAIC", "Tile art"),
    ("MUSEUM", "Gallery of artifacts"),
    ("NECTAR", "Flower's sweet liquid"),
    ("NEEDLE", "Sewing tool"),
    ("NOODLE", "Ramen strand"),
    ("NUTMEG", "Eggnog spice"),
    ("OASIS", "Desert watering hole"),
    ("OCEAN", "Pacific, for one"),
    ("OLIVE", "Martini garnish"),
    ("ORANGE", "Citrus fruit and color"),
    ("ORBIT", "Planet's path"),
    ("ORCHARD", "Fruit tree farm"),
    ("OTTER", "Playful river mammal"),
    ("OYSTER", "Pearl producer"),
    ("PADDLE", "Canoe propeller"),
    ("PALACE", "Royal residence"),
    ("PANTHER", "Black big cat"),
    ("PARROT", "Talking bird"),
    ("PEBBLE", "Small stone"),
    ("PENGUIN", "Flightless bird of Antarctica"),
    ("PEPPER", "Salt's partner"),
    ("PIANO", "Instrument with 88 keys"),
    ("PICNIC", "Outdoor meal"),
    ("PILGRIM", "Religious traveler"),
    ("PIRATE", "Buccaneer"),
    ("PLANET", "Mars or Venus"),
    ("POCKET", "Pants pouch"),
    ("PUMPKIN", "Jack-o'-lantern material"),
    ("PUZZLE", "Brain teaser"),
    ("PYRAMID", "Egyptian tomb"),
    ("QUARTZ", "Common crystal"),
    ("QUILL", "Feather pen"),
    ("RABBIT", "Long-eared hopper"),
    ("RADISH", "Red root vegetable"),
    ("RAINBOW", "Arc after a storm"),
    ("RAVEN", "Black bird of Poe"),
    ("RIDDLE", "Conundrum"),
    ("ROCKET", "Launch vehicle"),
    ("SADDLE", "Horse seat"),
    ("SALMON", "Fish that swims upstream"),
    ("SANDAL", "Open shoe"),
    ("SATURN", "Ringed planet"),
    ("SCARF", "Neck warmer"),
    ("SHADOW", "Silhouette cast by light"),
    ("SPIDER", "Web spinner"),
    ("SPONGE", "Absorbent cleaner"),
    ("SQUIRREL", "Acorn hoarder"),
    ("STATUE", "Sculpted figure"),
    ("SUMMIT", "Mountain peak"),
    ("SUNFLOWER", "Tall yellow bloom"),
    ("TEAPOT", "Vessel with a spout"),
    ("TELESCOPE", "Stargazer's tool"),
    ("THUNDER", "Lightning's sound"),
    ("TIGER", "Striped big cat"),
    ("TOMATO", "Red salad fruit"),
    ("TORNADO", "Twister"),
    ("TRUMPET", "Brass instrument"),
    ("TULIP", "Dutch flower"),
    ("TURTLE", "Shelled reptile"),
    ("UMBRELLA", "Rain shield"),
    ("UNICORN", "Horned fantasy horse"),
    ("VALLEY", "Low land between hills"),
    ("VELVET", "Plush fabric"),
    ("VIOLIN", "Bowed instrument"),
    ("VOLCANO", "Lava spewer"),
    ("WAFFLE", "Grid-patterned breakfast"),
    ("WALNUT", "Wrinkled nut"),
    ("WALRUS", "Tusked sea mammal"),
    ("WHISTLE", "Referee's tool"),
    ("WILLOW", "Weeping tree"),
    ("WINDMILL", "Dutch landmark"),
    ("WIZARD", "Spell caster"),
    ("YOGURT", "Cultured dairy snack"),
    ("ZEBRA", "Striped horse"),
    ("ZEPPELIN", "Airship"),
    ("ANT", "Picnic pest"),
    ("ARC", "Curved line"),
    ("BEE", "Honey maker"),
    ("EMU", "Flightless Australian bird"),
    ("INK", "Pen filler"),
    ("OAK", "Tree from an acorn"),
    ("OWL", "Night hooter"),
    ("TEA", "Earl Grey, for one"),
    ("CONSTELLATION", "Orion, for one"),
    ("WATERMELON", "Summer fruit with black seeds"),
];
