//! Reference word lists compiled into the crate.
//!
//! The empty entries in `MIDDLES` and `TITLES` are deliberate: they form a
//! second inclusion layer beneath the middle and title rolls.

pub const PREFIXES: &[&str] = &[
    "Aer", "Aeth", "Ald", "Ar", "Arag", "Azur", "Bal", "Bel", "Bor", "Bran",
    "Cal", "Cael", "Dag", "Dar", "Dor", "Drav", "Eld", "El", "Ereb", "Fen",
    "Fir", "Frey", "Gal", "Gan", "Gar", "Gil", "Grim", "Gwyn", "Hal", "Har",
    "Hel", "Isen", "Jar", "Jor", "Kal", "Kar", "Kaz", "Kord", "Lad", "Lan",
    "Lor", "Luth", "Mal", "Mith", "Mor", "Nath", "Nor", "Pal", "Rav", "Raz",
    "Ren", "Roan", "Sev", "Shan", "Sil", "Storm", "Thal", "Thor", "Thran", "Tyr",
    "Ul", "Vald", "Var", "Vol", "Vor", "War", "Wulf", "Zar", "Zen", "Zeph",
];

pub const MIDDLES: &[&str] = &[
    "ad", "am", "an", "ar", "as", "az", "bar", "bor", "dar", "del",
    "din", "dor", "dran", "dur", "gal", "grim", "ian", "ith", "kan", "kath",
    "lach", "lan", "lian", "loch", "lor", "mar", "mond", "mor", "nar", "nir",
    "or", "rad", "rail", "ran", "riel", "rin", "rion", "ris", "ron", "sar",
    "ser", "sil", "stor", "thal", "thar", "ther", "thr", "tin", "tor", "val",
    "van", "var", "vor", "wan", "wer", "wyn", "", "", "", "",
];

pub const SUFFIXES: &[&str] = &[
    "adan", "ain", "aine", "ak", "al", "alas", "ald", "ali", "am", "an",
    "ar", "aran", "ard", "ath", "ayne", "bane", "born", "brand", "bringer", "dar",
    "din", "dor", "doth", "dred", "drim", "ean", "el", "eon", "ere", "esh",
    "fire", "forge", "gard", "gorn", "grim", "heart", "ien", "ik", "il", "ion",
    "ior", "is", "ius", "lor", "more", "nir", "oc", "or", "orn", "oth",
    "rad", "rak", "ram", "riel", "rim", "rin", "roth", "seer", "sen", "shire",
    "slayer", "star", "storm", "thal", "thar", "thien", "thorn", "thul", "us", "vain",
    "vane", "ward", "wick", "wind", "wise", "wrath", "wyck", "wyn", "wynn", "yr",
];

pub const TITLES: &[&str] = &[
    "the Brave", "the Bold", "Dragonslayer", "Stormbringer", "the Wise", "the Mighty",
    "Oathkeeper", "Shadowbane", "the Unyielding", "Lightbringer", "Flameheart", "Doomhammer",
    "the Vengeful", "Bane of Darkness", "Champion of Light", "the Undaunted", "Kingslayer",
    "Demonbane", "the Arcane", "Spellweaver", "Soulforger", "the Relentless", "Frostbringer",
    "Truthseeker", "the Valiant", "Guardian of the Realm", "the Immortal", "Titan's Hand",
    "the Just", "Protector of the Weak", "the Unchained", "Godbane", "the Magnificent",
    "Wyrmslayer", "the Crimson", "the Azure", "the Emerald", "the Golden", "the Silver",
    "the Obsidian", "", "", "", "", "", "", "", "", "", "", "", "", "",
];

pub const ADJECTIVES: &[&str] = &[
    "admirable", "brave", "charming", "determined", "elegant", "fantastic", "graceful",
    "heroic", "inspiring", "jolly", "kind", "loyal", "majestic", "noble",
    "optimistic", "peaceful", "quirky", "resilient", "serene", "tenacious", "unique",
    "valiant", "wonderful", "xenial", "zealous", "agile", "brilliant", "curious",
    "daring", "energetic", "fierce", "generous", "honest", "imaginative", "jovial",
];

pub const NOUNS: &[&str] = &[
    "eagle", "whale", "hummingbird", "dolphin", "elephant", "falcon", "gorilla",
    "owl", "iguana", "jaguar", "koala", "leopard", "medusa", "narwhal",
    "orca", "panther", "quokka", "raccoon", "salamander", "tiger", "unicorn",
    "vulture", "wombat", "xerus", "yak", "zebra", "albatross", "bison", "chameleon",
    "dragon", "squirrel", "flamingo", "gazelle", "hippocampus", "ibis",
];
