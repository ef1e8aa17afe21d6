//! Built-in term and replacement lists.
//!
//! Both lists are plain constant data. They are compiled into a [`crate::TermSet`]
//! when an engine is configured and never change afterwards.

/// Version of [`DEFAULT_FORBIDDEN_TERMS`]. Bump whenever the list changes.
pub const DEFAULT_TERMS_VERSION: &str = "1.0.0";

/// Forbidden terms used when no custom list is configured.
///
/// Entries are lowercase. Longer forms that share a prefix with a shorter entry
/// (`ass` / `asshole`) are listed separately because matching is whole-word.
pub const DEFAULT_FORBIDDEN_TERMS: &[&str] = &[
    "anal",
    "anus",
    "arse",
    "ass",
    "asses",
    "asshole",
    "assholes",
    "bastard",
    "bastards",
    "bitch",
    "bitches",
    "bitching",
    "bloody",
    "blowjob",
    "blowjobs",
    "bollock",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "bugger",
    "bullshit",
    "bum",
    "butt",
    "butthole",
    "buttplug",
    "clit",
    "clitoris",
    "cock",
    "cocks",
    "cocksucker",
    "crap",
    "crappy",
    "cum",
    "cunt",
    "cunts",
    "damn",
    "damned",
    "dick",
    "dickhead",
    "dildo",
    "dildos",
    "douche",
    "douchebag",
    "dyke",
    "fag",
    "faggot",
    "fck",
    "feck",
    "fellatio",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fucking",
    "fucks",
    "goddamn",
    "goddamned",
    "hell",
    "homo",
    "jackass",
    "jerkoff",
    "jizz",
    "knob",
    "knobend",
    "labia",
    "milf",
    "motherfucker",
    "motherfucking",
    "muff",
    "nigga",
    "nigger",
    "nob",
    "orgasm",
    "penis",
    "piss",
    "pissed",
    "poo",
    "poop",
    "porn",
    "prick",
    "pube",
    "pubes",
    "pussy",
    "queer",
    "scrotum",
    "shag",
    "shit",
    "shite",
    "shits",
    "shitty",
    "slut",
    "sluts",
    "smegma",
    "spunk",
    "tit",
    "tits",
    "titties",
    "tosser",
    "turd",
    "twat",
    "vagina",
    "wank",
    "wanker",
    "whore",
    "whores",
];

/// Replacement pool used when the replace strategy is requested without a
/// custom replacements list.
pub const DEFAULT_REPLACEMENTS: &[&str] = &[
    "bunnies",
    "butterfly",
    "kitten",
    "love",
    "gingerly",
    "flowers",
    "puppy",
    "joyful",
    "rainbows",
    "unicorn",
];
