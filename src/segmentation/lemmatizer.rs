use std::{
    collections::{
        HashMap,
        HashSet,
    },
    sync::OnceLock,
};

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("people", "person"),
    ("goes", "go"),
    ("going", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("made", "make"),
    ("came", "come"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("began", "begin"),
    ("begun", "begin"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("told", "tell"),
    ("found", "find"),
    ("stood", "stand"),
    ("understood", "understand"),
    ("sat", "sit"),
    ("got", "get"),
    ("gotten", "get"),
    ("said", "say"),
    ("paid", "pay"),
    ("lying", "lie"),
    ("dying", "die"),
    ("tying", "tie"),
];

// Base forms that happen to end in -s, -ed or -ing.
const BASE_FORMS: &[&str] = &[
    "always",
    "perhaps",
    "sometimes",
    "besides",
    "towards",
    "afterwards",
    "backwards",
    "forwards",
    "upwards",
    "downwards",
    "nevertheless",
    "unless",
    "whereas",
    "news",
    "series",
    "species",
    "means",
    "physics",
    "mathematics",
    "politics",
    "economics",
    "lens",
    "atlas",
    "canvas",
    "chaos",
    "bias",
    "alias",
    "naked",
    "wicked",
    "rugged",
    "ragged",
    "crooked",
    "beloved",
    "thing",
    "nothing",
    "something",
    "anything",
    "everything",
    "morning",
    "evening",
    "ceiling",
    "during",
    "wedding",
    "pudding",
    "darling",
    "sibling",
    "duckling",
    "herring",
    "awning",
];

fn irregular_forms() -> &'static HashMap<&'static str, &'static str> {
    static FORMS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    FORMS.get_or_init(|| IRREGULAR_FORMS.iter().copied().collect())
}

fn base_forms() -> &'static HashSet<&'static str> {
    static FORMS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    FORMS.get_or_init(|| BASE_FORMS.iter().copied().collect())
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn has_vowel(s: &str) -> bool {
    s.bytes().any(is_vowel)
}

/// A stem like `hundr` or `sampl` is not a word on its own.
fn ends_in_bare_liquid(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 2
        && matches!(bytes[n - 1], b'l' | b'r')
        && !is_vowel(bytes[n - 2])
        && bytes[n - 2] != bytes[n - 1]
}

/// Undo the spelling changes English makes before -ing/-ed:
/// `runn` -> `run`, `mak` -> `make`.
fn restore_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    if n >= 2 {
        let (a, b) = (bytes[n - 2], bytes[n - 1]);
        if a == b && !is_vowel(b) && !matches!(b, b'l' | b's' | b'z') {
            return stem[..n - 1].to_string();
        }
    }

    if n == 3
        && !is_vowel(bytes[0])
        && is_vowel(bytes[1])
        && !is_vowel(bytes[2])
        && !matches!(bytes[2], b'w' | b'x' | b'y')
    {
        return format!("{stem}e");
    }

    stem.to_string()
}

/// Reduce a lowercase ASCII word to an approximate dictionary form (singular noun,
/// bare verb). Words no rule applies to, and anything that is not ASCII, come back
/// unchanged.
pub fn lemmatize(word: &str) -> String {
    if let Some(lemma) = irregular_forms().get(word) {
        return (*lemma).to_string();
    }

    if !word.is_ascii() || base_forms().contains(word) {
        return word.to_string();
    }

    let len = word.len();
    if len <= 3 {
        return word.to_string();
    }

    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
            return format!("{stem}y");
        }
    }

    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }

    for suffix in ["xes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }

    if word.ends_with('s') && !(word.ends_with("ss") || word.ends_with("us") || word.ends_with("is"))
    {
        return word[..len - 1].to_string();
    }

    // need, speed, indeed
    if word.ends_with("eed") {
        return word.to_string();
    }

    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 3 && has_vowel(stem) && !ends_in_bare_liquid(stem) {
                return restore_stem(stem);
            }
        }
    }

    word.to_string()
}
