//! Closed word classes, common verbs and inflection rules. Open classes
//! come from the OpenGloss lexicon in `dictionary.rs`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use inwen_core::Tag;

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "someone", "somebody", "something", "anyone", "anybody", "anything", "everyone",
    "everybody", "everything", "nobody", "nothing", "one",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "few", "many", "much", "several", "another", "such",
    "what", "which", "whatever", "whichever",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
    "off", "over", "under", "among", "around", "behind", "beside", "beyond", "despite", "except",
    "inside", "near", "onto", "outside", "since", "toward", "towards", "upon", "via", "within",
    "without", "per",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "if", "unless",
    "while", "whereas", "whether", "than", "as", "until", "once",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hi", "hello", "ouch", "oops", "hmm", "uh", "um", "yes", "yeah",
    "ok", "okay", "alas", "bye",
];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "only", "even", "still", "already", "always",
    "never", "often", "sometimes", "usually", "soon", "now", "then", "here", "there", "again",
    "almost", "quite", "rather", "perhaps", "maybe", "well", "yet", "ever", "once", "today",
    "tomorrow", "yesterday", "away", "back", "however", "therefore", "instead", "where",
    "when", "why", "how", "indeed", "else", "far", "fast", "hard", "late", "early", "forward",
];

/// Auxiliaries, modals and irregular inflections
const VERB_FORMS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "done", "doing", "can", "could", "will", "would", "shall", "should",
    "may", "might", "must", "ran", "went", "gone", "came", "saw", "seen", "took", "taken",
    "gave", "given", "made", "got", "gotten", "knew", "known", "thought", "told", "found",
    "left", "felt", "kept", "began", "begun", "brought", "bought", "wrote", "written", "ate",
    "eaten", "drank", "drunk", "drove", "driven", "spoke", "spoken", "sat", "stood", "lost",
    "paid", "met", "heard", "held", "led", "meant", "sent", "spent", "built", "understood",
    "fell", "fallen", "grew", "grown", "chose", "chosen", "forgot", "forgotten", "slept",
    "swam", "sang", "sung", "won", "wore", "worn", "broke", "broken", "flew", "flown", "threw",
    "thrown", "rode", "ridden", "rose", "risen", "hid", "hidden", "caught", "taught", "fought",
    "sought", "said", "laid", "lay", "lain", "shook", "shaken",
];

/// Base forms of frequent regular and irregular verbs
const VERB_BASES: &[&str] = &[
    "run", "walk", "go", "come", "see", "look", "watch", "take", "give", "make", "get", "know",
    "think", "tell", "say", "find", "leave", "feel", "keep", "begin", "bring", "buy", "write",
    "read", "eat", "drink", "drive", "speak", "sit", "stand", "lose", "pay", "meet", "hear",
    "hold", "lead", "mean", "send", "spend", "build", "understand", "fall", "grow", "choose",
    "forget", "sleep", "swim", "sing", "win", "wear", "break", "fly", "throw", "ride", "rise",
    "hide", "catch", "teach", "fight", "seek", "like", "love", "hate", "want", "need", "use",
    "try", "ask", "work", "call", "play", "move", "live", "believe", "happen", "help", "start",
    "stop", "show", "turn", "open", "close", "change", "follow", "learn", "talk", "add",
    "allow", "appear", "offer", "remember", "consider", "expect", "suggest", "carry", "cook",
    "explain", "jump", "jog", "climb", "dance", "laugh", "cry", "smile", "wait", "stay",
    "travel", "visit", "study", "answer", "agree", "enjoy", "finish", "hope", "hurry",
    "listen", "miss", "plan", "prefer", "push", "pull", "reach", "return", "save", "share",
    "sell", "serve", "set", "put", "cut", "let", "hit", "shut", "cost", "hurt", "quit",
    "spread", "beat", "bite", "blow", "draw", "dream", "fix", "kill", "kiss", "knock", "lie",
    "lift", "mark", "order", "pass", "pick", "point", "pour", "pray", "protect", "prove",
    "raise", "rain", "relax", "rest", "ring", "rush", "shout", "sign", "smell", "snow",
    "solve", "sound", "taste", "test", "thank", "touch", "train", "trust", "vote", "wash",
    "wish", "wonder", "worry", "describe", "decide", "develop", "discover", "discuss",
    "explore", "imagine", "improve", "include", "increase", "involve", "mention", "notice",
    "prepare", "produce", "provide", "receive", "reduce", "remain", "remove", "replace",
    "report", "require", "seem", "support", "suppose", "create", "destroy", "exist", "fail",
    "fill", "form", "join", "kick", "manage", "matter", "owe", "own", "realize", "recognize",
    "refuse", "shine", "ski", "throw", "type", "clean", "paint", "park", "shop", "skip",
];

static CLOSED_CLASSES: LazyLock<HashMap<&'static str, Vec<Tag>>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, Vec<Tag>> = HashMap::new();
    let groups: [(&[&str], Tag); 7] = [
        (PRONOUNS, Tag::Pronoun),
        (DETERMINERS, Tag::Determiner),
        (PREPOSITIONS, Tag::Preposition),
        (CONJUNCTIONS, Tag::Conjunction),
        (INTERJECTIONS, Tag::Interjection),
        (ADVERBS, Tag::Adverb),
        (VERB_FORMS, Tag::Verb),
    ];
    for (words, tag) in groups {
        for word in words {
            let tags = map.entry(*word).or_default();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    map
});

static VERB_BASE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VERB_BASES.iter().copied().collect());

/// Tags for a listed closed-class word or irregular verb form
pub fn closed_class(word: &str) -> Option<&'static [Tag]> {
    CLOSED_CLASSES.get(word).map(Vec::as_slice)
}

pub fn is_verb_base(word: &str) -> bool {
    VERB_BASE_SET.contains(word)
}

/// Whether `word` is a regular inflection (-s, -ed, -ing) of a listed
/// verb base, including e-drop, y-to-i and doubled final consonants.
pub fn is_inflected_verb(word: &str) -> bool {
    is_verb_base(word) || base_candidates(word).iter().any(|stem| is_verb_base(stem))
}

/// Possible base forms of a regularly inflected word, most specific first
pub fn base_candidates(word: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    if let Some(stem) = word.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    }
    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            candidates.push(stem.to_string());
            candidates.push(format!("{stem}e"));
            if let Some(undoubled) = undouble(stem) {
                candidates.push(undoubled.to_string());
            }
        }
    }
    if let Some(stem) = word.strip_suffix('d') {
        candidates.push(stem.to_string());
    }

    candidates.retain(|stem| stem.len() > 1);
    candidates
}

/// Third-person singular shape: "flows", "purrs", "watches". Plural nouns
/// share it, so this only ever adds a verb reading.
pub fn looks_third_person(word: &str) -> bool {
    word.len() > 3
        && word.ends_with('s')
        && !["ss", "us", "is", "ous", "'s"]
            .iter()
            .any(|ending| word.ends_with(ending))
}

/// "runn" -> "run", "stopp" -> "stop"
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !"aeiou".contains(last)).then(|| &stem[..stem.len() - last.len_utf8()])
}
