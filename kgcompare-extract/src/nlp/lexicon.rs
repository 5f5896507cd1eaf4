// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Closed-class word lists and small gazetteers for the English pipeline

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Standard English stopword list
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
        "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
        "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below",
        "beside", "besides", "between", "beyond", "both", "bottom", "but", "by", "ca", "call",
        "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "due", "during",
        "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "even",
        "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
        "fifty", "first", "five", "for", "former", "formerly", "forty", "four", "from", "front",
        "full", "further", "get", "give", "go", "had", "has", "have", "he", "hence", "her",
        "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
        "himself", "his", "how", "however", "hundred", "i", "if", "in", "indeed", "into", "is",
        "it", "its", "itself", "just", "keep", "last", "latter", "latterly", "least", "less",
        "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover",
        "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
        "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
        "nothing", "now", "nowhere", "n't", "of", "off", "often", "on", "once", "one", "only",
        "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over",
        "own", "part", "per", "perhaps", "please", "put", "quite", "rather", "re", "really",
        "regarding", "same", "say", "see", "seem", "seemed", "seeming", "seems", "serious",
        "several", "she", "should", "show", "side", "since", "six", "sixty", "so", "some",
        "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still",
        "such", "take", "ten", "than", "that", "the", "their", "them", "themselves", "then",
        "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
        "these", "they", "third", "this", "those", "though", "three", "through", "throughout",
        "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty",
        "two", "under", "unless", "until", "up", "upon", "us", "used", "using", "various",
        "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
        "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
        "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
        "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
        "yours", "yourself", "yourselves", "'s", "'re", "'ve", "'ll", "'d", "'m",
    ])
});

pub static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "the", "a", "an", "this", "these", "those", "each", "every", "some", "any", "no",
        "another", "all", "both", "either", "neither", "such", "many", "several", "few",
        "much", "most",
    ])
});

/// Pronouns; possessives are marked separately
pub static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
        "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        "who", "whom", "whose", "which", "what", "someone", "something", "anyone",
        "anything", "everyone", "everything", "nobody", "nothing", "one",
    ])
});

pub static POSSESSIVES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["my", "your", "his", "her", "its", "our", "their", "whose"]));

pub static RELATIVE_PRONOUNS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["who", "whom", "which", "that", "whose"]));

pub static PREPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "about",
        "as", "after", "before", "during", "since", "until", "between", "among", "through",
        "throughout", "over", "under", "above", "below", "across", "against", "along",
        "around", "behind", "beside", "besides", "beyond", "despite", "near", "off",
        "outside", "inside", "per", "toward", "towards", "upon", "via", "within", "without",
        "like", "unlike", "including", "regarding", "concerning", "amid", "amongst", "than",
    ])
});

pub static COORDINATORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["and", "or", "but", "nor", "yet", "&"]));

pub static SUBORDINATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "because", "although", "though", "while", "whereas", "if", "unless", "whether",
        "when", "where", "once", "so",
    ])
});

pub static ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "also", "very", "often", "however", "still", "only", "just", "even", "now", "then",
        "there", "here", "too", "never", "always", "usually", "sometimes", "mostly", "largely",
        "widely", "generally", "typically", "approximately", "well", "thus", "therefore",
        "already", "again", "later", "earlier", "primarily", "mainly", "rather", "quite",
        "almost", "nearly", "especially", "particularly", "today", "currently", "formerly",
        "originally", "ever", "once", "soon", "instead", "perhaps", "together", "further",
    ])
});

pub static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| set(&["not", "n't", "never"]));

/// Inflected forms of the auxiliaries mapped to their lemma
pub static AUXILIARIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("be", "be"), ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"),
        ("were", "be"), ("been", "be"), ("being", "be"), ("'re", "be"), ("'m", "be"),
        ("have", "have"), ("has", "have"), ("had", "have"), ("having", "have"),
        ("'ve", "have"), ("do", "do"), ("does", "do"), ("did", "do"), ("can", "can"),
        ("ca", "can"), ("could", "could"), ("may", "may"), ("might", "might"),
        ("must", "must"), ("shall", "shall"), ("should", "should"), ("will", "will"),
        ("wo", "will"), ("would", "would"), ("'ll", "will"), ("'d", "would"),
    ]
    .into_iter()
    .collect()
});

/// Base forms of common lexical verbs
pub static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "accept", "achieve", "acquire", "add", "adopt", "affect", "allow", "appear", "apply",
        "argue", "arrive", "ask", "assign", "attack", "attend", "attempt", "avoid", "base",
        "bear", "beat", "become", "begin", "believe", "belong", "breed", "bring", "build",
        "buy", "call", "carry", "cause", "change", "choose", "claim", "close", "come",
        "compare", "compete", "complete", "compose", "consider", "consist", "constitute",
        "consume", "contain", "continue", "contribute", "control", "cover", "create", "cross",
        "cut", "decide", "declare", "decline", "define", "defeat", "deliver", "depend",
        "describe", "design", "destroy", "determine", "develop", "die", "discover", "display",
        "divide", "domesticate", "draw", "drink", "drive", "eat", "elect", "emerge", "employ",
        "enable", "encourage", "end", "enter", "establish", "estimate", "evolve", "exist",
        "expand", "expect", "experience", "explain", "export", "express", "extend", "fail",
        "fall", "feed", "feel", "fight", "find", "finish", "follow", "force", "form", "found",
        "gain", "get", "give", "go", "graze", "grow", "happen", "help", "hold", "house",
        "identify", "import", "improve", "include", "increase", "indicate", "influence",
        "inhabit", "introduce", "invade", "invent", "involve", "join", "keep", "kill", "know",
        "lay", "lead", "learn", "leave", "let", "lie", "limit", "live", "locate", "lose",
        "maintain", "make", "manage", "mark", "marry", "mean", "measure", "meet", "migrate",
        "move", "name", "need", "note", "observe", "obtain", "occupy", "occur", "offer",
        "open", "operate", "originate", "own", "pass", "pay", "perform", "place", "plan",
        "play", "possess", "prefer", "prepare", "present", "prevent", "produce", "promote",
        "protect", "provide", "publish", "pull", "raise", "reach", "read", "receive",
        "recognize", "record", "reduce", "refer", "reflect", "reject", "release", "rely",
        "remain", "remove", "replace", "report", "represent", "require", "rest", "result",
        "retain", "return", "reveal", "rise", "rule", "run", "say", "see", "seek", "seem",
        "sell", "send", "serve", "set", "settle", "share", "show", "sign", "sleep", "speak",
        "spend", "spread", "stand", "start", "stay", "stop", "study", "succeed", "suffer",
        "suggest", "supply", "support", "survive", "take", "teach", "tend", "term", "think",
        "train", "travel", "treat", "try", "turn", "understand", "unite", "use", "vary",
        "visit", "want", "wear", "weigh", "win", "work", "write", "yield", "hunt", "bark",
        "sing", "swim", "fly", "rank", "host", "border", "flow", "bite", "hatch",
    ])
});

/// Irregular verb forms mapped to their lemma
pub static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("became", "become"), ("began", "begin"), ("begun", "begin"), ("bore", "bear"),
        ("born", "bear"), ("borne", "bear"), ("bred", "breed"), ("brought", "bring"),
        ("built", "build"), ("bought", "buy"), ("came", "come"), ("chose", "choose"),
        ("chosen", "choose"), ("died", "die"), ("drew", "draw"), ("drawn", "draw"),
        ("drank", "drink"), ("drunk", "drink"), ("drove", "drive"), ("driven", "drive"),
        ("ate", "eat"), ("eaten", "eat"), ("fell", "fall"), ("fallen", "fall"),
        ("fed", "feed"), ("felt", "feel"), ("fought", "fight"), ("found", "find"),
        ("got", "get"), ("gotten", "get"), ("gave", "give"), ("given", "give"),
        ("went", "go"), ("gone", "go"), ("grew", "grow"), ("grown", "grow"),
        ("held", "hold"), ("kept", "keep"), ("knew", "know"), ("known", "know"),
        ("laid", "lay"), ("led", "lead"), ("left", "leave"), ("lain", "lie"),
        ("lost", "lose"), ("made", "make"), ("meant", "mean"), ("met", "meet"),
        ("paid", "pay"), ("ran", "run"), ("rose", "rise"), ("risen", "rise"), ("said", "say"),
        ("saw", "see"), ("seen", "see"), ("sought", "seek"), ("sold", "sell"),
        ("sent", "send"), ("slept", "sleep"), ("spoke", "speak"), ("spoken", "speak"),
        ("spent", "spend"), ("stood", "stand"), ("took", "take"), ("taken", "take"),
        ("taught", "teach"), ("thought", "think"), ("understood", "understand"),
        ("wore", "wear"), ("worn", "wear"), ("won", "win"), ("wrote", "write"),
        ("written", "write"), ("read", "read"), ("set", "set"), ("cut", "cut"),
        ("let", "let"), ("put", "put"), ("spread", "spread"),
    ]
    .into_iter()
    .collect()
});

/// Irregular plural nouns mapped to their lemma
pub static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"), ("men", "man"), ("women", "woman"), ("mice", "mouse"),
        ("geese", "goose"), ("feet", "foot"), ("teeth", "tooth"), ("oxen", "ox"),
        ("wolves", "wolf"), ("knives", "knife"), ("leaves", "leaf"), ("lives", "life"),
        ("wives", "wife"), ("halves", "half"), ("calves", "calf"), ("species", "species"),
        ("series", "series"), ("data", "datum"), ("criteria", "criterion"),
        ("phenomena", "phenomenon"), ("cattle", "cattle"), ("sheep", "sheep"),
        ("deer", "deer"), ("fish", "fish"), ("news", "news"),
    ]
    .into_iter()
    .collect()
});

pub static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "large", "small", "big", "great", "new", "old", "good", "bad", "high", "low", "long",
        "short", "young", "early", "late", "major", "minor", "main", "important", "common",
        "rare", "wild", "domestic", "modern", "ancient", "native", "social", "human",
        "public", "private", "national", "international", "local", "global", "many", "same",
        "different", "similar", "other", "various", "several", "first", "second", "third",
        "last", "next", "best", "better", "worse", "worst", "able", "free", "full", "white",
        "black", "red", "brown", "green", "blue", "strong", "weak", "heavy", "light", "true",
        "false", "real", "certain", "specific", "own", "whole", "single", "double",
        "northern", "southern", "eastern", "western", "central", "primary", "popular",
        "famous", "hot", "cold", "warm", "dry", "wet", "rich", "poor", "easy", "hard",
    ])
});

pub static MONTHS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december",
    ])
});

pub static NUMBER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand",
        "million", "billion", "dozen",
    ])
});

/// Abbreviations whose trailing period does not end a sentence
pub static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "no", "vs", "etc", "al",
        "fig", "figs", "vol", "ed", "eds", "inc", "ltd", "co", "corp", "dept", "univ", "jan",
        "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "approx",
        "ca", "cf", "ref", "gen", "gov", "sen", "rep", "rev", "capt", "col", "lt", "sgt",
    ])
});

pub static PERSON_TITLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "mr", "mrs", "ms", "dr", "prof", "sir", "lady", "lord", "king", "queen", "prince",
        "princess", "president", "senator", "governor", "general", "captain", "pope",
        "saint", "emperor", "duke",
    ])
});

pub static ORG_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "inc", "corp", "corporation", "company", "co", "ltd", "llc", "university", "college",
        "institute", "association", "society", "foundation", "agency", "council", "committee",
        "organization", "organisation", "party", "bank", "group", "school", "museum",
        "academy", "department", "ministry", "army", "navy", "club", "union", "church",
        "league", "federation", "commission", "service", "press", "times", "journal",
    ])
});

pub static EVENT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&["war", "revolution", "olympics", "games", "battle", "crisis", "festival", "cup"])
});

pub static GPE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "africa", "america", "asia", "europe", "oceania", "antarctica", "australia",
        "argentina", "austria", "belgium", "brazil", "canada", "chile", "china", "colombia",
        "cuba", "denmark", "egypt", "england", "ethiopia", "finland", "france", "germany",
        "greece", "india", "indonesia", "iran", "iraq", "ireland", "israel", "italy",
        "japan", "kenya", "korea", "mexico", "mongolia", "morocco", "nepal", "netherlands",
        "nigeria", "norway", "pakistan", "peru", "poland", "portugal", "russia", "scotland",
        "spain", "sweden", "switzerland", "syria", "thailand", "turkey", "ukraine", "vietnam",
        "wales", "britain", "london", "paris", "berlin", "rome", "madrid", "moscow", "tokyo",
        "beijing", "delhi", "cairo", "sydney", "chicago", "boston", "texas", "california",
        "florida", "york", "washington", "scandinavia", "mesopotamia", "anatolia",
    ])
});

pub static NORP_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "american", "british", "english", "french", "german", "italian", "spanish",
        "chinese", "japanese", "indian", "russian", "greek", "roman", "european", "african",
        "asian", "christian", "muslim", "jewish", "hindu", "buddhist", "catholic",
        "protestant", "republican", "democrat", "democratic", "australian", "canadian",
        "mexican", "egyptian", "irish", "scottish", "dutch", "swedish", "norwegian",
    ])
});

pub static FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "john", "james", "robert", "michael", "william", "david", "richard", "charles",
        "joseph", "thomas", "george", "henry", "edward", "peter", "paul", "mark", "mary",
        "elizabeth", "anne", "jane", "sarah", "margaret", "alice", "marie", "albert",
        "isaac", "charlotte", "victoria", "louis", "frederick", "carl", "karl", "ludwig",
        "alexander", "benjamin", "abraham", "martin", "elon", "bill", "steve",
    ])
});

/// Connectors allowed inside a multi-word proper name
pub static NAME_CONNECTORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["of", "de", "da", "del", "van", "von", "la", "le", "for", "&"]));

pub fn is_stop(lower: &str) -> bool {
    STOP_WORDS.contains(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert!(is_stop("the"));
        assert!(is_stop("be"));
        assert!(!is_stop("cattle"));
        assert_eq!(AUXILIARIES.get("were"), Some(&"be"));
        assert_eq!(IRREGULAR_VERBS.get("born"), Some(&"bear"));
        assert!(VERBS.contains("eat"));
        assert!(GPE_NAMES.contains("france"));
    }
}
