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

//! Shallow dependency parser
//!
//! Chunks noun phrases and verb groups, decides the clause role of every
//! verb group and then attaches subjects, objects, prepositional phrases
//! and whatever is left. Every token ends up with exactly one head and the
//! sentence with exactly one root.

use super::lexicon::{IRREGULAR_VERBS, NEGATIONS, POSSESSIVES, RELATIVE_PRONOUNS};
use super::{Dep, Pos, Token};

/// Verbs that take an adjective complement like a copula does
const LINKING_VERBS: &[&str] = &["become", "remain", "seem", "appear", "stay", "grow"];

#[derive(Debug, Clone, Copy)]
struct Chunk {
    start: usize,
    /// Inclusive; always the head
    end: usize,
    head: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Main,
    Xcomp,
    /// Index of the relative pronoun
    Relcl(usize),
    /// Index of the subordinating conjunction
    Advcl(usize),
    Acl,
}

#[derive(Debug, Clone, Copy)]
struct Group {
    start: usize,
    end: usize,
    head: usize,
    passive: bool,
    copula: bool,
    role: Role,
}

type Arc = Option<(usize, Dep)>;

/// Assign `dep` and `head` to every token of one sentence
pub fn parse(tokens: &mut [Token]) {
    if tokens.is_empty() {
        return;
    }
    let (root, arcs) = ParseState::new(tokens).run();
    for (i, tok) in tokens.iter_mut().enumerate() {
        let (head, dep) = if i == root {
            (i, Dep::Root)
        } else {
            arcs[i].unwrap_or((root, Dep::Dep))
        };
        tok.head = head;
        tok.dep = dep;
    }
    break_cycles(tokens, root);
}

/// Reattach any token whose head chain does not reach the root
fn break_cycles(tokens: &mut [Token], root: usize) {
    let n = tokens.len();
    for i in 0..n {
        let mut node = i;
        let mut steps = 0;
        while node != root && steps <= n {
            node = tokens[node].head;
            steps += 1;
        }
        if node != root {
            tokens[i].head = root;
            tokens[i].dep = Dep::Dep;
        }
    }
}

fn is_noun_like(tok: &Token) -> bool {
    matches!(tok.pos, Pos::Noun | Pos::Propn | Pos::Num)
}

fn is_possessive_clitic(tok: &Token) -> bool {
    tok.pos == Pos::Part && matches!(tok.lower.as_str(), "'s" | "’s")
}

fn is_negation(tok: &Token) -> bool {
    tok.pos == Pos::Part && NEGATIONS.contains(tok.lower.as_str())
}

fn is_relative(tok: &Token) -> bool {
    tok.pos == Pos::Pron && RELATIVE_PRONOUNS.contains(tok.lower.as_str())
}

fn is_participle(tok: &Token) -> bool {
    tok.lower.ends_with("ed") || tok.lower.ends_with("en") || IRREGULAR_VERBS.contains_key(tok.lower.as_str())
}

fn is_year(tok: &Token) -> bool {
    tok.text.len() == 4
        && tok.text.chars().all(|c| c.is_ascii_digit())
        && tok.text.starts_with(['1', '2'])
}

struct ParseState<'a> {
    tokens: &'a [Token],
    arcs: Vec<Arc>,
    chunks: Vec<Chunk>,
    groups: Vec<Group>,
    chunk_of: Vec<Option<usize>>,
    group_of: Vec<Option<usize>>,
    root: Option<usize>,
}

impl<'a> ParseState<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        let n = tokens.len();
        let mut state = Self {
            tokens,
            arcs: vec![None; n],
            chunks: Vec::new(),
            groups: Vec::new(),
            chunk_of: vec![None; n],
            group_of: vec![None; n],
            root: None,
        };
        state.chunk_noun_phrases();
        state.collect_verb_groups();
        state
    }

    fn run(mut self) -> (usize, Vec<Arc>) {
        let root = self.assign_roles();
        self.root = Some(root);
        self.attach_objects();
        self.coordinate_noun_phrases();
        self.attach_subjects();
        self.attach_clauses(root);
        self.attach_prepositions(root);
        self.attach_leftovers(root);
        (root, self.arcs)
    }

    fn attach(&mut self, child: usize, head: usize, dep: Dep) {
        if child != head && Some(child) != self.root && self.arcs[child].is_none() {
            self.arcs[child] = Some((head, dep));
        }
    }

    fn is_possessive(&self, i: usize) -> bool {
        let tok = &self.tokens[i];
        if tok.pos != Pos::Pron || !POSSESSIVES.contains(tok.lower.as_str()) {
            return false;
        }
        // "her" is possessive only in front of a nominal
        tok.lower != "her"
            || self
                .tokens
                .get(i + 1)
                .is_some_and(|n| matches!(n.pos, Pos::Adj | Pos::Noun | Pos::Propn))
    }

    // ---- chunking ----

    fn chunk_noun_phrases(&mut self) {
        let mut i = 0;
        while i < self.tokens.len() {
            match self.chunk_at(i) {
                Some(chunk) => {
                    let id = self.chunks.len();
                    for k in chunk.start..=chunk.end {
                        self.chunk_of[k] = Some(id);
                    }
                    self.chunks.push(chunk);
                    self.link_chunk(chunk);
                    i = chunk.end + 1;
                }
                None => i += 1,
            }
        }
    }

    fn chunk_at(&self, i: usize) -> Option<Chunk> {
        let t = self.tokens;
        let first = &t[i];
        if first.pos == Pos::Pron && !self.is_possessive(i) {
            return Some(Chunk {
                start: i,
                end: i,
                head: i,
            });
        }
        let opens = matches!(
            first.pos,
            Pos::Det | Pos::Num | Pos::Adj | Pos::Noun | Pos::Propn
        ) || self.is_possessive(i);
        if !opens {
            return None;
        }

        let mut last_nominal = is_noun_like(first).then_some(i);
        let mut j = i + 1;
        while j < t.len() {
            let tok = &t[j];
            let continues = if is_possessive_clitic(tok) {
                last_nominal == Some(j - 1)
                    && t.get(j + 1).is_some_and(|n| {
                        matches!(n.pos, Pos::Adj | Pos::Noun | Pos::Propn | Pos::Num)
                    })
            } else {
                matches!(tok.pos, Pos::Adj | Pos::Noun | Pos::Propn | Pos::Num)
            };
            if !continues {
                break;
            }
            if is_noun_like(tok) {
                last_nominal = Some(j);
            }
            j += 1;
        }

        last_nominal.map(|head| Chunk {
            start: i,
            end: head,
            head,
        })
    }

    /// Internal arcs of a chunk; `'s` splits it into possessor segments
    fn link_chunk(&mut self, chunk: Chunk) {
        let mut seg_start = chunk.start;
        let mut possessors = Vec::new();
        for k in chunk.start..=chunk.end {
            if is_possessive_clitic(&self.tokens[k]) && k > seg_start {
                let possessor = k - 1;
                self.link_segment(seg_start, possessor);
                self.attach(k, possessor, Dep::Case);
                possessors.push(possessor);
                seg_start = k + 1;
            }
        }
        self.link_segment(seg_start, chunk.head);
        for possessor in possessors {
            self.attach(possessor, chunk.head, Dep::Poss);
        }
    }

    fn link_segment(&mut self, start: usize, head: usize) {
        for k in start..head {
            let dep = match self.tokens[k].pos {
                Pos::Det => Dep::Det,
                Pos::Pron => Dep::Poss,
                Pos::Num => Dep::Nummod,
                Pos::Adj => Dep::Amod,
                _ => Dep::Compound,
            };
            self.attach(k, head, dep);
        }
    }

    fn collect_verb_groups(&mut self) {
        let t = self.tokens;
        let mut i = 0;
        while i < t.len() {
            if self.chunk_of[i].is_some() || !t[i].pos.is_verbal() {
                i += 1;
                continue;
            }

            let start = i;
            let mut last_aux = None;
            let mut verb = None;
            let mut j = i;
            while j < t.len() && self.chunk_of[j].is_none() {
                match t[j].pos {
                    Pos::Aux => last_aux = Some(j),
                    Pos::Adv => {}
                    Pos::Part if is_negation(&t[j]) => {}
                    Pos::Verb => {
                        verb = Some(j);
                        break;
                    }
                    _ => break,
                }
                j += 1;
            }
            let Some(head) = verb.or(last_aux) else {
                i += 1;
                continue;
            };

            let passive = verb.is_some()
                && is_participle(&t[head])
                && (start..head).any(|k| t[k].pos == Pos::Aux && t[k].lemma == "be");
            let id = self.groups.len();
            for k in start..=head {
                self.group_of[k] = Some(id);
            }
            self.groups.push(Group {
                start,
                end: head,
                head,
                passive,
                copula: verb.is_none(),
                role: Role::Main,
            });

            for k in start..head {
                let dep = match t[k].pos {
                    Pos::Aux if passive && t[k].lemma == "be" => Dep::Auxpass,
                    Pos::Aux => Dep::Aux,
                    Pos::Part => Dep::Neg,
                    _ => Dep::Advmod,
                };
                self.attach(k, head, dep);
            }
            i = head + 1;
        }
    }

    // ---- clause structure ----

    /// Decide each group's role and return the sentence root
    fn assign_roles(&mut self) -> usize {
        let t = self.tokens;
        for g in 0..self.groups.len() {
            let group = self.groups[g];
            let region_start = self.region_start(g);
            let before = group.start.checked_sub(1).map(|b| (b, &t[b]));
            let role = match before {
                Some((_, tok)) if tok.pos == Pos::Part && tok.lower == "to" => Role::Xcomp,
                Some((b, tok)) if is_relative(tok) => Role::Relcl(b),
                _ => {
                    let head = &t[group.head];
                    if let Some(s) = (region_start..group.start).find(|&k| t[k].pos == Pos::Sconj) {
                        Role::Advcl(s)
                    } else if g > 0
                        && !group.copula
                        && group.start == group.head
                        && (is_participle(head) || head.lower.ends_with("ing"))
                        && self.subject_candidate(region_start, group.start).is_none()
                    {
                        Role::Acl
                    } else {
                        Role::Main
                    }
                }
            };
            self.groups[g].role = role;
        }

        if let Some(g) = self.groups.iter().position(|g| g.role == Role::Main) {
            return self.groups[g].head;
        }
        if let Some(first) = self.groups.first_mut() {
            first.role = Role::Main;
            return first.head;
        }
        self.chunks
            .first()
            .map(|c| c.head)
            .or_else(|| self.tokens.iter().position(|t| !t.is_punct()))
            .unwrap_or(0)
    }

    fn region_start(&self, g: usize) -> usize {
        g.checked_sub(1).map(|p| self.groups[p].end + 1).unwrap_or(0)
    }

    /// Rightmost free noun phrase in `[from, to)` that is not a
    /// prepositional object
    fn subject_candidate(&self, from: usize, to: usize) -> Option<usize> {
        self.chunks
            .iter()
            .rev()
            .filter(|c| c.head >= from && c.head < to)
            .filter(|c| self.arcs[c.head].is_none())
            .find(|c| c.start == 0 || self.tokens[c.start - 1].pos != Pos::Adp)
            .map(|c| c.head)
    }

    /// Search for a subject, looking past relative and participial clauses
    /// that sit between the subject and its verb
    fn find_subject(&self, g: usize) -> Option<usize> {
        let mut to = self.groups[g].start;
        let mut k = g;
        loop {
            if let Some(subject) = self.subject_candidate(self.region_start(k), to) {
                return Some(subject);
            }
            let prev = k.checked_sub(1)?;
            if !matches!(self.groups[prev].role, Role::Relcl(_) | Role::Acl) {
                return None;
            }
            to = self.groups[prev].start;
            k = prev;
        }
    }

    fn attach_objects(&mut self) {
        let t = self.tokens;
        for g in 0..self.groups.len() {
            let group = self.groups[g];
            let mut k = group.end + 1;
            while k < t.len() && t[k].pos == Pos::Adv && self.chunk_of[k].is_none() {
                k += 1;
            }
            if k >= t.len() {
                continue;
            }
            if let Some(c) = self.chunk_of[k] {
                let chunk = self.chunks[c];
                if chunk.start == k && !is_relative(&t[chunk.head]) {
                    let dep = if group.copula { Dep::Attr } else { Dep::Dobj };
                    self.attach(chunk.head, group.head, dep);
                }
            } else if t[k].pos == Pos::Adj
                && (group.copula || LINKING_VERBS.contains(&t[group.head].lemma.as_str()))
            {
                self.attach(k, group.head, Dep::Acomp);
            }
        }
    }

    /// `A and B`, `A, B and C` noun-phrase coordination. A coordinator is not
    /// treated as joining noun phrases when it separates two clauses.
    fn coordinate_noun_phrases(&mut self) {
        let t = self.tokens;
        for i in 1..t.len().saturating_sub(1) {
            let comma = t[i].lower == ",";
            if !(t[i].pos == Pos::Cconj || comma) || self.arcs[i].is_some() {
                continue;
            }
            let (Some(a), Some(b)) = (self.chunk_of[i - 1], self.chunk_of[i + 1]) else {
                continue;
            };
            let (a, b) = (self.chunks[a], self.chunks[b]);
            if b.start != i + 1 || self.arcs[b.head].is_some() {
                continue;
            }
            let clause_follows = self.group_of.get(b.end + 1).copied().flatten().is_some();
            let clause_precedes = self.groups.iter().any(|g| g.end < a.start);
            if clause_follows && clause_precedes {
                continue;
            }
            if comma {
                let list_continues = t
                    .get(b.end + 1)
                    .is_some_and(|n| n.pos == Pos::Cconj || n.lower == ",");
                if !list_continues {
                    continue;
                }
            }
            self.attach(b.head, a.head, Dep::Conj);
            if !comma {
                self.attach(i, a.head, Dep::Cc);
            }
        }
    }

    fn attach_subjects(&mut self) {
        for g in 0..self.groups.len() {
            let group = self.groups[g];
            let label = if group.passive {
                Dep::Nsubjpass
            } else {
                Dep::Nsubj
            };
            match group.role {
                Role::Relcl(pronoun) => self.attach(pronoun, group.head, label),
                Role::Xcomp | Role::Acl => {}
                Role::Main | Role::Advcl(_) => {
                    if let Some(subject) = self.find_subject(g) {
                        self.attach(subject, group.head, label);
                    }
                }
            }
        }
    }

    fn nearest_chunk_head_before(&self, i: usize) -> Option<usize> {
        self.chunks.iter().rev().find(|c| c.end < i).map(|c| c.head)
    }

    fn attach_clauses(&mut self, root: usize) {
        for g in 0..self.groups.len() {
            let group = self.groups[g];
            if group.head == root {
                continue;
            }
            match group.role {
                Role::Main => self.attach(group.head, root, Dep::Conj),
                Role::Xcomp => {
                    let governor = g.checked_sub(1).map(|p| self.groups[p].head).unwrap_or(root);
                    self.attach(group.head, governor, Dep::Xcomp);
                    self.attach(group.start - 1, group.head, Dep::Aux);
                }
                Role::Relcl(pronoun) => {
                    let noun = self.nearest_chunk_head_before(pronoun).unwrap_or(root);
                    self.attach(group.head, noun, Dep::Relcl);
                }
                Role::Advcl(mark) => {
                    self.attach(group.head, root, Dep::Advcl);
                    self.attach(mark, group.head, Dep::Mark);
                }
                Role::Acl => {
                    let noun = self.nearest_chunk_head_before(group.start).unwrap_or(root);
                    self.attach(group.head, noun, Dep::Acl);
                }
            }
        }
    }

    fn attach_prepositions(&mut self, root: usize) {
        let t = self.tokens;
        for i in 0..t.len() {
            if t[i].pos != Pos::Adp || self.arcs[i].is_some() || i == root {
                continue;
            }
            let pobj = self
                .chunk_of
                .get(i + 1)
                .copied()
                .flatten()
                .map(|c| self.chunks[c])
                .filter(|c| c.start == i + 1 && self.arcs[c.head].is_none())
                .map(|c| c.head);
            if let Some(p) = pobj {
                self.attach(p, i, Dep::Pobj);
            }
            let governor = self.prep_governor(i, pobj).unwrap_or(root);
            self.attach(i, governor, Dep::Prep);
        }
    }

    /// `of` modifies the noun before it, a year modifies the verb, anything
    /// else the nearest preceding noun or verb
    fn prep_governor(&self, i: usize, pobj: Option<usize>) -> Option<usize> {
        let t = self.tokens;
        if t[i].lower == "of" {
            if let Some(c) = i.checked_sub(1).and_then(|p| self.chunk_of[p]) {
                return Some(self.chunks[c].head);
            }
        }
        if pobj.is_some_and(|p| is_year(&t[p])) {
            if let Some(g) = self.groups.iter().rev().find(|g| g.end < i) {
                return Some(g.head);
            }
        }
        (0..i).rev().find_map(|k| {
            if let Some(c) = self.chunk_of[k] {
                Some(self.chunks[c].head)
            } else if let Some(g) = self.group_of[k] {
                Some(self.groups[g].head)
            } else if let Some((head, Dep::Acomp)) = self.arcs[k] {
                Some(head)
            } else {
                None
            }
        })
    }

    fn nearest_group_head(&self, i: usize) -> Option<usize> {
        self.groups
            .iter()
            .min_by_key(|g| g.head.abs_diff(i))
            .map(|g| g.head)
    }

    fn next_group_head(&self, i: usize) -> Option<usize> {
        self.groups.iter().find(|g| g.start > i).map(|g| g.head)
    }

    fn attach_leftovers(&mut self, root: usize) {
        let t = self.tokens;
        for i in 0..t.len() {
            if i == root || self.arcs[i].is_some() {
                continue;
            }
            let tok = &t[i];
            let (head, dep) = match tok.pos {
                Pos::Punct => (root, Dep::Punct),
                Pos::Cconj => (root, Dep::Cc),
                Pos::Sconj => (self.next_group_head(i).unwrap_or(root), Dep::Mark),
                Pos::Adv => (self.nearest_group_head(i).unwrap_or(root), Dep::Advmod),
                Pos::Part if is_negation(tok) => {
                    (self.nearest_group_head(i).unwrap_or(root), Dep::Neg)
                }
                Pos::Part if tok.lower == "to" => {
                    (self.next_group_head(i).unwrap_or(root), Dep::Aux)
                }
                Pos::Adj => match i.checked_sub(1).and_then(|p| self.chunk_of[p]) {
                    Some(c) => (self.chunks[c].head, Dep::Amod),
                    None => (root, Dep::Dep),
                },
                _ => (root, Dep::Dep),
            };
            self.attach(i, head, dep);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::nlp::{Dep, Pipeline, Sentence};

    fn parse(text: &str) -> Sentence {
        Pipeline::new().parse_sentence(0, text)
    }

    fn arc(sent: &Sentence, word: &str) -> (Dep, String) {
        let tok = sent.tokens.iter().find(|t| t.text == word).unwrap();
        (tok.dep, sent.tokens[tok.head].text.clone())
    }

    #[test]
    fn test_transitive_clause() {
        let s = parse("The domestic dog eats meat.");
        assert_eq!(arc(&s, "eats").0, Dep::Root);
        assert_eq!(arc(&s, "dog"), (Dep::Nsubj, "eats".to_string()));
        assert_eq!(arc(&s, "meat"), (Dep::Dobj, "eats".to_string()));
        assert_eq!(arc(&s, "The"), (Dep::Det, "dog".to_string()));
        assert_eq!(arc(&s, "domestic"), (Dep::Amod, "dog".to_string()));
    }

    #[test]
    fn test_copula() {
        let s = parse("Cattle are herbivores.");
        assert_eq!(arc(&s, "are").0, Dep::Root);
        assert_eq!(arc(&s, "Cattle"), (Dep::Nsubj, "are".to_string()));
        assert_eq!(arc(&s, "herbivores"), (Dep::Attr, "are".to_string()));
    }

    #[test]
    fn test_passive_with_prepositional_object() {
        let s = parse("Paris is located in France.");
        assert_eq!(arc(&s, "located").0, Dep::Root);
        assert_eq!(arc(&s, "Paris"), (Dep::Nsubjpass, "located".to_string()));
        assert_eq!(arc(&s, "is"), (Dep::Auxpass, "located".to_string()));
        assert_eq!(arc(&s, "in"), (Dep::Prep, "located".to_string()));
        assert_eq!(arc(&s, "France"), (Dep::Pobj, "in".to_string()));
    }

    #[test]
    fn test_of_attaches_to_noun() {
        let s = parse("The milk of cows is nutritious.");
        assert_eq!(arc(&s, "of"), (Dep::Prep, "milk".to_string()));
        assert_eq!(arc(&s, "cows"), (Dep::Pobj, "of".to_string()));
        assert_eq!(arc(&s, "milk"), (Dep::Nsubj, "is".to_string()));
    }

    #[test]
    fn test_relative_clause_subject() {
        let s = parse("Cattle, which eat grass, are herbivores.");
        assert_eq!(arc(&s, "are").0, Dep::Root);
        assert_eq!(arc(&s, "Cattle"), (Dep::Nsubj, "are".to_string()));
        assert_eq!(arc(&s, "which"), (Dep::Nsubj, "eat".to_string()));
        assert_eq!(arc(&s, "eat"), (Dep::Relcl, "Cattle".to_string()));
        assert_eq!(arc(&s, "grass"), (Dep::Dobj, "eat".to_string()));
    }

    #[test]
    fn test_coordinated_clauses() {
        let s = parse("Dogs eat meat and cats eat fish.");
        let eats: Vec<_> = s.tokens.iter().filter(|t| t.text == "eat").collect();
        assert_eq!(eats[0].dep, Dep::Root);
        assert_eq!(eats[1].dep, Dep::Conj);
        assert_eq!(arc(&s, "cats"), (Dep::Nsubj, "eat".to_string()));
        assert_eq!(arc(&s, "meat").0, Dep::Dobj);
        assert_eq!(arc(&s, "fish").0, Dep::Dobj);
    }

    #[test]
    fn test_every_token_reaches_root() {
        for text in [
            "In 1990, the herd of wild cattle that roamed Scotland was studied by Dr. Smith.",
            "## History",
            "and , of the",
        ] {
            let s = parse(text);
            let root = s.tokens.iter().filter(|t| t.dep == Dep::Root).count();
            assert_eq!(root, 1, "{}", text);
            for tok in &s.tokens {
                let mut node = tok.index;
                for _ in 0..=s.tokens.len() {
                    node = s.tokens[node].head;
                }
                assert_eq!(s.tokens[node].dep, Dep::Root, "{}", text);
            }
        }
    }
}
