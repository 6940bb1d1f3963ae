// src/data.rs
//
// Output shapes of a lookup.
//
// - Entry:   one homograph (headword variant) with its pronunciation data
//            and senses grouped by part of speech.
// - Meaning: ordered label -> senses mapping. Keeps the position a label was
//            first inserted at; re-inserting a label replaces its senses.
// - Sense:   one definition with optional example and synonyms.

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Label used when a grammar block carries no part of speech.
pub const CROSS_REFERENCE_LABEL: &str = "crossReference";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Sense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
}

impl Sense {
    /// True when none of the three fields made it through extraction.
    pub fn is_blank(&self) -> bool {
        self.definition.is_none() && self.example.is_none() && self.synonyms.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Meaning {
    groups: Vec<(String, Vec<Sense>)>,
}

impl Meaning {
    pub fn new() -> Self { Self::default() }

    /// Assign `senses` under `label`. An existing label keeps its slot and
    /// loses its previous senses.
    pub fn assign(&mut self, label: &str, senses: Vec<Sense>) {
        match self.groups.iter_mut().find(|(l, _)| l == label) {
            Some((_, slot)) => *slot = senses,
            None => self.groups.push((s!(label), senses)),
        }
    }

    /// Drop every label whose sense list is empty.
    pub fn prune_empty(&mut self) {
        self.groups.retain(|(_, senses)| !senses.is_empty());
    }

    pub fn get(&self, label: &str) -> Option<&[Sense]> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, senses)| senses.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Sense])> {
        self.groups.iter().map(|(l, s)| (l.as_str(), s.as_slice()))
    }

    pub fn len(&self) -> usize { self.groups.len() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }
}

impl Serialize for Meaning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, senses) in &self.groups {
            map.serialize_entry(label, senses)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Audio file URL; serialized as `pronunciation`.
    #[serde(rename = "pronunciation", skip_serializing_if = "Option::is_none")]
    pub pronunciation_audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub meaning: Meaning,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sense(def: &str) -> Sense {
        Sense { definition: Some(s!(def)), ..Sense::default() }
    }

    #[test]
    fn assign_overwrites_in_place() {
        let mut m = Meaning::new();
        m.assign("noun", vec![sense("a")]);
        m.assign("verb", vec![sense("b")]);
        m.assign("noun", vec![sense("c"), sense("d")]);

        assert_eq!(m.labels().collect::<Vec<_>>(), vec!["noun", "verb"]);
        assert_eq!(m.get("noun").map(|s| s.len()), Some(2));
        assert_eq!(m.get("noun").unwrap()[0], sense("c"));
    }

    #[test]
    fn prune_only_removes_empty_lists() {
        let mut m = Meaning::new();
        m.assign("noun", vec![]);
        m.assign("verb", vec![Sense::default()]);
        m.prune_empty();
        assert_eq!(m.labels().collect::<Vec<_>>(), vec!["verb"]);
    }

    #[test]
    fn entry_serializes_with_wire_names_and_order() {
        let mut meaning = Meaning::new();
        meaning.assign("verb", vec![sense("move fast")]);
        meaning.assign("noun", vec![Sense::default()]);
        let entry = Entry {
            word: s!("run"),
            phonetic: None,
            pronunciation_audio_url: Some(s!("https://audio.example/run.mp3")),
            origin: None,
            meaning,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"word":"run","pronunciation":"https://audio.example/run.mp3","meaning":{"verb":[{"definition":"move fast"}],"noun":[{}]}}"#
        );
    }
}
