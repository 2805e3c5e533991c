use crate::literal::Literal;
use log::debug;
use std::collections::HashMap;

/// Named parameters bound to the placeholders of a rule.
///
/// Entries keep their insertion order. Inserting a name that is already present replaces its
/// value in place, so merging the parameters of several specifications is last-write-wins.
/// Callers are responsible for giving distinct names to distinct parameters.
///
/// Two mappings are equal when they bind the same names to the same values, whatever the order.
#[derive(Clone, Debug, Default)]
pub struct Parameters {
    entries: Vec<(String, Literal)>,
    by_names: HashMap<String, usize>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Literal> {
        self.by_names
            .get(name)
            .map(|index| &self.entries[*index].1)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_names.contains_key(name)
    }

    /// Bind `name` to `value`, returning the value it replaced if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Literal>) -> Option<Literal> {
        let name = name.into();
        let value = value.into();
        match self.by_names.get(&name) {
            Some(&index) => {
                if self.entries[index].1 != value {
                    debug!(
                        "parameter '{name}' overwritten: {:?} -> {value:?}",
                        self.entries[index].1
                    );
                }
                Some(std::mem::replace(&mut self.entries[index].1, value))
            }
            None => {
                self.by_names.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Merge `other` into `self`; on a name collision the value from `other` wins.
    pub fn merge(&mut self, other: &Parameters) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Parameters {}

impl<K: Into<String>, V: Into<Literal>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameters = Self::new();
        parameters.extend(iter);
        parameters
    }
}

impl<K: Into<String>, V: Into<Literal>> Extend<(K, V)> for Parameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<Literal>, const N: usize> From<[(K, V); N]> for Parameters {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Literal);
    type IntoIter = std::vec::IntoIter<(String, Literal)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Parameters {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_empty() {
        let parameters = Parameters::new();

        assert!(parameters.is_empty());
        assert_eq!(None, parameters.get("foo"));
    }

    #[test]
    fn can_get_an_inserted_parameter() {
        let mut parameters = Parameters::new();

        let previous = parameters.insert("foo", "param a");

        assert_eq!(None, previous);
        assert_eq!(Some(&Literal::from("param a")), parameters.get("foo"));
        assert!(parameters.contains("foo"));
    }

    #[test]
    fn keep_the_insertion_order() {
        let parameters = Parameters::from([("b", 1), ("a", 2), ("c", 3)]);

        assert_eq!(vec!["b", "a", "c"], parameters.names().collect::<Vec<_>>());
    }

    #[test]
    fn overwrite_a_parameter_in_place() {
        let mut parameters = Parameters::from([("a", 1), ("b", 2)]);

        let previous = parameters.insert("a", 3);

        assert_eq!(Some(Literal::from(1)), previous);
        assert_eq!(
            vec![("a", &Literal::from(3)), ("b", &Literal::from(2))],
            parameters.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn let_the_merged_parameters_win_on_collision() {
        let mut parameters = Parameters::from([("foo", "param a"), ("shared", "left")]);
        let other = Parameters::from([("bar", "param b"), ("shared", "right")]);

        parameters.merge(&other);

        assert_eq!(
            Parameters::from([
                ("foo", "param a"),
                ("shared", "right"),
                ("bar", "param b")
            ]),
            parameters
        );
    }

    #[test]
    fn compare_equal_regardless_of_the_insertion_order() {
        let parameters = Parameters::from([("a", 1), ("b", 2)]);

        assert_eq!(parameters, Parameters::from([("b", 2), ("a", 1)]));
        assert_ne!(parameters, Parameters::from([("a", 1), ("b", 3)]));
        assert_ne!(parameters, Parameters::from([("a", 1)]));
        assert_ne!(parameters, Parameters::from([("a", 1), ("b", 2), ("c", 3)]));
    }

    #[test]
    fn find_every_parameter_of_a_large_mapping() {
        let parameters: Parameters = (0..1000).map(|index| (format!("p{index}"), index)).collect();

        assert_eq!(1000, parameters.len());
        assert_eq!(Some(&Literal::from(999)), parameters.get("p999"));
        assert_eq!(Some("p0"), parameters.names().next());
    }

    #[test]
    fn can_consume_the_parameters() {
        let parameters = Parameters::from([("foo", 1)]);

        let entries: Vec<_> = parameters.into_iter().collect();

        assert_eq!(vec![("foo".to_string(), Literal::from(1))], entries);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_as_a_json_object() {
        let parameters = Parameters::from([("gender", "F"), ("points", "3000")]);

        assert_eq!(
            serde_json::json!({"gender": "F", "points": "3000"}),
            serde_json::to_value(&parameters).unwrap()
        );
    }
}
