//! Parse results
//!
//! A [`State`] maps names to values in the order they were first bound. Field
//! steps bind scalars; group steps bind a list holding one nested state per
//! repetition.

use indexmap::IndexMap;
use serde::Serialize;

/// A value bound in a [`State`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<State>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[State]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<State>> for Value {
    fn from(items: Vec<State>) -> Self {
        Value::List(items)
    }
}

/// Names bound while parsing, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct State {
    entries: IndexMap<String, Value>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier value but keeping its position.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_scalar)
    }

    pub fn list(&self, name: &str) -> Option<&[State]> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for State
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = State::new();
        for (name, value) in iter {
            state.bind(name, value);
        }
        state
    }
}
