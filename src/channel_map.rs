//! Category vocabularies for one-hot encoding.

use crate::error::{Result, TensorMapError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from category name to a dense channel index.
///
/// Indices cover `[0, N)` exactly once, so a channel map of `N` entries
/// always describes a one-hot vector of length `N`.
///
/// # Example
/// ```
/// use tensormap::ChannelMap;
///
/// let map = ChannelMap::new([("NOT_SNP", 0), ("NOT_INDEL", 1), ("SNP", 2), ("INDEL", 3)]).unwrap();
/// assert_eq!(map.len(), 4);
/// assert_eq!(map.index_of("SNP"), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, usize>", into = "BTreeMap<String, usize>")]
pub struct ChannelMap {
    channels: BTreeMap<String, usize>,
}

impl ChannelMap {
    /// Build a channel map, rejecting empty, duplicated, or sparse indices.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut channels = BTreeMap::new();
        for (name, index) in entries {
            let name = name.into();
            if channels.insert(name.clone(), index).is_some() {
                return Err(TensorMapError::InvalidChannelMap(format!(
                    "channel {name:?} listed twice"
                )));
            }
        }
        Self::from_map(channels)
    }

    fn from_map(channels: BTreeMap<String, usize>) -> Result<Self> {
        let n = channels.len();
        if n == 0 {
            return Err(TensorMapError::InvalidChannelMap(
                "channel map must not be empty".to_string(),
            ));
        }

        let mut seen = vec![false; n];
        for (name, &index) in &channels {
            if index >= n {
                return Err(TensorMapError::InvalidChannelMap(format!(
                    "index {index} of channel {name:?} is outside [0, {n})"
                )));
            }
            if seen[index] {
                return Err(TensorMapError::InvalidChannelMap(format!(
                    "index {index} is shared by more than one channel"
                )));
            }
            seen[index] = true;
        }

        Ok(Self { channels })
    }

    /// Number of channels, which is also the one-hot vector length.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always `false` for a constructed map; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Index of a category, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.channels.get(name).copied()
    }

    /// Iterate `(name, index)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.channels.iter().map(|(name, &index)| (name.as_str(), index))
    }

    /// Category names ordered by channel index.
    pub fn names_by_index(&self) -> Vec<&str> {
        let mut names = vec![""; self.len()];
        for (name, index) in self.iter() {
            names[index] = name;
        }
        names
    }
}

impl TryFrom<BTreeMap<String, usize>> for ChannelMap {
    type Error = TensorMapError;

    fn try_from(channels: BTreeMap<String, usize>) -> Result<Self> {
        Self::from_map(channels)
    }
}

impl From<ChannelMap> for BTreeMap<String, usize> {
    fn from(map: ChannelMap) -> Self {
        map.channels
    }
}
