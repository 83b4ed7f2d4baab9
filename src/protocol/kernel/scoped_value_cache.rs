use std::collections::HashMap;

use tasm_lib::prelude::Digest;

use super::side_effect::ContractAddress;
use super::side_effect::Scoped;

/// Groups scoped items by the value and contract address they refer to, so
/// that the items referring to a given side effect can be found without
/// scanning the whole collection.
///
/// Nothing is dropped or deduplicated. Items sharing a key are returned in
/// the order they were given.
#[derive(Debug, Clone)]
pub struct ScopedValueCache<'a, T> {
    cache: HashMap<(Digest, ContractAddress), Vec<&'a T>>,
    num_items: usize,
}

impl<'a, T: Scoped> ScopedValueCache<'a, T> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        let mut cache = HashMap::<_, Vec<&'a T>>::new();
        let mut num_items = 0;
        for item in items {
            cache
                .entry((item.value(), item.contract_address()))
                .or_default()
                .push(item);
            num_items += 1;
        }

        Self { cache, num_items }
    }

    /// The cached items that refer to the value of `item`, as emitted by the
    /// same contract.
    pub fn get<S: Scoped>(&self, item: &S) -> &[&'a T] {
        self.cache
            .get(&(item.value(), item.contract_address()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.num_items
    }

    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }
}
