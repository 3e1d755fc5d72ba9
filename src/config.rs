//! Registry construction settings

/// Settings for building an [`ActionRegistry`](crate::ActionRegistry)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of distinct kinds to reserve room for up front
    pub initial_capacity: usize,
    /// Number of map shards; `None` lets the map pick from the CPU count
    pub shard_amount: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            shard_amount: None,
        }
    }
}

impl RegistryConfig {
    /// Set the initial capacity
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the shard count
    pub fn with_shard_amount(mut self, shard_amount: usize) -> Self {
        self.shard_amount = Some(shard_amount);
        self
    }

    /// Shard count to hand to the map, if a usable one was configured
    ///
    /// The map requires a power of two greater than one; anything else falls
    /// back to the default sharding.
    pub fn effective_shard_amount(&self) -> Option<usize> {
        self.shard_amount
            .filter(|&amount| amount > 1 && amount.is_power_of_two())
    }
}
