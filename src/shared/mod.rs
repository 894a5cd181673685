pub mod constants;
pub mod slug;
pub mod timestamps;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod memory_store;
#[cfg(test)]
pub mod test_helpers;
