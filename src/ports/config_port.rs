//! Configuration access port trait.

/// Raw key lookup; typed parsing and validation live in the domain builders.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
}
