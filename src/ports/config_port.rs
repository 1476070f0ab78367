//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str) -> Option<i64>;
    fn get_double(&self, section: &str, key: &str) -> Option<f64>;
}
