/// Source of the current date for anything rendered "as of now".
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}
