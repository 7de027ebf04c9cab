pub mod logging;
pub mod paths;

#[cfg(test)]
pub mod testing;
